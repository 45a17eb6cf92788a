use std::io;

use crate::output::Report;

/// Write one CSV row per seller to stdout, in rank order.
pub fn print_csv(report: &Report) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record([
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ]);

    for seller in &report.result {
        let top: Vec<String> = seller
            .top_products
            .iter()
            .map(|p| format!("{}:{}", p.sku, p.quantity))
            .collect();
        let revenue = seller.revenue.to_string();
        let profit = seller.profit.to_string();
        let sales_count = seller.sales_count.to_string();
        let bonus = seller.bonus.to_string();
        let top = top.join("; ");
        let _ = wtr.write_record([
            seller.seller_id.as_str(),
            seller.name.as_str(),
            revenue.as_str(),
            profit.as_str(),
            sales_count.as_str(),
            bonus.as_str(),
            top.as_str(),
        ]);
    }

    let _ = wtr.flush();
}
