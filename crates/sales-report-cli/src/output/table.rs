use tabled::{builder::Builder, Table};

use crate::output::Report;

/// Render the ranking as a table, with warnings and methodology below.
pub fn print_table(report: &Report) {
    let mut builder = Builder::default();
    builder.push_record([
        "Rank", "Seller", "Name", "Revenue", "Profit", "Sales", "Bonus", "Top SKU",
    ]);

    for (rank, seller) in report.result.iter().enumerate() {
        let top_sku = seller
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());
        builder.push_record([
            (rank + 1).to_string(),
            seller.seller_id.clone(),
            seller.name.clone(),
            seller.revenue.to_string(),
            seller.profit.to_string(),
            seller.sales_count.to_string(),
            seller.bonus.to_string(),
            top_sku,
        ]);
    }

    println!("{}", Table::from(builder));

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &report.warnings {
            println!("  - {}", w);
        }
    }

    println!("\nMethodology: {}", report.methodology);
}
