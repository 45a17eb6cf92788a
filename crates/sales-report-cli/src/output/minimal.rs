use crate::output::Report;

/// One line per seller, in rank order: name and rounded profit.
pub fn print_minimal(report: &Report) {
    for seller in &report.result {
        println!("{}\t{}", seller.name, seller.profit);
    }
}
