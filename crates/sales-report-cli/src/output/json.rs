use crate::output::Report;

/// Pretty-print the full computation envelope as JSON.
pub fn print_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to serialise output: {}", e),
    }
}
