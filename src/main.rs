//! `ticketdesk` (td) - support ticket store
//!
//! A thin command-line caller over `ticket-lib`: create, show, list,
//! search, update and delete tickets kept in a JSONL file.

use ticketdesk::{exit_code, run};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}
