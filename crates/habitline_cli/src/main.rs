//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitline_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use habitline_core::db::migrations::latest_version;
use habitline_core::db::open_db_in_memory;

fn main() {
    println!("habitline_core version={}", habitline_core::core_version());

    match open_db_in_memory() {
        Ok(_) => println!("habitline_core sqlite=ok schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("habitline_core sqlite=error {err}");
            std::process::exit(1);
        }
    }
}
