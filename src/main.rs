//! student-api entry point
//!
//! Parses arguments and dispatches through `cli::run`; errors are printed
//! to stderr and end the process with exit code 1.

use student_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
