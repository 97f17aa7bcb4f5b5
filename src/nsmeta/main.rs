//! # nsmeta CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch, JSON output
//! and exit codes all live in `cli/`. This file only hands the exit code from
//! `cli::run()` back to the process.
//!
//! ```text
//! nsmeta [--env <name>] list-records
//! nsmeta [--env <name>] get-record <record_key>
//! nsmeta [--env <name>] list-fields <record_key>
//! nsmeta [--env <name>] find-field <field_id>
//! nsmeta [--env <name>] suggest-suiteql <record_key> --fields <f1,f2,...>
//! ```

mod cli;

fn main() -> std::process::ExitCode {
    cli::run()
}
