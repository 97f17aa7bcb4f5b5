//! # Rendering
//!
//! Every outcome, success or failure, is a pretty-printed (2-space indent)
//! JSON document on stdout.

use nsmeta::api::CmdResult;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorDocument<'a> {
    error: &'a str,
}

pub fn render_result(result: &CmdResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn render_error(message: &str) -> String {
    serde_json::to_string_pretty(&ErrorDocument { error: message })
        .unwrap_or_else(|_| String::from("{\n  \"error\": \"unknown error\"\n}"))
}

/// Reduce a clap error to its headline, without the `error: ` prefix and
/// the usage block that follows it.
pub fn clap_error_message(err: &clap::Error) -> String {
    let text = err.to_string();
    let first = text.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
