//! JSON output formatting.

use super::Report;

/// Format the report as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(report: &Report, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(report).expect("serialization cannot fail")
    }
}
