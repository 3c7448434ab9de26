//! Human-readable output formatting.

use super::Report;
use fdwkit_core::{Parameters, ProviderRegistry};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Format the report as human-readable text.
///
/// `colored` is decided by the caller for the stream the text is written to.
/// `quiet` drops the server and foreign table summary line.
pub fn format_text(report: &Report, quiet: bool, colored: bool) -> String {
    let mut out = String::new();

    write_header(&mut out, report, colored);

    if !report.valid {
        write_errors(&mut out, report, colored);
        return out;
    }

    match &report.plan {
        Some(plan) => {
            if !quiet {
                writeln!(
                    out,
                    "Server: {} | Foreign table: {}.{}",
                    plan.server_name, plan.schema_name, plan.foreign_table_name
                )
                .unwrap();
                writeln!(out).unwrap();
            }
            write_section(&mut out, "Setup", &plan.setup_sql(), colored);
            write_section(&mut out, "Teardown", &plan.teardown_sql(), colored);
        }
        None => {
            let status = "Parameters are valid";
            if colored {
                writeln!(out, "{}", status.green()).unwrap();
            } else {
                writeln!(out, "{status}").unwrap();
            }
        }
    }

    out
}

fn write_header(out: &mut String, report: &Report, colored: bool) {
    let title = format!("fdwkit: {}", report.provider);
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}

fn write_errors(out: &mut String, report: &Report, colored: bool) {
    for error in &report.errors {
        if colored {
            writeln!(out, "{} {error}", "error:".red().bold()).unwrap();
        } else {
            writeln!(out, "error: {error}").unwrap();
        }
    }
}

fn write_section(out: &mut String, title: &str, sql: &str, colored: bool) {
    if colored {
        writeln!(out, "{}", format!("{title}:").bold()).unwrap();
    } else {
        writeln!(out, "{title}:").unwrap();
    }
    for line in sql.lines() {
        writeln!(out, "  {line}").unwrap();
    }
    writeln!(out).unwrap();
}

/// List registered providers with their required and optional parameters.
pub fn format_providers(registry: &ProviderRegistry) -> String {
    let mut out = String::new();
    for name in registry.names() {
        let Ok(provider) = registry.build([("provider", name)].into_iter().collect::<Parameters>())
        else {
            continue;
        };
        writeln!(out, "{name}").unwrap();
        writeln!(out, "  required: {}", provider.required_parameters().join(", ")).unwrap();
        writeln!(out, "  optional: {}", provider.optional_parameters().join(", ")).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdwkit_core::{CommandPlan, ConnectionNames, ValidationIssue};

    #[test]
    fn test_text_lists_errors() {
        let report = Report::invalid(
            "postgres",
            vec![
                ValidationIssue::Missing(vec!["server".into()]),
                ValidationIssue::Invalid(vec!["colour".into()]),
            ],
        );
        let text = format_text(&report, false, false);
        assert!(text.starts_with("fdwkit: postgres\n"));
        assert!(text.contains("error: Missing required parameters server\n"));
        assert!(text.contains("error: Invalid parameters: colour\n"));
    }

    #[test]
    fn test_text_valid_without_plan() {
        let report = Report::valid("mysql", None);
        let text = format_text(&report, false, false);
        assert!(text.contains("Parameters are valid"));
    }

    fn planned_report() -> Report {
        let parameters: Parameters = [
            ("provider", "postgres"),
            ("server", "db"),
            ("database", "sales"),
            ("table", "orders"),
            ("username", "reader"),
        ]
        .into_iter()
        .collect();
        let provider = ProviderRegistry::with_builtin().build(parameters).unwrap();
        let plan = CommandPlan::build(provider.as_ref(), &ConnectionNames::default()).unwrap();
        Report::valid("postgres", Some(plan))
    }

    #[test]
    fn test_quiet_hides_summary_line_only() {
        let report = planned_report();
        let full = format_text(&report, false, false);
        let quiet = format_text(&report, true, false);
        assert!(full.contains("Server: fdw_server_orders | Foreign table: public.fdw_orders\n"));
        assert!(!quiet.contains("Server: "));
        assert!(quiet.contains("Setup:\n"));
        assert!(quiet.contains("Teardown:\n"));
    }

    #[test]
    fn test_colors_follow_caller_decision() {
        let report = Report::invalid("mysql", vec![ValidationIssue::Invalid(vec!["colour".into()])]);
        assert!(format_text(&report, false, true).contains('\u{1b}'));
        assert!(!format_text(&report, false, false).contains('\u{1b}'));
    }

    #[test]
    fn test_providers_listing() {
        let listing = format_providers(&ProviderRegistry::with_builtin());
        assert!(listing.starts_with("postgres\n  required: server, database, table, username\n"));
        assert!(listing.contains("mysql\n  required: server, database, table, username\n  optional: port, password\n"));
    }
}
