//! fdwkit CLI - FDW connector toolkit

use fdwkit_cli::cli::{Args, OutputFormat};
use fdwkit_cli::input;
use fdwkit_cli::output::{self, Report};

use anyhow::{Context, Result};
use clap::Parser;
use fdwkit_core::{CommandPlan, ConnectorError, ProviderExt, ProviderRegistry};
use is_terminal::IsTerminal;
use std::process::ExitCode;

/// Parameters failed validation.
const EXIT_FAILURE: u8 = 1;
/// Unreadable input, bad configuration or unknown provider.
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    if let Err(e) = fdwkit_cli::logging::init_tracing() {
        if !args.quiet {
            eprintln!("fdwkit: warning: {e:#}");
        }
    }

    let registry = ProviderRegistry::with_builtin();

    if args.list_providers {
        print!("{}", output::format_providers(&registry));
        return ExitCode::SUCCESS;
    }

    match run(&args, &registry) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FAILURE),
        Err(e) => {
            eprintln!("fdwkit: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Validate the parameters and generate statements.
///
/// Returns whether the parameters were valid.
fn run(args: &Args, registry: &ProviderRegistry) -> Result<bool> {
    let parameters = input::read_parameters(args.input.as_ref())?;
    let names = args.apply_overrides(input::read_names(args.config.as_ref())?);

    let provider = registry
        .build(parameters)
        .context("Cannot select a provider")?;
    let provider_name = provider
        .parameters()
        .provider()
        .unwrap_or_default()
        .to_string();

    let issues = provider.issues();
    let report = if !issues.is_empty() {
        Report::invalid(&provider_name, issues)
    } else if args.validate_only {
        Report::valid(&provider_name, None)
    } else {
        match CommandPlan::build(provider.as_ref(), &names) {
            Ok(plan) => Report::valid(&provider_name, Some(plan)),
            Err(ConnectorError::InvalidParameters(message)) => {
                Report::rejected(&provider_name, message)
            }
            Err(e) => return Err(e.into()),
        }
    };

    #[cfg(feature = "tracing")]
    tracing::info!(
        provider = %provider_name,
        valid = report.valid,
        error_count = report.errors.len(),
        "processed connector parameters"
    );

    emit(args, &report);
    Ok(report.valid)
}

fn emit(args: &Args, report: &Report) {
    match args.format {
        OutputFormat::Json => println!("{}", output::format_json(report, args.compact)),
        OutputFormat::Text => {
            if report.valid {
                let colored = std::io::stdout().is_terminal();
                print!("{}", output::format_text(report, args.quiet, colored));
            } else {
                let colored = std::io::stderr().is_terminal();
                eprint!("{}", output::format_text(report, args.quiet, colored));
            }
        }
        OutputFormat::Sql => {
            if let Some(plan) = &report.plan {
                print!("{}", output::format_sql(plan));
            }
            for error in &report.errors {
                eprintln!("fdwkit: {error}");
            }
        }
    }
}
