//! Input handling for parameter files, configuration files and stdin.

use anyhow::{Context, Result};
use fdwkit_core::{ConnectionNames, Parameters};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read connector parameters from a file, or from stdin when no file is given.
pub fn read_parameters(input: Option<&PathBuf>) -> Result<Parameters> {
    let (name, content) = match input {
        Some(path) => (path.display().to_string(), read_file(path)?),
        None => ("<stdin>".to_string(), read_from_stdin()?),
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid parameters in {name}"))
}

/// Read connection names from a JSON configuration file, or use the defaults.
pub fn read_names(config: Option<&PathBuf>) -> Result<ConnectionNames> {
    match config {
        Some(path) => {
            let content = read_file(path)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", path.display()))
        }
        None => Ok(ConnectionNames::default()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn read_from_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(content)
}
