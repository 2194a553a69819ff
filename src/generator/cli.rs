// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::generator::error::{GenError, GenErrorKind, RunError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "MPU linker-fragment generator for the GRAM/EXTRAM region catalog.

The generation script (JSON) supplies the partition symbol groups, the region
enable requests, and the ordered symbol placements. The emitted fragment holds
one boundary-marker block per placement plus the alias and unbounded boundary
assignments, ready for inclusion in a linker script.
Region and partition validation failures abort the run before any output is
written. Without -o/--outfile the fragment goes to stdout.";

#[derive(Parser, Debug)]
#[command(
    name = "mpugen",
    version = VERSION,
    about = "MPU region boundary-marker generator for linker scripts",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        long_help = "Select global CLI output format. text is default; json wraps the fragment in a machine-readable summary."
    )]
    pub format: OutputFormat,
    #[arg(
        short = 'q',
        long = "quiet",
        action = ArgAction::SetTrue,
        long_help = "Suppress the success summary. Errors are still reported unless --no-error is set."
    )]
    pub quiet: bool,
    #[arg(
        short = 'E',
        long = "error",
        value_name = "FILE",
        long_help = "Write diagnostics to FILE instead of stderr."
    )]
    pub error_file: Option<PathBuf>,
    #[arg(
        long = "error-append",
        action = ArgAction::SetTrue,
        requires = "error_file",
        long_help = "Append diagnostics to --error FILE instead of truncating it."
    )]
    pub error_append: bool,
    #[arg(
        long = "no-error",
        action = ArgAction::SetTrue,
        conflicts_with_all = ["error_file", "error_append"],
        long_help = "Disable all diagnostic output routing."
    )]
    pub no_error: bool,
    #[arg(
        long = "print-catalog",
        action = ArgAction::SetTrue,
        long_help = "Print deterministic region-catalog metadata and exit."
    )]
    pub print_catalog: bool,
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "FILE",
        long_help = "Write the fragment (or JSON summary with --format json) to FILE instead of stdout."
    )]
    pub outfile: Option<PathBuf>,
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        long_help = "Generation script path. Equivalent to passing INPUT positionally."
    )]
    pub input: Option<PathBuf>,
    #[arg(
        value_name = "INPUT",
        long_help = "Generation script path. Exactly one script is accepted per run."
    )]
    pub positional_input: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum DiagnosticsSinkConfig {
    Stderr,
    File { path: PathBuf, append: bool },
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective configuration after CLI and environment resolution.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: PathBuf,
    pub outfile: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub diagnostics_sink: DiagnosticsSinkConfig,
}

fn cli_error(message: impl Into<String>) -> RunError {
    RunError::new(
        GenError::new(GenErrorKind::Cli, &message.into(), None),
        Vec::new(),
    )
}

fn parse_env_bool(var_name: &str) -> Result<Option<bool>, RunError> {
    let Some(raw) = env::var_os(var_name) else {
        return Ok(None);
    };
    let value = raw.to_string_lossy().trim().to_ascii_lowercase();
    let parsed = match value.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        "" => None,
        _ => {
            return Err(cli_error(format!(
                "Invalid boolean value for {var_name}: {value}"
            )))
        }
    };
    Ok(parsed)
}

fn parse_env_path(var_name: &str) -> Result<Option<PathBuf>, RunError> {
    let Some(raw) = env::var_os(var_name) else {
        return Ok(None);
    };
    let value = raw.to_string_lossy().trim().to_string();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(value)))
}

/// Validate CLI arguments and return the effective configuration.
///
/// Environment overrides (`MPUGEN_*`) sit below explicit flags.
pub fn validate_cli(cli: &Cli) -> Result<CliConfig, RunError> {
    let env_quiet = parse_env_bool("MPUGEN_QUIET")?;
    let env_error_file = parse_env_path("MPUGEN_ERROR_FILE")?;
    let env_error_append = parse_env_bool("MPUGEN_ERROR_APPEND")?;
    let env_no_error = parse_env_bool("MPUGEN_NO_ERROR")?;
    let env_outfile = parse_env_path("MPUGEN_OUTFILE")?;

    let input = match (&cli.input, &cli.positional_input) {
        (Some(_), Some(_)) => {
            return Err(cli_error(
                "Give the generation script once, either positionally or with -i/--input",
            ))
        }
        (Some(path), None) | (None, Some(path)) => path.clone(),
        (None, None) => {
            return Err(cli_error(
                "No generation script given; pass INPUT or -i/--input",
            ))
        }
    };

    let effective_quiet = if cli.quiet {
        true
    } else {
        env_quiet.unwrap_or(false)
    };

    let effective_no_error = if cli.no_error {
        true
    } else if cli.error_file.is_some() {
        false
    } else {
        env_no_error.unwrap_or(false)
    };

    let effective_error_file = cli.error_file.clone().or(env_error_file);
    let effective_error_append = if cli.error_append {
        true
    } else {
        env_error_append.unwrap_or(false)
    };

    let diagnostics_sink = if effective_no_error {
        DiagnosticsSinkConfig::Disabled
    } else if let Some(path) = effective_error_file {
        DiagnosticsSinkConfig::File {
            path,
            append: effective_error_append,
        }
    } else {
        DiagnosticsSinkConfig::Stderr
    };

    Ok(CliConfig {
        input,
        outfile: cli.outfile.clone().or(env_outfile),
        output_format: cli.format,
        quiet: effective_quiet,
        diagnostics_sink,
    })
}
