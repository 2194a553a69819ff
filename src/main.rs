// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for mpugen.

use std::fs::OpenOptions;
use std::io::{self, Write};

use clap::Parser;
use serde_json::json;

use mpugen::generator::cli::{validate_cli, Cli, DiagnosticsSinkConfig, OutputFormat};
use mpugen::generator::{
    catalog_report, catalog_report_json, render_report, run_with_config, Diagnostic, Severity,
};

struct DiagnosticsSink {
    writer: Option<Box<dyn Write>>,
}

impl DiagnosticsSink {
    fn from_config(config: &DiagnosticsSinkConfig) -> io::Result<Self> {
        match config {
            DiagnosticsSinkConfig::Disabled => Ok(Self { writer: None }),
            DiagnosticsSinkConfig::Stderr => Ok(Self {
                writer: Some(Box::new(io::stderr())),
            }),
            DiagnosticsSinkConfig::File { path, append } => {
                let mut opts = OpenOptions::new();
                opts.create(true).write(true);
                if *append {
                    opts.append(true);
                } else {
                    opts.truncate(true);
                }
                let file = opts.open(path)?;
                Ok(Self {
                    writer: Some(Box::new(file)),
                })
            }
        }
    }

    fn emit_line(&mut self, line: &str) {
        if let Some(writer) = &mut self.writer {
            let _ = writeln!(writer, "{line}");
        }
    }

    fn emit_diagnostics(&mut self, diagnostics: &[Diagnostic], format: OutputFormat) {
        for diag in diagnostics {
            self.emit_line(&format_diagnostic_line(diag, format));
        }
    }
}

fn severity_to_str(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

fn format_diagnostic_line(diag: &Diagnostic, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        json!({
            "code": diag.code(),
            "severity": severity_to_str(diag.severity()),
            "message": diag.message(),
            "context": diag.context(),
        })
        .to_string()
    } else {
        diag.format()
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.print_catalog {
        if cli.format == OutputFormat::Json {
            println!("{}", catalog_report_json());
        } else {
            print!("{}", catalog_report());
        }
        return;
    }

    let cli_config = match validate_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("mpugen: Error: {err}");
            std::process::exit(1);
        }
    };

    let mut sink = match DiagnosticsSink::from_config(&cli_config.diagnostics_sink) {
        Ok(sink) => sink,
        Err(err) => {
            eprintln!("mpugen: Error: failed to open diagnostics sink: {err}");
            std::process::exit(1);
        }
    };

    match run_with_config(&cli_config) {
        Ok(report) => {
            if cli_config.outfile.is_none() {
                print!("{}", render_report(&report, cli_config.output_format));
            }
            sink.emit_diagnostics(report.diagnostics(), cli_config.output_format);
            if !cli_config.quiet {
                eprintln!(
                    "mpugen: regions={} mask=0x{:08X}",
                    report.regions().len(),
                    report.mask()
                );
            }
        }
        Err(err) => {
            sink.emit_diagnostics(err.diagnostics(), cli_config.output_format);
            eprintln!("mpugen: Error: {err}");
            std::process::exit(1);
        }
    }
}
