// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! MPU linker-fragment generator - main entry point.
//!
//! Ties the region engine together with script loading, CLI validation, and
//! output writing: enable phase, GRAM and EXTRAM verification, mask
//! assignment, placement-driven emission, finalization.

pub mod cli;
mod config;
pub mod error;
mod output;

use clap::Parser;
use serde_json::json;

use crate::core::catalog::{CATALOG, REGION_COUNT};
use crate::core::emit::FragmentWriter;
use crate::core::mask::mask_and_order;
use crate::core::partition::Domain;
use crate::core::resolve::enable_region;
use crate::core::table::RegionTable;
use crate::core::verify::verify_regions;

use cli::{validate_cli, Cli, CliConfig, OutputFormat};

pub use cli::VERSION;
pub use config::{load_script, parse_script, GenerationScript, Placement, RegionRequest};
pub use error::{Diagnostic, GenError, GenErrorKind, RunError, RunReport, Severity};

/// Print deterministic catalog metadata.
pub fn catalog_report() -> String {
    let mut lines = vec![
        "mpugen-catalog-v1".to_string(),
        format!("version={VERSION}"),
        format!("regions={REGION_COUNT}"),
    ];
    for (index, decl) in CATALOG.iter().enumerate() {
        let verify = decl
            .verify_domain
            .map(|domain| domain.as_str().to_ascii_lowercase())
            .unwrap_or_else(|| "none".to_string());
        lines.push(format!(
            "region={};index={};category={};verify={}",
            decl.id,
            index,
            decl.category.as_str(),
            verify
        ));
    }
    format!("{}\n", lines.join("\n"))
}

pub fn catalog_report_json() -> String {
    let regions: Vec<serde_json::Value> = CATALOG
        .iter()
        .enumerate()
        .map(|(index, decl)| {
            json!({
                "region": decl.id.as_str(),
                "index": index,
                "category": decl.category.as_str(),
                "verify": decl.verify_domain.map(|domain| domain.as_str().to_ascii_lowercase()),
            })
        })
        .collect();
    json!({
        "schema": "mpugen-catalog-v1",
        "version": VERSION,
        "regions": regions,
    })
    .to_string()
}

/// Run the generator with command-line arguments.
pub fn run() -> Result<RunReport, RunError> {
    let cli = Cli::parse();
    run_with_cli(&cli)
}

pub fn run_with_cli(cli: &Cli) -> Result<RunReport, RunError> {
    let config = validate_cli(cli)?;
    run_with_config(&config)
}

/// Execute a full generation run for an already-validated configuration.
pub fn run_with_config(config: &CliConfig) -> Result<RunReport, RunError> {
    let script = load_script(&config.input).map_err(|error| fatal(error, None))?;
    let report = generate(&script)?;
    if let Some(path) = &config.outfile {
        let payload = output::render_report(&report, config.output_format);
        output::write_output_file(path, &payload)?;
    }
    Ok(report)
}

/// Render `report` the way the selected output format expects it.
pub fn render_report(report: &RunReport, format: OutputFormat) -> String {
    output::render_report(report, format)
}

/// Run the region engine over a parsed script.
///
/// Verification of both domains completes before any emission, so a failed
/// run never produces fragment text.
pub fn generate(script: &GenerationScript) -> Result<RunReport, RunError> {
    let mut table = RegionTable::new();
    for request in &script.regions {
        enable_region(
            &mut table,
            &request.name,
            request.start.as_deref(),
            request.end.as_deref(),
        )
        .map_err(|err| fatal(err.into(), Some(request.name.as_str())))?;
    }

    verify_regions(&table, &script.partition, Domain::Gram)
        .map_err(|err| fatal(err.into(), Some(Domain::Gram.as_str())))?;
    verify_regions(&table, &script.partition, Domain::Extram)
        .map_err(|err| fatal(err.into(), Some(Domain::Extram.as_str())))?;

    let assignment = mask_and_order(&table);

    let mut writer = FragmentWriter::new();
    for placement in &script.placements {
        writer.emit_for_symbol(
            &table,
            &assignment.regions,
            &placement.symbol,
            placement.section.as_deref(),
        );
    }
    writer.finalize(&table, &assignment.regions);

    Ok(RunReport::new(
        writer.into_text(),
        assignment.mask,
        assignment.regions,
        Vec::new(),
    ))
}

fn fatal(error: GenError, context: Option<&str>) -> RunError {
    let mut diagnostic = Diagnostic::new(Severity::Error, error.clone());
    if let Some(context) = context {
        diagnostic = diagnostic.with_context(context);
    }
    RunError::new(error, vec![diagnostic])
}
