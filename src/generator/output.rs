// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Fragment and summary output.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::core::catalog::RegionId;
use crate::generator::cli::OutputFormat;
use crate::generator::error::{GenError, GenErrorKind, RunError, RunReport};

/// Render `report` for the selected output format.
pub(super) fn render_report(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => report.fragment().to_string(),
        OutputFormat::Json => {
            let mut payload = build_summary_json(report);
            payload.push('\n');
            payload
        }
    }
}

pub(super) fn build_summary_json(report: &RunReport) -> String {
    let regions: Vec<&str> = report.regions().iter().map(RegionId::as_str).collect();
    json!({
        "schema": "mpugen-fragment-v1",
        "mask": format!("0x{:08X}", report.mask()),
        "enabled_regions": regions,
        "fragment": report.fragment(),
    })
    .to_string()
}

pub(super) fn write_output_file(path: &Path, payload: &str) -> Result<(), RunError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = fs::create_dir_all(parent) {
                return Err(io_error(path, &err.to_string()));
            }
        }
    }
    fs::write(path, payload).map_err(|err| io_error(path, &err.to_string()))
}

fn io_error(path: &Path, message: &str) -> RunError {
    let path_text = path.to_string_lossy().to_string();
    RunError::new(
        GenError::new(GenErrorKind::Io, message, Some(&path_text)),
        Vec::new(),
    )
}
