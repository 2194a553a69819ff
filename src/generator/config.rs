// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Generation-script loading.
//!
//! The script is a JSON document with three top-level sections: `partition`
//! (the six symbol groups), `regions` (ordered enable requests), and
//! `placements` (ordered symbol placements). All three are optional; unknown
//! keys are ignored, wrong-typed known keys are rejected.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::partition::PartitionDescriptor;
use crate::generator::error::{GenError, GenErrorKind};

/// One region enable request from the script.
#[derive(Debug, Clone)]
pub struct RegionRequest {
    pub name: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One placement entry: a program symbol in linker placement order.
#[derive(Debug, Clone)]
pub struct Placement {
    pub symbol: String,
    pub section: Option<String>,
}

/// Parsed generation script.
#[derive(Debug, Clone, Default)]
pub struct GenerationScript {
    pub partition: PartitionDescriptor,
    pub regions: Vec<RegionRequest>,
    pub placements: Vec<Placement>,
}

pub fn load_script(path: &Path) -> Result<GenerationScript, GenError> {
    let text = fs::read_to_string(path).map_err(|err| {
        GenError::new(
            GenErrorKind::Io,
            &format!("Error reading generation script: {err}"),
            Some(path.to_string_lossy().as_ref()),
        )
    })?;
    parse_script(&text)
}

pub fn parse_script(text: &str) -> Result<GenerationScript, GenError> {
    let root: Value = serde_json::from_str(text)
        .map_err(|err| config_error(&format!("Invalid JSON: {err}"), None))?;
    let Some(root) = root.as_object() else {
        return Err(config_error("Generation script must be a JSON object", None));
    };

    let mut script = GenerationScript::default();
    if let Some(partition) = root.get("partition") {
        script.partition = parse_partition(partition)?;
    }
    if let Some(regions) = root.get("regions") {
        script.regions = parse_regions(regions)?;
    }
    if let Some(placements) = root.get("placements") {
        script.placements = parse_placements(placements)?;
    }
    Ok(script)
}

fn parse_partition(value: &Value) -> Result<PartitionDescriptor, GenError> {
    let Some(object) = value.as_object() else {
        return Err(config_error("partition must be an object", None));
    };
    Ok(PartitionDescriptor {
        dbl: read_group(object.get("dbl"), "dbl")?,
        cpx: read_group(object.get("cpx"), "cpx")?,
        sxt: read_group(object.get("sxt"), "sxt")?,
        pkd: read_group(object.get("pkd"), "pkd")?,
        cached: read_group(object.get("cached"), "cached")?,
        uncached: read_group(object.get("uncached"), "uncached")?,
    })
}

fn parse_regions(value: &Value) -> Result<Vec<RegionRequest>, GenError> {
    let Some(items) = value.as_array() else {
        return Err(config_error("regions must be an array", None));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Some(object) = item.as_object() else {
                return Err(config_error(
                    &format!("regions[{index}] must be an object"),
                    None,
                ));
            };
            let name = object
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| config_error(&format!("regions[{index}] is missing a name"), None))?
                .to_string();
            let start = read_optional_string(object.get("start"), &format!("regions[{index}].start"))?;
            let end = read_optional_string(object.get("end"), &format!("regions[{index}].end"))?;
            Ok(RegionRequest { name, start, end })
        })
        .collect()
}

fn parse_placements(value: &Value) -> Result<Vec<Placement>, GenError> {
    let Some(items) = value.as_array() else {
        return Err(config_error("placements must be an array", None));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Some(object) = item.as_object() else {
                return Err(config_error(
                    &format!("placements[{index}] must be an object"),
                    None,
                ));
            };
            let symbol = object
                .get("symbol")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    config_error(&format!("placements[{index}] is missing a symbol"), None)
                })?
                .to_string();
            let section =
                read_optional_string(object.get("section"), &format!("placements[{index}].section"))?;
            Ok(Placement { symbol, section })
        })
        .collect()
}

fn read_group(value: Option<&Value>, field: &str) -> Result<Vec<String>, GenError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let strings = value.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(ToString::to_string))
            .collect::<Option<Vec<String>>>()
    });
    strings.ok_or_else(|| {
        config_error(
            &format!("partition group {field} must be an array of strings"),
            None,
        )
    })
}

fn read_optional_string(value: Option<&Value>, field: &str) -> Result<Option<String>, GenError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(config_error(&format!("{field} must be a string"), None)),
    }
}

fn config_error(msg: &str, param: Option<&str>) -> GenError {
    GenError::new(GenErrorKind::Config, msg, param)
}
