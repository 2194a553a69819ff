// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Partition consistency checks for enabled regions.

use crate::core::error::{Edge, MpuError};
use crate::core::partition::{Domain, PartitionDescriptor};
use crate::core::table::{Boundary, RegionTable};

/// Check every enabled region covered by `domain` against the partition's
/// symbol groups.
///
/// Literal boundaries must name a symbol the partition lists for the domain.
/// Aliased and unbounded edges need no lookup, and an open end is always
/// valid. The first failing boundary aborts the whole run.
pub fn verify_regions(
    table: &RegionTable,
    partition: &PartitionDescriptor,
    domain: Domain,
) -> Result<(), MpuError> {
    let selected = table
        .iter()
        .filter(|region| region.is_enabled() && region.verify_domain() == Some(domain));

    for region in selected {
        if let Boundary::Absolute(symbol) = region.start() {
            if !partition.contains(domain, symbol) {
                return Err(MpuError::BoundaryNotFound {
                    region: region.id(),
                    domain,
                    edge: Edge::Start,
                    symbol: symbol.clone(),
                });
            }
        }
        if let Boundary::Absolute(symbol) = region.end() {
            if !partition.contains(domain, symbol) {
                return Err(MpuError::BoundaryNotFound {
                    region: region.id(),
                    domain,
                    edge: Edge::End,
                    symbol: symbol.clone(),
                });
            }
        }
    }
    Ok(())
}
