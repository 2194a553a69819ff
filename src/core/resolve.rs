// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Boundary resolution for region enablement.

use crate::core::catalog::RegionId;
use crate::core::error::MpuError;
use crate::core::table::{Boundary, RegionTable};

/// Enable `name`, resolving its boundaries against the regions already
/// enabled in `table`.
///
/// Without a `start` the region is enabled with both edges unbounded and no
/// aliasing is attempted. Otherwise each literal is compared against every
/// enabled region's literal edges in declaration order: a match turns the
/// corresponding edge into an alias of that region, so two regions can sit
/// back to back without a shared numeric address. A missing `end` after a
/// literal `start` leaves the end open, to be closed by the first placement.
///
/// Re-enabling an already-enabled region overwrites its boundary record;
/// the region's own previous record participates in the alias scan.
pub fn enable_region(
    table: &mut RegionTable,
    name: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(), MpuError> {
    let index = table.resolve_index(name)?;

    let Some(start) = start else {
        let region = table.region_at_mut(index);
        region.enabled = true;
        region.start = Boundary::Unbounded;
        region.end = Boundary::Unbounded;
        return Ok(());
    };

    // Scan in declaration order; the last matching region wins.
    let mut start_alias: Option<RegionId> = None;
    let mut end_alias: Option<RegionId> = None;
    for existing in table.iter().filter(|region| region.is_enabled()) {
        if existing.start().is_literal(start) || existing.end().is_literal(start) {
            start_alias = Some(existing.id());
        }
        if let Some(end) = end {
            if existing.start().is_literal(end) || existing.end().is_literal(end) {
                end_alias = Some(existing.id());
            }
        }
    }

    let literal_end = || match end {
        Some(end) => Boundary::Absolute(end.to_string()),
        None => Boundary::OpenEnd,
    };

    let region = table.region_at_mut(index);
    region.enabled = true;
    match (start_alias, end_alias) {
        (None, None) => {
            region.start = Boundary::Absolute(start.to_string());
            region.end = literal_end();
        }
        (Some(alias), None) => {
            region.start = Boundary::AliasOf(alias);
            region.end = literal_end();
        }
        (None, Some(alias)) => {
            region.start = Boundary::Absolute(start.to_string());
            region.end = Boundary::AliasOf(alias);
        }
        (Some(start_target), Some(end_target)) => {
            region.start = Boundary::AliasOf(start_target);
            region.end = Boundary::AliasOf(end_target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::RegionId;

    fn boundary_pair(table: &RegionTable, name: &str) -> (Boundary, Boundary) {
        let region = table.get(name).unwrap();
        (region.start().clone(), region.end().clone())
    }

    #[test]
    fn absent_start_enables_unbounded_region() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_EDC", None, None).unwrap();
        assert!(table.is_enabled("GRAM_EDC"));
        assert_eq!(
            boundary_pair(&table, "GRAM_EDC"),
            (Boundary::Unbounded, Boundary::Unbounded)
        );
    }

    #[test]
    fn absent_start_ignores_a_supplied_end() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_EDC", None, Some("sym_end")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_EDC"),
            (Boundary::Unbounded, Boundary::Unbounded)
        );
    }

    #[test]
    fn literal_start_without_end_leaves_the_end_open() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("buf_a"), None).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_0"),
            (Boundary::Absolute("buf_a".to_string()), Boundary::OpenEnd)
        );
    }

    #[test]
    fn literal_start_and_end_stay_absolute_when_nothing_matches() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("buf_a"), Some("buf_b")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_0"),
            (
                Boundary::Absolute("buf_a".to_string()),
                Boundary::Absolute("buf_b".to_string())
            )
        );
    }

    #[test]
    fn start_aliases_a_matching_end_of_an_enabled_region() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        enable_region(&mut table, "GRAM_MCP_1", Some("s2"), Some("s3")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_1"),
            (
                Boundary::AliasOf(RegionId::new("GRAM_MCP_0")),
                Boundary::Absolute("s3".to_string())
            )
        );
    }

    #[test]
    fn end_aliases_a_matching_start_of_an_enabled_region() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        enable_region(&mut table, "GRAM_MCP_1", Some("s0"), Some("s1")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_1"),
            (
                Boundary::Absolute("s0".to_string()),
                Boundary::AliasOf(RegionId::new("GRAM_MCP_0"))
            )
        );
    }

    #[test]
    fn both_edges_can_alias_independently() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        enable_region(&mut table, "GRAM_MCP_1", Some("s4"), Some("s5")).unwrap();
        enable_region(&mut table, "GRAM_MCP_2", Some("s2"), Some("s4")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_2"),
            (
                Boundary::AliasOf(RegionId::new("GRAM_MCP_0")),
                Boundary::AliasOf(RegionId::new("GRAM_MCP_1"))
            )
        );
    }

    #[test]
    fn aliased_boundaries_do_not_participate_in_later_scans() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        // GRAM_MCP_1's start becomes an alias, not the literal "s2".
        enable_region(&mut table, "GRAM_MCP_1", Some("s2"), Some("s3")).unwrap();
        // "GRAM_MCP_0" is an alias target name, never a literal match.
        enable_region(&mut table, "GRAM_MCP_2", Some("GRAM_MCP_0"), None).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_2"),
            (
                Boundary::Absolute("GRAM_MCP_0".to_string()),
                Boundary::OpenEnd
            )
        );
    }

    #[test]
    fn unknown_region_fails_without_mutation() {
        let mut table = RegionTable::new();
        let err = enable_region(&mut table, "GRAM_MCP_9", Some("s1"), None).unwrap_err();
        assert_eq!(
            err,
            MpuError::UnknownRegion {
                name: "GRAM_MCP_9".to_string()
            }
        );
        assert!(table.iter().all(|region| !region.is_enabled()));
    }

    #[test]
    fn unknown_region_fails_on_the_unbounded_path_too() {
        let mut table = RegionTable::new();
        let err = enable_region(&mut table, "NOT_A_REGION", None, None).unwrap_err();
        assert_eq!(
            err,
            MpuError::UnknownRegion {
                name: "NOT_A_REGION".to_string()
            }
        );
        assert!(table.iter().all(|region| !region.is_enabled()));
    }

    #[test]
    fn re_enabling_overwrites_the_previous_record() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("old_a"), Some("old_b")).unwrap();
        enable_region(&mut table, "GRAM_MCP_0", Some("new_a"), None).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_0"),
            (Boundary::Absolute("new_a".to_string()), Boundary::OpenEnd)
        );
    }

    #[test]
    fn re_enabling_without_a_start_resets_an_aliased_record() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        enable_region(&mut table, "GRAM_MCP_1", Some("s2"), Some("s3")).unwrap();
        enable_region(&mut table, "GRAM_MCP_1", None, None).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_1"),
            (Boundary::Unbounded, Boundary::Unbounded)
        );
    }

    #[test]
    fn re_enabling_with_the_same_literal_aliases_itself() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s2")).unwrap();
        // The scan covers the region's own previous record.
        enable_region(&mut table, "GRAM_MCP_0", Some("s1"), Some("s3")).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_0"),
            (
                Boundary::AliasOf(RegionId::new("GRAM_MCP_0")),
                Boundary::Absolute("s3".to_string())
            )
        );
    }

    #[test]
    fn alias_scan_covers_regions_later_in_the_catalog() {
        let mut table = RegionTable::new();
        enable_region(&mut table, "GRAM_FFT_0", Some("a"), Some("b")).unwrap();
        // GRAM_MCP_0 sits before GRAM_FFT_0 in the catalog; the scan still
        // finds the match.
        enable_region(&mut table, "GRAM_MCP_0", Some("b"), None).unwrap();
        assert_eq!(
            boundary_pair(&table, "GRAM_MCP_0"),
            (
                Boundary::AliasOf(RegionId::new("GRAM_FFT_0")),
                Boundary::OpenEnd
            )
        );
    }
}
