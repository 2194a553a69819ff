// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Memory domains and the caller-supplied partition symbol catalog.

use std::fmt;

/// One of the two physical memory areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Gram,
    Extram,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "GRAM",
            Self::Extram => "EXTRAM",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered symbol-name groups describing which buffer symbols exist in each
/// domain. Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, Default)]
pub struct PartitionDescriptor {
    pub dbl: Vec<String>,
    pub cpx: Vec<String>,
    pub sxt: Vec<String>,
    pub pkd: Vec<String>,
    pub cached: Vec<String>,
    pub uncached: Vec<String>,
}

impl PartitionDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `symbol` appears in the union of the domain's groups.
    ///
    /// GRAM draws on `dbl`, `cpx`, `sxt`, and `pkd`; EXTRAM on `cached` and
    /// `uncached`.
    pub fn contains(&self, domain: Domain, symbol: &str) -> bool {
        let groups: &[&[String]] = match domain {
            Domain::Gram => &[&self.dbl, &self.cpx, &self.sxt, &self.pkd],
            Domain::Extram => &[&self.cached, &self.uncached],
        };
        groups
            .iter()
            .any(|group| group.iter().any(|name| name == symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn gram_union_spans_all_four_groups() {
        let partition = PartitionDescriptor {
            dbl: names(&["a"]),
            cpx: names(&["b"]),
            sxt: names(&["c"]),
            pkd: names(&["d"]),
            ..PartitionDescriptor::default()
        };
        for symbol in ["a", "b", "c", "d"] {
            assert!(partition.contains(Domain::Gram, symbol));
            assert!(!partition.contains(Domain::Extram, symbol));
        }
    }

    #[test]
    fn extram_union_spans_cached_and_uncached() {
        let partition = PartitionDescriptor {
            cached: names(&["hot"]),
            uncached: names(&["cold"]),
            ..PartitionDescriptor::default()
        };
        assert!(partition.contains(Domain::Extram, "hot"));
        assert!(partition.contains(Domain::Extram, "cold"));
        assert!(!partition.contains(Domain::Gram, "hot"));
    }

    #[test]
    fn empty_partition_contains_nothing() {
        let partition = PartitionDescriptor::new();
        assert!(!partition.contains(Domain::Gram, "anything"));
        assert!(!partition.contains(Domain::Extram, "anything"));
    }
}
