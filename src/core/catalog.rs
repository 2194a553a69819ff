// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! The fixed region catalog.
//!
//! Declaration order is load-bearing: each region's position in [`CATALOG`]
//! is its absolute bit index in the enabled-region mask, and the per-region
//! tags declared here are the sole source of domain-subset membership for
//! partition verification.

use std::fmt;

use crate::core::partition::Domain;

/// Identifier for a catalog region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(&'static str);

impl RegionId {
    /// Create a new region identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Return the identifier string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Category tag of a catalog region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionCategory {
    Gram,
    Extram,
    Hole,
}

impl RegionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "gram",
            Self::Extram => "extram",
            Self::Hole => "hole",
        }
    }
}

/// A region as declared in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct RegionDecl {
    pub id: RegionId,
    pub category: RegionCategory,
    /// Domain whose partition check covers this region. `GRAM_FFT_5` and
    /// `EXTRAM_HOST` carry no assignment and are never verified.
    pub verify_domain: Option<Domain>,
}

impl RegionDecl {
    const fn new(
        name: &'static str,
        category: RegionCategory,
        verify_domain: Option<Domain>,
    ) -> Self {
        Self {
            id: RegionId::new(name),
            category,
            verify_domain,
        }
    }
}

pub const REGION_COUNT: usize = 22;

pub const GRAM_HOLE: RegionId = RegionId::new("GRAM_MCU_ECU_HOLE");
pub const EXTRAM_HOLE: RegionId = RegionId::new("EXTRAM_MCU_ECU_HOLE");

/// Canonical catalog declaration order.
pub static CATALOG: [RegionDecl; REGION_COUNT] = [
    RegionDecl::new("GRAM_READONLY", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_NO_DCP", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_EDC", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_HOST", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_0", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_1", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_2", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_3", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_4", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_MCP_5", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_0", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_1", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_2", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_3", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_4", RegionCategory::Gram, Some(Domain::Gram)),
    RegionDecl::new("GRAM_FFT_5", RegionCategory::Gram, None),
    RegionDecl::new("EXTRAM_READONLY", RegionCategory::Extram, Some(Domain::Extram)),
    RegionDecl::new("EXTRAM_NO_DCP", RegionCategory::Extram, Some(Domain::Extram)),
    RegionDecl::new("EXTRAM_EDC", RegionCategory::Extram, Some(Domain::Extram)),
    RegionDecl::new("EXTRAM_HOST", RegionCategory::Extram, None),
    RegionDecl::new("GRAM_MCU_ECU_HOLE", RegionCategory::Hole, Some(Domain::Gram)),
    RegionDecl::new("EXTRAM_MCU_ECU_HOLE", RegionCategory::Hole, Some(Domain::Extram)),
];

/// Absolute catalog index of `name`, if declared.
pub fn position(name: &str) -> Option<usize> {
    CATALOG.iter().position(|decl| decl.id.as_str() == name)
}
