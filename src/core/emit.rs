// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Linker-fragment emission.
//!
//! Markers reference the linker's current position (`.`), so lines must be
//! emitted in the exact order the driver places symbols.

use crate::core::catalog::RegionId;
use crate::core::table::{Boundary, RegionTable};

const ALIGN_BYTES: u32 = 4;

/// Accumulates linker-script marker lines in placement order.
#[derive(Debug, Clone, Default)]
pub struct FragmentWriter {
    text: String,
}

impl FragmentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the markers owed to one placed symbol.
    ///
    /// `enabled` supplies the emission order. A region whose start names
    /// `symbol` gets a start marker, alignment, and a placement directive
    /// for `section` (the symbol name itself when no section override is
    /// given); an open end closes right there with an end marker. A region
    /// whose end names `symbol` gets alignment, placement, and its end
    /// marker, also when its start is an alias.
    pub fn emit_for_symbol(
        &mut self,
        table: &RegionTable,
        enabled: &[RegionId],
        symbol: &str,
        section: Option<&str>,
    ) {
        let section = section.unwrap_or(symbol);
        for id in enabled {
            let Some(region) = table.region(*id) else {
                continue;
            };
            if region.start().is_literal(symbol) {
                self.push_start_marker(*id);
                self.push_alignment();
                self.push_placement(section);
                if matches!(region.end(), Boundary::OpenEnd) {
                    self.push_end_marker(*id);
                }
            } else if region.end().is_literal(symbol) {
                self.push_alignment();
                self.push_placement(section);
                self.push_end_marker(*id);
            }
        }
    }

    /// Emit the alias and unbounded assignments after all placements.
    pub fn finalize(&mut self, table: &RegionTable, enabled: &[RegionId]) {
        for id in enabled {
            let Some(region) = table.region(*id) else {
                continue;
            };
            if let Boundary::AliasOf(target) = region.start() {
                self.text
                    .push_str(&format!("         _mpu_{id}_start = _mpu_{target}_start ;\n"));
            }
            if let Boundary::AliasOf(target) = region.end() {
                self.text
                    .push_str(&format!("         _mpu_{id}_end = _mpu_{target}_end ;\n"));
            }
            if *region.start() == Boundary::Unbounded && *region.end() == Boundary::Unbounded {
                self.text
                    .push_str(&format!("         _mpu_{id}_start = 0x0 ;\n"));
                self.text.push_str(&format!("         _mpu_{id}_end = 0x0 ;\n"));
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn push_start_marker(&mut self, id: RegionId) {
        self.text.push_str(&format!("         _mpu_{id}_start = . ;\n"));
    }

    fn push_end_marker(&mut self, id: RegionId) {
        self.text.push_str(&format!("         _mpu_{id}_end = . ;\n"));
    }

    fn push_alignment(&mut self) {
        self.text.push_str(&format!("        . = ALIGN({ALIGN_BYTES});\n"));
    }

    fn push_placement(&mut self, section: &str) {
        self.text.push_str(&format!("        *({section})\n"));
    }
}
