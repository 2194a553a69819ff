// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types, diagnostics, and run reporting for the generator.

use std::fmt;

use crate::core::catalog::RegionId;
use crate::core::error::MpuError;

/// Categories of generator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenErrorKind {
    Cli,
    Config,
    Io,
    Region,
    Verify,
}

/// A generator error with a kind and message.
#[derive(Debug, Clone)]
pub struct GenError {
    kind: GenErrorKind,
    message: String,
}

impl GenError {
    pub fn new(kind: GenErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> GenErrorKind {
        self.kind
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GenError {}

impl From<MpuError> for GenError {
    fn from(err: MpuError) -> Self {
        let kind = match &err {
            MpuError::UnknownRegion { .. } => GenErrorKind::Region,
            MpuError::BoundaryNotFound { .. } => GenErrorKind::Verify,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A diagnostic message with an optional context label (the region or
/// script entry it concerns).
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub(crate) code: String,
    pub(crate) severity: Severity,
    pub(crate) error: GenError,
    pub(crate) context: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, error: GenError) -> Self {
        Self {
            code: default_diagnostic_code(error.kind()).to_string(),
            severity,
            error,
            context: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn format(&self) -> String {
        let sev = match self.severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        match &self.context {
            Some(context) => format!("{sev} [{}] ({context}) - {}", self.code, self.error.message()),
            None => format!("{sev} [{}] - {}", self.code, self.error.message()),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        self.error.message()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// Report from a successful generation run.
#[derive(Debug)]
pub struct RunReport {
    fragment: String,
    mask: u32,
    regions: Vec<RegionId>,
    diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn new(
        fragment: String,
        mask: u32,
        regions: Vec<RegionId>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            fragment,
            mask,
            regions,
            diagnostics,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn regions(&self) -> &[RegionId] {
        &self.regions
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == Severity::Warning)
            .count()
    }
}

/// Error from a failed generation run.
#[derive(Debug)]
pub struct RunError {
    error: GenError,
    diagnostics: Vec<Diagnostic>,
}

impl RunError {
    pub fn new(error: GenError, diagnostics: Vec<Diagnostic>) -> Self {
        Self { error, diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn kind(&self) -> GenErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for RunError {}

fn default_diagnostic_code(kind: GenErrorKind) -> &'static str {
    match kind {
        GenErrorKind::Cli => "mpu101",
        GenErrorKind::Config => "mpu102",
        GenErrorKind::Region => "mpu201",
        GenErrorKind::Verify => "mpu301",
        GenErrorKind::Io => "mpu501",
    }
}

/// Format an error message with an optional parameter.
pub fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{msg}: {p}"),
        None => msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Edge;
    use crate::core::partition::Domain;

    #[test]
    fn diagnostic_format_includes_code_and_severity() {
        let err = GenError::new(GenErrorKind::Config, "Bad thing", None);
        let diag = Diagnostic::new(Severity::Error, err);
        assert_eq!(diag.format(), "ERROR [mpu102] - Bad thing");
    }

    #[test]
    fn diagnostic_context_renders_before_the_message() {
        let err = GenError::new(GenErrorKind::Verify, "missing symbol", Some("buf"));
        let diag = Diagnostic::new(Severity::Warning, err).with_context("GRAM_MCP_0");
        assert_eq!(
            diag.format(),
            "WARNING [mpu301] (GRAM_MCP_0) - missing symbol: buf"
        );
    }

    #[test]
    fn engine_errors_map_to_region_and_verify_kinds() {
        let unknown: GenError = MpuError::UnknownRegion {
            name: "FOO".to_string(),
        }
        .into();
        assert_eq!(unknown.kind(), GenErrorKind::Region);
        assert_eq!(unknown.message(), "region FOO not defined");

        let missing: GenError = MpuError::BoundaryNotFound {
            region: RegionId::new("EXTRAM_EDC"),
            domain: Domain::Extram,
            edge: Edge::End,
            symbol: "buf".to_string(),
        }
        .into();
        assert_eq!(missing.kind(), GenErrorKind::Verify);
    }

    #[test]
    fn format_error_appends_the_parameter() {
        assert_eq!(format_error("plain", None), "plain");
        assert_eq!(format_error("with", Some("param")), "with: param");
    }
}
