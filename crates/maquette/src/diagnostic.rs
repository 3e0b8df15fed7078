//! Diagnostic types for the unregistered-component check.
//!
//! Uses `CompactString` for message storage - strings up to 24 bytes are
//! stored inline without heap allocation.

use maquette_palette::CompactString;
use serde::Serialize;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A reported problem, positioned by byte offsets into the source.
///
/// Rendering (terminal output, editor integration, exit codes) is the host's
/// concern; this type only carries what the host needs to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable identifier of the check that produced this diagnostic
    pub code: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Primary message
    pub message: CompactString,
    /// The component name exactly as written in the template
    pub name: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
}

impl Diagnostic {
    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        code: &'static str,
        message: impl Into<CompactString>,
        name: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        code: &'static str,
        message: impl Into<CompactString>,
        name: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            name: name.into(),
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_constructor() {
        let diag = Diagnostic::warn("demo", "message", "FooBar", 3, 9);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.name, "FooBar");
        assert_eq!(diag.start, 3);
        assert_eq!(diag.end, 9);
    }
}
