//! Per-document state for the unregistered-component check.
//!
//! Everything mutable lives here, scoped to one document: the collected
//! usage sequence, the raw registered names, the first-template-root marker
//! and the produced diagnostics. A fresh context is created per document, so
//! analyses of different files never share state.

use crate::diagnostic::{Diagnostic, Severity};
use crate::registration::ComponentDefinition;
use maquette_esquisse::ast::{Position, SourceLocation};
use maquette_palette::CompactString;

/// A candidate component usage collected during traversal.
///
/// The location is borrowed from the parser-owned AST node; records live only
/// until the document's reconciliation runs.
#[derive(Debug, Clone)]
pub struct UsageRecord<'a> {
    /// The name exactly as written in the template
    pub name: CompactString,
    /// Span of the element or attribute that introduced the usage
    pub loc: &'a SourceLocation,
}

/// Mutable state for one document's analysis.
pub struct CheckContext<'a> {
    /// Source code being checked
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    usages: Vec<UsageRecord<'a>>,
    registered: Vec<CompactString>,
    first_template_root: Option<Position>,
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl<'a> CheckContext<'a> {
    /// Initial capacity for the usage sequence
    const INITIAL_USAGES_CAPACITY: usize = 16;

    /// Create a fresh context for one document
    pub fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            usages: Vec::with_capacity(Self::INITIAL_USAGES_CAPACITY),
            registered: Vec::new(),
            first_template_root: None,
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Record a candidate usage in document order
    #[inline]
    pub fn record_usage(&mut self, name: impl Into<CompactString>, loc: &'a SourceLocation) {
        self.usages.push(UsageRecord {
            name: name.into(),
            loc,
        });
    }

    /// Entry point the host calls once per component definition it encounters
    pub fn collect_definition(&mut self, definition: &ComponentDefinition) {
        self.registered
            .extend(definition.registered_names().cloned());
    }

    /// Usages collected so far, in document order
    #[inline]
    pub fn usages(&self) -> &[UsageRecord<'a>] {
        &self.usages
    }

    /// Raw registered names collected so far
    #[inline]
    pub fn registered(&self) -> &[CompactString] {
        &self.registered
    }

    /// Remember the first template root seen in this document
    #[inline]
    pub(crate) fn mark_template_root(&mut self, start: Position) {
        if self.first_template_root.is_none() {
            self.first_template_root = Some(start);
        }
    }

    /// Whether `start` is the first-seen template root of this document
    #[inline]
    pub(crate) fn is_first_template_root(&self, start: Position) -> bool {
        self.first_template_root == Some(start)
    }

    /// Append a diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics produced so far, in report order
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context, yielding its diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_order_is_preserved() {
        let loc = SourceLocation::STUB;
        let mut ctx = CheckContext::new("", "test.vue");
        ctx.record_usage("BWidget", &loc);
        ctx.record_usage("AWidget", &loc);
        let names: Vec<&str> = ctx.usages().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["BWidget", "AWidget"]);
    }

    #[test]
    fn test_first_template_root_marker_sticks() {
        let mut ctx = CheckContext::new("", "test.vue");
        let first = Position::new(0, 1, 1);
        let second = Position::new(40, 3, 1);
        ctx.mark_template_root(first);
        ctx.mark_template_root(second);
        assert!(ctx.is_first_template_root(first));
        assert!(!ctx.is_first_template_root(second));
    }

    #[test]
    fn test_collect_definition_accumulates_raw_names() {
        let mut ctx = CheckContext::new("", "test.vue");
        ctx.collect_definition(&ComponentDefinition::with_components(["FooBar"]));
        ctx.collect_definition(&ComponentDefinition {
            local: vec!["baz".into()],
            inherited: vec!["FromMixin".into()],
        });
        let names: Vec<&str> = ctx.registered().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["FooBar", "baz", "FromMixin"]);
    }
}
