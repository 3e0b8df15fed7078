//! Check entry points.

use crate::config::{CheckOptions, ConfigError, IgnoreMatcher};
use crate::context::CheckContext;
use crate::diagnostic::Diagnostic;
use crate::registration::ComponentDefinition;
use crate::walker::TemplateWalker;
use maquette_esquisse::ast::RootNode;

/// Result of checking one document.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Filename that was checked
    pub filename: String,
    /// Collected diagnostics, in document order
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl CheckResult {
    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// The configured check.
///
/// Holds only immutable compiled configuration, so one `Checker` may serve
/// many documents (and threads). Every call allocates a fresh per-document
/// context; nothing carries over between documents.
pub struct Checker {
    matcher: IgnoreMatcher,
}

impl Checker {
    /// Compile options into a checker.
    ///
    /// Invalid ignore patterns fail here, before any document is traversed.
    pub fn new(options: CheckOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            matcher: IgnoreMatcher::compile(&options)?,
        })
    }

    /// Check one parsed document against the given component definitions.
    pub fn check_document<'a>(
        &self,
        root: &'a RootNode<'a>,
        definitions: &[ComponentDefinition],
        filename: &'a str,
    ) -> CheckResult {
        let mut ctx = CheckContext::new(root.source.as_str(), filename);
        for definition in definitions {
            ctx.collect_definition(definition);
        }
        self.run(root, &mut ctx);

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        CheckResult {
            filename: filename.to_string(),
            diagnostics: ctx.into_diagnostics(),
            error_count,
            warning_count,
        }
    }

    /// Drive the walker over an externally prepared context.
    ///
    /// Use this form when registrations arrive through
    /// [`CheckContext::collect_definition`] callbacks rather than as a slice.
    pub fn run<'a>(&self, root: &'a RootNode<'a>, ctx: &mut CheckContext<'a>) {
        let mut walker = TemplateWalker::new(ctx, &self.matcher);
        walker.visit_root(root);
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            matcher: IgnoreMatcher::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_palette::Bump;

    #[test]
    fn test_empty_document_produces_nothing() {
        let allocator = Bump::new();
        let root = RootNode::new(&allocator, "");
        let checker = Checker::default();
        let result = checker.check_document(&root, &[], "empty.vue");
        assert!(!result.has_diagnostics());
        assert!(!result.has_errors());
        assert_eq!(result.filename, "empty.vue");
    }

    #[test]
    fn test_invalid_pattern_is_fatal_up_front() {
        let options = CheckOptions {
            ignore_patterns: vec!["[".to_string()],
        };
        assert!(Checker::new(options).is_err());
    }
}
