//! # maquette
//!
//! Maquette - the unregistered-component check for component templates.
//!
//! ## Name Origin
//!
//! A **maquette** (/mɑːˈkɛt/) is the small-scale model a sculptor builds to
//! find the flaws in a design before committing to stone. This crate plays
//! the same role for component templates: it inspects the markup against the
//! component's declared registrations and flags every component reference
//! that was used but never registered, catching typos and forgotten
//! registrations before they reach a renderer.
//!
//! ## How it works
//!
//! The host parses a source file into the [`maquette_esquisse`] template AST
//! and supplies the registration entries of each component definition it
//! encounters. One top-down pass collects candidate usages: custom element
//! names (anything outside the well-known HTML/SVG vocabularies and the
//! framework built-ins), literal `is` bindings, and static `is` attributes.
//! On exit from the outermost template root the collected usages are
//! reconciled against the registered names; both sides compare by their
//! kebab-case rendering, so `MyWidget` and `my-widget` always match.
//! Unmatched usages become warning diagnostics in document order.
//!
//! Templates whose markup lives in another file (`src` attribute) are
//! skipped, and names matching a configured `ignorePatterns` entry in any
//! casing form are exempt.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use maquette::{check, CheckOptions, ComponentDefinition};
//!
//! let root = /* parsed document from the host's front end */;
//! let definitions = [ComponentDefinition::with_components(["FooBar"])];
//! let result = check(&root, &definitions, CheckOptions::default(), "app.vue")?;
//!
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{}: {}", result.filename, diagnostic.message);
//! }
//! ```

mod checker;
mod config;
mod context;
mod diagnostic;
mod registration;
mod walker;

pub use checker::{CheckResult, Checker};
pub use config::{CheckOptions, ConfigError, IgnoreMatcher};
pub use context::{CheckContext, UsageRecord};
pub use diagnostic::{Diagnostic, Severity};
pub use registration::ComponentDefinition;
pub use walker::{TemplateWalker, CHECK_CODE};

use maquette_esquisse::ast::RootNode;

/// Check a parsed document with the given options.
///
/// Convenience for simple use cases; construct a [`Checker`] directly to
/// reuse compiled options across documents.
pub fn check<'a>(
    root: &'a RootNode<'a>,
    definitions: &[ComponentDefinition],
    options: CheckOptions,
    filename: &'a str,
) -> Result<CheckResult, ConfigError> {
    Ok(Checker::new(options)?.check_document(root, definitions, filename))
}
