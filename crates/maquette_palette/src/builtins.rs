//! Framework built-in component names.
//!
//! A small closed set of control-flow elements the framework provides
//! directly: the dynamic-component placeholder, the portal and fragment
//! wrappers, transitions and keep-alive. These resolve without any
//! registration, so the checker never treats them as component usages.
//!
//! Includes both PascalCase and kebab-case variants, matching the two ways
//! templates spell them.

use phf::phf_set;

static BUILTIN_COMPONENTS_SET: phf::Set<&'static str> = phf_set! {
    // PascalCase (as used in JSX and imports)
    "Transition",
    "TransitionGroup",
    "KeepAlive",
    "Suspense",
    "Teleport",
    "BaseTransition",
    // kebab-case (as commonly used in templates)
    "transition",
    "transition-group",
    "keep-alive",
    "suspense",
    "teleport",
    "base-transition",
    // Special template elements
    "component",
    "slot",
    "template",
};

/// Check if a name is a framework built-in component.
#[inline]
pub fn is_builtin_component(name: &str) -> bool {
    BUILTIN_COMPONENTS_SET.contains(name)
}
