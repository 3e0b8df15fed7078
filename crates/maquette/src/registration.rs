//! Component definition registration entries.
//!
//! The host's script analysis hands over one of these per component
//! definition it encounters. Names are kept exactly as declared; the
//! reconciler normalizes both sides of the comparison later, uniformly.

use maquette_palette::CompactString;

/// The declarative registration entries visible to one component definition.
#[derive(Debug, Clone, Default)]
pub struct ComponentDefinition {
    /// Names declared directly in the definition's own registration map.
    pub local: Vec<CompactString>,
    /// Names merged in from mixins or an extended base definition, as far as
    /// the host ecosystem considers them visible to this template.
    pub inherited: Vec<CompactString>,
}

impl ComponentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition with only locally declared names (the common case).
    pub fn with_components<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            local: names.into_iter().map(Into::into).collect(),
            inherited: Vec::new(),
        }
    }

    /// All names this definition registers, raw and in declaration order.
    /// Duplicates are harmless; membership is resolved against a set at
    /// reconciliation time.
    pub fn registered_names(&self) -> impl Iterator<Item = &CompactString> {
        self.local.iter().chain(self.inherited.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_names_chains_local_then_inherited() {
        let definition = ComponentDefinition {
            local: vec!["FooBar".into(), "baz-qux".into()],
            inherited: vec!["MixedIn".into()],
        };
        let names: Vec<&str> = definition.registered_names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["FooBar", "baz-qux", "MixedIn"]);
    }

    #[test]
    fn test_names_are_not_normalized() {
        let definition = ComponentDefinition::with_components(["FooBar"]);
        let names: Vec<&str> = definition.registered_names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["FooBar"]);
    }
}
