//! Palette - The painter's palette for Maquette.
//!
//! A palette holds the colors a painter already knows. This crate holds the
//! names the template checker already knows: the well-known HTML and SVG tag
//! vocabularies, the framework built-in component set, and the identifier
//! casing conversions that let differently spelled names meet on common
//! ground. It also re-exports the allocator and string types the rest of the
//! workspace is built from.
//!
//! # Example
//!
//! ```
//! use maquette_palette::{is_html_tag, naming};
//!
//! assert!(is_html_tag("div"));
//! assert!(!is_html_tag("my-widget"));
//! assert_eq!(naming::to_kebab_case("MyWidget"), "my-widget");
//! ```

pub mod builtins;
pub mod dom_tags;
pub mod naming;

// Re-export allocator types
pub use bumpalo::boxed::Box;
pub use bumpalo::collections::String as BumpString;
pub use bumpalo::collections::Vec;
pub use bumpalo::Bump;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

pub use builtins::is_builtin_component;
pub use dom_tags::{is_html_tag, is_svg_tag};
