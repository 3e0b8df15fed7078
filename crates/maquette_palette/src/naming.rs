//! Naming convention utilities for component identifiers.
//!
//! Converts an identifier into its canonical kebab-case, PascalCase,
//! camelCase, or snake_case rendering regardless of how the input was
//! spelled. Conversion is word-based: an input is first split into words at
//! separators (`-`, `_`) and at case transitions, then the words are rebuilt
//! in the requested style, so `MyWidget`, `my-widget`, `myWidget` and
//! `my_widget` all share the same four renderings.

use compact_str::CompactString;

/// One of the four supported identifier casing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasingStyle {
    /// kebab-case: `my-widget`
    Kebab,
    /// PascalCase: `MyWidget`
    Pascal,
    /// camelCase: `myWidget`
    Camel,
    /// snake_case: `my_widget`
    Snake,
}

/// Render an identifier in the given casing style.
pub fn normalize(identifier: &str, style: CasingStyle) -> CompactString {
    match style {
        CasingStyle::Kebab => to_kebab_case(identifier),
        CasingStyle::Pascal => to_pascal_case(identifier),
        CasingStyle::Camel => to_camel_case(identifier),
        CasingStyle::Snake => to_snake_case(identifier),
    }
}

/// Convert an identifier to kebab-case.
///
/// # Examples
/// ```
/// use maquette_palette::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("MyWidget"), "my-widget");
/// assert_eq!(to_kebab_case("myWidget"), "my-widget");
/// assert_eq!(to_kebab_case("my_widget"), "my-widget");
/// assert_eq!(to_kebab_case("HTMLElement"), "html-element");
/// ```
pub fn to_kebab_case(identifier: &str) -> CompactString {
    joined_lower(identifier, '-')
}

/// Convert an identifier to snake_case.
pub fn to_snake_case(identifier: &str) -> CompactString {
    joined_lower(identifier, '_')
}

/// Convert an identifier to PascalCase.
///
/// # Examples
/// ```
/// use maquette_palette::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my-widget"), "MyWidget");
/// assert_eq!(to_pascal_case("myWidget"), "MyWidget");
/// assert_eq!(to_pascal_case("MyWidget"), "MyWidget");
/// ```
pub fn to_pascal_case(identifier: &str) -> CompactString {
    let mut result = String::with_capacity(identifier.len());
    for word in words(identifier) {
        push_capitalized(&mut result, word);
    }
    CompactString::from(result)
}

/// Convert an identifier to camelCase.
///
/// # Examples
/// ```
/// use maquette_palette::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("my-widget"), "myWidget");
/// assert_eq!(to_camel_case("MyWidget"), "myWidget");
/// ```
pub fn to_camel_case(identifier: &str) -> CompactString {
    let mut result = String::with_capacity(identifier.len());
    for (i, word) in words(identifier).into_iter().enumerate() {
        if i == 0 {
            result.extend(word.chars().map(|c| c.to_ascii_lowercase()));
        } else {
            push_capitalized(&mut result, word);
        }
    }
    CompactString::from(result)
}

fn joined_lower(identifier: &str, separator: char) -> CompactString {
    let mut result = String::with_capacity(identifier.len() + 4);
    for (i, word) in words(identifier).into_iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.extend(word.chars().map(|c| c.to_ascii_lowercase()));
    }
    CompactString::from(result)
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

/// Split an identifier into words.
///
/// Boundaries sit at separator characters, at a lower-to-upper transition
/// (`fooBar`), and before the last capital of an all-caps run followed by a
/// lowercase letter (`HTMLElement` splits as `HTML` / `Element`).
fn words(identifier: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = identifier.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if matches!(c, '-' | '_' | ' ' | '.') {
            if let Some(word_start) = start.take() {
                words.push(&identifier[word_start..pos]);
            }
            continue;
        }
        match start {
            None => start = Some(pos),
            Some(word_start) if c.is_ascii_uppercase() => {
                let prev = chars[i - 1].1;
                let next_is_lower = chars
                    .get(i + 1)
                    .is_some_and(|&(_, next)| next.is_ascii_lowercase());
                if prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower)
                {
                    words.push(&identifier[word_start..pos]);
                    start = Some(pos);
                }
            }
            Some(_) => {}
        }
    }
    if let Some(word_start) = start {
        words.push(&identifier[word_start..]);
    }
    words
}
