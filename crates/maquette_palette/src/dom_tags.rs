//! Well-known host-language element vocabularies.
//!
//! Lookup for the tag names that belong to the host markup language itself
//! and therefore never name a component. HTML and SVG are kept as separate
//! namespaces because callers need to consult them independently.
//!
//! Uses compile-time perfect hash functions (phf) for O(1) lookup with zero
//! runtime initialization cost. Lookup is case-sensitive: the HTML vocabulary
//! is lowercase as written in markup, the SVG vocabulary keeps its mixed-case
//! names (`foreignObject`, `linearGradient`).

use phf::phf_set;

/// HTML element names, including obsolete elements that parsers still
/// recognize. `template` and `slot` are part of this vocabulary.
static HTML_TAGS_SET: phf::Set<&'static str> = phf_set! {
    // Document metadata
    "html", "head", "base", "link", "meta", "style", "title", "body",
    // Content sectioning
    "address", "article", "aside", "footer", "header",
    "h1", "h2", "h3", "h4", "h5", "h6", "hgroup",
    "main", "nav", "section", "search",
    // Text content
    "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "hr", "li", "menu", "ol", "p", "pre", "ul",
    // Inline text semantics
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn",
    "em", "i", "kbd", "mark", "q", "rp", "rt", "ruby", "s", "samp",
    "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
    // Image and multimedia
    "area", "audio", "img", "map", "track", "video",
    // Embedded content
    "embed", "iframe", "object", "param", "picture", "portal", "source",
    // Scripting
    "canvas", "noscript", "script",
    // Demarcating edits
    "del", "ins",
    // Table content
    "caption", "col", "colgroup", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr",
    // Forms
    "button", "datalist", "fieldset", "form", "input", "label", "legend",
    "meter", "optgroup", "option", "output", "progress", "select",
    "textarea",
    // Interactive elements
    "details", "dialog", "summary",
    // Web components
    "slot", "template",
    // Obsolete and deprecated
    "acronym", "applet", "basefont", "bgsound", "big", "blink", "center",
    "command", "content", "dir", "element", "font", "frame", "frameset",
    "image", "isindex", "keygen", "listing", "marquee", "menuitem",
    "multicol", "nextid", "nobr", "noembed", "noframes", "plaintext",
    "rb", "rtc", "shadow", "spacer", "strike", "tt", "xmp",
};

/// SVG element names, case-sensitive as they appear in markup.
static SVG_TAGS_SET: phf::Set<&'static str> = phf_set! {
    "svg", "animate", "animateMotion", "animateTransform", "circle",
    "clipPath", "color-profile", "defs", "desc", "discard", "ellipse",
    "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite",
    "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap",
    "feDistantLight", "feDropShadow", "feFlood", "feFuncA", "feFuncB",
    "feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge",
    "feMergeNode", "feMorphology", "feOffset", "fePointLight",
    "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence",
    "filter", "foreignObject", "g", "hatch", "hatchpath", "image", "line",
    "linearGradient", "marker", "mask", "mesh", "meshgradient",
    "meshpatch", "meshrow", "metadata", "mpath", "path", "pattern",
    "polygon", "polyline", "radialGradient", "rect", "set", "solidcolor",
    "stop", "switch", "symbol", "text", "textPath", "tspan", "unknown",
    "use", "view",
};

/// Check if a name is a well-known HTML element.
#[inline]
pub fn is_html_tag(tag: &str) -> bool {
    HTML_TAGS_SET.contains(tag)
}

/// Check if a name is a well-known SVG element.
#[inline]
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAGS_SET.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tags() {
        assert!(is_html_tag("div"));
        assert!(is_html_tag("template"));
        assert!(is_html_tag("slot"));
        assert!(is_html_tag("marquee"));
        assert!(!is_html_tag("my-widget"));
        assert!(!is_html_tag("MyWidget"));
    }

    #[test]
    fn test_html_lookup_is_case_sensitive() {
        assert!(!is_html_tag("Div"));
        assert!(!is_html_tag("TEMPLATE"));
    }

    #[test]
    fn test_svg_tags() {
        assert!(is_svg_tag("svg"));
        assert!(is_svg_tag("foreignObject"));
        assert!(is_svg_tag("linearGradient"));
        assert!(!is_svg_tag("foreignobject"));
        assert!(!is_svg_tag("div"));
    }
}
