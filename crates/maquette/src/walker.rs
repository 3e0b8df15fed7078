//! Template traversal for the unregistered-component check.
//!
//! One top-down pass over the document tree. Element names that belong to
//! neither the host vocabulary nor the framework built-ins are collected as
//! candidate usages, together with the two `is` attribute forms that name a
//! component dynamically. Reconciliation against the registered names runs
//! once, on exit from the outermost template root.

use crate::config::IgnoreMatcher;
use crate::context::CheckContext;
use crate::diagnostic::Diagnostic;
use maquette_esquisse::ast::{
    AttributeNode, DirectiveNode, ElementNode, ExpressionNode, PropNode, RootNode,
    TemplateChildNode,
};
use maquette_palette::naming::to_kebab_case;
use maquette_palette::{is_builtin_component, is_html_tag, is_svg_tag, CompactString, FxHashSet};

/// Stable identifier carried on every diagnostic this check produces
pub const CHECK_CODE: &str = "template/no-unregistered-components";

/// Walks one document tree, feeding the per-document context.
pub struct TemplateWalker<'a, 'ctx> {
    ctx: &'ctx mut CheckContext<'a>,
    matcher: &'ctx IgnoreMatcher,
}

impl<'a, 'ctx> TemplateWalker<'a, 'ctx> {
    #[inline]
    pub fn new(ctx: &'ctx mut CheckContext<'a>, matcher: &'ctx IgnoreMatcher) -> Self {
        Self { ctx, matcher }
    }

    /// Visit the document root and traverse every child in document order
    pub fn visit_root(&mut self, root: &'a RootNode<'a>) {
        for child in root.children.iter() {
            self.visit_child(child);
        }
    }

    fn visit_child(&mut self, node: &'a TemplateChildNode<'a>) {
        match node {
            TemplateChildNode::Element(element) => self.visit_element(element),
            TemplateChildNode::If(if_node) => {
                for branch in if_node.branches.iter() {
                    for child in branch.children.iter() {
                        self.visit_child(child);
                    }
                }
            }
            TemplateChildNode::IfBranch(branch) => {
                for child in branch.children.iter() {
                    self.visit_child(child);
                }
            }
            TemplateChildNode::For(for_node) => {
                for child in for_node.children.iter() {
                    self.visit_child(child);
                }
            }
            TemplateChildNode::Text(_)
            | TemplateChildNode::Comment(_)
            | TemplateChildNode::Interpolation(_) => {}
        }
    }

    fn visit_element(&mut self, element: &'a ElementNode<'a>) {
        let tag = element.tag.as_str();
        if tag == "template" {
            self.ctx.mark_template_root(element.loc.start);
        }

        self.collect_element_usage(element);

        for prop in element.props.iter() {
            match prop {
                PropNode::Attribute(attribute) => self.collect_is_attribute(attribute),
                PropNode::Directive(directive) => self.collect_is_binding(directive),
            }
        }

        for child in element.children.iter() {
            self.visit_child(child);
        }

        // Reconciliation fires exactly once per document: only the outermost
        // template root can match the first-seen marker, and a root whose
        // markup lives in another file (src attribute) is skipped entirely.
        if tag == "template"
            && self.ctx.is_first_template_root(element.loc.start)
            && !has_src_attribute(element)
        {
            self.reconcile();
        }
    }

    /// Classify an element name: well-known host element, framework built-in,
    /// or custom component usage. Only the last produces a usage record.
    fn collect_element_usage(&mut self, element: &'a ElementNode<'a>) {
        let tag = element.tag.as_str();
        if is_html_tag(tag) || is_svg_tag(tag) {
            return;
        }
        // Built-ins are consulted only for names that are not well-known host
        // elements, so a coincidentally named host element stays a host element.
        if is_builtin_component(tag) {
            return;
        }
        self.ctx.record_usage(tag, &element.loc);
    }

    /// A static `is` attribute always names a component (legacy in-DOM
    /// template idiom), with no well-known-name exemption.
    fn collect_is_attribute(&mut self, attribute: &'a AttributeNode) {
        if attribute.name != "is" {
            return;
        }
        if let Some(value) = &attribute.value {
            self.ctx
                .record_usage(value.content.clone(), &attribute.loc);
        }
    }

    /// A `bind` directive with the `is` argument (or the legacy `is`
    /// directive) introduces a usage only when its value is a compile-time
    /// string literal; computed expressions carry too little information and
    /// are skipped. A literal naming a well-known HTML element is the element
    /// itself, not a component reference.
    fn collect_is_binding(&mut self, directive: &'a DirectiveNode<'a>) {
        let binds_is = directive.name == "bind"
            && matches!(&directive.arg, Some(arg) if static_arg_is(arg));
        if !binds_is && directive.name != "is" {
            return;
        }
        let Some(exp) = &directive.exp else {
            return;
        };
        let Some(literal) = string_literal(exp) else {
            return;
        };
        if is_html_tag(literal) {
            return;
        }
        self.ctx.record_usage(literal, &directive.loc);
    }

    /// Match collected usages against registered names. Both sides compare by
    /// their kebab-case rendering; reporting preserves collection order.
    fn reconcile(&mut self) {
        let registered: FxHashSet<CompactString> = self
            .ctx
            .registered()
            .iter()
            .map(|name| to_kebab_case(name))
            .collect();

        let mut diagnostics = Vec::new();
        for usage in self.ctx.usages() {
            if self.matcher.is_exempt(&usage.name) {
                continue;
            }
            if registered.contains(to_kebab_case(&usage.name).as_str()) {
                continue;
            }
            diagnostics.push(Diagnostic::warn(
                CHECK_CODE,
                format!(
                    "The \"{}\" component has been used but not registered.",
                    usage.name
                ),
                usage.name.clone(),
                usage.loc.start.offset,
                usage.loc.end.offset,
            ));
        }
        for diagnostic in diagnostics {
            self.ctx.report(diagnostic);
        }
    }
}

fn has_src_attribute(element: &ElementNode<'_>) -> bool {
    element
        .props
        .iter()
        .any(|prop| matches!(prop, PropNode::Attribute(attribute) if attribute.name == "src"))
}

fn static_arg_is(arg: &ExpressionNode<'_>) -> bool {
    matches!(arg, ExpressionNode::Simple(simple) if simple.is_static && simple.content == "is")
}

/// Extract the string value of a compile-time literal expression, if any.
///
/// Two shapes count as literals: a simple expression the parser already
/// marked static, and a simple expression whose content is a single quoted
/// string with no embedded quotes. Everything else is unresolvable.
fn string_literal<'e>(exp: &'e ExpressionNode<'_>) -> Option<&'e str> {
    let ExpressionNode::Simple(simple) = exp else {
        return None;
    };
    if simple.is_static {
        return Some(simple.content.as_str());
    }
    let content = simple.content.trim();
    let inner = content
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            content
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        })?;
    if inner.contains('\'') || inner.contains('"') {
        return None;
    }
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maquette_esquisse::ast::{SimpleExpressionNode, SourceLocation};
    use maquette_palette::{Box, Bump};

    fn simple_exp<'a>(allocator: &'a Bump, content: &str, is_static: bool) -> ExpressionNode<'a> {
        ExpressionNode::Simple(Box::new_in(
            SimpleExpressionNode::new(content, is_static, SourceLocation::STUB),
            allocator,
        ))
    }

    #[test]
    fn test_string_literal_single_quoted() {
        let allocator = Bump::new();
        let exp = simple_exp(&allocator, "'my-widget'", false);
        assert_eq!(string_literal(&exp), Some("my-widget"));
    }

    #[test]
    fn test_string_literal_double_quoted() {
        let allocator = Bump::new();
        let exp = simple_exp(&allocator, r#""MyWidget""#, false);
        assert_eq!(string_literal(&exp), Some("MyWidget"));
    }

    #[test]
    fn test_string_literal_static_content() {
        let allocator = Bump::new();
        let exp = simple_exp(&allocator, "my-widget", true);
        assert_eq!(string_literal(&exp), Some("my-widget"));
    }

    #[test]
    fn test_string_literal_rejects_expressions() {
        let allocator = Bump::new();
        assert_eq!(string_literal(&simple_exp(&allocator, "dynamicName", false)), None);
        assert_eq!(
            string_literal(&simple_exp(&allocator, "cond ? 'a' : 'b'", false)),
            None
        );
        assert_eq!(string_literal(&simple_exp(&allocator, "'a' + 'b'", false)), None);
    }

    #[test]
    fn test_string_literal_rejects_compound_expressions() {
        use maquette_esquisse::ast::CompoundExpressionNode;
        let allocator = Bump::new();
        let exp = ExpressionNode::Compound(Box::new_in(
            CompoundExpressionNode::new(&allocator, SourceLocation::STUB),
            &allocator,
        ));
        assert!(string_literal(&exp).is_none());
    }

    #[test]
    fn test_static_arg_is() {
        let allocator = Bump::new();
        assert!(static_arg_is(&simple_exp(&allocator, "is", true)));
        assert!(!static_arg_is(&simple_exp(&allocator, "is", false)));
        assert!(!static_arg_is(&simple_exp(&allocator, "class", true)));
    }
}
