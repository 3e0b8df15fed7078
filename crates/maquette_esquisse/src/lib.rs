//! # maquette_esquisse
//!
//! Esquisse - The sketched AST surface for Maquette templates.
//!
//! An esquisse is the quick preliminary sketch a painter works from before
//! touching the canvas. This crate is the sketch the external parser hands to
//! the checker: arena-allocated template AST nodes with element, attribute,
//! directive, text and control-flow kinds, each carrying its source span.
//!
//! No parser lives here. Hosts produce these nodes from their own front end;
//! the checker only ever borrows them.

pub mod ast;

pub use ast::{
    AttributeNode, CommentNode, CompoundExpressionChild, CompoundExpressionNode, DirectiveNode,
    ElementNode, ExpressionNode, ForNode, IfBranchNode, IfNode, InterpolationNode, NodeType,
    Position, PropNode, RootNode, SimpleExpressionNode, SourceLocation, TemplateChildNode,
    TextNode,
};
