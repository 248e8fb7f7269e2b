use crate::lexer::tokens::Token;

/// The generic syntax tree produced by the parser.
///
/// Each root-level child is one complete s-expression. This is the opaque
/// input shape consumed by the compiler core; an external parser producing
/// the same structure can drive the compiler without going through the
/// bundled lexer.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    pub children: Vec<AstNode>,
}

/// A node of the generic syntax tree: either a leaf holding a literal
/// token or an interior node with ordered children.
#[derive(Debug, Clone)]
pub enum AstNode {
    Leaf(Token),
    Tree(Vec<AstNode>),
}
