use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::ast::{Ast, AstNode},
};

/// A literal value carried by an atom.
///
/// `Str` stores the text without the surrounding quotes; they are re-added
/// by the display form. `Text` is the raw token text of names and
/// operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
    Str(String),
    Bool(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Text(text) => write!(f, "{}", text),
            Literal::Number(value) => write!(f, "{}", format_number(*value)),
            Literal::Str(text) => write!(f, "\"{}\"", text),
            Literal::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// A leaf syntax node holding a single literal or name token.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub value: Literal,
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An interior syntax node: an ordered list of children, conventionally
/// `(operator arg1 arg2 ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub elements: Vec<Node>,
}

impl Form {
    /// Returns the head atom of the form.
    ///
    /// A form used in operator position must start with an atom; a nested
    /// form in head position is a shape error, as is an empty form.
    pub fn head(&self) -> Result<&Atom, Error> {
        match self.elements.first() {
            Some(Node::Atom(atom)) => Ok(atom),
            Some(Node::Form(form)) => Err(Error::semantic(ErrorImpl::FormHeadNotAtom {
                found: form.to_string(),
            })),
            None => Err(Error::semantic(ErrorImpl::EmptyForm)),
        }
    }

    /// Returns the textual name of the head atom.
    pub fn head_name(&self) -> Result<String, Error> {
        Ok(self.head()?.value.to_string())
    }

    /// The arguments of the form: every element after the head.
    pub fn args(&self) -> &[Node] {
        if self.elements.is_empty() {
            &[]
        } else {
            &self.elements[1..]
        }
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "({})", rendered.join(" "))
    }
}

/// A node of the typed data model. Closed sum: both back-end passes match
/// exhaustively on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Atom(Atom),
    Form(Form),
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Atom(atom) => write!(f, "{}", atom),
            Node::Form(form) => write!(f, "{}", form),
        }
    }
}

/// Converts one generic syntax node into the typed data model.
pub fn to_object(node: &AstNode) -> Result<Node, Error> {
    match node {
        AstNode::Leaf(token) => {
            let literal = match token.kind {
                TokenKind::Number => {
                    let value = token.value.parse::<f64>().map_err(|_| {
                        Error::new(
                            ErrorImpl::NumberParseError {
                                token: token.value.clone(),
                            },
                            token.span.start.clone(),
                        )
                    })?;
                    Literal::Number(value)
                }
                TokenKind::String => Literal::Str(token.value.clone()),
                TokenKind::Symbol => match token.value.as_str() {
                    "true" => Literal::Bool(true),
                    "false" => Literal::Bool(false),
                    _ => Literal::Text(token.value.clone()),
                },
                // Parentheses and EOF never survive parsing as leaves.
                _ => {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ))
                }
            };
            Ok(Node::Atom(Atom { value: literal }))
        }
        AstNode::Tree(children) => {
            let elements = children
                .iter()
                .map(to_object)
                .collect::<Result<Vec<Node>, Error>>()?;
            Ok(Node::Form(Form { elements }))
        }
    }
}

/// Converts every root-level node of a generic syntax tree.
pub fn to_objects(ast: &Ast) -> Result<Vec<Node>, Error> {
    ast.children.iter().map(to_object).collect()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
