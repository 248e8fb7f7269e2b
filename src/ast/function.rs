use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorImpl};

use super::ast::{Atom, Form, Literal, Node};

/// The reserved form-head name that introduces a function definition.
pub const DEFINITION_KEYWORD: &str = "defun";

/// The reserved entry-point name. A function of this name is emitted as
/// the program-entry block rather than a callable definition.
pub const ENTRY_POINT: &str = "main";

/// A user-defined function: `(defun name (params...) body...)`.
///
/// Parameter names are not checked for uniqueness; a duplicate name is
/// compiled faithfully and rejected by the target language instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<String>,
    pub body: Vec<Node>,
}

/// Returns whether a node is a root-level function definition form.
pub fn is_function_def(node: &Node) -> bool {
    head_text(node) == Some(DEFINITION_KEYWORD)
}

/// Returns whether a node is a root-level import form.
pub fn is_import(node: &Node) -> bool {
    head_text(node) == Some("import")
}

fn head_text(node: &Node) -> Option<&str> {
    match node {
        Node::Form(form) => match form.elements.first() {
            Some(Node::Atom(Atom {
                value: Literal::Text(text),
            })) => Some(text.as_str()),
            _ => None,
        },
        Node::Atom(_) => None,
    }
}

/// Builds a `Function` from a root-level definition form.
pub fn to_function(form: &Form) -> Result<Function, Error> {
    if form.elements.len() < 4 {
        return Err(Error::semantic(ErrorImpl::MalformedDefinition {
            message: format!(
                "expected ({} name (params...) body...) but got {}",
                DEFINITION_KEYWORD, form
            ),
        }));
    }

    let name = match &form.elements[1] {
        Node::Atom(Atom {
            value: Literal::Text(name),
        }) => name.clone(),
        other => {
            return Err(Error::semantic(ErrorImpl::MalformedDefinition {
                message: format!("function name must be a plain atom, got {}", other),
            }))
        }
    };

    let args = match &form.elements[2] {
        Node::Form(params) => params
            .elements
            .iter()
            .map(|param| match param {
                Node::Atom(Atom {
                    value: Literal::Text(text),
                }) => Ok(text.clone()),
                other => Err(Error::semantic(ErrorImpl::MalformedDefinition {
                    message: format!("parameter must be a plain atom, got {}", other),
                })),
            })
            .collect::<Result<Vec<String>, Error>>()?,
        other => {
            return Err(Error::semantic(ErrorImpl::MalformedDefinition {
                message: format!("expected a parameter list form, got {}", other),
            }))
        }
    };

    Ok(Function {
        name,
        args,
        body: form.elements[3..].to_vec(),
    })
}

/// The name to function-definition mapping visible during one compilation.
///
/// Iteration follows first-insertion order so emitted output is
/// deterministic; inserting an existing name overwrites the definition in
/// place (last writer wins) without moving it.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    index: HashMap<String, usize>,
    functions: Vec<Function>,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace::default()
    }

    pub fn insert(&mut self, function: Function) {
        match self.index.get(&function.name) {
            Some(&slot) => {
                self.functions[slot] = function;
            }
            None => {
                self.index.insert(function.name.clone(), self.functions.len());
                self.functions.push(function);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.index.get(name).map(|&slot| &self.functions[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Namespace {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
