//! The typed data model shared by the type checker and the code generator.
//!
//! This module converts the generic syntax tree into immutable value types:
//!
//! - `Atom` - a leaf holding a single literal
//! - `Form` - an ordered sequence of child nodes
//! - `Function` - a named definition with parameters and a body
//! - `Namespace` - the insertion-ordered name to function mapping
//!
//! It also owns the fixed builtin-operator table both back-end passes
//! dispatch on.

pub mod ast;
pub mod builtins;
pub mod function;
