//! Parser for s-expression source.
//!
//! The parser builds a generic syntax tree (`Ast`): an ordered forest of
//! nodes that are either leaves holding a single token or interior nodes
//! holding an ordered list of children. The tree carries no semantic
//! information; the typed data model in the `ast` module is built from it
//! in a separate conversion step.

pub mod ast;
pub mod parser;
