//! Lexical analysis for s-expression source text.
//!
//! The lexer turns raw source into a flat token stream: parentheses,
//! numbers, strings, symbols and a trailing EOF marker. Whitespace and
//! `;` line comments are skipped. Matching is driven by a table of regex
//! patterns tried in order at the current position.

pub mod lexer;
pub mod tokens;
