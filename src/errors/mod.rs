//! Error types for the compiler.
//!
//! Every public operation in the crate reports failure through the `Error`
//! type defined here. There is no panicking error channel inside the core:
//! the lexer, parser, type checker and code generator all return
//! `Result<_, Error>` and leave the decision to abort or continue to the
//! caller. The single advisory condition (redefining a builtin operator)
//! is modelled as a `Warning` instead.

pub mod errors;

#[cfg(test)]
pub mod tests;
