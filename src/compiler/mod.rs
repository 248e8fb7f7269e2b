//! Code generation for the Python target.
//!
//! Generation is purely syntactic: no type information is consulted. The
//! builtin forms are emitted through a fixed table with arity and shape
//! validation; any other form head is emitted as a generic function call.
//! The program orchestrator validates the root level, builds the
//! namespace and drives whole-program emission.

pub mod compiler;
pub mod program;
