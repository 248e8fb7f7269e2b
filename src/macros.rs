//! Utility macros for the compiler.
//!
//! This module defines the `MK_DEFAULT_HANDLER!` macro, which builds a lexer
//! handler for fixed single-character tokens such as the parentheses. Tokens
//! with dynamic content (numbers, strings, symbols) have hand-written
//! handlers in the lexer module instead.

/// Creates a default lexer handler for a fixed literal token.
///
/// The generated handler pushes a token of the given kind spanning the
/// literal text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\(").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "("),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            let span = lexer.span_here($value.len());
            lexer.push(Token::new($kind, String::from($value), span));
            lexer.advance_n($value.len() as i32);
        }
    };
}
