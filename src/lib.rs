#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::Error;

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    if pos >= source.len() {
        panic!("Position exceeds source length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_display_error_at_end_of_input() {
        let source = "(print 1";
        let error = Error::new(
            ErrorImpl::UnexpectedEof,
            Position(source.len() as u32, Rc::new("shell".to_string())),
        );

        // Must fall back to the message-only form, not panic.
        super::display_error(&error, source);
    }

    #[test]
    fn test_get_line_at_position() {
        let source = "(print 1)\n(print 2)\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 7);
        assert_eq!(line_number, 1);
        assert_eq!(line, "(print 1)\n");
        assert_eq!(line_pos, 7);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "(print 2)\n");
        assert_eq!(line_pos, 1);
    }
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: UnrecognisedToken (unrecognised token: "@")
        -> repl.lisp
           |
         2 | (print @)
           | -------^
    */

    // An end-of-input position has no line to point at, so errors raised
    // there are reported message-only like position-free semantic errors.
    let position = match error.get_position() {
        Some(position) if (position.0 as usize) < source.len() => position,
        _ => {
            println!("Error: {} ({})", error.get_error_name(), error);
            return;
        }
    };

    println!("Error: {} ({})", error.get_error_name(), error);
    println!("-> {}", position.1);

    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
