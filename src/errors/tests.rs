//! Unit tests for error handling.
//!
//! This module contains tests for error construction, naming and messages.

use crate::errors::errors::{Error, ErrorImpl, Warning};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lisp".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.get_position().is_some());
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lisp".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        pos,
    );

    assert_eq!(error.get_position().unwrap().0, 42);
}

#[test]
fn test_semantic_error_has_no_position() {
    let error = Error::semantic(ErrorImpl::MissingEntryPoint);

    assert!(error.get_position().is_none());
    assert_eq!(error.get_error_name(), "MissingEntryPoint");
    assert_eq!(error.to_string(), "function 'main' is not defined");
}

#[test]
fn test_arity_mismatch_message() {
    let error = Error::semantic(ErrorImpl::ArityMismatch {
        operator: "not".to_string(),
        expected: 1,
        received: 2,
    });

    assert_eq!(error.get_error_name(), "ArityMismatch");
    assert_eq!(error.to_string(), "'not' takes 1 argument but 2 were given");
}

#[test]
fn test_arity_mismatch_message_pluralizes() {
    let error = Error::semantic(ErrorImpl::ArityMismatch {
        operator: "if".to_string(),
        expected: 3,
        received: 2,
    });

    assert_eq!(error.to_string(), "'if' takes 3 arguments but 2 were given");
}

#[test]
fn test_type_mismatch_message() {
    let error = Error::semantic(ErrorImpl::IncompatibleListTypes {
        left: "List<Number>".to_string(),
        right: "List<String>".to_string(),
    });

    assert_eq!(error.get_error_name(), "IncompatibleListTypes");
    assert_eq!(
        error.to_string(),
        "incompatible list types 'List<Number>', 'List<String>'"
    );
}

#[test]
fn test_unknown_atom_message() {
    let error = Error::semantic(ErrorImpl::UnknownAtom {
        value: "undefined_name".to_string(),
    });

    assert_eq!(error.to_string(), "cannot infer type of 'undefined_name'");
}

#[test]
fn test_warning_display() {
    let warning = Warning::BuiltinRedefinition {
        name: "first".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "builtin function 'first' is being redefined"
    );
}
