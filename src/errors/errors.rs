use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Position;

/// A compilation failure: an error kind plus, for front-end errors, the
/// source position it was detected at.
///
/// Semantic errors (type, arity, name and shape errors) are raised on AST
/// values that no longer carry source positions, so their position is
/// `None` and only the message localizes the offending sub-expression.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Creates an error with no source position attached.
    pub fn semantic(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::FormHeadNotAtom { .. } => "FormHeadNotAtom",
            ErrorImpl::EmptyForm => "EmptyForm",
            ErrorImpl::MalformedDefinition { .. } => "MalformedDefinition",
            ErrorImpl::MalformedImport { .. } => "MalformedImport",
            ErrorImpl::RootLevelAtom { .. } => "RootLevelAtom",
            ErrorImpl::InvalidRootForm { .. } => "InvalidRootForm",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::UnknownAtom { .. } => "UnknownAtom",
            ErrorImpl::UnrecognizedForm { .. } => "UnrecognizedForm",
            ErrorImpl::MissingEntryPoint => "MissingEntryPoint",
            ErrorImpl::IncompatibleListTypes { .. } => "IncompatibleListTypes",
            ErrorImpl::ListElementTypeMismatch { .. } => "ListElementTypeMismatch",
            ErrorImpl::AppendTypeMismatch { .. } => "AppendTypeMismatch",
            ErrorImpl::NonListArgument { .. } => "NonListArgument",
            ErrorImpl::ConditionNotBool { .. } => "ConditionNotBool",
            ErrorImpl::BranchTypeMismatch { .. } => "BranchTypeMismatch",
            ErrorImpl::OperatorTypeMismatch { .. } => "OperatorTypeMismatch",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

/// The closed set of failure kinds, one variant per error category of the
/// compiler: front-end errors, shape errors, arity errors, name errors and
/// type errors.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input inside a form")]
    UnexpectedEof,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected an atom as the first element of a form, but got {found}")]
    FormHeadNotAtom { found: String },
    #[error("cannot process an empty form")]
    EmptyForm,
    #[error("malformed function definition: {message}")]
    MalformedDefinition { message: String },
    #[error("malformed import: {message}")]
    MalformedImport { message: String },
    #[error("got unexpected object at root-level: {node}")]
    RootLevelAtom { node: String },
    #[error("expected only function definitions and imports at root-level but got: {node}")]
    InvalidRootForm { node: String },
    #[error("'{operator}' takes {expected} argument{} but {received} were given", plural(.expected))]
    ArityMismatch {
        operator: String,
        expected: usize,
        received: usize,
    },
    #[error("cannot infer type of '{value}'")]
    UnknownAtom { value: String },
    #[error("unrecognized form '{name}', cannot infer type")]
    UnrecognizedForm { name: String },
    #[error("function 'main' is not defined")]
    MissingEntryPoint,
    #[error("incompatible list types '{left}', '{right}'")]
    IncompatibleListTypes { left: String, right: String },
    #[error("list {position}-th element has type '{found}' which is not compatible with inferred type '{expected}'")]
    ListElementTypeMismatch {
        position: usize,
        found: String,
        expected: String,
    },
    #[error("cannot append element of type '{element}' to '{list}'")]
    AppendTypeMismatch { element: String, list: String },
    #[error("'{operator}' expected a non-empty List type but got '{found}'")]
    NonListArgument { operator: String, found: String },
    #[error("expected if condition to have type 'Bool' but got '{found}'")]
    ConditionNotBool { found: String },
    #[error("incompatible types in if branches: '{left}' and '{right}'")]
    BranchTypeMismatch { left: String, right: String },
    #[error("'{operator}' expected '{expected}' but got '{found}'")]
    OperatorTypeMismatch {
        operator: String,
        expected: String,
        found: String,
    },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Advisory diagnostics collected alongside successful compilation.
///
/// Warnings never abort a compilation; they are returned to the caller
/// through an explicit sink rather than written to ambient logging.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    BuiltinRedefinition { name: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::BuiltinRedefinition { name } => {
                write!(f, "builtin function '{}' is being redefined", name)
            }
        }
    }
}
