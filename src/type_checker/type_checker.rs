use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Atom, Form, Literal, Node},
        builtins::Builtin,
        function::{is_function_def, is_import, Namespace},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::types::Type;

/// Reconciles two possibly partially-known list types into the most
/// specific common type.
///
/// Symmetric: both argument orders are tried. Two `List` types unify
/// recursively on their elements; a `List` against `EmptyList` or a
/// compatible `PossibleEmptyList` loses its non-emptiness; structurally
/// equal types unify to themselves. Everything else fails with both type
/// names in the message.
pub fn unify_list_types(t1: &Type, t2: &Type) -> Result<Type, Error> {
    if t1 == t2 {
        return Ok(t1.clone());
    }

    if let Some(unified) = unify_directed(t1, t2).or_else(|| unify_directed(t2, t1)) {
        return Ok(unified);
    }

    Err(Error::semantic(ErrorImpl::IncompatibleListTypes {
        left: t1.name(),
        right: t2.name(),
    }))
}

fn unify_directed(t1: &Type, t2: &Type) -> Option<Type> {
    match (t1, t2) {
        (Type::List(left), Type::List(right)) => {
            let element = unify_list_types(left, right).ok()?;
            Some(Type::list_of(element))
        }
        (Type::List(element), Type::EmptyList) => {
            Some(Type::PossibleEmptyList(element.clone()))
        }
        (Type::List(left), Type::PossibleEmptyList(right)) => {
            let element = unify_list_types(left, right).ok()?;
            Some(Type::possibly_empty_list_of(element))
        }
        _ => None,
    }
}

/// Infers the type of a node against the given name bindings.
///
/// Failure carries the first error found in a sub-expression, unchanged.
pub fn infer_type(node: &Node, namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    match node {
        Node::Atom(atom) => infer_atom(atom, namespace),
        Node::Form(form) => infer_form(form, namespace),
    }
}

fn infer_atom(atom: &Atom, namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    match &atom.value {
        Literal::Str(_) => Ok(Type::String),
        Literal::Bool(_) => Ok(Type::Bool),
        Literal::Number(_) => Ok(Type::Number),
        Literal::Text(text) => {
            if is_string_literal(text) {
                return Ok(Type::String);
            }
            if text == "true" || text == "false" {
                return Ok(Type::Bool);
            }
            if let Some(bound) = namespace.get(text) {
                return Ok(bound.clone());
            }
            if text.parse::<f64>().is_ok() {
                return Ok(Type::Number);
            }
            Err(Error::semantic(ErrorImpl::UnknownAtom {
                value: text.clone(),
            }))
        }
    }
}

// Raw text from an external tree may still carry its quotes.
fn is_string_literal(text: &str) -> bool {
    text == "\"\"" || (text.len() >= 2 && text.starts_with('"') && text.ends_with('"'))
}

fn infer_form(form: &Form, namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    let name = form.head_name()?;

    // A namespace binding shadows the builtin of the same name entirely.
    if let Some(bound) = namespace.get(&name) {
        return Ok(bound.clone());
    }

    let builtin = match Builtin::lookup(&name) {
        Some(builtin) => builtin,
        None => {
            return Err(Error::semantic(ErrorImpl::UnrecognizedForm { name }));
        }
    };

    let args = form.args();

    match builtin {
        Builtin::List => infer_list(args, namespace),
        Builtin::Append => infer_append(args, namespace),
        Builtin::First => {
            let list_type = infer_single(&name, args, namespace)?;
            match list_type {
                Type::List(element) => Ok(*element),
                other => Err(Error::semantic(ErrorImpl::NonListArgument {
                    operator: name,
                    found: other.name(),
                })),
            }
        }
        Builtin::Rest => {
            let list_type = infer_single(&name, args, namespace)?;
            match list_type {
                Type::List(element) => Ok(Type::PossibleEmptyList(element)),
                other => Err(Error::semantic(ErrorImpl::NonListArgument {
                    operator: name,
                    found: other.name(),
                })),
            }
        }
        Builtin::If => infer_if(args, namespace),
        Builtin::Add | Builtin::Subtract | Builtin::Multiply | Builtin::Divide => {
            expect_argument_types(&name, args, namespace, &Type::Number)?;
            Ok(Type::Number)
        }
        Builtin::Less | Builtin::Greater | Builtin::LessEquals | Builtin::GreaterEquals => {
            expect_argument_types(&name, args, namespace, &Type::Number)?;
            Ok(Type::Bool)
        }
        Builtin::Not | Builtin::And | Builtin::Or => {
            expect_argument_types(&name, args, namespace, &Type::Bool)?;
            Ok(Type::Bool)
        }
        Builtin::Equals => {
            if args.len() != 2 {
                return Err(Error::semantic(ErrorImpl::ArityMismatch {
                    operator: name,
                    expected: 2,
                    received: args.len(),
                }));
            }
            // Equality across mismatched types is valid, just always false.
            for arg in args {
                infer_type(arg, namespace)?;
            }
            Ok(Type::Bool)
        }
        Builtin::Print | Builtin::Map | Builtin::Filter => {
            for arg in args {
                infer_type(arg, namespace)?;
            }
            Ok(Type::Unrecognized)
        }
        // Import names and lambda parameters are not value expressions.
        Builtin::Import | Builtin::Lambda => Ok(Type::Unrecognized),
    }
}

fn infer_list(args: &[Node], namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    if args.is_empty() {
        return Ok(Type::EmptyList);
    }

    let mut element_type = infer_type(&args[0], namespace)?;

    for (position, arg) in args.iter().enumerate().skip(1) {
        let arg_type = infer_type(arg, namespace)?;

        let seed = Type::list_of(element_type.clone());
        let candidate = Type::list_of(arg_type.clone());
        let unified = unify_list_types(&seed, &candidate).map_err(|_| {
            Error::semantic(ErrorImpl::ListElementTypeMismatch {
                position: position + 1,
                found: arg_type.name(),
                expected: element_type.name(),
            })
        })?;

        element_type = match unified {
            Type::List(element) | Type::PossibleEmptyList(element) => *element,
            other => other,
        };
    }

    Ok(Type::list_of(element_type))
}

fn infer_append(args: &[Node], namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    if args.len() != 2 {
        return Err(Error::semantic(ErrorImpl::ArityMismatch {
            operator: String::from("++"),
            expected: 2,
            received: args.len(),
        }));
    }

    let element_type = infer_type(&args[0], namespace)?;
    let list_type = infer_type(&args[1], namespace)?;

    match &list_type {
        Type::EmptyList => Ok(Type::list_of(element_type)),
        Type::List(_) | Type::PossibleEmptyList(_) => {
            unify_list_types(&Type::list_of(element_type.clone()), &list_type).map_err(|_| {
                Error::semantic(ErrorImpl::AppendTypeMismatch {
                    element: element_type.name(),
                    list: list_type.name(),
                })
            })
        }
        other => Err(Error::semantic(ErrorImpl::AppendTypeMismatch {
            element: element_type.name(),
            list: other.name(),
        })),
    }
}

fn infer_if(args: &[Node], namespace: &HashMap<String, Type>) -> Result<Type, Error> {
    if args.len() != 3 {
        return Err(Error::semantic(ErrorImpl::ArityMismatch {
            operator: String::from("if"),
            expected: 3,
            received: args.len(),
        }));
    }

    let condition_type = infer_type(&args[0], namespace)?;
    if condition_type != Type::Bool {
        return Err(Error::semantic(ErrorImpl::ConditionNotBool {
            found: condition_type.name(),
        }));
    }

    let then_type = infer_type(&args[1], namespace)?;
    let else_type = infer_type(&args[2], namespace)?;

    if then_type == else_type {
        return Ok(then_type);
    }

    // Branches of different emptiness merge into a possibly-empty list.
    let merged = match (&then_type, &else_type) {
        (Type::List(element), Type::EmptyList) | (Type::EmptyList, Type::List(element)) => {
            Some(Type::PossibleEmptyList(element.clone()))
        }
        (Type::List(left), Type::PossibleEmptyList(right))
        | (Type::PossibleEmptyList(right), Type::List(left)) => unify_list_types(left, right)
            .ok()
            .map(Type::possibly_empty_list_of),
        _ => None,
    };

    merged.ok_or_else(|| {
        Error::semantic(ErrorImpl::BranchTypeMismatch {
            left: then_type.name(),
            right: else_type.name(),
        })
    })
}

fn infer_single(
    operator: &str,
    args: &[Node],
    namespace: &HashMap<String, Type>,
) -> Result<Type, Error> {
    if args.len() != 1 {
        return Err(Error::semantic(ErrorImpl::ArityMismatch {
            operator: operator.to_string(),
            expected: 1,
            received: args.len(),
        }));
    }

    infer_type(&args[0], namespace)
}

fn expect_argument_types(
    operator: &str,
    args: &[Node],
    namespace: &HashMap<String, Type>,
    expected: &Type,
) -> Result<(), Error> {
    for arg in args {
        let found = infer_type(arg, namespace)?;
        if &found != expected {
            return Err(Error::semantic(ErrorImpl::OperatorTypeMismatch {
                operator: operator.to_string(),
                expected: expected.name(),
                found: found.name(),
            }));
        }
    }

    Ok(())
}

/// The advisory whole-program pass: infers every top-level expression that
/// is not a definition or import and collects the diagnostics.
///
/// User-defined function names are bound to `Unrecognized` since their
/// return types are not tracked by the lattice. The result never blocks
/// emission; callers decide severity.
pub fn check_types(objects: &[Node], namespace: &Namespace) -> Vec<Error> {
    let mut bindings: HashMap<String, Type> = HashMap::new();
    for function in namespace {
        bindings.insert(function.name.clone(), Type::Unrecognized);
    }

    let mut diagnostics = vec![];
    for node in objects {
        if is_function_def(node) || is_import(node) {
            continue;
        }
        if let Err(error) = infer_type(node, &bindings) {
            diagnostics.push(error);
        }
    }

    diagnostics
}
