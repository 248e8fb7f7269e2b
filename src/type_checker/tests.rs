//! Unit tests for type inference and list-type unification.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::ast::{to_objects, Node};
use crate::ast::function::{Function, Namespace};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;
use crate::type_checker::type_checker::{check_types, infer_type, unify_list_types};
use crate::type_checker::types::Type;

fn parse_expr(source: &str) -> Node {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let ast = parse(tokens, Rc::new("shell".to_string())).unwrap();
    to_objects(&ast).unwrap().remove(0)
}

fn infer(source: &str) -> Result<Type, Error> {
    infer_type(&parse_expr(source), &HashMap::new())
}

#[test]
fn test_number_atoms() {
    assert_eq!(infer("1").unwrap(), Type::Number);
    assert_eq!(infer("-4").unwrap(), Type::Number);
    assert_eq!(infer("2.5").unwrap(), Type::Number);
}

#[test]
fn test_string_atoms() {
    assert_eq!(infer("\"hello\"").unwrap(), Type::String);
    assert_eq!(infer("\"\"").unwrap(), Type::String);
}

#[test]
fn test_bool_atoms() {
    assert_eq!(infer("true").unwrap(), Type::Bool);
    assert_eq!(infer("false").unwrap(), Type::Bool);
}

#[test]
fn test_bound_name_resolves_to_its_type() {
    let mut namespace = HashMap::new();
    namespace.insert("x".to_string(), Type::list_of(Type::Number));

    let inferred = infer_type(&parse_expr("x"), &namespace).unwrap();
    assert_eq!(inferred, Type::list_of(Type::Number));
}

#[test]
fn test_unbound_name_fails() {
    let error = infer("mystery").err().unwrap();
    assert_eq!(error.get_error_name(), "UnknownAtom");
    assert_eq!(error.to_string(), "cannot infer type of 'mystery'");
}

#[test]
fn test_list_of_identical_elements() {
    assert_eq!(
        infer("(list 1 2 3)").unwrap(),
        Type::list_of(Type::Number)
    );
    assert_eq!(
        infer("(list \"a\" \"b\")").unwrap(),
        Type::list_of(Type::String)
    );
}

#[test]
fn test_empty_list() {
    assert_eq!(infer("(list)").unwrap(), Type::EmptyList);
}

#[test]
fn test_nested_list_with_empty_member_is_possibly_empty() {
    assert_eq!(
        infer("(list (list 1) (list))").unwrap(),
        Type::list_of(Type::possibly_empty_list_of(Type::Number))
    );
}

#[test]
fn test_list_element_mismatch_reports_position() {
    let error = infer("(list 1 \"a\")").err().unwrap();
    assert_eq!(error.get_error_name(), "ListElementTypeMismatch");
    assert_eq!(
        error.to_string(),
        "list 2-th element has type 'String' which is not compatible with inferred type 'Number'"
    );
}

#[test]
fn test_unify_list_with_empty_list() {
    let unified = unify_list_types(&Type::list_of(Type::Number), &Type::EmptyList).unwrap();
    assert_eq!(unified, Type::possibly_empty_list_of(Type::Number));
}

#[test]
fn test_unify_is_symmetric() {
    let unified = unify_list_types(&Type::EmptyList, &Type::list_of(Type::Number)).unwrap();
    assert_eq!(unified, Type::possibly_empty_list_of(Type::Number));
}

#[test]
fn test_unify_list_with_possibly_empty_list() {
    let unified = unify_list_types(
        &Type::list_of(Type::Number),
        &Type::possibly_empty_list_of(Type::Number),
    )
    .unwrap();
    assert_eq!(unified, Type::possibly_empty_list_of(Type::Number));
}

#[test]
fn test_unify_incompatible_elements_fails() {
    let error = unify_list_types(&Type::list_of(Type::Number), &Type::list_of(Type::String))
        .err()
        .unwrap();
    assert_eq!(error.get_error_name(), "IncompatibleListTypes");
    assert_eq!(
        error.to_string(),
        "incompatible list types 'List<Number>', 'List<String>'"
    );
}

#[test]
fn test_unify_equal_types() {
    let unified = unify_list_types(&Type::Number, &Type::Number).unwrap();
    assert_eq!(unified, Type::Number);
}

#[test]
fn test_unify_nested_lists() {
    let unified = unify_list_types(
        &Type::list_of(Type::list_of(Type::Number)),
        &Type::list_of(Type::EmptyList),
    )
    .unwrap();
    assert_eq!(
        unified,
        Type::list_of(Type::possibly_empty_list_of(Type::Number))
    );
}

#[test]
fn test_first_of_list() {
    assert_eq!(infer("(first (list 1 2 3))").unwrap(), Type::Number);
}

#[test]
fn test_first_of_empty_list_fails() {
    let error = infer("(first (list))").err().unwrap();
    assert_eq!(error.get_error_name(), "NonListArgument");
    assert_eq!(
        error.to_string(),
        "'first' expected a non-empty List type but got 'EmptyList'"
    );
}

#[test]
fn test_first_of_possibly_empty_list_fails() {
    let error = infer("(first (rest (list 1 2)))").err().unwrap();
    assert_eq!(error.get_error_name(), "NonListArgument");
}

#[test]
fn test_rest_of_list() {
    assert_eq!(
        infer("(rest (list 1))").unwrap(),
        Type::possibly_empty_list_of(Type::Number)
    );
}

#[test]
fn test_rest_of_non_list_fails() {
    let error = infer("(rest 5)").err().unwrap();
    assert_eq!(error.get_error_name(), "NonListArgument");
}

#[test]
fn test_append_to_empty_list() {
    assert_eq!(
        infer("(++ 1 (list))").unwrap(),
        Type::list_of(Type::Number)
    );
}

#[test]
fn test_append_to_list() {
    assert_eq!(
        infer("(++ 1 (list 2 3))").unwrap(),
        Type::list_of(Type::Number)
    );
}

#[test]
fn test_append_to_possibly_empty_list() {
    assert_eq!(
        infer("(++ 1 (rest (list 2 3)))").unwrap(),
        Type::possibly_empty_list_of(Type::Number)
    );
}

#[test]
fn test_append_mismatched_element_fails() {
    let error = infer("(++ \"a\" (list 1 2))").err().unwrap();
    assert_eq!(error.get_error_name(), "AppendTypeMismatch");
    assert_eq!(
        error.to_string(),
        "cannot append element of type 'String' to 'List<Number>'"
    );
}

#[test]
fn test_append_to_non_list_fails() {
    let error = infer("(++ 1 2)").err().unwrap();
    assert_eq!(error.get_error_name(), "AppendTypeMismatch");
}

#[test]
fn test_if_with_comparison_condition() {
    assert_eq!(infer("(if (< 1 2) 1 2)").unwrap(), Type::Number);
}

#[test]
fn test_if_with_equal_branches() {
    assert_eq!(infer("(if true \"a\" \"b\")").unwrap(), Type::String);
}

#[test]
fn test_if_condition_must_be_bool() {
    let error = infer("(if 1 2 3)").err().unwrap();
    assert_eq!(error.get_error_name(), "ConditionNotBool");
    assert_eq!(
        error.to_string(),
        "expected if condition to have type 'Bool' but got 'Number'"
    );
}

#[test]
fn test_if_branches_merge_list_and_empty_list() {
    assert_eq!(
        infer("(if true (list 1) (list))").unwrap(),
        Type::possibly_empty_list_of(Type::Number)
    );
    assert_eq!(
        infer("(if true (list) (list 1))").unwrap(),
        Type::possibly_empty_list_of(Type::Number)
    );
}

#[test]
fn test_if_branches_merge_list_and_possibly_empty_list() {
    assert_eq!(
        infer("(if true (list 1) (rest (list 1 2)))").unwrap(),
        Type::possibly_empty_list_of(Type::Number)
    );
}

#[test]
fn test_if_mismatched_branches_fail() {
    let error = infer("(if true 1 \"a\")").err().unwrap();
    assert_eq!(error.get_error_name(), "BranchTypeMismatch");
    assert_eq!(
        error.to_string(),
        "incompatible types in if branches: 'Number' and 'String'"
    );
}

#[test]
fn test_arithmetic_and_logic() {
    assert_eq!(infer("(+ 1 2 3)").unwrap(), Type::Number);
    assert_eq!(infer("(* 2 (- 5 1))").unwrap(), Type::Number);
    assert_eq!(infer("(and true false)").unwrap(), Type::Bool);
    assert_eq!(infer("(not true)").unwrap(), Type::Bool);
    assert_eq!(infer("(= 1 2)").unwrap(), Type::Bool);
}

#[test]
fn test_arithmetic_rejects_non_numbers() {
    let error = infer("(+ 1 \"a\")").err().unwrap();
    assert_eq!(error.get_error_name(), "OperatorTypeMismatch");
    assert_eq!(error.to_string(), "'+' expected 'Number' but got 'String'");
}

#[test]
fn test_equality_requires_two_arguments() {
    let error = infer("(= 1)").err().unwrap();
    assert_eq!(error.get_error_name(), "ArityMismatch");
    assert_eq!(error.to_string(), "'=' takes 2 arguments but 1 were given");
}

#[test]
fn test_unrecognized_form() {
    let error = infer("(frobnicate 1)").err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognizedForm");
    assert_eq!(
        error.to_string(),
        "unrecognized form 'frobnicate', cannot infer type"
    );
}

#[test]
fn test_namespace_binding_shadows_builtin_form() {
    let mut namespace = HashMap::new();
    namespace.insert("first".to_string(), Type::Number);

    // With 'first' bound, the builtin rule is skipped entirely.
    let inferred = infer_type(&parse_expr("(first 1 2 3)"), &namespace).unwrap();
    assert_eq!(inferred, Type::Number);
}

#[test]
fn test_nested_error_propagates_unchanged() {
    let error = infer("(++ 1 (list nope))").err().unwrap();
    assert_eq!(error.get_error_name(), "UnknownAtom");
    assert_eq!(error.to_string(), "cannot infer type of 'nope'");
}

#[test]
fn test_check_types_collects_diagnostics() {
    let tokens = tokenize(
        "(defun f (a) a) (+ 1 \"x\") (f 1) mystery".to_string(),
        None,
    )
    .unwrap();
    let ast = parse(tokens, Rc::new("shell".to_string())).unwrap();
    let objects = to_objects(&ast).unwrap();

    let mut namespace = Namespace::new();
    namespace.insert(Function {
        name: "f".to_string(),
        args: vec!["a".to_string()],
        body: vec![parse_expr("a")],
    });

    let diagnostics = check_types(&objects, &namespace);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].get_error_name(), "OperatorTypeMismatch");
    assert_eq!(diagnostics[1].get_error_name(), "UnknownAtom");
}
