use crate::{
    ast::{
        ast::{Atom, Form, Literal, Node},
        builtins::Builtin,
    },
    errors::errors::{Error, ErrorImpl},
};

/// Spaces per indentation level in the emitted Python.
pub const INDENT_WIDTH: usize = 4;

fn indentation(indent: usize) -> String {
    " ".repeat(indent * INDENT_WIDTH)
}

/// Emits one node as Python source at the given indentation depth.
pub fn compile_node(node: &Node, indent: usize) -> Result<String, Error> {
    match node {
        Node::Atom(atom) => Ok(compile_atom(atom, indent)),
        Node::Form(form) => compile_form(form, indent),
    }
}

fn compile_atom(atom: &Atom, indent: usize) -> String {
    let value = match &atom.value {
        Literal::Bool(true) => String::from("True"),
        Literal::Bool(false) => String::from("False"),
        // Raw text from an external tree may spell booleans directly.
        Literal::Text(text) if text == "true" => String::from("True"),
        Literal::Text(text) if text == "false" => String::from("False"),
        other => other.to_string(),
    };

    format!("{}{}", indentation(indent), value)
}

fn compile_form(form: &Form, indent: usize) -> Result<String, Error> {
    if form.elements.is_empty() {
        return Ok(String::new());
    }

    let name = form.head_name()?;

    if Builtin::is_builtin(&name) {
        return Ok(format!("{}{}", indentation(indent), compile_builtin(form)?));
    }

    // Generic call: arguments are inline, not re-indented.
    let args = join_args(form.args(), ", ")?;
    Ok(format!("{}{}({})", indentation(indent), name, args))
}

fn join_args(args: &[Node], delim: &str) -> Result<String, Error> {
    let compiled = args
        .iter()
        .map(|arg| compile_node(arg, 0))
        .collect::<Result<Vec<String>, Error>>()?;
    Ok(compiled.join(delim))
}

fn expect_args(operator: &str, args: &[Node], expected: usize) -> Result<(), Error> {
    if args.len() != expected {
        return Err(Error::semantic(ErrorImpl::ArityMismatch {
            operator: operator.to_string(),
            expected,
            received: args.len(),
        }));
    }
    Ok(())
}

fn infix(operator: &str, args: &[Node]) -> Result<String, Error> {
    join_args(args, &format!(" {} ", operator))
}

/// Emits a builtin form without an indentation prefix.
pub fn compile_builtin(form: &Form) -> Result<String, Error> {
    let name = form.head_name()?;
    let builtin = match Builtin::lookup(&name) {
        Some(builtin) => builtin,
        None => return Err(Error::semantic(ErrorImpl::UnrecognizedForm { name })),
    };

    let args = form.args();

    match builtin {
        Builtin::Import => {
            expect_args(&name, args, 1)?;
            match &args[0] {
                Node::Atom(atom) => Ok(format!("import {}", atom)),
                Node::Form(module) => Err(Error::semantic(ErrorImpl::MalformedImport {
                    message: format!("module name must be an atom, got {}", module),
                })),
            }
        }
        Builtin::Print => Ok(format!("print({})", join_args(args, ", ")?)),
        Builtin::Add => infix("+", args),
        Builtin::Subtract => infix("-", args),
        Builtin::Multiply => infix("*", args),
        Builtin::Divide => infix("/", args),
        Builtin::Not => {
            expect_args(&name, args, 1)?;
            Ok(format!("not {}", compile_node(&args[0], 0)?))
        }
        Builtin::And => infix("and", args),
        Builtin::Or => infix("or", args),
        Builtin::Less | Builtin::Greater | Builtin::LessEquals | Builtin::GreaterEquals => {
            expect_args(&name, args, 2)?;
            infix(&name, args)
        }
        Builtin::Equals => {
            expect_args(&name, args, 2)?;
            infix("==", args)
        }
        Builtin::List => Ok(format!("list_create({})", join_args(args, ", ")?)),
        Builtin::First => {
            expect_args(&name, args, 1)?;
            Ok(format!("{}[0]", compile_node(&args[0], 0)?))
        }
        Builtin::Rest => {
            expect_args(&name, args, 1)?;
            Ok(format!("{}[1:]", compile_node(&args[0], 0)?))
        }
        Builtin::Append => {
            expect_args(&name, args, 2)?;
            Ok(format!(
                "list_append({}, {})",
                compile_node(&args[0], 0)?,
                compile_node(&args[1], 0)?
            ))
        }
        Builtin::Map => {
            expect_args(&name, args, 2)?;
            Ok(format!(
                "list(map({}, {}))",
                compile_node(&args[0], 0)?,
                compile_node(&args[1], 0)?
            ))
        }
        Builtin::Filter => {
            expect_args(&name, args, 2)?;
            Ok(format!(
                "list(filter({}, {}))",
                compile_node(&args[0], 0)?,
                compile_node(&args[1], 0)?
            ))
        }
        Builtin::Lambda => {
            expect_args(&name, args, 2)?;
            let params = match &args[0] {
                Node::Atom(atom) => atom.to_string(),
                Node::Form(group) => join_args(&group.elements, ", ")?,
            };
            Ok(format!("lambda {}: {}", params, compile_node(&args[1], 0)?))
        }
        Builtin::If => {
            expect_args(&name, args, 3)?;
            let condition = compile_node(&args[0], 0)?;
            let then_branch = compile_node(&args[1], 0)?;
            let else_branch = compile_node(&args[2], 0)?;
            Ok(format!(
                "({}) if ({}) else ({})",
                then_branch, condition, else_branch
            ))
        }
    }
}
