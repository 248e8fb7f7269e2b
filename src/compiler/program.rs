use crate::{
    ast::{
        ast::{to_objects, Node},
        builtins::Builtin,
        function::{is_function_def, is_import, to_function, Function, Namespace, ENTRY_POINT},
    },
    errors::errors::{Error, ErrorImpl, Warning},
    parser::ast::Ast,
};

use super::compiler::{compile_node, INDENT_WIDTH};

/// The fixed prelude import line every emitted program starts with. The
/// referenced module provides the list runtime (`list_create`,
/// `list_append`).
pub const PRELUDE: &str = "from lisp_core import *\n\n";

/// The result of a successful whole-program compilation.
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    pub output: String,
    pub namespace: Namespace,
    pub warnings: Vec<Warning>,
}

/// Emits one function definition.
///
/// The entry-point function becomes the program-entry block with no
/// implicit return; any other function becomes a named definition whose
/// last body expression is returned. Redefining a builtin operator name
/// is legal but reported through the warnings sink.
pub fn compile_function(
    function: &Function,
    indent: usize,
    warnings: &mut Vec<Warning>,
) -> Result<String, Error> {
    if Builtin::is_builtin(&function.name) {
        warnings.push(Warning::BuiltinRedefinition {
            name: function.name.clone(),
        });
    }

    let output = if function.name == ENTRY_POINT {
        format!(
            "if __name__ == '__main__':\n{}\n",
            compile_body(function, indent, false)?
        )
    } else {
        format!(
            "def {}({}):\n{}",
            function.name,
            function.args.join(", "),
            compile_body(function, indent, true)?
        )
    };

    Ok(output + "\n")
}

fn compile_body(function: &Function, indent: usize, add_return: bool) -> Result<String, Error> {
    let total_indent = " ".repeat((indent + 1) * INDENT_WIDTH);

    let mut lines = vec![];
    for (i, node) in function.body.iter().enumerate() {
        let return_prefix = if add_return && i == function.body.len() - 1 {
            "return "
        } else {
            ""
        };
        lines.push(format!(
            "{}{}{}",
            total_indent,
            return_prefix,
            compile_node(node, indent)?
        ));
    }

    Ok(lines.join("\n"))
}

/// Validates the root level of a program.
///
/// Every root node must be a form. In non-interactive mode only function
/// definitions and imports are allowed; interactive mode accepts
/// expression forms since they are emitted as trailing statements.
pub fn validate(objects: &[Node], is_repl: bool) -> Result<(), Error> {
    for node in objects {
        match node {
            Node::Atom(_) => {
                return Err(Error::semantic(ErrorImpl::RootLevelAtom {
                    node: node.to_string(),
                }))
            }
            Node::Form(_) => {
                if !is_repl && !is_function_def(node) && !is_import(node) {
                    return Err(Error::semantic(ErrorImpl::InvalidRootForm {
                        node: node.to_string(),
                    }));
                }
            }
        }
    }
    Ok(())
}

/// Compiles a whole program from a generic syntax tree.
///
/// `ext_funcs` are externally supplied definitions (a REPL's accumulated
/// namespace); locally defined functions overwrite them on name
/// collision. In non-interactive mode the entry-point function must be
/// present.
pub fn compile_program(
    ast: &Ast,
    ext_funcs: &Namespace,
    is_repl: bool,
) -> Result<CompiledProgram, Error> {
    if ast.children.is_empty() {
        return Ok(CompiledProgram {
            output: String::new(),
            namespace: Namespace::new(),
            warnings: vec![],
        });
    }

    let objects = to_objects(ast)?;
    validate(&objects, is_repl)?;

    let mut namespace = ext_funcs.clone();
    for node in &objects {
        if is_function_def(node) {
            if let Node::Form(form) = node {
                namespace.insert(to_function(form)?);
            }
        }
    }

    if !is_repl && !namespace.contains(ENTRY_POINT) {
        return Err(Error::semantic(ErrorImpl::MissingEntryPoint));
    }

    let mut warnings = vec![];
    let mut output = String::from(PRELUDE);
    for function in &namespace {
        output += &compile_function(function, 0, &mut warnings)?;
        output.push('\n');
    }

    if is_repl {
        let trailing = objects
            .iter()
            .filter(|node| !is_function_def(node))
            .map(|node| compile_node(node, 0))
            .collect::<Result<Vec<String>, Error>>()?;
        output += &trailing.join("\n");
        output += "\n\n";
    }

    Ok(CompiledProgram {
        output,
        namespace,
        warnings,
    })
}
