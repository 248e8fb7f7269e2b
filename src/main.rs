use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::exit,
    rc::Rc,
};

use lispc::{
    ast::ast::to_objects,
    ast::function::Namespace,
    compiler::program::{compile_program, CompiledProgram},
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::{ast::Ast, parser::parse},
    type_checker::type_checker::check_types,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => repl(),
        2 => compile_file(&args[1]),
        _ => panic!("Incorrect arguments provided!"),
    }
}

fn compile_file(file_path: &str) {
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let ast = match front_end(&source, file_name) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    let compiled = match compile_program(&ast, &Namespace::new(), false) {
        Ok(compiled) => compiled,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    // Type diagnostics are advisory by design, but in file mode there is
    // no user to answer them, so they abort before any output is written.
    let objects = to_objects(&ast).expect("conversion succeeded during compilation");
    let diagnostics = check_types(&objects, &compiled.namespace);
    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            display_error(diagnostic, &source);
        }
        exit(1);
    }

    report_warnings(&compiled);
    print!("{}", compiled.output);
}

fn repl() {
    let stdin = io::stdin();
    let mut namespace = Namespace::new();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let ast = match front_end(&line, "shell") {
            Ok(ast) => ast,
            Err(error) => {
                display_error(&error, &line);
                continue;
            }
        };

        let compiled = match compile_program(&ast, &namespace, true) {
            Ok(compiled) => compiled,
            Err(error) => {
                display_error(&error, &line);
                continue;
            }
        };

        let objects = to_objects(&ast).expect("conversion succeeded during compilation");
        for diagnostic in check_types(&objects, &compiled.namespace) {
            println!("Type warning: {}", diagnostic);
        }
        report_warnings(&compiled);

        namespace = compiled.namespace;
        println!("{}", compiled.output);
    }
}

fn front_end(source: &str, file_name: &str) -> Result<Ast, Error> {
    let tokens = tokenize(source.to_string(), Some(String::from(file_name)))?;
    parse(tokens, Rc::new(String::from(file_name)))
}

fn report_warnings(compiled: &CompiledProgram) {
    for warning in &compiled.warnings {
        eprintln!("Warning: {}", warning);
    }
}
