use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    pub static ref BUILTIN_LOOKUP: HashMap<&'static str, Builtin> = {
        let mut map = HashMap::new();
        map.insert("import", Builtin::Import);
        map.insert("print", Builtin::Print);
        map.insert("+", Builtin::Add);
        map.insert("-", Builtin::Subtract);
        map.insert("*", Builtin::Multiply);
        map.insert("/", Builtin::Divide);
        map.insert("not", Builtin::Not);
        map.insert("and", Builtin::And);
        map.insert("or", Builtin::Or);
        map.insert("<", Builtin::Less);
        map.insert(">", Builtin::Greater);
        map.insert("<=", Builtin::LessEquals);
        map.insert(">=", Builtin::GreaterEquals);
        map.insert("=", Builtin::Equals);
        map.insert("list", Builtin::List);
        map.insert("first", Builtin::First);
        map.insert("rest", Builtin::Rest);
        map.insert("++", Builtin::Append);
        map.insert("map", Builtin::Map);
        map.insert("filter", Builtin::Filter);
        map.insert("lambda", Builtin::Lambda);
        map.insert("if", Builtin::If);
        map
    };
}

/// The fixed, closed set of builtin operator names.
///
/// Both the type checker and the code generator dispatch on this enum, so
/// "is this a builtin" is a single table lookup rather than string
/// comparison scattered through the passes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Builtin {
    Import,
    Print,
    Add,
    Subtract,
    Multiply,
    Divide,
    Not,
    And,
    Or,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    List,
    First,
    Rest,
    Append,
    Map,
    Filter,
    Lambda,
    If,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTIN_LOOKUP.get(name).copied()
    }

    pub fn is_builtin(name: &str) -> bool {
        BUILTIN_LOOKUP.contains_key(name)
    }
}
