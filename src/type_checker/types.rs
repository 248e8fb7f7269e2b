use std::fmt::Display;

/// A type descriptor in the structural lattice.
///
/// Equality is structural. `EmptyList` is a distinct terminal type with no
/// known element; unifying it with a `List` produces a
/// `PossibleEmptyList`. `Unrecognized` is the explicit escape hatch for
/// constructs whose types the lattice cannot express, never a silent
/// fallback for unresolvable names.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    String,
    Bool,
    Number,
    EmptyList,
    List(Box<Type>),
    PossibleEmptyList(Box<Type>),
    Unrecognized,
}

impl Type {
    /// The canonical name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Type::String => String::from("String"),
            Type::Bool => String::from("Bool"),
            Type::Number => String::from("Number"),
            Type::EmptyList => String::from("EmptyList"),
            Type::List(element) => format!("List<{}>", element.name()),
            Type::PossibleEmptyList(element) => {
                format!("PossibleEmptyList<{}>", element.name())
            }
            Type::Unrecognized => String::from("Unrecognized"),
        }
    }

    pub fn list_of(element: Type) -> Type {
        Type::List(Box::new(element))
    }

    pub fn possibly_empty_list_of(element: Type) -> Type {
        Type::PossibleEmptyList(Box::new(element))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
