//! Errors raised by categories, constructions and parents.
use crate::rings::Ring;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// No construction of this name was registered.
    #[error("unknown functorial construction: {name}")]
    UnknownConstruction { name: String },

    /// No category in the chain of `category` declares the construction.
    #[error("the {construction} construction is not defined for {category}")]
    UnsupportedConstruction {
        construction: String,
        category: String,
    },

    /// A generic construction was applied to no arguments.
    #[error("the {construction} construction needs at least one argument")]
    EmptyConstruction { construction: String },

    /// Only named categories can declare a nested sub-definition.
    #[error("{category} cannot declare a {construction} sub-definition")]
    NotDeclarable {
        construction: String,
        category: String,
    },

    /// Categories for the construction were already derived, and a new sub-definition would
    /// change their super categories.
    #[error("{category} cannot declare a {construction} sub-definition: {construction} categories are already in use")]
    DeclaredAfterUse {
        construction: String,
        category: String,
    },

    #[error("{parent} has no elements")]
    EmptyParent { parent: String },

    #[error("{element} is not an element of {parent}")]
    NotAnElement { element: String, parent: String },

    /// The category of a parent does not provide the requested operation.
    #[error("{category} does not provide {operation}")]
    MissingStructure {
        operation: &'static str,
        category: String,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{ring} is not a field")]
    NotAField { ring: Ring },

    #[error("a free module needs a rank when no module is given")]
    MissingRank,

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}
