//! Error types for binding generation.
//!
//! Two phases can fail:
//!
//! ```text
//! ParseError    - a WREN_METHOD line has a shape the scanner cannot accept
//! BindingError  - a parsed declaration cannot be turned into a trampoline
//! ```
//!
//! Both are fatal to the whole run: a partially generated registration table
//! would link against the runtime and fail at call time instead of build time.

use thiserror::Error;

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors raised while scanning declaration sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `WREN_METHOD(...)` named a kind other than empty, `getter` or `variadic`.
    #[error("line {line}: unknown method kind '{kind}' in '{fragment}'")]
    UnknownKind {
        line: usize,
        kind: String,
        fragment: String,
    },

    /// An argument could not be split into a type and a name.
    #[error("line {line}: cannot split argument '{argument}' into type and name in '{fragment}'")]
    MalformedArgument {
        line: usize,
        argument: String,
        fragment: String,
    },

    /// A variadic method did not declare the trailing values argument.
    #[error("line {line}: variadic method has no trailing values argument in '{fragment}'")]
    MissingVariadicTail { line: usize, fragment: String },

    /// A method declaration appeared before any bindable class.
    #[error("line {line}: method declared outside of a bindable class in '{fragment}'")]
    MethodOutsideClass { line: usize, fragment: String },
}

impl ParseError {
    /// The 1-based source line this error was raised for.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownKind { line, .. } => *line,
            ParseError::MalformedArgument { line, .. } => *line,
            ParseError::MissingVariadicTail { line, .. } => *line,
            ParseError::MethodOutsideClass { line, .. } => *line,
        }
    }
}

// ============================================================================
// Binding Errors
// ============================================================================

/// Errors raised while deriving arities, signatures and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A Number class instance method has no argument to act as its receiver.
    #[error("{class}::{method}: number methods must declare the receiver as their first argument")]
    ArityUnderflow { class: String, method: String },

    /// An `Operator*` method name has no entry in the operator table.
    #[error("{class}::{method}: unknown operator '{suffix}'")]
    UnknownOperator {
        class: String,
        method: String,
        suffix: String,
    },

    /// `OperatorSubscriptSet` declared without the assigned value.
    #[error("{class}::{method}: subscript setters must take the assigned value as their last argument")]
    SubscriptSetterArity { class: String, method: String },

    /// An argument type has no conversion rule.
    #[error("{class}::{method}: argument {index} ('{label}') has unsupported type '{ty}'")]
    UnknownArgumentType {
        class: String,
        method: String,
        index: usize,
        label: String,
        ty: String,
    },

    /// A return type has no boxing rule.
    #[error("{class}::{method}: unsupported return type '{ty}'")]
    UnknownReturnType {
        class: String,
        method: String,
        ty: String,
    },

    /// Two methods would produce the same trampoline symbol.
    #[error("{class}::{method}: generated symbol '{symbol}' is already defined")]
    DuplicateSymbol {
        class: String,
        method: String,
        symbol: String,
    },

    /// Two class records share a name.
    #[error("class '{class}' is declared more than once")]
    DuplicateClass { class: String },
}
