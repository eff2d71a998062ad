//! Operator table for `Operator*` native methods.
//!
//! A native method whose name starts with [`OPERATOR_PREFIX`] is bound to a
//! Wren operator instead of a named method. The remainder of the name selects
//! the operator:
//!
//! ```text
//! double OperatorPlus(double receiver, double other);   ->  +(_)
//! bool OperatorBoolNegate();                            ->  !
//! ```
//!
//! Subscript access (`OperatorSubscript` / `OperatorSubscriptSet`) is not part
//! of this table; it renders as an indexing signature, see
//! [`CallShape`](crate::CallShape).

use std::fmt;

/// Name prefix marking a native method as an operator overload.
pub const OPERATOR_PREFIX: &str = "Operator";

/// Native name of the subscript getter, rendered as `[_]`.
pub const SUBSCRIPT_GET: &str = "OperatorSubscript";

/// Native name of the subscript setter, rendered as `[_]=(_)`.
pub const SUBSCRIPT_SET: &str = "OperatorSubscriptSet";

/// Operators a native method can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // === Arithmetic ===
    /// `+`
    Plus,
    /// `-` (binary subtraction, or negation as a getter)
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,

    // === Bitwise ===
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    XOr,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,

    // === Comparison ===
    /// `==`
    EqualTo,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEq,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEq,

    // === Negation ===
    /// `!`
    BoolNegate,
    /// `~`
    BitwiseNegate,

    // === Range ===
    /// `..` inclusive range
    DotDot,
    /// `...` exclusive range
    DotDotDot,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 20] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
        Operator::And,
        Operator::Or,
        Operator::XOr,
        Operator::LeftShift,
        Operator::RightShift,
        Operator::EqualTo,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessThanEq,
        Operator::GreaterThan,
        Operator::GreaterThanEq,
        Operator::BoolNegate,
        Operator::BitwiseNegate,
        Operator::DotDot,
        Operator::DotDotDot,
    ];

    /// The part of the native method name after [`OPERATOR_PREFIX`].
    pub const fn suffix(&self) -> &'static str {
        match self {
            Operator::Plus => "Plus",
            Operator::Minus => "Minus",
            Operator::Multiply => "Multiply",
            Operator::Divide => "Divide",
            Operator::Modulo => "Modulo",
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::XOr => "XOr",
            Operator::LeftShift => "LeftShift",
            Operator::RightShift => "RightShift",
            Operator::EqualTo => "EqualTo",
            Operator::NotEqual => "NotEqual",
            Operator::LessThan => "LessThan",
            Operator::LessThanEq => "LessThanEq",
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterThanEq => "GreaterThanEq",
            Operator::BoolNegate => "BoolNegate",
            Operator::BitwiseNegate => "BitwiseNegate",
            Operator::DotDot => "DotDot",
            Operator::DotDotDot => "DotDotDot",
        }
    }

    /// The Wren symbol used in the method signature.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::XOr => "^",
            Operator::LeftShift => "<<",
            Operator::RightShift => ">>",
            Operator::EqualTo => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanEq => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanEq => ">=",
            Operator::BoolNegate => "!",
            Operator::BitwiseNegate => "~",
            Operator::DotDot => "..",
            Operator::DotDotDot => "...",
        }
    }

    /// Look up an operator by its name suffix (`"Plus"`, `"DotDot"`, ...).
    pub fn from_suffix(suffix: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.suffix() == suffix)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(Operator::Plus.symbol(), "+");
        assert_eq!(Operator::XOr.symbol(), "^");
        assert_eq!(Operator::LessThanEq.symbol(), "<=");
        assert_eq!(Operator::BoolNegate.symbol(), "!");
        assert_eq!(Operator::BitwiseNegate.symbol(), "~");
        assert_eq!(Operator::DotDotDot.symbol(), "...");
    }

    #[test]
    fn suffix_lookup_covers_table() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_suffix(op.suffix()), Some(op));
        }
    }

    #[test]
    fn unknown_suffix() {
        assert_eq!(Operator::from_suffix("Spaceship"), None);
        assert_eq!(Operator::from_suffix("plus"), None);
        assert_eq!(Operator::from_suffix(""), None);
        // Subscripts are handled before the operator table.
        assert_eq!(Operator::from_suffix("Subscript"), None);
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in Operator::ALL.iter().enumerate() {
            for b in &Operator::ALL[i + 1..] {
                assert_ne!(a.symbol(), b.symbol(), "{a:?} and {b:?} share a symbol");
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Operator::Plus), "+");
        assert_eq!(format!("{}", Operator::RightShift), ">>");
    }
}
