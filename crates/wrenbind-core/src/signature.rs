//! Wren call-shape strings.
//!
//! A signature is both the name Wren code uses to call a method and the key
//! it is registered under, so the placeholder count must match the arity of
//! the trampoline exactly:
//!
//! ```text
//! toString          getter
//! atan(_)           named method, one argument
//! +(_)              operator
//! [_,_]             subscript getter
//! [_]=(_)           subscript setter
//! ```

use crate::MethodKind;
use crate::operator::Operator;

/// The name part of a signature, before placeholders are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallShape {
    /// `[_,...]`
    SubscriptGet,
    /// `[_,...]=(_)`
    SubscriptSet,
    /// An operator symbol.
    Operator(Operator),
    /// A named method, already converted to Wren casing.
    Named(String),
}

impl CallShape {
    /// Render the signature for a call taking `placeholders` arguments.
    pub fn render(&self, kind: MethodKind, placeholders: usize) -> String {
        match self {
            CallShape::SubscriptGet => format!("[{}]", placeholder_list(placeholders)),
            // The assigned value is the last argument. BoundMethod rejects a
            // setter without one before rendering.
            CallShape::SubscriptSet => {
                format!("[{}]=(_)", placeholder_list(placeholders.saturating_sub(1)))
            }
            CallShape::Operator(op) => apply_kind(op.symbol(), kind, placeholders),
            CallShape::Named(name) => apply_kind(name, kind, placeholders),
        }
    }
}

fn apply_kind(name: &str, kind: MethodKind, placeholders: usize) -> String {
    match kind {
        MethodKind::Getter => name.to_string(),
        MethodKind::Plain | MethodKind::Variadic => {
            format!("{name}({})", placeholder_list(placeholders))
        }
    }
}

/// `_,_,_` for three placeholders, empty for none.
pub fn placeholder_list(count: usize) -> String {
    vec!["_"; count].join(",")
}

/// Convert a C++ method name to Wren casing by lower-casing its first letter.
pub fn wren_method_name(native: &str) -> String {
    let mut chars = native.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert_eq!(placeholder_list(0), "");
        assert_eq!(placeholder_list(1), "_");
        assert_eq!(placeholder_list(3), "_,_,_");
    }

    #[test]
    fn wren_casing() {
        assert_eq!(wren_method_name("ToString"), "toString");
        assert_eq!(wren_method_name("Is"), "is");
        assert_eq!(wren_method_name("count"), "count");
        assert_eq!(wren_method_name(""), "");
    }

    #[test]
    fn named_shapes() {
        let shape = CallShape::Named("join".to_string());
        assert_eq!(shape.render(MethodKind::Plain, 0), "join()");
        assert_eq!(shape.render(MethodKind::Plain, 2), "join(_,_)");
        assert_eq!(shape.render(MethodKind::Getter, 2), "join");
    }

    #[test]
    fn operator_shapes() {
        let minus = CallShape::Operator(Operator::Minus);
        assert_eq!(minus.render(MethodKind::Getter, 0), "-");
        assert_eq!(minus.render(MethodKind::Plain, 1), "-(_)");
    }

    #[test]
    fn subscript_shapes() {
        assert_eq!(CallShape::SubscriptGet.render(MethodKind::Plain, 1), "[_]");
        assert_eq!(CallShape::SubscriptGet.render(MethodKind::Plain, 2), "[_,_]");
        assert_eq!(CallShape::SubscriptSet.render(MethodKind::Plain, 2), "[_]=(_)");
        assert_eq!(CallShape::SubscriptSet.render(MethodKind::Plain, 3), "[_,_]=(_)");
    }
}
