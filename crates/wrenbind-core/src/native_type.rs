//! Classification of declared C++ types.
//!
//! Argument and return types are kept as normalized text in the model and
//! classified on demand, so that an unsupported type is only an error when a
//! trampoline actually needs to convert it.

use std::fmt;

/// Prefix shared by every bindable runtime class.
pub const BINDABLE_PREFIX: &str = "Obj";

/// A declared type after classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// `void`, only valid as a return type.
    Void,
    /// `Value`, the runtime's boxed representation.
    Value,
    /// `bool`, only valid as a return type.
    Bool,
    /// `int`
    Int,
    /// `double`
    Double,
    /// `std::string`, by value or by const reference.
    String,
    /// Pointer to a bindable class, e.g. `ObjClass *`.
    Object(String),
    /// Anything else. Kept so the error can name it.
    Unsupported(String),
}

impl NativeType {
    /// Classify a normalized type string (see [`normalize_type`]).
    pub fn classify(ty: &str) -> NativeType {
        match ty {
            "void" => NativeType::Void,
            "Value" => NativeType::Value,
            "bool" => NativeType::Bool,
            "int" => NativeType::Int,
            "double" => NativeType::Double,
            "std::string" | "const std::string&" => NativeType::String,
            _ => match ty.strip_suffix('*') {
                Some(class) if is_bindable_name(class) => NativeType::Object(class.to_string()),
                _ => NativeType::Unsupported(ty.to_string()),
            },
        }
    }

    /// Check if a value of this type can be received from the runtime.
    pub fn is_argument_type(&self) -> bool {
        matches!(
            self,
            NativeType::Value
                | NativeType::Int
                | NativeType::Double
                | NativeType::String
                | NativeType::Object(_)
        )
    }

    /// Check if a value of this type can be handed back to the runtime.
    pub fn is_return_type(&self) -> bool {
        !matches!(self, NativeType::Unsupported(_))
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Void => write!(f, "void"),
            NativeType::Value => write!(f, "Value"),
            NativeType::Bool => write!(f, "bool"),
            NativeType::Int => write!(f, "int"),
            NativeType::Double => write!(f, "double"),
            NativeType::String => write!(f, "std::string"),
            NativeType::Object(class) => write!(f, "{class} *"),
            NativeType::Unsupported(ty) => write!(f, "{ty}"),
        }
    }
}

/// Check if a class name follows the bindable naming convention.
pub fn is_bindable_name(name: &str) -> bool {
    name.strip_prefix(BINDABLE_PREFIX)
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}

/// Collapse whitespace in a declared type so that `ObjClass *`, `ObjClass*`
/// and `const  std::string &` compare equal to their canonical spellings.
pub fn normalize_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        let attaches = word.starts_with('*') || word.starts_with('&');
        if !out.is_empty() && !attaches {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_primitives() {
        assert_eq!(NativeType::classify("void"), NativeType::Void);
        assert_eq!(NativeType::classify("Value"), NativeType::Value);
        assert_eq!(NativeType::classify("bool"), NativeType::Bool);
        assert_eq!(NativeType::classify("int"), NativeType::Int);
        assert_eq!(NativeType::classify("double"), NativeType::Double);
    }

    #[test]
    fn classify_strings() {
        assert_eq!(NativeType::classify("std::string"), NativeType::String);
        assert_eq!(
            NativeType::classify(&normalize_type("const std::string &")),
            NativeType::String
        );
    }

    #[test]
    fn classify_objects() {
        assert_eq!(
            NativeType::classify(&normalize_type("ObjClass *")),
            NativeType::Object("ObjClass".to_string())
        );
        assert_eq!(
            NativeType::classify("ObjRange*"),
            NativeType::Object("ObjRange".to_string())
        );
        assert_eq!(
            NativeType::classify("Foo*"),
            NativeType::Unsupported("Foo*".to_string())
        );
    }

    #[test]
    fn argument_and_return_support() {
        assert!(NativeType::Int.is_argument_type());
        assert!(!NativeType::Bool.is_argument_type());
        assert!(!NativeType::Void.is_argument_type());
        assert!(NativeType::Bool.is_return_type());
        assert!(!NativeType::Unsupported("float".to_string()).is_return_type());
    }

    #[test]
    fn normalize_collapses_sigils() {
        assert_eq!(normalize_type("ObjClass *"), "ObjClass*");
        assert_eq!(normalize_type("  const   std::string   & "), "const std::string&");
        assert_eq!(
            normalize_type("const std::initializer_list<Value> &"),
            "const std::initializer_list<Value>&"
        );
        assert_eq!(normalize_type("double"), "double");
    }

    #[test]
    fn bindable_names() {
        assert!(is_bindable_name("Obj"));
        assert!(is_bindable_name("ObjNumClass"));
        assert!(!is_bindable_name("Object*"));
        assert!(!is_bindable_name("Value"));
    }
}
