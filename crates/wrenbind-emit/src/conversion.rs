//! Conversions between boxed runtime values and native C++ types.

use wrenbind_core::{Argument, BindingError, BoundMethod, NativeType};

/// Declare a C++ local of the given type, e.g. `ObjClass *typedArg1`.
pub fn declare(ty: &NativeType, name: &str) -> String {
    match ty {
        NativeType::Object(class) => format!("{class} *{name}"),
        other => format!("{other} {name}"),
    }
}

/// Build the statement that unboxes one argument into its typed local.
///
/// `debug_sig` is the `Class.signature` text reported by the runtime when the
/// conversion fails.
pub fn argument_conversion(
    bound: &BoundMethod<'_>,
    arg: &Argument,
    debug_sig: &str,
) -> Result<String, BindingError> {
    let ty = arg.native_type();
    let index = bound.error_index(arg);
    let label = escape(arg.label());
    let raw = arg.raw_name();

    if !ty.is_argument_type() {
        return Err(BindingError::UnknownArgumentType {
            class: bound.class.name.clone(),
            method: bound.method.name.clone(),
            index: arg.position + 1,
            label: arg.label().to_string(),
            ty: arg.ty.clone(),
        });
    }

    let expr = match &ty {
        NativeType::Object(class) => {
            format!("checkArg<{class}>(\"{debug_sig}\", \"{label}\", {index}, {raw}, false)")
        }
        NativeType::String => format!("checkString(\"{debug_sig}\", \"{label}\", {index}, {raw})"),
        NativeType::Double => format!("checkDouble(\"{debug_sig}\", \"{label}\", {index}, {raw})"),
        NativeType::Int => format!("checkInt(\"{debug_sig}\", \"{label}\", {index}, {raw})"),
        // Value
        _ => raw,
    };

    Ok(format!("{} = {};", declare(&ty, &arg.typed_name()), expr))
}

/// How a native return value is handed back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnConversion {
    /// Call for effect and return `NULL_VAL`.
    Discard,
    /// Store the result in `ret`, then return the boxing expression.
    Boxed { declaration: String, expr: String },
}

impl ReturnConversion {
    /// Pick the conversion for a method's declared return type.
    pub fn for_method(bound: &BoundMethod<'_>) -> Result<ReturnConversion, BindingError> {
        let ty = bound.method.native_return_type();
        if !ty.is_return_type() {
            return Err(BindingError::UnknownReturnType {
                class: bound.class.name.clone(),
                method: bound.method.name.clone(),
                ty: bound.method.return_type.clone(),
            });
        }

        let expr = match &ty {
            NativeType::Void => return Ok(ReturnConversion::Discard),
            NativeType::Value => "ret".to_string(),
            NativeType::String => "encode_object(ObjString::New(ret))".to_string(),
            NativeType::Bool => "encode_object(ObjBool::Get(ret))".to_string(),
            NativeType::Int | NativeType::Double => "encode_number(ret)".to_string(),
            // Object
            _ => "ret ? encode_object(ret) : NULL_VAL".to_string(),
        };
        Ok(ReturnConversion::Boxed {
            declaration: declare(&ty, "ret"),
            expr,
        })
    }

    /// Statements wrapping `call`, ending with the `return`.
    pub fn statements(&self, call: &str) -> Vec<String> {
        match self {
            ReturnConversion::Discard => vec![format!("{call};"), "return NULL_VAL;".to_string()],
            ReturnConversion::Boxed { declaration, expr } => {
                vec![format!("{declaration} = {call};"), format!("return {expr};")]
            }
        }
    }
}

/// Escape text for use inside a C++ string literal.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
