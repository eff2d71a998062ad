//! Per-method trampolines.
//!
//! A trampoline has the calling convention the runtime expects of a native
//! function: boxed `Value` parameters in, one boxed `Value` out. It unboxes
//! the receiver and arguments, calls the C++ method and boxes the result.
//!
//! ```text
//! static Value binding_ObjList_Insert_2(Value receiver, Value arg0, Value arg1) {
//! 	ObjList *obj = checkReceiver<ObjList>("ObjList.insert(_,_)", receiver);
//! 	int typedArg0 = checkInt("ObjList.insert(_,_)", "index", 1, arg0);
//! 	Value typedArg1 = arg1;
//! 	Value ret = obj->Insert(typedArg0, typedArg1);
//! 	return ret;
//! }
//! ```
//!
//! Variadic methods additionally get one forwarder per trailing value count,
//! each packing its trailing parameters into an initializer list.

use tracing::trace;
use wrenbind_core::{BindingError, BoundMethod, ClassRole, MAX_DISPATCH_ARITY};

use crate::conversion::{ReturnConversion, argument_conversion};
use crate::options::EmitOptions;
use crate::writer::CodeWriter;

/// One `cls->AddFunction(...)` entry produced for a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Wren signature, e.g. `insert(_,_)`.
    pub signature: String,
    /// Native function registered under it.
    pub symbol: String,
    /// Registered on the metaclass instead of the class.
    pub is_static: bool,
}

/// Name of the trailing values parameter of variadic trampolines.
const VARARGS: &str = "varargs";

/// Emit the trampoline for one method, plus forwarders if it is variadic.
///
/// Returns the registrations the class table needs for it. Nothing is written
/// when the method cannot be bound.
pub fn emit_method(
    w: &mut CodeWriter,
    bound: &BoundMethod<'_>,
    options: &EmitOptions,
) -> Result<Vec<Registration>, BindingError> {
    let symbol = bound.symbol()?;
    let debug_sig = bound.debug_signature()?;
    let conversions = bound
        .method
        .args
        .iter()
        .map(|arg| argument_conversion(bound, arg, &debug_sig))
        .collect::<Result<Vec<_>, _>>()?;
    let ret = ReturnConversion::for_method(bound)?;

    let fixed = fixed_params(bound);
    let mut params: Vec<String> = fixed.iter().map(|p| format!("Value {p}")).collect();
    if bound.method.is_variadic() {
        params.push(format!("const std::initializer_list<Value> &{VARARGS}"));
    }

    trace!(symbol = %symbol, signature = %debug_sig, "emitting trampoline");

    w.open(format!("static Value {symbol}({}) {{", params.join(", ")));
    if options.debug_gc {
        w.line(format!("WrenRuntime::Instance().RunGC({{{}}});", fixed.join(", ")));
    }
    if bound.takes_receiver() {
        let class = &bound.class.name;
        w.line(format!(
            "{class} *obj = checkReceiver<{class}>(\"{debug_sig}\", receiver);"
        ));
    }
    for line in &conversions {
        w.line(line);
    }
    for line in ret.statements(&call_expression(bound)) {
        w.line(line);
    }
    w.close("}");

    if !bound.method.is_variadic() {
        return Ok(vec![Registration {
            signature: bound.signature()?,
            symbol,
            is_static: bound.method.is_static(),
        }]);
    }

    let signatures = bound.variadic_signatures()?;
    let mut registrations = Vec::with_capacity(signatures.len());
    for (count, signature) in signatures.into_iter().enumerate() {
        let forwarder = bound.forwarder_symbol(count)?;
        emit_forwarder(w, &symbol, &forwarder, &fixed, count, options);
        registrations.push(Registration {
            signature,
            symbol: forwarder,
            is_static: bound.method.is_static(),
        });
    }
    debug_assert_eq!(registrations.len(), MAX_DISPATCH_ARITY + 1);
    Ok(registrations)
}

/// Names of the boxed parameters shared by a trampoline and its forwarders.
fn fixed_params(bound: &BoundMethod<'_>) -> Vec<String> {
    let mut params = Vec::with_capacity(bound.method.args.len() + 1);
    if bound.takes_receiver() {
        params.push("receiver".to_string());
    }
    params.extend(bound.method.args.iter().map(|arg| arg.raw_name()));
    params
}

/// The C++ expression invoking the native method.
fn call_expression(bound: &BoundMethod<'_>) -> String {
    let class = &bound.class.name;
    let method = &bound.method.name;

    let mut args: Vec<String> = bound.method.args.iter().map(|arg| arg.typed_name()).collect();
    if bound.method.is_variadic() {
        args.push(VARARGS.to_string());
    }
    let args = args.join(", ");

    if bound.method.is_static() {
        return format!("{class}::{method}({args})");
    }
    match bound.class.role {
        ClassRole::Number => format!("{class}::Instance()->{method}({args})"),
        ClassRole::Null => format!("static_cast<{class} *>(nullptr)->{method}({args})"),
        ClassRole::Ordinary => format!("obj->{method}({args})"),
    }
}

fn emit_forwarder(
    w: &mut CodeWriter,
    target: &str,
    symbol: &str,
    fixed: &[String],
    count: usize,
    options: &EmitOptions,
) {
    let trailing: Vec<String> = (0..count).map(|i| format!("va{i}")).collect();

    let params: Vec<String> = fixed
        .iter()
        .chain(&trailing)
        .map(|p| format!("Value {p}"))
        .collect();

    let mut args = fixed.to_vec();
    args.push(format!("{{{}}}", trailing.join(", ")));

    w.open(format!("static Value {symbol}({}) {{", params.join(", ")));
    if options.debug_gc {
        // Trailing values are only roots here, before they are packed.
        let roots: Vec<&str> = fixed.iter().chain(&trailing).map(String::as_str).collect();
        w.line(format!("WrenRuntime::Instance().RunGC({{{}}});", roots.join(", ")));
    }
    w.line(format!("return {target}({});", args.join(", ")));
    w.close("}");
}
