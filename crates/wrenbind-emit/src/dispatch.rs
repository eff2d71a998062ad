//! Generic closure dispatch.
//!
//! The runtime calls closures through an untyped function pointer plus an
//! optional upvalue pack. `FunctionDispatch` recovers the concrete function
//! type from the argument count. Closures that capture upvalues take the pack
//! pointer as their first parameter, ahead of the regular arguments.

use wrenbind_core::MAX_DISPATCH_ARITY;

use crate::writer::CodeWriter;

/// Emit `functionDispatch0` through `functionDispatch16` and the public
/// `FunctionDispatch` entry point.
pub fn emit_function_dispatch(w: &mut CodeWriter) {
    for arity in 0..=MAX_DISPATCH_ARITY {
        emit_fixed_dispatch(w, arity);
        w.blank();
    }
    emit_entry_point(w);
}

fn emit_fixed_dispatch(w: &mut CodeWriter, arity: usize) {
    let names: Vec<String> = (0..arity).map(|i| format!("arg{i}")).collect();
    let value_types = vec!["Value"; arity];

    let mut params = vec!["void *func".to_string(), "void *upvalues".to_string()];
    params.extend(names.iter().map(|n| format!("Value {n}")));

    let with_upvalues = ["void *"]
        .into_iter()
        .chain(value_types.iter().copied())
        .collect::<Vec<_>>()
        .join(", ");
    let upvalue_args = ["upvalues".to_string()]
        .into_iter()
        .chain(names.iter().cloned())
        .collect::<Vec<_>>();

    w.open(format!("static Value functionDispatch{arity}({}) {{", params.join(", ")));
    w.open("if (upvalues) {");
    w.line(format!("typedef Value (*WithUpvalues)({with_upvalues});"));
    w.line(format!("return ((WithUpvalues)func)({});", upvalue_args.join(", ")));
    w.close("}");
    w.line(format!("typedef Value (*Plain)({});", value_types.join(", ")));
    w.line(format!("return ((Plain)func)({});", names.join(", ")));
    w.close("}");
}

fn emit_entry_point(w: &mut CodeWriter) {
    w.open("Value FunctionDispatch(void *func, void *upvalues, const std::initializer_list<Value> &values) {");
    w.line("const Value *args = values.begin();");
    w.line("switch (values.size()) {");
    for arity in 0..=MAX_DISPATCH_ARITY {
        let mut args = vec!["func".to_string(), "upvalues".to_string()];
        args.extend((0..arity).map(|i| format!("args[{i}]")));

        w.line(format!("case {arity}:"));
        w.indented(|w| w.line(format!("return functionDispatch{arity}({});", args.join(", "))));
    }
    w.line("default:");
    w.indented(|w| {
        w.line(format!(
            "fprintf(stderr, \"Cannot dispatch a function with %d arguments, at most {MAX_DISPATCH_ARITY} are supported\\n\", (int)values.size());"
        ));
        w.line("abort();");
    });
    w.line("}");
    w.close("}");
}
