//! C++ code emitter for wrenbind.
//!
//! Turns parsed [`Class`] records into a single translation unit containing:
//!
//! - one trampoline per method (plus forwarders for variadic methods)
//! - one `register_<Class>` function per class
//! - `ObjClass::Bind`, routing a class name to its registration function
//! - the generic closure dispatch table behind `FunctionDispatch`
//!
//! Output is deterministic: classes and methods are emitted in input order.
//!
//! # Example
//!
//! ```
//! use wrenbind_core::{Class, Method, MethodFlags};
//! use wrenbind_emit::{BindingEmitter, EmitOptions};
//!
//! let class = Class::new("ObjFoo").with_method(
//!     Method::new("Bar", "double")
//!         .with_flags(MethodFlags::STATIC)
//!         .with_arg("double", "a"),
//! );
//!
//! let code = BindingEmitter::new(EmitOptions::default())
//!     .emit(&[class], &["ObjFoo.h"])
//!     .unwrap();
//! assert!(code.contains("cls->AddFunction(\"bar(_)\", (void *)binding_ObjFoo_Bar_1);"));
//! ```

mod conversion;
mod dispatch;
mod options;
mod registration;
mod trampoline;
mod writer;

use tracing::debug;
use wrenbind_core::{BindingError, Class};

pub use conversion::{ReturnConversion, argument_conversion, declare};
pub use dispatch::emit_function_dispatch;
pub use options::EmitOptions;
pub use registration::{ClassTable, emit_register_fn, register_fn_name};
pub use trampoline::{Registration, emit_method};
pub use writer::CodeWriter;

/// First line of every generated file.
pub const GENERATED_BANNER: &str =
    "// Auto-generated file (from wrenbind), DO NOT EDIT MANUALLY";

/// Map a declaration source path to the header it should be included as.
///
/// `ObjString.cpp` is included as `ObjString.h`; anything else is included
/// as given.
pub fn include_path(source: &str) -> String {
    match source.strip_suffix(".cpp") {
        Some(stem) => format!("{stem}.h"),
        None => source.to_string(),
    }
}

/// Emits the complete binding source for a set of classes.
#[derive(Debug, Clone, Default)]
pub struct BindingEmitter {
    options: EmitOptions,
}

impl BindingEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Generate the binding source.
    ///
    /// `sources` are the declaration files the classes were read from, in
    /// input order; each becomes an `#include`. Any unbindable method fails
    /// the whole emission.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn emit<S: AsRef<str>>(&self, classes: &[Class], sources: &[S]) -> Result<String, BindingError> {
        let mut w = CodeWriter::new();
        self.emit_prelude(&mut w, sources);

        let mut table = ClassTable::new();
        for class in classes {
            table.add_class(class)?;
            self.emit_class(&mut w, &mut table, class)?;
        }

        w.line("// Binding setup method, called by hand-written C++ classes");
        table.emit_bind(&mut w);
        w.blank();

        w.line("// Generic closure dispatch");
        emit_function_dispatch(&mut w);

        debug!(classes = table.len(), bytes = w.as_str().len(), "emitted bindings");
        Ok(w.finish())
    }

    fn emit_prelude<S: AsRef<str>>(&self, w: &mut CodeWriter, sources: &[S]) {
        w.line(GENERATED_BANNER);
        w.blank();
        w.line("#define BINDINGS_GEN");
        w.line("#include \"binding_utils.h\"");
        if self.options.debug_gc {
            w.line("#include \"WrenRuntime.h\"");
        }
        w.blank();
        w.line("#include <initializer_list>");
        w.line("#include <stdio.h>");
        w.line("#include <stdlib.h>");
        w.blank();

        if self.options.include_sources && !sources.is_empty() {
            w.line("// Includes for the declaration sources");
            for source in sources {
                w.line(format!("#include \"{}\"", include_path(source.as_ref())));
            }
            w.blank();
        }
    }

    fn emit_class(
        &self,
        w: &mut CodeWriter,
        table: &mut ClassTable,
        class: &Class,
    ) -> Result<(), BindingError> {
        debug!(class = %class.name, methods = class.methods.len(), "emitting class");

        w.line(format!("// Methods of {}", class.name));
        let mut registrations = Vec::new();
        for bound in class.bound_methods() {
            table.add_symbol(&class.name, &bound.method.name, &bound.symbol()?)?;
            registrations.extend(emit_method(w, &bound, &self.options)?);
        }
        emit_register_fn(w, class, &registrations);
        w.blank();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrenbind_core::{Method, MethodFlags, MethodKind};

    fn foo() -> Class {
        Class::new("ObjFoo").with_method(
            Method::new("Bar", "double")
                .with_flags(MethodFlags::STATIC)
                .with_arg("double", "a")
                .with_arg("int", "b"),
        )
    }

    #[test]
    fn include_paths() {
        assert_eq!(include_path("rtsrc/ObjString.cpp"), "rtsrc/ObjString.h");
        assert_eq!(include_path("ObjNum.h"), "ObjNum.h");
    }

    #[test]
    fn prelude() {
        let code = BindingEmitter::default().emit(&[foo()], &["ObjFoo.cpp"]).unwrap();
        let mut lines = code.lines();
        assert_eq!(lines.next(), Some(GENERATED_BANNER));
        assert!(code.contains("#define BINDINGS_GEN\n#include \"binding_utils.h\"\n"));
        assert!(code.contains("#include \"ObjFoo.h\"\n"));
        assert!(!code.contains("WrenRuntime.h"));
    }

    #[test]
    fn includes_can_be_disabled() {
        let emitter = BindingEmitter::new(EmitOptions::default().with_include_sources(false));
        let code = emitter.emit(&[foo()], &["ObjFoo.h"]).unwrap();
        assert!(!code.contains("#include \"ObjFoo.h\""));
    }

    #[test]
    fn debug_gc_pulls_in_runtime() {
        let emitter = BindingEmitter::new(EmitOptions::default().with_debug_gc(true));
        let code = emitter.emit(&[foo()], &["ObjFoo.h"]).unwrap();
        assert!(code.contains("#include \"WrenRuntime.h\""));
        assert!(code.contains("WrenRuntime::Instance().RunGC({arg0, arg1});"));
    }

    #[test]
    fn sections_in_order() {
        let code = BindingEmitter::default().emit(&[foo()], &["ObjFoo.h"]).unwrap();
        let trampoline = code.find("static Value binding_ObjFoo_Bar_2(").unwrap();
        let register = code.find("static void register_ObjFoo(").unwrap();
        let bind = code.find("void ObjClass::Bind(").unwrap();
        let dispatch = code.find("Value FunctionDispatch(").unwrap();
        assert!(trampoline < register && register < bind && bind < dispatch);
    }

    #[test]
    fn emission_is_deterministic() {
        let classes = [foo(), Class::new("ObjA"), Class::new("ObjB")];
        let emitter = BindingEmitter::default();
        let first = emitter.emit(&classes, &["a.h"]).unwrap();
        let second = emitter.emit(&classes, &["a.h"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_class_fails() {
        let err = BindingEmitter::default()
            .emit(&[foo(), foo()], &["a.h", "b.h"])
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::DuplicateClass {
                class: "ObjFoo".to_string()
            }
        );
    }

    #[test]
    fn same_name_and_arity_fails() {
        let class = Class::new("ObjFoo")
            .with_method(Method::new("Get", "Value").with_arg("int", "i"))
            .with_method(Method::new("Get", "Value").with_arg("Value", "key"));
        let err = BindingEmitter::default().emit(&[class], &["a.h"]).unwrap_err();
        assert_eq!(
            err,
            BindingError::DuplicateSymbol {
                class: "ObjFoo".to_string(),
                method: "Get".to_string(),
                symbol: "binding_ObjFoo_Get_1".to_string(),
            }
        );
    }

    #[test]
    fn getter_and_method_overloads_coexist() {
        let class = Class::new("ObjNumClass")
            .with_method(
                Method::new("OperatorMinus", "double")
                    .with_kind(MethodKind::Getter)
                    .with_arg("double", "receiver"),
            )
            .with_method(
                Method::new("OperatorMinus", "double")
                    .with_arg("double", "receiver")
                    .with_arg("double", "other"),
            );
        let code = BindingEmitter::default().emit(&[class], &["ObjNum.h"]).unwrap();
        assert!(code.contains("cls->AddFunction(\"-\", (void *)binding_ObjNumClass_OperatorMinus_0);"));
        assert!(code.contains("cls->AddFunction(\"-(_)\", (void *)binding_ObjNumClass_OperatorMinus_1);"));
    }

    #[test]
    fn unknown_operator_fails() {
        let class = Class::new("ObjFoo").with_method(Method::new("OperatorSpaceship", "int"));
        assert!(matches!(
            BindingEmitter::default().emit(&[class], &["a.h"]),
            Err(BindingError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn parsed_header_emits() {
        let classes = wrenbind_parser::parse_source(
            "class ObjRange : public Obj {\n\
             \tWREN_METHOD(getter) double From() const;\n\
             \tWREN_METHOD() Value Iterate(Value prev);\n\
             };\n",
        )
        .unwrap();
        let code = BindingEmitter::default().emit(&classes, &["ObjRange.cpp"]).unwrap();
        assert!(code.contains("#include \"ObjRange.h\""));
        assert!(code.contains("double ret = obj->From();"));
        assert!(code.contains("cls->AddFunction(\"from\", (void *)binding_ObjRange_From_0);"));
        assert!(code.contains("cls->AddFunction(\"iterate(_)\", (void *)binding_ObjRange_Iterate_1);"));
    }

    #[test]
    fn no_classes_still_emits_dispatch() {
        let code = BindingEmitter::default().emit::<&str>(&[], &[]).unwrap();
        assert!(code.contains("void ObjClass::Bind("));
        assert!(code.contains("functionDispatch16"));
        assert!(!code.contains("register_"));
    }
}
