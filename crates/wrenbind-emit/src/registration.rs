//! Per-class registration functions and the class name dispatcher.

use rustc_hash::FxHashSet;
use wrenbind_core::{BindingError, Class};

use crate::conversion::escape;
use crate::trampoline::Registration;
use crate::writer::CodeWriter;

/// Name of the generated registration function for a class.
pub fn register_fn_name(class: &str) -> String {
    format!("register_{class}")
}

/// Emit `register_<Class>`, adding each registration to the class or its
/// metaclass depending on `isMeta`.
pub fn emit_register_fn(w: &mut CodeWriter, class: &Class, registrations: &[Registration]) {
    w.open(format!(
        "static void {}(ObjClass *cls, bool isMeta) {{",
        register_fn_name(&class.name)
    ));

    // Variadic forwarders share a guard.
    let mut rest = registrations;
    while let Some(first) = rest.first() {
        let run = rest
            .iter()
            .take_while(|r| r.is_static == first.is_static)
            .count();
        let (group, tail) = rest.split_at(run);
        rest = tail;

        let guard = if first.is_static { "isMeta" } else { "!isMeta" };
        if let [single] = group {
            w.line(format!("if ({guard})"));
            w.indented(|w| w.line(add_function(single)));
        } else {
            w.open(format!("if ({guard}) {{"));
            for registration in group {
                w.line(add_function(registration));
            }
            w.close("}");
        }
    }

    w.close("}");
}

fn add_function(registration: &Registration) -> String {
    format!(
        "cls->AddFunction(\"{}\", (void *){});",
        escape(&registration.signature),
        registration.symbol
    )
}

/// Tracks every class and trampoline symbol emitted so far.
///
/// Emission order follows insertion order; the sets only answer
/// "seen before?".
#[derive(Debug, Default)]
pub struct ClassTable {
    classes: Vec<String>,
    names: FxHashSet<String>,
    symbols: FxHashSet<String>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class, rejecting a second class with the same name.
    pub fn add_class(&mut self, class: &Class) -> Result<(), BindingError> {
        if !self.names.insert(class.name.clone()) {
            return Err(BindingError::DuplicateClass {
                class: class.name.clone(),
            });
        }
        self.classes.push(class.name.clone());
        Ok(())
    }

    /// Record the trampoline symbol of a method.
    ///
    /// Two overloads with the same name and arity map to the same symbol and
    /// cannot both be bound.
    pub fn add_symbol(&mut self, class: &str, method: &str, symbol: &str) -> Result<(), BindingError> {
        if !self.symbols.insert(symbol.to_string()) {
            return Err(BindingError::DuplicateSymbol {
                class: class.to_string(),
                method: method.to_string(),
                symbol: symbol.to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Emit `ObjClass::Bind`, which routes a class name to its registration
    /// function and aborts on names it does not know.
    pub fn emit_bind(&self, w: &mut CodeWriter) {
        w.open("void ObjClass::Bind(ObjClass *cls, const std::string &type, bool isMeta) {");
        for class in &self.classes {
            w.open(format!("if (type == \"{class}\") {{"));
            w.line(format!("{}(cls, isMeta);", register_fn_name(class)));
            w.line("return;");
            w.close("}");
        }
        w.line("fprintf(stderr, \"Unknown bindings class '%s'\\n\", type.c_str());");
        w.line("abort();");
        w.close("}");
    }
}
