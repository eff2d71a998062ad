//! Generator for the native bindings of a Wren runtime.
//!
//! Scans C++ headers for `WREN_METHOD` declarations and writes one C++ file
//! holding a trampoline per method, the per-class registration tables, and
//! the generic closure dispatch the runtime calls through.
//!
//! ```
//! use wrenbind::{EmitOptions, Source, generate_from_sources};
//!
//! let header = "class ObjFoo : public Obj {\n\
//!               \tWREN_METHOD() static double Bar(double a, int b);\n\
//!               };\n";
//! let code = generate_from_sources(&[Source::new("ObjFoo.h", header)], &EmitOptions::default())?;
//! assert!(code.contains("double ret = ObjFoo::Bar(typedArg0, typedArg1);"));
//! # Ok::<(), wrenbind::GenerateError>(())
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use config::{GeneratorConfig, Output};
pub use driver::{GenerationSummary, Source, collect_classes, generate_from_sources, run};
pub use error::GenerateError;
pub use wrenbind_emit::EmitOptions;

pub mod prelude {
    pub use crate::config::{GeneratorConfig, Output};
    pub use crate::driver::{GenerationSummary, Source, generate_from_sources, run};
    pub use crate::error::GenerateError;
    pub use wrenbind_core::{BindingError, Class, Method, ParseError};
    pub use wrenbind_emit::{BindingEmitter, EmitOptions};
}
