//! Scanner for `WREN_METHOD` declarations in C++ runtime headers.
//!
//! The grammar is line based:
//!
//! ```text
//! class ObjFoo : public Obj {
//!     WREN_METHOD() static double Bar(double a, ARG("Count") int b);
//!     WREN_METHOD(getter) std::string Name();
//!     WREN_METHOD(variadic) Value Call(const std::initializer_list<Value> &values);
//! };
//! ```
//!
//! # Example
//!
//! ```
//! use wrenbind_parser::parse_source;
//!
//! let classes = parse_source("class ObjFoo {\nWREN_METHOD() static double Bar(double a, int b);\n").unwrap();
//! assert_eq!(classes[0].name, "ObjFoo");
//! assert_eq!(classes[0].methods[0].args.len(), 2);
//! ```

mod args;
mod patterns;
mod scanner;

pub use args::{MalformedArgument, parse_args};
pub use scanner::{Scanner, parse_source};
