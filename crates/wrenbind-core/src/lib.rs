//! Binding model for the wrenbind generator.
//!
//! This crate holds the data parsed out of `WREN_METHOD` declarations and the
//! pure rules derived from it:
//!
//! - [`Class`], [`Method`], [`Argument`] - the parsed records
//! - [`BoundMethod`] - arity, signature and symbol derivation
//! - [`Operator`] - the `Operator*` name table
//! - [`NativeType`] - classification of declared C++ types
//! - [`ParseError`], [`BindingError`] - the error taxonomy
//!
//! # Example
//!
//! ```
//! use wrenbind_core::{Class, Method, MethodFlags};
//!
//! let class = Class::new("ObjFoo").with_method(
//!     Method::new("Bar", "double")
//!         .with_flags(MethodFlags::STATIC)
//!         .with_arg("double", "a")
//!         .with_arg("int", "b"),
//! );
//!
//! let bar = class.bound_methods().next().unwrap();
//! assert_eq!(bar.signature().unwrap(), "bar(_,_)");
//! assert_eq!(bar.symbol().unwrap(), "binding_ObjFoo_Bar_2");
//! ```

pub mod error;
pub mod model;
pub mod native_type;
pub mod operator;
pub mod signature;

pub use error::{BindingError, ParseError};
pub use model::{
    Argument, BoundMethod, Class, ClassRole, MAX_DISPATCH_ARITY, Method, MethodFlags, MethodKind,
    NULL_CLASS, NUMBER_CLASS,
};
pub use native_type::{BINDABLE_PREFIX, NativeType, is_bindable_name, normalize_type};
pub use operator::{OPERATOR_PREFIX, Operator, SUBSCRIPT_GET, SUBSCRIPT_SET};
pub use signature::{CallShape, placeholder_list, wren_method_name};
