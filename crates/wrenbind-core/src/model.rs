//! Classes, methods and arguments as read from the declaration sources.
//!
//! The parsed records are plain data. Everything that depends on both a
//! method and its owning class (arity, signature, symbol names) lives on
//! [`BoundMethod`], a borrowed view pairing the two.

use bitflags::bitflags;

use crate::error::BindingError;
use crate::native_type::NativeType;
use crate::operator::{OPERATOR_PREFIX, Operator, SUBSCRIPT_GET, SUBSCRIPT_SET};
use crate::signature::{CallShape, wren_method_name};

/// Name of the class holding the methods of numbers.
pub const NUMBER_CLASS: &str = "ObjNumClass";

/// Name of the class holding the methods of `null`.
pub const NULL_CLASS: &str = "ObjNull";

/// Largest argument count the runtime can dispatch generically.
///
/// Shared with the runtime's closure calling code; both sides must agree.
pub const MAX_DISPATCH_ARITY: usize = 16;

/// How a class's trampolines obtain their receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClassRole {
    /// The receiver is an object of the class itself.
    #[default]
    Ordinary,
    /// Numbers are not objects: the receiver arrives as the first declared
    /// argument and calls go through the class singleton.
    Number,
    /// `null` has no object; trampolines never look at the receiver.
    Null,
}

impl ClassRole {
    /// Determine the role of a class from its name.
    pub fn from_name(name: &str) -> ClassRole {
        match name {
            NUMBER_CLASS => ClassRole::Number,
            NULL_CLASS => ClassRole::Null,
            _ => ClassRole::Ordinary,
        }
    }
}

/// The kind given in `WREN_METHOD(<kind>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodKind {
    /// `WREN_METHOD()`
    #[default]
    Plain,
    /// `WREN_METHOD(getter)`: called without parentheses.
    Getter,
    /// `WREN_METHOD(variadic)`: accepts any number of trailing values.
    Variadic,
}

impl MethodKind {
    /// Parse the text between the parentheses of `WREN_METHOD(...)`.
    pub fn from_annotation(kind: &str) -> Option<MethodKind> {
        match kind {
            "" => Some(MethodKind::Plain),
            "getter" => Some(MethodKind::Getter),
            "variadic" => Some(MethodKind::Variadic),
            _ => None,
        }
    }
}

bitflags! {
    /// Qualifiers written around a method declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodFlags: u8 {
        /// `static`: bound on the metaclass, no receiver.
        const STATIC = 1 << 0;
        /// `virtual`
        const VIRTUAL = 1 << 1;
        /// Trailing `const`.
        const CONST = 1 << 2;
        /// Trailing `override`.
        const OVERRIDE = 1 << 3;
    }
}

/// One declared argument of a native method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Declared type, whitespace-normalized.
    pub ty: String,
    /// Declared parameter name.
    pub name: String,
    /// Zero-based position in the declaration.
    pub position: usize,
    /// Text from `ARG("...")`, used in runtime error messages.
    pub label: Option<String>,
}

impl Argument {
    /// Create an argument without a diagnostic label.
    pub fn new(ty: impl Into<String>, name: impl Into<String>, position: usize) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            position,
            label: None,
        }
    }

    /// Attach a diagnostic label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label shown in runtime errors, defaulting to the argument name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Classify the declared type.
    pub fn native_type(&self) -> NativeType {
        NativeType::classify(&self.ty)
    }

    /// Name of the boxed trampoline parameter carrying this argument.
    pub fn raw_name(&self) -> String {
        format!("arg{}", self.position)
    }

    /// Name of the local holding the converted argument.
    pub fn typed_name(&self) -> String {
        format!("typedArg{}", self.position)
    }
}

/// A `WREN_METHOD` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Native method name.
    pub name: String,
    /// Declared return type, whitespace-normalized.
    pub return_type: String,
    pub kind: MethodKind,
    pub flags: MethodFlags,
    /// Binding-relevant arguments. For variadic methods the trailing values
    /// argument has already been removed.
    pub args: Vec<Argument>,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl Method {
    /// Create a plain, non-static method with no arguments.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            kind: MethodKind::Plain,
            flags: MethodFlags::empty(),
            args: Vec::new(),
            line: 0,
        }
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Append an argument, assigning it the next position.
    pub fn with_arg(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        let position = self.args.len();
        self.args.push(Argument::new(ty, name, position));
        self
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    pub fn is_variadic(&self) -> bool {
        self.kind == MethodKind::Variadic
    }

    /// Classify the declared return type.
    pub fn native_return_type(&self) -> NativeType {
        NativeType::classify(&self.return_type)
    }
}

/// A bindable class and the methods declared inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: String,
    pub role: ClassRole,
    pub methods: Vec<Method>,
    /// 1-based line of the class declaration.
    pub line: usize,
}

impl Class {
    /// Create an empty class, deriving its role from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            role: ClassRole::from_name(&name),
            name,
            methods: Vec::new(),
            line: 0,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Iterate over the methods paired with this class.
    pub fn bound_methods(&self) -> impl Iterator<Item = BoundMethod<'_>> {
        self.methods.iter().map(move |method| BoundMethod { class: self, method })
    }
}

/// A method viewed together with its owning class.
#[derive(Debug, Clone, Copy)]
pub struct BoundMethod<'a> {
    pub class: &'a Class,
    pub method: &'a Method,
}

impl<'a> BoundMethod<'a> {
    pub fn new(class: &'a Class, method: &'a Method) -> Self {
        Self { class, method }
    }

    /// Check if the number receiver is folded into the first argument.
    pub fn folds_receiver(&self) -> bool {
        self.class.role == ClassRole::Number && !self.method.is_static()
    }

    /// Check if the trampoline takes a separate boxed receiver parameter.
    pub fn takes_receiver(&self) -> bool {
        !self.method.is_static() && self.class.role == ClassRole::Ordinary
    }

    /// Number of arguments visible to Wren code.
    pub fn arity(&self) -> Result<usize, BindingError> {
        let declared = self.method.args.len();
        if !self.folds_receiver() {
            return Ok(declared);
        }
        declared
            .checked_sub(1)
            .ok_or_else(|| BindingError::ArityUnderflow {
                class: self.class.name.clone(),
                method: self.method.name.clone(),
            })
    }

    /// Index reported in argument errors: 1-based over the visible
    /// arguments, with a folded number receiver reported as 0.
    pub fn error_index(&self, arg: &Argument) -> usize {
        if self.folds_receiver() {
            arg.position
        } else {
            arg.position + 1
        }
    }

    /// Resolve the name part of the signature.
    pub fn call_shape(&self) -> Result<CallShape, BindingError> {
        let name = self.method.name.as_str();
        if name == SUBSCRIPT_GET {
            return Ok(CallShape::SubscriptGet);
        }
        if name == SUBSCRIPT_SET {
            return Ok(CallShape::SubscriptSet);
        }
        if let Some(suffix) = name.strip_prefix(OPERATOR_PREFIX) {
            return Operator::from_suffix(suffix)
                .map(CallShape::Operator)
                .ok_or_else(|| BindingError::UnknownOperator {
                    class: self.class.name.clone(),
                    method: self.method.name.clone(),
                    suffix: suffix.to_string(),
                });
        }
        Ok(CallShape::Named(wren_method_name(name)))
    }

    /// The signature this method is registered under.
    ///
    /// For variadic methods this is the form with no trailing values.
    pub fn signature(&self) -> Result<String, BindingError> {
        self.signature_with_extra(0)
    }

    /// The signature with `extra` trailing placeholders appended.
    pub fn signature_with_extra(&self, extra: usize) -> Result<String, BindingError> {
        let (shape, arity) = self.shape_and_arity()?;
        Ok(shape.render(self.method.kind, arity + extra))
    }

    /// One signature per supported trailing value count, `0..=MAX_DISPATCH_ARITY`.
    pub fn variadic_signatures(&self) -> Result<Vec<String>, BindingError> {
        let (shape, arity) = self.shape_and_arity()?;
        Ok((0..=MAX_DISPATCH_ARITY)
            .map(|extra| shape.render(self.method.kind, arity + extra))
            .collect())
    }

    fn shape_and_arity(&self) -> Result<(CallShape, usize), BindingError> {
        let shape = self.call_shape()?;
        let arity = self.arity()?;
        // A subscript setter needs at least the assigned value.
        if shape == CallShape::SubscriptSet && arity == 0 {
            return Err(BindingError::SubscriptSetterArity {
                class: self.class.name.clone(),
                method: self.method.name.clone(),
            });
        }
        Ok((shape, arity))
    }

    /// `Class.signature`, used in runtime error messages.
    pub fn debug_signature(&self) -> Result<String, BindingError> {
        Ok(format!("{}.{}", self.class.name, self.signature()?))
    }

    /// Name of the generated trampoline.
    pub fn symbol(&self) -> Result<String, BindingError> {
        Ok(format!(
            "binding_{}_{}_{}",
            self.class.name,
            self.method.name,
            self.arity()?
        ))
    }

    /// Name of the variadic forwarder taking `count` trailing values.
    pub fn forwarder_symbol(&self, count: usize) -> Result<String, BindingError> {
        Ok(format!("{}_va{}", self.symbol()?, count))
    }
}
