//! Errors raised by the file driver.

use std::path::PathBuf;

use thiserror::Error;
use wrenbind_core::{BindingError, ParseError};

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Everything that can stop a generation run.
///
/// No output is written once any of these has been raised.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Reading an input or writing the output failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration source could not be scanned.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The same class is declared in two sources (or twice in one).
    #[error("class '{class}' is declared in both {} and {}", first.display(), second.display())]
    DuplicateClass {
        class: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(transparent)]
    Binding(#[from] BindingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_file_and_line() {
        let err = GenerateError::Parse {
            path: PathBuf::from("rtsrc/ObjList.h"),
            source: ParseError::MethodOutsideClass {
                line: 12,
                fragment: "WREN_METHOD() void F();".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.starts_with("rtsrc/ObjList.h: line 12:"));
    }

    #[test]
    fn duplicate_class_names_both_files() {
        let err = GenerateError::DuplicateClass {
            class: "ObjFoo".to_string(),
            first: PathBuf::from("a.h"),
            second: PathBuf::from("b.h"),
        };
        assert_eq!(err.to_string(), "class 'ObjFoo' is declared in both a.h and b.h");
    }

    #[test]
    fn binding_errors_convert() {
        let err: GenerateError = BindingError::DuplicateClass {
            class: "ObjFoo".to_string(),
        }
        .into();
        assert!(matches!(err, GenerateError::Binding(_)));
    }
}
