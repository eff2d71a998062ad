//! Line-oriented declaration scanner.
//!
//! The scanner walks a header one physical line at a time, tracking the most
//! recent `class Obj...` line as the current class. There is no class-close
//! marker: a class stays current until the next class line or end of input,
//! which is also when it is yielded.

use std::iter::Enumerate;
use std::str::Lines;

use tracing::trace;
use wrenbind_core::{Class, Method, MethodFlags, MethodKind, ParseError, normalize_type};

use crate::args::{MalformedArgument, parse_args};
use crate::patterns::{CLASS, METHOD};

/// Iterator over the bindable classes declared in a source text.
///
/// Yields each class once all of its methods have been read. After an error
/// the iterator is fused and yields nothing further.
pub struct Scanner<'src> {
    lines: Enumerate<Lines<'src>>,
    current: Option<Class>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner over the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            lines: source.lines().enumerate(),
            current: None,
            finished: false,
        }
    }

    fn scan_method(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let Some(caps) = METHOD.captures(line) else {
            return Ok(());
        };

        let kind_text = caps["kind"].trim();
        let kind = MethodKind::from_annotation(kind_text).ok_or_else(|| ParseError::UnknownKind {
            line: line_no,
            kind: kind_text.to_string(),
            fragment: line.to_string(),
        })?;

        let mut flags = MethodFlags::empty();
        match caps.name("qualifier").map(|m| m.as_str()) {
            Some("static") => flags |= MethodFlags::STATIC,
            Some("virtual") => flags |= MethodFlags::VIRTUAL,
            _ => {}
        }
        if caps.name("const").is_some() {
            flags |= MethodFlags::CONST;
        }
        if caps.name("override").is_some() {
            flags |= MethodFlags::OVERRIDE;
        }

        let mut args = parse_args(&caps["args"]).map_err(|MalformedArgument(argument)| {
            ParseError::MalformedArgument {
                line: line_no,
                argument,
                fragment: line.to_string(),
            }
        })?;

        match kind {
            MethodKind::Variadic => {
                if args.pop().is_none() {
                    return Err(ParseError::MissingVariadicTail {
                        line: line_no,
                        fragment: line.to_string(),
                    });
                }
            }
            MethodKind::Plain | MethodKind::Getter => {}
        }

        let method = Method {
            name: caps["name"].to_string(),
            return_type: normalize_type(&caps["ret"]),
            kind,
            flags,
            args,
            line: line_no,
        };

        let Some(class) = self.current.as_mut() else {
            return Err(ParseError::MethodOutsideClass {
                line: line_no,
                fragment: line.to_string(),
            });
        };

        trace!(class = %class.name, method = %method.name, line = line_no, "found method");
        class.methods.push(method);
        Ok(())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Class, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some((index, raw)) = self.lines.next() {
            let line_no = index + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = CLASS.captures(line) {
                let mut class = Class::new(&caps["name"]);
                class.line = line_no;
                trace!(class = %class.name, line = line_no, "found class");
                if let Some(done) = self.current.replace(class) {
                    return Some(Ok(done));
                }
                continue;
            }

            if let Err(err) = self.scan_method(line_no, line) {
                self.finished = true;
                self.current = None;
                return Some(Err(err));
            }
        }

        self.finished = true;
        self.current.take().map(Ok)
    }
}

fn strip_comment(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Parse all classes from a source text.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn parse_source(source: &str) -> Result<Vec<Class>, ParseError> {
    Scanner::new(source).collect()
}
