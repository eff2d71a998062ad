//! Line patterns recognized by the scanner.
//!
//! These are deliberately shallow: a declaration must fit on one line, and
//! argument types may not contain parentheses. Anything that does not match
//! is treated as ordinary C++ and skipped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `class ObjFoo : public Obj {` or `class Obj {`
    pub static ref CLASS: Regex =
        Regex::new(r"^class\s+(?P<name>Obj\w*)\s*(?::|\{)").expect("class pattern");

    /// `WREN_METHOD(kind) [static|virtual] Ret Name(args) [const] [override];`
    ///
    /// The argument list may contain `ARG("...")` labels but no other
    /// parentheses.
    pub static ref METHOD: Regex = Regex::new(concat!(
        r"^WREN_METHOD\((?P<kind>[^)]*)\)\s*",
        r"(?:(?P<qualifier>static|virtual)\s+)?",
        r"(?P<ret>(?:const\s+)?[\w:<>]+(?:\s*[*&]\s*|\s+))",
        r"(?P<name>\w+)\s*",
        r#"\((?P<args>(?:[^()"]|ARG\(\s*"[^"]*"\s*\))*)\)\s*"#,
        r"(?P<const>const)?\s*(?P<override>override)?\s*;$",
    ))
    .expect("method pattern");

    /// `ARG("label") rest`
    pub static ref ARG_LABEL: Regex =
        Regex::new(r#"^ARG\(\s*"(?P<label>[^"]*)"\s*\)\s*(?P<rest>.*)$"#).expect("label pattern");

    /// `<type run><whitespace or sigil><identifier>`
    pub static ref TYPED_NAME: Regex =
        Regex::new(r"^(?P<ty>.*[\s*&])(?P<name>[A-Za-z_]\w*)$").expect("argument pattern");
}
