//! Argument list tokenizer.

use wrenbind_core::{Argument, normalize_type};

use crate::patterns::{ARG_LABEL, TYPED_NAME};

/// Why a single argument entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedArgument(pub String);

/// Split a raw argument list into arguments.
///
/// Entries are separated by commas outside of label quotes. Each may start
/// with an `ARG("label")` annotation; the remainder must be a type followed
/// by a parameter name. An empty list yields no arguments.
pub fn parse_args(raw: &str) -> Result<Vec<Argument>, MalformedArgument> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_entries(raw)
        .into_iter()
        .enumerate()
        .map(|(position, entry)| parse_arg(entry.trim(), position))
        .collect()
}

fn split_entries(raw: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in raw.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                entries.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&raw[start..]);
    entries
}

fn parse_arg(entry: &str, position: usize) -> Result<Argument, MalformedArgument> {
    let (label, rest) = match ARG_LABEL.captures(entry) {
        Some(caps) => (
            Some(caps["label"].to_string()),
            caps.name("rest").map_or("", |m| m.as_str()),
        ),
        None => (None, entry),
    };

    let caps = TYPED_NAME
        .captures(rest.trim())
        .ok_or_else(|| MalformedArgument(entry.to_string()))?;

    let ty = normalize_type(&caps["ty"]);
    if ty.is_empty() {
        return Err(MalformedArgument(entry.to_string()));
    }

    Ok(Argument {
        ty,
        name: caps["name"].to_string(),
        position,
        label,
    })
}
