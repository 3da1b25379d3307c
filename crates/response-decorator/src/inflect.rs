//! Property-name inflection.
//!
//! Callers use one naming convention (`fooBar`), remote services return
//! another (`FooBar`, `foo_bar`, `sFooBar`). An inflection maps the
//! caller's name onto the response's convention; it is only consulted
//! when the literal name is not set.

use serde::Deserialize;
use std::borrow::Cow;

/// Uppercase the first character only: `fooBar` -> `FooBar`.
///
/// Only an ASCII lowercase letter is changed; `ébc` and `ßx` are returned
/// as they are.
pub fn ucfirst(name: &str) -> Cow<'_, str> {
    match name.as_bytes().first() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase() as char);
            out.push_str(&name[1..]);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(name),
    }
}

/// Lowercase the first character only: `FooBar` -> `fooBar`. ASCII only.
pub fn lcfirst(name: &str) -> Cow<'_, str> {
    match name.as_bytes().first() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_lowercase() as char);
            out.push_str(&name[1..]);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(name),
    }
}

/// `foo_bar_baz` -> `fooBarBaz`.
pub fn snake_to_camel(name: &str) -> Cow<'_, str> {
    if !name.contains('_') || name.chars().all(|c| c == '_') {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('_').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
        } else {
            out.push_str(&ucfirst(part));
        }
    }
    Cow::Owned(out)
}

/// `foo_bar_baz` -> `FooBarBaz`.
pub fn snake_to_pascal(name: &str) -> Cow<'_, str> {
    match snake_to_camel(name) {
        Cow::Borrowed(s) => ucfirst(s),
        Cow::Owned(s) => Cow::Owned(ucfirst(&s).into_owned()),
    }
}

/// A configurable inflection rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Inflection {
    #[default]
    UcFirst,
    /// For services that answer in `camelCase` to `PascalCase` callers.
    LcFirst,
    Identity,
    SnakeToCamel,
    SnakeToPascal,
    /// `StripPrefix { prefix: "s" }` maps `sName` to `Name`.
    StripPrefix { prefix: String },
    /// `AddPrefix { prefix: "Get" }` maps `Name` to `GetName`.
    AddPrefix { prefix: String },
}

impl Inflection {
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Inflection::UcFirst => ucfirst(name),
            Inflection::LcFirst => lcfirst(name),
            Inflection::Identity => Cow::Borrowed(name),
            Inflection::SnakeToCamel => snake_to_camel(name),
            Inflection::SnakeToPascal => snake_to_pascal(name),
            Inflection::StripPrefix { prefix } => match name.strip_prefix(prefix.as_str()) {
                Some(rest) if !rest.is_empty() => Cow::Borrowed(rest),
                _ => Cow::Borrowed(name),
            },
            Inflection::AddPrefix { prefix } => Cow::Owned(format!("{prefix}{name}")),
        }
    }
}
