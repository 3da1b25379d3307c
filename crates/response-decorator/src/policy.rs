//! Specialisation hooks for a [`Decorator`].
//!
//! A policy decides how a caller's field name is inflected when the
//! literal name is not set, and how a found value is decorated before it
//! is handed back. Child decorators are built with a clone of the parent
//! policy, so a specialisation holds at every depth.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::config::DecoratorConfig;
use crate::decorator::Decorator;
use crate::field::Field;
use crate::inflect::{ucfirst, Inflection};

pub trait Policy: Clone + fmt::Debug + Sized {
    /// Maps a caller-side field name onto the response's convention.
    fn inflect<'a>(&self, name: &'a str) -> Cow<'a, str> {
        ucfirst(name)
    }

    /// Wraps a found value. Objects become nameless child decorators,
    /// everything else passes through.
    fn decorate(&self, value: Value) -> Field<Self> {
        decorate_objects(self, value)
    }
}

/// The generic decoration: wrap objects, pass through the rest.
///
/// Sequences pass through untouched even when they hold objects.
pub fn decorate_objects<P: Policy>(policy: &P, value: Value) -> Field<P> {
    match value {
        Value::Object(_) => Field::Object(Decorator::with_policy(value, None, policy.clone())),
        other => Field::Value(other),
    }
}

/// First-letter capitalisation and generic decoration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPolicy;

impl Policy for DefaultPolicy {}

/// A policy assembled from a [`DecoratorConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredPolicy {
    pub inflection: Inflection,
    /// Decorate sequence elements one by one instead of passing the
    /// sequence through.
    pub decorate_sequences: bool,
}

impl From<DecoratorConfig> for ConfiguredPolicy {
    fn from(config: DecoratorConfig) -> Self {
        Self {
            inflection: config.inflection,
            decorate_sequences: config.decorate_sequences,
        }
    }
}

impl From<&DecoratorConfig> for ConfiguredPolicy {
    fn from(config: &DecoratorConfig) -> Self {
        config.clone().into()
    }
}

impl Policy for ConfiguredPolicy {
    fn inflect<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.inflection.apply(name)
    }

    fn decorate(&self, value: Value) -> Field<Self> {
        match value {
            Value::Array(items) if self.decorate_sequences => {
                Field::List(items.into_iter().map(|item| self.decorate(item)).collect())
            }
            other => decorate_objects(self, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_policy_decorates_objects_only() {
        let policy = DefaultPolicy;
        assert!(policy.decorate(json!({"A": 1})).is_object());
        assert_eq!(policy.decorate(json!(1)), json!(1));
        assert_eq!(policy.decorate(json!([{"A": 1}])), json!([{"A": 1}]));
        assert_eq!(policy.decorate(Value::Null), Value::Null);
    }

    #[test]
    fn configured_policy_decorates_sequences() {
        let policy = ConfiguredPolicy {
            inflection: Inflection::UcFirst,
            decorate_sequences: true,
        };
        let Field::List(items) = policy.decorate(json!([{"A": 1}, 2, [3]])) else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 3);
        assert!(items[0].is_object());
        assert_eq!(items[1], json!(2));
        assert!(matches!(&items[2], Field::List(inner) if inner.len() == 1));
    }

    #[test]
    fn configured_policy_uses_inflection() {
        let policy = ConfiguredPolicy::from(DecoratorConfig {
            inflection: Inflection::SnakeToPascal,
            decorate_sequences: false,
        });
        assert_eq!(policy.inflect("zip_code"), "ZipCode");
        assert_eq!(policy.decorate(json!([1])), json!([1]));
    }
}
