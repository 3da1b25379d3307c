//! The response decorator.
//!
//! Wraps one response value and proxies field reads and operation calls
//! to it. Field reads fall back to an inflected name and decorate what
//! they find; operation calls are forwarded untouched.

use field_path::{FieldPath, Step};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::DecoratorConfig;
use crate::error::DecoratorError;
use crate::field::Field;
use crate::policy::{ConfiguredPolicy, DefaultPolicy, Policy};
use crate::wrapped::Wrapped;

#[derive(Debug, Clone, PartialEq)]
pub struct Decorator<W = Value, P = DefaultPolicy> {
    wrapped: W,
    name: Option<String>,
    policy: P,
}

impl<W: Wrapped> Decorator<W, DefaultPolicy> {
    pub fn new(wrapped: W) -> Self {
        Self::with_policy(wrapped, None, DefaultPolicy)
    }

    pub fn named(wrapped: W, name: impl Into<String>) -> Self {
        Self::with_policy(wrapped, Some(name.into()), DefaultPolicy)
    }
}

impl<W: Wrapped> Decorator<W, ConfiguredPolicy> {
    pub fn from_config(wrapped: W, name: Option<String>, config: &DecoratorConfig) -> Self {
        Self::with_policy(wrapped, name, config.into())
    }
}

impl<W: Wrapped, P: Policy> Decorator<W, P> {
    pub fn with_policy(wrapped: W, name: Option<String>, policy: P) -> Self {
        Self {
            wrapped,
            name,
            policy,
        }
    }

    /// Reads a field, trying the literal name first and the inflected name
    /// second. The found value is decorated; a missing field is `None`.
    pub fn field(&self, name: &str) -> Option<Field<P>> {
        self.lookup(name).map(|value| self.policy.decorate(value.clone()))
    }

    /// Like [`field`](Self::field) but undecorated, with `null` for a
    /// missing field.
    pub fn field_or_null(&self, name: &str) -> Value {
        self.lookup(name).cloned().unwrap_or(Value::Null)
    }

    /// Raw two-step lookup without decoration.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        lookup_in(&self.wrapped, &self.policy, name)
    }

    /// Walks a path of steps, reading each one through [`field`](Self::field)
    /// so every intermediate value is decorated by the policy. A numeric
    /// step selects an element when the current value was decorated as a
    /// [`Field::List`]. A missing step, or a step into a plain value, gives
    /// `None`; so does an empty path.
    pub fn path(&self, path: &str) -> Result<Option<Field<P>>, DecoratorError> {
        let path: FieldPath = path.parse()?;
        let Some((first, rest)) = path.steps().split_first() else {
            return Ok(None);
        };
        let mut current = match self.field(first.name()) {
            Some(field) => field,
            None => return Ok(None),
        };
        for step in rest {
            current = match step_into(current, step) {
                Some(field) => field,
                None => {
                    trace!(path = %path, step = step.name(), "path step not found");
                    return Ok(None);
                }
            };
        }
        Ok(Some(current))
    }

    /// Forwards an operation call to the wrapped value. The result is
    /// returned as is.
    pub fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DecoratorError> {
        let result = self.wrapped.invoke(operation, args);
        if let Err(DecoratorError::OperationNotFound { .. }) = &result {
            debug!(operation, name = ?self.name, "operation not found on wrapped value");
        }
        result
    }

    pub fn wrapped(&self) -> &W {
        &self.wrapped
    }

    pub fn into_wrapped(self) -> W {
        self.wrapped
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

fn step_into<P: Policy>(field: Field<P>, step: &Step) -> Option<Field<P>> {
    match field {
        Field::Object(decorator) => decorator.field(step.name()),
        Field::List(items) => step.index().and_then(|i| items.into_iter().nth(i)),
        Field::Value(_) => None,
    }
}

fn lookup_in<'v, W, P>(wrapped: &'v W, policy: &P, name: &str) -> Option<&'v Value>
where
    W: Wrapped + ?Sized,
    P: Policy,
{
    if let Some(value) = wrapped.field(name) {
        return Some(value);
    }
    let inflected = policy.inflect(name);
    if inflected == name {
        trace!(field = name, "field not set");
        return None;
    }
    let found = wrapped.field(&inflected);
    if found.is_some() {
        trace!(field = name, inflected = %inflected, "field resolved through inflection");
    } else {
        trace!(field = name, inflected = %inflected, "field not set under either name");
    }
    found
}
