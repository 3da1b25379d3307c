use serde_json::Value;

use crate::decorator::Decorator;
use crate::policy::{DefaultPolicy, Policy};

/// A value returned by field access, after decoration.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<P: Policy = DefaultPolicy> {
    /// An object, wrapped in a nameless child decorator.
    Object(Decorator<Value, P>),
    /// A sequence whose elements were decorated one by one.
    List(Vec<Field<P>>),
    /// Anything passed through unchanged.
    Value(Value),
}

impl<P: Policy> Field<P> {
    pub fn is_object(&self) -> bool {
        matches!(self, Field::Object(_))
    }

    pub fn as_decorator(&self) -> Option<&Decorator<Value, P>> {
        match self {
            Field::Object(decorator) => Some(decorator),
            _ => None,
        }
    }

    pub fn into_decorator(self) -> Option<Decorator<Value, P>> {
        match self {
            Field::Object(decorator) => Some(decorator),
            _ => None,
        }
    }

    /// The passed-through value, if this field was not decorated.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Field<P>]> {
        match self {
            Field::List(items) => Some(items),
            _ => None,
        }
    }

    /// Strips all decoration and returns the raw value.
    pub fn into_value(self) -> Value {
        match self {
            Field::Object(decorator) => decorator.into_wrapped(),
            Field::List(items) => Value::Array(items.into_iter().map(Field::into_value).collect()),
            Field::Value(value) => value,
        }
    }

    /// Field access on a decorated object; `None` for anything else.
    pub fn field(&self, name: &str) -> Option<Field<P>> {
        self.as_decorator().and_then(|decorator| decorator.field(name))
    }
}

impl<P: Policy> PartialEq<Value> for Field<P> {
    fn eq(&self, other: &Value) -> bool {
        matches!(self, Field::Value(value) if value == other)
    }
}

impl<P: Policy> From<Field<P>> for Value {
    fn from(field: Field<P>) -> Self {
        field.into_value()
    }
}
