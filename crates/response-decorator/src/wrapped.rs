//! Values a [`Decorator`](crate::Decorator) can wrap.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::DecoratorError;

/// Named fields and named operations of a response object.
pub trait Wrapped {
    /// Returns the field if it is set. A field holding `null` is not set.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Calls a named operation with positional arguments.
    fn invoke(&self, operation: &str, _args: &[Value]) -> Result<Value, DecoratorError> {
        Err(DecoratorError::not_found(operation))
    }
}

impl Wrapped for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name).filter(|v| !v.is_null())
    }
}

impl Wrapped for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl<T: Wrapped + ?Sized> Wrapped for Box<T> {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }

    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DecoratorError> {
        (**self).invoke(operation, args)
    }
}

impl<T: Wrapped + ?Sized> Wrapped for Arc<T> {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }

    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DecoratorError> {
        (**self).invoke(operation, args)
    }
}

/// An operation bound to a [`ServiceObject`]. Receives the object's body.
pub type Operation = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, DecoratorError> + Send + Sync>;

/// Named operation table.
#[derive(Clone, Default)]
pub struct Operations {
    table: BTreeMap<String, Operation>,
}

impl Operations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `op` under `name`, replacing any previous entry.
    pub fn with<F>(mut self, name: impl Into<String>, op: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, DecoratorError> + Send + Sync + 'static,
    {
        self.insert(name, op);
        self
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, op: F)
    where
        F: Fn(&Value, &[Value]) -> Result<Value, DecoratorError> + Send + Sync + 'static,
    {
        self.table.insert(name.into(), Arc::new(op));
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A typed response object: a field body plus callable operations.
///
/// This is what a transport hands over when it maps a result onto a
/// known type rather than a generic structure.
#[derive(Debug, Clone)]
pub struct ServiceObject {
    body: Value,
    operations: Operations,
}

impl ServiceObject {
    pub fn new(body: Value, operations: Operations) -> Self {
        Self { body, operations }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn operations(&self) -> &Operations {
        &self.operations
    }
}

impl PartialEq for ServiceObject {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && self.operations.names().eq(other.operations.names())
    }
}

impl Wrapped for ServiceObject {
    fn field(&self, name: &str) -> Option<&Value> {
        self.body.field(name)
    }

    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, DecoratorError> {
        match self.operations.get(operation) {
            Some(op) => op(&self.body, args),
            None => Err(DecoratorError::not_found(operation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_fields_are_set_when_not_null() {
        let v = json!({"a": 0, "b": null, "c": ""});
        assert_eq!(v.field("a"), Some(&json!(0)));
        assert_eq!(v.field("b"), None);
        assert_eq!(v.field("c"), Some(&json!("")));
        assert_eq!(v.field("d"), None);
        assert_eq!(json!([1, 2]).field("0"), None);
        assert_eq!(json!("str").field("len"), None);
    }

    #[test]
    fn plain_values_have_no_operations() {
        let err = json!({"a": 1}).invoke("a", &[]).unwrap_err();
        assert_eq!(err, DecoratorError::not_found("a"));
    }

    #[test]
    fn service_object_dispatches_to_table() {
        let ops = Operations::new().with("Total", |body, args| {
            let base = body["Base"].as_i64().unwrap_or(0);
            let extra: i64 = args.iter().filter_map(Value::as_i64).sum();
            Ok(json!(base + extra))
        });
        let obj = ServiceObject::new(json!({"Base": 10}), ops);
        assert_eq!(obj.invoke("Total", &[json!(1), json!(2)]).unwrap(), json!(13));
        assert_eq!(
            obj.invoke("total", &[]).unwrap_err(),
            DecoratorError::not_found("total")
        );
        assert_eq!(obj.field("Base"), Some(&json!(10)));
    }

    #[test]
    fn operations_debug_lists_names() {
        let ops = Operations::new()
            .with("B", |_, _| Ok(Value::Null))
            .with("A", |_, _| Ok(Value::Null));
        assert_eq!(format!("{ops:?}"), r#"{"A", "B"}"#);
        assert_eq!(ops.len(), 2);
        assert!(ops.contains("A"));
    }
}
