//! Accessor facade for dynamically-typed web-service responses.
//!
//! A transport returns a loosely structured value; [`Decorator`] wraps it
//! so callers can read fields in their own naming convention and get
//! nested objects back already wrapped.
//!
//! ```
//! use response_decorator::Decorator;
//! use serde_json::json;
//!
//! let response = Decorator::named(
//!     json!({"ServiceStatus": {"StatusNbr": 200, "StatusDescription": "Found"}}),
//!     "VerifyAddressResult",
//! );
//! let status = response.field("serviceStatus").unwrap();
//! assert_eq!(status.field("statusNbr").unwrap(), json!(200));
//! assert!(response.field("missing").is_none());
//! ```

pub mod config;
pub mod decorator;
pub mod error;
pub mod field;
pub mod inflect;
pub mod policy;
pub mod wrapped;

pub use config::DecoratorConfig;
pub use decorator::Decorator;
pub use error::DecoratorError;
pub use field::Field;
pub use inflect::Inflection;
pub use policy::{decorate_objects, ConfiguredPolicy, DefaultPolicy, Policy};
pub use wrapped::{Operation, Operations, ServiceObject, Wrapped};
