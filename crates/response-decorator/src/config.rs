use serde::Deserialize;

use crate::inflect::Inflection;

/// Per-instance decorator settings.
///
/// ```
/// use response_decorator::{DecoratorConfig, Inflection};
///
/// let config: DecoratorConfig =
///     serde_json::from_str(r#"{"inflection": {"kind": "snake_to_pascal"}}"#).unwrap();
/// assert_eq!(config.inflection, Inflection::SnakeToPascal);
/// assert!(!config.decorate_sequences);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    pub inflection: Inflection,
    pub decorate_sequences: bool,
}
