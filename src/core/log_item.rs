//! Named payloads attached to a log event

use super::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name substituted when an item carries no name of its own
pub const DEFAULT_ITEM_NAME: &str = "Item";

/// A named value attached to a [`LogEvent`](super::LogEvent)
///
/// The value is an arbitrary JSON-compatible payload. Strings are rendered
/// raw by `$LogItems`; everything else goes through the JSON codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Value,
}

impl LogItem {
    /// Create a named item
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// Create an item without a name
    pub fn unnamed<V: Into<Value>>(value: V) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    /// Create an item from any serializable payload
    ///
    /// # Errors
    ///
    /// Returns a codec error if the payload cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn from_serializable<N, T>(name: Option<N>, payload: &T) -> Result<Self>
    where
        N: Into<String>,
        T: Serialize + ?Sized,
    {
        Ok(Self {
            name: name.map(Into::into),
            value: serde_json::to_value(payload)?,
        })
    }

    /// Name to display, falling back to [`DEFAULT_ITEM_NAME`]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ITEM_NAME)
    }
}
