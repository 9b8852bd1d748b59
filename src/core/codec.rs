//! JSON codec used for non-string log item values and JSON output

use super::error::Result;
use serde_json::Value;

/// Encodes JSON values to text
///
/// Swappable so callers can plug in a differently configured encoder.
pub trait JsonCodec: Send + Sync {
    fn encode(&self, value: &Value) -> Result<String>;
}

/// `serde_json` backed codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonCodec {
    pretty: bool,
}

impl SerdeJsonCodec {
    /// Single-line output
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented multi-line output
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn encode(&self, value: &Value) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(encoded)
    }
}
