//! Formatter configuration shared by the template serializers

use super::codec::SerdeJsonCodec;
use serde::{Deserialize, Serialize};

/// Date format used by `$LogDate` when no format modifier is given
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.fff";

/// Configuration for template serializers
///
/// Date formats use .NET-style custom format tokens (`yyyy`, `MM`, `dd`,
/// `HH`, `mm`, `ss`, `fff`, ...), the same grammar accepted by the
/// `$LogDate(...)` modifier.
///
/// # Examples
///
/// ```
/// use log_template_core::core::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_date_format("dd-MM-yyyy")
///     .with_json_pretty(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Fallback format for `$LogDate`
    pub date_format: String,
    /// Whether JSON output is indented
    pub json_pretty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            json_pretty: false,
        }
    }
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback date format
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set whether JSON output is indented
    #[must_use]
    pub fn with_json_pretty(mut self, pretty: bool) -> Self {
        self.json_pretty = pretty;
        self
    }

    /// Codec matching this configuration
    #[must_use]
    pub fn codec(&self) -> SerdeJsonCodec {
        if self.json_pretty {
            SerdeJsonCodec::pretty()
        } else {
            SerdeJsonCodec::compact()
        }
    }
}
