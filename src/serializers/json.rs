//! JSON serializer rendering the whole event as one object

use crate::core::{
    FormatterConfig, JsonCodec, LogEvent, LogSerializer, LoggerError, Result, DEFAULT_DATE_FORMAT,
};
use crate::template::format_timestamp;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Serializes events to JSON for machine processing
///
/// Example output (compact codec):
/// `{"id":"42","log_type":"Error","timestamp":"2019-02-13 08:30:00.000","context":"db","tags":["a"],"items":{"user":"alice"}}`
///
/// Absent optional fields are omitted. Items are keyed by name, unnamed
/// items use `Item`; a later item with the same name overwrites the earlier.
#[derive(Clone)]
pub struct JsonSerializer {
    codec: Arc<dyn JsonCodec>,
    date_format: String,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::with_config(&FormatterConfig::default())
    }

    pub fn with_config(config: &FormatterConfig) -> Self {
        Self {
            codec: Arc::new(config.codec()),
            date_format: config.date_format.clone(),
        }
    }

    pub fn with_codec(codec: Arc<dyn JsonCodec>) -> Self {
        Self {
            codec,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    fn to_json_value(&self, event: &LogEvent) -> Result<Value> {
        let mut json_obj = Map::new();

        json_obj.insert("id".to_string(), Value::String(event.id.clone()));
        json_obj.insert(
            "log_type".to_string(),
            Value::String(event.log_type.name().to_string()),
        );
        json_obj.insert(
            "timestamp".to_string(),
            Value::String(format_timestamp(&event.timestamp, &self.date_format)?),
        );

        for (key, field) in [
            ("context", &event.context),
            ("description", &event.description),
            ("source", &event.source),
        ] {
            if let Some(value) = field {
                json_obj.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        if !event.tags.is_empty() {
            let tags = event
                .tags
                .iter()
                .map(|tag| tag.clone().map(Value::String).unwrap_or(Value::Null))
                .collect();
            json_obj.insert("tags".to_string(), Value::Array(tags));
        }

        if !event.items.is_empty() {
            let items = event
                .items
                .iter()
                .map(|item| (item.display_name().to_string(), item.value.clone()))
                .collect::<Map<_, _>>();
            json_obj.insert("items".to_string(), Value::Object(items));
        }

        Ok(Value::Object(json_obj))
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSerializer for JsonSerializer {
    fn serialize(&self, event: &LogEvent) -> Result<String> {
        self.to_json_value(event)
            .and_then(|value| self.codec.encode(&value))
            .map_err(|e| LoggerError::serialization(self.name(), e))
    }

    fn name(&self) -> &str {
        "JsonSerializer"
    }
}

impl fmt::Debug for JsonSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSerializer")
            .field("date_format", &self.date_format)
            .finish_non_exhaustive()
    }
}
