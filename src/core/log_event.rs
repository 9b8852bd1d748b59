//! Log event structure

use super::log_item::LogItem;
use super::log_type::LogType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only snapshot of one logging call
///
/// Every optional field may be absent; placeholders render an absent field as
/// an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: String,
    pub context: Option<String>,
    pub tags: Vec<Option<String>>,
    pub source: Option<String>,
    pub log_type: LogType,
    pub description: Option<String>,
    pub items: Vec<LogItem>,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    pub fn new(id: impl Into<String>, log_type: LogType) -> Self {
        Self {
            id: id.into(),
            context: None,
            tags: Vec::new(),
            source: None,
            log_type,
            description: None,
            items: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(Some(tag.into()));
        self
    }

    /// Replace all tags; `None` entries are kept as empty slots
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_item(mut self, item: LogItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
