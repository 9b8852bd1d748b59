//! Serializer for file paths and file names

use super::template::TemplateSerializer;
use crate::core::{FormatterConfig, LogEvent, LogSerializer, Result, DEFAULT_DATE_FORMAT};
use crate::template::resolver::text_resolvers;
use crate::template::TemplateRenderer;

/// Renders templates that end up in file system paths
///
/// `$Tags`, `$NewLine` and `$LogItems` are not resolved here since their
/// output (spaces, line breaks, JSON) is unsafe in a path.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use log_template_core::core::{LogEvent, LogSerializer, LogType};
/// use log_template_core::serializers::PathSerializer;
///
/// let serializer = PathSerializer::new("logs/$Source/$LogDate(yyyy-MM-dd).log");
/// let event = LogEvent::new("id", LogType::Info)
///     .with_source("billing")
///     .with_timestamp(Utc.with_ymd_and_hms(2019, 2, 13, 0, 0, 0).unwrap());
///
/// assert_eq!(serializer.serialize(&event).unwrap(), "logs/billing/2019-02-13.log");
/// ```
#[derive(Debug, Clone)]
pub struct PathSerializer {
    inner: TemplateSerializer,
}

impl PathSerializer {
    pub fn new(template: impl Into<String>) -> Self {
        Self::build(template.into(), DEFAULT_DATE_FORMAT)
    }

    pub fn with_config(template: impl Into<String>, config: &FormatterConfig) -> Self {
        Self::build(template.into(), &config.date_format)
    }

    fn build(template: String, date_format: &str) -> Self {
        Self {
            inner: TemplateSerializer::new("PathSerializer", template, text_resolvers(date_format)),
        }
    }

    pub fn template(&self) -> &str {
        self.inner.template()
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        self.inner.renderer()
    }
}

impl LogSerializer for PathSerializer {
    fn serialize(&self, event: &LogEvent) -> Result<String> {
        self.inner.serialize(event)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogItem, LogType};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_path_unsafe_placeholders_are_literal() {
        let serializer = PathSerializer::new("$Context-$Tags-$NewLine-$LogItems");
        let event = LogEvent::new("id", LogType::Info)
            .with_context("ctx")
            .with_tag("a b")
            .with_item(LogItem::new("k", 1));

        assert_eq!(serializer.serialize(&event).unwrap(), "ctx-$Tags-$NewLine-$LogItems");
    }

    #[test]
    fn test_path_truncation_and_type() {
        let serializer = PathSerializer::new("$LogType(4)/$LogId(2).txt");
        let event = LogEvent::new("abcdef", LogType::Warning);
        assert_eq!(serializer.serialize(&event).unwrap(), "Warn/ab.txt");
    }

    #[test]
    fn test_path_date_from_config() {
        let serializer =
            PathSerializer::with_config("$LogDate.log", &FormatterConfig::new().with_date_format("yyyyMMdd"));
        let event = LogEvent::new("id", LogType::Info)
            .with_timestamp(Utc.with_ymd_and_hms(2019, 2, 13, 23, 59, 0).single().unwrap());

        assert_eq!(serializer.serialize(&event).unwrap(), "20190213.log");
    }
}
