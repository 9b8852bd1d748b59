//! Text serializers for console and stream style destinations

use super::template::TemplateSerializer;
use crate::core::{
    FormatterConfig, JsonCodec, LogEvent, LogSerializer, Result, DEFAULT_DATE_FORMAT,
};
use crate::template::resolver::text_resolvers;
use crate::template::{Resolver, TemplateRenderer};
use std::sync::Arc;

/// Minimal text serializer
///
/// Resolves every placeholder except `$LogItems`, which is left as literal
/// text.
///
/// # Example
///
/// ```
/// use log_template_core::core::{LogEvent, LogSerializer, LogType};
/// use log_template_core::serializers::TextSerializer;
///
/// let serializer = TextSerializer::new("[$LogType] $Description(5)");
/// let event = LogEvent::new("id", LogType::Info).with_description("Request processed");
///
/// assert_eq!(serializer.serialize(&event).unwrap(), "[Info] Reque");
/// ```
#[derive(Debug, Clone)]
pub struct TextSerializer {
    inner: TemplateSerializer,
}

impl TextSerializer {
    pub fn new(template: impl Into<String>) -> Self {
        Self::with_date_format(template, DEFAULT_DATE_FORMAT)
    }

    pub fn with_config(template: impl Into<String>, config: &FormatterConfig) -> Self {
        Self::with_date_format(template, &config.date_format)
    }

    fn with_date_format(template: impl Into<String>, date_format: &str) -> Self {
        let mut resolvers = text_resolvers(date_format);
        resolvers.push(Resolver::Tags);
        resolvers.push(Resolver::NewLine);

        Self {
            inner: TemplateSerializer::new("TextSerializer", template.into(), resolvers),
        }
    }

    pub fn template(&self) -> &str {
        self.inner.template()
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        self.inner.renderer()
    }
}

impl LogSerializer for TextSerializer {
    fn serialize(&self, event: &LogEvent) -> Result<String> {
        self.inner.serialize(event)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Text serializer resolving every placeholder, including `$LogItems`
#[derive(Debug, Clone)]
pub struct ExtendedTextSerializer {
    inner: TemplateSerializer,
}

impl ExtendedTextSerializer {
    pub fn new(template: impl Into<String>) -> Self {
        Self::with_config(template, &FormatterConfig::default())
    }

    pub fn with_config(template: impl Into<String>, config: &FormatterConfig) -> Self {
        Self::with_codec(template, config, Arc::new(config.codec()))
    }

    /// Use a custom codec for non-string `$LogItems` values
    pub fn with_codec(
        template: impl Into<String>,
        config: &FormatterConfig,
        codec: Arc<dyn JsonCodec>,
    ) -> Self {
        Self {
            inner: TemplateSerializer::new(
                "ExtendedTextSerializer",
                template.into(),
                Resolver::all(&config.date_format, codec),
            ),
        }
    }

    pub fn template(&self) -> &str {
        self.inner.template()
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        self.inner.renderer()
    }
}

impl LogSerializer for ExtendedTextSerializer {
    fn serialize(&self, event: &LogEvent) -> Result<String> {
        self.inner.serialize(event)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
