//! Template-backed serializer plumbing shared by the text and path serializers

use crate::core::{LogEvent, LoggerError, Result};
use crate::template::{Resolver, TemplateRenderer};

/// Immutable template paired with a pre-wired renderer
#[derive(Debug, Clone)]
pub(crate) struct TemplateSerializer {
    name: &'static str,
    template: String,
    renderer: TemplateRenderer,
}

impl TemplateSerializer {
    pub(crate) fn new(name: &'static str, template: String, resolvers: Vec<Resolver>) -> Self {
        Self {
            name,
            template,
            renderer: TemplateRenderer::new(resolvers),
        }
    }

    pub(crate) fn serialize(&self, event: &LogEvent) -> Result<String> {
        self.renderer
            .render(event, &self.template)
            .map_err(|e| LoggerError::serialization(self.name, e))
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn template(&self) -> &str {
        &self.template
    }

    pub(crate) fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }
}
