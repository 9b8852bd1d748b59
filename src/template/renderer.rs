//! Ordered application of placeholder resolvers

use super::resolver::Resolver;
use super::substring::Segments;
use crate::core::{LogEvent, Result};

/// Applies a fixed list of resolvers over a template
///
/// Each resolver runs exactly once, in list order, on the output of the
/// previous one. Only text that came from the template is scanned: a
/// placeholder appearing in an event field or in an earlier resolver's
/// replacement stays unresolved, whatever the resolver order.
///
/// # Example
///
/// ```
/// use log_template_core::core::{LogEvent, LogType};
/// use log_template_core::template::{Resolver, TemplateRenderer};
///
/// let renderer = TemplateRenderer::new(vec![Resolver::Context, Resolver::LogType]);
/// let event = LogEvent::new("id", LogType::Error).with_context("db");
///
/// assert_eq!(renderer.render(&event, "[$LogType] $Context").unwrap(), "[Error] db");
/// ```
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    resolvers: Vec<Resolver>,
}

impl TemplateRenderer {
    pub fn new(resolvers: Vec<Resolver>) -> Self {
        Self { resolvers }
    }

    /// Render `template` against `event`
    ///
    /// # Errors
    ///
    /// Propagates the first resolver failure.
    pub fn render(&self, event: &LogEvent, template: &str) -> Result<String> {
        let mut segments = Segments::new(template);
        for resolver in &self.resolvers {
            segments = resolver.expand(Some(event), segments)?;
        }
        let rendered = segments.into_string();

        tracing::trace!(
            resolvers = self.resolvers.len(),
            output_len = rendered.len(),
            "template rendered"
        );
        Ok(rendered)
    }

    pub fn resolvers(&self) -> &[Resolver] {
        &self.resolvers
    }

    /// Whether a resolver for `placeholder` (e.g. `"$Tags"`) is wired in
    pub fn supports(&self, placeholder: &str) -> bool {
        self.resolvers.iter().any(|r| r.placeholder() == placeholder)
    }
}
