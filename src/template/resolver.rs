//! Placeholder resolvers
//!
//! Each [`Resolver`] knows exactly one placeholder token and substitutes all
//! of its occurrences in a template using one log event.

use super::date_format::format_timestamp;
use super::substring::{length_pattern, truncated, Segments, FORMAT_GROUP};
use crate::core::{
    JsonCodec, LogEvent, LogItem, LoggerError, Result, SerdeJsonCodec, DEFAULT_DATE_FORMAT,
};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Platform line separator substituted for `$NewLine`
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| length_pattern("Context"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| length_pattern("Description"));
static SOURCE_RE: LazyLock<Regex> = LazyLock::new(|| length_pattern("Source"));
static LOG_ID_RE: LazyLock<Regex> = LazyLock::new(|| length_pattern("LogId"));
static LOG_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| length_pattern("LogType"));

// Format characters allowed inside `$LogDate(...)`
static LOG_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$LogDate(?:\((?P<format>[dfFghHKmMsStyz:/\-., ]+)\))?")
        .expect("valid LogDate pattern")
});
static TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$Tags").expect("valid Tags pattern"));
static LOG_ITEMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$LogItems").expect("valid LogItems pattern"));
static NEW_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$NewLine").expect("valid NewLine pattern"));

/// One placeholder kind and its substitution rule
#[derive(Clone)]
pub enum Resolver {
    /// `$Context` / `$Context(N)`
    Context,
    /// `$Description` / `$Description(N)`
    Description,
    /// `$Source` / `$Source(N)`
    Source,
    /// `$LogId` / `$LogId(N)`
    LogId,
    /// `$LogType` / `$LogType(N)`
    LogType,
    /// `$LogDate` / `$LogDate(format)`, falling back to `default_format`
    LogDate { default_format: String },
    /// `$Tags`, space separated
    Tags,
    /// `$LogItems`, one `name: value` line per item
    LogItems { codec: Arc<dyn JsonCodec> },
    /// `$NewLine`
    NewLine,
}

impl Resolver {
    /// `$LogDate` resolver with the given fallback format
    pub fn log_date(default_format: impl Into<String>) -> Self {
        Resolver::LogDate {
            default_format: default_format.into(),
        }
    }

    /// `$LogDate` resolver using [`DEFAULT_DATE_FORMAT`]
    pub fn default_log_date() -> Self {
        Resolver::log_date(DEFAULT_DATE_FORMAT)
    }

    /// `$LogItems` resolver encoding non-string values with `codec`
    pub fn log_items(codec: Arc<dyn JsonCodec>) -> Self {
        Resolver::LogItems { codec }
    }

    /// `$LogItems` resolver with a compact `serde_json` codec
    pub fn default_log_items() -> Self {
        Resolver::log_items(Arc::new(SerdeJsonCodec::compact()))
    }

    /// Token this resolver substitutes, without modifiers
    pub fn placeholder(&self) -> &'static str {
        match self {
            Resolver::Context => "$Context",
            Resolver::Description => "$Description",
            Resolver::Source => "$Source",
            Resolver::LogId => "$LogId",
            Resolver::LogType => "$LogType",
            Resolver::LogDate { .. } => "$LogDate",
            Resolver::Tags => "$Tags",
            Resolver::LogItems { .. } => "$LogItems",
            Resolver::NewLine => "$NewLine",
        }
    }

    /// Whether resolving requires an event
    pub fn requires_event(&self) -> bool {
        !matches!(self, Resolver::NewLine)
    }

    /// Substitute every occurrence of this resolver's placeholder
    ///
    /// The replacement values are inserted literally and are not themselves
    /// scanned for placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidArgument`] when `event` is `None` for any
    /// resolver other than [`Resolver::NewLine`], and propagates date format
    /// or codec failures.
    pub fn resolve(&self, event: Option<&LogEvent>, template: &str) -> Result<String> {
        self.expand(event, Segments::new(template))
            .map(Segments::into_string)
    }

    /// Substitute this resolver's placeholder in the literal runs of `segments`
    pub(crate) fn expand(&self, event: Option<&LogEvent>, segments: Segments) -> Result<Segments> {
        let Some(event) = event else {
            return match self {
                Resolver::NewLine => replace_new_lines(segments),
                _ => Err(LoggerError::missing_event()),
            };
        };

        match self {
            Resolver::Context => replace_optional(&CONTEXT_RE, segments, &event.context),
            Resolver::Description => {
                replace_optional(&DESCRIPTION_RE, segments, &event.description)
            }
            Resolver::Source => replace_optional(&SOURCE_RE, segments, &event.source),
            Resolver::LogId => replace_value(&LOG_ID_RE, segments, &event.id),
            Resolver::LogType => replace_value(&LOG_TYPE_RE, segments, event.log_type.name()),
            Resolver::LogDate { default_format } => resolve_date(event, segments, default_format),
            Resolver::Tags => replace_block(&TAGS_RE, segments, || Ok(join_tags(&event.tags))),
            Resolver::LogItems { codec } => replace_block(&LOG_ITEMS_RE, segments, || {
                render_items(&event.items, codec.as_ref())
            }),
            Resolver::NewLine => replace_new_lines(segments),
        }
    }

    /// Every resolver, in the order the extended text serializer applies them
    pub fn all(default_date_format: &str, codec: Arc<dyn JsonCodec>) -> Vec<Resolver> {
        vec![
            Resolver::Context,
            Resolver::Description,
            Resolver::Source,
            Resolver::LogId,
            Resolver::LogType,
            Resolver::log_date(default_date_format),
            Resolver::Tags,
            Resolver::log_items(codec),
            Resolver::NewLine,
        ]
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::LogDate { default_format } => f
                .debug_struct("LogDate")
                .field("default_format", default_format)
                .finish(),
            other => f.write_str(&other.placeholder()[1..]),
        }
    }
}

fn replace_new_lines(segments: Segments) -> Result<Segments> {
    segments.substitute(&NEW_LINE_RE, |_| Ok(LINE_ENDING.to_string()))
}

fn replace_value(pattern: &Regex, segments: Segments, value: &str) -> Result<Segments> {
    segments.substitute(pattern, |caps| Ok(truncated(caps, value).to_string()))
}

fn replace_optional(pattern: &Regex, segments: Segments, value: &Option<String>) -> Result<Segments> {
    replace_value(pattern, segments, value.as_deref().unwrap_or(""))
}

fn resolve_date(event: &LogEvent, segments: Segments, default_format: &str) -> Result<Segments> {
    let mut default_rendered: Option<String> = None;

    segments.substitute(&LOG_DATE_RE, |caps| {
        if let Some(format) = caps.name(FORMAT_GROUP) {
            return format_timestamp(&event.timestamp, format.as_str());
        }
        if let Some(rendered) = &default_rendered {
            return Ok(rendered.clone());
        }

        let rendered = format_timestamp(&event.timestamp, default_format)?;
        default_rendered = Some(rendered.clone());
        Ok(rendered)
    })
}

/// Replace a modifier-less placeholder with a block computed at most once
fn replace_block<F>(pattern: &Regex, segments: Segments, compute: F) -> Result<Segments>
where
    F: FnOnce() -> Result<String>,
{
    if !segments.contains(pattern) {
        return Ok(segments);
    }

    let block = compute()?;
    segments.substitute(pattern, |_| Ok(block.clone()))
}

fn join_tags(tags: &[Option<String>]) -> String {
    tags.iter()
        .map(|tag| tag.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_items(items: &[LogItem], codec: &dyn JsonCodec) -> Result<String> {
    let lines = items
        .iter()
        .map(|item| -> Result<String> {
            let value = match &item.value {
                Value::String(s) => s.clone(),
                Value::Null => "null".to_string(),
                other => codec.encode(other)?,
            };
            Ok(format!("{}: {}", item.display_name(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join(LINE_ENDING))
}

/// Resolvers shared by every text serializer, in application order
pub(crate) fn text_resolvers(default_date_format: &str) -> Vec<Resolver> {
    vec![
        Resolver::Context,
        Resolver::Description,
        Resolver::Source,
        Resolver::LogId,
        Resolver::LogType,
        Resolver::log_date(default_date_format),
    ]
}
