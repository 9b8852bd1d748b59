//! Shared replacement helpers for placeholders carrying a `(...)` modifier
//!
//! A template being rendered is held as [`Segments`]: literal runs that still
//! come from the template, interleaved with values already substituted by a
//! resolver. Placeholders are only ever matched inside literal runs, so a
//! field value containing `$NewLine` or `$LogDate(yyyy)` is written as-is.

use crate::core::Result;
use regex::{Captures, Regex};

/// Capture group holding a truncation length
pub(crate) const LENGTH_GROUP: &str = "length";

/// Capture group holding a date format
pub(crate) const FORMAT_GROUP: &str = "format";

/// Build the pattern for a placeholder accepting an optional `(N)` length
pub(crate) fn length_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r"\${}(?:\((?P<{}>\d+)\))?",
        regex::escape(name),
        LENGTH_GROUP
    ))
    .expect("placeholder names are plain identifiers")
}

/// First `length` characters of `value`, or all of it when shorter
pub fn truncate_chars(value: &str, length: usize) -> &str {
    match value.char_indices().nth(length) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

/// Value for one match, honouring any length group
///
/// Lengths too large for `usize` are treated as "no truncation".
pub(crate) fn truncated<'v>(caps: &Captures<'_>, value: &'v str) -> &'v str {
    match caps.name(LENGTH_GROUP) {
        Some(length) => truncate_chars(value, length.as_str().parse().unwrap_or(usize::MAX)),
        None => value,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Template text, still open to placeholder matching
    Literal(String),
    /// Resolver output, never scanned again
    Value(String),
}

/// Partially rendered template
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segments(Vec<Segment>);

impl Segments {
    pub(crate) fn new(template: &str) -> Self {
        Segments(vec![Segment::Literal(template.to_string())])
    }

    /// Whether `pattern` occurs in any literal run
    pub(crate) fn contains(&self, pattern: &Regex) -> bool {
        self.0.iter().any(|segment| match segment {
            Segment::Literal(text) => pattern.is_match(text),
            Segment::Value(_) => false,
        })
    }

    /// Replace every match of `pattern` in the literal runs
    ///
    /// Replacement text is inserted verbatim (no `$1` expansion) and is
    /// closed to later substitutions. Stops at the first replacer error.
    pub(crate) fn substitute<F>(self, pattern: &Regex, mut replacer: F) -> Result<Self>
    where
        F: FnMut(&Captures<'_>) -> Result<String>,
    {
        let mut output = Vec::with_capacity(self.0.len());

        for segment in self.0 {
            let text = match segment {
                Segment::Literal(text) => text,
                value => {
                    output.push(value);
                    continue;
                }
            };

            let mut last = 0;
            for caps in pattern.captures_iter(&text) {
                let Some(whole) = caps.get(0) else { continue };
                if whole.start() > last {
                    output.push(Segment::Literal(text[last..whole.start()].to_string()));
                }
                // Empty values still split the literal so no token forms across them
                output.push(Segment::Value(replacer(&caps)?));
                last = whole.end();
            }

            if last == 0 {
                output.push(Segment::Literal(text));
            } else if last < text.len() {
                output.push(Segment::Literal(text[last..].to_string()));
            }
        }

        Ok(Segments(output))
    }

    pub(crate) fn into_string(self) -> String {
        self.0
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) | Segment::Value(text) => text,
            })
            .collect()
    }
}
