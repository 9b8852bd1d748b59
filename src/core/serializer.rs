//! Serializer trait turning one event into destination text

use super::{error::Result, log_event::LogEvent};

/// Renders a log event for a particular destination kind
///
/// Every failure is reported as [`LoggerError::Serialization`](super::LoggerError::Serialization)
/// carrying the original cause.
pub trait LogSerializer: Send + Sync {
    fn serialize(&self, event: &LogEvent) -> Result<String>;
    fn name(&self) -> &str;
}
