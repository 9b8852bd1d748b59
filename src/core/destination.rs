//! Destination trait for blocking batch delivery

use super::{error::Result, log_event::LogEvent};

/// Output sink receiving event batches on the blocking path
///
/// Implementations render with their own serializer and may fail for any
/// reason. A failed send may have partially written; callers never retry
/// within the same feed call.
pub trait Destination: Send + Sync {
    fn send(&self, events: &[LogEvent]) -> Result<()>;
    fn name(&self) -> &str;
}
