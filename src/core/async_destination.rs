//! Async destination trait for non-blocking batch delivery

use super::{error::Result, log_event::LogEvent};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Trait for asynchronous destinations
///
/// # Example
///
/// ```no_run
/// use log_template_core::core::{AsyncDestination, LogEvent, Result};
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
///
/// struct MyAsyncDestination;
///
/// #[async_trait]
/// impl AsyncDestination for MyAsyncDestination {
///     async fn send_async(&self, events: &[LogEvent], cancel: &CancellationToken) -> Result<()> {
///         // Async delivery logic
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "my_async_destination"
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncDestination: Send + Sync {
    /// Deliver a batch asynchronously
    ///
    /// The token is forwarded so the destination can abandon long writes.
    async fn send_async(&self, events: &[LogEvent], cancel: &CancellationToken) -> Result<()>;

    /// Get the destination name
    fn name(&self) -> &str;
}
