//! Fan-out and failover policies for delivering a batch to destinations
//!
//! Both strategies walk the destination list strictly in order, one
//! destination at a time, on the blocking path as well as the async path.
//! Per-destination failures are captured rather than propagated and
//! surfaced as a single [`FeedingError`] once the strategy is done.

use crate::core::error::panic_message;
use crate::core::{
    AsyncDestination, Destination, DestinationFailure, FeedingError, LogEvent, LoggerError, Result,
};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Policy deciding which destinations receive a batch
///
/// # Example
///
/// ```
/// use log_template_core::feeding::FeedingStrategy;
///
/// // Default behavior: deliver to every destination
/// let strategy = FeedingStrategy::default();
/// assert_eq!(strategy, FeedingStrategy::Greedy);
///
/// let failover: FeedingStrategy = "first-success".parse().unwrap();
/// assert_eq!(failover, FeedingStrategy::FirstSuccess);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedingStrategy {
    /// Send to every destination regardless of earlier failures
    #[default]
    Greedy,

    /// Send to destinations in order until one succeeds
    ///
    /// Destinations after the first success are never invoked.
    FirstSuccess,
}

impl FeedingStrategy {
    /// Deliver `events` on the blocking path
    ///
    /// Only [`Destination::send`] is called. A panicking destination counts
    /// as a failed one.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Feeding`] with every captured failure, in
    /// destination order, when at least one attempted destination failed
    /// (Greedy) or when every destination failed (FirstSuccess).
    pub fn feed(&self, events: &[LogEvent], destinations: &[Arc<dyn Destination>]) -> Result<()> {
        let mut failures = Vec::new();

        for (index, destination) in destinations.iter().enumerate() {
            let name = destination.name();
            let outcome = catch_unwind(AssertUnwindSafe(|| destination.send(events)))
                .unwrap_or_else(|payload| {
                    Err(LoggerError::destination_panicked(
                        name,
                        panic_message(payload.as_ref()),
                    ))
                });

            if self.record(index, name, outcome, &mut failures) {
                return Ok(());
            }
        }

        self.finish(failures)
    }

    /// Deliver `events` on the async path
    ///
    /// Only [`AsyncDestination::send_async`] is called. Destinations are
    /// awaited one at a time, never concurrently. The token is checked once,
    /// before the first destination, and forwarded to every destination.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Cancelled`] without invoking any destination
    /// when `cancel` is already set, otherwise behaves like [`feed`](Self::feed).
    pub async fn feed_async(
        &self,
        events: &[LogEvent],
        destinations: &[Arc<dyn AsyncDestination>],
        cancel: &CancellationToken,
    ) -> Result<()> {
        if cancel.is_cancelled() {
            tracing::debug!(strategy = %self, "feed cancelled before start");
            return Err(LoggerError::Cancelled);
        }

        let mut failures = Vec::new();

        for (index, destination) in destinations.iter().enumerate() {
            let name = destination.name();
            let outcome = AssertUnwindSafe(destination.send_async(events, cancel))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(LoggerError::destination_panicked(
                        name,
                        panic_message(payload.as_ref()),
                    ))
                });

            if self.record(index, name, outcome, &mut failures) {
                return Ok(());
            }
        }

        self.finish(failures)
    }

    /// Capture one outcome; returns true when feeding should stop
    fn record(
        &self,
        index: usize,
        name: &str,
        outcome: Result<()>,
        failures: &mut Vec<DestinationFailure>,
    ) -> bool {
        match outcome {
            Ok(()) => {
                tracing::debug!(strategy = %self, destination = name, index, "destination accepted batch");
                *self == FeedingStrategy::FirstSuccess
            }
            Err(error) => {
                tracing::warn!(
                    strategy = %self,
                    destination = name,
                    index,
                    error = %error,
                    "destination failed"
                );
                failures.push(DestinationFailure {
                    index,
                    destination: name.to_string(),
                    error,
                });
                false
            }
        }
    }

    fn finish(&self, failures: Vec<DestinationFailure>) -> Result<()> {
        match FeedingError::from_failures(failures) {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FeedingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedingStrategy::Greedy => write!(f, "Greedy"),
            FeedingStrategy::FirstSuccess => write!(f, "FirstSuccess"),
        }
    }
}

impl FromStr for FeedingStrategy {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "greedy" => Ok(FeedingStrategy::Greedy),
            "firstsuccess" => Ok(FeedingStrategy::FirstSuccess),
            _ => Err(LoggerError::config(
                "FeedingStrategy",
                format!("unknown strategy '{}'", s),
            )),
        }
    }
}
