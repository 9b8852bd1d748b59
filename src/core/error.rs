//! Error types for template rendering and destination feeding

use std::any::Any;
use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error accepted from caller-supplied code (render functions, destinations)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required argument was missing
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// A date format string could not be applied
    #[error("Invalid format '{format}': {message}")]
    InvalidFormat { format: String, message: String },

    /// JSON codec error
    #[error("JSON error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Writing formatted output failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] fmt::Error),

    /// Rendering failure wrapped by a serializer
    #[error("Serialization failed in {serializer}: {source}")]
    Serialization {
        serializer: String,
        #[source]
        source: BoxError,
    },

    /// A destination reported a failure
    #[error("Destination '{destination}' failed: {message}")]
    Destination {
        destination: String,
        message: String,
    },

    /// A destination panicked while sending
    #[error("Destination '{destination}' panicked: {message}")]
    DestinationPanicked {
        destination: String,
        message: String,
    },

    /// One or more destinations failed during a feed call
    #[error(transparent)]
    Feeding(#[from] FeedingError),

    /// The cancellation token was already set when feeding started
    #[error("Feeding cancelled before any destination was invoked")]
    Cancelled,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the missing-event precondition shared by all resolvers
    pub fn missing_event() -> Self {
        Self::argument("event", "a log event is required to resolve this placeholder")
    }

    /// Create an invalid format error
    pub fn format(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidFormat {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Wrap a rendering failure on behalf of a serializer
    pub fn serialization(serializer: impl Into<String>, source: impl Into<BoxError>) -> Self {
        LoggerError::Serialization {
            serializer: serializer.into(),
            source: source.into(),
        }
    }

    /// Create a destination failure
    pub fn destination(destination: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Destination {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Create a destination panic error
    pub fn destination_panicked(destination: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::DestinationPanicked {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error is the upfront cancellation outcome
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoggerError::Cancelled)
    }
}

/// One captured per-destination failure
#[derive(Debug)]
pub struct DestinationFailure {
    /// Index of the destination in the list it was fed from
    pub index: usize,
    /// Destination name as reported by the destination itself
    pub destination: String,
    pub error: LoggerError,
}

impl fmt::Display for DestinationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({}): {}", self.index, self.destination, self.error)
    }
}

/// Aggregate of every failure captured during one feed call
///
/// Failures are kept in the order the destinations were attempted and the
/// list is never empty.
#[derive(Debug, thiserror::Error)]
#[error("Feeding failed for {} destination(s): {}", .failures.len(), join_failures(.failures))]
pub struct FeedingError {
    failures: Vec<DestinationFailure>,
}

impl FeedingError {
    /// Build from captured failures, returning `None` when nothing failed
    pub fn from_failures(failures: Vec<DestinationFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// Captured failures in attempt order
    pub fn failures(&self) -> &[DestinationFailure] {
        &self.failures
    }

    /// Underlying errors in attempt order
    pub fn causes(&self) -> impl Iterator<Item = &LoggerError> {
        self.failures.iter().map(|f| &f.error)
    }

    pub fn into_failures(self) -> Vec<DestinationFailure> {
        self.failures
    }
}

/// Extract a readable message from a caught panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn join_failures(failures: &[DestinationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
