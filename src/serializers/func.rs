//! Serializer delegating to a caller-supplied function

use crate::core::error::panic_message;
use crate::core::{BoxError, LogEvent, LogSerializer, LoggerError, Result};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

type RenderFn = dyn Fn(&LogEvent) -> std::result::Result<String, BoxError> + Send + Sync;

/// Wraps a closure with no templating at all
///
/// Errors returned by the closure, and panics raised inside it, are reported
/// as [`LoggerError::Serialization`].
///
/// # Example
///
/// ```
/// use log_template_core::core::{LogEvent, LogSerializer, LogType};
/// use log_template_core::serializers::FuncSerializer;
///
/// let serializer = FuncSerializer::new(|event: &LogEvent| Ok(format!("{}!", event.log_type)));
/// let event = LogEvent::new("id", LogType::Critical);
///
/// assert_eq!(serializer.serialize(&event).unwrap(), "Critical!");
/// ```
#[derive(Clone)]
pub struct FuncSerializer {
    render: Arc<RenderFn>,
}

impl FuncSerializer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&LogEvent) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }
}

impl LogSerializer for FuncSerializer {
    fn serialize(&self, event: &LogEvent) -> Result<String> {
        match catch_unwind(AssertUnwindSafe(|| (self.render)(event))) {
            Ok(Ok(rendered)) => Ok(rendered),
            Ok(Err(e)) => Err(LoggerError::serialization(self.name(), e)),
            Err(payload) => Err(LoggerError::serialization(
                self.name(),
                LoggerError::other(format!(
                    "render function panicked: {}",
                    panic_message(payload.as_ref())
                )),
            )),
        }
    }

    fn name(&self) -> &str {
        "FuncSerializer"
    }
}

impl fmt::Debug for FuncSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncSerializer").finish_non_exhaustive()
    }
}
