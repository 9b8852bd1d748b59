//! # Log Template Core
//!
//! Rendering and delivery core of a structured logging library.
//!
//! ## Features
//!
//! - **Placeholder Templates**: `$Context(8)`, `$LogDate(MMM-dd-yyyy)`, `$Tags`, `$LogItems`, ...
//! - **Serializers**: Text, extended text, path-safe, JSON and function-backed
//! - **Feeding Strategies**: Greedy fan-out and first-success failover
//! - **Dual Paths**: Blocking and async delivery with upfront cancellation

pub mod core;
pub mod feeding;
pub mod serializers;
pub mod template;

pub mod prelude {
    pub use crate::core::{
        AsyncDestination, Destination, DestinationFailure, FeedingError, FormatterConfig,
        JsonCodec, LogEvent, LogItem, LogSerializer, LogType, LoggerError, Result, SerdeJsonCodec,
    };
    pub use crate::feeding::FeedingStrategy;
    pub use crate::serializers::{
        ExtendedTextSerializer, FuncSerializer, JsonSerializer, PathSerializer, TextSerializer,
    };
    pub use crate::template::{Resolver, TemplateRenderer};
}

pub use crate::core::{
    AsyncDestination, Destination, DestinationFailure, FeedingError, FormatterConfig, JsonCodec,
    LogEvent, LogItem, LogSerializer, LogType, LoggerError, Result, SerdeJsonCodec,
};
pub use crate::feeding::FeedingStrategy;
pub use crate::serializers::{
    ExtendedTextSerializer, FuncSerializer, JsonSerializer, PathSerializer, TextSerializer,
};
pub use crate::template::{Resolver, TemplateRenderer};
