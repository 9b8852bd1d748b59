//! Core event model, error types and collaborator traits

pub mod async_destination;
pub mod codec;
pub mod config;
pub mod destination;
pub mod error;
pub mod log_event;
pub mod log_item;
pub mod log_type;
pub mod serializer;

pub use async_destination::AsyncDestination;
pub use codec::{JsonCodec, SerdeJsonCodec};
pub use config::{FormatterConfig, DEFAULT_DATE_FORMAT};
pub use destination::Destination;
pub use error::{BoxError, DestinationFailure, FeedingError, LoggerError, Result};
pub use log_event::LogEvent;
pub use log_item::{LogItem, DEFAULT_ITEM_NAME};
pub use log_type::LogType;
pub use serializer::LogSerializer;
