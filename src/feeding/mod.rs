//! Destination feeding strategies

pub mod strategy;

pub use strategy::FeedingStrategy;

pub use crate::core::{AsyncDestination, Destination, DestinationFailure, FeedingError};
