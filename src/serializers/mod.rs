//! Serializer implementations

pub mod func;
pub mod json;
pub mod path;
mod template;
pub mod text;

pub use func::FuncSerializer;
pub use json::JsonSerializer;
pub use path::PathSerializer;
pub use text::{ExtendedTextSerializer, TextSerializer};

pub use crate::core::LogSerializer;
