//! Placeholder template language
//!
//! Templates are plain strings containing `$Name` or `$Name(arg)` tokens:
//!
//! - `$Context`, `$Description`, `$Source`, `$LogId`, `$LogType`, with an
//!   optional `(N)` truncation length
//! - `$LogDate`, with an optional `(format)` date format
//! - `$Tags`, `$LogItems`, `$NewLine`
//!
//! Any other `$Word` is left as literal text.

pub mod date_format;
pub mod renderer;
pub mod resolver;
pub mod substring;

pub use date_format::format_timestamp;
pub use renderer::TemplateRenderer;
pub use resolver::{Resolver, LINE_ENDING};
pub use substring::truncate_chars;
