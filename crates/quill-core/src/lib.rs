//! quill-core - Core message and scriptblock types for the Quill scripting host
//!
//! This crate provides the passive records produced by the host's message
//! subsystem: log entries whose readable text is derived on demand from
//! either a literal message or a localized template, and the named
//! scriptblock wrapper held by the script registry.

pub mod error;
pub mod format;
pub mod localization;
pub mod markup;
pub mod models;

pub use error::{MessageError, MessageResult};
pub use format::format_template;
pub use localization::{scoped_key, LocalizationSource};
pub use markup::strip_color_tags;
pub use models::*;
