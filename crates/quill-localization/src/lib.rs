//! quill-localization - In-memory string tables for the Quill scripting host
//!
//! Stores localized message templates per language and resolves the scoped
//! keys used by `quill-core` log entries. Display lookups follow the
//! configured user language; log lookups follow a separate logging language
//! so durable logs stay uniform across locales.
//!
//! # Quick Start
//!
//! ```rust
//! use quill_core::{EntryKind, LogEntry, MessageLevel};
//! use quill_localization::StringHost;
//!
//! let host = StringHost::new();
//! host.register("en-US", "Net.Connect.Error", "Could not reach {0}");
//!
//! let entry = LogEntry::localized(
//!     "Connect.Error",
//!     EntryKind::Error,
//!     MessageLevel::Error,
//!     "Connect-Server",
//!     "Net",
//! )
//! .with_args(vec!["host1".into()]);
//!
//! assert_eq!(entry.display_text(&host).unwrap(), "Could not reach host1");
//! ```

pub mod host;

pub use host::{StringHost, DEFAULT_LANGUAGE};
