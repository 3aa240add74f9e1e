//! Message classification enums

use serde::{Deserialize, Serialize};

/// What kind of entry a message is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Regular message
    #[default]
    Message,
    /// Warning condition
    Warning,
    /// Error condition
    Error,
}

impl EntryKind {
    /// Returns the string representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Message => "message",
            EntryKind::Warning => "warning",
            EntryKind::Error => "error",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity/verbosity of a message
///
/// Levels 1-9 form the verbosity scale (lower is more important); warnings
/// and errors sit outside the scale so range filters never drop them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    /// Message the user always needs to see
    Critical = 1,
    /// Message shown by default
    Important = 2,
    /// Message shown by default, lower priority
    Significant = 3,
    /// Useful detail, hidden by default
    VeryVerbose = 4,
    /// Regular operational detail
    #[default]
    Verbose = 5,
    /// Noisy operational detail
    SomewhatVerbose = 6,
    /// Host-internal detail
    System = 7,
    /// Debugging detail
    Debug = 8,
    /// Developer commentary
    InternalComment = 9,
    /// Warning condition
    Warning = 666,
    /// Error condition
    Error = 667,
}

impl MessageLevel {
    /// Returns the string representation of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Critical => "critical",
            MessageLevel::Important => "important",
            MessageLevel::Significant => "significant",
            MessageLevel::VeryVerbose => "very_verbose",
            MessageLevel::Verbose => "verbose",
            MessageLevel::SomewhatVerbose => "somewhat_verbose",
            MessageLevel::System => "system",
            MessageLevel::Debug => "debug",
            MessageLevel::InternalComment => "internal_comment",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }

    /// Numeric value consumers use for range filtering
    pub fn numeric(&self) -> u32 {
        *self as u32
    }

    /// Whether the level marks a failure rather than a verbosity step
    pub fn is_failure(&self) -> bool {
        matches!(self, MessageLevel::Warning | MessageLevel::Error)
    }
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
