//! Common error type for message resolution

use thiserror::Error;

/// Result type for message resolution operations
pub type MessageResult<T> = Result<T, MessageError>;

/// Errors that can occur while resolving message text
#[derive(Debug, Error)]
pub enum MessageError {
    /// No template registered for a scoped localization key
    #[error("no localized string registered for '{0}'")]
    UnknownString(String),

    /// A placeholder referenced an argument that was not supplied
    #[error("format placeholder {{{index}}} exceeds the {supplied} supplied argument(s)")]
    ArgumentOutOfRange { index: usize, supplied: usize },

    /// A `{` was not followed by a decimal index and a closing `}`
    #[error("malformed format placeholder near '{0}'")]
    MalformedPlaceholder(String),

    /// A `}` without a matching `{`
    #[error("unmatched '}}' in message template")]
    UnmatchedBrace,
}

impl MessageError {
    /// Whether the error came from template formatting rather than lookup
    pub fn is_format_error(&self) -> bool {
        !matches!(self, MessageError::UnknownString(_))
    }
}
