//! Lookup abstraction for localized message templates

use crate::error::MessageResult;

/// Resolves scoped keys to message templates.
///
/// Implementations keep two parallel template sets: a display variant that
/// follows the user's language and may carry color markup, and a log variant
/// that keeps durable logs in one uniform language. Lookups are synchronous;
/// stores are expected to be in-memory.
#[cfg_attr(test, mockall::automock)]
pub trait LocalizationSource {
    /// The display-oriented template for `key`
    fn display_string(&self, key: &str) -> MessageResult<String>;

    /// The log-oriented template for `key`
    fn log_string(&self, key: &str) -> MessageResult<String>;
}

/// Compose the scoped lookup key for a module-local string name
pub fn scoped_key(module: &str, key: &str) -> String {
    format!("{}.{}", module, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_key_joins_with_dot() {
        assert_eq!(scoped_key("Net", "Connect.Error"), "Net.Connect.Error");
    }
}
