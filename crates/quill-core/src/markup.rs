//! Color markup stripping for durable log text
//!
//! Display messages may carry inline color tags (`<c="red">...</c>`) that
//! console sinks render as colored output. Persisted logs must never contain
//! them.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `<c="word">` / `<c='word'>` opening tags and literal `</c>` closes
static COLOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<c=["']\w+["']>|</c>"#).expect("Invalid color tag regex"));

/// Remove all inline color tags, leaving the surrounding text untouched.
///
/// Total and idempotent; input without tags comes back unchanged.
pub fn strip_color_tags(text: &str) -> String {
    COLOR_TAG.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<c='red'>Failed</c> to connect", "Failed to connect")]
    #[case(r#"<c="green">ok</c>"#, "ok")]
    #[case("plain text stays put", "plain text stays put")]
    #[case("<c=red>unquoted is not a tag</c>", "<c=red>unquoted is not a tag")]
    #[case("<c='two words'>kept</c>", "<c='two words'>kept")]
    #[case("", "")]
    fn strips_color_tags(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_color_tags(input), expected);
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_color_tags("<c='blue'>a</c> b <c=\"cyan\">c</c>");
        assert_eq!(strip_color_tags(&once), once);
    }

    #[test]
    fn leaves_no_tag_residue() {
        let stripped = strip_color_tags("<c='red'>x</c> <c=\"em\">y</c> z");
        assert!(!stripped.contains("<c="));
        assert!(!stripped.contains("</c>"));
    }
}
