//! Positional template formatting
//!
//! Localized templates use `{0}`-style positional placeholders; `{{` and
//! `}}` escape literal braces. Since this code sits in the logging path,
//! mismatches between template and arguments are reported, never swallowed.

use serde_json::Value;

use crate::error::{MessageError, MessageResult};

/// Substitute positional arguments into a template.
///
/// Strings insert bare, null inserts nothing, every other value uses its
/// compact JSON rendering.
pub fn format_template(template: &str, args: &[Value]) -> MessageResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some(&(_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    if !c.is_ascii_digit() {
                        return Err(MessageError::MalformedPlaceholder(snippet(template, pos)));
                    }
                    digits.push(c);
                }
                if !closed || digits.is_empty() {
                    return Err(MessageError::MalformedPlaceholder(snippet(template, pos)));
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|_| MessageError::MalformedPlaceholder(snippet(template, pos)))?;
                let value = args.get(index).ok_or(MessageError::ArgumentOutOfRange {
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(&render_argument(value));
            }
            '}' => {
                if matches!(chars.peek(), Some(&(_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(MessageError::UnmatchedBrace);
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn render_argument(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn snippet(template: &str, from: usize) -> String {
    template[from..].chars().take(16).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::MessageError;

    #[test]
    fn substitutes_positionally() {
        let out = format_template("Could not reach {0}", &[json!("host1")]).unwrap();
        assert_eq!(out, "Could not reach host1");
    }

    #[test]
    fn arguments_can_repeat_and_reorder() {
        let out = format_template("{1}-{0}-{1}", &[json!("a"), json!("b")]).unwrap();
        assert_eq!(out, "b-a-b");
    }

    #[test]
    fn doubled_braces_escape() {
        let out = format_template("{{0}} is literal, {0} is not", &[json!("x")]).unwrap();
        assert_eq!(out, "{0} is literal, x is not");
    }

    #[test]
    fn renders_non_string_arguments() {
        let out = format_template(
            "{0} {1} {2}<{3}>",
            &[json!(42), json!(true), json!(null), json!({"a": 1})],
        )
        .unwrap();
        assert_eq!(out, "42 true <{\"a\":1}>");
    }

    #[test]
    fn missing_argument_is_reported() {
        let err = format_template("{0} and {2}", &[json!("only")]).unwrap_err();
        match err {
            MessageError::ArgumentOutOfRange { index, supplied } => {
                assert_eq!(index, 2);
                assert_eq!(supplied, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn format_specifier_is_malformed() {
        let err = format_template("{0:X}", &[json!(255)]).unwrap_err();
        assert!(matches!(err, MessageError::MalformedPlaceholder(_)));
    }

    #[test]
    fn empty_placeholder_is_malformed() {
        let err = format_template("{}", &[json!("x")]).unwrap_err();
        assert!(matches!(err, MessageError::MalformedPlaceholder(_)));
    }

    #[test]
    fn unterminated_placeholder_is_malformed() {
        let err = format_template("tail {0", &[json!("x")]).unwrap_err();
        assert!(matches!(err, MessageError::MalformedPlaceholder(_)));
    }

    #[test]
    fn stray_closing_brace_is_reported() {
        let err = format_template("oops }", &[]).unwrap_err();
        assert!(matches!(err, MessageError::UnmatchedBrace));
    }

    #[test]
    fn template_without_placeholders_ignores_arguments() {
        let out = format_template("static text", &[json!("unused")]).unwrap();
        assert_eq!(out, "static text");
    }
}
