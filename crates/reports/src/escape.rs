//! HTML escaping that never double-escapes.

use std::borrow::Cow;

const NAMED_REFERENCES: [&str; 6] = ["amp", "lt", "gt", "quot", "apos", "nbsp"];

/// Longest recognised reference after the `&`, terminator included (`#x10FFFF;`).
const MAX_REFERENCE_LEN: usize = 9;

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// An `&` that already starts a well-formed character reference (`&amp;`,
/// `&#39;`, `&#x27;`, ...) is kept as is, so escaping escaped text is a no-op.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for (idx, ch) in input.char_indices() {
        match ch {
            '&' if starts_with_reference(&input[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `s` starts with `&`.
fn starts_with_reference(s: &str) -> bool {
    let body = &s[1..];
    let Some(end) = body
        .bytes()
        .take(MAX_REFERENCE_LEN)
        .position(|b| b == b';')
    else {
        return false;
    };
    let name = &body[..end];

    match name.strip_prefix('#') {
        Some(numeric) => match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => {
                !hex.is_empty() && hex.len() <= 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => {
                !numeric.is_empty()
                    && numeric.len() <= 7
                    && numeric.chars().all(|c| c.is_ascii_digit())
            }
        },
        None => NAMED_REFERENCES.contains(&name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & Jerry's</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("Televisor"), Cow::Borrowed("Televisor")));
    }

    #[test]
    fn escaping_is_idempotent() {
        for input in [
            r#"A & B < C "quoted""#,
            "<script>alert('x')</script>",
            "&&;&#;&#x;&amp",
            "fish &amp; chips",
        ] {
            let once = escape_html(input).into_owned();
            let twice = escape_html(&once).into_owned();
            assert_eq!(once, twice, "input: {input}");
        }
    }

    #[test]
    fn existing_references_are_kept() {
        assert_eq!(escape_html("a &amp; b"), "a &amp; b");
        assert_eq!(escape_html("&#39;&#x27;&lt;"), "&#39;&#x27;&lt;");
    }

    #[test]
    fn unknown_or_malformed_references_are_escaped() {
        assert_eq!(escape_html("&copy;"), "&amp;copy;");
        assert_eq!(escape_html("AT&T"), "AT&amp;T");
        assert_eq!(escape_html("&#;"), "&amp;#;");
        assert_eq!(escape_html("&#xZZ;"), "&amp;#xZZ;");
        assert_eq!(escape_html("&#x1234567;"), "&amp;#x1234567;");
    }

    #[test]
    fn longest_references_are_kept() {
        assert_eq!(escape_html("&#x10FFFF;"), "&#x10FFFF;");
        assert_eq!(escape_html("&#1114111;"), "&#1114111;");
    }

    #[test]
    fn long_runs_of_ampersands_are_escaped() {
        let input = "&".repeat(200_000);
        let escaped = escape_html(&input);
        assert_eq!(escaped.len(), 5 * input.len());
        assert!(escaped.starts_with("&amp;&amp;"));

        let far = format!("&{};", "a".repeat(64));
        assert_eq!(escape_html(&far), format!("&amp;{};", "a".repeat(64)));
    }
}
