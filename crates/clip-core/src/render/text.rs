//! Text sanitization
//!
//! All prose fields pass through here before being embedded in markup.

/// Escape the five markup-significant characters.
///
/// Matches the escape set of Python's `html.escape`: `&`, `<`, `>`, `"`
/// and `'` become entity references, everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape markup characters and convert line breaks to `<br>`.
///
/// Each line-break sequence (`\r\n`, `\n` or a bare `\r`) becomes exactly
/// one `<br>` tag.
pub fn escape_nl2br(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("<br>");
            }
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Reverse of `escape_html`, used to check the escape round-trip.
    fn unescape_html(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escapes_all_markup_characters() {
        let escaped = escape_html(r#"<a href="x">Q&A's</a>"#);
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Q&amp;A&#x27;s&lt;/a&gt;"
        );
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw));
        }
    }

    #[test]
    fn test_escape_round_trip() {
        let original = r#"税率 < 10% & "特例" の'注記'"#;
        assert_eq!(unescape_html(&escape_html(original)), original);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_nl2br(""), "");
    }

    #[test]
    fn test_newline_becomes_br() {
        assert_eq!(escape_nl2br("一行目\n二行目"), "一行目<br>二行目");
    }

    #[test]
    fn test_crlf_becomes_single_br() {
        assert_eq!(escape_nl2br("a\r\nb\rc\nd"), "a<br>b<br>c<br>d");
    }

    #[test]
    fn test_escaping_and_newlines_combined() {
        assert_eq!(
            escape_nl2br("A & B\nC < D"),
            "A &amp; B<br>C &lt; D"
        );
    }

    #[test]
    fn test_ordering_preserved() {
        let out = escape_nl2br("x\ny\nz");
        let first = out.find('x').unwrap();
        let second = out.find('y').unwrap();
        let third = out.find('z').unwrap();
        assert!(first < second && second < third);
    }
}
