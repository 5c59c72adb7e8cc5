//! Inline tokenizer.
//!
//! Splits a single line into [`Inline`] runs. Patterns are tried in a fixed
//! order at the cursor and the first match wins, even when a later pattern
//! would match a longer span.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Inline, Mark};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*").unwrap());

static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*([^*]+?)\*").unwrap());

static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^`([^`]+?)`").unwrap());

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Characters that may open a marked span.
const SPECIAL: [char; 3] = ['*', '`', '['];

/// Parse inline markup into text runs.
///
/// Never fails: unterminated delimiters are emitted as literal text.
///
/// # Examples
///
/// ```
/// use md2adf_converter::{Inline, Mark, parse_inline};
///
/// assert_eq!(
///     parse_inline("see [docs](https://example.com)"),
///     vec![
///         Inline::plain("see "),
///         Inline::marked("docs", Mark::Link { href: "https://example.com".to_owned() }),
///     ]
/// );
/// ```
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (node, consumed) = next_token(rest);
        nodes.push(node);
        rest = &rest[consumed..];
    }

    nodes
}

/// Match one token at the start of `rest`.
///
/// Returns the node and the number of bytes consumed (always > 0).
fn next_token(rest: &str) -> (Inline, usize) {
    let delimited = [(&*BOLD, Mark::Bold), (&*ITALIC, Mark::Italic), (&*CODE, Mark::Code)];
    for (pattern, mark) in delimited {
        if let Some(caps) = pattern.captures(rest) {
            return (Inline::marked(&caps[1], mark), caps[0].len());
        }
    }

    if let Some(caps) = LINK.captures(rest) {
        let mark = Mark::Link {
            href: caps[2].to_owned(),
        };
        return (Inline::marked(&caps[1], mark), caps[0].len());
    }

    let plain_len = rest.find(SPECIAL).unwrap_or(rest.len());
    if plain_len > 0 {
        return (Inline::plain(&rest[..plain_len]), plain_len);
    }

    // Lone special character; rest is non-empty so a char exists.
    let ch_len = rest.chars().next().map_or(1, char::len_utf8);
    (Inline::plain(&rest[..ch_len]), ch_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn link(text: &str, href: &str) -> Inline {
        Inline::marked(
            text,
            Mark::Link {
                href: href.to_owned(),
            },
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("hello world"), vec![Inline::plain("hello world")]);
    }

    #[test]
    fn test_mixed_marks() {
        assert_eq!(
            parse_inline("**bold** and *italic* and `code`"),
            vec![
                Inline::marked("bold", Mark::Bold),
                Inline::plain(" and "),
                Inline::marked("italic", Mark::Italic),
                Inline::plain(" and "),
                Inline::marked("code", Mark::Code),
            ]
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            parse_inline("**a** b **c**"),
            vec![
                Inline::marked("a", Mark::Bold),
                Inline::plain(" b "),
                Inline::marked("c", Mark::Bold),
            ]
        );
    }

    #[test]
    fn test_bold_takes_priority_over_italic() {
        // Nested italic is not parsed; the inner text stays literal.
        assert_eq!(
            parse_inline("***x***"),
            vec![Inline::marked("*x", Mark::Bold), Inline::plain("*")]
        );
    }

    #[test]
    fn test_code_is_verbatim() {
        assert_eq!(
            parse_inline("`**not bold**`"),
            vec![Inline::marked("**not bold**", Mark::Code)]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            parse_inline("[Jira](https://example.atlassian.net) rocks"),
            vec![
                link("Jira", "https://example.atlassian.net"),
                Inline::plain(" rocks"),
            ]
        );
    }

    #[test]
    fn test_bracket_without_target_is_literal() {
        assert_eq!(
            parse_inline("[x] done"),
            vec![Inline::plain("["), Inline::plain("x] done")]
        );
    }

    #[test]
    fn test_unterminated_bold_is_literal() {
        let nodes = parse_inline("plain **unterminated");
        assert!(nodes.iter().all(|n| n.mark.is_none()));
        assert_eq!(crate::plain_text(&nodes), "plain **unterminated");
        assert_eq!(nodes[0], Inline::plain("plain "));
    }

    #[test]
    fn test_empty_delimiters_are_literal() {
        let nodes = parse_inline("****``");
        assert!(nodes.iter().all(|n| n.mark.is_none()));
        assert_eq!(crate::plain_text(&nodes), "****``");
    }

    #[test]
    fn test_multibyte_after_special() {
        let nodes = parse_inline("*ü");
        assert_eq!(nodes, vec![Inline::plain("*"), Inline::plain("ü")]);
    }

    #[test]
    fn test_italic_inside_text() {
        assert_eq!(
            parse_inline("a *b* c"),
            vec![
                Inline::plain("a "),
                Inline::marked("b", Mark::Italic),
                Inline::plain(" c"),
            ]
        );
    }
}
