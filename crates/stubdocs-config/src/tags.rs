//! Detection of `!!` tags that a [`serde_yaml::Value`] cannot carry.
//!
//! `serde_yaml` drops secondary-handle tags such as
//! `!!python/name:material.extensions.emoji.twemoji`, leaving an empty
//! string behind. A document using them would be rewritten with the value
//! silently replaced, so it is refused instead. Local tags (`!ENV`) are
//! kept by `Value::Tagged` and pass through.
//!
//! The scan is line based. It skips quoted scalars, comments and block
//! scalar bodies, and only looks at `!!` where a node can start.

/// Core schema tags that `serde_yaml` resolves into plain values.
const CORE_TAGS: &[&str] = &["!!str", "!!int", "!!float", "!!bool", "!!null"];

/// A `!!` tag found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GlobalTag {
    /// 1-based line number.
    pub line: usize,
    /// Tag text including the `!!` handle.
    pub tag: String,
}

/// Find the first `!!` tag outside the core schema.
pub(crate) fn find_unsupported_tag(content: &str) -> Option<GlobalTag> {
    let mut quote: Option<char> = None;
    let mut block_parent: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if let Some(parent) = block_parent {
            if line.trim().is_empty() || indent > parent {
                continue;
            }
            block_parent = None;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut code_end = chars.len();
        // Last non-space character outside quotes, and the character just before `i`.
        let mut last: Option<char> = None;
        let mut prev: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match quote {
                Some('"') => {
                    if c == '\\' {
                        i += 2;
                        prev = None;
                        continue;
                    }
                    if c == '"' {
                        quote = None;
                        last = Some(c);
                    }
                }
                Some(_) => {
                    if c == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            i += 2;
                            continue;
                        }
                        quote = None;
                        last = Some(c);
                    }
                }
                None => {
                    if c == '#' && prev.is_none_or(char::is_whitespace) {
                        code_end = i;
                        break;
                    }
                    if at_node_start(last, prev) {
                        match c {
                            '"' | '\'' => quote = Some(c),
                            '!' | '&' => {
                                let token = token_at(&chars, i);
                                if token.starts_with("!!") && !CORE_TAGS.contains(&token.as_str()) {
                                    return Some(GlobalTag {
                                        line: idx + 1,
                                        tag: token,
                                    });
                                }
                                // Anchors and tags prefix the node; what follows still starts it.
                                i += token.chars().count();
                                prev = None;
                                continue;
                            }
                            _ => {}
                        }
                    }
                    if !c.is_whitespace() {
                        last = Some(c);
                    }
                }
            }
            prev = Some(c);
            i += 1;
        }

        if quote.is_none() && opens_block_scalar(&chars[..code_end]) {
            block_parent = Some(indent);
        }
    }
    None
}

/// Whether a node may begin after `last` (last significant character on the
/// line) and `prev` (the character immediately before).
fn at_node_start(last: Option<char>, prev: Option<char>) -> bool {
    match last {
        None | Some('[' | '{' | ',') => true,
        Some('-' | ':' | '?') => prev.is_some_and(char::is_whitespace),
        Some(_) => false,
    }
}

fn token_at(chars: &[char], start: usize) -> String {
    chars[start..]
        .iter()
        .take_while(|c| !c.is_whitespace() && !matches!(c, ',' | ']' | '}'))
        .collect()
}

/// Whether the code part of a line ends with a `|` or `>` block header.
fn opens_block_scalar(code: &[char]) -> bool {
    let code: String = code.iter().collect();
    let Some(token) = code.split_whitespace().last() else {
        return false;
    };
    let mut chars = token.chars();
    matches!(chars.next(), Some('|' | '>'))
        && chars.all(|c| matches!(c, '-' | '+') || c.is_ascii_digit())
        && code.trim_end().len() > token.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(yaml: &str) -> Option<String> {
        find_unsupported_tag(yaml).map(|t| t.tag)
    }

    #[test]
    fn test_python_name_tag_found() {
        let yaml = "site_name: Docs\nmarkdown_extensions:\n  - pymdownx.emoji:\n      emoji_index: !!python/name:material.extensions.emoji.twemoji\n";
        let found = find_unsupported_tag(yaml).unwrap();
        assert_eq!(found.line, 4);
        assert_eq!(
            found.tag,
            "!!python/name:material.extensions.emoji.twemoji"
        );
    }

    #[test]
    fn test_tag_in_sequence_and_flow() {
        assert_eq!(tag_of("- !!python/object:x\n"), Some("!!python/object:x".to_owned()));
        assert_eq!(tag_of("a: [b, !!set c]\n"), Some("!!set".to_owned()));
        assert_eq!(tag_of("a: {b: !!binary x}\n"), Some("!!binary".to_owned()));
    }

    #[test]
    fn test_tag_after_anchor() {
        assert_eq!(
            tag_of("a: &ref !!python/name:os.path\n"),
            Some("!!python/name:os.path".to_owned())
        );
    }

    #[test]
    fn test_core_and_local_tags_allowed() {
        assert_eq!(tag_of("a: !!str 123\nb: !!int 4\n"), None);
        assert_eq!(tag_of("site_url: !ENV [SITE_URL, 'http://localhost']\n"), None);
    }

    #[test]
    fn test_non_tag_text_ignored() {
        assert_eq!(tag_of("site_name: \"Hello !!world\"\n"), None);
        assert_eq!(tag_of("site_name: 'it''s !!fine'\n"), None);
        assert_eq!(tag_of("# emoji_index: !!python/name:x\nsite_name: Docs\n"), None);
        assert_eq!(tag_of("a: b # !!python/name:x\n"), None);
        assert_eq!(tag_of("copyright: wow !!bang\n"), None);
    }

    #[test]
    fn test_block_scalar_body_ignored() {
        let yaml = "extra: |\n  - !!python/name:x\n  text\nnext: !!python/name:y\n";
        let found = find_unsupported_tag(yaml).unwrap();
        assert_eq!(found.line, 4);
        assert_eq!(found.tag, "!!python/name:y");
    }

    #[test]
    fn test_multiline_double_quoted_ignored() {
        assert_eq!(tag_of("a: \"first\n  - !!python/name:x\"\nb: c\n"), None);
    }
}
