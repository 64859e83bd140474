//! Parsing of inline suppression directives.
//!
//! This module turns `# lintern-disable` comments into the disabled
//! intervals consulted by the rule walkers.
//!
//! Supported formats:
//!
//! ```text
//! # lintern-disable                    suppress all rules until enable/EOF
//! # lintern-disable rule1, rule2      suppress the listed rules
//! # lintern-enable [rules]            close intervals of the same scope
//! # lintern-disable-line [rules]      suppress on the directive's line
//! # lintern-disable-next-line [rules] suppress on the following line
//! ```
//!
//! Also accepted without a space after `#`. An `enable` closes only
//! intervals opened for exactly the same scope: the same rule name, or the
//! bare wildcard. Unknown rule names are kept as written; they simply never
//! match a real rule.

use air_r_syntax::RSyntaxNode;
use biome_rowan::Direction;

use crate::span::Span;
use crate::suppression::{DisabledInterval, DisabledIntervals};
use crate::utils::find_new_lines;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DirectiveKind {
    Disable,
    Enable,
    DisableLine,
    DisableNextLine,
}

/// A parsed suppression directive from one comment.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Empty means the wildcard: every rule.
    pub rules: Vec<String>,
}

/// Parse a comment as a suppression directive.
///
/// Returns `None` when the comment is not a directive at all, including
/// near-misses like `# lintern-disabled` or a directive with an unparsable
/// rule list.
pub fn parse_comment_directive(text: &str) -> Option<Directive> {
    let text = text.trim_start().strip_prefix('#')?.trim_start();
    let rest = text.strip_prefix("lintern-")?;

    // Longest keyword first, "disable" is a prefix of the other two.
    let (kind, rest) = if let Some(rest) = rest.strip_prefix("disable-next-line") {
        (DirectiveKind::DisableNextLine, rest)
    } else if let Some(rest) = rest.strip_prefix("disable-line") {
        (DirectiveKind::DisableLine, rest)
    } else if let Some(rest) = rest.strip_prefix("disable") {
        (DirectiveKind::Disable, rest)
    } else if let Some(rest) = rest.strip_prefix("enable") {
        (DirectiveKind::Enable, rest)
    } else {
        return None;
    };

    let rest = rest.trim_end();
    if rest.is_empty() {
        return Some(Directive { kind, rules: vec![] });
    }
    // A rule list must be separated from the keyword ("lintern-disablefoo"
    // is not a directive).
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rules: Vec<String> = rest
        .split(',')
        .map(|rule| rule.trim().to_string())
        .filter(|rule| !rule.is_empty())
        .collect();
    if rules.is_empty() {
        return None;
    }

    Some(Directive { kind, rules })
}

/// Build the disabled-interval index of one file from the comments found in
/// its syntax tree. Runs once per file, before any rule walker.
pub fn scan_disabled_intervals(root: &RSyntaxNode, contents: &str) -> DisabledIntervals {
    let new_lines = find_new_lines(contents);
    // Scopes with a currently open `disable`, in the order they opened.
    let mut open: Vec<(Option<String>, usize)> = Vec::new();
    let mut intervals: Vec<DisabledInterval> = Vec::new();

    for (text, span) in comments_in(root) {
        let Some(directive) = parse_comment_directive(&text) else {
            continue;
        };
        let scopes: Vec<Option<String>> = if directive.rules.is_empty() {
            vec![None]
        } else {
            directive.rules.into_iter().map(Some).collect()
        };

        match directive.kind {
            DirectiveKind::Disable => {
                for scope in scopes {
                    if !open.iter().any(|(s, _)| *s == scope) {
                        open.push((scope, span.start));
                    }
                }
            }
            DirectiveKind::Enable => {
                for scope in scopes {
                    if let Some(pos) = open.iter().position(|(s, _)| *s == scope) {
                        let (scope, start) = open.remove(pos);
                        intervals.push(DisabledInterval {
                            span: Span::new(start, span.start),
                            rule: scope,
                        });
                    }
                }
            }
            DirectiveKind::DisableLine => {
                let line = line_span(span.start, contents.len(), &new_lines);
                for scope in scopes {
                    intervals.push(DisabledInterval { span: line, rule: scope });
                }
            }
            DirectiveKind::DisableNextLine => {
                let line = next_line_span(span.start, contents.len(), &new_lines);
                for scope in scopes {
                    intervals.push(DisabledInterval { span: line, rule: scope });
                }
            }
        }
    }

    // A disable without a matching enable runs to the end of the file.
    for (scope, start) in open {
        intervals.push(DisabledInterval {
            span: Span::new(start, contents.len()),
            rule: scope,
        });
    }

    DisabledIntervals::new(intervals)
}

/// All comments of the tree with their spans, in document order.
fn comments_in(root: &RSyntaxNode) -> Vec<(String, Span)> {
    let mut comments = Vec::new();
    for token in root.descendants_tokens(Direction::Next) {
        for piece in token.leading_trivia().pieces() {
            if piece.is_comments() {
                comments.push((piece.text().to_string(), piece.text_range().into()));
            }
        }
        for piece in token.trailing_trivia().pieces() {
            if piece.is_comments() {
                comments.push((piece.text().to_string(), piece.text_range().into()));
            }
        }
    }
    comments
}

/// Span of the line containing `offset`, newline excluded.
fn line_span(offset: usize, len: usize, new_lines: &[usize]) -> Span {
    let n = new_lines.partition_point(|&pos| pos < offset);
    let start = if n == 0 { 0 } else { new_lines[n - 1] + 1 };
    let end = new_lines.get(n).copied().unwrap_or(len);
    Span::new(start, end)
}

/// Span of the line after the one containing `offset`. Empty at EOF.
fn next_line_span(offset: usize, len: usize, new_lines: &[usize]) -> Span {
    let n = new_lines.partition_point(|&pos| pos < offset);
    match new_lines.get(n) {
        Some(&line_break) => {
            let start = line_break + 1;
            let end = new_lines.get(n + 1).copied().unwrap_or(len);
            Span::new(start, end.max(start))
        }
        None => Span::empty(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use air_r_parser::{RParserOptions, parse};

    fn scan(code: &str) -> DisabledIntervals {
        let parsed = parse(code, RParserOptions::default());
        assert!(!parsed.has_error());
        scan_disabled_intervals(&parsed.syntax(), code)
    }

    #[test]
    fn test_parse_wildcard_disable() {
        let directive = parse_comment_directive("# lintern-disable").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Disable);
        assert!(directive.rules.is_empty());
    }

    #[test]
    fn test_parse_disable_with_rules() {
        let directive = parse_comment_directive("# lintern-disable equals_na, any_is_na").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Disable);
        assert_eq!(directive.rules, vec!["equals_na", "any_is_na"]);
    }

    #[test]
    fn test_parse_without_space_after_hash() {
        let directive = parse_comment_directive("#lintern-enable equals_na").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Enable);
        assert_eq!(directive.rules, vec!["equals_na"]);
    }

    #[test]
    fn test_parse_line_variants() {
        assert_eq!(
            parse_comment_directive("# lintern-disable-line").unwrap().kind,
            DirectiveKind::DisableLine
        );
        assert_eq!(
            parse_comment_directive("# lintern-disable-next-line equals_na")
                .unwrap()
                .kind,
            DirectiveKind::DisableNextLine
        );
    }

    #[test]
    fn test_parse_rejects_non_directives() {
        assert_eq!(parse_comment_directive("# a normal comment"), None);
        assert_eq!(parse_comment_directive("# lintern-disabled"), None);
        assert_eq!(parse_comment_directive("# lintern-ignore foo"), None);
        assert_eq!(parse_comment_directive("not a comment"), None);
    }

    #[test]
    fn test_scan_disable_enable_pair() {
        let code = "x <- 1\n# lintern-disable equals_na\ny <- 2\n# lintern-enable equals_na\nz <- 3\n";
        let intervals = scan(code);

        let disable_at = code.find("# lintern-disable").unwrap();
        let enable_at = code.find("# lintern-enable").unwrap();
        assert_eq!(
            intervals.intervals(),
            &[DisabledInterval {
                span: Span::new(disable_at, enable_at),
                rule: Some("equals_na".to_string()),
            }]
        );
    }

    #[test]
    fn test_scan_unclosed_disable_runs_to_eof() {
        let code = "# lintern-disable\nx <- 1\n";
        let intervals = scan(code);
        assert_eq!(
            intervals.intervals(),
            &[DisabledInterval { span: Span::new(0, code.len()), rule: None }]
        );
    }

    #[test]
    fn test_scan_enable_matches_exact_scope_only() {
        // The enable names a rule but only the wildcard is open, so the
        // wildcard interval stays open until EOF.
        let code = "# lintern-disable\nx <- 1\n# lintern-enable equals_na\ny <- 2\n";
        let intervals = scan(code);
        assert_eq!(
            intervals.intervals(),
            &[DisabledInterval { span: Span::new(0, code.len()), rule: None }]
        );
    }

    #[test]
    fn test_scan_disable_line_trailing_comment() {
        let code = "x == NA # lintern-disable-line\ny <- 2\n";
        let intervals = scan(code);
        let line_end = code.find('\n').unwrap();
        assert_eq!(
            intervals.intervals(),
            &[DisabledInterval { span: Span::new(0, line_end), rule: None }]
        );
    }

    #[test]
    fn test_scan_disable_next_line() {
        let code = "# lintern-disable-next-line equals_na\nx == NA\ny <- 2\n";
        let intervals = scan(code);
        let first_break = code.find('\n').unwrap();
        let second_break = code[first_break + 1..].find('\n').unwrap() + first_break + 1;
        assert_eq!(
            intervals.intervals(),
            &[DisabledInterval {
                span: Span::new(first_break + 1, second_break),
                rule: Some("equals_na".to_string()),
            }]
        );
    }
}
