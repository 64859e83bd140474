use air_r_syntax::AnyRExpression;
use air_r_syntax::RSyntaxNode;

use crate::diagnostic::Diagnostic;
use crate::location::Location;

/// Byte positions of the new line characters in the source.
pub fn find_new_lines(contents: &str) -> Vec<usize> {
    memchr::memchr_iter(b'\n', contents.as_bytes()).collect()
}

/// Takes the start offset of a diagnostic and the positions of the new lines.
/// Returns the (row, col) position of the diagnostic in the file.
///
/// The row is 1 + the number of new line characters before the offset:
/// "1 + 1\nanyNA(x)" -> one \n before the second expression, so it is on
/// row 2. The column is the distance to the previous new line character,
/// 0-indexed.
pub fn find_row_col(start: usize, loc_new_lines: &[usize]) -> (usize, usize) {
    let n_new_lines = loc_new_lines.partition_point(|&pos| pos < start);
    let col = if n_new_lines == 0 {
        start
    } else {
        start - loc_new_lines[n_new_lines - 1] - 1
    };
    (n_new_lines + 1, col)
}

/// Takes a vector of `Diagnostic`s, all of which come with a span, and
/// converts the span into an actual (row, col) location using the positions
/// of the new lines.
pub fn compute_lints_location(
    diagnostics: Vec<Diagnostic>,
    loc_new_lines: &[usize],
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            let (row, col) = find_row_col(diagnostic.span.start, loc_new_lines);
            diagnostic.location = Some(Location::new(row, col));
            diagnostic
        })
        .collect()
}

/// Return the function name of an expression. This takes AnyRExpression
/// because multiple cases are possible:
/// - fun() -> "fun"
/// - foo::fun() -> "fun"
pub fn get_function_name(function: AnyRExpression) -> String {
    if let Some(ns_expr) = function.as_r_namespace_expression()
        && let Ok(expr) = ns_expr.right()
        && let Some(id) = expr.as_r_identifier()
        && let Ok(token) = id.name_token()
    {
        return token.text_trimmed().to_string();
    }

    if let Some(id) = function.as_r_identifier()
        && let Ok(token) = id.name_token()
    {
        return token.text_trimmed().to_string();
    }

    String::new()
}

/// Checks if a syntax node contains comments somewhere between subnodes.
/// This is used to not provide a fix when comments are present to avoid
/// destroying them.
///
/// This returns `false` if the comment is only leading or trailing: a
/// comment above or behind the expression survives a rewrite of the
/// expression itself.
pub fn node_contains_comments(node: &RSyntaxNode) -> bool {
    (node.has_comments_direct() || node.has_comments_descendants())
        && !node.has_trailing_comments()
        && !node.has_leading_comments()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_new_lines() {
        assert_eq!(find_new_lines("a\nbb\nccc"), vec![1, 4]);
        assert!(find_new_lines("abc").is_empty());
    }

    #[test]
    fn test_find_row_col_first_line() {
        let new_lines = find_new_lines("1 + 1\nanyNA(x)");
        assert_eq!(find_row_col(0, &new_lines), (1, 0));
        assert_eq!(find_row_col(4, &new_lines), (1, 4));
    }

    #[test]
    fn test_find_row_col_later_line() {
        let new_lines = find_new_lines("1 + 1\nanyNA(x)");
        // The offset right after the \n is column 0 of row 2.
        assert_eq!(find_row_col(6, &new_lines), (2, 0));
        assert_eq!(find_row_col(8, &new_lines), (2, 2));
    }
}
