pub(crate) mod equals_na;

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn test_no_lint_equals_na() {
        expect_no_lint("x == 1", "equals_na");
        expect_no_lint("x != 'a'", "equals_na");
        expect_no_lint("is.na(x)", "equals_na");
        expect_no_lint("x %in% c(1, 2)", "equals_na");
        // Both sides NA: comparing NA to NA is a different mistake.
        expect_no_lint("NA == NA", "equals_na");
        // NA on the left of %in% asks for membership of NA.
        expect_no_lint("NA %in% x", "equals_na");
        // Quoted "NA" is a string, not the NA constant.
        expect_no_lint("x == 'NA'", "equals_na");
    }

    #[test]
    fn test_lint_equals_na() {
        let expected_message = "Comparing to NA";
        expect_lint("x == NA", expected_message, "equals_na");
        expect_lint("NA == x", expected_message, "equals_na");
        expect_lint("x != NA", expected_message, "equals_na");
        expect_lint("x %in% NA", expected_message, "equals_na");
        expect_lint("x == NA_integer_", expected_message, "equals_na");
        expect_lint("f(y) == NA", expected_message, "equals_na");
    }

    #[test]
    fn test_fix_equals_na() {
        insta::assert_snapshot!(fixed_text("x == NA", "equals_na"), @"is.na(x)");
        insta::assert_snapshot!(fixed_text("NA == x", "equals_na"), @"is.na(x)");
        insta::assert_snapshot!(fixed_text("x != NA", "equals_na"), @"!is.na(x)");
        insta::assert_snapshot!(fixed_text("x %in% NA", "equals_na"), @"is.na(x)");
        insta::assert_snapshot!(fixed_text("y <- 2\nx == NA_real_", "equals_na"), @r"
        y <- 2
        is.na(x)
        ");
    }

    #[test]
    fn test_fix_output_blocks() {
        assert_eq!(
            get_fixed_text(vec!["x == NA"], "equals_na"),
            "  OLD:\n  ====\nx == NA\n  NEW:\n  ====\nis.na(x)"
        );
    }

    #[test]
    fn test_no_fix_with_inner_comments() {
        // The lint is reported but no fix is offered, rewriting would drop
        // the comment.
        let diagnostics = check_rule("x ==\n  # keep me\n  NA", "equals_na");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fix.is_none());
    }
}
