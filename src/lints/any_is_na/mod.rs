pub(crate) mod any_is_na;

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn test_no_lint_any_is_na() {
        expect_no_lint("anyNA(x)", "any_is_na");
        expect_no_lint("any(x)", "any_is_na");
        expect_no_lint("is.na(x)", "any_is_na");
        expect_no_lint("all(is.na(x))", "any_is_na");
        // Two arguments to `any`: not a plain reduction of is.na.
        expect_no_lint("any(is.na(x), y)", "any_is_na");
        expect_no_lint("any(is.na(x), na.rm = TRUE)", "any_is_na");
    }

    #[test]
    fn test_lint_any_is_na() {
        let expected_message = "is inefficient";
        expect_lint("any(is.na(x))", expected_message, "any_is_na");
        expect_lint("any(is.na(f(y)))", expected_message, "any_is_na");
        expect_lint("if (any(is.na(x))) stop('missing')", expected_message, "any_is_na");
    }

    #[test]
    fn test_fix_any_is_na() {
        insta::assert_snapshot!(fixed_text("any(is.na(x))", "any_is_na"), @"anyNA(x)");
        insta::assert_snapshot!(fixed_text("any(is.na(f(y)))", "any_is_na"), @"anyNA(f(y))");
        insta::assert_snapshot!(fixed_text("any( is.na( x ) )", "any_is_na"), @"anyNA(x)");
    }

    #[test]
    fn test_nested_occurrences_both_fixed() {
        assert_eq!(
            fixed_text("any(is.na(x))\nany(is.na(y))", "any_is_na"),
            "anyNA(x)\nanyNA(y)"
        );
    }

    #[test]
    fn test_no_fix_with_inner_comments() {
        let diagnostics = check_rule("any(\n  # comment\n  is.na(x)\n)", "any_is_na");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fix.is_none());
    }
}
