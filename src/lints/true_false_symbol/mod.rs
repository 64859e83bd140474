pub(crate) mod true_false_symbol;

#[cfg(test)]
mod tests {
    use crate::test_utils::*;

    #[test]
    fn test_no_lint_true_false_symbol() {
        expect_no_lint("x <- TRUE", "true_false_symbol");
        expect_no_lint("x <- FALSE", "true_false_symbol");
        expect_no_lint("t <- 1", "true_false_symbol");
        expect_no_lint("TT <- 1", "true_false_symbol");
        // `T` as a name, not as a logical.
        expect_no_lint("f(T = 1)", "true_false_symbol");
        expect_no_lint("df$T", "true_false_symbol");
    }

    #[test]
    fn test_lint_true_false_symbol() {
        let expected_message = "can be confused with variable names";
        expect_lint("x <- T", expected_message, "true_false_symbol");
        expect_lint("x <- F", expected_message, "true_false_symbol");
        expect_lint("f(x, T)", expected_message, "true_false_symbol");
        expect_lint("if (T) 1", expected_message, "true_false_symbol");
    }

    #[test]
    fn test_fix_true_false_symbol() {
        insta::assert_snapshot!(fixed_text("x <- T", "true_false_symbol"), @"x <- TRUE");
        insta::assert_snapshot!(fixed_text("x <- F", "true_false_symbol"), @"x <- FALSE");
        insta::assert_snapshot!(
            fixed_text("mean(x, na.rm = T)", "true_false_symbol"),
            @"mean(x, na.rm = TRUE)"
        );
    }

    #[test]
    fn test_every_occurrence_reported_once() {
        // Two distinct occurrences are two diagnostics; the same occurrence
        // is never reported twice.
        let diagnostics = check_rule("c(T, T)", "true_false_symbol");
        assert_eq!(diagnostics.len(), 2);
    }
}
