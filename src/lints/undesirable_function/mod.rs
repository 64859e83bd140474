pub(crate) mod undesirable_function;

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use crate::walker::RuleArgument;

    #[test]
    fn test_default_list() {
        expect_no_lint("mean(x)", "undesirable_function");
        expect_no_lint("print(x)", "undesirable_function");

        let expected_message = "is undesirable";
        expect_lint("eval(parse(text = code))", expected_message, "undesirable_function");
        expect_lint("attach(df)", expected_message, "undesirable_function");
        expect_lint("base::eval(x)", expected_message, "undesirable_function");
    }

    #[test]
    fn test_configured_list_replaces_default() {
        let arguments = vec![RuleArgument::Flag("browser".to_string())];

        // The configured list replaces the default one entirely.
        let diagnostics =
            check_rule_with_args("eval(x)\nbrowser()", "undesirable_function", arguments);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.body.contains("browser"));
    }

    #[test]
    fn test_quoted_code_not_flagged() {
        // Code inside quote() and friends never runs.
        expect_no_lint("quote(eval(x))", "undesirable_function");
        expect_no_lint("bquote(attach(df))", "undesirable_function");
        expect_no_lint("expression(eval(x))", "undesirable_function");

        // But a quoting call as an argument of a real call does not protect
        // its siblings.
        let diagnostics = check_rule("f(quote(eval(x)), attach(df))", "undesirable_function");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.body.contains("attach"));
    }

    #[test]
    fn test_diagnostic_points_at_function_name() {
        let diagnostics = check_rule("x <- eval(y)", "undesirable_function");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            (diagnostics[0].span.start, diagnostics[0].span.end),
            (5, 9)
        );
        assert!(diagnostics[0].fix.is_none());
    }
}
