use crate::check::{RuleArgumentsTable, check_and_fix, check_source};
use crate::diagnostic::Diagnostic;
use crate::lints::all_rules;
use crate::rule::Rule;
use crate::walker::RuleArgument;

fn rules_named(rule: &str) -> Vec<Box<dyn Rule>> {
    let rules: Vec<Box<dyn Rule>> = all_rules()
        .into_iter()
        .filter(|r| r.name() == rule)
        .collect();
    assert!(!rules.is_empty(), "no built-in rule named {rule}");
    rules
}

/// Run one built-in rule over `text` and return its diagnostics.
pub fn check_rule(text: &str, rule: &str) -> Vec<Diagnostic> {
    check_rule_with_args(text, rule, vec![])
}

/// Like `check_rule` with an argument list for the rule.
pub fn check_rule_with_args(
    text: &str,
    rule: &str,
    arguments: Vec<RuleArgument>,
) -> Vec<Diagnostic> {
    let mut table = RuleArgumentsTable::default();
    table.insert(rule.to_string(), arguments);
    let outcome =
        check_source(text, &rules_named(rule), &table).expect("test source must parse");
    assert!(
        outcome.rule_errors.is_empty(),
        "rule errored: {:?}",
        outcome.rule_errors
    );
    outcome.diagnostics
}

/// Assert that `text` triggers `rule` with a message containing `msg`.
pub fn expect_lint(text: &str, msg: &str, rule: &str) {
    let diagnostics = check_rule(text, rule);
    assert!(
        diagnostics.iter().any(|d| d.message.body.contains(msg)),
        "expected a {rule} lint containing {msg:?} in {text:?}, got {diagnostics:?}"
    );
}

/// Assert that `text` does not trigger `rule` at all.
pub fn expect_no_lint(text: &str, rule: &str) {
    let diagnostics = check_rule(text, rule);
    assert!(
        diagnostics.is_empty(),
        "expected no {rule} lint in {text:?}, got {diagnostics:?}"
    );
}

/// Run one built-in rule with fixes over `text` and return the fixed text.
pub fn fixed_text(text: &str, rule: &str) -> String {
    check_and_fix(text, &rules_named(rule), &RuleArgumentsTable::default())
        .expect("test source must parse")
        .text
}

/// Old/new blocks for a series of snippets, for snapshot assertions.
pub fn get_fixed_text(snippets: Vec<&str>, rule: &str) -> String {
    let mut output = String::new();
    for snippet in snippets {
        let fixed = fixed_text(snippet, rule);
        output.push_str(&format!("  OLD:\n  ====\n{snippet}\n  NEW:\n  ====\n{fixed}\n\n"));
    }
    output.trim_end().to_string()
}
