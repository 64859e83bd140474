//! The stateful walker bound to one rule and one file.
//!
//! A `RuleWalker` carries the rule's options, the file's length as a clamp
//! bound, and the failures accumulated so far. Deduplication and
//! disabled-interval suppression happen at insertion time, so the list read
//! after the traversal is final.

use std::sync::Arc;

use air_r_syntax::RSyntaxNode;
use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Violation};
use crate::fix::Fix;
use crate::span::Span;
use crate::suppression::DisabledIntervals;

/// One tagged configuration value from a rule's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleArgument {
    /// Bare switch, e.g. `"allow-keywords"`.
    Flag(String),
    /// Named value, e.g. `max-names = 4`.
    Named { name: String, value: ArgumentValue },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgumentValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl RuleArgument {
    pub fn name(&self) -> &str {
        match self {
            RuleArgument::Flag(name) => name,
            RuleArgument::Named { name, .. } => name,
        }
    }
}

/// Everything a rule needs bound to one traversal: its name, its argument
/// list, and the file's disabled intervals.
#[derive(Debug, Clone)]
pub struct RuleOptions {
    pub rule_name: String,
    pub arguments: Vec<RuleArgument>,
    pub disabled: Arc<DisabledIntervals>,
}

impl RuleOptions {
    pub fn new(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            arguments: vec![],
            disabled: Arc::new(DisabledIntervals::default()),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<RuleArgument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_disabled(mut self, disabled: Arc<DisabledIntervals>) -> Self {
        self.disabled = disabled;
        self
    }
}

pub struct RuleWalker<'src> {
    source: &'src str,
    /// Upper clamp bound for reported spans: the file's total width.
    limit: usize,
    /// External position counter, advanced by `skip`.
    position: usize,
    options: RuleOptions,
    failures: Vec<Diagnostic>,
}

impl<'src> RuleWalker<'src> {
    pub fn new(source: &'src str, options: RuleOptions) -> Self {
        Self {
            source,
            limit: source.len(),
            position: 0,
            options,
            failures: vec![],
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn rule_name(&self) -> &str {
        &self.options.rule_name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Record that a subtree was deliberately not traversed. The position
    /// still advances by the subtree's full width, trivia included, so
    /// position-tracking consumers stay consistent.
    pub fn skip(&mut self, node: &RSyntaxNode) {
        self.position += usize::from(node.text_range_with_trivia().len());
    }

    /// True iff `name` appears in the rule's argument list. Absent arguments
    /// are not an error.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.arguments.iter().any(|arg| arg.name() == name)
    }

    pub fn option_int(&self, name: &str) -> Option<i64> {
        self.options.arguments.iter().find_map(|arg| match arg {
            RuleArgument::Named { name: n, value: ArgumentValue::Int(value) } if n == name => {
                Some(*value)
            }
            _ => None,
        })
    }

    pub fn option_text(&self, name: &str) -> Option<&str> {
        self.options.arguments.iter().find_map(|arg| match arg {
            RuleArgument::Named { name: n, value: ArgumentValue::Text(value) } if n == name => {
                Some(value.as_str())
            }
            _ => None,
        })
    }

    /// Names of all bare flags, in argument order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.options.arguments.iter().filter_map(|arg| match arg {
            RuleArgument::Flag(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Build a failure whose span is clamped to the file: neither `start`
    /// nor `start + width` may point past EOF. Clamped, not rejected — a
    /// rule may legitimately report a span whose nominal end lies past EOF
    /// because of trivia width quirks.
    pub fn create_failure(
        &self,
        start: usize,
        width: usize,
        violation: impl Violation,
        fix: Option<Fix>,
    ) -> Diagnostic {
        let end = (start + width).min(self.limit);
        let start = start.min(self.limit);
        Diagnostic::new(violation, Span::new(start, end), fix)
    }

    /// Insert a failure unless an equal one is already recorded or its span
    /// intersects an interval where this rule is disabled.
    pub fn add_failure(&mut self, failure: Diagnostic) {
        if self.failures.contains(&failure) {
            return;
        }
        if self
            .options
            .disabled
            .is_disabled(failure.span, &self.options.rule_name)
        {
            return;
        }
        self.failures.push(failure);
    }

    pub fn add_failure_at(
        &mut self,
        start: usize,
        width: usize,
        violation: impl Violation,
        fix: Option<Fix>,
    ) {
        let failure = self.create_failure(start, width, violation, fix);
        self.add_failure(failure);
    }

    /// Like `add_failure_at` but takes start and end instead of start and
    /// width.
    pub fn add_failure_between(
        &mut self,
        start: usize,
        end: usize,
        violation: impl Violation,
        fix: Option<Fix>,
    ) {
        self.add_failure_at(start, end.saturating_sub(start), violation, fix);
    }

    /// Add a failure spanning a node. Prefer this where possible.
    pub fn add_failure_at_node(
        &mut self,
        node: &RSyntaxNode,
        violation: impl Violation,
        fix: Option<Fix>,
    ) {
        let range = node.text_trimmed_range();
        self.add_failure_between(range.start().into(), range.end().into(), violation, fix);
    }

    /// The accumulated failures. The traversal is expected to have run to
    /// completion first; there are no partial-result semantics.
    pub fn failures(&self) -> &[Diagnostic] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<Diagnostic> {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::Replacement;
    use crate::suppression::DisabledInterval;

    struct TestViolation;

    impl Violation for TestViolation {
        fn name(&self) -> String {
            "test_rule".to_string()
        }
        fn body(&self) -> String {
            "Reported by the test rule.".to_string()
        }
    }

    fn walker_with(source: &str, disabled: Vec<DisabledInterval>) -> RuleWalker<'_> {
        let options = RuleOptions::new("test_rule")
            .with_disabled(Arc::new(DisabledIntervals::new(disabled)));
        RuleWalker::new(source, options)
    }

    #[test]
    fn test_span_clamped_to_file_width() {
        let walker = walker_with("0123456789", vec![]);
        let failure = walker.create_failure(8, 10, TestViolation, None);
        assert_eq!(failure.span, Span::new(8, 10));

        let failure = walker.create_failure(15, 3, TestViolation, None);
        assert_eq!(failure.span, Span::new(10, 10));
    }

    #[test]
    fn test_duplicate_failures_inserted_once() {
        let mut walker = walker_with("0123456789", vec![]);
        walker.add_failure_at(2, 3, TestViolation, None);
        // Same span and message, different fix: still the same violation.
        walker.add_failure_at(
            2,
            3,
            TestViolation,
            Some(Fix::new(vec![Replacement::delete(2, 3)])),
        );
        assert_eq!(walker.failures().len(), 1);
        assert!(walker.failures()[0].fix.is_none());
    }

    #[test]
    fn test_failure_in_disabled_interval_suppressed() {
        // File of length 100, failure [10, 20) under the rule, disabled
        // interval [0, 50) for the same rule: nothing is reported.
        let source = "x".repeat(100);
        let mut walker = walker_with(
            &source,
            vec![DisabledInterval {
                span: Span::new(0, 50),
                rule: Some("test_rule".to_string()),
            }],
        );
        walker.add_failure_at(10, 10, TestViolation, None);
        assert!(walker.failures().is_empty());
    }

    #[test]
    fn test_other_rules_interval_does_not_suppress() {
        let source = "x".repeat(100);
        let mut walker = walker_with(
            &source,
            vec![DisabledInterval {
                span: Span::new(0, 50),
                rule: Some("some_other_rule".to_string()),
            }],
        );
        walker.add_failure_at(10, 10, TestViolation, None);
        assert_eq!(walker.failures().len(), 1);
    }

    #[test]
    fn test_wildcard_interval_suppresses() {
        let source = "x".repeat(100);
        let mut walker = walker_with(
            &source,
            vec![DisabledInterval { span: Span::new(0, 50), rule: None }],
        );
        walker.add_failure_at(10, 10, TestViolation, None);
        assert!(walker.failures().is_empty());
    }

    #[test]
    fn test_zero_width_failure_on_interval_boundary_not_suppressed() {
        // Boundary-touching does not count as intersecting: a zero-width
        // failure sitting exactly on the edge of the interval is kept.
        let source = "x".repeat(100);
        let interval = DisabledInterval {
            span: Span::new(10, 20),
            rule: Some("test_rule".to_string()),
        };
        let mut walker = walker_with(&source, vec![interval.clone()]);
        walker.add_failure_at(20, 0, TestViolation, None);
        assert_eq!(walker.failures().len(), 1);

        // One offset inside, it is suppressed.
        let mut walker = walker_with(&source, vec![interval]);
        walker.add_failure_at(19, 0, TestViolation, None);
        assert!(walker.failures().is_empty());
    }

    #[test]
    fn test_skip_advances_position_by_full_width() {
        use air_r_parser::{RParserOptions, parse};

        let code = "f(x + 1)";
        let parsed = parse(code, RParserOptions::default());
        let mut walker = walker_with(code, vec![]);
        assert_eq!(walker.position(), 0);
        walker.skip(&parsed.syntax());
        // The whole tree was skipped: the position covers the full width,
        // trivia included.
        assert_eq!(walker.position(), code.len());
    }

    #[test]
    fn test_has_option() {
        let options = RuleOptions::new("test_rule").with_arguments(vec![
            RuleArgument::Flag("allow-keywords".to_string()),
            RuleArgument::Named {
                name: "max-names".to_string(),
                value: ArgumentValue::Int(4),
            },
        ]);
        let walker = RuleWalker::new("x", options);
        assert!(walker.has_option("allow-keywords"));
        assert!(walker.has_option("max-names"));
        assert!(!walker.has_option("unknown"));
        assert_eq!(walker.option_int("max-names"), Some(4));
        assert_eq!(walker.option_int("allow-keywords"), None);
    }

    #[test]
    fn test_no_arguments_means_no_options() {
        let walker = RuleWalker::new("x", RuleOptions::new("test_rule"));
        assert!(!walker.has_option("anything"));
    }
}
