//! Suppressed regions of a file.
//!
//! A disabled interval is a span in which one rule (or every rule) must not
//! report. The set of intervals for a file is built once from the inline
//! directives (see `directive`), before any walker runs, and is never
//! mutated afterwards: all walkers of the file read it concurrently.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// One suppressed region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledInterval {
    pub span: Span,
    /// `None` suppresses every rule.
    pub rule: Option<String>,
}

impl DisabledInterval {
    pub fn applies_to(&self, rule_name: &str) -> bool {
        match &self.rule {
            Some(rule) => rule == rule_name,
            None => true,
        }
    }
}

/// Read-only index of the suppressed regions of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledIntervals {
    intervals: Vec<DisabledInterval>,
}

impl DisabledIntervals {
    pub fn new(intervals: Vec<DisabledInterval>) -> Self {
        Self { intervals }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[DisabledInterval] {
        &self.intervals
    }

    /// True when `span` intersects an interval that applies to `rule_name`,
    /// by name or through the wildcard.
    pub fn is_disabled(&self, span: Span, rule_name: &str) -> bool {
        self.intervals
            .iter()
            .any(|interval| interval.applies_to(rule_name) && interval.span.intersects(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn for_rule(start: usize, end: usize, rule: &str) -> DisabledInterval {
        DisabledInterval { span: Span::new(start, end), rule: Some(rule.to_string()) }
    }

    #[test]
    fn test_rule_name_must_match() {
        let intervals = DisabledIntervals::new(vec![for_rule(0, 50, "equals_na")]);
        assert!(intervals.is_disabled(Span::new(10, 20), "equals_na"));
        assert!(!intervals.is_disabled(Span::new(10, 20), "any_is_na"));
    }

    #[test]
    fn test_wildcard_applies_to_every_rule() {
        let intervals = DisabledIntervals::new(vec![DisabledInterval {
            span: Span::new(0, 50),
            rule: None,
        }]);
        assert!(intervals.is_disabled(Span::new(10, 20), "equals_na"));
        assert!(intervals.is_disabled(Span::new(10, 20), "any_is_na"));
    }

    #[test]
    fn test_outside_interval_not_disabled() {
        let intervals = DisabledIntervals::new(vec![for_rule(0, 50, "equals_na")]);
        assert!(!intervals.is_disabled(Span::new(50, 60), "equals_na"));
        // Sharing a single offset is enough.
        assert!(intervals.is_disabled(Span::new(49, 60), "equals_na"));
    }
}
