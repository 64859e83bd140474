use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::fix::Fix;
use crate::location::Location;
use crate::span::Span;

/// Metadata describing one kind of violation. Each rule implements this for
/// the struct it reports with.
pub trait Violation {
    /// Rule identifier, e.g. "equals_na". Used in reports, configuration and
    /// suppression directives.
    fn name(&self) -> String;
    /// Explanation of why the flagged code is a problem.
    fn body(&self) -> String;
    /// Optional replacement advice appended to the report.
    fn suggestion(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

/// One reported violation: where it is, what it says, which rule said it,
/// and optionally how to repair it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: Message,
    pub span: Span,
    pub fix: Option<Fix>,
    /// Filled in once per file after all rules have run, see
    /// `utils::compute_lints_location`.
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(violation: impl Violation, span: Span, fix: Option<Fix>) -> Self {
        Self {
            message: Message {
                name: violation.name(),
                body: violation.body(),
                suggestion: violation.suggestion(),
            },
            span,
            fix,
            location: None,
        }
    }

    pub fn rule_name(&self) -> &str {
        &self.message.name
    }
}

/// Identity is (span, message): two reports of the same rule with the same
/// text on the same span are the same violation. The fix and the computed
/// location deliberately take no part in it, so a duplicate with a different
/// repair is still a duplicate.
impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.message == other.message
    }
}

impl Eq for Diagnostic {}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "[{}:{}]", location.row, location.column)?,
            None => write!(f, "[{}..{}]", self.span.start, self.span.end)?,
        }
        write!(f, " {} {}", self.message.name.red().bold(), self.message.body)?;
        if let Some(suggestion) = &self.message.suggestion {
            write!(f, " {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::Replacement;

    struct Dummy;

    impl Violation for Dummy {
        fn name(&self) -> String {
            "dummy".to_string()
        }
        fn body(&self) -> String {
            "Something is wrong.".to_string()
        }
    }

    #[test]
    fn test_identity_ignores_fix() {
        let without_fix = Diagnostic::new(Dummy, Span::new(3, 9), None);
        let with_fix = Diagnostic::new(
            Dummy,
            Span::new(3, 9),
            Some(Fix::new(vec![Replacement::new(3, 6, "better")])),
        );
        assert_eq!(without_fix, with_fix);
    }

    #[test]
    fn test_identity_compares_span_and_message() {
        let a = Diagnostic::new(Dummy, Span::new(3, 9), None);
        let b = Diagnostic::new(Dummy, Span::new(3, 10), None);
        assert_ne!(a, b);

        struct Other;
        impl Violation for Other {
            fn name(&self) -> String {
                "other".to_string()
            }
            fn body(&self) -> String {
                "Something is wrong.".to_string()
            }
        }
        let c = Diagnostic::new(Other, Span::new(3, 9), None);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialized_shape() {
        let diagnostic = Diagnostic::new(Dummy, Span::new(0, 4), None);
        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(value["message"]["name"], "dummy");
        assert_eq!(value["span"]["start"], 0);
        assert_eq!(value["span"]["end"], 4);
    }
}
