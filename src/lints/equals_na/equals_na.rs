use air_r_syntax::{RBinaryExpression, RSyntaxKind};
use biome_rowan::AstNode;

use crate::diagnostic::{Diagnostic, Violation};
use crate::fix::{Fix, Replacement};
use crate::rule::{Rule, SourceFile};
use crate::utils::node_contains_comments;
use crate::visit::SyntaxVisitor;
use crate::walker::{RuleOptions, RuleWalker};

pub struct EqualsNa;

/// ## What it does
///
/// Checks for `x == NA`, `x != NA` and `x %in% NA`, and replaces those by
/// `is.na()` calls.
///
/// ## Why is this bad?
///
/// Comparing a value to `NA` with `==` returns `NA` in many cases:
/// ```r
/// x <- c(1, 2, 3, NA)
/// x == NA
/// #> [1] NA NA NA NA
/// ```
/// which is very likely not the expected output.
impl Violation for EqualsNa {
    fn name(&self) -> String {
        "equals_na".to_string()
    }
    fn body(&self) -> String {
        "Comparing to NA with `==`, `!=` or `%in%` is problematic.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use `is.na()` instead.".to_string())
    }
}

impl Rule for EqualsNa {
    fn name(&self) -> &'static str {
        "equals_na"
    }

    fn check(
        &self,
        source: &SourceFile,
        options: RuleOptions,
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let mut visitor = EqualsNaVisitor {
            walker: RuleWalker::new(source.text(), options),
            error: None,
        };
        visitor.walk(&source.syntax());
        match visitor.error {
            Some(error) => Err(error),
            None => Ok(visitor.walker.into_failures()),
        }
    }
}

const NA_VALUES: [&str; 6] = [
    "NA",
    "NA_character_",
    "NA_integer_",
    "NA_real_",
    "NA_logical_",
    "NA_complex_",
];

struct EqualsNaVisitor<'src> {
    walker: RuleWalker<'src>,
    error: Option<anyhow::Error>,
}

impl SyntaxVisitor for EqualsNaVisitor<'_> {
    fn visit_binary_expression(&mut self, node: &RBinaryExpression) {
        if let Err(error) = self.check(node) {
            self.error.get_or_insert(error);
        }
        self.visit_children(node.syntax());
    }
}

impl EqualsNaVisitor<'_> {
    fn check(&mut self, node: &RBinaryExpression) -> anyhow::Result<()> {
        let fields = node.as_fields();
        let left = fields.left?.to_trimmed_string();
        let operator = fields.operator?;
        let right = fields.right?.to_trimmed_string();

        let operator_is_in =
            operator.kind() == RSyntaxKind::SPECIAL && operator.text_trimmed() == "%in%";

        if operator.kind() != RSyntaxKind::EQUAL2
            && operator.kind() != RSyntaxKind::NOT_EQUAL
            && !operator_is_in
        {
            return Ok(());
        }

        let left_is_na = NA_VALUES.contains(&left.trim());
        let right_is_na = NA_VALUES.contains(&right.trim());

        // `NA %in% x` asks whether NA is an element of x, which is a
        // different question entirely.
        if operator_is_in && left_is_na {
            return Ok(());
        }
        if (left_is_na && right_is_na) || (!left_is_na && !right_is_na) {
            return Ok(());
        }

        let kept = if left_is_na { right.trim() } else { left.trim() };
        let content = if operator.kind() == RSyntaxKind::NOT_EQUAL {
            format!("!is.na({kept})")
        } else {
            format!("is.na({kept})")
        };

        let range = node.syntax().text_trimmed_range();
        let (start, end): (usize, usize) = (range.start().into(), range.end().into());
        let fix = (!node_contains_comments(node.syntax()))
            .then(|| Fix::new(vec![Replacement::new(start, end - start, content)]));
        self.walker.add_failure_between(start, end, EqualsNa, fix);
        Ok(())
    }
}
