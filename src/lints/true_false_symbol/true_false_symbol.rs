use air_r_syntax::{RIdentifier, RSyntaxKind};
use biome_rowan::AstNode;

use crate::diagnostic::{Diagnostic, Violation};
use crate::fix::{Fix, Replacement};
use crate::rule::{Rule, SourceFile};
use crate::visit::SyntaxVisitor;
use crate::walker::{RuleOptions, RuleWalker};

pub struct TrueFalseSymbol;

/// ## What it does
///
/// Checks for the symbols `T` and `F` and replaces them by `TRUE` and
/// `FALSE`.
///
/// ## Why is this bad?
///
/// `T` and `F` are ordinary variables that happen to default to `TRUE` and
/// `FALSE`, so they can be reassigned and shadowed. Spelling the constants
/// out removes that trap.
impl Violation for TrueFalseSymbol {
    fn name(&self) -> String {
        "true_false_symbol".to_string()
    }
    fn body(&self) -> String {
        "`T` and `F` can be confused with variable names.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Spell `TRUE` and `FALSE` entirely instead.".to_string())
    }
}

impl Rule for TrueFalseSymbol {
    fn name(&self) -> &'static str {
        "true_false_symbol"
    }

    fn check(
        &self,
        source: &SourceFile,
        options: RuleOptions,
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let mut visitor = TrueFalseSymbolVisitor {
            walker: RuleWalker::new(source.text(), options),
        };
        visitor.walk(&source.syntax());
        Ok(visitor.walker.into_failures())
    }
}

struct TrueFalseSymbolVisitor<'src> {
    walker: RuleWalker<'src>,
}

impl SyntaxVisitor for TrueFalseSymbolVisitor<'_> {
    fn visit_identifier(&mut self, node: &RIdentifier) {
        let Ok(token) = node.name_token() else {
            return self.visit_children(node.syntax());
        };
        let text = token.text_trimmed();
        let replacement = if text == "T" {
            "TRUE"
        } else if text == "F" {
            "FALSE"
        } else {
            return self.visit_children(node.syntax());
        };

        // `f(T = 1)`, `function(T) ...`, `df$T` and `pkg::T` use the symbol
        // as a name, not as a logical constant.
        let in_name_position = node.syntax().parent().is_some_and(|parent| {
            matches!(
                parent.kind(),
                RSyntaxKind::R_ARGUMENT_NAME_CLAUSE
                    | RSyntaxKind::R_PARAMETER
                    | RSyntaxKind::R_EXTRACT_EXPRESSION
                    | RSyntaxKind::R_NAMESPACE_EXPRESSION
            )
        });
        if in_name_position {
            return self.visit_children(node.syntax());
        }

        let range = node.syntax().text_trimmed_range();
        let (start, end): (usize, usize) = (range.start().into(), range.end().into());
        let fix = Fix::new(vec![Replacement::new(start, end - start, replacement)]);
        self.walker
            .add_failure_between(start, end, TrueFalseSymbol, Some(fix));
        self.visit_children(node.syntax());
    }
}
