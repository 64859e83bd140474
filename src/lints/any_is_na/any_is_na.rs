use air_r_syntax::RCall;
use biome_rowan::{AstNode, AstSeparatedList};

use crate::diagnostic::{Diagnostic, Violation};
use crate::fix::{Fix, Replacement};
use crate::rule::{Rule, SourceFile};
use crate::utils::{get_function_name, node_contains_comments};
use crate::visit::SyntaxVisitor;
use crate::walker::{RuleOptions, RuleWalker};

pub struct AnyIsNa;

/// ## What it does
///
/// Checks for `any(is.na(x))` and replaces it by `anyNA(x)`.
///
/// ## Why is this bad?
///
/// `any(is.na(x))` allocates a full logical vector only to reduce it to one
/// value. `anyNA(x)` short-circuits on the first missing value instead.
impl Violation for AnyIsNa {
    fn name(&self) -> String {
        "any_is_na".to_string()
    }
    fn body(&self) -> String {
        "`any(is.na(...))` is inefficient.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use `anyNA(...)` instead.".to_string())
    }
}

impl Rule for AnyIsNa {
    fn name(&self) -> &'static str {
        "any_is_na"
    }

    fn check(
        &self,
        source: &SourceFile,
        options: RuleOptions,
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let mut visitor = AnyIsNaVisitor {
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

struct AnyIsNaVisitor<'src> {
    walker: RuleWalker<'src>,
    error: Option<anyhow::Error>,
}

impl SyntaxVisitor for AnyIsNaVisitor<'_> {
    fn visit_call(&mut self, node: &RCall) {
        if let Err(error) = self.check(node) {
            self.error.get_or_insert(error);
        }
        self.visit_children(node.syntax());
    }
}

impl AnyIsNaVisitor<'_> {
    fn check(&mut self, node: &RCall) -> anyhow::Result<()> {
        if get_function_name(node.as_fields().function?) != "any" {
            return Ok(());
        }
        let arguments = node.as_fields().arguments?.items();
        if arguments.len() != 1 {
            return Ok(());
        }
        let Some(argument) = arguments.into_iter().next() else {
            return Ok(());
        };
        let argument = argument?;
        if argument.name_clause().is_some() {
            return Ok(());
        }
        let Some(value) = argument.value() else {
            return Ok(());
        };
        let Some(inner) = value.as_r_call() else {
            return Ok(());
        };
        if get_function_name(inner.as_fields().function?) != "is.na" {
            return Ok(());
        }
        let inner_arguments = inner.as_fields().arguments?.items();
        if inner_arguments.len() != 1 {
            return Ok(());
        }
        let Some(inner_argument) = inner_arguments.into_iter().next() else {
            return Ok(());
        };
        let inner_argument = inner_argument?;
        if inner_argument.name_clause().is_some() {
            return Ok(());
        }

        let outer = node.syntax().text_trimmed_range();
        let content = inner_argument.syntax().text_trimmed_range();
        let (outer_start, outer_end): (usize, usize) = (outer.start().into(), outer.end().into());
        let (content_start, content_end): (usize, usize) =
            (content.start().into(), content.end().into());

        // Rewrite the head `any(is.na(` and the tail `))` around the kept
        // argument.
        let fix = (!node_contains_comments(node.syntax())).then(|| {
            Fix::new(vec![
                Replacement::new(outer_start, content_start - outer_start, "anyNA("),
                Replacement::new(content_end, outer_end - content_end, ")"),
            ])
        });
        self.walker
            .add_failure_between(outer_start, outer_end, AnyIsNa, fix);
        Ok(())
    }
}
