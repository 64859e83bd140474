use air_r_syntax::RCall;
use biome_rowan::AstNode;

use crate::diagnostic::{Diagnostic, Violation};
use crate::rule::{Rule, SourceFile};
use crate::utils::get_function_name;
use crate::visit::SyntaxVisitor;
use crate::walker::{RuleOptions, RuleWalker};

pub struct UndesirableFunction;

/// Functions flagged when the rule is given no argument list.
const DEFAULT_UNDESIRABLE: [&str; 2] = ["eval", "attach"];

/// Calls whose argument is quoted, not evaluated. Code inside them never
/// runs, so it cannot call anything.
const QUOTING_FUNCTIONS: [&str; 4] = ["quote", "bquote", "expression", "substitute"];

/// ## What it does
///
/// Checks for calls to functions that the project configuration declares
/// undesirable. Without configuration it flags `eval()` and `attach()`.
///
/// ## Why is this bad?
///
/// `eval()` executes data as code and `attach()` rewires the search path
/// for everyone; both make code hard to reason about and are almost always
/// better expressed another way.
struct UndesirableCall {
    function: String,
}

impl Violation for UndesirableCall {
    fn name(&self) -> String {
        "undesirable_function".to_string()
    }
    fn body(&self) -> String {
        format!("`{}()` is undesirable.", self.function)
    }
    fn suggestion(&self) -> Option<String> {
        Some("Restructure the code to avoid it.".to_string())
    }
}

impl Rule for UndesirableFunction {
    fn name(&self) -> &'static str {
        "undesirable_function"
    }

    fn check(
        &self,
        source: &SourceFile,
        options: RuleOptions,
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let mut visitor = UndesirableFunctionVisitor {
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

struct UndesirableFunctionVisitor<'src> {
    walker: RuleWalker<'src>,
    error: Option<anyhow::Error>,
}

impl SyntaxVisitor for UndesirableFunctionVisitor<'_> {
    fn visit_call(&mut self, node: &RCall) {
        match self.check(node) {
            Ok(true) => self.visit_children(node.syntax()),
            Ok(false) => {
                // Quoted code never runs: prune the subtree but keep the
                // position counter honest.
                self.walker.skip(node.syntax());
            }
            Err(error) => {
                self.error.get_or_insert(error);
            }
        }
    }
}

impl UndesirableFunctionVisitor<'_> {
    fn is_undesirable(&self, function: &str) -> bool {
        if self.walker.flags().next().is_none() {
            DEFAULT_UNDESIRABLE.contains(&function)
        } else {
            self.walker.has_option(function)
        }
    }

    /// Returns whether the traversal should descend into the call.
    fn check(&mut self, node: &RCall) -> anyhow::Result<bool> {
        let function = get_function_name(node.as_fields().function?);

        if self.is_undesirable(&function) {
            let range = node.as_fields().function?.syntax().text_trimmed_range();
            self.walker.add_failure_between(
                range.start().into(),
                range.end().into(),
                UndesirableCall { function: function.clone() },
                None,
            );
        }

        Ok(!QUOTING_FUNCTIONS.contains(&function.as_str()))
    }
}
