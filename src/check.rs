//! Orchestration: run a set of rules over source text, optionally applying
//! fixes until the result converges.

use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::diagnostic::Diagnostic;
use crate::directive::scan_disabled_intervals;
use crate::error::ParseError;
use crate::fix::{Fix, apply_fixes};
use crate::rule::{Rule, SourceFile};
use crate::utils::{compute_lints_location, find_new_lines};
use crate::walker::{RuleArgument, RuleOptions};

/// Per-rule argument lists from configuration. Rules without an entry get an
/// empty list.
pub type RuleArgumentsTable = FxHashMap<String, Vec<RuleArgument>>;

/// Upper bound on check-then-fix passes. Each pass can reveal violations
/// that only exist after the previous pass's fixes, but the loop must
/// terminate even if a rule keeps producing new fixes.
pub const MAX_FIX_PASSES: usize = 10;

/// Result of checking one file.
#[derive(Debug)]
pub struct CheckOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Rules that failed internally. A failing rule is isolated: it
    /// contributes no diagnostics but never prevents other rules from
    /// completing.
    pub rule_errors: Vec<(String, anyhow::Error)>,
}

/// Result of checking one file with fixes applied.
#[derive(Debug)]
pub struct FixedSource {
    /// The text after all applied fixes.
    pub text: String,
    /// Diagnostics still present in `text`.
    pub diagnostics: Vec<Diagnostic>,
    pub rule_errors: Vec<(String, anyhow::Error)>,
    /// Total number of fixes applied across all passes.
    pub applied: usize,
}

/// Check `contents` with every rule in `rules`.
///
/// The tree is parsed once and the disabled intervals are scanned once;
/// both are then shared read-only by all rule walkers. Walkers run
/// sequentially over the shared tree (the tree is not `Send`); callers
/// wanting parallelism across files use `check_many`.
pub fn check_source(
    contents: &str,
    rules: &[Box<dyn Rule>],
    arguments: &RuleArgumentsTable,
) -> Result<CheckOutcome, ParseError> {
    let source = SourceFile::parse(contents)?;
    let disabled = Arc::new(scan_disabled_intervals(&source.syntax(), contents));

    let mut diagnostics: Vec<Diagnostic> = vec![];
    let mut rule_errors: Vec<(String, anyhow::Error)> = vec![];

    for rule in rules {
        let options = RuleOptions::new(rule.name())
            .with_arguments(arguments.get(rule.name()).cloned().unwrap_or_default())
            .with_disabled(Arc::clone(&disabled));

        match rule.check(&source, options) {
            Ok(failures) => diagnostics.extend(failures),
            Err(error) => {
                tracing::warn!(rule = rule.name(), %error, "rule failed, skipping its results");
                rule_errors.push((rule.name().to_string(), error));
            }
        }
    }

    let loc_new_lines = find_new_lines(contents);
    Ok(CheckOutcome {
        diagnostics: compute_lints_location(diagnostics, &loc_new_lines),
        rule_errors,
    })
}

/// Check `contents` and apply every proposed fix that survives conflict
/// resolution, re-checking the patched text so fixes that only become
/// visible after an earlier fix also get applied. Stops as soon as a pass
/// applies nothing, or after `MAX_FIX_PASSES` passes.
///
/// This is an in-memory transform: the caller owns writing the text back.
pub fn check_and_fix(
    contents: &str,
    rules: &[Box<dyn Rule>],
    arguments: &RuleArgumentsTable,
) -> Result<FixedSource, ParseError> {
    let mut text = contents.to_string();
    let mut applied = 0;

    for pass in 0..MAX_FIX_PASSES {
        let outcome = check_source(&text, rules, arguments)?;
        let fixes: Vec<&Fix> = outcome
            .diagnostics
            .iter()
            .filter_map(|diagnostic| diagnostic.fix.as_ref())
            .collect();

        let fixed = apply_fixes(&text, &fixes);
        if fixed.applied.is_empty() {
            return Ok(FixedSource {
                text,
                diagnostics: outcome.diagnostics,
                rule_errors: outcome.rule_errors,
                applied,
            });
        }

        tracing::debug!(
            pass,
            applied = fixed.applied.len(),
            skipped = fixed.skipped,
            "applied fix pass"
        );
        applied += fixed.applied.len();
        text = fixed.text;
    }

    // Pass budget exhausted: report against the latest text.
    let outcome = check_source(&text, rules, arguments)?;
    Ok(FixedSource {
        text,
        diagnostics: outcome.diagnostics,
        rule_errors: outcome.rule_errors,
        applied,
    })
}

/// Check several independent inputs in parallel. Each worker parses its own
/// input, so nothing is shared between them but the rule set and the
/// configuration.
pub fn check_many(
    inputs: &[(String, String)],
    rules: &[Box<dyn Rule>],
    arguments: &RuleArgumentsTable,
) -> Vec<(String, Result<CheckOutcome, ParseError>)> {
    inputs
        .par_iter()
        .map(|(name, contents)| (name.clone(), check_source(contents, rules, arguments)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fix::Replacement;
    use crate::lints::all_rules;
    use crate::span::Span;
    use crate::visit::SyntaxVisitor;
    use crate::walker::RuleWalker;
    use biome_rowan::AstNode;

    fn no_arguments() -> RuleArgumentsTable {
        RuleArgumentsTable::default()
    }

    #[test]
    fn test_clean_input_needs_one_pass() {
        let rules = all_rules();
        let fixed = check_and_fix("x <- c(1, 2)\nanyNA(x)\n", &rules, &no_arguments()).unwrap();
        assert_eq!(fixed.text, "x <- c(1, 2)\nanyNA(x)\n");
        assert_eq!(fixed.applied, 0);
        assert!(fixed.diagnostics.is_empty());
    }

    #[test]
    fn test_fixes_applied_and_reported_text_consistent() {
        let rules = all_rules();
        let fixed = check_and_fix("any(is.na(x))\n", &rules, &no_arguments()).unwrap();
        assert_eq!(fixed.text, "anyNA(x)\n");
        assert_eq!(fixed.applied, 1);
        assert!(fixed.diagnostics.is_empty());
    }

    #[test]
    fn test_disjoint_fixes_from_two_rules_compose_in_one_pass() {
        // `any_is_na` rewrites the head and tail of the call, `equals_na`
        // rewrites the NA comparison in between; the replacements are
        // disjoint so both fixes land in the same pass.
        let rules = all_rules();
        let fixed = check_and_fix("any(is.na(x == NA))\n", &rules, &no_arguments()).unwrap();
        assert_eq!(fixed.text, "anyNA(is.na(x))\n");
        assert!(fixed.diagnostics.is_empty());
        assert_eq!(fixed.applied, 2);
    }

    #[test]
    fn test_cascading_fixes_converge_over_passes() {
        // A rule that only unwraps the outermost `wrap(..)` per pass: each
        // fix reveals the next violation, so the loop must iterate.
        struct Wrapped;
        impl crate::diagnostic::Violation for Wrapped {
            fn name(&self) -> String {
                "unwrap".to_string()
            }
            fn body(&self) -> String {
                "Wrapped expression.".to_string()
            }
        }

        struct UnwrapRule;
        impl Rule for UnwrapRule {
            fn name(&self) -> &'static str {
                "unwrap"
            }
            fn check(
                &self,
                source: &SourceFile,
                options: RuleOptions,
            ) -> anyhow::Result<Vec<Diagnostic>> {
                struct Visitor<'src> {
                    walker: RuleWalker<'src>,
                }
                impl SyntaxVisitor for Visitor<'_> {
                    fn visit_call(&mut self, node: &air_r_syntax::RCall) {
                        let matches = node
                            .as_fields()
                            .function
                            .ok()
                            .map(crate::utils::get_function_name)
                            .is_some_and(|name| name == "wrap");
                        if !matches {
                            return self.visit_children(node.syntax());
                        }
                        let Ok(arguments) = node.as_fields().arguments else {
                            return;
                        };
                        let Some(Ok(argument)) = arguments.items().into_iter().next() else {
                            return;
                        };
                        let outer = node.syntax().text_trimmed_range();
                        let inner = argument.syntax().text_trimmed_range();
                        let (outer_start, outer_end): (usize, usize) =
                            (outer.start().into(), outer.end().into());
                        let (inner_start, inner_end): (usize, usize) =
                            (inner.start().into(), inner.end().into());
                        self.walker.add_failure_between(
                            outer_start,
                            outer_end,
                            Wrapped,
                            Some(Fix::new(vec![
                                Replacement::delete(outer_start, inner_start - outer_start),
                                Replacement::delete(inner_end, outer_end - inner_end),
                            ])),
                        );
                        // Outermost occurrence only: inner wraps surface on
                        // the next pass.
                    }
                }

                let mut visitor = Visitor { walker: RuleWalker::new(source.text(), options) };
                visitor.walk(&source.syntax());
                Ok(visitor.walker.into_failures())
            }
        }

        let rules: Vec<Box<dyn Rule>> = vec![Box::new(UnwrapRule)];
        let fixed = check_and_fix("wrap(wrap(x))\n", &rules, &no_arguments()).unwrap();
        assert_eq!(fixed.text, "x\n");
        assert_eq!(fixed.applied, 2);
        assert!(fixed.diagnostics.is_empty());
    }

    #[test]
    fn test_suppression_reaches_walkers() {
        let rules = all_rules();
        let code = "# lintern-disable equals_na\nx == NA\n";
        let outcome = check_source(code, &rules, &no_arguments()).unwrap();
        assert!(outcome.diagnostics.is_empty());

        let code = "x == NA # lintern-disable-line\ny == NA\n";
        let outcome = check_source(code, &rules, &no_arguments()).unwrap();
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].location.unwrap().row, 2);
    }

    #[test]
    fn test_parse_error_reported_for_file() {
        let rules = all_rules();
        assert!(check_source("x <- (", &rules, &no_arguments()).is_err());
    }

    #[test]
    fn test_failing_rule_is_isolated() {
        struct Broken;
        impl Rule for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }
            fn check(
                &self,
                _source: &SourceFile,
                _options: RuleOptions,
            ) -> anyhow::Result<Vec<Diagnostic>> {
                anyhow::bail!("internal failure")
            }
        }

        let mut rules = all_rules();
        rules.insert(0, Box::new(Broken));
        let outcome = check_source("x == NA\n", &rules, &no_arguments()).unwrap();
        assert_eq!(outcome.rule_errors.len(), 1);
        assert_eq!(outcome.rule_errors[0].0, "broken");
        // The healthy rules still report.
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].rule_name(), "equals_na");
    }

    #[test]
    fn test_conflicting_fixes_from_different_rules() {
        // Two rules repairing the same span: conflict resolution applies
        // exactly one of them, whichever rule ran matters not.
        struct Shout;
        impl crate::diagnostic::Violation for Shout {
            fn name(&self) -> String {
                "shout".to_string()
            }
            fn body(&self) -> String {
                "Shouting.".to_string()
            }
        }

        struct ShoutRule;
        impl Rule for ShoutRule {
            fn name(&self) -> &'static str {
                "shout"
            }
            fn check(
                &self,
                source: &SourceFile,
                options: RuleOptions,
            ) -> anyhow::Result<Vec<Diagnostic>> {
                struct Visitor<'src> {
                    walker: RuleWalker<'src>,
                }
                impl SyntaxVisitor for Visitor<'_> {
                    fn visit_identifier(&mut self, node: &air_r_syntax::RIdentifier) {
                        if let Ok(token) = node.name_token()
                            && token.text_trimmed() == "x"
                        {
                            let range = node.syntax().text_trimmed_range();
                            let start: usize = range.start().into();
                            self.walker.add_failure_at_node(
                                node.syntax(),
                                Shout,
                                Some(Fix::new(vec![Replacement::new(start, 1, "X")])),
                            );
                        }
                        self.visit_children(node.syntax());
                    }
                }

                let mut visitor = Visitor { walker: RuleWalker::new(source.text(), options) };
                visitor.walk(&source.syntax());
                Ok(visitor.walker.into_failures())
            }
        }

        struct WhisperRule;
        impl Rule for WhisperRule {
            fn name(&self) -> &'static str {
                "whisper"
            }
            fn check(
                &self,
                source: &SourceFile,
                options: RuleOptions,
            ) -> anyhow::Result<Vec<Diagnostic>> {
                struct Whisper;
                impl crate::diagnostic::Violation for Whisper {
                    fn name(&self) -> String {
                        "whisper".to_string()
                    }
                    fn body(&self) -> String {
                        "Whispering.".to_string()
                    }
                }

                struct Visitor<'src> {
                    walker: RuleWalker<'src>,
                }
                impl SyntaxVisitor for Visitor<'_> {
                    fn visit_identifier(&mut self, node: &air_r_syntax::RIdentifier) {
                        if let Ok(token) = node.name_token()
                            && token.text_trimmed() == "x"
                        {
                            let range = node.syntax().text_trimmed_range();
                            let start: usize = range.start().into();
                            self.walker.add_failure_at_node(
                                node.syntax(),
                                Whisper,
                                Some(Fix::new(vec![Replacement::new(start, 1, "x")])),
                            );
                        }
                        self.visit_children(node.syntax());
                    }
                }

                let mut visitor = Visitor { walker: RuleWalker::new(source.text(), options) };
                visitor.walk(&source.syntax());
                Ok(visitor.walker.into_failures())
            }
        }

        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ShoutRule), Box::new(WhisperRule)];
        let outcome = check_source("x\n", &rules, &no_arguments()).unwrap();
        let fixes: Vec<&Fix> = outcome
            .diagnostics
            .iter()
            .filter_map(|d| d.fix.as_ref())
            .collect();
        assert_eq!(fixes.len(), 2);

        let fixed = apply_fixes("x\n", &fixes);
        // Both fixes target the same span: exactly one is applied.
        assert_eq!(fixed.applied.len(), 1);
        assert_eq!(fixed.skipped, 1);
        assert_eq!(fixed.text, "X\n");
    }

    #[test]
    fn test_malformed_fix_still_reports_diagnostic() {
        // A rule whose fix overlaps itself: the violation is reported, the
        // broken repair is ignored at apply time.
        struct Tangle;
        impl crate::diagnostic::Violation for Tangle {
            fn name(&self) -> String {
                "tangle".to_string()
            }
            fn body(&self) -> String {
                "Tangled.".to_string()
            }
        }

        struct TangleRule;
        impl Rule for TangleRule {
            fn name(&self) -> &'static str {
                "tangle"
            }
            fn check(
                &self,
                source: &SourceFile,
                options: RuleOptions,
            ) -> anyhow::Result<Vec<Diagnostic>> {
                let mut walker = RuleWalker::new(source.text(), options);
                walker.add_failure_at(
                    0,
                    6,
                    Tangle,
                    Some(Fix::new(vec![
                        Replacement::delete(3, 3),
                        Replacement::new(4, 1, "y"),
                    ])),
                );
                Ok(walker.into_failures())
            }
        }

        let rules: Vec<Box<dyn Rule>> = vec![Box::new(TangleRule)];
        let fixed = check_and_fix("x <- 1\n", &rules, &no_arguments()).unwrap();
        assert_eq!(fixed.text, "x <- 1\n");
        assert_eq!(fixed.applied, 0);
        assert_eq!(fixed.diagnostics.len(), 1);
        assert_eq!(fixed.diagnostics[0].rule_name(), "tangle");
    }

    #[test]
    fn test_check_many_keeps_input_names() {
        let rules = all_rules();
        let inputs = vec![
            ("clean.R".to_string(), "x <- 1\n".to_string()),
            ("dirty.R".to_string(), "x == NA\n".to_string()),
        ];
        let results = check_many(&inputs, &rules, &no_arguments());
        assert_eq!(results.len(), 2);
        assert!(results[0].1.as_ref().unwrap().diagnostics.is_empty());
        assert_eq!(results[1].1.as_ref().unwrap().diagnostics.len(), 1);
    }

    #[test]
    fn test_locations_computed_for_all_diagnostics() {
        let rules = all_rules();
        let outcome = check_source("y <- 2\nx == NA\n", &rules, &no_arguments()).unwrap();
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].span, Span::new(7, 14));
        let location = outcome.diagnostics[0].location.unwrap();
        assert_eq!((location.row, location.column), (2, 0));
    }
}
