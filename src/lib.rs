//! Execution core for an R linter.
//!
//! Given the text of one R source file and a set of analysis rules, this
//! crate parses the file (through `air_r_parser`), walks the syntax tree
//! once per rule, collects the violations each rule reports, suppresses
//! those inside `# lintern-disable` regions, deduplicates identical
//! reports, and can apply the largest non-conflicting set of proposed
//! fixes to the text.
//!
//! The crate provides:
//! - the traversal framework (`visit`) and the per-rule walker (`walker`)
//! - the diagnostic model (`diagnostic`, `span`, `location`)
//! - inline-directive suppression (`directive`, `suppression`)
//! - the fix model and conflict resolution (`fix`)
//! - orchestration over one or many inputs (`check`)
//! - a small catalog of built-in rules (`lints`)
//!
//! File discovery, configuration loading, CLI and report formatting are
//! intentionally not part of this crate: every API is text in, text out.

pub mod check;
pub mod diagnostic;
pub mod directive;
pub mod error;
pub mod fix;
pub mod lints;
pub mod location;
pub mod rule;
pub mod span;
pub mod suppression;
pub mod utils;
pub mod visit;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use check::{
    CheckOutcome, FixedSource, MAX_FIX_PASSES, RuleArgumentsTable, check_and_fix, check_many,
    check_source,
};
pub use diagnostic::{Diagnostic, Message, Violation};
pub use error::ParseError;
pub use fix::{Fix, FixOutcome, Replacement, apply_fixes};
pub use location::Location;
pub use rule::{Rule, SourceFile};
pub use span::Span;
pub use suppression::{DisabledInterval, DisabledIntervals};
pub use visit::SyntaxVisitor;
pub use walker::{ArgumentValue, RuleArgument, RuleOptions, RuleWalker};
