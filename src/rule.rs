use air_r_parser::RParserOptions;
use air_r_syntax::RSyntaxNode;

use crate::diagnostic::Diagnostic;
use crate::error::ParseError;
use crate::walker::RuleOptions;

/// One parsed source file, the unit every rule runs over.
///
/// Parsing is fully delegated to `air_r_parser`; this type only keeps the
/// original text next to the tree so walkers can clamp spans and build
/// replacements against it.
pub struct SourceFile {
    text: String,
    parse: air_r_parser::Parse,
}

impl SourceFile {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let parse = air_r_parser::parse(text, RParserOptions::default());
        if parse.has_error() {
            return Err(ParseError);
        }
        Ok(Self { text: text.to_string(), parse })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn syntax(&self) -> RSyntaxNode {
        self.parse.syntax()
    }
}

/// An analysis rule.
///
/// Implementations are stateless: per-run state lives in the `RuleWalker`
/// the rule builds inside `check`, so one rule instance can serve many files
/// from many threads.
pub trait Rule: Send + Sync {
    /// Identifier used in reports, configuration and suppression
    /// directives.
    fn name(&self) -> &'static str;

    /// Run the rule over one file and return its findings, already
    /// deduplicated and filtered by the disabled intervals carried in
    /// `options`.
    fn check(&self, source: &SourceFile, options: RuleOptions)
    -> anyhow::Result<Vec<Diagnostic>>;
}
