use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A single primitive text edit: remove `length` bytes starting at `start`,
/// then insert `text` there. Offsets are always relative to the text the
/// edit was proposed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub start: usize,
    pub length: usize,
    pub text: String,
}

impl Replacement {
    pub fn new(start: usize, length: usize, text: impl Into<String>) -> Self {
        Self { start, length, text: text.into() }
    }

    /// Pure insertion, removes nothing.
    pub fn insert_at(start: usize, text: impl Into<String>) -> Self {
        Self::new(start, 0, text)
    }

    /// Pure deletion, inserts nothing.
    pub fn delete(start: usize, length: usize) -> Self {
        Self::new(start, length, "")
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }
}

/// The ordered set of replacements one rule proposes to repair one
/// violation. A fix is applied atomically or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    replacements: Vec<Replacement>,
}

impl Fix {
    pub fn new(replacements: Vec<Replacement>) -> Self {
        Self { replacements }
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Offset of the leftmost edit, used to order fixes deterministically.
    pub fn start(&self) -> Option<usize> {
        self.replacements.iter().map(|r| r.start).min()
    }

    /// A fix is malformed when its own replacements overlap one another,
    /// reach past the end of the file, or split a UTF-8 character. Malformed
    /// fixes are dropped at apply time; their diagnostics are still reported.
    pub fn is_well_formed(&self, source: &str) -> bool {
        for replacement in &self.replacements {
            if replacement.end() > source.len()
                || !source.is_char_boundary(replacement.start)
                || !source.is_char_boundary(replacement.end())
            {
                return false;
            }
        }
        let mut spans: Vec<Span> = self.replacements.iter().map(Replacement::span).collect();
        spans.sort();
        spans.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

/// Result of applying a set of proposed fixes to one file.
#[derive(Debug)]
pub struct FixOutcome {
    /// The patched text.
    pub text: String,
    /// Indices into the proposed slice of the fixes that were applied.
    pub applied: Vec<usize>,
    /// Number of proposed fixes that were not applied, either because they
    /// were malformed or because they conflicted with an accepted fix.
    pub skipped: usize,
}

impl FixOutcome {
    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// Apply the largest non-conflicting subset of `fixes` to `source`.
///
/// Fixes are considered in order of their leftmost replacement, ties broken
/// by the order they appear in `fixes`, so the outcome is reproducible for
/// identical input. A fix is accepted only if none of its replacements
/// overlaps a replacement of an already accepted fix; a rejected fix is
/// skipped entirely, never applied half-way. Accepted replacements are then
/// written out in a single left-to-right pass over the original text, so
/// offsets never have to be rebased.
pub fn apply_fixes(source: &str, fixes: &[&Fix]) -> FixOutcome {
    let mut skipped = 0;

    let mut order: Vec<usize> = (0..fixes.len()).collect();
    order.retain(|&index| {
        let usable = !fixes[index].is_empty() && fixes[index].is_well_formed(source);
        if !usable {
            tracing::debug!(fix = index, "dropping malformed fix");
            skipped += 1;
        }
        usable
    });
    order.sort_by_key(|&index| fixes[index].start());

    let mut accepted_spans: Vec<Span> = Vec::new();
    let mut applied: Vec<usize> = Vec::new();
    for index in order {
        let conflicts = fixes[index]
            .replacements()
            .iter()
            .any(|r| accepted_spans.iter().any(|span| span.intersects(r.span())));
        if conflicts {
            tracing::debug!(fix = index, "skipping fix conflicting with an accepted one");
            skipped += 1;
            continue;
        }
        accepted_spans.extend(fixes[index].replacements().iter().map(Replacement::span));
        applied.push(index);
    }
    applied.sort_unstable();

    // `applied` is in discovery order, so the stable sort keeps same-offset
    // insertions in discovery order too.
    let mut edits: Vec<&Replacement> = applied
        .iter()
        .flat_map(|&index| fixes[index].replacements())
        .collect();
    edits.sort_by_key(|r| (r.start, r.end()));

    let mut text = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        text.push_str(&source[cursor..edit.start]);
        text.push_str(&edit.text);
        cursor = edit.end();
    }
    text.push_str(&source[cursor..]);

    FixOutcome { text, applied, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(source: &str, fixes: &[Fix]) -> FixOutcome {
        let refs: Vec<&Fix> = fixes.iter().collect();
        apply_fixes(source, &refs)
    }

    #[test]
    fn test_single_replacement() {
        let outcome = apply("abcdef", &[Fix::new(vec![Replacement::new(2, 2, "XY")])]);
        assert_eq!(outcome.text, "abXYef");
        assert_eq!(outcome.applied, vec![0]);
        assert!(!outcome.has_skipped());
    }

    #[test]
    fn test_overlapping_fixes_first_wins() {
        // [5, 8) is accepted first, [7, 10) overlaps it and is skipped.
        let source = "0123456789abcdef";
        let delete = Fix::new(vec![Replacement::delete(5, 3)]);
        let replace = Fix::new(vec![Replacement::new(7, 3, "x")]);
        let outcome = apply(source, &[delete, replace]);
        assert_eq!(outcome.text, "0123489abcdef");
        assert_eq!(outcome.applied, vec![0]);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_discovery_order_breaks_ties_only() {
        // Same two fixes handed over in the opposite order: the one starting
        // earlier still wins.
        let source = "0123456789abcdef";
        let delete = Fix::new(vec![Replacement::delete(5, 3)]);
        let replace = Fix::new(vec![Replacement::new(7, 3, "x")]);
        let outcome = apply(source, &[replace, delete]);
        assert_eq!(outcome.text, "0123489abcdef");
        assert_eq!(outcome.applied, vec![1]);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_internally_overlapping_fix_rejected() {
        // Replacements [3, 6) and [4, 5) overlap each other: the whole fix is
        // malformed and must not touch the text.
        let source = "0123456789";
        let malformed = Fix::new(vec![Replacement::delete(3, 3), Replacement::new(4, 1, "y")]);
        let healthy = Fix::new(vec![Replacement::new(8, 1, "z")]);
        let outcome = apply(source, &[malformed, healthy]);
        assert_eq!(outcome.text, "01234567z9");
        assert_eq!(outcome.applied, vec![1]);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_touching_replacements_within_a_fix_are_valid() {
        let fix = Fix::new(vec![Replacement::delete(2, 2), Replacement::new(4, 2, "Z")]);
        assert!(fix.is_well_formed("abcdefgh"));
        let outcome = apply("abcdefgh", &[fix]);
        assert_eq!(outcome.text, "abZgh");
    }

    #[test]
    fn test_out_of_bounds_fix_rejected() {
        let fix = Fix::new(vec![Replacement::delete(4, 10)]);
        let outcome = apply("abcdef", &[fix]);
        assert_eq!(outcome.text, "abcdef");
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_multi_replacement_fix_is_atomic() {
        // The second fix collides with only one half of the composite fix,
        // but composite fixes win or lose as a unit.
        let source = "0123456789";
        let composite = Fix::new(vec![Replacement::new(1, 1, "A"), Replacement::new(8, 1, "B")]);
        let collider = Fix::new(vec![Replacement::new(8, 2, "C")]);
        let outcome = apply(source, &[composite, collider]);
        assert_eq!(outcome.text, "0A234567B9");
        assert_eq!(outcome.applied, vec![0]);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_offsets_stay_relative_to_original_text() {
        // A growing edit before a shrinking edit must not shift the second
        // edit's target.
        let source = "aa bb cc";
        let grow = Fix::new(vec![Replacement::new(0, 2, "aaaa")]);
        let shrink = Fix::new(vec![Replacement::new(6, 2, "c")]);
        let outcome = apply(source, &[grow, shrink]);
        assert_eq!(outcome.text, "aaaa bb c");
        assert_eq!(outcome.applied, vec![0, 1]);
    }

    #[test]
    fn test_accepted_replacements_never_share_an_offset() {
        let fixes = [
            Fix::new(vec![Replacement::delete(0, 4)]),
            Fix::new(vec![Replacement::delete(2, 4)]),
            Fix::new(vec![Replacement::delete(4, 4)]),
            Fix::new(vec![Replacement::delete(6, 4)]),
        ];
        let refs: Vec<&Fix> = fixes.iter().collect();
        let outcome = apply_fixes("0123456789", &refs);

        let spans: Vec<Span> = outcome
            .applied
            .iter()
            .flat_map(|&i| fixes[i].replacements())
            .map(Replacement::span)
            .collect();
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                assert!(a.end <= b.start || b.end <= a.start, "{a:?} overlaps {b:?}");
            }
        }
        assert_eq!(outcome.applied, vec![0, 2]);
        assert_eq!(outcome.text, "89");
    }

    #[test]
    fn test_determinism_across_discovery_orders() {
        let a = Fix::new(vec![Replacement::new(0, 2, "X")]);
        let b = Fix::new(vec![Replacement::new(3, 2, "Y")]);
        let c = Fix::new(vec![Replacement::new(6, 2, "Z")]);

        let first = apply("aa bb cc", &[a.clone(), b.clone(), c.clone()]);
        let second = apply("aa bb cc", &[c, a, b]);
        assert_eq!(first.text, second.text);
        assert_eq!(first.text, "X Y Z");
        assert_eq!(first.applied.len(), second.applied.len());
    }

    #[test]
    fn test_empty_fix_set() {
        let outcome = apply("abc", &[]);
        assert_eq!(outcome.text, "abc");
        assert!(outcome.applied.is_empty());
        assert!(!outcome.has_skipped());
    }

    #[test]
    fn test_insertion_next_to_deletion() {
        // A zero-width insertion on the edge of a deletion shares no offset
        // with it, so both apply.
        let insert = Fix::new(vec![Replacement::insert_at(5, "+")]);
        let delete = Fix::new(vec![Replacement::delete(5, 3)]);
        let outcome = apply("0123456789", &[insert, delete]);
        assert_eq!(outcome.text, "01234+89");
        assert_eq!(outcome.applied, vec![0, 1]);
    }
}
