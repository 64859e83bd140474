use biome_rowan::TextRange;
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` byte range into the checked source.
///
/// All offsets produced by the walker are byte offsets taken from the parser,
/// so they always fall on UTF-8 character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span must not be inverted: {start}..{end}");
        Self { start, end }
    }

    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Two spans intersect iff they share at least one offset.
    ///
    /// A zero-width span sitting exactly on another span's boundary shares no
    /// offset with it and does not intersect.
    pub fn intersects(&self, other: Span) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self::new(range.start().into(), range.end().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_shared_offsets() {
        assert!(Span::new(5, 8).intersects(Span::new(7, 10)));
        assert!(Span::new(7, 10).intersects(Span::new(5, 8)));
        assert!(Span::new(0, 50).intersects(Span::new(10, 20)));
        assert!(Span::new(3, 6).intersects(Span::new(4, 5)));
    }

    #[test]
    fn test_touching_spans_do_not_intersect() {
        assert!(!Span::new(0, 5).intersects(Span::new(5, 10)));
        assert!(!Span::new(5, 10).intersects(Span::new(0, 5)));
    }

    #[test]
    fn test_zero_width_span_on_boundary() {
        let interval = Span::new(10, 20);
        // Inside the interval: intersects.
        assert!(Span::empty(15).intersects(interval));
        // Exactly on either edge: shares no offset, does not intersect.
        assert!(!Span::empty(10).intersects(interval));
        assert!(!Span::empty(20).intersects(interval));
    }

    #[test]
    fn test_len() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert!(Span::empty(4).is_empty());
    }
}
