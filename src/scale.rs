//! Vertical scaling of a history window into graph rows.

use crate::history::HistoryBuffer;

/// Smallest and largest temperature in a history window, both series folded
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRange {
    pub min: i16,
    pub max: i16,
}

impl ScaleRange {
    /// `None` for an empty window; there is nothing to graph yet.
    pub fn of(buffer: &HistoryBuffer) -> Option<Self> {
        let mut slots = buffer.populated().map(|(_, s)| s);
        let first = slots.next()?;
        let seed = Self {
            min: first.actual.min(first.target),
            max: first.actual.max(first.target),
        };
        Some(slots.fold(seed, |r, s| Self {
            min: r.min.min(s.actual).min(s.target),
            max: r.max.max(s.actual).max(s.target),
        }))
    }

    pub fn contains(&self, value: i16) -> bool {
        self.min <= value && value <= self.max
    }

    /// Divisor of the row mapping; at least 2 even when `min == max`.
    pub fn denominator(&self) -> i32 {
        i32::from(self.max) - i32::from(self.min) + 2
    }

    /// Screen row of `value` in a graph whose bottom row is `baseline`.
    ///
    /// The `+1`/`+2` offsets keep the divisor non-zero and the maximum below
    /// the ceiling row. Integer division truncates, no rounding.
    pub fn row(&self, value: i16, baseline: i32, height: i32) -> i32 {
        let offset = i32::from(value) - i32::from(self.min) + 1;
        baseline - offset * height / self.denominator()
    }
}
