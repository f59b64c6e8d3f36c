use crate::interval::{Interval, IntervalBound};
use crate::search::searcher::SearchError;
use crate::search::searcher::SearchError::NotFound;

/// Inclusive window of offsets an occurrence is allowed to start at.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct StartBounds {
    pub first: u64,
    /// `None` means "up to the end of data"
    pub last: Option<u64>,
}

/// Converts `range` into the window of allowed occurrence starts. Offsets below zero are
/// dropped; an interval with no non-negative integer point in it yields `NotFound`.
pub fn calculate_start_bounds(range: &Interval<u64>) -> Result<StartBounds, SearchError> {
    let first = match range.left_bound {
        IntervalBound::NegativeInfinity => 0,
        IntervalBound::PositiveInfinity => return Err(NotFound),
        IntervalBound::Fixed { value, is_included: true } => value,
        IntervalBound::Fixed { value, is_included: false } => value.checked_add(1).ok_or(NotFound)?,
    };
    let last = match range.right_bound {
        IntervalBound::PositiveInfinity => None,
        IntervalBound::NegativeInfinity => return Err(NotFound),
        IntervalBound::Fixed { value, is_included: true } => Some(value),
        IntervalBound::Fixed { value, is_included: false } => Some(value.checked_sub(1).ok_or(NotFound)?),
    };
    if last.filter(|l| *l < first).is_some() {
        return Err(NotFound);
    }
    Ok(StartBounds { first, last })
}

/// Position of the first occurrence of `pattern` in `haystack`
pub fn find_first(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || haystack.len() < pattern.len() {
        return None;
    }
    haystack.windows(pattern.len()).position(|w| w == pattern)
}

/// Position of the last occurrence of `pattern` in `haystack`
pub fn find_last(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || haystack.len() < pattern.len() {
        return None;
    }
    haystack.windows(pattern.len()).rposition(|w| w == pattern)
}
