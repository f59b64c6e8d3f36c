//! Property-based tests for navigation order.
//!
//! Content is generated over a tiny alphabet so that patterns occur often, including
//! overlapping and line-spanning occurrences.

use proptest::prelude::*;
use grepnav::{Navigator, NavigatorOptionsBuilder, StrBackend};

fn content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'\n']), 0..200)
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'\n']), 1..4)
}

fn occurrences(content: &[u8], pattern: &[u8]) -> Vec<u64> {
    if content.len() < pattern.len() {
        return vec![];
    }
    (0..=content.len() - pattern.len())
        .filter(|i| content[*i..].starts_with(pattern))
        .map(|i| i as u64)
        .collect()
}

fn navigator<'a>(content: &'a [u8], pattern: &[u8], wrap: bool, cursor: u64) -> Navigator<StrBackend<'a>> {
    let options = NavigatorOptionsBuilder::default()
        .wrap(wrap)
        .initial_cursor(cursor)
        .build()
        .unwrap();
    Navigator::with_options(StrBackend::from_bytes(content), pattern, options).unwrap()
}

proptest! {
    #[test]
    fn next_reports_first_occurrence_after_cursor(
        content in content_strategy(),
        pattern in pattern_strategy(),
        cursor in 0u64..220
    ) {
        let mut navigator = navigator(&content, &pattern, false, cursor);
        let expected = occurrences(&content, &pattern).into_iter().find(|o| *o > cursor);
        let hit = navigator.next().unwrap();
        prop_assert_eq!(hit.map(|hit| hit.offset), expected);
    }

    #[test]
    fn previous_reports_last_occurrence_before_cursor(
        content in content_strategy(),
        pattern in pattern_strategy(),
        cursor in 0u64..220
    ) {
        let mut navigator = navigator(&content, &pattern, false, cursor);
        let expected = occurrences(&content, &pattern).into_iter().rev().find(|o| *o < cursor);
        let hit = navigator.previous().unwrap();
        prop_assert_eq!(hit.map(|hit| hit.offset), expected);
        if let Some(o) = expected {
            prop_assert_eq!(navigator.cursor(), o);
        } else {
            prop_assert_eq!(navigator.cursor(), cursor);
        }
    }

    #[test]
    fn forward_steps_strictly_increase(
        content in content_strategy(),
        pattern in pattern_strategy()
    ) {
        let mut navigator = navigator(&content, &pattern, false, 0);
        let mut last = None;
        while let Some(hit) = navigator.next().unwrap() {
            prop_assert!(last.map_or(true, |last| hit.offset > last));
            last = Some(hit.offset);
        }
    }

    #[test]
    fn backward_steps_strictly_decrease(
        content in content_strategy(),
        pattern in pattern_strategy()
    ) {
        let mut navigator = navigator(&content, &pattern, false, content.len() as u64);
        let mut last = None;
        while let Some(hit) = navigator.previous().unwrap() {
            prop_assert!(last.map_or(true, |last| hit.offset < last));
            last = Some(hit.offset);
        }
    }

    #[test]
    fn step_back_returns_to_last_hit(
        content in content_strategy(),
        pattern in pattern_strategy(),
        cursor in 0u64..220
    ) {
        let mut navigator = navigator(&content, &pattern, false, cursor);
        if let Some(forth) = navigator.next().unwrap() {
            prop_assert_eq!(navigator.cursor(), forth.offset + 1);
            let back = navigator.previous().unwrap();
            prop_assert_eq!(back, Some(forth));
        }
    }

    #[test]
    fn wrap_never_misses_when_any_occurrence_exists(
        content in content_strategy(),
        pattern in pattern_strategy(),
        cursor in 0u64..220
    ) {
        let all = occurrences(&content, &pattern);
        let mut navigator = navigator(&content, &pattern, true, cursor);
        let forth = navigator.next().unwrap().map(|hit| hit.offset);
        navigator.set_cursor(cursor);
        let back = navigator.previous().unwrap().map(|hit| hit.offset);

        let expected_forth = all.iter().copied().find(|o| *o > cursor).or(all.first().copied());
        let expected_back = all.iter().copied().rev().find(|o| *o < cursor).or(all.last().copied());
        prop_assert_eq!(forth, expected_forth);
        prop_assert_eq!(back, expected_back);
    }

    #[test]
    fn hit_describes_its_line(
        content in content_strategy(),
        pattern in pattern_strategy(),
        cursor in 0u64..220
    ) {
        let mut navigator = navigator(&content, &pattern, true, cursor);
        if let Some(hit) = navigator.next().unwrap() {
            let offset = hit.offset as usize;
            let line_start = content[..offset].iter().rposition(|b| *b == b'\n').map_or(0, |i| i + 1);
            let line_end = content[offset..].iter().position(|b| *b == b'\n').map_or(content.len(), |i| offset + i);
            let line_no = content[..offset].iter().filter(|b| **b == b'\n').count() as u64 + 1;

            prop_assert_eq!(hit.line_no, line_no);
            prop_assert_eq!(hit.column, (offset - line_start) as u64);
            prop_assert_eq!(hit.line.as_bytes(), &content[line_start..line_end]);
        }
    }
}
