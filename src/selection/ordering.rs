use std::cmp::Ordering;

use crate::types::Item;

pub trait ItemOrder {
    /// Must be a total order: `sort_by` relies on it being consistent.
    fn compare(&self, a: &Item, b: &Item) -> Ordering;
}

/// v0: Score descending, NaN last.
///
/// Equal scores compare as `Equal`, so a stable sort keeps their input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreDescending;

impl ItemOrder for ScoreDescending {
    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match (a.score.is_nan(), b.score.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Neither side is NaN, so partial_cmp always answers.
            (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
        }
    }
}
