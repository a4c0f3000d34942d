pub mod limiting;
pub mod ordering;

use std::cmp::Ordering;

use tracing::debug;

use crate::types::{Item, Limit, RankingMetadata, RankingResult};
pub use limiting::{apply_limit, LimitResult};
pub use ordering::{ItemOrder, ScoreDescending};

/// Number of items kept when the caller does not say otherwise.
pub const DEFAULT_LIMIT: usize = 3;

/// Keep the `limit` highest-scoring items, best first.
///
/// Equal scores keep their input order. NaN scores sort after every number.
pub fn select(items: &[Item], limit: usize) -> Vec<Item> {
	Ranker::new(limit).rank(items).items
}

pub struct Ranker<O> {
	order: O,
	limit: Limit,
}

impl Default for Ranker<ScoreDescending> {
	fn default() -> Self {
		Self::new(DEFAULT_LIMIT)
	}
}

impl Ranker<ScoreDescending> {
	pub fn new(limit: usize) -> Self {
		Self::with_order(ScoreDescending, limit)
	}
}

impl<O> Ranker<O>
where
	O: ItemOrder,
{
	pub fn with_order(order: O, limit: usize) -> Self {
		Self {
			order,
			limit: Limit::new(limit),
		}
	}

	pub fn limit(&self) -> usize {
		self.limit.get()
	}

	pub fn rank(&self, items: &[Item]) -> RankingResult {
		let limit = self.limit.get();

		// 1. Ordering Phase
		// sort_by is stable: ties keep input order
		let mut ordered = items.to_vec();
		ordered.sort_by(|a, b| self.order.compare(a, b));

		debug_assert!(ordered
			.windows(2)
			.all(|w| self.order.compare(&w[0], &w[1]) != Ordering::Greater));

		// 2. Limiting Phase
		let LimitResult {
			selected,
			items_selected,
			items_excluded_by_limit,
		} = apply_limit(ordered, limit);

		debug!(
			limit,
			items_considered = items.len(),
			items_selected,
			"ranked items"
		);

		RankingResult {
			items: selected,
			selection: RankingMetadata {
				limit,
				items_considered: items.len(),
				items_selected,
				items_excluded_by_limit,
			},
		}
	}
}
