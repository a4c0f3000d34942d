use crate::types::Item;

pub struct LimitResult {
    pub selected: Vec<Item>,
    pub items_selected: usize,
    pub items_excluded_by_limit: usize,
}

/// Keep the first `limit` items of an already ordered list.
pub fn apply_limit(mut ordered: Vec<Item>, limit: usize) -> LimitResult {
    let considered = ordered.len();
    ordered.truncate(limit);

    let items_selected = ordered.len();

    LimitResult {
        selected: ordered,
        items_selected,
        items_excluded_by_limit: considered - items_selected,
    }
}
