use proptest::prelude::*;
use top_ranking::select;
use top_ranking::types::Item;

fn item_strategy() -> impl Strategy<Value = Item> {
    // Small score range so ties are common.
    ("[a-z]{1,4}", -5i32..5).prop_map(|(name, score)| Item::new(name, f64::from(score) / 2.0))
}

proptest! {
    /// Property: output length is min(limit, len).
    #[test]
    fn selection_length_is_bounded(
        items in prop::collection::vec(item_strategy(), 0..40),
        limit in 0usize..60
    ) {
        let selected = select(&items, limit);
        prop_assert_eq!(selected.len(), limit.min(items.len()));
    }

    /// Property: output is sorted descending and ties keep input order.
    #[test]
    fn selection_is_sorted_and_stable(
        items in prop::collection::vec(item_strategy(), 0..40),
        limit in 0usize..60
    ) {
        // Tag each item with its input position to observe stability.
        let tagged: Vec<Item> = items
            .iter()
            .enumerate()
            .map(|(i, item)| Item::new(format!("{i}"), item.score))
            .collect();
        let selected = select(&tagged, limit);

        for w in selected.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                let a: usize = w[0].name.parse().unwrap();
                let b: usize = w[1].name.parse().unwrap();
                prop_assert!(a < b, "tie reordered: {} before {}", a, b);
            }
        }
    }

    /// Property: the selection is a prefix of the full ranking.
    #[test]
    fn selection_is_prefix_of_full_ranking(
        items in prop::collection::vec(item_strategy(), 0..40),
        limit in 0usize..60
    ) {
        let full = select(&items, items.len());
        let selected = select(&items, limit);
        prop_assert_eq!(&full[..selected.len()], &selected[..]);
    }
}
