use top_ranking::types::{Item, RankingMetadata, RankingResult};
use top_ranking::{Ranker, RankingConfig};

#[test]
fn golden_ranking_result_serialization() {
    let result = Ranker::new(3).rank(&[
        Item::new("alpha", 9.2),
        Item::new("beta", 7.8),
        Item::new("gamma", 8.6),
        Item::new("delta", 9.5),
    ]);

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    let items_start = json_str.find("\"items\":").expect("Missing items key");
    let sel_start = json_str.find("\"selection\":").expect("Missing selection key");
    assert!(items_start < sel_start, "items should appear before selection metadata");

    const EXPECTED_JSON: &str = r#"{
      "items": [
        { "name": "delta", "score": 9.5 },
        { "name": "alpha", "score": 9.2 },
        { "name": "gamma", "score": 8.6 }
      ],
      "selection": {
        "limit": 3,
        "items_considered": 4,
        "items_selected": 3,
        "items_excluded_by_limit": 1
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let deserialized: RankingResult = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, result);
    assert_eq!(
        deserialized.selection,
        RankingMetadata {
            limit: 3,
            items_considered: 4,
            items_selected: 3,
            items_excluded_by_limit: 1,
        }
    );
}

#[test]
fn item_deserializes_from_plain_object() {
    let item: Item = serde_json::from_str(r#"{"name":"x","score":-1.25}"#).unwrap();
    assert_eq!(item, Item::new("x", -1.25));
    assert_eq!(Item::from(("x", -1.25)), item);
}

#[test]
fn config_v0_defaults() {
    let config = RankingConfig::v0();
    assert_eq!(config.limit, 3);
    assert_eq!(config.output_path.to_str(), Some("ranking.md"));
    assert_eq!(config, RankingConfig::default());

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"limit":3,"output_path":"ranking.md"}"#);
}
