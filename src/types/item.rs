use serde::{Deserialize, Serialize};

/// The atomic unit of ranking: a display name paired with a score.
///
/// Items are plain values. Names are not required to be unique or non-empty,
/// and any `f64` is accepted as a score, NaN included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub score: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for Item {
    fn from((name, score): (S, f64)) -> Self {
        Item::new(name, score)
    }
}
