use serde::{Deserialize, Serialize};

/// A table row with a 1-based rank column in front of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub rank: usize,
    #[serde(flatten)]
    pub row: T,
}

/// Number rows in their current order, starting at 1.
pub fn rank_rows<T>(rows: Vec<T>) -> Vec<Ranked<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| Ranked { rank: i + 1, row })
        .collect()
}
