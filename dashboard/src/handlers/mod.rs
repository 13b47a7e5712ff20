pub mod graph;
pub mod pages;
pub mod sql;

use serde::Serialize;

/// A list response: the rows, how many there are, and the text shown above
/// the table or in its place when it is empty.
#[derive(Debug, Clone, Serialize)]
pub struct Table<T> {
    pub rows: Vec<T>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Table<T> {
    /// `caption` is built from the row count and only used when there are rows
    pub fn new(rows: Vec<T>, caption: impl FnOnce(usize) -> String, empty_message: impl Into<String>) -> Self {
        let count = rows.len();
        if count == 0 {
            Self {
                rows,
                count,
                caption: None,
                message: Some(empty_message.into()),
            }
        } else {
            Self {
                rows,
                count,
                caption: Some(caption(count)),
                message: None,
            }
        }
    }
}

/// `1234567` as `1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
