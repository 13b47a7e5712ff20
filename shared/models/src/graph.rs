use serde::{Deserialize, Serialize};

/// Separator used when rendering a connection path as a single line.
pub const PATH_SEPARATOR: &str = " → ";

/// A book found through one of its tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedBook {
    pub title: String,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
}

/// Title search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookMatch {
    pub title: String,
    pub average_rating: Option<f64>,
}

/// A book sharing tags with the selected one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_title: String,
    pub shared_tags: i64,
}

/// One (book, tag) edge of the recommendation network.
///
/// The main book appears in the rows too, flagged with `is_main`, so a
/// network can be rebuilt from the rows alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub main_book: String,
    pub book_title: String,
    pub tag: String,
    pub is_main: bool,
    pub rating: Option<f64>,
    /// Total number of tags on the book, not only the ones shown
    pub tag_count: i64,
}

/// Shortest connection between two books
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPath {
    /// Rendered node names, e.g. `["Book A", "Tag: dystopian", "Book B"]`
    pub path_nodes: Vec<String>,
    pub hops: i64,
}

impl ConnectionPath {
    pub fn chain(&self) -> String {
        self.path_nodes.join(PATH_SEPARATOR)
    }
}

/// Author degree centrality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfluence {
    pub author: String,
    pub books_written: i64,
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagPopularity {
    pub tag: String,
    pub book_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostTaggedBook {
    pub title: String,
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub tag_count: i64,
}

/// A related book together with the tag that links it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedTagBook {
    pub title: String,
    pub shared_tag: String,
}

/// Another book by the same author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorBook {
    pub title: String,
    pub rating: Option<f64>,
    pub author: Option<String>,
}
