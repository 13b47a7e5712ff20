pub mod neo4j_client;
pub mod queries;

pub use neo4j_client::Neo4jClient;

use async_trait::async_trait;
use goodbooks_models::{
    AuthorBook, AuthorInfluence, BookMatch, ConnectionPath, MostTaggedBook, NetworkRecord,
    Recommendation, SharedTagBook, TagPopularity, TaggedBook,
};

use crate::errors::GraphResult;

/// Read-only queries against the Goodbooks graph.
///
/// Tag and title matching rules, ordering and limits are part of each query;
/// implementations return rows in the order the database produced them.
#[async_trait]
pub trait BookGraph: Send + Sync {
    /// Meaningful tag names used by at least ten books, alphabetical
    async fn all_tags(&self) -> GraphResult<Vec<String>>;

    /// Titles ordered by number of ratings, most rated first
    async fn popular_titles(&self, limit: i64) -> GraphResult<Vec<String>>;

    async fn books_by_tag(&self, tag: &str, min_rating: f64) -> GraphResult<Vec<TaggedBook>>;

    /// Case-insensitive substring search on titles
    async fn search_titles(&self, keyword: &str, limit: i64) -> GraphResult<Vec<BookMatch>>;

    /// Books sharing tags with `title`, most shared tags first
    async fn recommendations(&self, title: &str, limit: i64) -> GraphResult<Vec<Recommendation>>;

    /// Edge rows for the recommendation network of `title`
    async fn network_records(
        &self,
        title: &str,
        num_books: i64,
        min_rating: f64,
    ) -> GraphResult<Vec<NetworkRecord>>;

    /// `None` when the books are not connected within six hops
    async fn shortest_path(&self, from: &str, to: &str) -> GraphResult<Option<ConnectionPath>>;

    async fn top_authors(&self, limit: i64) -> GraphResult<Vec<AuthorInfluence>>;

    async fn authors_by_tag(&self, tag: &str, limit: i64) -> GraphResult<Vec<AuthorInfluence>>;

    async fn top_tags(&self, limit: i64) -> GraphResult<Vec<TagPopularity>>;

    /// The five books carrying the most tags
    async fn most_tagged_books(&self) -> GraphResult<Vec<MostTaggedBook>>;

    async fn related_by_tags(&self, title: &str) -> GraphResult<Vec<SharedTagBook>>;

    async fn related_by_author(&self, title: &str) -> GraphResult<Vec<AuthorBook>>;
}
