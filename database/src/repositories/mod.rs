// Read-only repositories over the relational catalog

pub mod catalog;

pub use catalog::{like_pattern, CatalogRepository};

use async_trait::async_trait;
use goodbooks_models::{
    AuthorSummary, CatalogBook, CatalogStats, LanguageShare, RatingBucket, UserRatingStats, YearTrend,
};

use crate::errors::CatalogResult;

/// Aggregate queries over the `books` and `ratings` tables
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Cheap round trip used by the health endpoint
    async fn ping(&self) -> CatalogResult<()>;

    async fn catalog_stats(&self) -> CatalogResult<CatalogStats>;

    /// Authors with the most books, ties broken by average rating
    async fn top_authors(&self, limit: i64) -> CatalogResult<Vec<AuthorSummary>>;

    /// Books per average rating rounded to one decimal, ascending
    async fn rating_distribution(&self) -> CatalogResult<Vec<RatingBucket>>;

    async fn top_rated_books(&self, limit: i64, min_ratings: i64) -> CatalogResult<Vec<CatalogBook>>;

    async fn most_rated_books(&self, limit: i64) -> CatalogResult<Vec<CatalogBook>>;

    async fn books_by_language(&self) -> CatalogResult<Vec<LanguageShare>>;

    /// Yearly counts for publication years in (1900, 2025]
    async fn publication_trends(&self) -> CatalogResult<Vec<YearTrend>>;

    async fn user_rating_stats(&self, limit: i64) -> CatalogResult<Vec<UserRatingStats>>;

    /// Substring match on title or authors. An empty keyword matches every book.
    async fn search_books(&self, keyword: &str, min_rating: f64, limit: i64) -> CatalogResult<Vec<CatalogBook>>;
}
