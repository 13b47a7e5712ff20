use async_trait::async_trait;
use goodbooks_models::{
    AuthorSummary, CatalogBook, CatalogStats, LanguageShare, RatingBucket, UserRatingStats, YearTrend,
};
use goodbooks_observability::record_query;
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::QueryAs;
use sqlx::{query, query_as, FromRow, MySql, MySqlPool};
use std::time::Instant;

use super::BookCatalog;
use crate::errors::{CatalogError, CatalogResult};
use crate::queries;

const BACKEND: &str = "mysql";

/// Wrap `keyword` for a `LIKE` substring match, escaping its wildcards
pub fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub struct CatalogRepository {
    pool: MySqlPool,
}

impl CatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<T>(&self, operation: &str, q: QueryAs<'_, MySql, T, MySqlArguments>) -> CatalogResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let started = Instant::now();
        let result = q.fetch_all(&self.pool).await.map_err(CatalogError::from);
        record_query(BACKEND, operation, started, result)
    }
}

#[async_trait]
impl BookCatalog for CatalogRepository {
    async fn ping(&self) -> CatalogResult<()> {
        query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn catalog_stats(&self) -> CatalogResult<CatalogStats> {
        let started = Instant::now();
        let result = query_as::<MySql, (i64, i64, i64)>(queries::CATALOG_STATS)
            .fetch_optional(&self.pool)
            .await
            .map_err(CatalogError::from);
        let counts = record_query(BACKEND, "catalog_stats", started, result)?;

        let (book_count, user_count, rating_count) = counts.unwrap_or_default();
        Ok(CatalogStats {
            book_count,
            user_count,
            rating_count,
        })
    }

    async fn top_authors(&self, limit: i64) -> CatalogResult<Vec<AuthorSummary>> {
        self.fetch_all("top_authors", query_as::<MySql, _>(queries::TOP_AUTHORS).bind(limit))
            .await
    }

    async fn rating_distribution(&self) -> CatalogResult<Vec<RatingBucket>> {
        self.fetch_all("rating_distribution", query_as::<MySql, _>(queries::RATING_DISTRIBUTION))
            .await
    }

    async fn top_rated_books(&self, limit: i64, min_ratings: i64) -> CatalogResult<Vec<CatalogBook>> {
        let q = query_as::<MySql, _>(queries::TOP_RATED_BOOKS).bind(min_ratings).bind(limit);
        self.fetch_all("top_rated_books", q).await
    }

    async fn most_rated_books(&self, limit: i64) -> CatalogResult<Vec<CatalogBook>> {
        self.fetch_all("most_rated_books", query_as::<MySql, _>(queries::MOST_RATED_BOOKS).bind(limit))
            .await
    }

    async fn books_by_language(&self) -> CatalogResult<Vec<LanguageShare>> {
        self.fetch_all("books_by_language", query_as::<MySql, _>(queries::BOOKS_BY_LANGUAGE))
            .await
    }

    async fn publication_trends(&self) -> CatalogResult<Vec<YearTrend>> {
        self.fetch_all("publication_trends", query_as::<MySql, _>(queries::PUBLICATION_TRENDS))
            .await
    }

    async fn user_rating_stats(&self, limit: i64) -> CatalogResult<Vec<UserRatingStats>> {
        self.fetch_all("user_rating_stats", query_as::<MySql, _>(queries::USER_RATING_STATS).bind(limit))
            .await
    }

    async fn search_books(&self, keyword: &str, min_rating: f64, limit: i64) -> CatalogResult<Vec<CatalogBook>> {
        let pattern = like_pattern(keyword);
        let q = query_as::<MySql, _>(queries::SEARCH_BOOKS)
            .bind(pattern.clone())
            .bind(pattern)
            .bind(min_rating)
            .bind(limit);
        self.fetch_all("search_books", q).await
    }
}
