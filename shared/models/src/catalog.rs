use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Headline counts for the relational catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub book_count: i64,
    pub user_count: i64,
    pub rating_count: i64,
}

/// Authors grouped on the `books.authors` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AuthorSummary {
    pub authors: String,
    pub book_count: i64,
    pub avg_rating: Option<f64>,
    pub total_ratings: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RatingBucket {
    pub rating_bucket: Option<f64>,
    pub book_count: i64,
}

/// A row of the `books` table as shown in the catalog tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CatalogBook {
    pub title: String,
    pub authors: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i64>,
    pub original_publication_year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LanguageShare {
    pub language_code: String,
    pub book_count: i64,
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct YearTrend {
    pub year: i64,
    pub book_count: i64,
    pub avg_rating: Option<f64>,
}

/// Rating activity of a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRatingStats {
    pub user_id: i64,
    pub books_rated: i64,
    pub avg_rating_given: Option<f64>,
    pub min_rating: Option<i64>,
    pub max_rating: Option<i64>,
}
