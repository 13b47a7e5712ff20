use actix_web::{web, HttpResponse};
use goodbooks_models::{rank_rows, AuthorSummary, CatalogStats, LanguageShare, Ranked, RatingBucket, UserRatingStats, YearTrend};
use serde::Serialize;

use super::{group_thousands, Table};
use crate::charts::{self, Chart, LANGUAGE_TABLE_SIZE};
use crate::errors::ApiResult;
use crate::params::{AuthorTableQuery, CatalogSearchQuery, MostRatedQuery, TopRatedQuery};
use crate::state::AppState;

const CONTRIBUTOR_LIMIT: i64 = 20;

#[derive(Debug, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: i64,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    #[serde(flatten)]
    pub stats: CatalogStats,
    pub metrics: Vec<Metric>,
}

fn metric(label: &'static str, value: i64) -> Metric {
    Metric {
        label,
        value,
        display: group_thousands(value),
    }
}

pub async fn overview(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let stats = state.catalog().catalog_stats().await?;

    Ok(HttpResponse::Ok().json(Overview {
        metrics: vec![
            metric("Books in Catalog", stats.book_count),
            metric("Active Users", stats.user_count),
            metric("Total Ratings", stats.rating_count),
        ],
        stats,
    }))
}

pub async fn top_rated_books(
    state: web::Data<AppState>,
    query: web::Query<TopRatedQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;

    let books = state
        .catalog()
        .top_rated_books(query.limit, query.min_ratings)
        .await?;
    let min_ratings = group_thousands(query.min_ratings);
    let table = Table::new(
        rank_rows(books),
        |n| format!("Showing {} books with {}+ ratings | Sorted by average rating", n, min_ratings),
        format!(
            "No books found with at least {} ratings. Try lowering the threshold.",
            min_ratings
        ),
    );
    Ok(HttpResponse::Ok().json(table))
}

pub async fn most_rated_books(
    state: web::Data<AppState>,
    query: web::Query<MostRatedQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;

    let books = state.catalog().most_rated_books(query.limit).await?;
    let table = Table::new(
        rank_rows(books),
        |n| format!("Top {} books by review volume", n),
        "No books found.",
    );
    Ok(HttpResponse::Ok().json(table))
}

#[derive(Debug, Serialize)]
pub struct AuthorAnalytics {
    #[serde(flatten)]
    pub table: Table<Ranked<AuthorSummary>>,
    pub chart: Option<Chart>,
}

pub async fn author_analytics(
    state: web::Data<AppState>,
    query: web::Query<AuthorTableQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;

    let authors = state.catalog().top_authors(query.limit).await?;
    let chart = (query.chart && !authors.is_empty()).then(|| charts::author_chart(&authors));
    let table = Table::new(
        rank_rows(authors),
        |n| format!("Top {} authors by catalog presence", n),
        "No author data available in the database.",
    );
    Ok(HttpResponse::Ok().json(AuthorAnalytics { table, chart }))
}

#[derive(Debug, Serialize)]
pub struct PublicationTrends {
    pub years: Table<YearTrend>,
    pub year_chart: Option<Chart>,
    pub languages: Table<LanguageShare>,
    pub language_chart: Option<Chart>,
}

pub async fn publication_trends(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let catalog = state.catalog();
    let (trends, mut languages) = tokio::try_join!(catalog.publication_trends(), catalog.books_by_language())?;

    let year_chart = (!trends.is_empty()).then(|| charts::publication_chart(&trends));
    let language_chart = (!languages.is_empty()).then(|| charts::language_chart(&languages));
    languages.truncate(LANGUAGE_TABLE_SIZE);

    Ok(HttpResponse::Ok().json(PublicationTrends {
        years: Table::new(
            trends,
            |_| "Number of books published per year (1900-2025)".to_string(),
            "Publication trend data not available.",
        ),
        year_chart,
        languages: Table::new(
            languages,
            |_| "Distribution of books by language code".to_string(),
            "Language data not available.",
        ),
        language_chart,
    }))
}

#[derive(Debug, Serialize)]
pub struct RatingAnalytics {
    pub distribution: Table<RatingBucket>,
    pub distribution_chart: Option<Chart>,
    pub contributors: Table<UserRatingStats>,
}

pub async fn rating_analytics(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let catalog = state.catalog();
    let (buckets, contributors) = tokio::try_join!(
        catalog.rating_distribution(),
        catalog.user_rating_stats(CONTRIBUTOR_LIMIT)
    )?;

    let distribution_chart = (!buckets.is_empty()).then(|| charts::rating_histogram(&buckets));

    Ok(HttpResponse::Ok().json(RatingAnalytics {
        distribution: Table::new(
            buckets,
            |_| "Distribution of average book ratings (0.0 - 5.0 scale)".to_string(),
            "Rating analytics data not available.",
        ),
        distribution_chart,
        contributors: Table::new(
            contributors,
            |_| "Most active users by number of ratings submitted".to_string(),
            "No ratings submitted yet.",
        ),
    }))
}

pub async fn search_books(
    state: web::Data<AppState>,
    query: web::Query<CatalogSearchQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;
    let keyword = query.keyword.trim();

    let books = state
        .catalog()
        .search_books(keyword, query.min_rating, query.limit)
        .await?;
    let table = Table::new(
        rank_rows(books),
        |n| format!("Found {} books | Rating {:.1}+", n, query.min_rating),
        "No books match the specified search criteria. Try adjusting the rating threshold.",
    );
    Ok(HttpResponse::Ok().json(table))
}
