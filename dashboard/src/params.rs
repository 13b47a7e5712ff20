//! Query-string parameters of the JSON API.
//!
//! Every parameter has the default the dashboard page starts with. Values
//! outside their allowed range or set are rejected with 400 rather than
//! clamped, so the page and the API never disagree about what was queried.

use goodbooks_graph::PhysicsSettings;
use serde::Deserialize;
use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::errors::{ApiError, ApiResult};

pub const ALL_GENRES: &str = "All Genres";

pub const TAG_MIN_RATING_RANGE: RangeInclusive<f64> = 3.0..=5.0;
pub const TITLE_SEARCH_LIMIT_RANGE: RangeInclusive<i64> = 1..=100;
pub const NETWORK_BOOKS_RANGE: RangeInclusive<i64> = 5..=20;
pub const NETWORK_MIN_RATING_RANGE: RangeInclusive<f64> = 3.0..=4.8;

pub const TOP_RATED_MIN_RATINGS_RANGE: RangeInclusive<i64> = 50..=5000;
pub const TOP_RATED_MIN_RATINGS_STEP: i64 = 50;
pub const TOP_RATED_LIMITS: [i64; 4] = [25, 50, 100, 200];
pub const MOST_RATED_LIMITS: [i64; 3] = [20, 50, 100];
pub const AUTHOR_LIMIT_RANGE: RangeInclusive<i64> = 10..=100;
pub const AUTHOR_LIMIT_STEP: i64 = 10;
pub const SEARCH_MIN_RATING_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const SEARCH_LIMITS: [i64; 4] = [50, 100, 200, 500];

pub fn check_range<T>(name: &str, value: T, range: &RangeInclusive<T>) -> ApiResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::InvalidParameter(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

pub fn check_choice<T>(name: &str, value: T, choices: &[T]) -> ApiResult<()>
where
    T: PartialEq + Display,
{
    if choices.contains(&value) {
        return Ok(());
    }
    let allowed: Vec<String> = choices.iter().map(ToString::to_string).collect();
    Err(ApiError::InvalidParameter(format!(
        "{} must be one of {}, got {}",
        name,
        allowed.join(", "),
        value
    )))
}

pub fn check_step(name: &str, value: i64, step: i64) -> ApiResult<()> {
    if value % step == 0 {
        Ok(())
    } else {
        Err(ApiError::InvalidParameter(format!(
            "{} must be a multiple of {}, got {}",
            name, step, value
        )))
    }
}

/// A title that must be present and not blank
pub fn required_title<'a>(name: &str, value: &'a str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::InvalidParameter(format!("{} must not be empty", name)))
    } else {
        Ok(trimmed)
    }
}

// Graph API

#[derive(Debug, Deserialize)]
pub struct TagBooksQuery {
    #[serde(default = "default_tag_min_rating")]
    pub min_rating: f64,
}

impl TagBooksQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_range("min_rating", self.min_rating, &TAG_MIN_RATING_RANGE)
    }
}

fn default_tag_min_rating() -> f64 {
    4.5
}

#[derive(Debug, Deserialize)]
pub struct TitleSearchQuery {
    #[serde(default = "default_title_keyword")]
    pub keyword: String,
    #[serde(default = "default_title_search_limit")]
    pub limit: i64,
}

impl TitleSearchQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_range("limit", self.limit, &TITLE_SEARCH_LIMIT_RANGE)
    }
}

fn default_title_keyword() -> String {
    "hunger games".to_string()
}

fn default_title_search_limit() -> i64 {
    30
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Recommendation network of one book plus its physics tuning
#[derive(Debug, Deserialize)]
pub struct NetworkQuery {
    pub title: String,
    #[serde(default = "default_num_books")]
    pub num_books: i64,
    #[serde(default = "default_network_min_rating")]
    pub min_rating: f64,
    pub repulsion: Option<f64>,
    pub spring_length: Option<f64>,
    pub damping: Option<f64>,
    pub central_gravity: Option<f64>,
}

impl NetworkQuery {
    /// Physics from the query, falling back to the defaults per field
    pub fn physics(&self) -> PhysicsSettings {
        let defaults = PhysicsSettings::default();
        PhysicsSettings {
            repulsion: self.repulsion.unwrap_or(defaults.repulsion),
            spring_length: self.spring_length.unwrap_or(defaults.spring_length),
            damping: self.damping.unwrap_or(defaults.damping),
            central_gravity: self.central_gravity.unwrap_or(defaults.central_gravity),
        }
    }

    pub fn validate(&self) -> ApiResult<()> {
        required_title("title", &self.title)?;
        check_range("num_books", self.num_books, &NETWORK_BOOKS_RANGE)?;
        check_range("min_rating", self.min_rating, &NETWORK_MIN_RATING_RANGE)?;
        self.physics().validate()?;
        Ok(())
    }
}

fn default_num_books() -> i64 {
    10
}

fn default_network_min_rating() -> f64 {
    3.5
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub from: String,
    pub to: String,
}

impl PathQuery {
    pub fn validate(&self) -> ApiResult<()> {
        let from = required_title("from", &self.from)?;
        let to = required_title("to", &self.to)?;
        if from == to {
            return Err(ApiError::InvalidParameter(
                "from and to must be two different books".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorSort {
    #[default]
    MostProlific,
    HighestRated,
}

impl AuthorSort {
    pub fn label(&self) -> &'static str {
        match self {
            AuthorSort::MostProlific => "Most Prolific",
            AuthorSort::HighestRated => "Highest Rated",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default)]
    pub sort: AuthorSort,
}

impl AuthorQuery {
    /// The tag to filter by, `None` for every genre
    pub fn tag(&self) -> Option<&str> {
        let genre = self.genre.trim();
        if genre.is_empty() || genre == ALL_GENRES {
            None
        } else {
            Some(genre)
        }
    }
}

fn default_genre() -> String {
    ALL_GENRES.to_string()
}

// SQL API

#[derive(Debug, Deserialize)]
pub struct TopRatedQuery {
    #[serde(default = "default_min_ratings")]
    pub min_ratings: i64,
    #[serde(default = "default_top_rated_limit")]
    pub limit: i64,
}

impl TopRatedQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_range("min_ratings", self.min_ratings, &TOP_RATED_MIN_RATINGS_RANGE)?;
        check_step("min_ratings", self.min_ratings, TOP_RATED_MIN_RATINGS_STEP)?;
        check_choice("limit", self.limit, &TOP_RATED_LIMITS)
    }
}

fn default_min_ratings() -> i64 {
    500
}

fn default_top_rated_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct MostRatedQuery {
    #[serde(default = "default_most_rated_limit")]
    pub limit: i64,
}

impl MostRatedQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_choice("limit", self.limit, &MOST_RATED_LIMITS)
    }
}

fn default_most_rated_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct AuthorTableQuery {
    #[serde(default = "default_author_limit")]
    pub limit: i64,
    #[serde(default = "default_true")]
    pub chart: bool,
}

impl AuthorTableQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_range("limit", self.limit, &AUTHOR_LIMIT_RANGE)?;
        check_step("limit", self.limit, AUTHOR_LIMIT_STEP)
    }
}

fn default_author_limit() -> i64 {
    50
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CatalogSearchQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default = "default_search_min_rating")]
    pub min_rating: f64,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

impl CatalogSearchQuery {
    pub fn validate(&self) -> ApiResult<()> {
        check_range("min_rating", self.min_rating, &SEARCH_MIN_RATING_RANGE)?;
        check_choice("limit", self.limit, &SEARCH_LIMITS)
    }
}

fn default_search_min_rating() -> f64 {
    3.0
}

fn default_search_limit() -> i64 {
    100
}
