use actix_web::{web, HttpRequest, HttpResponse};
use goodbooks_graph::network::truncate_label;
use goodbooks_graph::{build_recommendation_network, render_network_page, RecommendationNetwork};
use goodbooks_models::{AuthorInfluence, ConnectionPath};
use goodbooks_observability::get_trace_context;
use serde::Serialize;
use std::cmp::Ordering;

use super::Table;
use crate::errors::{ApiError, ApiResult};
use crate::params::{
    required_title, AuthorQuery, AuthorSort, NetworkQuery, PathQuery, TagBooksQuery, TitleQuery,
    TitleSearchQuery,
};
use crate::state::AppState;

pub const DEFAULT_TAG: &str = "action";
pub const DEFAULT_FROM_TITLE: &str = "The Hunger Games (The Hunger Games, #1)";
pub const DEFAULT_TO_TITLE: &str = "Divergent (Divergent, #1)";

const INSIGHT_TITLE_CHARS: usize = 60;
const AUTHOR_LIMIT: i64 = 100;
const TOP_TAG_LIMIT: i64 = 50;
const RECOMMENDATION_LIMIT: i64 = 30;
const NO_NETWORK_MESSAGE: &str =
    "Insufficient data to generate network visualization. Try lowering the minimum rating.";

#[derive(Debug, Serialize)]
pub struct KeyInsight {
    /// Display title, cut to 60 characters
    pub title: String,
    pub full_title: String,
    pub tag_count: i64,
    pub author: String,
    pub rating: f64,
}

/// The book carrying the most tags, for the banner above the graph section
pub async fn key_insight(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let books = state.graph()?.most_tagged_books().await?;
    let insight = books.into_iter().next().map(|book| KeyInsight {
        title: truncate_label(&book.title, INSIGHT_TITLE_CHARS),
        tag_count: book.tag_count,
        author: book.author.unwrap_or_else(|| "Unknown".to_string()),
        rating: book.rating.unwrap_or(0.0),
        full_title: book.title,
    });

    Ok(HttpResponse::Ok().json(serde_json::json!({ "insight": insight })))
}

pub async fn list_tags(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let tags = state.graph()?.all_tags().await?;
    let default_tag = tags
        .iter()
        .find(|t| t.as_str() == DEFAULT_TAG)
        .or_else(|| tags.first())
        .cloned();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "tags": tags,
        "count": tags.len(),
        "default_tag": default_tag,
    })))
}

pub async fn books_by_tag(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TagBooksQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;
    let tag = path.into_inner();
    let tag = required_title("tag", &tag)?;

    let books = state.graph()?.books_by_tag(tag, query.min_rating).await?;
    let table = Table::new(
        books,
        |n| format!("{} books tagged \"{}\" rated {:.1}+", n, tag, query.min_rating),
        "No books found for this filter.",
    );
    Ok(HttpResponse::Ok().json(table))
}

pub async fn search_titles(
    state: web::Data<AppState>,
    query: web::Query<TitleSearchQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;
    let keyword = query.keyword.trim();

    let matches = state.graph()?.search_titles(keyword, query.limit).await?;
    let table = Table::new(
        matches,
        |n| format!("{} books match \"{}\"", n, keyword),
        "No books match this title search.",
    );
    Ok(HttpResponse::Ok().json(table))
}

#[derive(Debug, Serialize)]
pub struct TitleChoices {
    pub titles: Vec<String>,
    pub count: usize,
    pub default_from: Option<String>,
    pub default_to: Option<String>,
}

/// Preferred title if present, otherwise whatever sits at `fallback`
fn default_title(titles: &[String], preferred: &str, fallback: usize) -> Option<String> {
    titles
        .iter()
        .find(|t| t.as_str() == preferred)
        .or_else(|| titles.get(fallback))
        .cloned()
}

pub async fn popular_titles(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let titles = state.popular_titles().await?;

    Ok(HttpResponse::Ok().json(TitleChoices {
        default_from: default_title(&titles, DEFAULT_FROM_TITLE, 0),
        default_to: default_title(&titles, DEFAULT_TO_TITLE, 1),
        count: titles.len(),
        titles: titles.as_ref().clone(),
    }))
}

pub async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<TitleQuery>,
) -> ApiResult<HttpResponse> {
    let title = required_title("title", &query.title)?;

    let recs = state.graph()?.recommendations(title, RECOMMENDATION_LIMIT).await?;
    let table = Table::new(
        recs,
        |n| format!("{} books share tags with \"{}\"", n, title),
        "No recommendations available for this book.",
    );
    Ok(HttpResponse::Ok().json(table))
}

async fn load_network(state: &AppState, query: &NetworkQuery) -> ApiResult<Option<RecommendationNetwork>> {
    query.validate()?;
    let title = query.title.trim();

    let records = state
        .graph()?
        .network_records(title, query.num_books, query.min_rating)
        .await?;
    let settings = state.network_settings(query.physics());
    Ok(build_recommendation_network(&records, &settings))
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub network: Option<RecommendationNetwork>,
    pub message: String,
}

pub async fn recommendation_network(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<NetworkQuery>,
) -> ApiResult<HttpResponse> {
    let network = load_network(&state, &query).await?;

    let message = match &network {
        Some(network) => {
            let trace = get_trace_context(&req);
            tracing::debug!(
                trace_id = %trace.trace_id,
                books = network.stats.books,
                tags = network.stats.tags,
                edges = network.stats.edges,
                "Built recommendation network"
            );
            network.stats.summary()
        }
        None => NO_NETWORK_MESSAGE.to_string(),
    };

    Ok(HttpResponse::Ok().json(NetworkResponse { network, message }))
}

/// Standalone page with Start/Stop/Fullscreen controls
pub async fn network_view(
    state: web::Data<AppState>,
    query: web::Query<NetworkQuery>,
) -> ApiResult<HttpResponse> {
    let network = load_network(&state, &query)
        .await?
        .ok_or_else(|| ApiError::NotFound(NO_NETWORK_MESSAGE.to_string()))?;
    let page = render_network_page(&network, &query.physics())?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub from: String,
    pub to: String,
    pub path: Option<ConnectionPath>,
    /// Node names joined with arrows
    pub chain: Option<String>,
    pub hops: Option<i64>,
    pub message: String,
}

pub async fn shortest_path(
    state: web::Data<AppState>,
    query: web::Query<PathQuery>,
) -> ApiResult<HttpResponse> {
    query.validate()?;
    let from = query.from.trim();
    let to = query.to.trim();

    let path = state.graph()?.shortest_path(from, to).await?;
    let message = match &path {
        Some(p) if p.path_nodes.is_empty() => "Path exists but details unavailable.",
        Some(_) => "Connection path discovered!",
        None => "No connection path found between these books.",
    };

    Ok(HttpResponse::Ok().json(PathResponse {
        from: from.to_string(),
        to: to.to_string(),
        chain: path.as_ref().filter(|p| !p.path_nodes.is_empty()).map(ConnectionPath::chain),
        hops: path.as_ref().map(|p| p.hops),
        message: message.to_string(),
        path,
    }))
}

/// Highest average rating first; authors without a rating go last.
/// The sort is stable, so ties keep the order the query returned.
pub fn sort_by_rating(authors: &mut [AuthorInfluence]) {
    authors.sort_by(|a, b| match (a.avg_rating, b.avg_rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub heading: String,
    #[serde(flatten)]
    pub table: Table<AuthorInfluence>,
}

pub async fn author_influence(
    state: web::Data<AppState>,
    query: web::Query<AuthorQuery>,
) -> ApiResult<HttpResponse> {
    let graph = state.graph()?;
    let mut authors = match query.tag() {
        Some(tag) => graph.authors_by_tag(tag, AUTHOR_LIMIT).await?,
        None => graph.top_authors(AUTHOR_LIMIT).await?,
    };
    if query.sort == AuthorSort::HighestRated {
        sort_by_rating(&mut authors);
    }

    let heading = match query.tag() {
        Some(tag) => format!("Top Authors in {}", tag),
        None => "Top Authors".to_string(),
    };
    let table = Table::new(
        authors,
        |n| format!("Displaying {} authors | Sorted by: {}", n, query.sort.label()),
        "No authors found for the selected genre.",
    );
    Ok(HttpResponse::Ok().json(AuthorResponse { heading, table }))
}

pub async fn top_tags(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let tags = state.graph()?.top_tags(TOP_TAG_LIMIT).await?;
    let table = Table::new(
        tags,
        |n| format!("Displaying top {} tags by book count", n),
        "No tags found.",
    );
    Ok(HttpResponse::Ok().json(table))
}

pub async fn related_by_tags(
    state: web::Data<AppState>,
    query: web::Query<TitleQuery>,
) -> ApiResult<HttpResponse> {
    let title = required_title("title", &query.title)?;

    let related = state.graph()?.related_by_tags(title).await?;
    let table = Table::new(
        related,
        |n| format!("{} books with similar tags", n),
        "No books share tags with this book.",
    );
    Ok(HttpResponse::Ok().json(table))
}

pub async fn related_by_author(
    state: web::Data<AppState>,
    query: web::Query<TitleQuery>,
) -> ApiResult<HttpResponse> {
    let title = required_title("title", &query.title)?;

    let related = state.graph()?.related_by_author(title).await?;
    let table = Table::new(
        related,
        |n| format!("{} other works by this author", n),
        "No other works found for this author.",
    );
    Ok(HttpResponse::Ok().json(table))
}
