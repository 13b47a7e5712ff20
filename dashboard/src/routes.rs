use actix_web::web;

use crate::errors::ApiError;
use crate::handlers::{graph, pages, sql};

/// Query strings that do not deserialize become JSON 400s like every other
/// parameter error
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::InvalidParameter(err.to_string()).into())
}

pub fn configure_graph_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/graph")
            .route("/insight", web::get().to(graph::key_insight))
            .route("/tags", web::get().to(graph::list_tags))
            .route("/tags/top", web::get().to(graph::top_tags))
            .route("/tags/{tag}/books", web::get().to(graph::books_by_tag))
            .route("/books/search", web::get().to(graph::search_titles))
            .route("/books/titles", web::get().to(graph::popular_titles))
            .route("/recommendations", web::get().to(graph::recommendations))
            .route("/network", web::get().to(graph::recommendation_network))
            .route("/network/view", web::get().to(graph::network_view))
            .route("/paths", web::get().to(graph::shortest_path))
            .route("/authors", web::get().to(graph::author_influence))
            .route("/related/tags", web::get().to(graph::related_by_tags))
            .route("/related/author", web::get().to(graph::related_by_author)),
    );
}

pub fn configure_sql_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sql")
            .route("/overview", web::get().to(sql::overview))
            .route("/books/top-rated", web::get().to(sql::top_rated_books))
            .route("/books/most-rated", web::get().to(sql::most_rated_books))
            .route("/books/search", web::get().to(sql::search_books))
            .route("/authors", web::get().to(sql::author_analytics))
            .route("/trends", web::get().to(sql::publication_trends))
            .route("/ratings", web::get().to(sql::rating_analytics)),
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(
            web::scope("/api")
                .configure(configure_graph_routes)
                .configure(configure_sql_routes),
        )
        .route("/", web::get().to(pages::index))
        .route("/health", web::get().to(pages::health_check));
}
