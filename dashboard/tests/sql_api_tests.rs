mod common;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;
use std::sync::Arc;

use common::*;
use goodbooks_dashboard::{configure_routes, AppState};

fn data(catalog: Arc<FakeCatalog>) -> web::Data<AppState> {
    web::Data::new(state(None, catalog))
}

#[actix_web::test]
async fn test_overview_metrics() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog)).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/overview").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["book_count"], 10_000);
    assert_eq!(body["metrics"][0]["label"], "Books in Catalog");
    assert_eq!(body["metrics"][1]["display"], "53,424");
    assert_eq!(body["metrics"][2]["display"], "5,976,479");
}

#[actix_web::test]
async fn test_top_rated_defaults_and_ranking() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/books/top-rated").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 3);
    assert_eq!(body["rows"][0]["rank"], 1);
    assert_eq!(body["rows"][2]["rank"], 3);
    assert_eq!(body["rows"][0]["title"], "The Hunger Games (The Hunger Games, #1)");
    assert_eq!(
        body["caption"],
        "Showing 3 books with 500+ ratings | Sorted by average rating"
    );
    assert_eq!(catalog.calls(), vec!["top_rated_books(50, 500)"]);
}

#[actix_web::test]
async fn test_top_rated_empty_message() {
    let catalog = Arc::new(FakeCatalog::default());
    let app = test::init_service(App::new().app_data(data(catalog)).configure(configure_routes)).await;

    let req = test::TestRequest::get()
        .uri("/api/sql/books/top-rated?min_ratings=5000&limit=25")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 0);
    assert_eq!(
        body["message"],
        "No books found with at least 5,000 ratings. Try lowering the threshold."
    );
}

#[actix_web::test]
async fn test_sql_parameters_outside_their_sets() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    for uri in [
        "/api/sql/books/top-rated?min_ratings=40",
        "/api/sql/books/top-rated?min_ratings=525",
        "/api/sql/books/top-rated?limit=30",
        "/api/sql/books/most-rated?limit=10",
        "/api/sql/authors?limit=15",
        "/api/sql/authors?limit=110",
        "/api/sql/books/search?min_rating=5.5",
        "/api/sql/books/search?limit=1000",
        "/api/sql/books/search?limit=many",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }

    assert!(catalog.calls().is_empty());
}

#[actix_web::test]
async fn test_most_rated_ranks_rows() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/books/most-rated?limit=20").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["rows"][1]["rank"], 2);
    assert_eq!(body["caption"], "Top 3 books by review volume");
    assert_eq!(catalog.calls(), vec!["most_rated_books(20)"]);
}

#[actix_web::test]
async fn test_author_table_with_and_without_chart() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/authors?limit=20").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 20);
    assert_eq!(body["rows"][0]["rank"], 1);
    assert_eq!(body["rows"][0]["authors"], "Author 0");
    assert_eq!(body["chart"]["labels"].as_array().unwrap().len(), 15);
    assert_eq!(body["chart"]["kind"], "horizontal_bar");

    let req = test::TestRequest::get().uri("/api/sql/authors?chart=false").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["chart"].is_null());

    assert_eq!(catalog.calls(), vec!["top_authors(20)", "top_authors(50)"]);
}

#[actix_web::test]
async fn test_trends_without_publication_data() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog)).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/trends").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["years"]["message"], "Publication trend data not available.");
    assert!(body["year_chart"].is_null());
    assert_eq!(body["languages"]["count"], 20);
    assert_eq!(body["language_chart"]["labels"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn test_rating_analytics() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/ratings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["distribution"]["count"], 2);
    assert_eq!(body["distribution_chart"]["labels"][0], "3.9");
    assert_eq!(body["contributors"]["rows"][0]["user_id"], 12874);

    let mut calls = catalog.calls();
    calls.sort();
    assert_eq!(calls, vec!["rating_distribution()", "user_rating_stats(20)"]);
}

#[actix_web::test]
async fn test_catalog_search() {
    let catalog = Arc::new(FakeCatalog::sample());
    let app = test::init_service(App::new().app_data(data(catalog.clone())).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/sql/books/search").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["caption"], "Found 3 books | Rating 3.0+");

    let req = test::TestRequest::get()
        .uri("/api/sql/books/search?keyword=potter&min_rating=4.5&limit=50")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);
    assert_eq!(
        body["message"],
        "No books match the specified search criteria. Try adjusting the rating threshold."
    );

    assert_eq!(
        catalog.calls(),
        vec!["search_books(, 3, 100)", "search_books(potter, 4.5, 50)"]
    );
}

#[actix_web::test]
async fn test_mysql_failure_is_bad_gateway() {
    let catalog = Arc::new(FakeCatalog::failing());
    let app = test::init_service(App::new().app_data(data(catalog)).configure(configure_routes)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/sql/overview").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("MySQL error"));

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["mysql"].as_str().unwrap().starts_with("error"));
}
