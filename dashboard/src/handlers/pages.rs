use actix_web::{web, HttpResponse, Result};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Liveness plus the state of both backends. Always 200 while the process runs.
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let neo4j = if state.graph_connected() { "connected" } else { "unavailable" };
    let mysql = match state.catalog().ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "MySQL health probe failed");
            format!("error: {}", e)
        }
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "goodbooks-dashboard",
        "neo4j": neo4j,
        "mysql": mysql,
    })))
}
