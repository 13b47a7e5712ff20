use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use goodbooks_config::AppConfig;
use goodbooks_dashboard::{configure_routes, AppState, SERVICE_NAME};
use goodbooks_database::{BookCatalog, Database};
use goodbooks_graph::{BookGraph, Neo4jClient};
use goodbooks_observability::{init_tracing, RequestLogConfig, RequestLogger, TracingConfig};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env first so LOG_FORMAT and RUST_LOG from it reach the subscriber
    dotenv::dotenv().ok();
    init_tracing(TracingConfig::for_service(SERVICE_NAME)).context("Failed to initialise tracing")?;

    let config = AppConfig::from_env();

    tracing::info!("📚 Starting Goodbooks dashboard...");

    let graph: Option<Arc<dyn BookGraph>> = match Neo4jClient::connect(&config.neo4j).await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::error!("Failed to connect to Neo4j: {}", e);
            tracing::warn!("Graph insights will be unavailable");
            None
        }
    };

    let database = Database::connect_lazy(&config.mysql).context("Invalid MySQL configuration")?;
    let catalog: Arc<dyn BookCatalog> = Arc::new(database.catalog());

    let state = web::Data::new(AppState::new(graph, catalog, config.layout));
    let log_config = RequestLogConfig::for_service(SERVICE_NAME)
        .with_slow_threshold(config.server.slow_request_ms);

    let bind = (config.server.host.clone(), config.server.port);
    tracing::info!("🚀 Dashboard listening on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header();

        App::new()
            .app_data(state.clone())
            .wrap(RequestLogger::new(log_config.clone()))
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
