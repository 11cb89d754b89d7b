use axum::{Router, http::header, routing::get};
use social_group::api::handlers::{AppState, api_routes};
use social_group::api::openapi::ApiDoc;
use social_group::config::CONFIG;
use social_group::core::models::Action;
use social_group::demo::{DemoContent, DemoContentParser};
use social_group::infrastructure::{
    access::in_memory::GrantTable, formatting::chrono_formatter::ChronoDateFormatter,
    routing::path_links::PathLinkBuilder, storage::in_memory::InMemoryStorage,
    translation::catalog::CatalogTranslator,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();

    let storage = InMemoryStorage::new();
    if let Some(file) = &CONFIG.demo_content_file {
        let parser = DemoContentParser::new(&CONFIG.demo_content_dir);
        let content = DemoContent::from_value(parser.parse_file(file)?)?;
        content.seed(&storage).await?;
    } else {
        warn!("DEMO_CONTENT_FILE not set, starting with no groups");
    }

    // Site administrators manage group content; everybody may view member profiles.
    let grants = GrantTable::new();
    grants.grant_type("admin", "group_content", Action::Update).await;
    grants.grant_type("admin", "group_content", Action::Delete).await;
    grants.grant_type("admin", "user", Action::View).await;
    grants.grant_type("anonymous", "user", Action::View).await;

    let state = Arc::new(AppState {
        storage,
        date_formatter: ChronoDateFormatter::new(&CONFIG.long_date_format),
        grants,
        links: PathLinkBuilder::new(&CONFIG.base_url)?,
        translator: CatalogTranslator::new(),
    });

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
