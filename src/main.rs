//! Librarium Server - Library Management Record-Keeper
//!
//! REST API server for librarian accounts, book inventory, categories,
//! and borrow/return log operations.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use librarium_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("librarium_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Librarium Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.validation.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Authentication
        .route("/login", post(api::auth::login))
        // Librarians
        .route("/Librarian", post(api::librarians::create_librarian))
        .route("/Librarian", get(api::librarians::list_librarians))
        .route("/Librarian/:id", get(api::librarians::get_librarian))
        .route("/Librarian/:id", delete(api::librarians::delete_librarian))
        // Books
        .route("/Books", post(api::books::create_book))
        .route("/Books", get(api::books::list_books))
        .route("/Books/Category/:category_id", get(api::books::list_books_by_category))
        .route("/Books/:isbn", get(api::books::get_book))
        .route("/Books/:isbn", put(api::books::update_book))
        .route("/Books/:isbn", delete(api::books::delete_book))
        // Categories
        .route("/Category/", post(api::categories::create_category))
        .route("/Category/", get(api::categories::list_categories))
        .route("/Category/:category_id", put(api::categories::update_category))
        // Log operations
        .route("/Log_Operations", post(api::log_operations::create_log_operation))
        .route("/Log_Operations", get(api::log_operations::list_log_operations))
        .route("/Log_Operations/:log_id", get(api::log_operations::get_log_operation))
        .route("/Log_Operations/:log_id", put(api::log_operations::update_log_operation))
        .route("/Log_Operations/:log_id", delete(api::log_operations::delete_log_operation))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
