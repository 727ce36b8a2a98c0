use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
};
use configuration::{ServerSettings, Settings};
use database::DbRepository;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod envelope;
pub mod error;
pub mod handlers;

use handlers::{candidates, parties, voters};

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
}

/// Builds the full application router: the resource routes nested under
/// `server.api_root`, an empty 404 for anything else (unknown paths and
/// unhandled methods on known paths alike), and the middleware stack.
pub fn build_router(state: Arc<AppState>, server: &ServerSettings) -> Router {
    let api = Router::new()
        .route("/health", get(|| async { "OK" }).fallback(not_found))
        .route("/candidates", get(candidates::list_candidates).fallback(not_found))
        .route("/candidate", post(candidates::create_candidate).fallback(not_found))
        .route(
            "/candidate/:id",
            get(candidates::get_candidate)
                .put(candidates::update_candidate)
                .delete(candidates::delete_candidate)
                .fallback(not_found),
        )
        .route("/voters", get(voters::list_voters).fallback(not_found))
        .route("/voter", post(voters::create_voter).fallback(not_found))
        .route(
            "/voter/:id",
            get(voters::get_voter)
                .put(voters::update_voter)
                .delete(voters::delete_voter)
                .fallback(not_found),
        )
        .route("/parties", get(parties::list_parties).fallback(not_found))
        .route(
            "/party/:id",
            get(parties::get_party)
                .delete(parties::delete_party)
                .fallback(not_found),
        )
        .with_state(state);

    // Nesting at "/" is not allowed, so an empty root serves the routes directly.
    let root = server.api_root.trim_end_matches('/');
    let app = if root.is_empty() {
        api
    } else {
        Router::new().nest(root, api)
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    app.fallback(not_found)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// The main function to configure and run the web server.
///
/// Tracing must already be initialized by the caller.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    if settings.database.run_migrations {
        database::run_migrations(&db_pool).await?;
    }
    let db_repo = DbRepository::new(db_pool.clone());

    let app_state = Arc::new(AppState { db_repo });
    let app = build_router(app_state, &settings.server);

    let addr = settings.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(api_root = %settings.server.api_root, "Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
