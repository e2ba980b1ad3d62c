use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::get,
    BoxError, Router,
};
use sqlx::postgres::PgPoolOptions;
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{env::Envy, errors::DefaultApiError},
    transactions::{
        service::{TransactionService, TransactionsService},
        store::postgres::PgTransactionStore,
    },
};

mod app;
mod transactions;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub struct AppState {
    pub transactions: Arc<dyn TransactionService>,
    pub envy: Arc<Envy>,
}

pub fn router(state: AppState) -> Router {
    let requests_per_second = state.envy.requests_per_second();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // transactions
        .route(
            "/v1/transactions",
            get(transactions::controller::get_transactions)
                .post(transactions::controller::create_transaction),
        )
        .fallback(app::controller::fallback)
        .with_state(Arc::new(state))
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err, "middleware failure");
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    requests_per_second,
                    Duration::from_secs(1),
                )),
        )
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections())
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!(app_env = %envy.app_env, "connected to db");

    let store = Arc::new(PgTransactionStore::new(pool));
    let port = envy.port();

    let state = AppState {
        transactions: Arc::new(TransactionsService::new(store)),
        envy: Arc::new(envy),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
    }

    tracing::info!("shutting down");
}
