//! HTTP shell: mounts the routers and wraps them in CORS, tracing and body limits.

use crate::docs::docs_routes;
use crate::routes::{api_routes, common_routes};
use crate::settings::Settings;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

/// CORS allowing exactly one origin, or none when unset or unparsable.
/// Other origins get no `Access-Control-Allow-Origin` header at all.
pub fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(AllowOrigin::list([origin])),
        Some(Err(_)) => {
            tracing::warn!("FRONTEND_URL is not a valid origin; cross-origin requests will be refused");
            layer
        }
        None => layer,
    }
}

pub fn build_app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .nest("/api", api_routes(state))
        .fallback_service(ServeDir::new(&settings.public_dir))
        .layer(RequestBodyLimitLayer::new(settings.body_limit))
        .layer(cors_layer(settings.frontend_url.as_deref()))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Bind and serve until ctrl-c.
pub async fn serve(state: AppState, settings: &Settings) -> Result<(), std::io::Error> {
    let app = build_app(state, settings);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
