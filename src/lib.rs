pub mod application;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod email;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::dispatch::{DispatchSettings, NotificationDispatcher};
use crate::email::Mailer;
use crate::error::AppError;
use crate::state::{AppState, SharedState};

/// Build the site router. The mailer is injected so tests can substitute it.
///
/// Oversized bodies surface as extractor rejections, so each handler answers
/// them in its own format.
pub fn build_app(config: &Config, mailer: Arc<dyn Mailer>) -> Router {
    let dispatcher = NotificationDispatcher::new(mailer, DispatchSettings::from_config(&config.mail));
    let state: SharedState = Arc::new(AppState { dispatcher });

    let images = std::path::Path::new(&config.static_dir).join("images");

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/images", ServeDir::new(images))
        .route("/health", axum::routing::get(health))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
