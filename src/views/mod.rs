pub mod get_scouted;
pub mod pages;
pub mod talent;

use axum::routing::get;
use axum::Router;
use chrono::Datelike;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .route("/talent/{division}", get(talent::show))
        .route(
            "/get-scouted",
            get(get_scouted::page).post(get_scouted::submit),
        )
}

/// Year shown in the footer copyright line.
fn current_year() -> i32 {
    chrono::Local::now().year()
}
