pub mod get_scouted;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route("/api/get-scouted", post(get_scouted::submit))
}
