use std::sync::Arc;

use crate::dispatch::NotificationDispatcher;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub dispatcher: NotificationDispatcher,
}
