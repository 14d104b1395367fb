use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::sprints::{
        complete_sprint, create_sprint, get_sprint, get_sprints, start_sprint, update_sprint,
    },
};

pub fn sprint_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_sprints).post(create_sprint))
        .route("/:sprint_id", get(get_sprint).put(update_sprint))
        .route("/:sprint_id/start", post(start_sprint))
        .route("/:sprint_id/complete", post(complete_sprint))
}
