pub mod projects;
pub mod sprints;
pub mod tasks;
pub mod users;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    core::state::AppState,
    routes::{
        projects::project_routes, sprints::sprint_routes, tasks::task_routes, users::user_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    let cors = cors_layer(&state);

    let api_routes = Router::new()
        .nest("/projects", project_routes())
        .nest("/sprints", sprint_routes())
        .nest("/tasks", task_routes())
        .nest("/users", user_routes());

    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes)
        .fallback(global_error_handler)
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Taskboard API is running"}))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
