use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::projects::{
        create_project, delete_project, get_project, get_projects, update_project,
    },
};

pub fn project_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_projects).post(create_project))
        .route(
            "/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
}
