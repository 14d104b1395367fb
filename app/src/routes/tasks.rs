use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::{
    core::state::AppState,
    handlers::tasks::{
        add_task_comment, assign_task, create_task, delete_task, get_task, get_task_activity,
        get_task_comments, get_tasks, move_task, update_task,
    },
};

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_tasks).post(create_task))
        .route(
            "/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/:task_id/move", put(move_task))
        .route("/:task_id/assign", put(assign_task))
        .route(
            "/:task_id/comments",
            get(get_task_comments).post(add_task_comment),
        )
        .route("/:task_id/activity", get(get_task_activity))
}
