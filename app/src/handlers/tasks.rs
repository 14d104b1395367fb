use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::{
    core::state::AppState,
    models::{
        activity_log::Model as ActivityLog, comment::Model as Comment, task::Model as Task,
    },
    repos::{
        activity_logs::ActivityLogsRepo,
        comments::CommentsRepo,
        tasks::{TaskFilter, TasksRepo},
    },
    services::tasks::{self, AssignTask, CreateComment, CreateTask, MoveTask, UpdateTask},
    utils::response::{APIError, SuccessResponse},
};

pub async fn get_tasks(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TaskFilter>,
) -> Result<Json<Vec<Task>>, APIError> {
    let tasks = TasksRepo::new(state.database.clone())
        .get_filtered(filter)
        .await?;

    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<Task>, APIError> {
    let task = TasksRepo::new(state.database.clone()).get(task_id).await?;

    Ok(Json(task))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTask>,
) -> Result<Json<Task>, APIError> {
    let task = tasks::create_task(&state.database, payload).await?;
    info!("Task created with id: {}", task.id);

    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateTask>,
) -> Result<Json<Task>, APIError> {
    let task = tasks::update_task(&state.database, task_id, payload).await?;

    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<SuccessResponse>, APIError> {
    TasksRepo::new(state.database.clone()).delete(task_id).await?;
    info!("Task {} deleted", task_id);

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn move_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(payload): Json<MoveTask>,
) -> Result<Json<Task>, APIError> {
    let task = tasks::move_task(&state.database, task_id, payload).await?;

    Ok(Json(task))
}

pub async fn assign_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(payload): Json<AssignTask>,
) -> Result<Json<Task>, APIError> {
    let task = tasks::assign_task(&state.database, task_id, payload.user_id).await?;

    Ok(Json(task))
}

pub async fn get_task_comments(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<Vec<Comment>>, APIError> {
    let comments = CommentsRepo::new(state.database.clone())
        .get_all_for_task(task_id)
        .await?;

    Ok(Json(comments))
}

pub async fn add_task_comment(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(payload): Json<CreateComment>,
) -> Result<Json<Comment>, APIError> {
    let comment = tasks::add_comment(&state.database, task_id, payload).await?;

    Ok(Json(comment))
}

pub async fn get_task_activity(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<Vec<ActivityLog>>, APIError> {
    let activity = ActivityLogsRepo::new(state.database.clone())
        .get_all_for_task(task_id)
        .await?;

    Ok(Json(activity))
}
