use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    core::state::AppState,
    models::sprint::{Model as Sprint, SprintStatus},
    repos::sprints::{CreateSprint, SprintsRepo, UpdateSprint},
    utils::response::APIError,
};

#[derive(Debug, Deserialize)]
pub struct SprintFilter {
    pub project_id: Option<i32>,
}

pub async fn get_sprints(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SprintFilter>,
) -> Result<Json<Vec<Sprint>>, APIError> {
    let sprints = SprintsRepo::new(state.database.clone())
        .get_all(filter.project_id)
        .await?;

    Ok(Json(sprints))
}

pub async fn get_sprint(
    State(state): State<Arc<AppState>>,
    Path(sprint_id): Path<i32>,
) -> Result<Json<Sprint>, APIError> {
    let sprint = SprintsRepo::new(state.database.clone())
        .get(sprint_id)
        .await?;

    Ok(Json(sprint))
}

pub async fn create_sprint(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSprint>,
) -> Result<Json<Sprint>, APIError> {
    let sprint = SprintsRepo::new(state.database.clone())
        .create(payload)
        .await?;

    Ok(Json(sprint))
}

pub async fn update_sprint(
    State(state): State<Arc<AppState>>,
    Path(sprint_id): Path<i32>,
    Json(payload): Json<UpdateSprint>,
) -> Result<Json<Sprint>, APIError> {
    let sprint = SprintsRepo::new(state.database.clone())
        .update(sprint_id, payload)
        .await?;

    Ok(Json(sprint))
}

pub async fn start_sprint(
    State(state): State<Arc<AppState>>,
    Path(sprint_id): Path<i32>,
) -> Result<Json<Sprint>, APIError> {
    let sprint = SprintsRepo::new(state.database.clone())
        .set_status(sprint_id, SprintStatus::Active)
        .await?;

    Ok(Json(sprint))
}

pub async fn complete_sprint(
    State(state): State<Arc<AppState>>,
    Path(sprint_id): Path<i32>,
) -> Result<Json<Sprint>, APIError> {
    let sprint = SprintsRepo::new(state.database.clone())
        .set_status(sprint_id, SprintStatus::Completed)
        .await?;

    Ok(Json(sprint))
}
