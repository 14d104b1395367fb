use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    core::state::AppState,
    models::project::Model as Project,
    repos::projects::{ProjectsRepo, UpdateProject},
    utils::response::{APIError, SuccessResponse},
};

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub key: String,
    pub description: Option<String>,
}

pub async fn get_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, APIError> {
    let projects = ProjectsRepo::new(state.database.clone()).get_all().await?;

    Ok(Json(projects))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
) -> Result<Json<Project>, APIError> {
    let project = ProjectsRepo::new(state.database.clone())
        .get(project_id)
        .await?;

    Ok(Json(project))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProject>,
) -> Result<Json<Project>, APIError> {
    let repo = ProjectsRepo::new(state.database.clone());

    if repo.get_by_key(&payload.key).await?.is_some() {
        error!("Project key {} already exists", payload.key);
        return Err(APIError::Conflict(format!(
            "Project key '{}' already exists",
            payload.key
        )));
    }

    let project = repo
        .create(payload.name, payload.key, payload.description)
        .await?;
    info!("Project created with id: {}", project.id);

    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProject>,
) -> Result<Json<Project>, APIError> {
    let project = ProjectsRepo::new(state.database.clone())
        .update(project_id, payload)
        .await?;

    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
) -> Result<Json<SuccessResponse>, APIError> {
    ProjectsRepo::new(state.database.clone())
        .delete(project_id)
        .await?;
    info!("Project {} deleted", project_id);

    Ok(Json(SuccessResponse { success: true }))
}
