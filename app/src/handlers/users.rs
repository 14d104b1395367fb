use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    core::state::AppState, models::user::Model as User, repos::users::UsersRepo,
    utils::response::APIError,
};

pub async fn get_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, APIError> {
    let users = UsersRepo::new(state.database.clone()).get_all().await?;

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<User>, APIError> {
    let user = UsersRepo::new(state.database.clone()).get(user_id).await?;

    Ok(Json(user))
}
