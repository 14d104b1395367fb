use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub enum APIError {
    NotFound(String),
    Conflict(String),
    BadRequest(String),
    InternalServerError(String),
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let (status, details) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(serde_json::json!({"status": "error", "details": details})),
        )
            .into_response()
    }
}

impl From<DbErr> for APIError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => match other.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
                Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::BadRequest(msg),
                _ => Self::InternalServerError(other.to_string()),
            },
        }
    }
}
