// Mapping of domain errors onto HTTP responses
use crate::domain::idea_board::IdeaError;
use crate::domain::series::SeriesError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Idea(#[from] IdeaError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Series(SeriesError::OutOfRange { .. }) => StatusCode::NOT_FOUND,
            ApiError::Series(SeriesError::InvalidFormat { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Series(SeriesError::UnknownColumn(_) | SeriesError::UnknownMode(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Idea(IdeaError::Empty) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Idea(IdeaError::OutOfRange { .. }) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
