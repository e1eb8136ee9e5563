use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input data: {0}")]
    InvalidInput(&'static str),
    #[error("Song not found")]
    NotFound,
    #[error(transparent)]
    BadRequest(#[from] JsonRejection),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, status_message) = match &self {
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::BadRequest(rejection) => {
                tracing::warn!(%rejection, "could not extract request body");
                (StatusCode::BAD_REQUEST, "Could not extract request body".into())
            }
            Error::Internal => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        (status_code, status_message).into_response()
    }
}
