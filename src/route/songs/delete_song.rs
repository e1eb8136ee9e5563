use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::params;
use crate::service::Service;
use crate::Error;

#[utoipa::path(
    delete,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    responses(
        (status = 204, description = "Song deleted"),
        (status = 400, description = "Invalid song id", body = String),
        (status = 404, description = "Song not found", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn handler(
    State(service): State<Service>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    service.delete_song(params::parse(Some(&id))).await?;
    Ok(StatusCode::NO_CONTENT)
}
