use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde::Deserialize;

use super::params;
use crate::service::Service;
use crate::song::VersePagination;
use crate::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    limit: Vec<String>,
    offset: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/songs/{id}/verses",
    tag = "songs",
    params(
        ("id" = i64, Path, description = "Song id"),
        ("limit" = Option<i64>, Query, description = "Verses to return, all if not positive"),
        ("offset" = Option<i64>, Query, description = "Number of verses to skip"),
    ),
    responses(
        (status = 200, description = "Window of the song verses", body = Vec<String>),
        (status = 400, description = "Invalid song id", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn handler(
    State(service): State<Service>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<String>>, Error> {
    let request: Request = params::query(query.as_deref());
    let pagination = VersePagination {
        song_id: params::parse(Some(&id)),
        limit: params::parse(params::first(&request.limit)),
        offset: params::parse(params::first(&request.offset)),
    };
    service.get_song_verses(pagination).await.map(Json)
}
