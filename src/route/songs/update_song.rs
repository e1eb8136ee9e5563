use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use super::params;
use crate::service::Service;
use crate::song::{Song, SongData};
use crate::Error;

/// Replaces every field of a song. Fields missing from the body become empty and a body `id` is
/// ignored in favour of the path.
#[utoipa::path(
    put,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song id")),
    request_body = SongData,
    responses(
        (status = 200, description = "Song as stored", body = Song),
        (status = 400, description = "Invalid song id or malformed body", body = String),
        (status = 404, description = "Song not found", body = String),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn handler(
    State(service): State<Service>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Song>, Error> {
    let Json(data) = Json::<SongData>::from_bytes(&body)?;
    service.update_song(Song { id: params::parse(Some(&id)), data }).await.map(Json)
}
