use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::service::Service;
use crate::song::{Song, SongData};
use crate::Error;

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = NewSong)]
pub struct Request {
    group: String,
    title: String,
}

/// The body is decoded as JSON whatever its `Content-Type`.
#[utoipa::path(
    post,
    path = "/songs",
    tag = "songs",
    request_body = Request,
    responses(
        (status = 201, description = "Song enriched and stored", body = Song),
        (status = 400, description = "Malformed body or missing group or title", body = String),
        (status = 500, description = "Enrichment or storage failed", body = String),
    )
)]
pub async fn handler(
    State(service): State<Service>,
    body: Bytes,
) -> Result<(StatusCode, Json<Song>), Error> {
    let Json(Request { group, title }) = Json::from_bytes(&body)?;
    let song = service.add_song(SongData::new(group, title)).await?;
    Ok((StatusCode::CREATED, Json(song)))
}
