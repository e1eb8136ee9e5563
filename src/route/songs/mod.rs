mod add_song;
mod delete_song;
mod get_song_verses;
mod get_songs;
mod params;
mod update_song;

use axum::routing::{get, put};
use axum::Router;
use utoipa::OpenApi;

use crate::song::{Song, SongData};
use crate::state::App;

#[derive(OpenApi)]
#[openapi(
    info(title = "Song library", description = "Song library with lyrics enrichment"),
    servers((url = "/api/v1")),
    paths(
        get_songs::handler,
        get_song_verses::handler,
        add_song::handler,
        update_song::handler,
        delete_song::handler,
    ),
    components(schemas(Song, SongData)),
    tags((name = "songs", description = "Song management"))
)]
pub struct Api;

pub fn router() -> Router<App> {
    Router::new()
        .route("/songs", get(get_songs::handler).post(add_song::handler))
        .route("/songs/{id}", put(update_song::handler).delete(delete_song::handler))
        .route("/songs/{id}/verses", get(get_song_verses::handler))
}
