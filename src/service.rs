use std::sync::Arc;

use crate::integration::Enricher;
use crate::repository::{self, Repository};
use crate::song::{Filter, Song, SongData, VersePagination};
use crate::Error;

/// Validates requests, enriches new songs and collapses storage failures into [`Error`].
#[derive(Clone)]
pub struct Service {
    repository: Arc<dyn Repository>,
    enricher: Arc<dyn Enricher>,
}

fn check_id(id: i64) -> Result<(), Error> {
    if id > 0 {
        Ok(())
    } else {
        tracing::warn!(song_id = id, "invalid song id");
        Err(Error::InvalidInput("song id must be positive"))
    }
}

fn collapse(error: repository::Error) -> Error {
    match error {
        repository::Error::NotFound => Error::NotFound,
        _ => Error::Internal,
    }
}

impl Service {
    pub fn new(repository: Arc<dyn Repository>, enricher: Arc<dyn Enricher>) -> Self {
        Self { repository, enricher }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_songs(&self, filter: &Filter) -> Result<Vec<Song>, Error> {
        let songs = self.repository.get_songs(filter).await.map_err(|error| {
            tracing::error!(%error, "could not fetch songs");
            Error::Internal
        })?;
        tracing::info!(count = songs.len(), "songs fetched");
        Ok(songs)
    }

    /// Every repository failure, a missing song included, is reported as [`Error::Internal`].
    #[tracing::instrument(skip(self))]
    pub async fn get_song_verses(
        &self,
        pagination: VersePagination,
    ) -> Result<Vec<String>, Error> {
        check_id(pagination.song_id)?;

        let verses = self.repository.get_song_verses(pagination).await.map_err(|error| {
            tracing::error!(%error, "could not fetch song verses");
            Error::Internal
        })?;
        tracing::info!(count = verses.len(), "song verses fetched");
        Ok(verses)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_song(&self, id: i64) -> Result<(), Error> {
        check_id(id)?;

        self.repository.delete_song(id).await.map_err(|error| {
            tracing::error!(%error, "could not delete song");
            collapse(error)
        })?;
        tracing::info!("song deleted");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(song_id = song.id))]
    pub async fn update_song(&self, song: Song) -> Result<Song, Error> {
        check_id(song.id)?;

        self.repository.update_song(&song).await.map_err(|error| {
            tracing::error!(%error, "could not update song");
            collapse(error)
        })?;
        tracing::info!("song updated");
        Ok(song)
    }

    /// Fetches the song details from the enricher and stores the result.
    ///
    /// Nothing is stored when enrichment fails.
    #[tracing::instrument(skip_all, fields(group = %data.group, title = %data.title))]
    pub async fn add_song(&self, data: SongData) -> Result<Song, Error> {
        let detail = self.enricher.fetch(&data.group, &data.title).await.map_err(|error| {
            tracing::error!(%error, "could not enrich song");
            Error::Internal
        })?;

        let song = self.repository.add_song(&data.enrich(detail)).await.map_err(|error| {
            tracing::error!(%error, "could not add song");
            Error::Internal
        })?;
        tracing::info!(song_id = song.id, "song added");
        Ok(song)
    }
}
