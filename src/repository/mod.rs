mod postgres;
pub mod query;

use async_trait::async_trait;
pub use postgres::Postgres;

use crate::song::{Filter, Song, SongData, VersePagination};

/// Which step of a repository operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum Kind {
    #[strum(to_string = "failed to insert song")]
    Insert,
    #[strum(to_string = "failed to update song")]
    Update,
    #[strum(to_string = "failed to delete song")]
    Delete,
    #[strum(to_string = "failed to fetch songs")]
    FetchSongs,
    #[strum(to_string = "failed to fetch song verses")]
    FetchVerses,
    #[strum(to_string = "failed to start transaction")]
    StartTransaction,
    #[strum(to_string = "failed to commit transaction")]
    CommitTransaction,
    #[strum(to_string = "failed to rollback transaction")]
    RollbackTransaction,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("song not found")]
    NotFound,
    #[error("could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error("{kind}: {source}")]
    Database {
        kind: Kind,
        #[source]
        source: diesel::result::Error,
    },
}

impl Error {
    pub fn database(kind: Kind) -> impl FnOnce(diesel::result::Error) -> Self {
        move |source| {
            tracing::error!(%source, operation = <&'static str>::from(kind), "{kind}");
            Self::Database { kind, source }
        }
    }
}

/// Storage of songs. Every write runs inside its own transaction.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn get_songs(&self, filter: &Filter) -> Result<Vec<Song>, Error>;

    /// Returns the requested window of verses of a song, [`Error::NotFound`] if it does not exist.
    async fn get_song_verses(&self, pagination: VersePagination) -> Result<Vec<String>, Error>;

    async fn delete_song(&self, id: i64) -> Result<(), Error>;

    async fn update_song(&self, song: &Song) -> Result<(), Error>;

    /// Inserts a song and returns it with the id assigned by the store.
    async fn add_song(&self, data: &SongData) -> Result<Song, Error>;
}
