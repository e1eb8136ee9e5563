use async_trait::async_trait;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::{AnsiTransactionManager, AsyncPgConnection, RunQueryDsl, TransactionManager};

use super::{query, Error, Kind, Repository};
use crate::database::Database;
use crate::orm::songs;
use crate::song::{self, verse, Filter, Song, SongData, VersePagination};

#[derive(Clone)]
pub struct Postgres {
    database: Database,
}

impl Postgres {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

async fn begin(connection: &mut AsyncPgConnection) -> Result<(), Error> {
    AnsiTransactionManager::begin_transaction(connection)
        .await
        .map_err(Error::database(Kind::StartTransaction))
}

/// Commits when `result` is a success and rolls back otherwise.
async fn finish<T>(
    connection: &mut AsyncPgConnection,
    result: Result<T, Error>,
) -> Result<T, Error> {
    match result {
        Ok(value) => {
            AnsiTransactionManager::commit_transaction(connection)
                .await
                .map_err(Error::database(Kind::CommitTransaction))?;
            Ok(value)
        }
        Err(error) => {
            AnsiTransactionManager::rollback_transaction(connection)
                .await
                .map_err(Error::database(Kind::RollbackTransaction))?;
            Err(error)
        }
    }
}

fn affected(rows: usize, id: i64) -> Result<(), Error> {
    if rows == 0 {
        tracing::warn!(song_id = id, "song not found");
        Err(Error::NotFound)
    } else {
        Ok(())
    }
}

#[async_trait]
impl Repository for Postgres {
    #[tracing::instrument(skip(self))]
    async fn get_songs(&self, filter: &Filter) -> Result<Vec<Song>, Error> {
        let songs = query::filter(filter)
            .select(songs::Song::as_select())
            .get_results(&mut self.database.get().await?)
            .await
            .map_err(Error::database(Kind::FetchSongs))?;

        tracing::debug!(count = songs.len(), "songs fetched");
        Ok(songs.into_iter().map(song::Song::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn get_song_verses(&self, pagination: VersePagination) -> Result<Vec<String>, Error> {
        let text = songs::table
            .filter(songs::id.eq(pagination.song_id))
            .select(songs::text)
            .first::<String>(&mut self.database.get().await?)
            .await
            .optional()
            .map_err(Error::database(Kind::FetchVerses))?
            .ok_or_else(|| {
                tracing::warn!(song_id = pagination.song_id, "song not found");
                Error::NotFound
            })?;

        let verses = verse::paginate(&text, pagination.limit, pagination.offset);
        tracing::debug!(count = verses.len(), "song verses fetched");
        Ok(verses)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_song(&self, id: i64) -> Result<(), Error> {
        let mut connection = self.database.get().await?;
        begin(&mut connection).await?;

        let result = diesel::delete(songs::table.filter(songs::id.eq(id)))
            .execute(&mut connection)
            .await
            .map_err(Error::database(Kind::Delete))
            .and_then(|rows| affected(rows, id));

        finish(&mut connection, result).await
    }

    #[tracing::instrument(skip_all, fields(song_id = song.id))]
    async fn update_song(&self, song: &Song) -> Result<(), Error> {
        let mut connection = self.database.get().await?;
        begin(&mut connection).await?;

        let result = diesel::update(songs::table.filter(songs::id.eq(song.id)))
            .set(songs::Data::from(&song.data))
            .execute(&mut connection)
            .await
            .map_err(Error::database(Kind::Update))
            .and_then(|rows| affected(rows, song.id));

        finish(&mut connection, result).await
    }

    #[tracing::instrument(skip_all, fields(group = %data.group, title = %data.title))]
    async fn add_song(&self, data: &SongData) -> Result<Song, Error> {
        let mut connection = self.database.get().await?;
        begin(&mut connection).await?;

        let result = diesel::insert_into(songs::table)
            .values(songs::Data::from(data))
            .returning(songs::Song::as_returning())
            .get_result(&mut connection)
            .await
            .map(song::Song::from)
            .map_err(Error::database(Kind::Insert));

        let song = finish(&mut connection, result).await?;
        tracing::debug!(song_id = song.id, "song added");
        Ok(song)
    }
}
