use std::time::Duration;

use color_eyre::eyre::eyre;
use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::config;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

type Wrapper = AsyncConnectionWrapper<AsyncPgConnection>;

fn establish(url: &str, attempts: u32, timeout: Duration) -> Result<Wrapper, color_eyre::Report> {
    let mut attempts_left = attempts.max(1);
    loop {
        match Wrapper::establish(url) {
            Ok(connection) => return Ok(connection),
            Err(error) if attempts_left > 1 => {
                attempts_left -= 1;
                tracing::warn!(%error, attempts_left, "could not connect to the database");
                std::thread::sleep(timeout);
            }
            Err(error) => return Err(error.into()),
        }
    }
}

/// Waits for the database to accept connections and applies every pending migration.
pub async fn run(config: &config::Database) -> Result<(), color_eyre::Report> {
    let url = config.url.clone();
    let attempts = config.connection_attempts;
    let timeout = config.connection_timeout();

    tokio::task::spawn_blocking(move || {
        let mut connection = establish(&url, attempts, timeout)?;

        let pending = connection.pending_migrations(MIGRATIONS).map_err(|e| eyre!(e))?;
        if pending.is_empty() {
            tracing::info!("no pending migration");
        }
        for migration in pending {
            tracing::info!(pending_migration =% migration.name());
            connection.run_migration(&migration).map_err(|e| eyre!(e))?;
        }
        tracing::info!("migration done");
        Ok(())
    })
    .await?
}
