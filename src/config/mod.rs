mod database;
pub mod log;
mod music_api;
mod server;

pub use database::Database;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use log::Log;
pub use music_api::MusicApi;
use serde::Deserialize;
pub use server::Server;

pub const ENV_PREFIX: &str = "SONG_LIBRARY_";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub music_api: MusicApi,
    pub log: Log,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("database.max_pool_size", Database::DEFAULT_MAX_POOL_SIZE))
            .join(Serialized::default(
                "database.connection_attempts",
                Database::DEFAULT_CONNECTION_ATTEMPTS,
            ))
            .join(Serialized::default(
                "database.connection_timeout",
                Database::DEFAULT_CONNECTION_TIMEOUT,
            ))
            .join(Serialized::default("log", Log::default()))
    }
}
