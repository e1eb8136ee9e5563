use diesel_async::pooled_connection::{deadpool, AsyncDieselConnectionManager};
use diesel_async::AsyncPgConnection;

use crate::repository;

type Connection = AsyncDieselConnectionManager<AsyncPgConnection>;
type Pool = deadpool::Pool<AsyncPgConnection>;

#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    pub fn new(config: &crate::config::Database) -> Result<Self, deadpool::BuildError> {
        let pool =
            Pool::builder(Connection::new(&config.url)).max_size(config.max_pool_size).build()?;
        Ok(Self { pool })
    }

    pub async fn get(&self) -> Result<deadpool::Object<AsyncPgConnection>, repository::Error> {
        self.pool.get().await.map_err(|error| {
            tracing::error!(%error, "could not checkout a connection from connection pool");
            repository::Error::CheckoutConnectionPool
        })
    }
}
