use std::time::Duration;

use educe::Educe;
use serde::Deserialize;

#[derive(Deserialize, Educe)]
#[educe(Debug)]
pub struct Database {
    #[educe(Debug(ignore))]
    pub url: String,
    pub max_pool_size: usize,
    /// How many times startup tries to reach the database before giving up.
    pub connection_attempts: u32,
    /// Seconds to wait between two connection attempts.
    pub connection_timeout: u64,
}

impl Database {
    pub const DEFAULT_CONNECTION_ATTEMPTS: u32 = 20;
    pub const DEFAULT_CONNECTION_TIMEOUT: u64 = 1;
    pub const DEFAULT_MAX_POOL_SIZE: usize = 10;

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }
}
