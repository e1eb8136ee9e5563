use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Server {
    #[educe(Default(expression = [127u8, 0u8, 0u8, 1u8].into()))]
    pub host: IpAddr,
    #[educe(Default(expression = 3000))]
    pub port: u16,
    /// Seconds given to in-flight requests once a shutdown signal arrives.
    #[educe(Default(expression = 10))]
    pub shutdown_grace_period: u64,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn shutdown_grace_period(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_period)
    }
}
