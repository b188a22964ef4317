//! Process configuration, parsed once at startup and passed explicitly.
//!
//! Every value can come from the command line or the environment. The
//! struct is constructed in `main` and injected into the modules that need
//! it; nothing in the server reads process-wide state after startup.

use std::time::Duration;

use clap::Parser;

use crate::network::NetworkConfig;

/// Waypoint server configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waypoint-server",
    about = "Destination record service with mutation events"
)]
pub struct ServerConfig {
    /// Bind address.
    #[arg(long, env = "WAYPOINT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (0 = OS-assigned).
    #[arg(long, env = "WAYPOINT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Logical database name, reported at startup.
    #[arg(long, env = "WAYPOINT_DATABASE", default_value = "clc-project")]
    pub database: String,

    /// Destination collection name.
    #[arg(long, env = "WAYPOINT_COLLECTION", default_value = "destinations")]
    pub collection: String,

    /// Outbound queue name for mutation events.
    #[arg(long, env = "WAYPOINT_QUEUE", default_value = "destination_crud_events")]
    pub queue: String,

    /// Bounded capacity of the in-process event channel.
    #[arg(long, env = "WAYPOINT_EVENT_CAPACITY", default_value_t = 256)]
    pub event_capacity: usize,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Allowed CORS origin; repeatable. "*" allows any origin.
    #[arg(long = "cors-origin", default_value = "*")]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Network slice of the configuration.
    #[must_use]
    pub fn network(&self) -> NetworkConfig {
        NetworkConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_definition_is_consistent() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_deployed_names() {
        let config = ServerConfig::parse_from(["waypoint-server"]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, "clc-project");
        assert_eq!(config.collection, "destinations");
        assert_eq!(config.queue, "destination_crud_events");
        assert_eq!(config.event_capacity, 256);
        assert_eq!(config.cors_origins, vec!["*"]);
    }

    #[test]
    fn network_slice_carries_bind_and_timeout() {
        let config = ServerConfig::parse_from([
            "waypoint-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--request-timeout-secs",
            "5",
        ]);

        let network = config.network();
        assert_eq!(network.host, "127.0.0.1");
        assert_eq!(network.port, 9000);
        assert_eq!(network.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn cors_origins_are_repeatable() {
        let config = ServerConfig::parse_from([
            "waypoint-server",
            "--cors-origin",
            "http://localhost:3000",
            "--cors-origin",
            "https://example.com",
        ]);

        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://example.com"]
        );
    }
}
