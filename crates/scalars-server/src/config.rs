mod cors;

use std::{net::SocketAddr, time::Duration};

pub use cors::*;

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration of the scalar gateway, usually read from a TOML file.
pub struct Config {
    /// Server bind settings
    pub network: NetworkConfig,
    /// GraphQL endpoint settings
    pub graph: GraphConfig,
    /// Request handling settings
    pub gateway: GatewayConfig,
    /// Health check endpoint settings
    pub health: HealthConfig,
    /// Cross-origin resource sharing settings
    pub cors: Option<CorsConfig>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: Option<SocketAddr>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Path of the GraphQL endpoint. Default: `/graphql`.
    pub path: String,
    /// Whether introspection queries are answered. Default: true.
    pub introspection: bool,
    /// Serve the GraphiQL IDE on GET requests to the endpoint. Default: true.
    pub graphiql: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            introspection: true,
            graphiql: true,
        }
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Timeout for a whole request. Default: 30 seconds.
    #[serde(deserialize_with = "duration_str::deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_string(),
        }
    }
}
