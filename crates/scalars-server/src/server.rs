use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use async_graphql::{dynamic::Schema, http::GraphiQLSource};
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post_service},
    Json, Router,
};
use graphql_scalars::ScalarRegistry;
use tokio::signal;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::Config;

const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);
const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(30);

/// Start parameter for the gateway.
pub struct ServerConfig {
    /// The GraphQL endpoint listen address, overriding the one of the configuration.
    pub listen_addr: Option<SocketAddr>,
    /// The gateway configuration.
    pub config: Config,
}

/// Starts the server and listens for incoming requests until a termination signal arrives.
pub async fn serve(ServerConfig { listen_addr, config }: ServerConfig) -> crate::Result<()> {
    let registry = Arc::new(ScalarRegistry::builtin());
    tracing::debug!("Registered scalars: {}", registry.names().collect::<Vec<_>>().join(", "));

    let schema = crate::schema::build(registry, &config.graph)?;

    let addr = listen_addr
        .or(config.network.listen_address)
        .unwrap_or(DEFAULT_LISTEN_ADDRESS);

    let path = config.graph.path.clone();
    let app = router(schema, config)?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(crate::Error::Server)?;
    tracing::info!("GraphQL endpoint exposed at http://{addr}{path}");

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown())
        .await
        .map_err(crate::Error::Server)
}

/// The HTTP routes of the gateway: the GraphQL endpoint, GraphiQL and the health check.
pub fn router(schema: Schema, config: Config) -> crate::Result<Router> {
    let path = config.graph.path.as_str();

    let endpoint = if config.graph.graphiql {
        let page = GraphiQLSource::build().endpoint(path).finish();
        get(move || async move { Html(page) }).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema.clone())).get_service(GraphQL::new(schema))
    };

    let mut router = Router::new().route(path, endpoint);

    if config.health.enabled {
        router = router.route(&config.health.path, get(health));
    }

    let cors = match config.cors {
        Some(cors_config) => cors_config.into_layer()?,
        None => CorsLayer::permissive(),
    };

    Ok(router
        .layer(TimeoutLayer::new(config.gateway.timeout.unwrap_or(DEFAULT_GATEWAY_TIMEOUT)))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Waits for a termination signal (Ctrl+C or SIGTERM) so in-flight requests can complete.
async fn graceful_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
