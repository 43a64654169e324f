/// The scalar gateway error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dynamic schema could not be assembled
    #[error("building the schema: {0}")]
    SchemaValidationError(String),
    /// The CORS section cannot be turned into a layer
    #[error("invalid CORS configuration: {0}")]
    InvalidCorsConfig(String),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
