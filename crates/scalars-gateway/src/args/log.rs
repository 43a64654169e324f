use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the gateway crates
    Error,
    /// Warnings and errors from the gateway crates
    Warn,
    /// Info, warning and error messages from the gateway crates
    #[default]
    Info,
    /// Debug, info, warning and error messages from the gateway crates, including scalar coercion failures
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "scalars_gateway=error,scalars_server=error,graphql_scalars=error,off",
            LogLevel::Warn => "scalars_gateway=warn,scalars_server=warn,graphql_scalars=warn,off",
            LogLevel::Info => "scalars_gateway=info,scalars_server=info,graphql_scalars=info,tower_http=info,off",
            LogLevel::Debug => {
                "scalars_gateway=debug,scalars_server=debug,graphql_scalars=debug,tower_http=debug,off"
            }
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogStyle {
    /// Standard text
    Text,
    /// JSON objects
    Json,
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        })
    }
}
