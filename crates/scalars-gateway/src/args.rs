use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use scalars_server::Config;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

const DEFAULT_CONFIG_PATH: &str = "./scalars.toml";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "The Scalars Gateway", version)]
/// A GraphQL gateway exposing the Map, JSON, Object, Long and calendar scalars
pub(crate) struct Args {
    /// IP address on which the server will listen for incoming connections. Defaults to 127.0.0.1:4000.
    #[arg(short, long)]
    pub listen_address: Option<SocketAddr>,
    /// Path to the TOML configuration file. Defaults to ./scalars.toml when that file exists.
    #[arg(long, short, env = "SCALARS_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "SCALARS_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "SCALARS_LOG_STYLE", default_value_t = LogStyle::Text)]
    pub log_style: LogStyle,
}

impl Args {
    /// Loads the configuration file. Without an explicit path, a missing
    /// `./scalars.toml` yields the default configuration.
    pub fn config(&self) -> anyhow::Result<Config> {
        match self.config.as_deref() {
            Some(path) => load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => load(Path::new(DEFAULT_CONFIG_PATH)),
            None => Ok(Config::default()),
        }
    }

    pub fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer();

        match self.log_style {
            LogStyle::Text if atty::is(atty::Stream::Stdout) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

fn load(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path).with_context(|| format!("error loading config file {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
}
