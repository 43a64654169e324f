#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::{crate_version, Parser};
use mimalloc::MiMalloc;
use tokio::runtime;

use args::Args;
use scalars_server::ServerConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod telemetry;

const THREAD_NAME: &str = "scalars-gateway";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        telemetry::init(&args)?;

        let crate_version = crate_version!();
        tracing::info!("Scalars Gateway {crate_version}");

        let config = ServerConfig {
            listen_addr: args.listen_address,
            config,
        };

        scalars_server::serve(config).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
