use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use spr_config::SprConfig;
use spr_db::seed::seed_sample_data;
use spr_db::service::SprService;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("spr error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = SprConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply(&mut config);

    let svc = SprService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;
    tracing::info!(path = %config.database.path, "database ready");

    if config.database.seed_sample_data {
        seed_sample_data(&svc)
            .await
            .context("failed to seed sample data")?;
    }

    let app = spr_server::build_app(Arc::new(svc), &config);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SPR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
