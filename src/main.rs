use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tidings::app::AppContext;
use tidings::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stderr, errors only by default: anything else would land on the UI
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "tidings failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    for (action, binding) in config.keybindings.invalid_bindings() {
        tracing::warn!(action, binding = %binding, "ignoring unparseable keybinding");
    }

    let ctx = AppContext::new(config).context("creating HTTP client")?;

    let items = ctx
        .aggregator
        .aggregate(ctx.config.feeds.urls())
        .await
        .context("feed parsing error")?;
    tracing::info!(count = items.len(), "feeds loaded");

    tidings::tui::run(&ctx, items).context("running terminal UI")?;
    Ok(())
}
