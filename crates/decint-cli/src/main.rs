//! decint — arbitrary-precision decimal integer calculator.

mod app;
mod config;

use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    app::run(&config)
}
