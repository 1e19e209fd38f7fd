use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::composition::{kyiv_plan, lviv_plan};

pub mod demo;

pub fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging; stdout belongs to the demonstration trace
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homestead=info,homestead_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Homestead demonstration");

    let mut kyiv = kyiv_plan().build()?;
    let mut lviv = lviv_plan()?.build()?;

    let stdout = std::io::stdout();
    demo::demonstrate(&mut stdout.lock(), &mut kyiv, &mut lviv)?;

    tracing::info!("Demonstration finished");
    Ok(())
}
