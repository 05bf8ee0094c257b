mod app;
mod config;
mod domain;
mod models;
mod ui;

use anyhow::Context;
use gpui::{App, Application};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::models::MoveServiceClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    let client = MoveServiceClient::new(&settings.move_service_url, settings.request_timeout())
        .context("failed to build move service client")?;

    Application::new().run(move |cx: &mut App| {
        if let Err(err) = app::run(cx, settings, client) {
            error!("{err:#}");
            cx.quit();
        }
    });
    Ok(())
}
