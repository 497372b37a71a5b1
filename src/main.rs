use std::{env, net::SocketAddr};

#[macro_use]
extern crate lazy_static;

use tracing_subscriber::EnvFilter;

use crate::app::{
    envy::{non_empty, Envy},
    router::router,
    state::provide_state,
    util::janitor,
};

mod app;
mod generations;
mod generators;
mod images;
mod prompts;
#[cfg(test)]
mod test_util;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        tracing::error!(%e, "failed to start server");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let envy = Envy::from_env()?;
    let port = envy.port();
    let app_env = non_empty(&envy.app_env).unwrap_or("development").to_string();
    let temp_file_ttl = envy.temp_file_ttl();

    let state = provide_state(envy).await?;
    tracing::info!(
        %app_env,
        generator = state.generator.name(),
        temp_dir = %state.delivery.temp_files.dir().display(),
        "configured"
    );

    if let Some(max_age) = temp_file_ttl {
        janitor::spawn(state.delivery.temp_files.clone(), max_age);
    }

    let app = router(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "listening");

    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
