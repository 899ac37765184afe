use std::process::ExitCode;
use std::sync::Arc;

use songbook::infra::StartupError;
use songbook::infra::config::Config;
use songbook::infra::logger::Logger;
use songbook::infra::state::AppState;
use songbook::presentation::rest;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, the environment may be set already
    let _ = dotenvy::dotenv();

    if let Err(err) = Logger::init() {
        eprintln!("Failed to parse logger filter: {err}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::init()?;

    let state = AppState::init(&config).await?;

    let listener =
        TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!("Starting server on http://{}", listener.local_addr()?);
    rest::listen(listener, Arc::new(state)).await?;

    Ok(())
}
