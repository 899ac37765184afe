#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use sea_orm::{ConnectOptions, DatabaseConnection};
use songbook::domain::song::model::NewSong;
use songbook::infra::database::connect;
use songbook::infra::state::AppState;
use songbook::presentation::rest::router;
use songbook::presentation::rest::state::{ArcAppState, SongService};

/// Private migrated database, a single connection keeps it alive
pub async fn memory_database() -> anyhow::Result<DatabaseConnection> {
    let opt = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    Ok(connect(opt).await?)
}

pub async fn song_service() -> anyhow::Result<SongService> {
    let conn = memory_database().await?;
    let state = AppState::new(conn);

    Ok(SongService::new(state.sea_orm_repo))
}

pub struct TestApp {
    pub server: TestServer,
    pub database: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let database = memory_database().await?;
        let state = ArcAppState::new(Arc::new(AppState::new(database.clone())));

        let server = TestServer::new(router(state))?;

        Ok(Self { server, database })
    }
}

pub fn new_song(group: &str, song: &str) -> NewSong {
    NewSong {
        group: group.to_string(),
        song: song.to_string(),
        release_date: "16.07.2006".to_string(),
        lyrics: format!("Lyrics of {song} by {group}"),
    }
}
