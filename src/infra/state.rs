use sea_orm::DatabaseConnection;

use super::StartupError;
use super::config::Config;
use super::database::get_connection;
use super::database::sea_orm::SeaOrmRepository;

#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseConnection,

    pub sea_orm_repo: SeaOrmRepository,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<Self, StartupError> {
        let url = config.database_url()?;
        let conn = get_connection(&url).await?;

        Ok(Self::new(conn))
    }

    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            sea_orm_repo: SeaOrmRepository::new(conn.clone()),
            database: conn,
        }
    }
}
