use ::sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use migration::MigratorTrait;

pub mod sea_orm;

pub async fn get_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .to_owned();

    connect(opt).await
}

/// Opens the pool, checks it is reachable and brings the schema up to date
pub async fn connect(opt: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    tracing::info!("Connecting to database");
    let conn = Database::connect(opt).await?;
    conn.ping().await?;

    tracing::info!("Running migrations");
    migration::Migrator::up(&conn, None)
        .await
        .inspect_err(|e| tracing::error!("Failed to run migration: {e}"))?;
    tracing::info!("Database is ready");

    Ok(conn)
}
