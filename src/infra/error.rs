use std::error::Error as _;

use derive_more::{Display, From};
use sea_orm::DbErr;

pub type Result<T> = std::result::Result<T, Error>;

/// Note: Don't impl from for variants
#[derive(Debug, Display, From, derive_more::Error)]
pub enum Error {
    Internal(InternalError),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Internal(InternalError::SeaOrm(value))
    }
}

/// Never shown to clients, the cause is only logged
#[derive(Debug, Display, derive_more::Error, From)]
#[display("Internal Server Error")]
pub enum InternalError {
    SeaOrm(DbErr),
}

impl InternalError {
    const fn prefix(&self) -> &'static str {
        match self {
            Self::SeaOrm(_) => "Database error",
        }
    }

    pub fn print(&self) {
        if let Some(source) = self.source() {
            tracing::error!("{}: {}", self.prefix(), source);
        } else {
            tracing::error!("{}: {:?}", self.prefix(), self);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to load config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to prepare database: {0}")]
    Database(#[from] DbErr),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
