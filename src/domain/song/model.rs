use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::shared::PaginationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Song {
    pub id: i32,
    pub group: String,
    pub song: String,
    pub release_date: String,
    pub lyrics: String,
}

/// Request body of create and update, any `id` sent by the client is ignored
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewSong {
    pub group: String,
    pub song: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default, alias = "text")]
    pub lyrics: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Group name is empty")]
    EmptyGroup,
    #[error("Song title is empty")]
    EmptySong,
    #[error("Unknown filter key: {0}")]
    UnknownFilterKey(String),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl NewSong {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.group.trim().is_empty() {
            return Err(ValidationError::EmptyGroup);
        }

        if self.song.trim().is_empty() {
            return Err(ValidationError::EmptySong);
        }

        Ok(())
    }
}
