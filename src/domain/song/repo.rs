use super::filter::Predicate;
use super::model::{NewSong, Song};
use crate::domain::repository::Connection;
use crate::domain::shared::Pagination;

/// Storage access for songs. Results are ordered by id.
#[trait_variant::make(Send)]
pub trait Repo: Connection {
    /// Exact, case-sensitive match on both fields
    async fn exists(
        &self,
        group: &str,
        song: &str,
    ) -> Result<bool, Self::Error>;

    async fn create(&self, song: &NewSong) -> Result<Song, Self::Error>;

    async fn find_many(
        &self,
        predicate: &Predicate,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Song>, Self::Error>;

    async fn find_lyrics(
        &self,
        group: &str,
        song: &str,
        pagination: Option<Pagination>,
    ) -> Result<Vec<String>, Self::Error>;

    /// Returns the number of replaced rows
    async fn update(
        &self,
        group: &str,
        song: &str,
        replacement: &NewSong,
    ) -> Result<u64, Self::Error>;

    /// Returns the number of deleted rows
    async fn delete(
        &self,
        group: &str,
        song: &str,
    ) -> Result<u64, Self::Error>;
}
