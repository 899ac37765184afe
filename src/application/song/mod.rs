use derive_more::{Display, From};

use crate::domain::shared::Pagination;
use crate::domain::song::filter::Predicate;
use crate::domain::song::model::{NewSong, Song, ValidationError};
use crate::domain::song::repo::Repo;

#[derive(Clone)]
pub struct Service<R> {
    pub repo: R,
}

#[derive(Debug, Display, From, derive_more::Error)]
pub enum Error {
    #[from]
    Validation(ValidationError),
    #[display("Song not found")]
    NotFound,
    #[display("Song already exists: {group} - {song}")]
    Duplicate { group: String, song: String },
    #[from(forward)]
    Infra(crate::infra::Error),
}

impl<R> Service<R>
where
    R: Repo,
    crate::infra::Error: From<R::Error>,
{
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn exists(
        &self,
        group: &str,
        song: &str,
    ) -> Result<bool, Error> {
        Ok(self.repo.exists(group, song).await?)
    }

    /// Inserts the song unless one with the same group and title exists
    pub async fn add(&self, new_song: NewSong) -> Result<Song, Error> {
        new_song.validate()?;

        if self.repo.exists(&new_song.group, &new_song.song).await? {
            tracing::info!(
                "Group: {}, song: {} is already in the library",
                new_song.group,
                new_song.song
            );

            return Err(Error::Duplicate {
                group: new_song.group,
                song: new_song.song,
            });
        }

        Ok(self.repo.create(&new_song).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Song>, Error> {
        Ok(self.repo.find_many(&Predicate::default(), None).await?)
    }

    pub async fn get_page(
        &self,
        page: i64,
        size: i64,
    ) -> Result<Vec<Song>, Error> {
        let pagination = Pagination::new(page, size)
            .map_err(ValidationError::from)?;

        Ok(self
            .repo
            .find_many(&Predicate::default(), Some(pagination))
            .await?)
    }

    pub async fn get_lyrics(
        &self,
        group: &str,
        song: &str,
    ) -> Result<String, Error> {
        self.repo
            .find_lyrics(group, song, Some(Pagination::single()))
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NotFound)
    }

    /// Lyrics of every row with this group and title, one page of them
    pub async fn get_lyrics_page(
        &self,
        group: &str,
        song: &str,
        page: i64,
        size: i64,
    ) -> Result<Vec<String>, Error> {
        let pagination = Pagination::new(page, size)
            .map_err(ValidationError::from)?;

        Ok(self.repo.find_lyrics(group, song, Some(pagination)).await?)
    }

    pub async fn filter(
        &self,
        predicate: &Predicate,
    ) -> Result<Vec<Song>, Error> {
        Ok(self.repo.find_many(predicate, None).await?)
    }

    pub async fn filter_page(
        &self,
        predicate: &Predicate,
        page: i64,
        size: i64,
    ) -> Result<Vec<Song>, Error> {
        let pagination = Pagination::new(page, size)
            .map_err(ValidationError::from)?;

        Ok(self.repo.find_many(predicate, Some(pagination)).await?)
    }

    /// Lowest id matching the predicate
    pub async fn filter_first(
        &self,
        predicate: &Predicate,
    ) -> Result<Song, Error> {
        self.repo
            .find_many(predicate, Some(Pagination::single()))
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NotFound)
    }

    /// Replaces every field of the matching rows
    pub async fn update(
        &self,
        group: &str,
        song: &str,
        replacement: NewSong,
    ) -> Result<u64, Error> {
        replacement.validate()?;

        match self.repo.update(group, song, &replacement).await? {
            0 => {
                tracing::warn!(
                    "Update target not found, group: {group}, song: {song}"
                );
                Err(Error::NotFound)
            }
            count => Ok(count),
        }
    }

    pub async fn delete(
        &self,
        group: &str,
        song: &str,
    ) -> Result<u64, Error> {
        match self.repo.delete(group, song).await? {
            0 => {
                tracing::warn!(
                    "Delete target not found, group: {group}, song: {song}"
                );
                Err(Error::NotFound)
            }
            count => Ok(count),
        }
    }
}
