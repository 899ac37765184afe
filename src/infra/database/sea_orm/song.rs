use entity::songs;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait,
};

use crate::domain::repository::Connection;
use crate::domain::shared::Pagination;
use crate::domain::song::filter::{FilterColumn, Predicate};
use crate::domain::song::model::{NewSong, Song};
use crate::domain::song::repo::Repo;

impl<T> Repo for T
where
    T: Connection<Error = DbErr>,
    T::Conn: ConnectionTrait,
{
    async fn exists(
        &self,
        group: &str,
        song: &str,
    ) -> Result<bool, Self::Error> {
        let count = songs::Entity::find()
            .filter(key_filter(group, song))
            .count(self.conn())
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, song: &NewSong) -> Result<Song, Self::Error> {
        let model = songs::ActiveModel {
            id: NotSet,
            group_name: Set(song.group.clone()),
            song: Set(song.song.clone()),
            release_date: Set(song.release_date.clone()),
            lyrics: Set(song.lyrics.clone()),
        };

        let model = model.insert(self.conn()).await?;

        Ok(model.into())
    }

    async fn find_many(
        &self,
        predicate: &Predicate,
        pagination: Option<Pagination>,
    ) -> Result<Vec<Song>, Self::Error> {
        let models = songs::Entity::find()
            .filter(predicate_condition(predicate))
            .order_by_asc(songs::Column::Id)
            .apply_if(pagination, |q, p| {
                q.offset(p.offset()).limit(p.limit())
            })
            .all(self.conn())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_lyrics(
        &self,
        group: &str,
        song: &str,
        pagination: Option<Pagination>,
    ) -> Result<Vec<String>, Self::Error> {
        songs::Entity::find()
            .select_only()
            .column(songs::Column::Lyrics)
            .filter(key_filter(group, song))
            .order_by_asc(songs::Column::Id)
            .apply_if(pagination, |q, p| {
                q.offset(p.offset()).limit(p.limit())
            })
            .into_tuple::<String>()
            .all(self.conn())
            .await
    }

    async fn update(
        &self,
        group: &str,
        song: &str,
        replacement: &NewSong,
    ) -> Result<u64, Self::Error> {
        let model = songs::ActiveModel {
            id: NotSet,
            group_name: Set(replacement.group.clone()),
            song: Set(replacement.song.clone()),
            release_date: Set(replacement.release_date.clone()),
            lyrics: Set(replacement.lyrics.clone()),
        };

        let res = songs::Entity::update_many()
            .set(model)
            .filter(key_filter(group, song))
            .exec(self.conn())
            .await?;

        Ok(res.rows_affected)
    }

    async fn delete(
        &self,
        group: &str,
        song: &str,
    ) -> Result<u64, Self::Error> {
        let res = songs::Entity::delete_many()
            .filter(key_filter(group, song))
            .exec(self.conn())
            .await?;

        Ok(res.rows_affected)
    }
}

fn key_filter(group: &str, song: &str) -> SimpleExpr {
    songs::Column::GroupName
        .eq(group)
        .and(songs::Column::Song.eq(song))
}

const fn column_of(column: FilterColumn) -> songs::Column {
    match column {
        FilterColumn::GroupName => songs::Column::GroupName,
        FilterColumn::Song => songs::Column::Song,
        FilterColumn::ReleaseDate => songs::Column::ReleaseDate,
        FilterColumn::Lyrics => songs::Column::Lyrics,
    }
}

fn predicate_condition(predicate: &Predicate) -> Condition {
    predicate
        .iter()
        .fold(Condition::all(), |cond, (column, value)| {
            cond.add(column_of(column).eq(value))
        })
}

impl From<songs::Model> for Song {
    fn from(model: songs::Model) -> Self {
        Self {
            id: model.id,
            group: model.group_name,
            song: model.song,
            release_date: model.release_date,
            lyrics: model.lyrics,
        }
    }
}
