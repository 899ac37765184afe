use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::extract::{JsonBody, PathParams, QueryParams};
use super::state::{self, ArcAppState};
use crate::application::song::Error;
use crate::domain::song::filter::Predicate;
use crate::domain::song::model::{NewSong, Song};
use crate::presentation::api_response::{self, Message};

const TAG: &str = "Music";

// `GET /music/{page}/{size}` shares its template with update and delete,
// the segments are read by position.
pub fn router() -> Router<ArcAppState> {
    Router::new()
        .route("/music", get(get_library).post(add_song))
        .route("/music/filter", get(find_song_by_filter))
        .route("/music/filter/{page}/{size}", get(filter_library_page))
        .route(
            "/music/{group}/{song}",
            get(get_library_page).put(update_song).delete(delete_song),
        )
        .route("/music/{group}/{song}/lyrics", get(get_lyrics))
        .route(
            "/music/{group}/{song}/lyrics/{page}/{size}",
            get(get_lyrics_page),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get_library,
        add_song,
        find_song_by_filter,
        filter_library_page,
        get_library_page,
        update_song,
        delete_song,
        get_lyrics,
        get_lyrics_page,
    ),
    components(schemas(Song, NewSong, Message, api_response::Error))
)]
pub(super) struct SongApi;

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music",
    responses(
        (status = 200, body = Vec<Song>),
        (status = 500, body = api_response::Error)
    ),
)]
async fn get_library(
    State(service): State<state::SongService>,
) -> Result<Json<Vec<Song>>, Error> {
    let songs = service.get_all().await?;
    tracing::info!("Fetched song library, {} songs", songs.len());

    Ok(Json(songs))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music/{page}/{size}",
    params(
        ("page" = i64, Path, description = "Page number, starting at 1"),
        ("size" = i64, Path, description = "Page size")
    ),
    responses(
        (status = 200, body = Vec<Song>),
        (status = 400, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn get_library_page(
    State(service): State<state::SongService>,
    PathParams((page, size)): PathParams<(i64, i64)>,
) -> Result<Json<Vec<Song>>, Error> {
    let songs = service.get_page(page, size).await?;
    tracing::info!("Fetched song library, page: {page}, size: {size}");

    Ok(Json(songs))
}

#[utoipa::path(
    post,
    tag = TAG,
    path = "/music",
    request_body = NewSong,
    responses(
        (status = 201),
        (status = 400, body = api_response::Error),
        (status = 409, body = api_response::Error),
        (status = 500, body = api_response::Error)
    ),
)]
async fn add_song(
    State(service): State<state::SongService>,
    JsonBody(new_song): JsonBody<NewSong>,
) -> Result<StatusCode, Error> {
    let song = service.add(new_song).await?;
    tracing::info!(
        "Group: {}, song: {} added with id: {}",
        song.group,
        song.song,
        song.id
    );

    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music/filter",
    params(
        ("group" = Option<String>, Query),
        ("song" = Option<String>, Query),
        ("release_date" = Option<String>, Query),
        ("lyrics" = Option<String>, Query)
    ),
    responses(
        (status = 200, body = Song),
        (status = 400, body = api_response::Error),
        (status = 404, body = api_response::Error)
    ),
)]
async fn find_song_by_filter(
    State(service): State<state::SongService>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> Result<Json<Song>, Error> {
    let predicate = Predicate::compile(pairs)?;

    let song = service.filter_first(&predicate).await?;
    tracing::info!("Found song with filter: {predicate}");

    Ok(Json(song))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music/filter/{page}/{size}",
    params(
        ("page" = i64, Path, description = "Page number, starting at 1"),
        ("size" = i64, Path, description = "Page size"),
        ("group" = Option<String>, Query),
        ("song" = Option<String>, Query),
        ("release_date" = Option<String>, Query),
        ("lyrics" = Option<String>, Query)
    ),
    responses(
        (status = 200, body = Vec<Song>),
        (status = 400, body = api_response::Error)
    ),
)]
async fn filter_library_page(
    State(service): State<state::SongService>,
    PathParams((page, size)): PathParams<(i64, i64)>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> Result<Json<Vec<Song>>, Error> {
    let predicate = Predicate::compile(pairs)?;

    let songs = service.filter_page(&predicate, page, size).await?;
    tracing::info!(
        "Found {} songs with filter: {predicate}, page: {page}, size: {size}",
        songs.len()
    );

    Ok(Json(songs))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music/{group}/{song}/lyrics",
    params(
        ("group" = String, Path),
        ("song" = String, Path)
    ),
    responses(
        (status = 200, body = String),
        (status = 404, body = api_response::Error)
    ),
)]
async fn get_lyrics(
    State(service): State<state::SongService>,
    PathParams((group, song)): PathParams<(String, String)>,
) -> Result<Json<String>, Error> {
    let lyrics = service.get_lyrics(&group, &song).await?;
    tracing::info!("Fetched lyrics of group: {group}, song: {song}");

    Ok(Json(lyrics))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/music/{group}/{song}/lyrics/{page}/{size}",
    params(
        ("group" = String, Path),
        ("song" = String, Path),
        ("page" = i64, Path, description = "Page number, starting at 1"),
        ("size" = i64, Path, description = "Page size")
    ),
    responses(
        (status = 200, body = Vec<String>),
        (status = 400, body = api_response::Error)
    ),
)]
async fn get_lyrics_page(
    State(service): State<state::SongService>,
    PathParams((group, song, page, size)): PathParams<(
        String,
        String,
        i64,
        i64,
    )>,
) -> Result<Json<Vec<String>>, Error> {
    let lyrics = service.get_lyrics_page(&group, &song, page, size).await?;
    tracing::info!(
        "Fetched lyrics of group: {group}, song: {song}, \
        page: {page}, size: {size}"
    );

    Ok(Json(lyrics))
}

#[utoipa::path(
    put,
    tag = TAG,
    path = "/music/{group}/{song}",
    params(
        ("group" = String, Path),
        ("song" = String, Path)
    ),
    request_body = NewSong,
    responses(
        (status = 200, body = Message),
        (status = 400, body = api_response::Error),
        (status = 404, body = api_response::Error)
    ),
)]
async fn update_song(
    State(service): State<state::SongService>,
    PathParams((group, song)): PathParams<(String, String)>,
    JsonBody(replacement): JsonBody<NewSong>,
) -> Result<Message, Error> {
    let count = service.update(&group, &song, replacement).await?;
    tracing::info!("Group: {group}, song: {song} updated");

    Ok(Message::new(format!("Updated {count} song(s)")))
}

#[utoipa::path(
    delete,
    tag = TAG,
    path = "/music/{group}/{song}",
    params(
        ("group" = String, Path),
        ("song" = String, Path)
    ),
    responses(
        (status = 204),
        (status = 404, body = api_response::Error)
    ),
)]
async fn delete_song(
    State(service): State<state::SongService>,
    PathParams((group, song)): PathParams<(String, String)>,
) -> Result<StatusCode, Error> {
    service.delete(&group, &song).await?;
    tracing::info!("Group: {group}, song: {song} removed from the library");

    Ok(StatusCode::NO_CONTENT)
}
