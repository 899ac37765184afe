mod common;

use common::{new_song, song_service};
use songbook::application::song::Error;
use songbook::domain::shared::PaginationError;
use songbook::domain::song::filter::Predicate;
use songbook::domain::song::model::ValidationError;

#[tokio::test]
async fn add_then_exists() {
    let service = song_service().await.unwrap();

    assert!(!service.exists("Muse", "Uprising").await.unwrap());

    let song = service.add(new_song("Muse", "Uprising")).await.unwrap();

    assert!(song.id > 0);
    assert_eq!(song.group, "Muse");
    assert_eq!(song.song, "Uprising");
    assert!(service.exists("Muse", "Uprising").await.unwrap());
}

#[tokio::test]
async fn exists_is_case_sensitive() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();

    assert!(!service.exists("muse", "Uprising").await.unwrap());
    assert!(!service.exists("Muse", "uprising").await.unwrap());
}

#[tokio::test]
async fn second_add_is_duplicate() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();

    let err = service.add(new_song("Muse", "Uprising")).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Duplicate { ref group, ref song }
            if group == "Muse" && song == "Uprising"
    ));
    assert_eq!(service.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_rejects_blank_key() {
    let service = song_service().await.unwrap();

    let err = service.add(new_song("", "Uprising")).await.unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationError::EmptyGroup)));
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn pages_concatenate_to_library() {
    let service = song_service().await.unwrap();
    for i in 0..7 {
        service
            .add(new_song("Muse", &format!("Song {i}")))
            .await
            .unwrap();
    }

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 7);

    for size in 1..=8 {
        let mut collected = vec![];
        let mut page = 1;

        loop {
            let songs = service.get_page(page, size).await.unwrap();
            assert!(songs.len() <= usize::try_from(size).unwrap());

            if songs.is_empty() {
                break;
            }

            collected.extend(songs);
            page += 1;
        }

        assert_eq!(collected, all, "page size {size}");
    }
}

#[tokio::test]
async fn invalid_page_is_rejected() {
    let service = song_service().await.unwrap();

    let err = service.get_page(0, 5).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::Pagination(
            PaginationError::InvalidPage(0)
        ))
    ));

    let err = service.get_page(1, -3).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::Pagination(
            PaginationError::InvalidSize(-3)
        ))
    ));

    let err = service
        .get_lyrics_page("Muse", "Uprising", 0, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let service = song_service().await.unwrap();

    let err = service.delete("Muse", "Uprising").await.unwrap_err();

    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn delete_removes_song() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();
    service.add(new_song("Muse", "Starlight")).await.unwrap();

    assert_eq!(service.delete("Muse", "Uprising").await.unwrap(), 1);

    assert!(!service.exists("Muse", "Uprising").await.unwrap());
    assert!(service.exists("Muse", "Starlight").await.unwrap());
    assert!(matches!(
        service.get_lyrics("Muse", "Uprising").await.unwrap_err(),
        Error::NotFound
    ));
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let service = song_service().await.unwrap();

    let err = service
        .update("Muse", "Uprising", new_song("Muse", "Uprising"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let service = song_service().await.unwrap();
    let original = service.add(new_song("Muse", "Uprising")).await.unwrap();

    let mut replacement = new_song("Muse", "Uprising (Live)");
    replacement.release_date = "2010".to_string();
    replacement.lyrics = "They will not force us".to_string();

    let count = service
        .update("Muse", "Uprising", replacement.clone())
        .await
        .unwrap();
    assert_eq!(count, 1);

    assert!(!service.exists("Muse", "Uprising").await.unwrap());
    assert_eq!(
        service.get_lyrics("Muse", "Uprising (Live)").await.unwrap(),
        "They will not force us"
    );

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, original.id);
    assert_eq!(all[0].song, replacement.song);
    assert_eq!(all[0].release_date, replacement.release_date);
    assert_eq!(all[0].lyrics, replacement.lyrics);
}

#[tokio::test]
async fn lyrics_page_is_scoped_to_key() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();
    service.add(new_song("Muse", "Starlight")).await.unwrap();

    let first = service
        .get_lyrics_page("Muse", "Uprising", 1, 10)
        .await
        .unwrap();
    assert_eq!(first, vec!["Lyrics of Uprising by Muse".to_string()]);

    let second = service
        .get_lyrics_page("Muse", "Uprising", 2, 10)
        .await
        .unwrap();
    assert!(second.is_empty());

    let missing = service
        .get_lyrics_page("Queen", "Uprising", 1, 10)
        .await
        .unwrap();
    assert!(missing.is_empty());
}

#[tokio::test]
async fn filter_by_group_and_song() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Time Is Running Out")).await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();
    service.add(new_song("Queen", "Time Is Running Out")).await.unwrap();

    let predicate = Predicate::compile([
        ("group", "Muse"),
        ("song", "Time Is Running Out"),
    ])
    .unwrap();

    let songs = service.filter(&predicate).await.unwrap();

    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].group, "Muse");
    assert_eq!(songs[0].song, "Time Is Running Out");

    let first = service.filter_first(&predicate).await.unwrap();
    assert_eq!(first, songs[0]);
}

#[tokio::test]
async fn filter_page_applies_window_after_predicate() {
    let service = song_service().await.unwrap();
    for i in 0..5 {
        service
            .add(new_song("Muse", &format!("Song {i}")))
            .await
            .unwrap();
    }
    service.add(new_song("Queen", "Song 0")).await.unwrap();

    let predicate = Predicate::compile([("group", "Muse")]).unwrap();

    let page = service.filter_page(&predicate, 2, 2).await.unwrap();
    let titles: Vec<_> = page.iter().map(|s| s.song.as_str()).collect();
    assert_eq!(titles, ["Song 2", "Song 3"]);

    let last = service.filter_page(&predicate, 3, 2).await.unwrap();
    assert_eq!(last.len(), 1);

    let everything = service.filter(&Predicate::default()).await.unwrap();
    assert_eq!(everything.len(), 6);
}

#[tokio::test]
async fn filter_values_are_not_sql() {
    let service = song_service().await.unwrap();
    service.add(new_song("Muse", "Uprising")).await.unwrap();

    let predicate = Predicate::compile([("song", "' OR '1'='1")]).unwrap();

    assert!(service.filter(&predicate).await.unwrap().is_empty());
    assert!(matches!(
        service.filter_first(&predicate).await.unwrap_err(),
        Error::NotFound
    ));
}
