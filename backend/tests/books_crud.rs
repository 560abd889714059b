use backend::db::books::{self, SortKey};
use backend::db;
use common::model::book::BookDraft;
use rusqlite::Connection;
use tempfile::TempDir;

fn setup() -> (TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.sqlite");
    db::init(&path).unwrap();
    let conn = Connection::open(&path).unwrap();
    (dir, conn)
}

fn draft(title: &str, author: &str, rating: f64) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        rating,
        cover: None,
    }
}

fn seed(conn: &Connection) {
    books::insert(conn, &draft("Dune", "Frank Herbert", 4.5)).unwrap();
    books::insert(conn, &draft("Animal Farm", "George Orwell", 3.8)).unwrap();
    books::insert(conn, &draft("Neuromancer", "William Gibson", 4.1)).unwrap();
}

#[test]
fn sorted_by_title_is_non_decreasing_and_complete() {
    let (_dir, conn) = setup();
    seed(&conn);

    let all = books::sorted(&conn, SortKey::Title).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].title <= w[1].title));
}

#[test]
fn sorted_by_author_is_non_decreasing_and_complete() {
    let (_dir, conn) = setup();
    seed(&conn);

    let all = books::sorted(&conn, SortKey::Author).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].author <= w[1].author));
}

#[test]
fn sorted_by_rating_is_non_decreasing_and_complete() {
    let (_dir, conn) = setup();
    seed(&conn);

    let all = books::sorted(&conn, SortKey::Rating).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].rating <= w[1].rating));
}

#[test]
fn chart_rows_pair_titles_with_ratings() {
    let (_dir, conn) = setup();
    seed(&conn);

    let rows = books::chart_rows(&conn).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.contains(&("Dune".to_string(), 4.5)));
}

#[test]
fn update_returns_the_new_row_state() {
    let (_dir, conn) = setup();
    let id = books::insert(&conn, &draft("Dune", "Frank Herbert", 4.5)).unwrap();

    let mut updated = draft("Dune Messiah", "Frank Herbert", 3.9);
    updated.cover = Some("dune.png".to_string());
    assert!(books::update(&conn, id, &updated).unwrap());

    let book = books::get(&conn, id).unwrap().unwrap();
    assert_eq!(book.title, "Dune Messiah");
    assert_eq!(book.rating, 3.9);
    assert_eq!(book.cover.as_deref(), Some("dune.png"));
}

#[test]
fn delete_removes_the_row() {
    let (_dir, conn) = setup();
    let id = books::insert(&conn, &draft("Dune", "Frank Herbert", 4.5)).unwrap();

    assert!(books::delete(&conn, id).unwrap());
    assert!(books::get(&conn, id).unwrap().is_none());
}

#[test]
fn missing_ids_are_reported_not_raised() {
    let (_dir, conn) = setup();

    assert!(books::get(&conn, 42).unwrap().is_none());
    assert!(!books::update(&conn, 42, &draft("X", "Y", 1.0)).unwrap());
    assert!(!books::delete(&conn, 42).unwrap());
}

#[test]
fn cover_reference_round_trips_as_null_when_absent() {
    let (_dir, conn) = setup();
    let id = books::insert(&conn, &draft("Dune", "Frank Herbert", 4.5)).unwrap();

    let book = books::get(&conn, id).unwrap().unwrap();
    assert_eq!(book.cover, None);
}
