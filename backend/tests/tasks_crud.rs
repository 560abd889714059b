use backend::db::{self, tasks};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup() -> (TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.sqlite");
    db::init(&path).unwrap();
    let conn = Connection::open(&path).unwrap();
    (dir, conn)
}

#[test]
fn insert_assigns_increasing_ids() {
    let (_dir, conn) = setup();

    let first = tasks::insert(&conn, "first").unwrap();
    let second = tasks::insert(&conn, "second").unwrap();
    assert!(second > first);
}

#[test]
fn list_returns_tasks_in_creation_order() {
    let (_dir, conn) = setup();

    tasks::insert(&conn, "first").unwrap();
    tasks::insert(&conn, "second").unwrap();
    tasks::insert(&conn, "third").unwrap();

    let all = tasks::all(&conn).unwrap();
    let contents: Vec<_> = all.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[test]
fn update_overwrites_content_only() {
    let (_dir, conn) = setup();

    let id = tasks::insert(&conn, "original").unwrap();
    let before = tasks::get(&conn, id).unwrap().unwrap();

    assert!(tasks::set_content(&conn, id, "rewritten").unwrap());

    let after = tasks::get(&conn, id).unwrap().unwrap();
    assert_eq!(after.content, "rewritten");
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn delete_removes_the_row() {
    let (_dir, conn) = setup();

    let id = tasks::insert(&conn, "doomed").unwrap();
    assert!(tasks::delete(&conn, id).unwrap());
    assert!(tasks::get(&conn, id).unwrap().is_none());
    assert!(tasks::all(&conn).unwrap().is_empty());
}

#[test]
fn missing_ids_are_reported_not_raised() {
    let (_dir, conn) = setup();

    assert!(tasks::get(&conn, 999).unwrap().is_none());
    assert!(!tasks::set_content(&conn, 999, "nope").unwrap());
    assert!(!tasks::delete(&conn, 999).unwrap());
}
