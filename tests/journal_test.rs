mod helpers;

use helpers::{insert_entry, test_db};
use solace::journal::search::{search_entries, SearchFilter};
use solace::journal::store::{delete_entry, get_entry, list_entries, update_entry};
use solace::journal::types::{EntryPatch, NewEntry};

#[test]
fn write_then_search_round_trip() {
    let (mut conn, pid) = test_db();
    let id = insert_entry(&mut conn, &pid, "walked along the harbor at dusk");
    insert_entry(&mut conn, &pid, "long meeting, felt drained");

    let results = search_entries(&conn, &pid, "harbor", &SearchFilter::default(), 50).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, id);
}

#[test]
fn edited_entry_is_searchable_under_new_text_only() {
    let (mut conn, pid) = test_db();
    let id = insert_entry(&mut conn, &pid, "notes about the old apartment");

    update_entry(
        &mut conn,
        &id,
        &pid,
        &EntryPatch {
            content: Some("notes about the new house".into()),
            ..EntryPatch::default()
        },
    )
    .unwrap();

    let old_hits = search_entries(&conn, &pid, "apartment", &SearchFilter::default(), 50).unwrap();
    assert!(old_hits.is_empty());

    let new_hits = search_entries(&conn, &pid, "house", &SearchFilter::default(), 50).unwrap();
    assert_eq!(new_hits.len(), 1);
    assert_eq!(new_hits[0].id, id);
}

#[test]
fn deleted_entry_disappears_everywhere() {
    let (mut conn, pid) = test_db();
    let id = insert_entry(&mut conn, &pid, "entry about lighthouses");

    assert!(delete_entry(&mut conn, &id, &pid).unwrap());
    assert!(get_entry(&conn, &id, &pid).unwrap().is_none());
    assert!(list_entries(&conn, &pid).unwrap().is_empty());
    assert!(
        search_entries(&conn, &pid, "lighthouses", &SearchFilter::default(), 50)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn title_is_indexed_too() {
    let (mut conn, pid) = test_db();
    solace::journal::store::create_entry(
        &mut conn,
        &pid,
        &NewEntry {
            title: Some("Gratitude list".into()),
            content: "three small things".into(),
            mood: "good".into(),
            tags: vec![],
        },
    )
    .unwrap();

    let results = search_entries(&conn, &pid, "gratitude", &SearchFilter::default(), 50).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn combined_query_and_mood_filter() {
    let (mut conn, pid) = test_db();
    solace::journal::store::create_entry(
        &mut conn,
        &pid,
        &NewEntry {
            title: None,
            content: "morning run felt great".into(),
            mood: "energized".into(),
            tags: vec![],
        },
    )
    .unwrap();
    solace::journal::store::create_entry(
        &mut conn,
        &pid,
        &NewEntry {
            title: None,
            content: "morning meeting dragged on".into(),
            mood: "flat".into(),
            tags: vec![],
        },
    )
    .unwrap();

    let filter = SearchFilter {
        mood: Some("energized".into()),
        ..SearchFilter::default()
    };
    let results = search_entries(&conn, &pid, "morning", &filter, 50).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].mood, "energized");
}
