use std::fs;

use galaxy_defender::highscore::*;

use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("highscore.json"))
}

// ── JsonFileStore ─────────────────────────────────────────────────────────────

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(1234).unwrap();
    assert_eq!(store.load(), 1234);
    assert_eq!(store_in(&dir).load(), 1234);
}

#[test]
fn file_format_is_single_json_object() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(50).unwrap();
    let text = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({ "high_score": 50 }));
}

#[test]
fn missing_file_loads_zero() {
    let dir = TempDir::new().unwrap();
    assert_eq!(store_in(&dir).load(), 0);
}

#[test]
fn corrupt_file_loads_zero() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for junk in ["", "not json", "{\"high_score\":", "[\"a\"]"] {
        fs::write(store.path(), junk).unwrap();
        assert_eq!(store.load(), 0, "content {:?}", junk);
    }
}

#[test]
fn wrong_type_loads_zero() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for junk in [
        r#"{"high_score": "12"}"#,
        r#"{"high_score": -5}"#,
        r#"{"high_score": 1.5}"#,
        r#"{"score": 12}"#,
    ] {
        fs::write(store.path(), junk).unwrap();
        assert_eq!(store.load(), 0, "content {:?}", junk);
    }
}

#[test]
fn save_into_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("nope").join("highscore.json"));
    assert!(store.save(5).is_err());
}

// ── record_if_higher ──────────────────────────────────────────────────────────

#[test]
fn higher_score_is_recorded() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(30).unwrap();
    assert!(record_if_higher(&mut store, 50).unwrap());
    assert_eq!(store.load(), 50);
}

#[test]
fn lower_or_equal_score_never_overwrites() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(100).unwrap();
    assert!(!record_if_higher(&mut store, 10).unwrap());
    assert!(!record_if_higher(&mut store, 100).unwrap());
    assert_eq!(store.load(), 100);
}

#[test]
fn first_score_over_missing_file_is_recorded() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    assert!(record_if_higher(&mut store, 1).unwrap());
    assert_eq!(store.load(), 1);
    // Zero never beats the default
    let other = TempDir::new().unwrap();
    let mut empty = store_in(&other);
    assert!(!record_if_higher(&mut empty, 0).unwrap());
    assert!(!empty.path().exists());
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

#[test]
fn memory_store_counts_saves() {
    let mut store = MemoryStore::with_score(30);
    assert_eq!(store.load(), 30);
    record_if_higher(&mut store, 20).unwrap();
    assert_eq!(store.saves(), 0);
    record_if_higher(&mut store, 31).unwrap();
    assert_eq!(store.saves(), 1);
    assert_eq!(store.load(), 31);
}
