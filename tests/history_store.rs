// tests/history_store.rs
use newswatch::store::{History, HistoryStore};

#[test]
fn missing_file_loads_as_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn roundtrip_preserves_per_keyword_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));

    let mut history = History::new();
    history.insert(
        "wind".to_string(),
        vec!["L5".into(), "L4".into(), "L3".into(), "L2".into(), "L1".into()],
    );
    history.insert("turbine".to_string(), vec!["T1".into()]);

    store.save(&history).unwrap();
    assert_eq!(store.load().unwrap(), history);
}

#[test]
fn save_overwrites_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));

    let mut first = History::new();
    first.insert("old".to_string(), vec!["gone".into()]);
    store.save(&first).unwrap();

    let mut second = History::new();
    second.insert("wind".to_string(), vec!["L1".into()]);
    store.save(&second).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, second);
    assert!(!loaded.contains_key("old"));
}

#[test]
fn corrupt_file_is_an_error_not_an_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{\"wind\": [truncated").unwrap();

    let store = HistoryStore::new(path);
    let err = store.load().unwrap_err();
    assert!(err.to_string().contains("corrupt"));
}
