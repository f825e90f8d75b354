//! フィードバック保存テスト
//!
//! FileStoreの永続化と壊れたファイルの扱いを検証

use intelleo_guide::store::FileStore;
use intelleo_guide_common::{FeedbackState, KeyValueStore, Vote};
use tempfile::tempdir;

/// 存在しないファイルは空のストア
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(&dir.path().join("feedback.json"));

    assert!(store.is_empty());
    assert_eq!(store.get("feedback_/import"), None);
}

/// 投票の保存と再読み込み
#[test]
fn test_vote_persists_across_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("feedback.json");

    let mut store = FileStore::open(&path);
    let mut state = FeedbackState::load("/import", &store);
    assert!(state.should_prompt());
    state.cast(Vote::Down, &mut store).expect("保存失敗");
    assert!(path.exists());

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("feedback_/import").as_deref(), Some("down"));
    let state = FeedbackState::load("/import", &reopened);
    assert_eq!(state.vote(), Some(Vote::Down));
    assert!(!state.should_prompt());

    // 他のページには影響しない
    assert!(FeedbackState::load("/database", &reopened).should_prompt());
}

/// 削除も書き出される
#[test]
fn test_clear_vote() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");

    let mut store = FileStore::open(&path);
    let mut state = FeedbackState::load("/", &store);
    state.cast(Vote::Up, &mut store).unwrap();
    state.clear(&mut store).unwrap();

    let reopened = FileStore::open(&path);
    assert!(reopened.is_empty());
}

/// 壊れたファイルは空から始める
#[test]
fn test_corrupt_file_starts_fresh() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = FileStore::open(&path);
    assert!(store.is_empty());

    store.set("feedback_/", "up").unwrap();
    let reopened = FileStore::open(&path);
    assert_eq!(reopened.len(), 1);
}

/// バージョン違いは読み捨てる
#[test]
fn test_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");
    std::fs::write(
        &path,
        r#"{ "version": 99, "entries": { "feedback_/": "up" } }"#,
    )
    .unwrap();

    let store = FileStore::open(&path);
    assert!(store.is_empty());
}

/// 解釈できない値は未投票扱い
#[test]
fn test_unknown_stored_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("feedback.json");
    std::fs::write(
        &path,
        r#"{ "version": 1, "entries": { "feedback_/import": "maybe" } }"#,
    )
    .unwrap();

    let store = FileStore::open(&path);
    assert_eq!(store.len(), 1);
    assert!(FeedbackState::load("/import", &store).should_prompt());
}
