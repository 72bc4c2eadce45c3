use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteStore;

#[tokio::test]
async fn sqlite_roundtrip_overwrites_and_removes() {
    let repo = SqliteStore::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("interview_user_id").await.unwrap(), None);

    repo.set("interview_user_id", "user_a").await.unwrap();
    repo.set("interview_user_id", "user_b").await.unwrap();
    assert_eq!(
        repo.get("interview_user_id").await.unwrap().as_deref(),
        Some("user_b")
    );

    repo.remove("interview_user_id").await.unwrap();
    repo.remove("interview_user_id").await.unwrap();
    assert_eq!(repo.get("interview_user_id").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_prefix_scan_is_case_sensitive_and_sorted() {
    let repo = SqliteStore::connect("sqlite:file:memdb_kv_prefix?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    for key in [
        "rate_limit_b",
        "RATE_LIMIT_upper",
        "rate_limit_a",
        "rate_limiter",
        "interview_progress_user_general",
    ] {
        repo.set(key, "[]").await.unwrap();
    }

    let keys = repo.keys_with_prefix("rate_limit_").await.unwrap();
    assert_eq!(keys, vec!["rate_limit_a", "rate_limit_b"]);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteStore::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    assert_eq!(repo.schema_version().await.ok(), None);
    repo.migrate().await.expect("first migrate");
    repo.set("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.schema_version().await.unwrap(), 1);
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_exposes_kv_trait_object() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set("a", "1").await.unwrap();
    assert_eq!(storage.kv.get("a").await.unwrap().as_deref(), Some("1"));
}
