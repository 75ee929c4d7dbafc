//! Integration tests against a real MySQL server.
//!
//! Run with `cargo test -p shortlink-storage -- --ignored` on a host with a
//! Docker daemon.

use std::time::Duration;

use shortlink_storage::{MySqlUrlStore, ReadUrlStore, UrlStore};
use shortlink_test_infra::mysql::{MySqlServer, MysqlConfig};
use sqlx::mysql::MySqlPoolOptions;

struct Fixture {
    _mysql: MySqlServer,
    store: MySqlUrlStore,
}

impl Fixture {
    async fn start() -> Self {
        let mysql = MySqlServer::new(MysqlConfig::builder().build())
            .await
            .expect("start mysql");
        let url = mysql.database_url().await.expect("mysql url");
        let pool = connect_with_retry(&url).await;

        sqlx::query(include_str!("../ddl/mysql/urls.sql"))
            .execute(&pool)
            .await
            .expect("create schema");

        Self {
            _mysql: mysql,
            store: MySqlUrlStore::new(pool),
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::MySqlPool {
    let mut last_error = None;

    for _ in 0..20 {
        match MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
        {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect mysql: {last_error:?}");
}

async fn row_count(store: &MySqlUrlStore) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(store.pool())
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn insert_and_get_by_id() {
    let fixture = Fixture::start().await;

    let id = fixture
        .store
        .insert_or_get_id("https://example.com")
        .await
        .unwrap();

    let record = fixture.store.get_url_by_id(id).await.unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.url, "https://example.com");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn insert_is_idempotent() {
    let fixture = Fixture::start().await;

    let first = fixture
        .store
        .insert_or_get_id("https://example.com")
        .await
        .unwrap();
    let second = fixture
        .store
        .insert_or_get_id("https://example.com")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(row_count(&fixture.store).await, 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn get_returns_none_for_unknown_id() {
    let fixture = Fixture::start().await;

    let record = fixture.store.get_url_by_id(9_999).await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn urls_differing_in_case_are_distinct() {
    let fixture = Fixture::start().await;

    let lower = fixture
        .store
        .insert_or_get_id("https://example.com/a")
        .await
        .unwrap();
    let upper = fixture
        .store
        .insert_or_get_id("https://example.com/A")
        .await
        .unwrap();

    assert_ne!(lower, upper);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn url_longer_than_column_is_not_stored() {
    let fixture = Fixture::start().await;
    let prefix = "https://example.com/";
    let fits = format!("{prefix}{}", "é".repeat(MySqlUrlStore::MAX_URL_CHARS - prefix.len()));
    let too_long = format!("{fits}a");

    let id = fixture.store.insert_or_get_id(&fits).await.unwrap();
    let record = fixture.store.get_url_by_id(id).await.unwrap().unwrap();
    assert_eq!(record.url, fits);

    let result = fixture.store.insert_or_get_id(&too_long).await;
    assert!(result.is_err());
    assert_eq!(row_count(&fixture.store).await, 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn concurrent_identical_inserts_agree() {
    let fixture = Fixture::start().await;
    let mut handles = vec![];

    for _ in 0..8 {
        let store = fixture.store.clone();
        handles.push(tokio::spawn(async move {
            store.insert_or_get_id("https://example.com").await.unwrap()
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(row_count(&fixture.store).await, 1);
}
