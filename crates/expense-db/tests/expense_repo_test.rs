//! Integration tests for the pool-backed executor and the expense repository
//!
//! These need a reachable PostgreSQL. Run with:
//! DATABASE_URL=... cargo test -p expense-db -- --ignored

use expense_core::config::{DatabaseConfig, DEFAULT_DATABASE_URL};
use expense_core::models::ExpenseDraft;
use expense_core::traits::ExpenseRepository;
use expense_core::AppError;
use expense_db::{apply_schema, Database, PgExpenseRepository, SqlArgs};
use futures::future::join_all;
use rust_decimal_macros::dec;
use sqlx::Row;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

async fn connected(max_connections: u32) -> Arc<Database> {
    connected_with(DatabaseConfig {
        max_connections,
        acquire_timeout_secs: 10,
        ..DatabaseConfig::default()
    })
    .await
}

async fn connected_with(settings: DatabaseConfig) -> Arc<Database> {
    let db = Database::new(settings);
    db.connect(&database_url()).await.expect("database must be reachable");

    let schema = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations/001_initial_schema.sql");
    apply_schema(&db, &schema).await.expect("schema applies");

    Arc::new(db)
}

fn draft(vendor: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: dec!(12.50),
        vendor: vendor.to_string(),
        category: "Office".to_string(),
        description: Some("Paper".to_string()),
    }
}

#[tokio::test]
#[ignore] // Requires database
async fn test_create_assigns_id_and_equal_timestamps() {
    let repo = PgExpenseRepository::new(connected(5).await);

    let created = repo.create(&draft("Acme")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.amount, dec!(12.50));
    assert_eq!(created.vendor, "Acme");
    assert_eq!(created.description.as_deref(), Some("Paper"));
}

#[tokio::test]
#[ignore] // Requires database
async fn test_get_round_trips_created_record() {
    let repo = PgExpenseRepository::new(connected(5).await);

    let created = repo.create(&draft("Round Trip")).await.unwrap();
    let fetched = repo.get(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
#[ignore] // Requires database
async fn test_list_is_newest_first() {
    let repo = PgExpenseRepository::new(connected(5).await);

    let a = repo.create(&draft("A")).await.unwrap();
    let b = repo.create(&draft("B")).await.unwrap();
    let c = repo.create(&draft("C")).await.unwrap();

    let ids: Vec<i32> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .filter(|id| [a.id, b.id, c.id].contains(id))
        .collect();

    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[tokio::test]
#[ignore] // Requires database
async fn test_update_refreshes_updated_at_only() {
    let repo = PgExpenseRepository::new(connected(5).await);

    let created = repo.create(&draft("Before")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let mut changed = draft("After");
    changed.amount = dec!(99.99);
    changed.description = None;

    let updated = repo.update(created.id, &changed).await.unwrap().unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.vendor, "After");
    assert_eq!(updated.amount, dec!(99.99));
    assert_eq!(updated.description, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
#[ignore] // Requires database
async fn test_missing_id_is_not_found_outcome() {
    let repo = PgExpenseRepository::new(connected(5).await);

    assert_eq!(repo.get(i32::MAX).await.unwrap(), None);
    assert_eq!(repo.update(i32::MAX, &draft("Ghost")).await.unwrap(), None);
    assert!(!repo.delete(i32::MAX).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires database
async fn test_delete_twice() {
    let repo = PgExpenseRepository::new(connected(5).await);

    let created = repo.create(&draft("Doomed")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.get(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires database
async fn test_constraint_violation_is_query_failure() {
    let db = connected(2).await;

    let err = db
        .execute(
            "INSERT INTO expenses (amount, vendor, category) VALUES ($1, $2, $3)",
            SqlArgs::new()
                .bind(dec!(1.00))
                .bind("   ".to_string())
                .bind("Office".to_string()),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Query(_)));
}

#[tokio::test]
#[ignore] // Requires database
async fn test_connection_released_after_mapping_failure() {
    const POOL_SIZE: u32 = 2;
    let db = connected(POOL_SIZE).await;

    // Every checkout below fails while mapping its row.
    for _ in 0..POOL_SIZE * 2 {
        let err = db
            .fetch_one_as("SELECT 1 AS id", SqlArgs::new(), |row| {
                row.try_get::<String, _>("vendor").map_err(AppError::from)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Query(_)));
    }

    // N + 1 concurrent statements against a pool of N still all complete.
    let started = Instant::now();
    let results = join_all((0..=POOL_SIZE).map(|_| {
        let db = Arc::clone(&db);
        async move {
            db.fetch_all("SELECT pg_sleep(0.2)", SqlArgs::new())
                .await
                .map(|rows| rows.len())
        }
    }))
    .await;

    for result in results {
        assert_eq!(result.unwrap(), 1);
    }
    assert!(started.elapsed() >= Duration::from_millis(400));

    let status = db.pool_status().unwrap();
    assert!(status.size <= POOL_SIZE);

    db.close().await;
    db.close().await;
    assert!(!db.is_connected());
}

#[tokio::test]
#[ignore] // Requires database
async fn test_slow_statement_is_query_failure() {
    let db = connected_with(DatabaseConfig {
        max_connections: 2,
        statement_timeout_secs: 1,
        ..DatabaseConfig::default()
    })
    .await;

    let started = Instant::now();
    let err = db
        .fetch_all("SELECT pg_sleep(2)", SqlArgs::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Query(ref msg) if msg.contains("timeout")));
    assert!(started.elapsed() < Duration::from_secs(2));

    // The pool keeps serving after an abandoned statement
    let rows = db.fetch_all("SELECT 1", SqlArgs::new()).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
#[ignore] // Requires database
async fn test_exhausted_pool_is_connection_unavailable() {
    let db = connected_with(DatabaseConfig {
        max_connections: 1,
        acquire_timeout_secs: 1,
        ..DatabaseConfig::default()
    })
    .await;

    let holder = {
        let db = Arc::clone(&db);
        tokio::spawn(async move {
            db.fetch_all("SELECT pg_sleep(3)", SqlArgs::new())
                .await
                .map(|rows| rows.len())
        })
    };
    tokio::time::sleep(Duration::from_millis(300)).await;

    let started = Instant::now();
    let err = db.fetch_all("SELECT 1", SqlArgs::new()).await.unwrap_err();
    assert!(matches!(err, AppError::ConnectionUnavailable(_)));
    assert!(started.elapsed() >= Duration::from_millis(900));

    assert_eq!(holder.await.unwrap().unwrap(), 1);

    // Released once the holder finishes
    let rows = db.fetch_all("SELECT 1", SqlArgs::new()).await.unwrap();
    assert_eq!(rows.len(), 1);
}
