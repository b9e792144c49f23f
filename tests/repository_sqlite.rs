mod common;

use shortlink::error::AppError;
use shortlink::infrastructure::persistence::{Database, DatabaseSettings};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_save_and_get_round_trip() {
    let (_db, repo) = common::create_test_database().await;

    let id = repo.save("promo1", "https://example.com").await.unwrap();
    assert!(id > 0);

    let url = repo.get("promo1").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[tokio::test]
async fn test_ids_increase() {
    let (_db, repo) = common::create_test_database().await;

    let first = repo.save("a1", "https://a.com").await.unwrap();
    let second = repo.save("a2", "https://a.com").await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_duplicate_alias_is_rejected() {
    let (_db, repo) = common::create_test_database().await;
    common::insert_url(&repo, "promo1", "https://a.com").await;

    let result = repo.save("promo1", "https://b.com").await;

    assert!(matches!(result, Err(AppError::AliasExists(alias)) if alias == "promo1"));
    // First row is untouched
    assert_eq!(repo.get("promo1").await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn test_get_unknown_alias() {
    let (_db, repo) = common::create_test_database().await;

    let result = repo.get("nope").await;

    assert!(matches!(result, Err(AppError::UrlNotFound(_))));
}

#[tokio::test]
async fn test_delete_then_get() {
    let (_db, repo) = common::create_test_database().await;
    common::insert_url(&repo, "gone", "https://a.com").await;

    repo.delete("gone").await.unwrap();

    assert!(matches!(repo.get("gone").await, Err(AppError::UrlNotFound(_))));
    assert!(matches!(
        repo.delete("gone").await,
        Err(AppError::UrlNotFound(_))
    ));
}

#[tokio::test]
async fn test_exists() {
    let (_db, repo) = common::create_test_database().await;
    common::insert_url(&repo, "here", "https://a.com").await;

    assert!(repo.exists("here").await.unwrap());
    assert!(!repo.exists("there").await.unwrap());
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let (_db, repo) = common::create_test_database().await;
    common::insert_url(&repo, "keep", "https://a.com").await;

    repo.init_schema().await.unwrap();

    assert_eq!(repo.get("keep").await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn test_closed_pool_is_storage_error() {
    let (db, repo) = common::create_test_database().await;
    db.close().await;

    let result = repo.get("anything").await;

    assert!(matches!(result, Err(AppError::Storage(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_have_one_winner() {
    let (_db, repo) = common::create_test_database().await;

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.save("race", &format!("https://example.com/{i}")).await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(AppError::AliasExists(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 15);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_same_alias_through_service() {
    let (_db, repo) = common::create_test_database().await;
    let service = common::create_test_service(repo.clone());

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .shorten(&format!("example.com/{i}"), Some("promo1"))
                .await
        }));
    }

    let mut winners = Vec::new();
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => winners.push(link),
            Err(AppError::AliasExists(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(repo.get("promo1").await.unwrap(), winners[0].url);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_saves_across_connections_have_one_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.db");
    let db = Database::connect(&DatabaseSettings {
        url: format!("sqlite://{}", path.display()),
        max_connections: 16,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(10),
        idle_timeout: None,
        max_lifetime: None,
    })
    .await
    .unwrap();
    let repo = db.url_repository(Duration::from_secs(10));
    repo.init_schema().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.save("race", &format!("https://example.com/{i}")).await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(AppError::AliasExists(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 31);
    assert!(repo.get("race").await.unwrap().starts_with("https://example.com/"));

    db.close().await;
}
