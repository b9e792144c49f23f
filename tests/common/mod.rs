#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use shortlink::application::services::{AliasAllocator, AllocatorSettings, UrlService};
use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::{Database, DatabaseSettings};
use shortlink::routes::app_router;
use shortlink::state::AppState;
use shortlink::utils::alias_generator::RandomAliasGenerator;

pub const QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Fresh in-memory SQLite database with the schema applied.
pub async fn create_test_database() -> (Database, Arc<dyn UrlRepository>) {
    let database = Database::connect(&DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(5),
        idle_timeout: None,
        max_lifetime: None,
    })
    .await
    .unwrap();

    let repository = database.url_repository(QUERY_TIMEOUT);
    repository.init_schema().await.unwrap();

    (database, repository)
}

pub async fn insert_url(repository: &Arc<dyn UrlRepository>, alias: &str, url: &str) -> i64 {
    repository.save(alias, url).await.unwrap()
}

pub fn create_test_service(repository: Arc<dyn UrlRepository>) -> Arc<UrlService> {
    let allocator = AliasAllocator::new(
        repository.clone(),
        Arc::new(RandomAliasGenerator::default()),
        AllocatorSettings::default(),
    );
    Arc::new(UrlService::new(repository, allocator))
}

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(create_test_service(repository))
}

/// Full application router over an in-memory database.
pub async fn create_test_server() -> (TestServer, Database, Arc<dyn UrlRepository>) {
    let (database, repository) = create_test_database().await;
    let state = create_test_state(repository.clone());

    let app = app_router(state, Duration::from_secs(5));
    let server = TestServer::new(app).unwrap();

    (server, database, repository)
}
