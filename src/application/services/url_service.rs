//! Short link creation, resolution and deletion.

use std::sync::Arc;

use crate::application::services::AliasAllocator;
use crate::domain::entities::ShortLink;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_normalizer::{is_valid, normalize};

/// Service behind the save/get/delete/redirect handlers.
///
/// Holds no per-request state; one instance is shared across all requests.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    allocator: AliasAllocator,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, allocator: AliasAllocator) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Normalizes `raw_url`, picks an alias and stores the pair.
    ///
    /// The URL is checked before any alias work so that a bad URL never costs
    /// existence queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the normalized URL has no host.
    /// Returns [`AppError::InvalidAlias`] or [`AppError::AliasGenerationExhausted`]
    /// from allocation.
    /// Returns [`AppError::AliasExists`] if the alias was taken, including a
    /// generated alias that lost a race with a concurrent writer.
    pub async fn shorten(
        &self,
        raw_url: &str,
        requested_alias: Option<&str>,
    ) -> Result<ShortLink, AppError> {
        let url = normalize(raw_url);
        if !is_valid(&url) {
            return Err(AppError::InvalidUrl(url));
        }

        let alias = self.allocator.allocate(requested_alias).await?;
        let id = self.repository.save(&alias, &url).await?;

        Ok(ShortLink::new(id, alias, url))
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.repository.get(alias).await
    }

    /// Deletes the link stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if the alias is unknown.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        self.repository.delete(alias).await
    }

    /// Checks that storage answers queries.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AllocatorSettings;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::alias_generator::MockAliasGenerator;

    fn service(repository: MockUrlRepository, generator: MockAliasGenerator) -> UrlService {
        let repository: Arc<dyn UrlRepository> = Arc::new(repository);
        let allocator = AliasAllocator::new(
            repository.clone(),
            Arc::new(generator),
            AllocatorSettings {
                alias_length: 6,
                max_attempts: 3,
            },
        );
        UrlService::new(repository, allocator)
    }

    #[tokio::test]
    async fn test_shorten_normalizes_and_generates_alias() {
        let mut generator = MockAliasGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| "Ab3dE6".to_string());

        let mut repository = MockUrlRepository::new();
        repository.expect_exists().times(1).returning(|_| Ok(false));
        repository
            .expect_save()
            .withf(|alias, url| alias == "Ab3dE6" && url == "https://example.com")
            .times(1)
            .returning(|_, _| Ok(42));

        let link = service(repository, generator)
            .shorten("example.com", None)
            .await
            .unwrap();

        assert_eq!(link, ShortLink::new(42, "Ab3dE6".into(), "https://example.com".into()));
    }

    #[tokio::test]
    async fn test_shorten_with_requested_alias() {
        let mut generator = MockAliasGenerator::new();
        generator.expect_generate().times(0);

        let mut repository = MockUrlRepository::new();
        repository.expect_exists().times(0);
        repository
            .expect_save()
            .withf(|alias, url| alias == "promo1" && url == "https://a.com")
            .times(1)
            .returning(|_, _| Ok(1));

        let link = service(repository, generator)
            .shorten("https://a.com", Some("promo1"))
            .await
            .unwrap();

        assert_eq!(link.alias, "promo1");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_skips_allocation() {
        let mut generator = MockAliasGenerator::new();
        generator.expect_generate().times(0);

        let mut repository = MockUrlRepository::new();
        repository.expect_exists().times(0);
        repository.expect_save().times(0);

        let result = service(repository, generator).shorten("   ", None).await;

        assert!(matches!(result, Err(AppError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_shorten_surfaces_alias_exists_from_write() {
        let mut generator = MockAliasGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| "raced1".to_string());

        let mut repository = MockUrlRepository::new();
        repository.expect_exists().times(1).returning(|_| Ok(false));
        repository
            .expect_save()
            .times(1)
            .returning(|alias, _| Err(AppError::AliasExists(alias.to_string())));

        let result = service(repository, generator)
            .shorten("https://example.com", None)
            .await;

        assert!(matches!(result, Err(AppError::AliasExists(_))));
    }

    #[tokio::test]
    async fn test_shorten_exhaustion_issues_no_write() {
        let mut generator = MockAliasGenerator::new();
        generator
            .expect_generate()
            .times(3)
            .returning(|_| "busy00".to_string());

        let mut repository = MockUrlRepository::new();
        repository.expect_exists().times(3).returning(|_| Ok(true));
        repository.expect_save().times(0);

        let result = service(repository, generator)
            .shorten("https://example.com", None)
            .await;

        assert!(matches!(
            result,
            Err(AppError::AliasGenerationExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_resolve_passes_not_found_through() {
        let mut repository = MockUrlRepository::new();
        repository
            .expect_get()
            .times(1)
            .returning(|alias| Err(AppError::UrlNotFound(alias.to_string())));

        let result = service(repository, MockAliasGenerator::new())
            .resolve("missing")
            .await;

        assert!(matches!(result, Err(AppError::UrlNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_calls_repository() {
        let mut repository = MockUrlRepository::new();
        repository
            .expect_delete()
            .withf(|alias| alias == "promo1")
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repository, MockAliasGenerator::new())
            .delete("promo1")
            .await;

        assert!(result.is_ok());
    }
}
