//! Alias allocation: accept a client alias or find a free random one.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// Characters allowed in client-supplied aliases.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Length and retry budget for generated aliases.
#[derive(Debug, Clone, Copy)]
pub struct AllocatorSettings {
    pub alias_length: usize,
    pub max_attempts: usize,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self {
            alias_length: 6,
            max_attempts: 10,
        }
    }
}

/// Picks the alias a new link will be stored under.
///
/// The existence check used while generating is only an optimisation. Two
/// concurrent requests can both see a candidate as free; the repository's
/// unique constraint decides which one wins.
pub struct AliasAllocator {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
    settings: AllocatorSettings,
}

impl AliasAllocator {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        settings: AllocatorSettings,
    ) -> Self {
        Self {
            repository,
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> AllocatorSettings {
        self.settings
    }

    /// Returns the alias to use for a new link.
    ///
    /// A non-empty `requested` alias is validated and returned unchanged.
    /// Otherwise up to `max_attempts` candidates are generated and the first
    /// one the repository reports as free is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidAlias`] if `requested` has characters outside
    /// `[A-Za-z0-9_-]`.
    /// Returns [`AppError::AliasGenerationExhausted`] if every candidate collided.
    /// Propagates the first existence-check error unchanged.
    pub async fn allocate(&self, requested: Option<&str>) -> Result<String, AppError> {
        match requested {
            Some(alias) if !alias.is_empty() => {
                validate_alias(alias)?;
                Ok(alias.to_string())
            }
            _ => self.generate_unique_alias().await,
        }
    }

    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        let AllocatorSettings {
            alias_length,
            max_attempts,
        } = self.settings;

        for attempt in 1..=max_attempts {
            let alias = self.generator.generate(alias_length);

            if !self.repository.exists(&alias).await? {
                return Ok(alias);
            }

            debug!(alias, attempt, "alias collision, generating new one");
        }

        Err(AppError::AliasGenerationExhausted {
            attempts: max_attempts,
        })
    }
}

/// Checks a client-supplied alias against `^[A-Za-z0-9_-]+$`.
///
/// # Errors
///
/// Returns [`AppError::InvalidAlias`] on any other character, or if empty.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if ALIAS_REGEX.is_match(alias) {
        Ok(())
    } else {
        Err(AppError::InvalidAlias(alias.to_string()))
    }
}
