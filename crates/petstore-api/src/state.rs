//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Holds the pet repository and configuration.

use petstore_core::{MapRepository, Pet, PetId, PetStatus, Tag};

/// Pet storage: a typed wrapper around the generic [`MapRepository`],
/// adding the status and tag queries the find endpoints need.
#[derive(Debug, Clone, Default)]
pub struct PetRepository {
    pets: MapRepository<PetId, Pet>,
}

impl PetRepository {
    /// Create an empty pet repository.
    pub fn new() -> Self {
        Self {
            pets: MapRepository::new(),
        }
    }

    /// Insert or replace a pet, keyed by its identifier.
    ///
    /// Replacement is wholesale (last-write-wins); returns the previous
    /// record if one existed.
    pub fn add(&self, pet: Pet) -> Option<Pet> {
        self.pets.insert(pet.id, pet)
    }

    /// Fetch a pet by identifier.
    pub fn get(&self, id: PetId) -> Option<Pet> {
        self.pets.get(&id)
    }

    /// All pets whose status matches any of the given values.
    pub fn find_by_status(&self, statuses: &[PetStatus]) -> Vec<Pet> {
        self.pets.find_where(|p| p.status_matches(statuses))
    }

    /// All pets carrying at least one of the given tags.
    pub fn find_by_tags(&self, tags: &[Tag]) -> Vec<Pet> {
        self.pets.find_where(|p| p.tags_match(tags))
    }

    /// Number of stored pets.
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the repository holds no pets.
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

/// Application configuration.
///
/// Custom `Debug` redacts the `auth_token` to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Static bearer token for authentication.
    /// If `None`, authentication is disabled.
    pub auth_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            auth_token: None,
        }
    }
}

/// Shared application state accessible to all route handlers.
/// Clone-friendly via `Arc` internals in the repository.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory pet store.
    pub pets: PetRepository,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            pets: PetRepository::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_core::PetStatus;

    fn pet(id: i64, status: PetStatus, tags: &[&str]) -> Pet {
        Pet {
            id: PetId::new(id),
            name: format!("pet-{id}"),
            status,
            tags: tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        }
    }

    #[test]
    fn add_then_get_returns_same_data() {
        let repo = PetRepository::new();
        let p = pet(1, PetStatus::Available, &["friendly"]);
        assert!(repo.add(p.clone()).is_none());
        assert_eq!(repo.get(PetId::new(1)), Some(p));
    }

    #[test]
    fn add_replaces_wholesale() {
        let repo = PetRepository::new();
        repo.add(pet(1, PetStatus::Available, &["tag1", "tag2"]));

        // Replacement drops the old tags entirely — no partial merge.
        let replacement = pet(1, PetStatus::Sold, &[]);
        let prev = repo.add(replacement.clone());
        assert_eq!(prev.unwrap().tags.len(), 2);
        assert_eq!(repo.get(PetId::new(1)), Some(replacement));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let repo = PetRepository::new();
        assert!(repo.get(PetId::new(99)).is_none());
    }

    #[test]
    fn find_by_status_returns_exact_matches() {
        let repo = PetRepository::new();
        repo.add(pet(1, PetStatus::Available, &[]));
        repo.add(pet(2, PetStatus::Pending, &[]));
        repo.add(pet(3, PetStatus::Sold, &[]));

        let found = repo.find_by_status(&[PetStatus::Available, PetStatus::Pending]);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.status != PetStatus::Sold));
    }

    #[test]
    fn find_by_tags_returns_pets_with_any_matching_tag() {
        let repo = PetRepository::new();
        repo.add(pet(1, PetStatus::Available, &["tag1"]));
        repo.add(pet(2, PetStatus::Available, &["tag2", "tag3"]));
        repo.add(pet(3, PetStatus::Available, &[]));

        let found = repo.find_by_tags(&[Tag::new("tag3").unwrap()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, PetId::new(2));
    }

    #[test]
    fn app_state_new_is_empty_with_default_config() {
        let state = AppState::new();
        assert!(state.pets.is_empty());
        assert_eq!(state.config.port, 8080);
        assert!(state.config.auth_token.is_none());
    }

    #[test]
    fn app_config_debug_redacts_token() {
        let config = AppConfig {
            port: 3000,
            auth_token: Some("secret-token".to_string()),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("REDACTED"));
    }
}
