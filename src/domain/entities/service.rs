//! Service listing and repository trait.
//!
//! A service is a travel offering published by a provider. Apart from the
//! identifier nothing is enforced: `service_name` and `provider_email` are
//! the only fields the server itself looks at.

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};

use crate::domain::value_objects::{DeleteAck, Document, InsertAck, ObjectId, UpdateAck};
use crate::shared::error::AppError;

/// Display name, searched by `serviceName`
pub const SERVICE_NAME_FIELD: &str = "service_name";

/// Provider identifier, matched exactly by `email`
pub const PROVIDER_EMAIL_FIELD: &str = "provider_email";

/// Criteria for listing services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    /// Case-insensitive pattern applied to `service_name`
    pub name_pattern: Option<String>,

    /// Exact `provider_email` match
    pub provider_email: Option<String>,

    /// Maximum number of documents returned; `None` is unbounded
    pub limit: Option<i64>,
}

impl ServiceFilter {
    /// Compiled name pattern.
    ///
    /// `Some(None)` means a pattern was given but does not compile, which
    /// callers treat as matching nothing. This is the in-process dialect,
    /// which has no lookaround or backreferences; MongoDB compiles patterns
    /// with its own engine.
    pub fn name_regex(&self) -> Option<Option<Regex>> {
        self.name_pattern
            .as_deref()
            .map(|pattern| compile_name_pattern(pattern))
    }
}

/// Build the case-insensitive search regex for a user-supplied pattern.
pub fn compile_name_pattern(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Repository trait for the `services` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// List services matching the filter, in natural order.
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Document>, AppError>;

    /// Find a service by its identifier.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Document>, AppError>;

    /// Insert a new service; the store assigns the identifier.
    async fn insert(&self, document: Document) -> Result<InsertAck, AppError>;

    /// Set every given field on the service, creating it when missing.
    async fn upsert_fields(&self, id: &ObjectId, fields: Document) -> Result<UpdateAck, AppError>;

    /// Remove a service.
    async fn delete(&self, id: &ObjectId) -> Result<DeleteAck, AppError>;
}
