//! Catalog Service
//!
//! Service listings: search, fetch, create, merge-update and delete.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::ServiceListQuery;
use crate::domain::{
    parse_object_id, without_id, DeleteAck, Document, InsertAck, ObjectId, ServiceRepository,
    UpdateAck,
};
use crate::shared::error::AppError;

/// Catalog service trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List services matching the query; no criteria returns everything.
    async fn list(&self, query: ServiceListQuery) -> Result<Vec<Document>, CatalogError>;

    /// Fetch one service; `None` when it does not exist.
    async fn get(&self, id: &str) -> Result<Option<Document>, CatalogError>;

    /// Publish a new service.
    async fn create(&self, document: Document) -> Result<InsertAck, CatalogError>;

    /// Overwrite the given fields, creating the service if it is missing.
    async fn update(&self, id: &str, fields: Document) -> Result<UpdateAck, CatalogError>;

    /// Remove a service.
    async fn delete(&self, id: &str) -> Result<DeleteAck, CatalogError>;
}

/// Catalog service errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid service id: {0}")]
    InvalidId(String),

    #[error("Update must set at least one field")]
    EmptyUpdate,

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::InvalidId(id) => {
                AppError::InvalidId(format!("'{}' is not a valid id", id))
            }
            CatalogError::EmptyUpdate => {
                AppError::BadRequest("Update must set at least one field".into())
            }
            CatalogError::Store(e) => e,
        }
    }
}

/// CatalogService implementation
pub struct CatalogServiceImpl {
    repo: Arc<dyn ServiceRepository>,
}

impl CatalogServiceImpl {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }
}

fn object_id(id: &str) -> Result<ObjectId, CatalogError> {
    parse_object_id(id).map_err(|_| CatalogError::InvalidId(id.to_string()))
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list(&self, query: ServiceListQuery) -> Result<Vec<Document>, CatalogError> {
        let filter = query.into_filter();
        tracing::debug!(?filter, "Listing services");

        Ok(self.repo.find(&filter).await?)
    }

    async fn get(&self, id: &str) -> Result<Option<Document>, CatalogError> {
        let id = object_id(id)?;

        Ok(self.repo.find_by_id(&id).await?)
    }

    async fn create(&self, document: Document) -> Result<InsertAck, CatalogError> {
        let ack = self.repo.insert(without_id(document)).await?;
        tracing::info!(service_id = %ack.inserted_id, "Service created");

        Ok(ack)
    }

    async fn update(&self, id: &str, fields: Document) -> Result<UpdateAck, CatalogError> {
        let id = object_id(id)?;

        let fields = without_id(fields);
        if fields.is_empty() {
            return Err(CatalogError::EmptyUpdate);
        }

        let ack = self.repo.upsert_fields(&id, fields).await?;
        tracing::info!(
            service_id = %id,
            matched = ack.matched_count,
            upserted = ack.upserted_count,
            "Service updated"
        );

        Ok(ack)
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, CatalogError> {
        let id = object_id(id)?;

        let ack = self.repo.delete(&id).await?;
        tracing::info!(service_id = %id, deleted = ack.deleted_count, "Service deleted");

        Ok(ack)
    }
}
