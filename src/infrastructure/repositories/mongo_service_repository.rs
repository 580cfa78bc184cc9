//! Service Repository Implementation
//!
//! MongoDB implementation of the ServiceRepository trait.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    error::ErrorKind,
    Collection,
};

use crate::domain::{
    DeleteAck, Document, InsertAck, ObjectId, ServiceFilter, ServiceRepository, UpdateAck,
    PROVIDER_EMAIL_FIELD, SERVICE_NAME_FIELD,
};
use crate::infrastructure::database::{from_bson, to_bson, MongoStore, SERVICES_COLLECTION};
use crate::shared::error::AppError;

/// Server error code for a `$regex` the server cannot compile
const INVALID_REGEX: i32 = 51091;

/// Generic bad-value code older servers report for the same condition
const BAD_VALUE: i32 = 2;

/// Whether a command failure means the server rejected the name pattern.
fn is_invalid_pattern(code: i32, message: &str) -> bool {
    code == INVALID_REGEX
        || (code == BAD_VALUE && message.to_ascii_lowercase().contains("regular expression"))
}

fn rejected_pattern(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Command(command) => is_invalid_pattern(command.code, &command.message),
        _ => false,
    }
}

/// MongoDB service repository.
#[derive(Clone)]
pub struct MongoServiceRepository {
    store: MongoStore,
}

impl MongoServiceRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }

    async fn collection(&self) -> Result<Collection<bson::Document>, AppError> {
        Ok(self.store.collection(SERVICES_COLLECTION).await?)
    }
}

#[async_trait]
impl ServiceRepository for MongoServiceRepository {
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Document>, AppError> {
        let mut query = doc! {};

        // Pattern syntax is the server's; it reports patterns it cannot compile
        if let Some(pattern) = filter.name_pattern.as_deref() {
            query.insert(
                SERVICE_NAME_FIELD,
                doc! { "$regex": pattern, "$options": "i" },
            );
        }

        if let Some(email) = filter.provider_email.as_deref() {
            query.insert(PROVIDER_EMAIL_FIELD, email);
        }

        let collection = self.collection().await?;
        let mut find = collection.find(query);
        if let Some(limit) = filter.limit {
            find = find.limit(limit);
        }

        let documents: Result<Vec<bson::Document>, _> = match find.await {
            Ok(cursor) => cursor.try_collect().await,
            Err(e) => Err(e),
        };

        match documents {
            Ok(documents) => Ok(documents.into_iter().map(from_bson).collect()),
            Err(e) if filter.name_pattern.is_some() && rejected_pattern(&e) => {
                tracing::debug!(
                    pattern = filter.name_pattern.as_deref(),
                    error = %e,
                    "Unparseable service name pattern, returning no matches"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Document>, AppError> {
        let document = self.collection().await?.find_one(doc! { "_id": *id }).await?;

        Ok(document.map(from_bson))
    }

    async fn insert(&self, document: Document) -> Result<InsertAck, AppError> {
        let result = self
            .collection()
            .await?
            .insert_one(to_bson(&document)?)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Insert did not yield an ObjectId".into()))?;

        Ok(InsertAck::new(id))
    }

    async fn upsert_fields(&self, id: &ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        let result = self
            .collection()
            .await?
            .update_one(doc! { "_id": *id }, doc! { "$set": to_bson(&fields)? })
            .upsert(true)
            .await?;

        let upserted_id = result.upserted_id.as_ref().and_then(|id| id.as_object_id());

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id: upserted_id.map(|id| id.to_hex()),
        })
    }

    async fn delete(&self, id: &ObjectId) -> Result<DeleteAck, AppError> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(DeleteAck::new(result.deleted_count))
    }
}
