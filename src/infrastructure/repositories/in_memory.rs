//! In-Memory Repositories
//!
//! Process-local collections for running without a MongoDB deployment and
//! for exercising the HTTP layer in tests. Documents keep insertion order and
//! carry their `_id` as a hex string, matching what the MongoDB repositories
//! return.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::{
    str_field, BookingFilter, BookingRepository, DeleteAck, Document, InsertAck, ObjectId,
    ServiceFilter, ServiceRepository, UpdateAck, ID_FIELD, PROVIDER_EMAIL_FIELD,
    SERVICE_NAME_FIELD, STATUS_FIELD, USER_EMAIL_FIELD,
};
use crate::shared::error::AppError;

/// An ordered, lock-protected list of documents.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    fn insert(&self, mut document: Document) -> InsertAck {
        let id = ObjectId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
        self.documents.write().push(document);
        InsertAck::new(id)
    }

    fn find_by_id(&self, id: &ObjectId) -> Option<Document> {
        let hex = id.to_hex();
        self.documents
            .read()
            .iter()
            .find(|doc| str_field(doc, ID_FIELD) == Some(hex.as_str()))
            .cloned()
    }

    fn filter<F>(&self, predicate: F, limit: Option<i64>) -> Vec<Document>
    where
        F: Fn(&Document) -> bool,
    {
        let limit = limit
            .and_then(|n| usize::try_from(n.unsigned_abs()).ok())
            .unwrap_or(usize::MAX);

        self.documents
            .read()
            .iter()
            .filter(|doc| predicate(doc))
            .take(limit)
            .cloned()
            .collect()
    }

    fn set_fields(&self, id: &ObjectId, fields: Document, upsert: bool) -> UpdateAck {
        let hex = id.to_hex();
        let mut documents = self.documents.write();

        if let Some(existing) = documents
            .iter_mut()
            .find(|doc| str_field(doc, ID_FIELD) == Some(hex.as_str()))
        {
            let mut modified = false;
            for (key, value) in fields {
                if existing.get(&key) != Some(&value) {
                    existing.insert(key, value);
                    modified = true;
                }
            }
            return UpdateAck::matched(modified);
        }

        if !upsert {
            return UpdateAck::unmatched();
        }

        let mut document = fields;
        document.insert(ID_FIELD.to_string(), Value::String(hex));
        documents.push(document);
        UpdateAck::upserted(*id)
    }

    fn delete(&self, id: &ObjectId) -> DeleteAck {
        let hex = id.to_hex();
        let mut documents = self.documents.write();
        let before = documents.len();
        documents.retain(|doc| str_field(doc, ID_FIELD) != Some(hex.as_str()));
        DeleteAck::new((before - documents.len()) as u64)
    }
}

fn field_equals(document: &Document, field: &str, expected: Option<&str>) -> bool {
    expected.map_or(true, |expected| str_field(document, field) == Some(expected))
}

/// In-memory service repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceRepository {
    collection: Arc<MemoryCollection>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn find(&self, filter: &ServiceFilter) -> Result<Vec<Document>, AppError> {
        let name_regex = match filter.name_regex() {
            Some(None) => return Ok(Vec::new()),
            Some(Some(regex)) => Some(regex),
            None => None,
        };

        let provider = filter.provider_email.as_deref();

        Ok(self.collection.filter(
            |doc| {
                let name_matches = name_regex.as_ref().map_or(true, |regex| {
                    str_field(doc, SERVICE_NAME_FIELD).is_some_and(|name| regex.is_match(name))
                });
                name_matches && field_equals(doc, PROVIDER_EMAIL_FIELD, provider)
            },
            filter.limit,
        ))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Document>, AppError> {
        Ok(self.collection.find_by_id(id))
    }

    async fn insert(&self, document: Document) -> Result<InsertAck, AppError> {
        Ok(self.collection.insert(document))
    }

    async fn upsert_fields(&self, id: &ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        Ok(self.collection.set_fields(id, fields, true))
    }

    async fn delete(&self, id: &ObjectId) -> Result<DeleteAck, AppError> {
        Ok(self.collection.delete(id))
    }
}

/// In-memory booking repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    collection: Arc<MemoryCollection>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Document>, AppError> {
        let user = filter.user_email.as_deref();
        let provider = filter.provider_email.as_deref();

        Ok(self.collection.filter(
            |doc| {
                field_equals(doc, USER_EMAIL_FIELD, user)
                    && field_equals(doc, PROVIDER_EMAIL_FIELD, provider)
            },
            None,
        ))
    }

    async fn insert(&self, document: Document) -> Result<InsertAck, AppError> {
        Ok(self.collection.insert(document))
    }

    async fn set_status(&self, id: &ObjectId, status: &str) -> Result<UpdateAck, AppError> {
        let mut fields = Document::new();
        fields.insert(STATUS_FIELD.to_string(), Value::String(status.to_string()));
        Ok(self.collection.set_fields(id, fields, false))
    }
}
