//! Booking Repository Implementation
//!
//! MongoDB implementation of the BookingRepository trait.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    Collection,
};

use crate::domain::{
    BookingFilter, BookingRepository, Document, InsertAck, ObjectId, UpdateAck,
    PROVIDER_EMAIL_FIELD, STATUS_FIELD, USER_EMAIL_FIELD,
};
use crate::infrastructure::database::{from_bson, to_bson, MongoStore, BOOKINGS_COLLECTION};
use crate::shared::error::AppError;

/// MongoDB booking repository.
#[derive(Clone)]
pub struct MongoBookingRepository {
    store: MongoStore,
}

impl MongoBookingRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }

    async fn collection(&self) -> Result<Collection<bson::Document>, AppError> {
        Ok(self.store.collection(BOOKINGS_COLLECTION).await?)
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Document>, AppError> {
        let mut query = doc! {};
        if let Some(email) = filter.user_email.as_deref() {
            query.insert(USER_EMAIL_FIELD, email);
        }
        if let Some(email) = filter.provider_email.as_deref() {
            query.insert(PROVIDER_EMAIL_FIELD, email);
        }

        let documents: Vec<bson::Document> = self
            .collection()
            .await?
            .find(query)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(from_bson).collect())
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

    async fn set_status(&self, id: &ObjectId, status: &str) -> Result<UpdateAck, AppError> {
        let mut fields = doc! {};
        fields.insert(STATUS_FIELD, status);

        let result = self
            .collection()
            .await?
            .update_one(doc! { "_id": *id }, doc! { "$set": fields })
            .await?;

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: 0,
            upserted_id: None,
        })
    }
}
