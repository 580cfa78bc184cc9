//! Booking Service
//!
//! Bookings are listed only for the identity in the session token, created
//! as-is and moved between states through their `status` field.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::BookingListQuery;
use crate::domain::{parse_object_id, without_id, BookingRepository, Document, InsertAck, UpdateAck};
use crate::shared::error::AppError;

/// Booking service trait
#[async_trait]
pub trait BookingService: Send + Sync {
    /// List bookings for `identity`, which must be the queried user or provider.
    async fn list_for(
        &self,
        identity: &str,
        query: BookingListQuery,
    ) -> Result<Vec<Document>, BookingError>;

    /// Record a new booking.
    async fn create(&self, document: Document) -> Result<InsertAck, BookingError>;

    /// Change only the status of a booking.
    async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck, BookingError>;
}

/// Booking service errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Identity does not match the requested bookings")]
    Forbidden,

    #[error("Invalid booking id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<BookingError> for AppError {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::Forbidden => AppError::forbidden(),
            BookingError::InvalidId(id) => {
                AppError::InvalidId(format!("'{}' is not a valid id", id))
            }
            BookingError::Store(e) => e,
        }
    }
}

/// BookingService implementation
pub struct BookingServiceImpl {
    repo: Arc<dyn BookingRepository>,
}

impl BookingServiceImpl {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn list_for(
        &self,
        identity: &str,
        query: BookingListQuery,
    ) -> Result<Vec<Document>, BookingError> {
        let filter = query.into_filter();

        if !filter.is_scoped_to(identity) {
            tracing::warn!(identity, ?filter, "Booking list outside token identity");
            return Err(BookingError::Forbidden);
        }

        Ok(self.repo.find(&filter).await?)
    }

    async fn create(&self, document: Document) -> Result<InsertAck, BookingError> {
        let ack = self.repo.insert(without_id(document)).await?;
        tracing::info!(booking_id = %ack.inserted_id, "Booking created");

        Ok(ack)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<UpdateAck, BookingError> {
        let oid = parse_object_id(id).map_err(|_| BookingError::InvalidId(id.to_string()))?;

        let ack = self.repo.set_status(&oid, status).await?;
        tracing::info!(
            booking_id = %oid,
            status,
            matched = ack.matched_count,
            "Booking status updated"
        );

        Ok(ack)
    }
}
