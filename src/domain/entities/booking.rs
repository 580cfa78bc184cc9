//! Booking and repository trait.
//!
//! A booking is a user's reservation request against a service. Bookings
//! are created and have their `status` changed; they are never deleted here.

use async_trait::async_trait;

use crate::domain::value_objects::{Document, InsertAck, ObjectId, UpdateAck};
use crate::shared::error::AppError;

/// Identity of the user who booked
pub const USER_EMAIL_FIELD: &str = "user_email";

/// Booking lifecycle state, free text
pub const STATUS_FIELD: &str = "status";

/// Criteria for listing bookings. Both fields must match when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub user_email: Option<String>,
    pub provider_email: Option<String>,
}

impl BookingFilter {
    /// Whether `identity` is one of the identifiers this filter is scoped to.
    pub fn is_scoped_to(&self, identity: &str) -> bool {
        [&self.user_email, &self.provider_email]
            .into_iter()
            .flatten()
            .any(|scope| scope == identity)
    }
}

/// Repository trait for the `bookings` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// List bookings matching the filter, in natural order.
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Document>, AppError>;

    /// Insert a new booking; the store assigns the identifier.
    async fn insert(&self, document: Document) -> Result<InsertAck, AppError>;

    /// Set only the `status` field of an existing booking.
    async fn set_status(&self, id: &ObjectId, status: &str) -> Result<UpdateAck, AppError>;
}
