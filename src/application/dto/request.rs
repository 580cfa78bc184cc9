//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{BookingFilter, Document, ServiceFilter};
use crate::shared::query::{non_empty, parse_limit};

/// Query string of `GET /services`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    /// Case-insensitive pattern on the service name
    pub service_name: Option<String>,

    /// Result cap, parsed leniently
    pub show_limit: Option<String>,

    /// Exact provider identifier
    pub email: Option<String>,
}

impl ServiceListQuery {
    pub fn into_filter(self) -> ServiceFilter {
        ServiceFilter {
            name_pattern: non_empty(self.service_name),
            provider_email: non_empty(self.email),
            limit: self.show_limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Query string of `GET /bookings`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub user_email: Option<String>,
    pub provider_email: Option<String>,
}

impl BookingListQuery {
    pub fn into_filter(self) -> BookingFilter {
        BookingFilter {
            user_email: non_empty(self.user_email),
            provider_email: non_empty(self.provider_email),
        }
    }
}

/// Identity claim posted to `/jwt`
///
/// Any additional fields are signed into the token unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[validate(length(min = 1, message = "Email must not be empty"))]
    pub email: String,

    #[serde(flatten)]
    pub extra: Document,
}

/// Status change for `PATCH /bookings/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(length(min = 1, message = "Status must not be empty"))]
    pub status: String,
}
