//! # Domain Entities
//!
//! The two collections the marketplace works with.
//!
//! - **Service**: a travel-service listing offered by a provider
//! - **Booking**: a user's reservation request against a service
//!
//! Both are schemaless documents; each module names the fields the server
//! reads and defines the repository trait for its collection. The traits are
//! implemented in the infrastructure layer.

mod booking;
mod service;

pub use booking::{BookingFilter, BookingRepository, STATUS_FIELD, USER_EMAIL_FIELD};
pub use service::{
    compile_name_pattern, ServiceFilter, ServiceRepository, PROVIDER_EMAIL_FIELD,
    SERVICE_NAME_FIELD,
};

#[cfg(test)]
pub use booking::MockBookingRepository;
#[cfg(test)]
pub use service::MockServiceRepository;
