//! # Domain Layer
//!
//! Documents, identifiers, filters and the repository contracts for the
//! `services` and `bookings` collections.
//!
//! ## Structure
//!
//! - **entities**: Service and Booking field names, filters and repository traits
//! - **value_objects**: Documents, object ids and write acknowledgements

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
