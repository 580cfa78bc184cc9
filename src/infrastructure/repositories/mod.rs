//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **MongoServiceRepository** / **MongoBookingRepository** - the `services`
//!   and `bookings` collections of the configured MongoDB database
//! - **InMemoryServiceRepository** / **InMemoryBookingRepository** -
//!   process-local collections selected with `STORE_DRIVER=memory`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use crate::config::DatabaseSettings;
//! use crate::infrastructure::database::MongoStore;
//! use crate::infrastructure::repositories::{MongoBookingRepository, MongoServiceRepository};
//!
//! fn setup_repositories(settings: DatabaseSettings) {
//!     let store = MongoStore::new(settings);
//!     let services = MongoServiceRepository::new(store.clone());
//!     let bookings = MongoBookingRepository::new(store);
//! }
//! ```

pub mod in_memory;
pub mod mongo_booking_repository;
pub mod mongo_service_repository;

pub use in_memory::{InMemoryBookingRepository, InMemoryServiceRepository};
pub use mongo_booking_repository::MongoBookingRepository;
pub use mongo_service_repository::MongoServiceRepository;
