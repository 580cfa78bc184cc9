//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CatalogService**: Service listing search and maintenance
//! - **BookingService**: Booking listing, creation and status changes
//! - **TokenService**: Session token signing and verification

pub mod booking_service;
pub mod catalog_service;
pub mod token_service;

pub use booking_service::{BookingError, BookingService, BookingServiceImpl};
pub use catalog_service::{CatalogError, CatalogService, CatalogServiceImpl};
pub use token_service::{JwtTokenService, SessionClaims, TokenError, TokenService};
