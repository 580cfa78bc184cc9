//! # Travel Buddy Library
//!
//! Backend for a travel-services marketplace with:
//! - RESTful endpoints for service listings and bookings
//! - MongoDB for persistent storage (or in-memory collections)
//! - Cookie-carried JWT sessions gating the write and booking routes
//!
//! ## Architecture
//!
//! - **Domain Layer**: Documents, filters and repository traits
//! - **Application Layer**: Catalog, booking and token services; DTOs
//! - **Infrastructure Layer**: MongoDB and in-memory repositories
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! travel_buddy/
//! +-- config/         Configuration management
//! +-- domain/         Documents, filters and repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database bootstrap and repositories
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Error type and query helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
