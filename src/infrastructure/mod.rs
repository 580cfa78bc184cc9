//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - MongoDB client bootstrap and document conversion
//! - Repositories backed by MongoDB or by process memory

pub mod database;
pub mod repositories;
