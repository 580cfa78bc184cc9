//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod booking;
pub mod health;
pub mod service;
pub mod session;
