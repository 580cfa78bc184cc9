//! Data Transfer Objects
//!
//! Request and response shapes of the HTTP API.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
