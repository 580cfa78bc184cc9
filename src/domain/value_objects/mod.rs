//! # Value Objects
//!
//! Immutable value types shared by the entities and repositories.

pub mod acknowledgement;
pub mod document;

pub use acknowledgement::{DeleteAck, InsertAck, UpdateAck};
pub use document::{parse_object_id, str_field, without_id, Document, ObjectId, ID_FIELD};
