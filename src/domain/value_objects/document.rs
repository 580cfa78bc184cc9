//! Schemaless documents and their identifiers.

use serde_json::{Map, Value};

use crate::shared::error::AppError;

pub use mongodb::bson::oid::ObjectId;

/// A schemaless JSON object as stored in a collection.
pub type Document = Map<String, Value>;

/// Field holding the store-assigned identifier
pub const ID_FIELD: &str = "_id";

/// Parse a 24-hex-character object identifier from a path segment.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::InvalidId(format!("'{}' is not a valid id", raw)))
}

/// Drop any client-supplied `_id`; identifiers belong to the store.
pub fn without_id(mut document: Document) -> Document {
    document.remove(ID_FIELD);
    document
}

/// String value of `field`, if present and a string.
pub fn str_field<'a>(document: &'a Document, field: &str) -> Option<&'a str> {
    document.get(field).and_then(Value::as_str)
}
