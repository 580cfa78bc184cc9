//! Conversion between wire JSON documents and BSON.
//!
//! Object ids leave the store as their 24-character hex form so clients see
//! `"_id": "65a1..."` rather than extended JSON.

use mongodb::bson::{self, Bson};
use serde_json::Value;

use crate::domain::{Document, ID_FIELD};
use crate::shared::error::AppError;

/// Convert a client document into BSON for storage.
pub fn to_bson(document: &Document) -> Result<bson::Document, AppError> {
    bson::to_document(document)
        .map_err(|e| AppError::BadRequest(format!("Unsupported document: {}", e)))
}

/// Convert a stored BSON document into its client representation.
pub fn from_bson(mut document: bson::Document) -> Document {
    if let Ok(id) = document.get_object_id(ID_FIELD) {
        document.insert(ID_FIELD, id.to_hex());
    }

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}
