//! The JSON envelope every route answers with.
//!
//! # Design
//! Envelopes are plain data: the service builds them, the transport only
//! serializes. Not-found outcomes are `success: false` envelopes, not
//! transport errors. The message texts are matched verbatim by existing
//! clients, misspellings included.

use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "Server is healthy";
pub const LIST_FETCHED: &str = "Data fetched successfullly";
pub const CREATED: &str = "Data added successfullly";
pub const SEARCH_FETCHED: &str = "Data fetched successfully";
pub const SEARCH_EMPTY: &str = "Item not found";
pub const ITEM_FETCHED: &str = "Item fetched successfullly";
pub const DATA_NOT_FOUND: &str = "Data not found";
pub const DELETED: &str = "Item deleted successfully";
pub const UPDATED: &str = "Item updated successfully";
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// `{success, data?, message}`. `data` is left out of the JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.to_string(),
        }
    }

    /// Success without a payload.
    pub fn ok_empty(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            message: message.to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: message.to_string(),
        }
    }
}
