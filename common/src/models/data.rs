//! Response models for the data route.

use serde::{Deserialize, Serialize};

/// Body returned by `GET /data`.
///
/// The wire key is fixed to `"Connected to"`; clients match on it literally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse {
    /// Name of the database the query ran against.
    #[serde(rename = "Connected to")]
    pub connected_to: String,
}

impl DataResponse {
    /// Creates a response for the given database name.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            connected_to: database.into(),
        }
    }
}
