//! Small response bodies shared by several endpoints

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }`, returned by deletes and logout.
///
/// The field defaults so a 204 (parsed as `{}`) still decodes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `{ "count": n }`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
}
