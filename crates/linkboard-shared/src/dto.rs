//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to submit a new post.
///
/// Fields default to empty strings so that an absent field and an empty
/// field fail validation the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub url: String,
    pub owner: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub owner: String,
    pub score: i64,
    pub timestamp: i64,
}
