use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Post entity - a submitted link with its vote tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub owner: String,
    pub score: i64,
    /// Milliseconds since the Unix epoch, assigned server-side at creation.
    pub timestamp: i64,
}

/// A post that has been validated but not yet persisted.
///
/// The storage layer assigns `id` on insert; `score` starts at 0.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub url: String,
    pub owner: String,
    pub timestamp: i64,
}

impl NewPost {
    /// Validate the submitted fields and stamp the creation time.
    ///
    /// Checks run in order: title, url, owner. The first violation is
    /// returned and nothing is stamped.
    pub fn new(title: String, url: String, owner: String) -> Result<Self, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        // Minimal scheme-presence check, not full URL validation.
        if !url.contains(':') {
            return Err(ValidationError::InvalidUrl);
        }
        if owner.is_empty() {
            return Err(ValidationError::MissingOwner);
        }

        Ok(Self {
            title,
            url,
            owner,
            timestamp: Utc::now().timestamp_millis(),
        })
    }
}

/// Direction of a vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed score change this vote applies.
    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_stamps_creation_time() {
        let before = Utc::now().timestamp_millis();
        let post = NewPost::new(
            "Hi".to_string(),
            "http://x".to_string(),
            "alice".to_string(),
        )
        .unwrap();
        assert!(post.timestamp >= before);
    }

    #[test]
    fn empty_title_is_rejected_first() {
        let err = NewPost::new(String::new(), String::new(), String::new()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingTitle));
    }

    #[test]
    fn url_without_colon_is_rejected() {
        let err = NewPost::new(
            "Hi".to_string(),
            "example.com".to_string(),
            "alice".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl));
    }

    #[test]
    fn empty_owner_is_rejected() {
        let err =
            NewPost::new("Hi".to_string(), "http://x".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingOwner));
    }

    #[test]
    fn vote_deltas() {
        assert_eq!(VoteDirection::Up.delta(), 1);
        assert_eq!(VoteDirection::Down.delta(), -1);
    }
}
