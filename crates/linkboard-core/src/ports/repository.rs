use async_trait::async_trait;

use crate::domain::{NewPost, Post, VoteDirection};
use crate::error::RepoError;

/// Storage operations over the `posts` table.
///
/// The vote and delete operations report the number of rows affected instead
/// of failing on zero rows: the handlers classify a zero-row result as
/// "not found" or "gone" depending on what the request has already observed.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post and return the stored row with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Fetch a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Apply `score = score ± 1` to the row matching `id` in a single
    /// conditional update. Returns the number of rows affected.
    async fn adjust_score(&self, id: i64, direction: VoteDirection) -> Result<u64, RepoError>;

    /// Delete the row matching `id`. Returns the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, RepoError>;
}
