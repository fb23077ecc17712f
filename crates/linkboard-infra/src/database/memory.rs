//! In-memory repository - used as fallback when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use linkboard_core::domain::{NewPost, Post, VoteDirection};
use linkboard_core::error::RepoError;
use linkboard_core::ports::PostRepository;

struct Store {
    posts: HashMap<i64, Post>,
    next_id: i64,
}

/// In-memory post repository using a HashMap behind an async RwLock.
///
/// This is the fallback implementation when `DATABASE_URL` is not set, and
/// the backing store for handler tests. Note: data is lost on process
/// restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let post = Post {
            id,
            title: new_post.title,
            url: new_post.url,
            owner: new_post.owner,
            score: 0,
            timestamp: new_post.timestamp,
        };
        store.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn adjust_score(&self, id: i64, direction: VoteDirection) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;

        match store.posts.get_mut(&id) {
            Some(post) => {
                post.score += direction.delta();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).map(|_| 1).unwrap_or(0))
    }
}
