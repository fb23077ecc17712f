//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter};

use linkboard_core::domain::{NewPost, Post, VoteDirection};
use linkboard_core::error::RepoError;
use linkboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = new_post.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn adjust_score(&self, id: i64, direction: VoteDirection) -> Result<u64, RepoError> {
        // Single conditional UPDATE so concurrent votes compose at the
        // database without a read-modify-write in the application.
        let score_expr = match direction {
            VoteDirection::Up => Expr::col(post::Column::Score).add(1),
            VoteDirection::Down => Expr::col(post::Column::Score).sub(1),
        };

        let result = PostEntity::update_many()
            .col_expr(post::Column::Score, score_expr)
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
