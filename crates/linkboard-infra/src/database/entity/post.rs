//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub owner: String,
    pub score: i64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for linkboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            url: model.url,
            owner: model.owner,
            score: model.score,
            timestamp: model.timestamp,
        }
    }
}

/// Conversion from a Domain NewPost to a SeaORM ActiveModel.
///
/// The id is left unset so the database assigns it; the score starts at 0.
impl From<linkboard_core::domain::NewPost> for ActiveModel {
    fn from(post: linkboard_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            url: Set(post.url),
            owner: Set(post.owner),
            score: Set(0),
            timestamp: Set(post.timestamp),
        }
    }
}
