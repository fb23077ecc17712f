//! Post handlers: submit, vote, delete.

use actix_web::{HttpResponse, web};

use linkboard_core::domain::{NewPost, Post, VoteDirection};
use linkboard_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::auth::CallerIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        url: post.url,
        owner: post.owner,
        score: post.score,
        timestamp: post.timestamp,
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid ID".to_string()))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validation stops at the first bad field, before any storage access.
    let new_post = NewPost::new(req.title, req.url, req.owner)?;

    let post = state.posts.insert(new_post).await?;
    tracing::debug!(id = post.id, owner = %post.owner, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}/upvote
pub async fn upvote(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    vote(&state, &path, VoteDirection::Up).await
}

/// PUT /posts/{id}/downvote
pub async fn downvote(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    vote(&state, &path, VoteDirection::Down).await
}

async fn vote(state: &AppState, raw_id: &str, direction: VoteDirection) -> AppResult<HttpResponse> {
    let id = parse_id(raw_id)?;

    // One conditional UPDATE; zero rows means the id never matched.
    let affected = state.posts.adjust_score(id, direction).await?;
    if affected == 0 {
        return Err(AppError::NotFound("not found".to_string()));
    }

    // Re-fetch to return the full row. A concurrent delete can win the race
    // between the update and this read; that is reported as 410, not 404.
    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(AppError::Gone("gone".to_string())),
    }
}

/// DELETE /posts/{id}
///
/// The `username` header must match the stored owner. Ownership mismatch and
/// a missing header both surface as 401; only an unknown id is a 404.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    identity: CallerIdentity,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let username = identity.require()?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;

    if post.owner != username {
        return Err(AppError::Unauthorized);
    }

    // Not transactional with the fetch above; if the row vanished in the
    // window, report it the same way the vote path reports a lost race.
    let affected = state.posts.delete(id).await?;
    if affected == 0 {
        return Err(AppError::Gone(format!("post {}", id)));
    }

    tracing::debug!(id, owner = %username, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
