//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("/{id}/upvote", web::put().to(posts::upvote))
                .route("/{id}/downvote", web::put().to(posts::downvote))
                .route("/{id}", web::delete().to(posts::delete)),
        );
}
