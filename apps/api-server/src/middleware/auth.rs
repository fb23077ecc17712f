//! Caller identity extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;

/// Caller identity taken from the `username` request header.
///
/// Extraction never fails: an absent, empty, or non-UTF-8 header yields
/// `None`. Handlers call [`require`](CallerIdentity::require) once cheaper
/// checks (such as path parsing) have passed, so error precedence stays with
/// the handler.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Option<String>);

impl CallerIdentity {
    /// Enforce that the caller supplied an identity.
    pub fn require(self) -> Result<String, AppError> {
        self.0.ok_or(AppError::Unauthorized)
    }
}

impl FromRequest for CallerIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let username = req
            .headers()
            .get("username")
            .and_then(|value| value.to_str().ok())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        ready(Ok(CallerIdentity(username)))
    }
}
