//! # Linkboard Infrastructure
//!
//! Concrete implementations of the ports defined in `linkboard-core`.
//! This crate contains the PostgreSQL repository and the in-memory fallback
//! used when no database is configured.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository, connect};
