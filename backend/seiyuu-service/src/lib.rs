/// Seiyuu Service Library
///
/// Backend for SeiyuuHub, a fan site for voice actors ("seiyuu"). Posts and
/// comments live in PostgreSQL; voice-actor data comes live from AniList.
///
/// # Modules
///
/// - `gateway`: single entry point for store and AniList calls, owns the name cache
/// - `views`: one view model per client screen, plus the user actions on it
/// - `components`: stateless building blocks the views render with
/// - `router`: client routes and HTTP route registration
/// - `handlers`: actix-web request handlers
/// - `db`: `PostStore` trait with PostgreSQL and in-memory implementations
/// - `models`: posts, comments and their inputs
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod router;
pub mod views;

pub use config::Config;
pub use error::{AppError, Result};
pub use gateway::{Gateway, GatewaySettings};

/// Embedded schema migrations for the `"Posts"` and `"Comments"` tables
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
