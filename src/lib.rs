/// Blog Service Library
///
/// Content-listing backend for blog posts, per-post comments, and per-user
/// wishlist entries, stored in MongoDB.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and boundary validation
/// - `models`: Data structures for posts, comments, wishlist entries
/// - `services`: Ranking engine (top posts by word count)
/// - `db`: Collection access and repository functions
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
