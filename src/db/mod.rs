/// Database access layer
///
/// Typed collection accessors plus repository functions for posts, comments,
/// and wishlist entries. Repositories are free async functions over a shared
/// `mongodb::Database` handle; the driver pools connections internally and
/// serializes per-document writes, so no in-process locking is needed.
use mongodb::{Collection, Database};

use crate::models::{Comment, Post, WishlistEntry};

pub mod comment_repo;
pub mod post_repo;
pub mod wishlist_repo;

pub const POSTS_COLLECTION: &str = "posts";
pub const COMMENTS_COLLECTION: &str = "comments";
pub const WISHLIST_COLLECTION: &str = "wishlist";

pub fn posts(db: &Database) -> Collection<Post> {
    db.collection(POSTS_COLLECTION)
}

pub fn comments(db: &Database) -> Collection<Comment> {
    db.collection(COMMENTS_COLLECTION)
}

pub fn wishlist(db: &Database) -> Collection<WishlistEntry> {
    db.collection(WISHLIST_COLLECTION)
}
