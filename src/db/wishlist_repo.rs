use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;

use crate::db;
use crate::models::WishlistEntry;

/// Insert a new wishlist entry verbatim and return its generated identifier.
///
/// Duplicate (userEmail, postId) pairs are allowed; no uniqueness constraint
/// is enforced by the store.
pub async fn create_entry(
    db: &Database,
    mut entry: WishlistEntry,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = entry.id.unwrap_or_else(ObjectId::new);
    entry.id = Some(id);
    db::wishlist(db).insert_one(&entry).await?;
    Ok(id)
}

/// List wishlist entries, unordered.
///
/// `user_email = None` returns every entry across all users (same "no filter
/// means all" contract as comments).
pub async fn list_entries(
    db: &Database,
    user_email: Option<&str>,
) -> Result<Vec<WishlistEntry>, mongodb::error::Error> {
    let filter = match user_email {
        Some(email) => doc! { "userEmail": email },
        None => Document::new(),
    };

    db::wishlist(db).find(filter).await?.try_collect().await
}

/// Count wishlist entries for one user; zero when there are none.
pub async fn count_by_user(
    db: &Database,
    user_email: &str,
) -> Result<u64, mongodb::error::Error> {
    db::wishlist(db)
        .count_documents(doc! { "userEmail": user_email })
        .await
}

/// Delete a wishlist entry by ID.
///
/// Returns `true` when one document was deleted and `false` when nothing
/// matched; the caller decides whether a miss is an error.
pub async fn delete_entry(
    db: &Database,
    entry_id: ObjectId,
) -> Result<bool, mongodb::error::Error> {
    let result = db::wishlist(db).delete_one(doc! { "_id": entry_id }).await?;
    Ok(result.deleted_count == 1)
}
