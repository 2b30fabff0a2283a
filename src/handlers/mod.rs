/// HTTP handlers for the blog-service API
///
/// Each handler extracts and validates request parameters, invokes exactly
/// one repository or ranking operation, and serializes the result. No
/// authentication header is validated.
pub mod comments;
pub mod posts;
pub mod wishlist;

// Re-export handler functions at module level
pub use comments::{create_comment, list_comments};
pub use posts::{create_post, get_post, list_posts, top_posts, total_posts, update_post};
pub use wishlist::{count_wishlist, create_wishlist_entry, delete_wishlist_entry, list_wishlist};

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::{AppError, Result};

/// Response body for operations that insert a single document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub inserted_id: String,
}

impl CreatedResponse {
    pub fn new(id: ObjectId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}

/// Parse a raw request identifier into a store key.
///
/// A malformed identifier is a client error, distinct from a well-formed one
/// that matches nothing.
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::ValidationError(format!("malformed identifier: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_well_formed_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_object_id_rejects_malformed_input() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
