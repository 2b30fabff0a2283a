/// Wishlist handlers - HTTP endpoints for wishlist operations
use actix_web::{web, HttpResponse};
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::db::wishlist_repo;
use crate::error::{AppError, Result};
use crate::models::WishlistEntry;

/// Query parameters for the wishlist listing.
#[derive(Debug, Deserialize)]
pub struct ListWishlistQuery {
    /// User identity; absent means every entry across all users.
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistCountResponse {
    pub total_wishlist: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDeleteResponse {
    pub deleted_count: u64,
}

/// GET /my-wishlist/email?email
pub async fn list_wishlist(
    db: web::Data<Database>,
    query: web::Query<ListWishlistQuery>,
) -> Result<HttpResponse> {
    let entries = wishlist_repo::list_entries(&db, query.email.as_deref()).await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// GET /all-wishlist/{userEmail}
pub async fn count_wishlist(
    db: web::Data<Database>,
    user_email: web::Path<String>,
) -> Result<HttpResponse> {
    let count = wishlist_repo::count_by_user(&db, &user_email).await?;

    Ok(HttpResponse::Ok().json(WishlistCountResponse {
        total_wishlist: count,
    }))
}

/// POST /all-wishlist
pub async fn create_wishlist_entry(
    db: web::Data<Database>,
    req: web::Json<WishlistEntry>,
) -> Result<HttpResponse> {
    let id = wishlist_repo::create_entry(&db, req.into_inner()).await?;

    Ok(HttpResponse::Created().json(super::CreatedResponse::new(id)))
}

/// DELETE /my-wishlist/{id}
///
/// Deleting an identifier that matches nothing is NotFound; callers that
/// want idempotent retries treat that as success on their side.
pub async fn delete_wishlist_entry(
    db: web::Data<Database>,
    entry_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = super::parse_object_id(&entry_id)?;

    if wishlist_repo::delete_entry(&db, id).await? {
        Ok(HttpResponse::Ok().json(WishlistDeleteResponse { deleted_count: 1 }))
    } else {
        Err(AppError::NotFound(format!(
            "wishlist entry {entry_id} does not exist"
        )))
    }
}
