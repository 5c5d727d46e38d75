//! Token-protected endpoints.

use actix_web::{HttpResponse, web};

use crate::middleware::auth::Authorized;
use crate::middleware::error::AppResult;
use crate::state::AppState;

use super::posts;

/// GET /secure/posts - same payload as GET /posts, behind the bearer check.
pub async fn list_posts(_auth: Authorized, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    posts::list_posts(state).await
}
