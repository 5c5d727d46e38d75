//! HTTP handlers and route configuration.

mod cookies;
mod health;
mod posts;
mod secure;

use actix_cors::Cors;
use actix_web::{HttpResponse, web};
use postboard_shared::ErrorResponse;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Post identifiers: exactly 24 hex digits.
const POST_ID_PATH: &str = "/{id:[0-9a-fA-F]{24}}";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .route("/search", web::get().to(posts::search_posts))
                .service(
                    web::resource(POST_ID_PATH)
                        .route(web::get().to(posts::get_post))
                        .route(web::patch().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                ),
        )
        .route("/secure/posts", web::get().to(secure::list_posts))
        .route("/set-cookie", web::get().to(cookies::set_cookie))
        .route("/get-cookie", web::get().to(cookies::get_cookie))
        .route("/del-cookie", web::get().to(cookies::delete_cookie));
}

/// CORS policy: any origin, method and header.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Fallback for unmatched routes, including malformed post ids.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("No such resource"))
}
