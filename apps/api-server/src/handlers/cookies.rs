//! Demonstration cookie endpoints.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::{Map, Value};

use postboard_shared::dto::MessageResponse;

pub const COOKIE_NAME: &str = "session_demo";
pub const COOKIE_VALUE: &str = "postboard-demo";

fn demo_cookie(value: &str) -> Cookie<'static> {
    Cookie::build(COOKIE_NAME, value.to_string())
        .path("/")
        .http_only(true)
        .max_age(Duration::hours(1))
        .finish()
}

/// GET /set-cookie
pub async fn set_cookie() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(demo_cookie(COOKIE_VALUE))
        .json(MessageResponse::new("Cookie set"))
}

/// GET /get-cookie - `null` when the cookie is absent.
pub async fn get_cookie(req: HttpRequest) -> HttpResponse {
    let value = req.cookie(COOKIE_NAME).map(|c| c.value().to_string());

    let mut body = Map::new();
    body.insert(COOKIE_NAME.to_string(), Value::from(value));
    HttpResponse::Ok().json(body)
}

/// GET /del-cookie
pub async fn delete_cookie() -> HttpResponse {
    let mut cookie = demo_cookie("");
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Cookie deleted"))
}
