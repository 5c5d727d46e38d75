//! Bearer-token extractor.

use actix_web::http::header::{self, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use postboard_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Proof that the request carried an accepted bearer token.
///
/// Use this in handlers to require authorization:
/// ```ignore
/// async fn protected_route(_auth: Authorized) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Authorized;

impl FromRequest for Authorized {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

fn authorize(req: &HttpRequest) -> Result<Authorized, AppError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        AppError::Internal("AppState not found in app data".to_string())
    })?;

    let token = bearer_token(req.headers())?;
    state.tokens.validate_token(token)?;
    Ok(Authorized)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedHeader("header is not valid ASCII".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::MalformedHeader("expected `Bearer <token>`".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(v) = value {
            map.insert(header::AUTHORIZATION, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_bearer_token_extracted() {
        let map = headers(Some("Bearer secreto123"));
        assert_eq!(bearer_token(&map).unwrap(), "secreto123");
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            bearer_token(&headers(None)),
            Err(AuthError::MissingAuth)
        ));
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        assert!(matches!(
            bearer_token(&headers(Some("Basic dXNlcjpwYXNz"))),
            Err(AuthError::MalformedHeader(_))
        ));
        assert!(matches!(
            bearer_token(&headers(Some("secreto123"))),
            Err(AuthError::MalformedHeader(_))
        ));
    }
}
