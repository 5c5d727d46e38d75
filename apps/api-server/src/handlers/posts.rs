//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use postboard_core::domain::{Post, PostInput};
use postboard_shared::dto::{PostRequest, PostResponse, SearchQuery, validation_messages};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_hex(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(to_response).collect()
}

fn parse_input(body: PostRequest) -> AppResult<PostInput> {
    body.validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))?;
    Ok(PostInput::new(body.title, body.content)?)
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let input = parse_input(body.into_inner())?;
    let post = state.posts.create(input).await?;
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// GET /posts/search?titulo=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search_by_title(&query.titulo).await?;
    Ok(HttpResponse::Ok().json(to_responses(posts)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.posts.get_by_id(&id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(not_found(&id)),
    }
}

/// PATCH /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = parse_input(body.into_inner())?;
    match state.posts.update(&id, input).await? {
        Some(post) => Ok(HttpResponse::Ok().json(to_response(post))),
        None => Err(not_found(&id)),
    }
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.posts.delete(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(not_found(&id))
    }
}
