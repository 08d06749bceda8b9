//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{BookDto, BookRequest, PageQuery, Paged, Role},
    AppState,
};

use super::AuthenticatedUser;

const MIN_CRITERIA_LEN: usize = 3;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against title, author name and genre name
    pub criteria: String,
}

/// List books, paged
#[utoipa::path(
    get,
    path = "/book",
    tag = "book",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of books", body = Paged<BookDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paged<BookDto>>> {
    principal.require_any(&[Role::User, Role::Admin])?;

    let books = state.services.books.get_books(&page).await?;
    Ok(Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "book",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book details", body = BookDto),
        (status = 404, description = "Book not found", body = crate::error::ApiError)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookDto>> {
    principal.require_any(&[Role::User, Role::Admin])?;

    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Search books by title, author name or genre name
#[utoipa::path(
    get,
    path = "/book/search",
    tag = "book",
    security(("bearer_auth" = [])),
    params(SearchQuery, PageQuery),
    responses(
        (status = 200, description = "Page of matching books", body = Paged<BookDto>),
        (status = 400, description = "Criteria shorter than 3 characters", body = crate::error::ApiError)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paged<BookDto>>> {
    principal.require_any(&[Role::User, Role::Admin])?;

    // Rejected before any query executes
    if query.criteria.chars().count() < MIN_CRITERIA_LEN {
        return Err(AppError::Validation(
            "criteria must be at least 3 characters".to_string(),
        ));
    }

    let books = state
        .services
        .books
        .search_books(&query.criteria, &page)
        .await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/book",
    tag = "book",
    security(("bearer_auth" = [])),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book created", body = BookDto),
        (status = 400, description = "Validation failure", body = crate::error::ApiError),
        (status = 403, description = "Requires the ADMIN role", body = crate::error::ApiError)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Json(request): Json<BookRequest>,
) -> AppResult<Json<BookDto>> {
    principal.require_any(&[Role::Admin])?;
    request.validate()?;

    let created = state.services.books.create_book(request).await?;
    Ok(Json(created))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "book",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Book id")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookDto),
        (status = 400, description = "Validation failure", body = crate::error::ApiError),
        (status = 404, description = "Book not found", body = crate::error::ApiError)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<BookRequest>,
) -> AppResult<Json<BookDto>> {
    principal.require_any(&[Role::Admin])?;
    request.validate()?;

    let updated = state.services.books.update_book(id, request).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "book",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ApiError)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<()> {
    principal.require_any(&[Role::Admin])?;

    state.services.books.delete_book(id).await
}
