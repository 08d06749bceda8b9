//! Author endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{AuthorDto, PageQuery, Paged, Role},
    AppState,
};

use super::AuthenticatedUser;

/// List authors, paged
#[utoipa::path(
    get,
    path = "/author",
    tag = "author",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of authors", body = Paged<AuthorDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paged<AuthorDto>>> {
    principal.require_any(&[Role::User, Role::Admin])?;

    let authors = state.services.authors.get_all_authors(&page).await?;
    Ok(Json(authors))
}
