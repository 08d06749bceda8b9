//! Genre endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{GenreDto, PageQuery, Paged, Role},
    AppState,
};

use super::AuthenticatedUser;

/// List genres, paged
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genre",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of genres", body = Paged<GenreDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_genres(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paged<GenreDto>>> {
    principal.require_any(&[Role::User, Role::Admin])?;

    let genres = state.services.genres.get_all_genres(&page).await?;
    Ok(Json(genres))
}
