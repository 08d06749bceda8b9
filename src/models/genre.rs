//! Genre model and transfer types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Genre row as persisted
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Genre transfer object, also embedded in book requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenreDto {
    pub id: Uuid,
    #[validate(length(min = 3, message = "genre name must be at least 3 characters"))]
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}
