//! Book model and transfer types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{author::{Author, AuthorDto}, genre::GenreDto};

/// Book row joined with its genre; authors are loaded separately via the
/// `book_authors` junction table.
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub genre_id: Uuid,
    pub genre_name: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    #[sqlx(skip)]
    pub authors: Vec<Author>,
}

/// Book transfer object
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = String, example = "29.99")]
    pub price: Decimal,
    pub authors: Vec<AuthorDto>,
    pub genre: GenreDto,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            price: book.price,
            authors: book.authors.into_iter().map(AuthorDto::from).collect(),
            genre: GenreDto {
                id: book.genre_id,
                name: book.genre_name,
            },
        }
    }
}

impl BookDto {
    /// DTO for a just-written book: the server-assigned id plus the request's
    /// fields, embedded author/genre names included, without a re-read.
    pub fn from_request(id: Uuid, request: BookRequest) -> Self {
        Self {
            id,
            title: request.title,
            price: request.price,
            authors: request.authors,
            genre: request.genre,
        }
    }
}

/// Book create/update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(length(min = 3, message = "title must be at least 3 characters"))]
    pub title: String,
    /// At most 4 integer digits and 2 fractional digits
    #[validate(custom(function = "validate_price_digits"))]
    #[schema(value_type = String, example = "29.99")]
    pub price: Decimal,
    pub authors: Vec<AuthorDto>,
    #[validate(nested)]
    pub genre: GenreDto,
}

/// Enforce the price digit shape: integer part < 10^4, scale <= 2.
fn validate_price_digits(price: &Decimal) -> Result<(), ValidationError> {
    let out_of_shape = price.normalize().scale() > 2 || price.trunc().abs() >= Decimal::from(10_000);
    if out_of_shape {
        let mut error = ValidationError::new("digits");
        error.message = Some("price must have at most 4 integer and 2 fraction digits".into());
        return Err(error);
    }
    Ok(())
}
