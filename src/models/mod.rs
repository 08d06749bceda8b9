//! Data models: persisted rows, transfer objects, claims, pagination

pub mod author;
pub mod book;
pub mod claims;
pub mod genre;
pub mod page;

pub use author::{Author, AuthorDto};
pub use book::{Book, BookDto, BookRequest};
pub use claims::{Claims, Principal, Role};
pub use genre::{Genre, GenreDto};
pub use page::{PageQuery, Paged};
