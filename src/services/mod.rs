//! Business logic services

pub mod authors;
pub mod books;
pub mod genres;

use crate::error::AppResult;
use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    pub authors: authors::AuthorService,
    pub genres: genres::GenreService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BookService::new(repository.clone()),
            authors: authors::AuthorService::new(repository.clone()),
            genres: genres::GenreService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the backing database is reachable.
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
