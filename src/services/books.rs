//! Book catalog service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{BookDto, BookRequest, PageQuery, Paged},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Persist a new book built from the request.
    ///
    /// Referenced author/genre ids are embedded as provided; the response
    /// echoes the request's fields under the server-assigned id.
    pub async fn create_book(&self, request: BookRequest) -> AppResult<BookDto> {
        tracing::debug!(title = %request.title, "creating book");
        let id = self.repository.books.insert(&request).await?;
        tracing::debug!(%id, "book created");
        Ok(BookDto::from_request(id, request))
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<BookDto> {
        self.repository
            .books
            .find_by_id(id)
            .await?
            .map(BookDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Book with {} not found.", id)))
    }

    pub async fn get_books(&self, page: &PageQuery) -> AppResult<Paged<BookDto>> {
        let (books, total) = self.repository.books.find_all(page).await?;
        let data = books.into_iter().map(BookDto::from).collect();
        Ok(Paged::new(data, total, page))
    }

    /// Verify existence, then persist a replacement record under the same id.
    pub async fn update_book(&self, id: Uuid, request: BookRequest) -> AppResult<BookDto> {
        if !self.repository.books.exists(id).await? {
            return Err(AppError::NotFound(format!("Book with {} not found.", id)));
        }

        tracing::debug!(%id, title = %request.title, "updating book");
        self.repository.books.replace(id, &request).await?;
        Ok(BookDto::from_request(id, request))
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.books.exists(id).await? {
            return Err(AppError::NotFound(format!("Book with {} not found.", id)));
        }

        tracing::debug!(%id, "deleting book");
        self.repository.books.delete(id).await
    }

    /// Case-insensitive substring search across title, author name and genre
    /// name. Criteria length is enforced at the handler boundary.
    pub async fn search_books(
        &self,
        criteria: &str,
        page: &PageQuery,
    ) -> AppResult<Paged<BookDto>> {
        let (books, total) = self.repository.books.search(criteria, page).await?;
        let data = books.into_iter().map(BookDto::from).collect();
        Ok(Paged::new(data, total, page))
    }
}
