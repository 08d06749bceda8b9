//! Author listing service

use crate::{
    error::AppResult,
    models::{AuthorDto, PageQuery, Paged},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_all_authors(&self, page: &PageQuery) -> AppResult<Paged<AuthorDto>> {
        let (authors, total) = self.repository.authors.find_all(page).await?;
        let data = authors.into_iter().map(AuthorDto::from).collect();
        Ok(Paged::new(data, total, page))
    }
}
