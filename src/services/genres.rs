//! Genre listing service

use crate::{
    error::AppResult,
    models::{GenreDto, PageQuery, Paged},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenreService {
    repository: Repository,
}

impl GenreService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_all_genres(&self, page: &PageQuery) -> AppResult<Paged<GenreDto>> {
        let (genres, total) = self.repository.genres.find_all(page).await?;
        let data = genres.into_iter().map(GenreDto::from).collect();
        Ok(Paged::new(data, total, page))
    }
}
