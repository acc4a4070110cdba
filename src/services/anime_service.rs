// src/services/anime_service.rs
use crate::domain::anime::{validate_anime, validate_new_anime, Anime, NewAnime};
use crate::domain::{ReleaseDay, WatchStatus};
use crate::error::{AppError, AppResult};
use crate::repositories::AnimeRepository;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UpdateAnimeRequest {
    pub anime_id: i64,
    pub name: Option<String>,
    pub status: Option<WatchStatus>,
    pub release_day: Option<Option<ReleaseDay>>,
    pub note: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub episode_counts: Option<Vec<u32>>,
}

pub struct AnimeService {
    anime_repo: Arc<dyn AnimeRepository>,
}

impl AnimeService {
    pub fn new(anime_repo: Arc<dyn AnimeRepository>) -> Self {
        Self { anime_repo }
    }

    pub fn create_anime(&self, new: NewAnime) -> AppResult<i64> {
        validate_new_anime(&new).map_err(AppError::Domain)?;
        self.anime_repo.create(&new)
    }

    pub fn update_anime(&self, request: UpdateAnimeRequest) -> AppResult<()> {
        let mut anime = self
            .anime_repo
            .get_by_id(request.anime_id)?
            .ok_or(AppError::NotFound)?;

        if let Some(name) = request.name {
            anime.name = name;
        }
        if let Some(status) = request.status {
            anime.status = status;
        }
        if let Some(release_day) = request.release_day {
            anime.release_day = release_day;
        }
        if let Some(note) = request.note {
            anime.note = note;
        }
        if let Some(link) = request.link {
            anime.link = link;
        }
        if let Some(counts) = request.episode_counts {
            anime.episode_counts = counts;
        }

        validate_anime(&anime).map_err(AppError::Domain)?;
        self.anime_repo.update(&anime)
    }

    pub fn get_anime(&self, anime_id: i64) -> AppResult<Option<Anime>> {
        self.anime_repo.get_by_id(anime_id)
    }

    pub fn list_animes(&self) -> AppResult<Vec<Anime>> {
        self.anime_repo.list_all()
    }

    pub fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<Anime>> {
        self.anime_repo.list_by_status(status)
    }

    pub fn delete_anime(&self, anime_id: i64) -> AppResult<()> {
        self.anime_repo.delete(anime_id)
    }

    /// Destructive: drops every entry and recreates the table
    pub fn clear_all(&self) -> AppResult<()> {
        self.anime_repo.recreate_table()
    }
}
