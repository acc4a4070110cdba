// src/repositories/anime_repository.rs
//
// Watch-list persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::anime::{Anime, NewAnime, ReleaseDay, WatchStatus};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait AnimeRepository: Send + Sync {
    /// Insert a new entry and return its storage-assigned id
    fn create(&self, new: &NewAnime) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Anime>>;
    fn list_all(&self) -> AppResult<Vec<Anime>>;
    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<Anime>>;
    fn update(&self, anime: &Anime) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
    /// Drop and recreate the table, discarding every entry
    fn recreate_table(&self) -> AppResult<()>;
}

pub struct SqliteAnimeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAnimeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Anime - returns rusqlite::Error for query_map compatibility
    fn row_to_anime(row: &Row) -> Result<Anime, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let name: String = row.get("name")?;

        let status_str: String = row.get("status")?;
        let status =
            WatchStatus::parse_field(&status_str).ok_or(rusqlite::Error::InvalidQuery)?;

        let release_day_str: Option<String> = row.get("release_day")?;
        let release_day = match release_day_str {
            Some(s) => Some(ReleaseDay::parse_field(&s).ok_or(rusqlite::Error::InvalidQuery)?),
            None => None,
        };

        let note: Option<String> = row.get("note")?;
        let link: Option<String> = row.get("link")?;

        // Lenient by design: a malformed season column reads as empty
        let episode_counts_str: Option<String> = row.get("episode_counts")?;
        let episode_counts = Anime::decode_episode_counts(episode_counts_str.as_deref());

        Ok(Anime {
            id,
            name,
            status,
            release_day,
            note,
            link,
            episode_counts,
        })
    }
}

impl AnimeRepository for SqliteAnimeRepository {
    fn create(&self, new: &NewAnime) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO animes (name, status, release_day, note, link, episode_counts)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new.name,
                new.status.to_string(),
                new.release_day.map(|day| day.to_string()),
                new.note,
                new.link,
                Anime::encode_episode_counts(&new.episode_counts),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Anime>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, status, release_day, note, link, episode_counts
             FROM animes WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_anime) {
            Ok(anime) => Ok(Some(anime)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Anime>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, status, release_day, note, link, episode_counts
             FROM animes
             ORDER BY name",
        )?;

        let animes: Vec<Anime> = stmt
            .query_map([], Self::row_to_anime)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(animes)
    }

    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<Anime>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, status, release_day, note, link, episode_counts
             FROM animes
             WHERE status = ?1
             ORDER BY name",
        )?;

        let animes: Vec<Anime> = stmt
            .query_map(params![status.to_string()], Self::row_to_anime)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(animes)
    }

    fn update(&self, anime: &Anime) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE animes
             SET name = ?1, status = ?2, release_day = ?3, note = ?4, link = ?5,
                 episode_counts = ?6
             WHERE id = ?7",
            params![
                anime.name,
                anime.status.to_string(),
                anime.release_day.map(|day| day.to_string()),
                anime.note,
                anime.link,
                Anime::encode_episode_counts(&anime.episode_counts),
                anime.id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM animes WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn recreate_table(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute_batch(
            "DROP TABLE IF EXISTS animes;
             CREATE TABLE animes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 status TEXT NOT NULL,
                 release_day TEXT,
                 note TEXT,
                 link TEXT,
                 episode_counts TEXT
             );
             CREATE INDEX idx_animes_status ON animes(status);",
        )?;

        Ok(())
    }
}
