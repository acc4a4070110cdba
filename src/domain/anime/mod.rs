pub mod entity;
pub mod invariants;

pub use entity::{Anime, NewAnime, ReleaseDay, WatchStatus};
pub use invariants::{validate_anime, validate_new_anime};
