use serde::{Deserialize, Serialize};

/// One entry of the watch-list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    /// Storage-assigned immutable identifier
    pub id: i64,

    /// Title as the user tracks it
    pub name: String,

    /// Where the user stands with this show
    pub status: WatchStatus,

    /// Weekday new episodes come out, when the show is airing
    pub release_day: Option<ReleaseDay>,

    /// Free-form note
    pub note: Option<String>,

    /// Reference link (streaming page, database entry, ...)
    pub link: Option<String>,

    /// Episodes per season, in season order
    ///
    /// Persisted and exchanged as a JSON array in a text column
    /// (e.g. `[25,12,10]`) to stay byte-compatible with existing exports.
    pub episode_counts: Vec<u32>,
}

/// Payload for creating an anime; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnime {
    pub name: String,
    pub status: WatchStatus,
    pub release_day: Option<ReleaseDay>,
    pub note: Option<String>,
    pub link: Option<String>,
    pub episode_counts: Vec<u32>,
}

/// Watch status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Watching,
    Completed,
}

/// Weekday of release
///
/// Ordering is Sunday-first (Sunday = 0), matching the week layout the
/// list screens sort by. This is an arbitrary, documented choice, not a
/// calendar-standard requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Anime {
    /// Total episodes across all seasons
    pub fn total_episodes(&self) -> u64 {
        self.episode_counts.iter().map(|&n| u64::from(n)).sum()
    }

    /// Decode the JSON-text season column
    ///
    /// Absent or unparseable input yields an empty sequence, never an
    /// error: season data is advisory on import.
    pub fn decode_episode_counts(raw: Option<&str>) -> Vec<u32> {
        match raw {
            Some(text) if !text.trim().is_empty() => {
                serde_json::from_str(text.trim()).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    /// Encode seasons back into the JSON-text convention
    ///
    /// An empty sequence encodes as an absent value.
    pub fn encode_episode_counts(counts: &[u32]) -> Option<String> {
        if counts.is_empty() {
            None
        } else {
            // Vec<u32> always serializes
            Some(serde_json::to_string(counts).unwrap_or_default())
        }
    }
}

impl WatchStatus {
    /// Parse an exchange-format cell
    ///
    /// Accepts the canonical spelling and the legacy localized one.
    pub fn parse_field(raw: &str) -> Option<Self> {
        match raw {
            "watching" | "assistindo" => Some(WatchStatus::Watching),
            "completed" | "já assistido" => Some(WatchStatus::Completed),
            _ => None,
        }
    }
}

impl ReleaseDay {
    pub const ALL: [ReleaseDay; 7] = [
        ReleaseDay::Sunday,
        ReleaseDay::Monday,
        ReleaseDay::Tuesday,
        ReleaseDay::Wednesday,
        ReleaseDay::Thursday,
        ReleaseDay::Friday,
        ReleaseDay::Saturday,
    ];

    /// Sunday-first position, used by the weekly view sort
    pub fn sort_index(self) -> u8 {
        match self {
            ReleaseDay::Sunday => 0,
            ReleaseDay::Monday => 1,
            ReleaseDay::Tuesday => 2,
            ReleaseDay::Wednesday => 3,
            ReleaseDay::Thursday => 4,
            ReleaseDay::Friday => 5,
            ReleaseDay::Saturday => 6,
        }
    }

    /// Parse an exchange-format cell
    ///
    /// Accepts the canonical spelling and the legacy localized one.
    pub fn parse_field(raw: &str) -> Option<Self> {
        match raw {
            "sunday" | "domingo" => Some(ReleaseDay::Sunday),
            "monday" | "segunda" => Some(ReleaseDay::Monday),
            "tuesday" | "terça" => Some(ReleaseDay::Tuesday),
            "wednesday" | "quarta" => Some(ReleaseDay::Wednesday),
            "thursday" | "quinta" => Some(ReleaseDay::Thursday),
            "friday" | "sexta" => Some(ReleaseDay::Friday),
            "saturday" | "sábado" => Some(ReleaseDay::Saturday),
            _ => None,
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::Watching => write!(f, "watching"),
            WatchStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::fmt::Display for ReleaseDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReleaseDay::Sunday => "sunday",
            ReleaseDay::Monday => "monday",
            ReleaseDay::Tuesday => "tuesday",
            ReleaseDay::Wednesday => "wednesday",
            ReleaseDay::Thursday => "thursday",
            ReleaseDay::Friday => "friday",
            ReleaseDay::Saturday => "saturday",
        };
        write!(f, "{}", name)
    }
}
