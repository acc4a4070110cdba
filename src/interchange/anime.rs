// src/interchange/anime.rs
//
// Exchange format of the watch-list:
//   Name;Status;ReleaseDay;Note;Link;Seasons
// Legacy files use the localized labels (Nome, Status, Lançamento,
// Observação, Link, Temporadas) and localized enum cells; both are
// accepted on import. Export always writes the canonical set.

use super::codec::Column;
use super::header::{FieldSpec, RowDecode, RowView};
use crate::domain::anime::{Anime, NewAnime, ReleaseDay, WatchStatus};

pub const ANIME_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Name", &["Nome"]),
    FieldSpec::required("Status", &[]),
    FieldSpec::required("ReleaseDay", &["Lançamento"]),
    FieldSpec::required("Note", &["Observação"]),
    FieldSpec::required("Link", &[]),
    FieldSpec::required("Seasons", &["Temporadas"]),
];

pub const ANIME_COLUMNS: &[Column<Anime>] = &[
    Column {
        label: "Name",
        value: |a| Some(a.name.clone()),
    },
    Column {
        label: "Status",
        value: |a| Some(a.status.to_string()),
    },
    Column {
        label: "ReleaseDay",
        value: |a| a.release_day.map(|day| day.to_string()),
    },
    Column {
        label: "Note",
        value: |a| a.note.clone(),
    },
    Column {
        label: "Link",
        value: |a| a.link.clone(),
    },
    Column {
        label: "Seasons",
        value: |a| Anime::encode_episode_counts(&a.episode_counts),
    },
];

impl RowDecode for NewAnime {
    fn fields() -> &'static [FieldSpec] {
        ANIME_FIELDS
    }

    fn decode(row: &RowView<'_>) -> Result<Self, String> {
        let name = row.get("Name").unwrap_or_default();
        if name.is_empty() {
            return Err("anime name cannot be empty".to_string());
        }

        let raw_status = row.get("Status").unwrap_or_default();
        let status = WatchStatus::parse_field(raw_status)
            .ok_or_else(|| format!("invalid value: \"{}\"", raw_status))?;

        let release_day = match row.get_optional("ReleaseDay") {
            Some(raw) => Some(
                ReleaseDay::parse_field(raw)
                    .ok_or_else(|| format!("invalid value: \"{}\"", raw))?,
            ),
            None => None,
        };

        // Season data is advisory on import: blank or unparseable input
        // becomes an empty sequence, never a row failure
        let episode_counts = Anime::decode_episode_counts(row.get("Seasons"));

        Ok(NewAnime {
            name: name.to_string(),
            status,
            release_day,
            note: row.get_optional("Note").map(str::to_string),
            link: row.get_optional("Link").map(str::to_string),
            episode_counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interchange::codec::tokenize_line;
    use crate::interchange::header::HeaderIndex;

    fn decode(header_line: &str, row_line: &str) -> Result<NewAnime, String> {
        let header = tokenize_line(header_line);
        let index = HeaderIndex::resolve(&header, ANIME_FIELDS).expect("header resolves");
        let values = tokenize_line(row_line);
        NewAnime::decode(&RowView::new(&index, &values))
    }

    const LEGACY_HEADER: &str = "Nome;Status;Lançamento;Observação;Link;Temporadas";

    #[test]
    fn test_decodes_legacy_row() {
        let new = decode(LEGACY_HEADER, "Naruto;assistindo;segunda;;;[220]").unwrap();
        assert_eq!(new.name, "Naruto");
        assert_eq!(new.status, WatchStatus::Watching);
        assert_eq!(new.release_day, Some(ReleaseDay::Monday));
        assert_eq!(new.note, None);
        assert_eq!(new.link, None);
        assert_eq!(new.episode_counts, vec![220]);
    }

    #[test]
    fn test_decodes_canonical_row() {
        let new = decode(
            "Name;Status;ReleaseDay;Note;Link;Seasons",
            "Frieren;completed;friday;lovely;https://example.org/frieren;[28]",
        )
        .unwrap();
        assert_eq!(new.status, WatchStatus::Completed);
        assert_eq!(new.release_day, Some(ReleaseDay::Friday));
        assert_eq!(new.note.as_deref(), Some("lovely"));
    }

    #[test]
    fn test_blank_release_day_is_absent() {
        let new = decode(LEGACY_HEADER, "Naruto;assistindo;;;;").unwrap();
        assert_eq!(new.release_day, None);
    }

    #[test]
    fn test_unknown_status_fails() {
        let err = decode(LEGACY_HEADER, "Naruto;dropped;segunda;;;").unwrap_err();
        assert!(err.contains("dropped"), "got: {}", err);
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(decode(LEGACY_HEADER, ";assistindo;segunda;;;").is_err());
    }

    #[test]
    fn test_bad_seasons_default_to_empty() {
        let new = decode(LEGACY_HEADER, "Naruto;assistindo;segunda;;;not-json").unwrap();
        assert!(new.episode_counts.is_empty());
    }
}
