//! Canonical name generator.
//!
//! Re-assembles extracted media fields into Plex-style names:
//! `Movie Title (Year)` for movies and
//! `Series Title - S01E01 - Episode Title` for TV episodes, with an
//! optional trailing `[Resolution]` tag. Generation never fails; the
//! degraded output is the bare title.

use crate::models::media::{MediaKind, MediaRecord};

/// Generate the canonical base name (no extension) for a record.
pub fn generate_base_name(record: &MediaRecord, kind: MediaKind) -> String {
    let mut name = record.title.clone();

    match kind {
        MediaKind::Movie => {
            if let Some(year) = record.year {
                name.push_str(&format!(" ({})", year));
            }
        }
        MediaKind::TvShow => {
            // Season/episode suffix only when both are present
            if let (Some(season), Some(episode)) = (record.season, record.episode) {
                name.push_str(&format!(" - S{:02}E{:02}", season, episode));

                if let Some(episode_title) = record.episode_title.as_deref() {
                    if !episode_title.is_empty() {
                        name.push_str(&format!(" - {}", episode_title));
                    }
                }
            }
        }
        MediaKind::Unknown => {}
    }

    if let Some(resolution) = record.resolution.as_deref() {
        if !resolution.is_empty() {
            name.push_str(&format!(" [{}]", resolution));
        }
    }

    sanitize_component(&name)
}

/// Generate a full file name including the original extension.
pub fn generate_file_name(record: &MediaRecord, kind: MediaKind, extension: &str) -> String {
    let base = generate_base_name(record, kind);
    if extension.is_empty() {
        base
    } else {
        format!("{}.{}", base, extension)
    }
}

/// Folder name for a movie: `Title (Year)`.
pub fn movie_folder_name(record: &MediaRecord) -> String {
    let mut name = record.title.clone();
    if let Some(year) = record.year {
        name.push_str(&format!(" ({})", year));
    }
    sanitize_component(&name)
}

/// Season folder name: `Season XX`, defaulting to season 1.
pub fn season_folder_name(record: &MediaRecord) -> String {
    format!("Season {:02}", record.season.unwrap_or(1))
}

/// Replace characters that are invalid in file names.
fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_movie_name() {
        let record = MediaRecord {
            title: "Movie Name".to_string(),
            year: Some(2014),
            resolution: Some("1080p".to_string()),
            ..Default::default()
        };
        assert_eq!(
            generate_base_name(&record, MediaKind::Movie),
            "Movie Name (2014) [1080p]"
        );
        assert_eq!(
            generate_file_name(&record, MediaKind::Movie, "mkv"),
            "Movie Name (2014) [1080p].mkv"
        );
    }

    #[test]
    fn test_generate_movie_name_without_year() {
        let record = MediaRecord {
            title: "Movie Name".to_string(),
            ..Default::default()
        };
        assert_eq!(generate_base_name(&record, MediaKind::Movie), "Movie Name");
    }

    #[test]
    fn test_generate_tv_name() {
        let record = MediaRecord {
            title: "The Show".to_string(),
            season: Some(2),
            episode: Some(5),
            episode_title: Some("Some Title".to_string()),
            ..Default::default()
        };
        assert_eq!(
            generate_base_name(&record, MediaKind::TvShow),
            "The Show - S02E05 - Some Title"
        );
    }

    #[test]
    fn test_tv_suffix_needs_both_season_and_episode() {
        let record = MediaRecord {
            title: "The Show".to_string(),
            season: Some(2),
            episode_title: Some("Orphan Title".to_string()),
            ..Default::default()
        };
        assert_eq!(generate_base_name(&record, MediaKind::TvShow), "The Show");
    }

    #[test]
    fn test_unknown_kind_is_title_only() {
        let record = MediaRecord {
            title: "Random Clip".to_string(),
            ..Default::default()
        };
        assert_eq!(
            generate_base_name(&record, MediaKind::Unknown),
            "Random Clip"
        );
    }

    #[test]
    fn test_invalid_characters_replaced() {
        let record = MediaRecord {
            title: "What? A: Title".to_string(),
            ..Default::default()
        };
        assert_eq!(
            generate_base_name(&record, MediaKind::Unknown),
            "What_ A_ Title"
        );
    }

    #[test]
    fn test_folder_names() {
        let record = MediaRecord {
            title: "Movie Name".to_string(),
            year: Some(2014),
            season: None,
            ..Default::default()
        };
        assert_eq!(movie_folder_name(&record), "Movie Name (2014)");
        assert_eq!(season_folder_name(&record), "Season 01");
    }
}
