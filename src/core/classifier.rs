//! Media type classifier and structural parser.
//!
//! Detects whether a cleaned name looks like a movie or a TV episode
//! and extracts title, year, season/episode and resolution from it.
//! Best-effort heuristics: a miss is never an error, it degrades to an
//! Unknown classification with the cleaned name as title.

use crate::models::media::{MediaKind, MediaRecord};
use crate::Result;
use regex::{Captures, Regex, RegexBuilder};
use std::path::Path;

/// Noise tokens commonly injected by release pipelines.
///
/// Longer alternatives first so they win inside the combined pattern.
const NOISE_TOKENS: &[&str] = &[
    "DutchReleaseTeam",
    "NL Gespr",
    "DVDRip",
    "BluRay",
    "WEBRip",
    "BRRip",
    "HDRip",
    "HDTV",
    "PDTV",
    "DVDR",
    "Xvid",
    "DivX",
    "DMT",
];

/// Pattern-based media classifier.
///
/// All patterns are compiled once at construction, case-insensitively.
pub struct MediaClassifier {
    movie_pattern: Regex,
    tv_pattern: Regex,
    noise_pattern: Regex,
    brackets_pattern: Regex,
    parens_pattern: Regex,
    english_labels_pattern: Regex,
    cleanup_pattern: Regex,
    extra_spaces_pattern: Regex,
    year_pattern: Regex,
    year_only_pattern: Regex,
    tags_pattern: Regex,
    resolution_pattern: Regex,
    group_suffix_pattern: Regex,
    edition_pattern: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

impl MediaClassifier {
    /// Compile the classifier patterns.
    pub fn new() -> Result<Self> {
        let noise_alternation = NOISE_TOKENS.join("|");

        Ok(Self {
            movie_pattern: compile(
                r"^(?P<title>.+?)[\W_]*(?P<year>\b(?:19|20)\d{2}\b)[\W_]*(?P<resolution>(?:480|720|1080|2160)[pi])?",
            )?,
            tv_pattern: compile(
                r"^(?P<title>.+?)[\W_]*[Ss](?P<season>\d{1,2})[\W_]*[Ee](?P<episode>\d{1,2})[\W_]*(?P<rest>.*)$",
            )?,
            noise_pattern: compile(&format!(r"\b(?:{})\b", noise_alternation))?,
            brackets_pattern: compile(r"\[.*?\]")?,
            parens_pattern: compile(r"\(([^)]*)\)")?,
            english_labels_pattern: compile(r"\b(?:eng|english|nl|dutch|sub|subs|subtitles)\b")?,
            cleanup_pattern: compile(r"[\._\-]+")?,
            extra_spaces_pattern: compile(r"\s+")?,
            year_pattern: compile(r"\b(?:19|20)\d{2}\b")?,
            year_only_pattern: compile(r"^(?:19|20)\d{2}$")?,
            tags_pattern: compile(r"\[([^\]]+)\]|\(([^)]+)\)")?,
            resolution_pattern: compile(r"(?:480|720|1080|2160)[pi]")?,
            group_suffix_pattern: compile(r"-[A-Za-z0-9]+$")?,
            edition_pattern: compile(
                r"\b(?:director'?s cut|extended(?:\s+(?:cut|edition))?|unrated|remastered|theatrical|imax)\b",
            )?,
        })
    }

    /// Classify a name as movie, TV episode, or unknown.
    ///
    /// The TV pattern is tested first: a TV name may also contain a
    /// 4-digit year that would otherwise misclassify it as a movie.
    pub fn classify(&self, name: &str) -> MediaKind {
        let stem = strip_media_extension(name);

        if self.tv_pattern.is_match(stem) {
            MediaKind::TvShow
        } else if self.movie_pattern.is_match(stem) {
            MediaKind::Movie
        } else {
            MediaKind::Unknown
        }
    }

    /// Extract structured fields from a name according to its kind.
    pub fn extract(&self, name: &str, kind: MediaKind) -> MediaRecord {
        let stem = strip_media_extension(name);

        // Tags are scanned independently of the structural match, so a
        // resolution outside the primary capture is still recovered.
        let (tag_resolution, tag_edition) = self.extract_tags(stem);

        let mut record = match kind {
            MediaKind::Movie => self.extract_movie(stem),
            MediaKind::TvShow => self.extract_tv(stem),
            MediaKind::Unknown => MediaRecord {
                title: self.clean_file_name(stem),
                ..Default::default()
            },
        };

        if record.resolution.is_none() {
            record.resolution = tag_resolution;
        }
        if record.edition.is_none() {
            record.edition = tag_edition;
        }

        record
    }

    /// Classify and extract in one step.
    pub fn parse(&self, name: &str) -> (MediaKind, MediaRecord) {
        let kind = self.classify(name);
        (kind, self.extract(name, kind))
    }

    fn extract_movie(&self, stem: &str) -> MediaRecord {
        match self.movie_pattern.captures(stem) {
            Some(caps) => {
                let title_raw = caps.name("title").map(|m| m.as_str()).unwrap_or(stem);
                let year = caps.name("year").and_then(|m| m.as_str().parse().ok());
                let resolution = caps
                    .name("resolution")
                    .map(|m| m.as_str().to_lowercase())
                    .or_else(|| self.find_resolution(stem));

                MediaRecord {
                    title: self.clean_file_name(title_raw),
                    year,
                    resolution,
                    ..Default::default()
                }
            }
            None => MediaRecord {
                title: self.clean_file_name(stem),
                ..Default::default()
            },
        }
    }

    fn extract_tv(&self, stem: &str) -> MediaRecord {
        match self.tv_pattern.captures(stem) {
            Some(caps) => {
                let title_raw = caps.name("title").map(|m| m.as_str()).unwrap_or(stem);
                let season = caps.name("season").and_then(|m| m.as_str().parse().ok());
                let episode = caps.name("episode").and_then(|m| m.as_str().parse().ok());
                let rest = caps.name("rest").map(|m| m.as_str()).unwrap_or("");

                let resolution = self.find_resolution(rest);
                let episode_title = self.clean_episode_title(rest);

                MediaRecord {
                    title: self.clean_name_segment(title_raw, false),
                    season,
                    episode,
                    episode_title,
                    resolution,
                    ..Default::default()
                }
            }
            None => MediaRecord {
                title: self.clean_file_name(stem),
                ..Default::default()
            },
        }
    }

    /// Scan bracket/parenthesis spans for resolution and edition tags.
    fn extract_tags(&self, stem: &str) -> (Option<String>, Option<String>) {
        let mut resolution = None;
        let mut edition = None;

        for caps in self.tags_pattern.captures_iter(stem) {
            let tag = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");

            if resolution.is_none() {
                if let Some(m) = self.resolution_pattern.find(tag) {
                    resolution = Some(m.as_str().to_lowercase());
                }
            }
            if edition.is_none() {
                if let Some(m) = self.edition_pattern.find(tag) {
                    edition = Some(title_case(m.as_str()));
                }
            }
        }

        (resolution, edition)
    }

    /// First resolution token in a string, lowercased.
    fn find_resolution(&self, s: &str) -> Option<String> {
        self.resolution_pattern
            .find(s)
            .map(|m| m.as_str().to_lowercase())
    }

    /// Clean a whole file name down to a displayable title.
    fn clean_file_name(&self, name: &str) -> String {
        self.clean_name_segment(name, true)
    }

    /// Strip noise from a name segment and normalize it into a title.
    ///
    /// Year removal is optional: movie titles have the year extracted
    /// separately, while a year inside a TV show title is part of the
    /// title ("Doctor Who 2005").
    fn clean_name_segment(&self, segment: &str, strip_year: bool) -> String {
        let mut cleaned = segment.to_string();

        cleaned = self.noise_pattern.replace_all(&cleaned, "").into_owned();
        cleaned = self.brackets_pattern.replace_all(&cleaned, "").into_owned();

        // Parenthesised content goes, except a bare year
        let year_only = &self.year_only_pattern;
        cleaned = self
            .parens_pattern
            .replace_all(&cleaned, |caps: &Captures| {
                if year_only.is_match(caps[1].trim()) {
                    caps[0].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();

        cleaned = self
            .english_labels_pattern
            .replace_all(&cleaned, "")
            .into_owned();

        if strip_year {
            if let Some(m) = self.year_pattern.find(&cleaned) {
                let year = m.as_str().to_string();
                cleaned = cleaned.replace(&year, "");
            }
        }

        self.clean_title(&cleaned)
    }

    /// Collapse separators and whitespace, trim, and title-case.
    /// Idempotent.
    pub fn clean_title(&self, title: &str) -> String {
        let cleaned = self.cleanup_pattern.replace_all(title, " ");
        let cleaned = self.extra_spaces_pattern.replace_all(&cleaned, " ");
        title_case(cleaned.trim())
    }

    /// Clean the remainder after an episode marker into an episode
    /// title: trailing resolution and noise stripped, separators
    /// collapsed, title-cased.
    fn clean_episode_title(&self, rest: &str) -> Option<String> {
        let mut cleaned = self.resolution_pattern.replace_all(rest, "").into_owned();
        cleaned = self.noise_pattern.replace_all(&cleaned, "").into_owned();
        cleaned = self.brackets_pattern.replace_all(&cleaned, "").into_owned();
        cleaned = self
            .group_suffix_pattern
            .replace_all(cleaned.trim(), "")
            .into_owned();

        let cleaned = self.clean_title(&cleaned);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

/// Strip a trailing media extension, leaving other dotted segments
/// alone.
fn strip_media_extension(name: &str) -> &str {
    if crate::utils::fs::is_video_file(Path::new(name)) {
        match name.rfind('.') {
            Some(idx) => &name[..idx],
            None => name,
        }
    } else {
        name
    }
}

/// Uppercase the first letter of each word, lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MediaClassifier {
        MediaClassifier::new().unwrap()
    }

    #[test]
    fn test_classify_movie() {
        let c = classifier();
        assert_eq!(c.classify("Movie.Name.2014.1080p.mkv"), MediaKind::Movie);
        assert_eq!(c.classify("Another Movie (2008).avi"), MediaKind::Movie);
    }

    #[test]
    fn test_classify_tv_before_movie() {
        let c = classifier();
        // Contains both a season/episode marker and a 4-digit year:
        // must classify as TV, not movie.
        assert_eq!(c.classify("Show.2019.S01E02.mkv"), MediaKind::TvShow);
        assert_eq!(
            c.classify("The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP.mkv"),
            MediaKind::TvShow
        );
    }

    #[test]
    fn test_classify_unknown() {
        let c = classifier();
        assert_eq!(c.classify("random_clip.mkv"), MediaKind::Unknown);
    }

    #[test]
    fn test_extract_movie() {
        let c = classifier();
        let record = c.extract("Movie.Name.2014.1080p.mkv", MediaKind::Movie);
        assert_eq!(record.title, "Movie Name");
        assert_eq!(record.year, Some(2014));
        assert_eq!(record.resolution.as_deref(), Some("1080p"));
        assert_eq!(record.season, None);
    }

    #[test]
    fn test_extract_movie_earliest_year_wins() {
        let c = classifier();
        let record = c.extract("Movie.Name.2014.2016.mkv", MediaKind::Movie);
        assert_eq!(record.year, Some(2014));
    }

    #[test]
    fn test_longer_digit_run_is_not_a_year() {
        let c = classifier();
        // Years are standalone 4-digit tokens; "20149" contains no year
        assert_eq!(c.classify("Movie.20149.mkv"), MediaKind::Unknown);
        let record = c.extract("Movie.20149.mkv", MediaKind::Unknown);
        assert_eq!(record.year, None);
        assert_eq!(record.title, "Movie 20149");
    }

    #[test]
    fn test_extract_movie_with_bracketed_noise() {
        let c = classifier();
        let record = c.extract("[Group] Movie.Name.2014.mkv", MediaKind::Movie);
        assert_eq!(record.title, "Movie Name");
        assert_eq!(record.year, Some(2014));
    }

    #[test]
    fn test_extract_tv() {
        let c = classifier();
        let record = c.extract(
            "The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP.mkv",
            MediaKind::TvShow,
        );
        assert_eq!(record.title, "The Show");
        assert_eq!(record.season, Some(2));
        assert_eq!(record.episode, Some(5));
        assert_eq!(record.episode_title.as_deref(), Some("Some Title"));
        assert_eq!(record.resolution.as_deref(), Some("1080p"));
    }

    #[test]
    fn test_extract_tv_keeps_year_in_title() {
        let c = classifier();
        let record = c.extract("Doctor.Who.2005.S01E01.Rose.mkv", MediaKind::TvShow);
        assert_eq!(record.title, "Doctor Who 2005");
        assert_eq!(record.episode_title.as_deref(), Some("Rose"));
    }

    #[test]
    fn test_extract_tv_without_episode_title() {
        let c = classifier();
        let record = c.extract("The.Show.S01E01.mkv", MediaKind::TvShow);
        assert_eq!(record.title, "The Show");
        assert_eq!(record.episode_title, None);
    }

    #[test]
    fn test_tag_extraction_outside_structural_match() {
        let c = classifier();
        let record = c.extract("Some Movie (2008) [1080p].mkv", MediaKind::Movie);
        assert_eq!(record.year, Some(2008));
        assert_eq!(record.resolution.as_deref(), Some("1080p"));
    }

    #[test]
    fn test_edition_tag() {
        let c = classifier();
        let record = c.extract("Movie.Name.2014.(Directors Cut).mkv", MediaKind::Movie);
        assert_eq!(record.edition.as_deref(), Some("Directors Cut"));
    }

    #[test]
    fn test_unknown_uses_cleaned_name() {
        let c = classifier();
        let record = c.extract("random_clip.mkv", MediaKind::Unknown);
        assert_eq!(record.title, "Random Clip");
    }

    #[test]
    fn test_clean_title_idempotent() {
        let c = classifier();
        let once = c.clean_title("Some..messy___name -- here");
        let twice = c.clean_title(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "Some Messy Name Here");
    }
}
