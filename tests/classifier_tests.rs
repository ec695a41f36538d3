//! Classification and canonical name generation over realistic file
//! names.

use plex_sanitizer::core::classifier::MediaClassifier;
use plex_sanitizer::generators::filename;
use plex_sanitizer::models::media::MediaKind;

fn classifier() -> MediaClassifier {
    MediaClassifier::new().unwrap()
}

#[test]
fn movie_name_round_trip() {
    let c = classifier();
    let (kind, record) = c.parse("Movie.Name.2014.1080p.mkv");

    assert_eq!(kind, MediaKind::Movie);
    assert_eq!(record.title, "Movie Name");
    assert_eq!(record.year, Some(2014));
    assert_eq!(record.resolution.as_deref(), Some("1080p"));

    assert_eq!(
        filename::generate_file_name(&record, kind, "mkv"),
        "Movie Name (2014) [1080p].mkv"
    );
}

#[test]
fn tv_episode_round_trip() {
    let c = classifier();
    let (kind, record) = c.parse("The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP.mkv");

    assert_eq!(kind, MediaKind::TvShow);
    assert_eq!(record.title, "The Show");
    assert_eq!(record.season, Some(2));
    assert_eq!(record.episode, Some(5));
    assert_eq!(record.episode_title.as_deref(), Some("Some Title"));
    assert_eq!(record.resolution.as_deref(), Some("1080p"));

    assert_eq!(
        filename::generate_file_name(&record, kind, "mkv"),
        "The Show - S02E05 - Some Title [1080p].mkv"
    );
}

#[test]
fn episode_marker_beats_year() {
    let c = classifier();
    // A year alone means movie, but a season/episode marker wins even
    // when a year is also present.
    assert_eq!(c.classify("Movie.Name.2014.mkv"), MediaKind::Movie);
    assert_eq!(c.classify("Show.2019.S01E02.mkv"), MediaKind::TvShow);
}

#[test]
fn year_in_parentheses_is_recognized() {
    let c = classifier();
    let (kind, record) = c.parse("Some Movie (2008) [1080p].avi");

    assert_eq!(kind, MediaKind::Movie);
    assert_eq!(record.title, "Some Movie");
    assert_eq!(record.year, Some(2008));
    assert_eq!(record.resolution.as_deref(), Some("1080p"));
}

#[test]
fn unparseable_name_degrades_to_unknown() {
    let c = classifier();
    let (kind, record) = c.parse("holiday_clip_from_phone.mkv");

    assert_eq!(kind, MediaKind::Unknown);
    assert_eq!(record.title, "Holiday Clip From Phone");
    assert_eq!(record.year, None);
    assert_eq!(record.season, None);

    // Unknown names keep their cleaned title as the whole base name
    assert_eq!(
        filename::generate_file_name(&record, kind, "mkv"),
        "Holiday Clip From Phone.mkv"
    );
}

#[test]
fn missing_fields_are_omitted_from_generated_names() {
    let c = classifier();

    let (kind, record) = c.parse("The.Show.S01E01.mkv");
    assert_eq!(kind, MediaKind::TvShow);
    assert_eq!(record.episode_title, None);
    assert_eq!(
        filename::generate_file_name(&record, kind, "mkv"),
        "The Show - S01E01.mkv"
    );
}
