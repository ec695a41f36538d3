//! End-to-end tests for the sanitization pipeline over the built-in
//! rule catalog.

use plex_sanitizer::core::pipeline;
use plex_sanitizer::core::rules::RuleSet;
use plex_sanitizer::models::config::RuleConfig;

fn rule(name: &str, pattern: &str, replacement: &str) -> RuleConfig {
    RuleConfig {
        name: name.to_string(),
        description: String::new(),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
        active: true,
    }
}

/// Messy names representative of a real library.
fn corpus() -> Vec<&'static str> {
    vec![
        "[Deadmau- RAWS] Deadman.Wonderland.2011.UNCENx264.1080p.BDRip.Deadmau.lad",
        "FC2-PPV-4683409",
        "FC2 PPV 1864523 Personal Recording Collection [1080p]",
        "The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP",
        "Married Couple Swap S01 UNCENSORED English Hardsub 720p WEB x264 AAC - TMD-Group (OceanVeil)",
        "Cowboy Bebop (BD 1080p)",
        "Some.Movie.2014.1080p.BluRay",
        "Planetes",
        "Already Clean Name",
    ]
}

#[test]
fn builtin_catalog_is_idempotent_over_corpus() {
    let rules = RuleSet::builtin().unwrap();

    for name in corpus() {
        let once = pipeline::apply(&rules, name);
        let twice = pipeline::apply(&rules, &once);
        assert_eq!(once, twice, "second pass changed '{}'", name);
    }
}

#[test]
fn sanitized_names_are_never_empty() {
    let rules = RuleSet::builtin().unwrap();

    for name in corpus() {
        let sanitized = pipeline::apply(&rules, name);
        assert!(
            !sanitized.trim().is_empty(),
            "'{}' sanitized to nothing",
            name
        );
    }
}

#[test]
fn name_that_collapses_entirely_keeps_its_original() {
    let rules = RuleSet::builtin().unwrap();

    // Entirely CJK, so the catalog strips everything
    let name = "\u{9032}\u{6483}\u{306e}\u{5de8}\u{4eba}";
    assert_eq!(pipeline::apply(&rules, name), name);
    // And the fallback is itself a fixed point
    let once = pipeline::apply(&rules, name);
    assert_eq!(pipeline::apply(&rules, &once), once);
}

#[test]
fn release_noise_is_stripped_from_episode_folders() {
    let rules = RuleSet::builtin().unwrap();

    let sanitized = pipeline::apply(&rules, "The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP");
    assert!(!sanitized.contains('.'), "got '{}'", sanitized);
    assert!(!sanitized.contains("1080p"), "got '{}'", sanitized);
    assert!(!sanitized.contains("WEBRip"), "got '{}'", sanitized);
    assert!(sanitized.starts_with("The Show S02E05 Some Title"), "got '{}'", sanitized);
}

#[test]
fn reference_ids_survive_ahead_of_stripping_rules() {
    let rules = RuleSet::builtin().unwrap();

    assert_eq!(
        pipeline::apply(&rules, "FC2 PPV 1864523 Personal Recording Collection [1080p]"),
        "FC2 PPV 1864523"
    );
    assert_eq!(pipeline::apply(&rules, "FC2-PPV-4683409"), "FC2-PPV-4683409");
}

#[test]
fn known_series_collapse_to_series_name() {
    let rules = RuleSet::builtin().unwrap();

    assert_eq!(
        pipeline::apply(
            &rules,
            "[Deadmau- RAWS] Deadman.Wonderland.2011.UNCENx264.1080p.BDRip.Deadmau.lad"
        ),
        "Deadman Wonderland"
    );
    assert_eq!(pipeline::apply(&rules, "Cowboy Bebop (BD 1080p)"), "Cowboy Bebop");
}

#[test]
fn rule_order_changes_the_result() {
    // An extraction rule and a bracket-stripping rule produce different
    // results depending on which runs first, so catalog order is part of
    // the pipeline's observable behavior.
    let extract = rule("Keep Id", r"(FC2[\s-]*PPV[\s-]*\d+).*", "$1");
    let strip = rule("Strip Brackets", r"\[[^\]]*\]", "");
    let name = "[FC2 PPV 1234567] Title 1080p";

    let extract_first = RuleSet::from_config(&[extract.clone(), strip.clone()]).unwrap();
    let strip_first = RuleSet::from_config(&[strip, extract]).unwrap();

    assert_ne!(
        pipeline::apply(&extract_first, name),
        pipeline::apply(&strip_first, name)
    );
}

#[test]
fn disabling_a_rule_changes_the_preview() {
    let mut rules = RuleSet::builtin().unwrap();
    let name = "Some.Dotted.Name";

    let with_dots_rule = pipeline::apply(&rules, name);
    assert!(!with_dots_rule.contains('.'));

    let index = rules
        .rules()
        .iter()
        .position(|r| r.name == "Replace Periods and Underscores")
        .unwrap();
    rules.set_active(index, false);

    let without_dots_rule = pipeline::apply(&rules, name);
    assert!(without_dots_rule.contains('.'));
}
