//! Sanitization rules and the ordered rule set.
//!
//! Rules are immutable once registered except for the active flag, and
//! their order is part of the rule set's identity. The catalog must be
//! built so that extraction rules run before generic stripping rules,
//! prefix removal runs before separator normalization, and trimming
//! runs last; the pipeline applies rules in sequence and never reorders
//! beyond the documented priority override.

use crate::models::config::RuleConfig;
use crate::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Rules hoisted to the front of a pipeline pass, in this order. They
/// must see raw bracketed identifiers before any stripping rule runs.
const PRIORITY_RULES: &[&str] = &["Remove CJK Characters", "Extract FC2 Reference IDs"];

/// A named pattern/replacement transform.
///
/// The pattern is compiled (case-insensitively) at construction; an
/// invalid pattern is a configuration error, not a runtime one.
#[derive(Debug, Clone)]
pub struct SanitizationRule {
    /// Display name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Replacement text; `$1` references capture groups.
    pub replacement: String,
    /// Whether the rule participates in a pipeline pass.
    pub active: bool,
    pattern: Regex,
}

impl SanitizationRule {
    /// Compile a rule from its configuration record.
    pub fn new(config: &RuleConfig) -> Result<Self> {
        let pattern = RegexBuilder::new(&config.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidRule {
                name: config.name.clone(),
                source,
            })?;

        Ok(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            replacement: config.replacement.clone(),
            active: config.active,
            pattern,
        })
    }

    /// Apply the transform to an input string.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    /// The source pattern text.
    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// An ordered collection of sanitization rules.
///
/// Insertion order is application order, except that priority rules are
/// hoisted to the front at apply time. The set is never structurally
/// mutated after construction; only the active flags may be toggled.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SanitizationRule>,
}

impl RuleSet {
    /// Build a rule set from configuration records, compiling every
    /// pattern up front.
    pub fn from_config(configs: &[RuleConfig]) -> Result<Self> {
        let rules = configs
            .iter()
            .map(SanitizationRule::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Build the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_config(&default_rules())
    }

    /// The rules in insertion order.
    pub fn rules(&self) -> &[SanitizationRule] {
        &self.rules
    }

    /// Toggle a rule's active flag by index. Out-of-range indexes are
    /// ignored.
    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.active = active;
        }
    }

    /// Active rules in application order: priority rules first, then
    /// the rest in insertion order.
    pub fn ordered_for_apply(&self) -> Vec<&SanitizationRule> {
        let mut ordered: Vec<&SanitizationRule> = Vec::with_capacity(self.rules.len());

        for name in PRIORITY_RULES {
            if let Some(rule) = self.rules.iter().find(|r| r.active && r.name == *name) {
                ordered.push(rule);
            }
        }

        for rule in &self.rules {
            if rule.active && !PRIORITY_RULES.contains(&rule.name.as_str()) {
                ordered.push(rule);
            }
        }

        ordered
    }
}

/// The built-in rule catalog.
///
/// Product content, not load-bearing architecture: callers may replace
/// it wholesale through configuration. Ordering invariants:
/// extraction before stripping, prefix removal before separator
/// normalization, trim last.
pub fn default_rules() -> Vec<RuleConfig> {
    fn rule(name: &str, description: &str, pattern: &str, replacement: &str) -> RuleConfig {
        RuleConfig {
            name: name.to_string(),
            description: description.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            active: true,
        }
    }

    vec![
        rule(
            "Remove CJK Characters",
            "Removes Japanese, Chinese, Korean characters while preserving Latin text",
            r"[\p{Hiragana}\p{Katakana}\p{Han}\p{Hangul}]+",
            "",
        ),
        rule(
            "Remove Common Prefixes",
            "Removes common bracketed quality prefixes like [HD Uncensored]",
            r"^\[?(HD\s+Uncensored|RAW|RH)\]?\s*",
            "",
        ),
        rule(
            "Extract FC2 Reference IDs",
            "Keeps only the FC2 PPV identifier with numbers",
            r"(FC2[\s-]*PPV[\s-]*\d+).*",
            "$1",
        ),
        rule(
            "Remove Raws Prefix",
            "Removes [Deadmau- RAWS] style raw-release prefixes",
            r"^\[Deadmau-\s*RAWS\]\s*",
            "",
        ),
        rule(
            "Remove Media Format Tags",
            "Removes common media format specifications",
            r"\b(UNCENx264|x264|1080p|720p|BDRip|WEB|AAC|HEVC Edition|Hardsub|WEBRip)\b",
            "",
        ),
        rule(
            "Remove All Bracketed Content",
            "Removes all content within brackets and parentheses",
            r"\[[^\]]*\]|\([^\)]*\)",
            "",
        ),
        rule(
            "Remove Release Groups",
            "Removes release group references",
            r"(TMD-Group|OceanVeil|\bDual Audio\b)",
            "",
        ),
        rule(
            "Remove English Labels",
            "Removes UNCENSORED English and similar labels",
            r"\b(UNCENSORED English|Uncensored)\b",
            "",
        ),
        rule(
            "Replace Periods and Underscores",
            "Replaces periods and underscores with spaces",
            r"[_\.]",
            " ",
        ),
        rule(
            "Replace Multiple Spaces",
            "Replaces multiple spaces with a single space",
            r"\s+",
            " ",
        ),
        rule(
            "Extract Known Series Names",
            "Collapses folders for known series down to the series name",
            r".*(Deadman Wonderland|Cowboy Bebop|Planetes).*",
            "$1",
        ),
        rule(
            "Trim Spaces",
            "Removes spaces at the beginning and end of names",
            r"^\s+|\s+$",
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_compiles() {
        let rules = RuleSet::builtin().unwrap();
        assert_eq!(rules.rules().len(), default_rules().len());
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let config = RuleConfig {
            name: "Broken".to_string(),
            description: String::new(),
            pattern: "([unclosed".to_string(),
            replacement: String::new(),
            active: true,
        };
        let err = RuleSet::from_config(&[config]).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidRule { .. }));
    }

    #[test]
    fn test_rule_backreference() {
        let config = RuleConfig {
            name: "Extract".to_string(),
            description: String::new(),
            pattern: r"(FC2[\s-]*PPV[\s-]*\d+).*".to_string(),
            replacement: "$1".to_string(),
            active: true,
        };
        let rule = SanitizationRule::new(&config).unwrap();
        assert_eq!(
            rule.apply("FC2-PPV-4683409 some trailing noise"),
            "FC2-PPV-4683409"
        );
    }

    #[test]
    fn test_priority_rules_hoisted() {
        let rules = RuleSet::builtin().unwrap();
        let ordered = rules.ordered_for_apply();
        assert_eq!(ordered[0].name, "Remove CJK Characters");
        assert_eq!(ordered[1].name, "Extract FC2 Reference IDs");
    }

    #[test]
    fn test_toggle_by_index() {
        let mut rules = RuleSet::builtin().unwrap();
        rules.set_active(0, false);
        assert!(!rules.rules()[0].active);
        assert!(!rules
            .ordered_for_apply()
            .iter()
            .any(|r| r.name == "Remove CJK Characters"));
        // Out-of-range toggles are ignored
        rules.set_active(999, false);
    }
}
