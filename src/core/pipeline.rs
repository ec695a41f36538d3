//! Sanitization pipeline.
//!
//! Applies an active rule set to a raw name as a left-fold: each rule
//! transforms the output of the previous one. Correctness of the result
//! is a property of catalog ordering, not of the fold itself.

use crate::core::rules::RuleSet;
use crate::models::entry::FolderEntry;

/// Apply the active rules to a name.
///
/// If the fully-sanitized result is empty or whitespace, the original
/// name is returned unchanged: the pipeline never produces an empty
/// name. Applying the pipeline to its own output is a no-op.
pub fn apply(rules: &RuleSet, name: &str) -> String {
    let mut sanitized = name.to_string();

    for rule in rules.ordered_for_apply() {
        sanitized = rule.apply(&sanitized);
    }

    if sanitized.trim().is_empty() {
        tracing::debug!("Sanitized name collapsed to nothing, keeping '{}'", name);
        return name.to_string();
    }

    sanitized
}

/// Run a preview pass over folder entries, setting `new_name` on each.
///
/// `new_name` is always set after a pass: to the sanitized string when
/// it differs, otherwise to the original name, so `has_changes` is
/// well-defined. The filesystem is not touched.
pub fn preview_folders(rules: &RuleSet, folders: &mut [FolderEntry]) {
    for folder in folders.iter_mut() {
        let sanitized = apply(rules, &folder.name);
        folder.new_name = Some(sanitized);
    }
}
