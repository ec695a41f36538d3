//! Directory entry models for the scan/preview/apply workflow.

use crate::models::media::{MediaKind, MediaRecord};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A folder found by a scan, before and after sanitization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Full path to the folder.
    pub full_path: PathBuf,
    /// Folder name without path.
    pub name: String,
    /// Parent directory.
    pub parent_path: PathBuf,
    /// Last modified time.
    pub last_modified: chrono::DateTime<chrono::Utc>,
    /// Proposed new name; absent until a preview pass has run.
    pub new_name: Option<String>,
    /// Whether this entry is selected for apply.
    pub selected: bool,
}

impl FolderEntry {
    /// Whether a preview produced a name that differs from the original.
    pub fn has_changes(&self) -> bool {
        match &self.new_name {
            Some(new_name) => !new_name.is_empty() && new_name != &self.name,
            None => false,
        }
    }
}

/// A media file found by a scan, before and after renaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Full path to the file.
    pub full_path: PathBuf,
    /// File name without path.
    pub name: String,
    /// File extension (without the dot, lowercase).
    pub extension: String,
    /// Containing directory.
    pub directory: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Last modified time.
    pub last_modified: chrono::DateTime<chrono::Utc>,
    /// Proposed new file name; absent until an analyze pass has run.
    pub new_name: Option<String>,
    /// Whether this entry is selected for apply.
    pub selected: bool,
    /// Detected media kind.
    pub kind: MediaKind,
    /// Extracted media fields; absent until an analyze pass has run.
    pub record: Option<MediaRecord>,
}

impl FileEntry {
    /// Whether an analyze pass produced a name that differs from the original.
    pub fn has_changes(&self) -> bool {
        match &self.new_name {
            Some(new_name) => !new_name.is_empty() && new_name != &self.name,
            None => false,
        }
    }
}

/// Outcome of a single attempted rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyStatus {
    /// The rename succeeded (or was recorded in memory in demo mode).
    Renamed,
    /// The destination already existed.
    Collision,
    /// The rename failed (access denied, IO error).
    Failed,
}

/// Per-entry record of an apply pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Original name.
    pub original: String,
    /// Target name.
    pub target: String,
    /// What happened.
    pub status: ApplyStatus,
    /// Failure detail, if any.
    pub message: Option<String>,
}

/// Result of an apply pass over a batch of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Whether the batch ran in demo mode (in-memory only).
    pub demo_mode: bool,
    /// True only if every attempted entry succeeded.
    pub all_successful: bool,
    /// Per-entry outcomes, in batch order.
    pub outcomes: Vec<ApplyOutcome>,
}

impl ApplyReport {
    /// Record an outcome, updating the aggregate success flag.
    pub fn record(&mut self, original: &str, target: &str, status: ApplyStatus, message: Option<String>) {
        if status != ApplyStatus::Renamed {
            self.all_successful = false;
        }
        self.outcomes.push(ApplyOutcome {
            original: original.to_string(),
            target: target.to_string(),
            status,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_changes() {
        let mut entry = FolderEntry {
            full_path: PathBuf::from("/media/Some.Folder"),
            name: "Some.Folder".to_string(),
            parent_path: PathBuf::from("/media"),
            last_modified: chrono::Utc::now(),
            new_name: None,
            selected: true,
        };
        assert!(!entry.has_changes());

        entry.new_name = Some("Some.Folder".to_string());
        assert!(!entry.has_changes());

        entry.new_name = Some("Some Folder".to_string());
        assert!(entry.has_changes());
    }

    #[test]
    fn test_report_aggregate_flag() {
        let mut report = ApplyReport {
            all_successful: true,
            ..Default::default()
        };
        report.record("a", "b", ApplyStatus::Renamed, None);
        assert!(report.all_successful);
        report.record("c", "b", ApplyStatus::Collision, None);
        assert!(!report.all_successful);
        assert_eq!(report.outcomes.len(), 2);
    }
}
