//! Folder scan engine.
//!
//! Orchestrates the resolver, pipeline, classifier and generator over a
//! directory listing: scan, preview, apply. A scan over an unreachable
//! root returns a deterministic offline fixture instead of an empty
//! result, and an apply whose first entry is unreachable runs entirely
//! in memory (demo mode). Raw mapped-drive paths are rejected outright;
//! the caller must supply a resolved network address.

use crate::core::classifier::MediaClassifier;
use crate::core::pipeline;
use crate::core::resolver::PathResolver;
use crate::core::rules::RuleSet;
use crate::generators::filename;
use crate::models::config::Config;
use crate::models::entry::{ApplyReport, ApplyStatus, FileEntry, FolderEntry};
use crate::models::media::MediaKind;
use crate::services::metadata::{EpisodeQuery, MetadataClient};
use crate::services::network::PlatformDriveMapper;
use crate::utils::fs;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a root for folders.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The normalized root the listing came from.
    pub root: String,
    /// True when the root was unreachable and the entries are the
    /// offline fixture rather than real data.
    pub offline: bool,
    /// Listed entries.
    pub entries: Vec<FolderEntry>,
}

/// The sanitization workflow engine.
pub struct FolderScanEngine {
    resolver: PathResolver,
    rules: RuleSet,
    classifier: MediaClassifier,
    fixture: Vec<String>,
}

impl FolderScanEngine {
    /// Create an engine from its parts.
    pub fn new(resolver: PathResolver, rules: RuleSet, fixture: Vec<String>) -> Result<Self> {
        Ok(Self {
            resolver,
            rules,
            classifier: MediaClassifier::new()?,
            fixture,
        })
    }

    /// Create an engine from configuration, using the platform drive
    /// mapper and built-in defaults for anything the config omits.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = PathResolver::new(
            Box::new(PlatformDriveMapper),
            config.drive_fallback_letters(),
        );
        let rules = if config.rules.is_empty() {
            RuleSet::builtin()?
        } else {
            RuleSet::from_config(&config.rules)?
        };
        let fixture = if config.offline_fixture.is_empty() {
            default_fixture()
        } else {
            config.offline_fixture.clone()
        };
        Self::new(resolver, rules, fixture)
    }

    /// The rule catalog.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Toggle a rule between scans. Configuration, not mid-pass state:
    /// set before a preview pass begins.
    pub fn set_rule_active(&mut self, index: usize, active: bool) {
        self.rules.set_active(index, active);
    }

    /// List the immediate subfolders of a root.
    ///
    /// A raw mapped-drive path is rejected: drive letters are
    /// session-scoped and never scanned directly. An unreachable root
    /// yields the offline fixture with `offline` set.
    pub async fn scan_folders(&self, root: &str) -> Result<ScanOutcome> {
        if self.resolver.is_mapped_drive(root) {
            tracing::warn!("Rejecting mapped drive path: {}", root);
            return Err(Error::MappedDriveUnsupported(root.to_string()));
        }

        let resolved = self.resolver.resolve(root);
        tracing::debug!(
            "Scan root {} resolved to {} ({:?}, accessible: {})",
            root,
            resolved.normalized,
            resolved.kind,
            resolved.accessible
        );

        if !resolved.accessible {
            tracing::info!(
                "Root {} is not accessible, using offline fixture",
                resolved.normalized
            );
            return Ok(ScanOutcome {
                entries: self.fixture_entries(&resolved.normalized),
                offline: true,
                root: resolved.normalized,
            });
        }

        let root_path = PathBuf::from(&resolved.normalized);
        let mut entries = Vec::new();

        for dir_entry in WalkDir::new(&root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
        {
            match folder_entry(dir_entry.path(), &root_path) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable folder {:?}: {}", dir_entry.path(), e);
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::info!("Found {} folders under {}", entries.len(), root_path.display());

        Ok(ScanOutcome {
            root: resolved.normalized,
            offline: false,
            entries,
        })
    }

    /// Run the sanitization pipeline over listed folders, setting
    /// `new_name` on every entry. The filesystem is not touched.
    pub fn preview_folders(&self, entries: &mut [FolderEntry]) {
        pipeline::preview_folders(&self.rules, entries);
    }

    /// Rename selected, changed folders.
    ///
    /// Demo mode is a batch-level switch decided once: if the first
    /// entry's path is unreachable, every rename updates in-memory
    /// state only. Collisions and rename failures are recorded against
    /// their entry and do not abort the batch.
    pub async fn apply_folders(&self, entries: &mut [FolderEntry]) -> ApplyReport {
        let demo_mode = match entries.first() {
            Some(first) => !fs::path_exists(&first.full_path),
            None => false,
        };

        if demo_mode {
            tracing::info!("Running in demo mode - no filesystem changes will be made");
        }

        let mut report = ApplyReport {
            demo_mode,
            all_successful: true,
            outcomes: Vec::new(),
        };

        for entry in entries.iter_mut().filter(|e| e.selected && e.has_changes()) {
            let new_name = match entry.new_name.clone() {
                Some(name) => name,
                None => continue,
            };

            if demo_mode {
                let original = std::mem::replace(&mut entry.name, new_name.clone());
                entry.full_path = entry.parent_path.join(&new_name);
                report.record(&original, &new_name, ApplyStatus::Renamed, None);
                continue;
            }

            let target = entry.parent_path.join(&new_name);
            if fs::path_exists(&target) {
                tracing::warn!("Target already exists: {}", target.display());
                report.record(
                    &entry.name,
                    &new_name,
                    ApplyStatus::Collision,
                    Some(format!("target already exists: {}", target.display())),
                );
                continue;
            }

            match fs::rename_dir(&entry.full_path, &target) {
                Ok(()) => {
                    tracing::debug!(
                        "Renamed {} -> {}",
                        entry.full_path.display(),
                        target.display()
                    );
                    let original = std::mem::replace(&mut entry.name, new_name.clone());
                    entry.full_path = target;
                    report.record(&original, &new_name, ApplyStatus::Renamed, None);
                }
                Err(e) => {
                    tracing::warn!("Rename failed for {}: {}", entry.full_path.display(), e);
                    report.record(
                        &entry.name,
                        &new_name,
                        ApplyStatus::Failed,
                        Some(e.to_string()),
                    );
                }
            }
        }

        report
    }

    /// List the video files directly under a root.
    pub async fn scan_files(&self, root: &str) -> Result<Vec<FileEntry>> {
        if self.resolver.is_mapped_drive(root) {
            return Err(Error::MappedDriveUnsupported(root.to_string()));
        }

        let resolved = self.resolver.resolve(root);
        if !resolved.accessible {
            return Err(Error::PathNotFound(resolved.normalized));
        }

        let root_path = PathBuf::from(&resolved.normalized);
        let mut entries = Vec::new();

        for dir_entry in WalkDir::new(&root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && fs::is_video_file(e.path()))
        {
            match file_entry(dir_entry.path(), &root_path) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {:?}: {}", dir_entry.path(), e);
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Classify each file, extract its fields, and propose a canonical
    /// name. The filesystem is not touched.
    pub fn analyze_files(&self, entries: &mut [FileEntry]) {
        for entry in entries.iter_mut() {
            let (kind, record) = self.classifier.parse(&entry.name);
            let new_name = filename::generate_file_name(&record, kind, &entry.extension);

            entry.kind = kind;
            entry.record = Some(record);
            entry.new_name = Some(new_name);
        }
    }

    /// Refine episode titles from the metadata provider, regenerating
    /// proposed names where a lookup succeeds. Lookup failures are
    /// logged and skipped; baseline behavior is unaffected.
    pub async fn refine_episode_titles(
        &self,
        entries: &mut [FileEntry],
        client: &MetadataClient,
    ) {
        for entry in entries.iter_mut().filter(|e| e.kind == MediaKind::TvShow) {
            let record = match entry.record.as_mut() {
                Some(record) => record,
                None => continue,
            };
            let query = match EpisodeQuery::from_record(record) {
                Some(query) => query,
                None => continue,
            };

            match client.lookup_episode_title(&query).await {
                Ok(Some(title)) => {
                    tracing::debug!("Refined episode title for {}: {}", entry.name, title);
                    record.episode_title = Some(title);
                    entry.new_name = Some(filename::generate_file_name(
                        record,
                        entry.kind,
                        &entry.extension,
                    ));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Episode lookup failed for {}: {}", entry.name, e);
                }
            }
        }
    }

    /// Rename selected, changed files in place, with the same demo-mode
    /// and per-entry failure semantics as folder apply.
    pub async fn apply_files(&self, entries: &mut [FileEntry]) -> ApplyReport {
        let demo_mode = match entries.first() {
            Some(first) => !fs::path_exists(&first.full_path),
            None => false,
        };

        let mut report = ApplyReport {
            demo_mode,
            all_successful: true,
            outcomes: Vec::new(),
        };

        for entry in entries.iter_mut().filter(|e| e.selected && e.has_changes()) {
            let new_name = match entry.new_name.clone() {
                Some(name) => name,
                None => continue,
            };

            if demo_mode {
                let original = std::mem::replace(&mut entry.name, new_name.clone());
                entry.full_path = entry.directory.join(&new_name);
                report.record(&original, &new_name, ApplyStatus::Renamed, None);
                continue;
            }

            let target = entry.directory.join(&new_name);
            if fs::path_exists(&target) {
                report.record(
                    &entry.name,
                    &new_name,
                    ApplyStatus::Collision,
                    Some(format!("target already exists: {}", target.display())),
                );
                continue;
            }

            match fs::move_file(&entry.full_path, &target) {
                Ok(()) => {
                    let original = std::mem::replace(&mut entry.name, new_name.clone());
                    entry.full_path = target;
                    report.record(&original, &new_name, ApplyStatus::Renamed, None);
                }
                Err(e) => {
                    report.record(
                        &entry.name,
                        &new_name,
                        ApplyStatus::Failed,
                        Some(e.to_string()),
                    );
                }
            }
        }

        report
    }

    /// Move selected files into a Plex library layout under a target
    /// base: `Movies/Title (Year)/`, `TV Shows/Title/Season XX/`, and
    /// `Other/` for unknowns.
    pub async fn organize_files(
        &self,
        entries: &mut [FileEntry],
        target_base: &Path,
    ) -> ApplyReport {
        let mut report = ApplyReport {
            demo_mode: false,
            all_successful: true,
            outcomes: Vec::new(),
        };

        for entry in entries.iter_mut().filter(|e| e.selected) {
            let record = match entry.record.as_ref() {
                Some(record) => record,
                None => continue,
            };

            let folder = match entry.kind {
                MediaKind::Movie => target_base
                    .join("Movies")
                    .join(filename::movie_folder_name(record)),
                MediaKind::TvShow => target_base
                    .join("TV Shows")
                    .join(&record.title)
                    .join(filename::season_folder_name(record)),
                MediaKind::Unknown => target_base.join("Other"),
            };

            let file_name = entry.new_name.clone().unwrap_or_else(|| entry.name.clone());
            let target = folder.join(&file_name);

            let result = fs::create_dir_all(&folder).and_then(|_| {
                if fs::path_exists(&target) {
                    Err(Error::TargetExists(target.display().to_string()))
                } else {
                    fs::move_file(&entry.full_path, &target)
                }
            });

            match result {
                Ok(()) => {
                    let original = std::mem::replace(&mut entry.name, file_name.clone());
                    entry.full_path = target;
                    entry.directory = folder;
                    report.record(&original, &file_name, ApplyStatus::Renamed, None);
                }
                Err(Error::TargetExists(msg)) => {
                    report.record(&entry.name, &file_name, ApplyStatus::Collision, Some(msg));
                }
                Err(e) => {
                    report.record(
                        &entry.name,
                        &file_name,
                        ApplyStatus::Failed,
                        Some(e.to_string()),
                    );
                }
            }
        }

        report
    }

    /// Build fixture entries rooted under the (unreachable) scan root.
    fn fixture_entries(&self, root: &str) -> Vec<FolderEntry> {
        let root_path = PathBuf::from(root);
        self.fixture
            .iter()
            .map(|name| FolderEntry {
                full_path: root_path.join(name),
                name: name.clone(),
                parent_path: root_path.clone(),
                last_modified: chrono::Utc::now(),
                new_name: None,
                selected: true,
            })
            .collect()
    }
}

/// Build a folder entry from a directory path.
fn folder_entry(path: &Path, parent: &Path) -> Result<FolderEntry> {
    let metadata = std::fs::metadata(path)?;
    let last_modified = metadata
        .modified()
        .map(chrono::DateTime::<chrono::Utc>::from)
        .unwrap_or_else(|_| chrono::Utc::now());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(FolderEntry {
        full_path: path.to_path_buf(),
        name,
        parent_path: parent.to_path_buf(),
        last_modified,
        new_name: None,
        selected: true,
    })
}

/// Build a file entry from a file path.
fn file_entry(path: &Path, parent: &Path) -> Result<FileEntry> {
    let metadata = std::fs::metadata(path)?;
    let last_modified = metadata
        .modified()
        .map(chrono::DateTime::<chrono::Utc>::from)
        .unwrap_or_else(|_| chrono::Utc::now());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(FileEntry {
        full_path: path.to_path_buf(),
        name,
        extension: fs::get_extension(path).unwrap_or_default(),
        directory: parent.to_path_buf(),
        size: metadata.len(),
        last_modified,
        new_name: None,
        selected: true,
        kind: MediaKind::Unknown,
        record: None,
    })
}

/// The built-in offline fixture: a deterministic sample of messy media
/// folder names that exercises the default rule catalog.
pub fn default_fixture() -> Vec<String> {
    [
        "[Deadmau- RAWS] Deadman.Wonderland.2011.UNCENx264.1080p.BDRip.Deadmau.lad",
        "FC2-PPV-4683409",
        "FC2 PPV 1864523 Personal Recording Collection [1080p]",
        "The.Show.S02E05.Some.Title.1080p.WEBRip-GROUP",
        "Married Couple Swap S01 UNCENSORED English Hardsub 720p WEB x264 AAC - TMD-Group (OceanVeil)",
        "Cowboy Bebop (BD 1080p)",
        "Some.Movie.2014.1080p.BluRay",
        "Planetes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
