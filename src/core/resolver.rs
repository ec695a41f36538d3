//! Path resolution and classification.
//!
//! Classifies a user-supplied path string as local, UNC, or an
//! unresolved mapped drive; normalizes it; and probes reachability.
//! Drive letters are session-scoped, so a drive-letter path is never
//! taken as ground truth for a network location: resolution always
//! prefers a stable share address. All failures degrade to "not
//! accessible" rather than raising.

use crate::services::network::DriveMapper;
use crate::utils::fs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Candidate network drive letters: the last seven of the alphabet.
const NETWORK_LETTER_FIRST: char = 'T';
const NETWORK_LETTER_LAST: char = 'Z';

/// How a path was classified after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Ordinary local path.
    Local,
    /// Server-qualified network address (`\\server\share\...`).
    Unc,
    /// Candidate network drive letter that could not be resolved to a
    /// share address.
    MappedDriveUnresolved,
}

/// Result of resolving a path string. Computed on demand, never cached,
/// so `accessible` reflects current reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// The caller-supplied path.
    pub original: String,
    /// Normalized (and possibly share-resolved) path.
    pub normalized: String,
    /// Classification.
    pub kind: PathKind,
    /// Whether the normalized path answered a reachability probe.
    pub accessible: bool,
}

/// Classifies and normalizes path strings, resolving drive letters to
/// network share addresses where possible.
pub struct PathResolver {
    mapper: Box<dyn DriveMapper>,
    fallbacks: BTreeMap<char, String>,
}

impl PathResolver {
    /// Create a resolver over a drive mapper and a per-letter fallback
    /// address table consulted when the platform lookup fails.
    pub fn new(mapper: Box<dyn DriveMapper>, fallbacks: BTreeMap<char, String>) -> Self {
        Self { mapper, fallbacks }
    }

    /// Resolve a path: normalize it, classify it, and probe reachability.
    pub fn resolve(&self, path: &str) -> ResolvedPath {
        let normalized = normalize_path(path);

        if normalized.starts_with("\\\\") {
            let accessible = self.probe_network(&normalized);
            return ResolvedPath {
                original: path.to_string(),
                normalized,
                kind: PathKind::Unc,
                accessible,
            };
        }

        if let Some(letter) = drive_letter(&normalized) {
            if is_network_letter(letter) {
                if let Some(address) = self.resolve_drive_address(&normalized, letter) {
                    tracing::debug!("Resolved {} to share address {}", path, address);
                    let accessible = self.probe_network(&address);
                    return ResolvedPath {
                        original: path.to_string(),
                        normalized: address,
                        kind: PathKind::Unc,
                        accessible,
                    };
                }

                tracing::debug!("Drive {} has no resolvable share address", letter);
                return ResolvedPath {
                    original: path.to_string(),
                    normalized,
                    kind: PathKind::MappedDriveUnresolved,
                    accessible: false,
                };
            }
        }

        let accessible = fs::dir_exists(Path::new(&normalized));
        ResolvedPath {
            original: path.to_string(),
            normalized,
            kind: PathKind::Local,
            accessible,
        }
    }

    /// Whether the path is reachable right now.
    pub fn is_accessible(&self, path: &str) -> bool {
        self.resolve(path).accessible
    }

    /// Whether the path looks like a mapped network drive.
    ///
    /// True for a candidate network letter that either resolves to a
    /// share address, or fails to resolve but is not a system drive:
    /// an unresolved candidate letter is conservatively assumed to be a
    /// broken mapping rather than an ordinary local drive.
    pub fn is_mapped_drive(&self, path: &str) -> bool {
        let trimmed = path.trim();
        let letter = match drive_letter(trimmed) {
            Some(letter) => letter,
            None => return false,
        };

        if !is_network_letter(letter) {
            return false;
        }

        let drive = &trimmed[..2];
        if self.mapper.resolve_drive(drive).is_some() {
            return true;
        }

        !is_system_drive(letter)
    }

    /// Resolve a drive-letter path to a share address, preserving any
    /// sub-path suffix. Platform lookup first, configured fallback second.
    fn resolve_drive_address(&self, normalized: &str, letter: char) -> Option<String> {
        let drive = &normalized[..2];
        let suffix = drive_suffix(normalized);

        if let Some(base) = self.mapper.resolve_drive(drive) {
            return Some(join_share(&base, &suffix));
        }

        self.fallbacks
            .get(&letter)
            .map(|base| join_share(base, &suffix))
    }

    /// Probe a network address, attempting a single transient share
    /// connect and one re-probe if the first probe fails.
    fn probe_network(&self, address: &str) -> bool {
        if fs::probe(Path::new(address)) {
            return true;
        }

        if address.starts_with("\\\\") && self.mapper.connect_share(address) {
            return fs::probe(Path::new(address));
        }

        false
    }
}

/// Extract the uppercase drive letter from a path whose second
/// character is a colon.
fn drive_letter(path: &str) -> Option<char> {
    let mut chars = path.chars();
    let first = chars.next()?;
    if chars.next()? == ':' && first.is_ascii_alphabetic() {
        Some(first.to_ascii_uppercase())
    } else {
        None
    }
}

/// Whether a letter is in the "typically mapped" network range.
fn is_network_letter(letter: char) -> bool {
    (NETWORK_LETTER_FIRST..=NETWORK_LETTER_LAST).contains(&letter)
}

/// Whether a letter is a system/local drive regardless of reachability.
fn is_system_drive(letter: char) -> bool {
    matches!(letter, 'A' | 'B' | 'C')
}

/// The sub-path after the drive prefix, with a leading backslash.
fn drive_suffix(path: &str) -> String {
    let rest = &path[2..];
    let rest = rest.trim_start_matches(['\\', '/']);
    if rest.is_empty() {
        String::new()
    } else {
        format!("\\{}", rest)
    }
}

/// Join a share base address and a suffix without doubling separators.
fn join_share(base: &str, suffix: &str) -> String {
    format!("{}{}", base.trim_end_matches('\\'), suffix)
}

/// Normalize a path string.
///
/// Trims whitespace, converts forward slashes, and ensures a
/// drive-letter path carries a separator after the colon. UNC paths are
/// left structurally unchanged.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // UNC paths stay as they are
    if trimmed.starts_with("\\\\") {
        return trimmed.to_string();
    }

    // Drive-letter paths are Windows-shaped: use backslashes throughout
    if drive_letter(trimmed).is_some() {
        let mut normalized = trimmed.replace('/', "\\");
        if normalized.len() == 2 {
            normalized.push('\\');
        } else if normalized.as_bytes().get(2) != Some(&b'\\') {
            normalized.insert(2, '\\');
        }
        return normalized;
    }

    // Anything else uses the local separator
    let separator = std::path::MAIN_SEPARATOR.to_string();
    trimmed.replace('/', &separator)
}
