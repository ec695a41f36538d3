//! Network share collaborator.
//!
//! Mapped drive letters are session-scoped aliases for network shares
//! and do not survive reboots or travel between machines, so the
//! resolver never treats them as ground truth. This module supplies the
//! two primitives it needs: a drive-letter to share-address lookup and
//! a transient, credential-less connect attempt. On platforms without
//! native drive mapping both are unsupported and report failure.

use std::collections::BTreeMap;

/// Drive-letter to network-address lookup plus a transient share
/// connect attempt.
pub trait DriveMapper: Send + Sync {
    /// Resolve a drive prefix (e.g., "Z:") to its network share address.
    /// Returns `None` when the drive is not mapped or mapping is
    /// unsupported on this platform.
    fn resolve_drive(&self, drive: &str) -> Option<String>;

    /// Attempt a transient, credential-less connection to a share.
    /// Returns false when the connection fails or is unsupported.
    fn connect_share(&self, address: &str) -> bool;
}

/// Platform drive mapper.
///
/// Drive mapping is a Windows session concept; this build has no native
/// lookup, so the mapper reports "not mapped" and lets the configured
/// fallback table take over.
#[derive(Debug, Default, Clone)]
pub struct PlatformDriveMapper;

impl DriveMapper for PlatformDriveMapper {
    fn resolve_drive(&self, drive: &str) -> Option<String> {
        tracing::debug!("No native drive mapping support; cannot resolve {}", drive);
        None
    }

    fn connect_share(&self, address: &str) -> bool {
        tracing::debug!("No native share connect support; cannot connect {}", address);
        false
    }
}

/// Table-backed drive mapper, used in tests and for explicit mappings.
#[derive(Debug, Default, Clone)]
pub struct StaticDriveMapper {
    map: BTreeMap<char, String>,
}

impl StaticDriveMapper {
    pub fn new(map: BTreeMap<char, String>) -> Self {
        Self { map }
    }
}

impl DriveMapper for StaticDriveMapper {
    fn resolve_drive(&self, drive: &str) -> Option<String> {
        let letter = drive.chars().next()?.to_ascii_uppercase();
        self.map.get(&letter).cloned()
    }

    fn connect_share(&self, _address: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_mapper_is_unsupported() {
        let mapper = PlatformDriveMapper;
        assert!(mapper.resolve_drive("Z:").is_none());
        assert!(!mapper.connect_share("\\\\server\\share"));
    }

    #[test]
    fn test_static_mapper() {
        let mut map = BTreeMap::new();
        map.insert('Z', "\\\\server\\share".to_string());
        let mapper = StaticDriveMapper::new(map);
        assert_eq!(
            mapper.resolve_drive("z:"),
            Some("\\\\server\\share".to_string())
        );
        assert!(mapper.resolve_drive("Y:").is_none());
    }
}
