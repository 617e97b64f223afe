//! Types for suffix tree construction and querying
//!
//! Edge labels are `(start, end)` index pairs into the sentinel-terminated
//! text, so every type here speaks in absolute text positions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Index of a node inside the tree arena
pub type NodeId = u32;

/// Absolute position in the sentinel-terminated text
pub type TextPosition = usize;

/// The root is always the first node allocated
pub const ROOT: NodeId = 0;

/// Suffix index carried by internal nodes (and the root)
pub const NOT_A_LEAF: usize = usize::MAX;

/// Sentinel byte appended to every text.
/// 0x00 orders below every other byte, so the sentinel suffix sorts first.
pub const SENTINEL_BYTE: u8 = 0x00;

/// Largest text (without sentinel) whose node count still fits in a `NodeId`.
/// A tree over `n + 1` symbols holds at most `2 * (n + 1)` nodes.
pub const MAX_TEXT_LEN: usize = (NodeId::MAX / 2) as usize - 1;

/// Configuration for suffix tree building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Fold ASCII letters to lowercase in the text and in every pattern (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
    /// Maximum accepted text size in bytes (default: 16MB)
    ///
    /// A tree costs tens of bytes per node and up to two nodes per text byte.
    #[serde(default = "default_max_text_size")]
    pub max_text_size: u64,
}

fn default_max_text_size() -> u64 {
    16 * 1024 * 1024
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            max_text_size: default_max_text_size(),
        }
    }
}

impl TreeConfig {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: TreeConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Apply the configured case folding to a text or pattern
    pub fn fold<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        if self.case_insensitive && bytes.iter().any(u8::is_ascii_uppercase) {
            Cow::Owned(bytes.to_ascii_lowercase())
        } else {
            Cow::Borrowed(bytes)
        }
    }
}

/// Shape statistics of a finished tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Length of the original text (sentinel excluded)
    pub text_len: usize,
    /// Total number of nodes, root included
    pub node_count: usize,
    /// Number of leaves, the sentinel-only suffix included
    pub leaf_count: usize,
    /// Number of internal nodes, root included
    pub internal_count: usize,
    /// Longest root-to-node path label, in symbols
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TreeConfig::default();
        assert!(!config.case_insensitive);
        assert_eq!(config.max_text_size, 16 * 1024 * 1024);
    }

    #[test]
    fn test_config_partial_json() {
        let config: TreeConfig = serde_json::from_str(r#"{"case_insensitive": true}"#).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.max_text_size, default_max_text_size());
    }

    #[test]
    fn test_config_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sxt.json");
        fs::write(&path, r#"{"max_text_size": 16}"#).unwrap();

        let config = TreeConfig::load(&path).unwrap();
        assert_eq!(config.max_text_size, 16);
        assert!(!config.case_insensitive);

        assert!(TreeConfig::load(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_fold() {
        let sensitive = TreeConfig::default();
        assert!(matches!(sensitive.fold(b"HeLLo"), Cow::Borrowed(b"HeLLo")));

        let insensitive = TreeConfig {
            case_insensitive: true,
            ..Default::default()
        };
        assert_eq!(&*insensitive.fold(b"HeLLo"), b"hello");
        assert!(matches!(insensitive.fold(b"plain"), Cow::Borrowed(_)));
    }
}
