// SPDX-License-Identifier: GPL-3.0-only

//! Codec registry snapshots
//!
//! The registry is the only source of codec descriptors. Platform
//! integrations implement [`CodecRegistry`]; [`SnapshotRegistry`] is the
//! bundled implementation backed by a JSON snapshot or an in-memory list.

use super::descriptor::CodecDescriptor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which codecs a registry enumeration includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryView {
    /// Codecs suitable for regular playback
    #[default]
    Regular,
    /// Every advertised codec, including ones excluded from regular use
    All,
}

/// Errors raised while loading a registry snapshot
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read registry snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse registry snapshot{}: {source}", path_suffix(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
    #[error("codec {name:?} has an empty mime type")]
    EmptyMime { name: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Source of codec descriptor snapshots
pub trait CodecRegistry {
    /// Enumerate descriptors for a view, in registry order
    fn codec_infos(&self, view: RegistryView) -> Vec<CodecDescriptor>;
}

/// Registry entry: a descriptor plus whether it belongs to the regular view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    #[serde(flatten)]
    pub descriptor: CodecDescriptor,
    #[serde(default = "default_regular")]
    pub regular: bool,
}

fn default_regular() -> bool {
    true
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    codecs: Vec<RegistryEntry>,
}

/// Fixed registry snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    entries: Vec<RegistryEntry>,
}

impl SnapshotRegistry {
    /// Registry where every descriptor is part of the regular view
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = CodecDescriptor>) -> Self {
        Self {
            entries: descriptors
                .into_iter()
                .map(|descriptor| RegistryEntry {
                    descriptor,
                    regular: true,
                })
                .collect(),
        }
    }

    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self, RegistryError> {
        for entry in &entries {
            if entry.descriptor.mime.trim().is_empty() {
                let name = entry.descriptor.name.clone();
                return Err(RegistryError::EmptyMime { name });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON snapshot (`{"codecs": [...]}`)
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        Self::parse(json, None)
    }

    fn parse(json: &str, path: Option<&Path>) -> Result<Self, RegistryError> {
        let file: SnapshotFile = match serde_json::from_str(json) {
            Ok(file) => file,
            Err(source) => {
                let path = path.map(Path::to_path_buf);
                return Err(RegistryError::Parse { path, source });
            }
        };
        Self::from_entries(file.codecs)
    }

    /// Load a JSON snapshot from disk
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(source) => {
                let path = path.to_path_buf();
                return Err(RegistryError::Io { path, source });
            }
        };
        let registry = Self::parse(&json, Some(path))?;

        tracing::info!(
            path = %path.display(),
            codecs = registry.entries.len(),
            "Loaded codec registry snapshot"
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CodecRegistry for SnapshotRegistry {
    fn codec_infos(&self, view: RegistryView) -> Vec<CodecDescriptor> {
        self.entries
            .iter()
            .filter(|e| view == RegistryView::All || e.regular)
            .map(|e| e.descriptor.clone())
            .collect()
    }
}
