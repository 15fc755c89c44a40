// SPDX-License-Identifier: GPL-3.0-only

//! Codec descriptors as advertised by the platform registry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a descriptor represents a decoder or an encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecRole {
    Decoder,
    Encoder,
}

impl fmt::Display for CodecRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecRole::Decoder => f.pad("decoder"),
            CodecRole::Encoder => f.pad("encoder"),
        }
    }
}

/// One (profile, level) pair a codec claims to support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileLevel {
    pub profile: i32,
    pub level: i32,
}

impl ProfileLevel {
    pub const fn new(profile: i32, level: i32) -> Self {
        Self { profile, level }
    }
}

/// The descriptor does not serve the requested mime type
///
/// Expected for most descriptors in a snapshot, since each one belongs to a
/// single codec family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("codec {codec} does not support type {mime}")]
pub struct UnsupportedMime {
    pub codec: String,
    pub mime: String,
}

/// Immutable record describing one advertised codec implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecDescriptor {
    /// Implementation name (e.g., "c2.android.hevc.decoder")
    #[serde(default)]
    pub name: String,
    pub mime: String,
    pub role: CodecRole,
    #[serde(default)]
    pub profile_levels: Vec<ProfileLevel>,
}

impl CodecDescriptor {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        role: CodecRole,
        profile_levels: impl IntoIterator<Item = ProfileLevel>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            role,
            profile_levels: profile_levels.into_iter().collect(),
        }
    }

    pub fn decoder(
        name: impl Into<String>,
        mime: impl Into<String>,
        profile_levels: impl IntoIterator<Item = ProfileLevel>,
    ) -> Self {
        Self::new(name, mime, CodecRole::Decoder, profile_levels)
    }

    pub fn encoder(
        name: impl Into<String>,
        mime: impl Into<String>,
        profile_levels: impl IntoIterator<Item = ProfileLevel>,
    ) -> Self {
        Self::new(name, mime, CodecRole::Encoder, profile_levels)
    }

    /// Whether this descriptor serves `mime` (ASCII case-insensitive)
    pub fn supports_type(&self, mime: &str) -> bool {
        self.mime.eq_ignore_ascii_case(mime)
    }

    /// Profile/level pairs advertised for `mime`
    pub fn capabilities_for_type(&self, mime: &str) -> Result<&[ProfileLevel], UnsupportedMime> {
        if self.supports_type(mime) {
            Ok(&self.profile_levels)
        } else {
            Err(UnsupportedMime {
                codec: self.name.clone(),
                mime: mime.to_string(),
            })
        }
    }
}
