// SPDX-License-Identifier: GPL-3.0-only

//! Types for the Insights capability report.

use crate::media::decoders::{CapabilityOracle, DECODER_CHECKS, DecoderCheckDef};
use crate::media::profile::{
    CodecProfile, DeviceClass, ProfileCondition, h264_level_condition, h264_profile_condition,
    hevc_codec_profile, max_audio_channels_profile,
};
use serde::Serialize;

/// Diagnostic summary of what the current decoders can play directly
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityReport {
    /// Device family the H.264 level cap was chosen for
    pub device: DeviceClass,
    /// Number of regular codecs in the snapshot
    pub codec_count: usize,
    /// Named decoder checks, in report order
    pub checks: Vec<CheckStatus>,
    /// HEVC conditions derived from the checks
    pub hevc_profile: CodecProfile,
    /// H.264 level and profile conditions
    pub h264_conditions: Vec<ProfileCondition>,
    /// Audio channel cap for video streams, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_profile: Option<CodecProfile>,
}

/// Result of one named decoder check
#[derive(Debug, Clone, Serialize)]
pub struct CheckStatus {
    /// Check identifier (e.g., "hevc-main10")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    pub state: CheckState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Supported,
    #[default]
    Unsupported,
}

impl CheckState {
    pub fn label(self) -> &'static str {
        match self {
            CheckState::Supported => "supported",
            CheckState::Unsupported => "unsupported",
        }
    }
}

impl From<bool> for CheckState {
    fn from(supported: bool) -> Self {
        if supported {
            CheckState::Supported
        } else {
            CheckState::Unsupported
        }
    }
}

/// Run every check definition against the oracle
fn build_checks_from_defs(
    oracle: &CapabilityOracle,
    defs: &'static [DecoderCheckDef],
) -> Vec<CheckStatus> {
    defs.iter()
        .map(|def| CheckStatus {
            name: def.name,
            description: def.description,
            state: oracle.check(def).into(),
        })
        .collect()
}

impl CapabilityReport {
    /// Evaluate the named checks and derived conditions once
    pub fn collect(oracle: &CapabilityOracle, device: DeviceClass) -> Self {
        Self {
            device,
            codec_count: oracle.descriptors().len(),
            checks: build_checks_from_defs(oracle, DECODER_CHECKS),
            hevc_profile: hevc_codec_profile(oracle),
            h264_conditions: vec![h264_level_condition(device), h264_profile_condition()],
            audio_profile: None,
        }
    }

    /// Cap audio channels for video streams in the derived conditions
    pub fn with_max_audio_channels(mut self, channels: u32) -> Self {
        self.audio_profile = Some(max_audio_channels_profile(channels));
        self
    }
}
