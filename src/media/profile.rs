// SPDX-License-Identifier: GPL-3.0-only

//! Playback device-profile conditions
//!
//! Translates decoder capabilities into the codec-profile conditions a media
//! server uses to pick direct play or transcoding.

use crate::media::decoders::CapabilityOracle;
use serde::{Deserialize, Serialize};
use std::fmt;

// H.264 level caps (level number without the dot)
const H264_LEVEL_4_1: &str = "41";
const H264_LEVEL_5_1: &str = "51";
const H264_LEVEL_5_2: &str = "52";

/// Codec name used for HEVC codec profiles
pub const CODEC_HEVC: &str = "hevc";

/// Kind of stream a codec profile applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecKind {
    Video,
    VideoAudio,
    Audio,
}

/// Comparison applied by a profile condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    Equals,
    NotEquals,
    LessThanEqual,
    /// Value is a `|`-separated list
    EqualsAny,
}

/// Stream property a profile condition inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionProperty {
    VideoProfile,
    VideoLevel,
    AudioChannels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCondition {
    pub condition: ConditionType,
    pub property: ConditionProperty,
    pub value: String,
}

impl ProfileCondition {
    pub fn new(
        condition: ConditionType,
        property: ConditionProperty,
        value: impl Into<String>,
    ) -> Self {
        Self {
            condition,
            property,
            value: value.into(),
        }
    }

    pub fn video_profile(condition: ConditionType, value: impl Into<String>) -> Self {
        Self::new(condition, ConditionProperty::VideoProfile, value)
    }
}

impl fmt::Display for ProfileCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} ", self.property, self.condition)?;
        write!(f, "{:?}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecProfile {
    pub kind: CodecKind,
    /// Codec the conditions apply to, `None` for all codecs of `kind`
    pub codec: Option<String>,
    pub conditions: Vec<ProfileCondition>,
}

/// Coarse device family, used to cap H.264 levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceClass {
    #[default]
    Generic,
    FireTv,
    #[serde(rename = "fire-tv-stick-4k")]
    #[value(name = "fire-tv-stick-4k")]
    FireTvStick4k,
}

/// HEVC codec profile derived from decoder support
///
/// Without any HEVC decoder every HEVC profile is excluded. Without Main10
/// only the 10-bit profile is excluded.
pub fn hevc_codec_profile(oracle: &CapabilityOracle) -> CodecProfile {
    let condition = if !oracle.supports_hevc() {
        tracing::info!("Device does not support HEVC");
        ProfileCondition::video_profile(ConditionType::Equals, "none")
    } else if !oracle.supports_hevc_main10() {
        tracing::info!("Device does not support HEVC 10 bit");
        ProfileCondition::video_profile(ConditionType::NotEquals, "Main 10")
    } else {
        tracing::info!("Device supports HEVC 10 bit");
        ProfileCondition::video_profile(ConditionType::NotEquals, "none")
    };

    CodecProfile {
        kind: CodecKind::Video,
        codec: Some(CODEC_HEVC.to_string()),
        conditions: vec![condition],
    }
}

/// Maximum H.264 level for a device family
pub fn h264_level_condition(device: DeviceClass) -> ProfileCondition {
    let level = match device {
        DeviceClass::FireTvStick4k => H264_LEVEL_5_2,
        DeviceClass::FireTv => H264_LEVEL_4_1,
        DeviceClass::Generic => H264_LEVEL_5_1,
    };
    ProfileCondition::new(
        ConditionType::LessThanEqual,
        ConditionProperty::VideoLevel,
        level,
    )
}

/// H.264 profiles accepted for direct play
pub fn h264_profile_condition() -> ProfileCondition {
    let profiles = ["high", "main", "baseline", "constrained baseline"];
    ProfileCondition::video_profile(ConditionType::EqualsAny, profiles.join("|"))
}

/// Cap audio channels for video streams
pub fn max_audio_channels_profile(channels: u32) -> CodecProfile {
    CodecProfile {
        kind: CodecKind::VideoAudio,
        codec: None,
        conditions: vec![ProfileCondition::new(
            ConditionType::LessThanEqual,
            ConditionProperty::AudioChannels,
            channels.to_string(),
        )],
    }
}
