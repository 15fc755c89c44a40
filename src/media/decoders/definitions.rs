// SPDX-License-Identifier: GPL-3.0-only

//! Shared codec definitions for capability queries
//!
//! This module provides a single source of truth for the mime types and
//! profile/level codes used by the oracle, the named checks and the
//! Insights report. Values follow the platform's codec profile/level
//! bit-flag encoding.

/// H.264 / AVC
pub const MIMETYPE_VIDEO_AVC: &str = "video/avc";
/// H.265 / HEVC
pub const MIMETYPE_VIDEO_HEVC: &str = "video/hevc";
/// H.263
pub const MIMETYPE_VIDEO_H263: &str = "video/3gpp";

// AVC profiles
pub const AVC_PROFILE_BASELINE: i32 = 0x01;
pub const AVC_PROFILE_MAIN: i32 = 0x02;
pub const AVC_PROFILE_EXTENDED: i32 = 0x04;
pub const AVC_PROFILE_HIGH: i32 = 0x08;
pub const AVC_PROFILE_HIGH10: i32 = 0x10;
pub const AVC_PROFILE_HIGH422: i32 = 0x20;
pub const AVC_PROFILE_HIGH444: i32 = 0x40;
pub const AVC_PROFILE_CONSTRAINED_BASELINE: i32 = 0x10000;
pub const AVC_PROFILE_CONSTRAINED_HIGH: i32 = 0x80000;

// AVC levels
pub const AVC_LEVEL1: i32 = 0x01;
pub const AVC_LEVEL1B: i32 = 0x02;
pub const AVC_LEVEL11: i32 = 0x04;
pub const AVC_LEVEL12: i32 = 0x08;
pub const AVC_LEVEL13: i32 = 0x10;
pub const AVC_LEVEL2: i32 = 0x20;
pub const AVC_LEVEL21: i32 = 0x40;
pub const AVC_LEVEL22: i32 = 0x80;
pub const AVC_LEVEL3: i32 = 0x100;
pub const AVC_LEVEL31: i32 = 0x200;
pub const AVC_LEVEL32: i32 = 0x400;
pub const AVC_LEVEL4: i32 = 0x800;
pub const AVC_LEVEL41: i32 = 0x1000;
pub const AVC_LEVEL42: i32 = 0x2000;
pub const AVC_LEVEL5: i32 = 0x4000;
pub const AVC_LEVEL51: i32 = 0x8000;
pub const AVC_LEVEL52: i32 = 0x10000;

// HEVC profiles
pub const HEVC_PROFILE_MAIN: i32 = 0x01;
pub const HEVC_PROFILE_MAIN10: i32 = 0x02;
pub const HEVC_PROFILE_MAIN_STILL: i32 = 0x04;
pub const HEVC_PROFILE_MAIN10_HDR10: i32 = 0x1000;

// HEVC levels (main and high tier interleave)
pub const HEVC_MAIN_TIER_LEVEL1: i32 = 0x1;
pub const HEVC_HIGH_TIER_LEVEL1: i32 = 0x2;
pub const HEVC_MAIN_TIER_LEVEL2: i32 = 0x4;
pub const HEVC_HIGH_TIER_LEVEL2: i32 = 0x8;
pub const HEVC_MAIN_TIER_LEVEL21: i32 = 0x10;
pub const HEVC_HIGH_TIER_LEVEL21: i32 = 0x20;
pub const HEVC_MAIN_TIER_LEVEL3: i32 = 0x40;
pub const HEVC_HIGH_TIER_LEVEL3: i32 = 0x80;
pub const HEVC_MAIN_TIER_LEVEL31: i32 = 0x100;
pub const HEVC_HIGH_TIER_LEVEL31: i32 = 0x200;
pub const HEVC_MAIN_TIER_LEVEL4: i32 = 0x400;
pub const HEVC_HIGH_TIER_LEVEL4: i32 = 0x800;
pub const HEVC_MAIN_TIER_LEVEL41: i32 = 0x1000;
pub const HEVC_HIGH_TIER_LEVEL41: i32 = 0x2000;
pub const HEVC_MAIN_TIER_LEVEL5: i32 = 0x4000;
pub const HEVC_HIGH_TIER_LEVEL5: i32 = 0x8000;
pub const HEVC_MAIN_TIER_LEVEL51: i32 = 0x10000;
pub const HEVC_HIGH_TIER_LEVEL51: i32 = 0x20000;
pub const HEVC_MAIN_TIER_LEVEL52: i32 = 0x40000;
pub const HEVC_HIGH_TIER_LEVEL52: i32 = 0x80000;
pub const HEVC_MAIN_TIER_LEVEL6: i32 = 0x100000;
pub const HEVC_HIGH_TIER_LEVEL6: i32 = 0x200000;

// H.263 profiles
pub const H263_PROFILE_BASELINE: i32 = 0x01;

// H.263 levels
//
// Not totally ordered: Level45 only implies Level10.
pub const H263_LEVEL10: i32 = 0x01;
pub const H263_LEVEL20: i32 = 0x02;
pub const H263_LEVEL30: i32 = 0x04;
pub const H263_LEVEL40: i32 = 0x08;
pub const H263_LEVEL45: i32 = 0x10;
pub const H263_LEVEL50: i32 = 0x20;
pub const H263_LEVEL60: i32 = 0x40;
pub const H263_LEVEL70: i32 = 0x80;

/// Named decoder check with the fixed arguments it forwards to the oracle
#[derive(Debug, Clone, Copy)]
pub struct DecoderCheckDef {
    /// Stable identifier (e.g., "hevc-main10")
    pub name: &'static str,
    /// Human-readable description for report display
    pub description: &'static str,
    pub mime: &'static str,
    /// `None` means any decoder for the mime is enough
    pub profile_level: Option<(i32, i32)>,
}

impl DecoderCheckDef {
    const fn any(name: &'static str, description: &'static str, mime: &'static str) -> Self {
        Self {
            name,
            description,
            mime,
            profile_level: None,
        }
    }

    const fn at(
        name: &'static str,
        description: &'static str,
        mime: &'static str,
        profile: i32,
        level: i32,
    ) -> Self {
        Self {
            name,
            description,
            mime,
            profile_level: Some((profile, level)),
        }
    }
}

/// HEVC decoder present at all
pub const HEVC_CHECK: DecoderCheckDef =
    DecoderCheckDef::any("hevc", "HEVC decoder", MIMETYPE_VIDEO_HEVC);

/// HEVC Main10 (10-bit) up to main tier level 5
pub const HEVC_MAIN10_CHECK: DecoderCheckDef = DecoderCheckDef::at(
    "hevc-main10",
    "HEVC Main10 @ Main tier level 5",
    MIMETYPE_VIDEO_HEVC,
    HEVC_PROFILE_MAIN10,
    HEVC_MAIN_TIER_LEVEL5,
);

/// AVC High10 (10-bit) up to level 4
pub const AVC_HIGH10_CHECK: DecoderCheckDef = DecoderCheckDef::at(
    "avc-high10",
    "AVC High10 @ level 4",
    MIMETYPE_VIDEO_AVC,
    AVC_PROFILE_HIGH10,
    AVC_LEVEL4,
);

/// Named checks in report order
pub const DECODER_CHECKS: &[DecoderCheckDef] = &[HEVC_CHECK, HEVC_MAIN10_CHECK, AVC_HIGH10_CHECK];
