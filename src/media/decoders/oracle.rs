// SPDX-License-Identifier: GPL-3.0-only

//! Capability oracle
//!
//! Answers whether any codec in a fixed registry snapshot advertises a
//! (mime, role, profile, level) tuple. The snapshot is captured at
//! construction and never changes, so queries are deterministic and the
//! oracle can be shared freely across threads.

use super::definitions::{AVC_HIGH10_CHECK, DecoderCheckDef, HEVC_CHECK, HEVC_MAIN10_CHECK};
use super::descriptor::{CodecDescriptor, CodecRole};
use super::ordering::LevelOrdering;
use super::registry::{CodecRegistry, RegistryView};

/// Read-only view over a codec snapshot
#[derive(Debug, Clone, Default)]
pub struct CapabilityOracle {
    descriptors: Vec<CodecDescriptor>,
}

impl CapabilityOracle {
    /// Capture the regular view of `registry`
    pub fn new(registry: &impl CodecRegistry) -> Self {
        let descriptors = registry.codec_infos(RegistryView::Regular);
        if descriptors.is_empty() {
            tracing::warn!("Codec registry has no regular codecs");
        }
        Self { descriptors }
    }

    pub fn from_descriptors(descriptors: Vec<CodecDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[CodecDescriptor] {
        &self.descriptors
    }

    /// Whether any codec with `role` supports `profile` at `level` for `mime`
    pub fn query(&self, mime: &str, role: CodecRole, profile: i32, level: i32) -> bool {
        let ordering = LevelOrdering::for_mime(mime);

        for info in self.descriptors.iter().filter(|d| d.role == role) {
            let profile_levels = match info.capabilities_for_type(mime) {
                Ok(pl) => pl,
                Err(err) => {
                    tracing::trace!(%err, "Skipping codec");
                    continue;
                }
            };

            let matched = profile_levels
                .iter()
                .filter(|pl| pl.profile == profile)
                .any(|pl| ordering.admits(pl.level, level));
            if matched {
                tracing::debug!(
                    codec = %info.name,
                    mime,
                    profile,
                    level,
                    "Found matching codec"
                );
                return true;
            }
        }

        false
    }

    /// Decoder support for `profile` at `level`
    pub fn has_decoder(&self, mime: &str, profile: i32, level: i32) -> bool {
        self.query(mime, CodecRole::Decoder, profile, level)
    }

    /// Same as [`has_decoder`](Self::has_decoder), logging a record when nothing matches
    pub fn check_decoder(&self, mime: &str, profile: i32, level: i32) -> bool {
        if !self.has_decoder(mime, profile, level) {
            tracing::info!(mime, profile, level, "No decoder for profile and level");
            return false;
        }
        true
    }

    /// Whether any decoder serves `mime`, regardless of profile or level
    pub fn has_decoder_for_type(&self, mime: &str) -> bool {
        self.descriptors
            .iter()
            .any(|d| d.role == CodecRole::Decoder && d.supports_type(mime))
    }

    /// Same as [`has_decoder_for_type`](Self::has_decoder_for_type), logging on a miss
    pub fn check_decoder_for_type(&self, mime: &str) -> bool {
        if !self.has_decoder_for_type(mime) {
            tracing::info!(mime, "No {} decoder", mime);
            return false;
        }
        true
    }

    /// Evaluate a named check, logging a record when it fails
    pub fn check(&self, def: &DecoderCheckDef) -> bool {
        match def.profile_level {
            Some((profile, level)) => self.check_decoder(def.mime, profile, level),
            None => self.check_decoder_for_type(def.mime),
        }
    }

    fn has(&self, def: &DecoderCheckDef) -> bool {
        match def.profile_level {
            Some((profile, level)) => self.has_decoder(def.mime, profile, level),
            None => self.has_decoder_for_type(def.mime),
        }
    }

    pub fn supports_hevc(&self) -> bool {
        self.has(&HEVC_CHECK)
    }

    pub fn supports_hevc_main10(&self) -> bool {
        self.has(&HEVC_MAIN10_CHECK)
    }

    pub fn supports_avc_high10(&self) -> bool {
        self.has(&AVC_HIGH10_CHECK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::decoders::definitions::*;
    use crate::media::decoders::descriptor::ProfileLevel;

    fn oracle(descriptors: Vec<CodecDescriptor>) -> CapabilityOracle {
        CapabilityOracle::from_descriptors(descriptors)
    }

    fn hevc_decoder(profile: i32, level: i32) -> CodecDescriptor {
        CodecDescriptor::decoder(
            "hevc.dec",
            MIMETYPE_VIDEO_HEVC,
            [ProfileLevel::new(profile, level)],
        )
    }

    #[test]
    fn hevc_main10_at_advertised_level() {
        let oracle = oracle(vec![hevc_decoder(HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL5)]);
        let q = |level| oracle.has_decoder(MIMETYPE_VIDEO_HEVC, HEVC_PROFILE_MAIN10, level);
        assert!(q(HEVC_MAIN_TIER_LEVEL5));
        assert!(!q(HEVC_MAIN_TIER_LEVEL6));
    }

    #[test]
    fn empty_snapshot_matches_nothing() {
        let oracle = oracle(Vec::new());
        assert!(!oracle.has_decoder(MIMETYPE_VIDEO_AVC, AVC_PROFILE_HIGH10, AVC_LEVEL4));
        assert!(!oracle.supports_hevc());
        assert!(!oracle.supports_hevc_main10());
        assert!(!oracle.supports_avc_high10());
    }

    #[test]
    fn h263_level45_does_not_cover_intermediate_levels() {
        let oracle = oracle(vec![CodecDescriptor::decoder(
            "h263.dec",
            MIMETYPE_VIDEO_H263,
            [ProfileLevel::new(H263_PROFILE_BASELINE, H263_LEVEL45)],
        )]);
        let q = |level| oracle.has_decoder(MIMETYPE_VIDEO_H263, H263_PROFILE_BASELINE, level);
        assert!(q(H263_LEVEL10));
        assert!(!q(H263_LEVEL20));
        assert!(!q(H263_LEVEL30));
        assert!(!q(H263_LEVEL40));
        assert!(q(H263_LEVEL45));
    }

    #[test]
    fn encoders_never_answer_decoder_queries() {
        let oracle = oracle(vec![CodecDescriptor::encoder(
            "avc.enc",
            MIMETYPE_VIDEO_AVC,
            [ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL4)],
        )]);
        let q = |role| oracle.query(MIMETYPE_VIDEO_AVC, role, AVC_PROFILE_HIGH10, AVC_LEVEL4);
        assert!(!q(CodecRole::Decoder));
        assert!(q(CodecRole::Encoder));
        assert!(!oracle.has_decoder_for_type(MIMETYPE_VIDEO_AVC));
    }

    #[test]
    fn later_descriptor_can_satisfy_after_foreign_ones() {
        let oracle = oracle(vec![
            CodecDescriptor::decoder(
                "vp9.dec",
                "video/x-vnd.on2.vp9",
                [ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL52)],
            ),
            CodecDescriptor::decoder(
                "avc.dec.low",
                MIMETYPE_VIDEO_AVC,
                [ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL31)],
            ),
            CodecDescriptor::decoder(
                "avc.dec.high",
                MIMETYPE_VIDEO_AVC,
                [
                    ProfileLevel::new(AVC_PROFILE_HIGH, AVC_LEVEL52),
                    ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL41),
                ],
            ),
        ]);
        assert!(oracle.supports_avc_high10());
        assert!(!oracle.has_decoder(MIMETYPE_VIDEO_AVC, AVC_PROFILE_HIGH10, AVC_LEVEL42));
    }

    #[test]
    fn check_decoder_agrees_with_has_decoder() {
        let oracle = oracle(vec![hevc_decoder(HEVC_PROFILE_MAIN, HEVC_MAIN_TIER_LEVEL51)]);
        for (profile, level) in [
            (HEVC_PROFILE_MAIN, HEVC_MAIN_TIER_LEVEL4),
            (HEVC_PROFILE_MAIN, HEVC_HIGH_TIER_LEVEL51),
            (HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL4),
        ] {
            let silent = oracle.has_decoder(MIMETYPE_VIDEO_HEVC, profile, level);
            let logged = oracle.check_decoder(MIMETYPE_VIDEO_HEVC, profile, level);
            assert_eq!(silent, logged);
        }
        assert!(oracle.supports_hevc());
        assert!(!oracle.supports_hevc_main10());
    }

    #[test]
    fn named_checks_match_shortcuts_on_hits_and_misses() {
        let hevc_only = oracle(vec![hevc_decoder(HEVC_PROFILE_MAIN, HEVC_MAIN_TIER_LEVEL41)]);
        let avc_only = oracle(vec![CodecDescriptor::decoder(
            "avc.dec",
            MIMETYPE_VIDEO_AVC,
            [ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL51)],
        )]);

        for oracle in [&hevc_only, &avc_only] {
            assert_eq!(oracle.check(&HEVC_CHECK), oracle.supports_hevc());
            assert_eq!(
                oracle.check(&HEVC_MAIN10_CHECK),
                oracle.supports_hevc_main10()
            );
            assert_eq!(
                oracle.check(&AVC_HIGH10_CHECK),
                oracle.supports_avc_high10()
            );
        }
        assert!(!avc_only.check(&HEVC_CHECK));
        assert!(!hevc_only.check_decoder_for_type(MIMETYPE_VIDEO_AVC));
        assert!(hevc_only.check_decoder_for_type("VIDEO/HEVC"));
    }
}
