// SPDX-License-Identifier: GPL-3.0-only

// Capability matching scenarios against in-memory snapshots.

use decode_caps::media::decoders::*;

fn decoder(mime: &str, pairs: &[(i32, i32)]) -> CodecDescriptor {
    CodecDescriptor::decoder(
        format!("{mime}.decoder"),
        mime,
        pairs.iter().map(|&(p, l)| ProfileLevel::new(p, l)),
    )
}

fn oracle_for(descriptors: Vec<CodecDescriptor>) -> CapabilityOracle {
    CapabilityOracle::new(&SnapshotRegistry::from_descriptors(descriptors))
}

#[test]
fn hevc_main10_level5_supported_but_not_level6() {
    let pairs = [(HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL5)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_HEVC, &pairs)]);
    let query = |level| {
        let role = CodecRole::Decoder;
        oracle.query(MIMETYPE_VIDEO_HEVC, role, HEVC_PROFILE_MAIN10, level)
    };

    assert!(query(HEVC_MAIN_TIER_LEVEL5));
    assert!(!query(HEVC_MAIN_TIER_LEVEL6));
    assert!(oracle.supports_hevc_main10());
}

#[test]
fn empty_registry_supports_nothing() {
    let oracle = oracle_for(Vec::new());
    let query = |role| oracle.query(MIMETYPE_VIDEO_AVC, role, AVC_PROFILE_HIGH10, AVC_LEVEL4);

    assert!(oracle.descriptors().is_empty());
    assert!(!query(CodecRole::Decoder));
    assert!(!query(CodecRole::Encoder));
}

#[test]
fn h263_level45_implies_only_level10() {
    let pairs = [(H263_PROFILE_BASELINE, H263_LEVEL45)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_H263, &pairs)]);
    let query = |level| oracle.has_decoder(MIMETYPE_VIDEO_H263, H263_PROFILE_BASELINE, level);

    assert!(query(H263_LEVEL10));
    assert!(!query(H263_LEVEL20));
    assert!(query(H263_LEVEL45));
}

#[test]
fn h263_rule_applies_to_uppercase_mime() {
    let pairs = [(H263_PROFILE_BASELINE, H263_LEVEL45)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_H263, &pairs)]);
    let query = |level| oracle.has_decoder("VIDEO/3GPP", H263_PROFILE_BASELINE, level);

    assert!(!query(H263_LEVEL30));
    assert!(query(H263_LEVEL10));
}

#[test]
fn h263_higher_descriptor_still_covers_intermediate_levels() {
    let high = [(H263_PROFILE_BASELINE, H263_LEVEL45)];
    let mid = [(H263_PROFILE_BASELINE, H263_LEVEL40)];
    let oracle = oracle_for(vec![
        decoder(MIMETYPE_VIDEO_H263, &high),
        decoder(MIMETYPE_VIDEO_H263, &mid),
    ]);
    assert!(oracle.has_decoder(MIMETYPE_VIDEO_H263, H263_PROFILE_BASELINE, H263_LEVEL30));
}

#[test]
fn encoder_does_not_answer_decoder_query() {
    let oracle = oracle_for(vec![CodecDescriptor::encoder(
        "avc.encoder",
        MIMETYPE_VIDEO_AVC,
        [ProfileLevel::new(AVC_PROFILE_HIGH10, AVC_LEVEL4)],
    )]);
    let query = |role| oracle.query(MIMETYPE_VIDEO_AVC, role, AVC_PROFILE_HIGH10, AVC_LEVEL4);

    assert!(!query(CodecRole::Decoder));
    assert!(query(CodecRole::Encoder));
    assert!(!oracle.supports_avc_high10());
}

#[test]
fn decoder_does_not_answer_encoder_query() {
    let pairs = [(AVC_PROFILE_HIGH10, AVC_LEVEL4)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_AVC, &pairs)]);
    let query = |role| oracle.query(MIMETYPE_VIDEO_AVC, role, AVC_PROFILE_HIGH10, AVC_LEVEL4);

    assert!(query(CodecRole::Decoder));
    assert!(!query(CodecRole::Encoder));
}

#[test]
fn profile_mismatch_never_matches() {
    let pairs = [(AVC_PROFILE_HIGH, AVC_LEVEL52)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_AVC, &pairs)]);
    for level in [AVC_LEVEL1, AVC_LEVEL31, AVC_LEVEL52] {
        assert!(!oracle.has_decoder(MIMETYPE_VIDEO_AVC, AVC_PROFILE_HIGH10, level));
    }
}

#[test]
fn monotonic_family_covers_every_lower_level() {
    let pairs = [(AVC_PROFILE_HIGH, AVC_LEVEL41)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_AVC, &pairs)]);
    let query = |level| oracle.has_decoder(MIMETYPE_VIDEO_AVC, AVC_PROFILE_HIGH, level);
    let levels = [
        AVC_LEVEL1, AVC_LEVEL1B, AVC_LEVEL11, AVC_LEVEL12, AVC_LEVEL13, AVC_LEVEL2, AVC_LEVEL21,
        AVC_LEVEL22, AVC_LEVEL3, AVC_LEVEL31, AVC_LEVEL32, AVC_LEVEL4, AVC_LEVEL41,
    ];
    for level in levels {
        assert!(query(level), "level {level:#x}");
    }
    assert!(!query(AVC_LEVEL42));
}

#[test]
fn repeated_queries_agree() {
    let avc = [(AVC_PROFILE_HIGH10, AVC_LEVEL4)];
    let hevc = [(HEVC_PROFILE_MAIN, HEVC_MAIN_TIER_LEVEL41)];
    let oracle = oracle_for(vec![
        decoder(MIMETYPE_VIDEO_AVC, &avc),
        decoder(MIMETYPE_VIDEO_HEVC, &hevc),
    ]);
    let snapshot = || {
        let hevc = oracle.supports_hevc();
        let hevc_main10 = oracle.supports_hevc_main10();
        let avc_high10 = oracle.supports_avc_high10();
        (hevc, hevc_main10, avc_high10)
    };

    let first = snapshot();
    for _ in 0..3 {
        assert_eq!(first, snapshot());
    }
    assert_eq!(first, (true, false, true));
}

#[test]
fn oracle_is_shareable_across_threads() {
    let pairs = [(HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL51)];
    let oracle = oracle_for(vec![decoder(MIMETYPE_VIDEO_HEVC, &pairs)]);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| oracle.supports_hevc_main10()))
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    });
}
