// SPDX-License-Identifier: GPL-3.0-only

//! Text view of the Insights report

use std::fmt::{self, Write};

use super::types::{CapabilityReport, CheckState};
use crate::media::decoders::CodecDescriptor;
use crate::media::profile::ProfileCondition;

impl CapabilityReport {
    /// Render the report as aligned plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = self.write_sections(&mut out);
        out
    }

    fn write_sections(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "Decoders ({} regular codecs)", self.codec_count)?;
        for check in &self.checks {
            let marker = match check.state {
                CheckState::Supported => "+",
                CheckState::Unsupported => "-",
            };
            let name = check.name;
            let description = check.description;
            let state = check.state.label();
            writeln!(out, "  {marker} {name:<12} {description:<34} {state}")?;
        }

        writeln!(out)?;
        writeln!(out, "HEVC profile")?;
        write_conditions(out, &self.hevc_profile.conditions)?;

        writeln!(out)?;
        writeln!(out, "H.264 ({:?})", self.device)?;
        write_conditions(out, &self.h264_conditions)?;

        if let Some(audio) = &self.audio_profile {
            writeln!(out)?;
            writeln!(out, "Audio")?;
            write_conditions(out, &audio.conditions)?;
        }
        Ok(())
    }
}

fn write_conditions(out: &mut String, conditions: &[ProfileCondition]) -> fmt::Result {
    for condition in conditions {
        writeln!(out, "  {condition}")?;
    }
    Ok(())
}

/// Render descriptors one per line, with their profile/level pairs in hex
pub fn render_descriptors(descriptors: &[CodecDescriptor]) -> String {
    let mut out = String::new();
    for desc in descriptors {
        let pairs: Vec<String> = desc
            .profile_levels
            .iter()
            .map(|pl| format!("{:#x}@{:#x}", pl.profile, pl.level))
            .collect();
        let name = &desc.name;
        let role = desc.role;
        let mime = &desc.mime;
        let pairs = pairs.join(" ");
        let _ = writeln!(out, "{name:<36} {role:<8} {mime:<20} {pairs}");
    }
    out
}
