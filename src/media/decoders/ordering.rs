// SPDX-License-Identifier: GPL-3.0-only

//! Per-family level ordering

use super::definitions::{H263_LEVEL10, H263_LEVEL45, MIMETYPE_VIDEO_H263};

/// How advertised levels relate to requested levels for a codec family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelOrdering {
    /// Support at level N implies support for every level <= N
    #[default]
    Monotonic,
    /// H.263: Level45 support only implies Level10, not the levels between
    H263,
}

impl LevelOrdering {
    /// Ordering strategy for a mime type
    pub fn for_mime(mime: &str) -> Self {
        if mime.eq_ignore_ascii_case(MIMETYPE_VIDEO_H263) {
            LevelOrdering::H263
        } else {
            LevelOrdering::Monotonic
        }
    }

    /// Whether an advertised level covers a requested level
    pub fn admits(self, supported: i32, requested: i32) -> bool {
        match self {
            LevelOrdering::Monotonic => supported >= requested,
            LevelOrdering::H263 => {
                let above_baseline = requested > H263_LEVEL10;
                if supported != requested && supported == H263_LEVEL45 && above_baseline {
                    return false;
                }
                supported >= requested
            }
        }
    }
}
