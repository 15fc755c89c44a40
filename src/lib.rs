// SPDX-License-Identifier: GPL-3.0-only

//! Decoder capability oracle
//!
//! Decides whether a codec registry snapshot can decode a given codec family,
//! profile and level, and derives the playback conditions used to choose
//! between direct play and transcoding.

pub mod app;
pub mod media;

pub use app::insights::{CapabilityReport, CheckState, CheckStatus};
pub use media::decoders::{
    CapabilityOracle, CodecDescriptor, CodecRegistry, CodecRole, LevelOrdering, ProfileLevel,
    RegistryError, RegistryView, SnapshotRegistry, UnsupportedMime,
};
pub use media::profile::DeviceClass;
