// SPDX-License-Identifier: GPL-3.0-only

//! Decoder capability queries
//!
//! This module answers whether the codecs advertised by a registry snapshot
//! can decode a given codec family, profile and level. It is used to decide
//! between direct play and transcoding.

mod definitions;
mod descriptor;
mod oracle;
mod ordering;
mod registry;

pub use definitions::*;
pub use descriptor::{CodecDescriptor, CodecRole, ProfileLevel, UnsupportedMime};
pub use oracle::CapabilityOracle;
pub use ordering::LevelOrdering;
pub use registry::{CodecRegistry, RegistryEntry, RegistryError, RegistryView, SnapshotRegistry};
