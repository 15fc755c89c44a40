// SPDX-License-Identifier: GPL-3.0-only

//! Insights report for displaying diagnostic information about decoder
//! capabilities and the playback conditions derived from them.

pub mod types;
pub mod view;

pub use types::*;
pub use view::render_descriptors;
