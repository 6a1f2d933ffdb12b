//! beepgen CLI library.
//!
//! Holds the cue manifests and the command implementations behind the
//! `beepgen` binary.

pub mod commands;
pub mod cues;
