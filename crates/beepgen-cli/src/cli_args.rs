//! CLI argument definitions for the beepgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// beepgen - Render UI beep cues to WAV files
///
/// Without a subcommand, writes the built-in order-confirmation and
/// payment-completion cues to assets/sounds/.
#[derive(Parser)]
#[command(name = "beepgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render every tone of the selected cues
    Generate {
        /// Output directory (default: assets/sounds)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// JSON cue manifest to use instead of the built-in cues
        #[arg(short, long)]
        manifest: Option<String>,

        /// Only render the given cue id (repeatable)
        #[arg(long = "cue")]
        cues: Vec<String>,

        /// Create the output directory if it does not exist
        #[arg(long)]
        create_dirs: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a single tone
    Tone {
        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in milliseconds
        #[arg(short, long)]
        duration_ms: f64,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = beepgen_audio::DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the cues of a manifest
    List {
        /// JSON cue manifest to list instead of the built-in cues
        #[arg(short, long)]
        manifest: Option<String>,

        /// Print the manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the format, length, peak and PCM hash of a WAV file
    Inspect {
        /// WAV file to inspect
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
