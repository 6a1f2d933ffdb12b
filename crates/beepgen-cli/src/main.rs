//! beepgen CLI - renders placeholder UI sound effects
//!
//! Running `beepgen` with no arguments writes the five built-in beeps to
//! `assets/sounds/`.

use beepgen_audio::ToneSpec;
use clap::Parser;
use std::process::ExitCode;

use beepgen_cli::commands;
use beepgen_cli::commands::generate::GenerateOptions;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::generate::run(&GenerateOptions::default(), false),
        Some(Commands::Generate {
            out_dir,
            manifest,
            cues,
            create_dirs,
            json,
        }) => commands::generate::run(
            &GenerateOptions {
                out_dir: out_dir.as_deref(),
                manifest: manifest.as_deref(),
                cues: &cues,
                create_dirs,
            },
            json,
        ),
        Some(Commands::Tone {
            output,
            frequency,
            duration_ms,
            sample_rate,
            json,
        }) => commands::tone::run(
            &output,
            &ToneSpec::new(frequency, duration_ms).with_sample_rate(sample_rate),
            json,
        ),
        Some(Commands::List { manifest, json }) => commands::list::run(manifest.as_deref(), json),
        Some(Commands::Inspect { input, json }) => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
