//! Generate command implementation
//!
//! Renders every tone of the selected cues into the output directory.

use anyhow::{Context, Result};
use beepgen_audio::generate_tone;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, GenerateOutput, GeneratedFile, JsonError};
use crate::cues::{Cue, CueManifest, DEFAULT_OUT_DIR};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions<'a> {
    /// Output directory (default: `assets/sounds`)
    pub out_dir: Option<&'a str>,
    /// JSON manifest replacing the built-in cues
    pub manifest: Option<&'a str>,
    /// Cue ids to render (empty: all)
    pub cues: &'a [String],
    /// Create the output directory if it is missing
    pub create_dirs: bool,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 on any manifest or write error
pub fn run(options: &GenerateOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let manifest = CueManifest::load_or_builtin(options.manifest)?;
    let cues = manifest.select(options.cues)?;
    let out_dir = options.out_dir.unwrap_or(DEFAULT_OUT_DIR);

    let mut files = Vec::new();
    render_cues(&manifest, &cues, out_dir, options.create_dirs, &mut files, |cue| {
        println!(
            "{}",
            format!("Generating {} sounds...", cue.label).cyan().bold()
        );
    })?;

    println!("{}", "Sound generation complete.".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let out_dir = options.out_dir.unwrap_or(DEFAULT_OUT_DIR);
    let mut output = GenerateOutput {
        success: false,
        out_dir: out_dir.to_string(),
        files: Vec::new(),
        errors: Vec::new(),
    };

    let selection = CueManifest::load_or_builtin(options.manifest).and_then(|manifest| {
        let cues: Vec<Cue> = manifest.select(options.cues)?.into_iter().cloned().collect();
        Ok((manifest, cues))
    });
    let (manifest, cues) = match selection {
        Ok(selection) => selection,
        Err(e) => {
            output
                .errors
                .push(JsonError::from_anyhow(&e, error_codes::INVALID_MANIFEST));
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let cue_refs: Vec<&Cue> = cues.iter().collect();
    let result = render_cues(
        &manifest,
        &cue_refs,
        out_dir,
        options.create_dirs,
        &mut output.files,
        |_| {},
    );

    let code = match result {
        Ok(()) => {
            output.success = true;
            ExitCode::SUCCESS
        }
        Err(e) => {
            output
                .errors
                .push(JsonError::from_anyhow(&e, error_codes::GENERATION_ERROR));
            ExitCode::from(1)
        }
    };

    print_json(&output)?;
    Ok(code)
}

/// Writes every tone of `cues` into `out_dir`, in order.
///
/// `on_cue` runs before each cue's first tone. Stops at the first failure;
/// `files` keeps the records of what was written before it.
pub fn render_cues(
    manifest: &CueManifest,
    cues: &[&Cue],
    out_dir: &str,
    create_dirs: bool,
    files: &mut Vec<GeneratedFile>,
    mut on_cue: impl FnMut(&Cue),
) -> Result<()> {
    let out_dir = Path::new(out_dir);
    if create_dirs {
        std::fs::create_dir_all(out_dir).with_context(|| {
            format!("Failed to create output directory: {}", out_dir.display())
        })?;
    }

    for cue in cues {
        on_cue(cue);
        for tone in &cue.tones {
            let path = out_dir.join(&tone.file);
            let spec = tone.tone_spec(manifest.sample_rate);
            let result = generate_tone(&path, &spec)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            files.push(GeneratedFile::new(Some(&cue.id), &spec, &result));
        }
    }

    Ok(())
}
