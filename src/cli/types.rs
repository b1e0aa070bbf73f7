use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::model::Line;

/// Brush diameter used when the stroke file does not carry one.
pub(super) const DEFAULT_BRUSH: f32 = 40.0;

#[derive(Debug, Parser)]
#[command(
    name = "inpaint",
    version,
    about = "Remote-inpainting photo cleanup CLI"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Replays a recorded stroke file against an image and writes the
    /// cleaned result.
    Clean {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        strokes: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// High fidelity: accumulate all strokes into one batch and render
        /// once, compositing at full resolution.
        #[arg(long)]
        hd: bool,
        /// Overrides the INPAINT_ENDPOINT environment variable.
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        auth_token: Option<String>,
        #[arg(long)]
        attestation_token: Option<String>,
    },
    /// Writes the stencil mask a stroke file would produce, without calling
    /// the service.
    Mask {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        strokes: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

/// On-disk stroke recording. Coordinates are image-space pixels.
#[derive(Debug, Deserialize)]
pub(super) struct StrokeFile {
    #[serde(default)]
    pub(super) brush_size: Option<f32>,
    pub(super) strokes: Vec<Line>,
}
