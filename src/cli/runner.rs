use std::fs;
use std::path::Path;

use clap::Parser;
use image::ImageFormat;
use serde_json::json;

use crate::editor::EditorSession;
use crate::mask;
use crate::model::EditHistory;
use crate::raster;
use crate::service::{RemoteClient, ServiceConfig, StaticCredentials};

use super::types::{Cli, Commands, DEFAULT_BRUSH, StrokeFile};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            strokes,
            output,
            hd,
            endpoint,
            auth_token,
            attestation_token,
        } => {
            let config = match endpoint {
                Some(endpoint) => ServiceConfig::new(endpoint),
                None => ServiceConfig::from_env().map_err(|error| error.to_string())?,
            };
            let credentials = StaticCredentials {
                pro: hd,
                id_token: auth_token,
                attestation_token,
            };
            let client = RemoteClient::new(config, Box::new(credentials));

            let mut session = EditorSession::new(Box::new(client), hd);
            let name = file_name(&input);
            let bytes = fs::read(&input).map_err(|error| error.to_string())?;
            session
                .set_original_file(&name, bytes.clone())
                .map_err(|error| error.to_string())?;
            session
                .set_file(&name, bytes)
                .map_err(|error| error.to_string())?;

            let recording = read_strokes(&strokes)?;
            let mut replayed = 0usize;
            let mut renders = 0usize;
            for line in &recording.strokes {
                let Some((first, rest)) = line.points.split_first() else {
                    continue;
                };
                let size = line.size.or(recording.brush_size).unwrap_or(DEFAULT_BRUSH);
                session
                    .begin_stroke(first.x, first.y, size)
                    .map_err(|error| error.to_string())?;
                for point in rest {
                    session
                        .extend_stroke(point.x, point.y)
                        .map_err(|error| error.to_string())?;
                }
                session.end_stroke().map_err(|error| error.to_string())?;
                replayed += 1;
                if !hd {
                    renders += 1;
                }
            }
            if hd && replayed > 0 {
                session.render().map_err(|error| error.to_string())?;
                renders = 1;
            }

            let rendered = session.export_bytes().map_err(|error| error.to_string())?;
            fs::write(&output, rendered).map_err(|error| error.to_string())?;
            println!(
                "{}",
                json!({"status": "ok", "output": output, "strokes": replayed, "renders": renders})
            );
        }
        Commands::Mask {
            input,
            strokes,
            output,
        } => {
            let bytes = fs::read(&input).map_err(|error| error.to_string())?;
            let image = raster::decode_image(&bytes).map_err(|error| error.to_string())?;
            let recording = read_strokes(&strokes)?;

            let mut history = EditHistory::new(true);
            for line in &recording.strokes {
                if line.points.is_empty() {
                    continue;
                }
                history.start_stroke(line.size.or(recording.brush_size).unwrap_or(DEFAULT_BRUSH));
                for point in &line.points {
                    history.push_point(*point);
                }
                history.add_line(true);
            }

            let stencil = mask::synthesize(&history, image.width(), image.height());
            let png =
                raster::encode_image(&stencil, ImageFormat::Png).map_err(|error| error.to_string())?;
            fs::write(&output, png).map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "output": output}));
        }
    }

    Ok(())
}

fn read_strokes(path: &Path) -> Result<StrokeFile, String> {
    let text = fs::read_to_string(path).map_err(|error| error.to_string())?;
    serde_json::from_str(&text).map_err(|error| error.to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string()
}
