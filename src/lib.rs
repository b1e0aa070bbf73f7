pub mod cli;
pub mod compose;
pub mod editor;
pub mod mask;
pub mod model;
pub mod raster;
pub mod service;
pub mod viewport;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
