// Command-line front end: classify one image and print its per-category averages.

use clap::Parser;
use color_sort::core_modules::reporter::write_report;
use color_sort::{ColorSortError, ColorSortPipeline, ReportStyle};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    about = "Classify colors in an image and calculate average RGB values for each color category."
)]
struct Args {
    /// Path to the image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,
}

fn init_logging() {
    // Diagnostics go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let averages = match ColorSortPipeline::default().analyze_path(&args.image_path) {
        Ok(averages) => averages,
        Err(e @ ColorSortError::ImageOpen { .. }) => {
            println!("Error opening image: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &averages, ReportStyle::Plain) {
        error!("{}", ColorSortError::from(e));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
