//! A CLI tool for extracting the images of DICOM files,
//! directories and ZIP archives into PNG files.
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use clap::Parser;
use dicom_extract::{extract_batch_with_options, ExtractOptions, FrameSelection, WindowLevel};
use snafu::{Report, ResultExt, Whatever};
use tracing::{error, info, warn, Level};

mod export;
mod input;

use export::Summary;

/// Extract the images of DICOM files into PNG files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// ZIP archives, DICOM files or directories to extract images from
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    /// (default is `DICOM_Extracted` in the home directory)
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Only extract the first frame of multi-frame files
    #[arg(long = "first-frame")]
    first_frame: bool,

    /// Window center to apply to grayscale images
    #[arg(long = "window-center", requires = "window_width", allow_hyphen_values = true)]
    window_center: Option<f64>,

    /// Window width to apply to grayscale images
    #[arg(long = "window-width", requires = "window_center")]
    window_width: Option<f64>,

    /// Number of worker threads (default is one per core)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Print more information about each file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        inputs,
        output,
        first_frame,
        window_center,
        window_width,
        jobs,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let output = output.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("DICOM_Extracted")
    });

    let mut options = ExtractOptions::new();
    if first_frame {
        options = options.frames(FrameSelection::First);
    }
    if let (Some(center), Some(width)) = (window_center, window_width) {
        if width <= 0. {
            warn!("Ignoring window of non-positive width {}", width);
        } else {
            options = options.window(WindowLevel { center, width });
        }
    }
    if let Some(jobs) = jobs {
        options = options.threads(jobs);
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut summary = Summary::default();
    let mut input_errors = 0;
    for path in &inputs {
        if let Err(e) = run_input(path, &output, &timestamp, &options, &mut summary) {
            error!("{}", Report::from_error(e));
            input_errors += 1;
        }
    }

    info!(
        "{} image(s) written to {}, {} file(s) failed",
        summary.written,
        output.display(),
        summary.failed()
    );
    for (kind, names) in &summary.failures {
        info!("{}: {} file(s)", kind, names.len());
        for name in names {
            info!("    {}", name);
        }
    }

    if input_errors > 0 {
        std::process::exit(-1);
    }
}

fn run_input(
    path: &Path,
    output: &Path,
    timestamp: &str,
    options: &ExtractOptions,
    summary: &mut Summary,
) -> Result<(), Whatever> {
    let batch = input::read_input(path)?;
    info!(
        "Extracting {} file(s) from {}",
        batch.entries.len(),
        path.display()
    );

    let cancel = AtomicBool::new(false);
    let results = extract_batch_with_options(&batch.entries, options, &cancel, |done, total| {
        info!("[{}/{}] {}", done, total, path.display());
    });

    let out_dir = output.join(format!("{}_{}", batch.name, timestamp));
    let entry_names: Vec<&str> = batch.entries.iter().map(|(name, _)| name.as_str()).collect();
    let batch_summary = export::write_results(&out_dir, &entry_names, &results)?;
    info!(
        "{}: {} image(s) written to {}",
        path.display(),
        batch_summary.written,
        out_dir.display()
    );
    summary.merge(batch_summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
