//! Export of extracted images as PNG files.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use dicom_extract::{ErrorKind, ExtractionResult, SourceMetadata};
use snafu::{Report, ResultExt, Whatever};
use tracing::{debug, error};

/// Outcome of exporting one batch.
#[derive(Debug, Default)]
pub struct Summary {
    /// number of images written
    pub written: usize,
    /// names of the entries which failed, by kind of failure
    pub failures: BTreeMap<ErrorKind, Vec<String>>,
}

impl Summary {
    pub fn merge(&mut self, other: Summary) {
        self.written += other.written;
        for (kind, names) in other.failures {
            self.failures.entry(kind).or_default().extend(names);
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.values().map(Vec::len).sum()
    }
}

/// The file name of an extracted image,
/// `{StudyDate}_{SOPInstanceUID}.png`,
/// with `_f{frame}` before the extension
/// for images of multi-frame files.
pub fn output_name(
    metadata: &SourceMetadata,
    entry_index: usize,
    frame: Option<u32>,
) -> String {
    let date = metadata
        .study_date
        .as_deref()
        .map(sanitize)
        .unwrap_or_else(|| "unknown_date".to_string());
    let uid = metadata
        .sop_instance_uid
        .as_deref()
        .map(sanitize)
        .unwrap_or_else(|| entry_index.to_string());
    match frame {
        Some(frame) => format!("{}_{}_f{}.png", date, uid, frame),
        None => format!("{}_{}.png", date, uid),
    }
}

/// Keep only the characters which are safe in a file name.
fn sanitize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Write every successful result of a batch into `out_dir`
/// and gather the failures.
///
/// `entry_names` are the names of the batch entries in input order.
pub fn write_results(
    out_dir: &Path,
    entry_names: &[&str],
    results: &[ExtractionResult],
) -> Result<Summary, Whatever> {
    std::fs::create_dir_all(out_dir)
        .with_whatever_context(|_| format!("Could not create {}", out_dir.display()))?;

    let index: HashMap<&str, usize> = entry_names
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect();
    let mut frames_per_entry: HashMap<&str, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.is_success()) {
        *frames_per_entry.entry(result.source_name()).or_default() += 1;
    }

    let mut summary = Summary::default();
    let mut taken = HashSet::new();
    for result in results {
        match result {
            ExtractionResult::Success {
                source_name,
                frame,
                metadata,
                image,
            } => {
                let multi_frame = frames_per_entry
                    .get(source_name.as_str())
                    .map(|&n| n > 1)
                    .unwrap_or(false);
                let entry_index = index.get(source_name.as_str()).copied().unwrap_or(0);
                let mut name = output_name(
                    metadata,
                    entry_index,
                    (multi_frame || *frame > 0).then_some(*frame),
                );
                let mut n = 1;
                while !taken.insert(name.clone()) {
                    name = format!("{}_{}.png", name.trim_end_matches(".png"), n);
                    n += 1;
                }

                let path = out_dir.join(&name);
                let saved: Result<(), Whatever> = image
                    .to_dynamic_image()
                    .whatever_context("Could not convert image")
                    .and_then(|img| {
                        img.save(&path)
                            .with_whatever_context(|_| format!("Could not write {}", path.display()))
                    });
                match saved {
                    Ok(()) => {
                        debug!("{} -> {}", source_name, path.display());
                        summary.written += 1;
                    }
                    Err(e) => {
                        error!("{}: {}", source_name, Report::from_error(e));
                        summary
                            .failures
                            .entry(ErrorKind::PixelDecodeFailed)
                            .or_default()
                            .push(source_name.clone());
                    }
                }
            }
            ExtractionResult::Failure {
                source_name, kind, ..
            } => {
                summary
                    .failures
                    .entry(*kind)
                    .or_default()
                    .push(source_name.clone());
            }
        }
    }
    Ok(summary)
}
