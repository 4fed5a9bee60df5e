//! Extraction over a batch of in-memory files.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, error};
#[cfg(feature = "rayon")]
use tracing::warn;

use crate::error::ErrorKind;
use crate::extract::{extract_frames, ExtractOptions, ExtractionResult};

/// Extract the images of every entry of a batch,
/// with the default options.
///
/// See [`extract_batch_with_options`].
pub fn extract_batch<N, B, F>(
    entries: &[(N, B)],
    cancel: &AtomicBool,
    progress: F,
) -> Vec<ExtractionResult>
where
    N: AsRef<str> + Sync,
    B: AsRef<[u8]> + Sync,
    F: Fn(usize, usize) + Sync,
{
    extract_batch_with_options(entries, &ExtractOptions::default(), cancel, progress)
}

/// Extract the images of every entry of a batch,
/// each entry being a pair of a source name and the file's bytes.
///
/// Entries are processed concurrently,
/// but the results are returned in entry order,
/// and in frame order within an entry.
/// A failing entry yields a single failure result
/// and does not affect the others,
/// not even when decoding it panics.
///
/// `progress` is called with the number of entries done so far
/// and the total number of entries,
/// once per finished entry.
/// Once `cancel` is set,
/// entries not yet started are skipped,
/// and only the results produced so far are returned.
pub fn extract_batch_with_options<N, B, F>(
    entries: &[(N, B)],
    options: &ExtractOptions,
    cancel: &AtomicBool,
    progress: F,
) -> Vec<ExtractionResult>
where
    N: AsRef<str> + Sync,
    B: AsRef<[u8]> + Sync,
    F: Fn(usize, usize) + Sync,
{
    let total = entries.len();
    let done = AtomicUsize::new(0);
    let slots: Vec<Mutex<Option<Vec<ExtractionResult>>>> =
        entries.iter().map(|_| Mutex::new(None)).collect();

    let run = |i: usize| {
        if cancel.load(Ordering::Relaxed) {
            return;
        }
        let (name, bytes) = &entries[i];
        let results = isolated(name.as_ref(), || {
            extract_frames(name.as_ref(), bytes.as_ref(), options)
        });
        if let Ok(mut slot) = slots[i].lock() {
            *slot = Some(results);
        }
        let count = done.fetch_add(1, Ordering::SeqCst) + 1;
        progress(count, total);
    };

    run_all(total, options.threads, run);

    if cancel.load(Ordering::Relaxed) {
        debug!(
            "Batch cancelled after {} of {} entries",
            done.load(Ordering::SeqCst),
            total
        );
    }

    slots
        .into_iter()
        .filter_map(|slot| slot.into_inner().ok().flatten())
        .flatten()
        .collect()
}

/// Run the extraction of one entry,
/// turning a panic into a failure of that entry.
fn isolated<F>(source_name: &str, extract: F) -> Vec<ExtractionResult>
where
    F: FnOnce() -> Vec<ExtractionResult>,
{
    catch_unwind(AssertUnwindSafe(extract)).unwrap_or_else(|payload| {
        let message = format!("Decoding panicked: {}", panic_message(&*payload));
        error!("{}: {}", source_name, message);
        vec![ExtractionResult::Failure {
            source_name: source_name.to_string(),
            kind: ErrorKind::PixelDecodeFailed,
            message,
        }]
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown cause"
    }
}

#[cfg(feature = "rayon")]
fn run_all(total: usize, threads: Option<usize>, run: impl Fn(usize) + Sync) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    match builder.build() {
        Ok(pool) => pool.install(|| (0..total).into_par_iter().for_each(&run)),
        Err(e) => {
            warn!("Could not create thread pool, extracting sequentially: {}", e);
            (0..total).for_each(run);
        }
    }
}

#[cfg(not(feature = "rayon"))]
fn run_all(total: usize, _threads: Option<usize>, run: impl Fn(usize) + Sync) {
    (0..total).for_each(run);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panicking_entry_becomes_a_decode_failure() {
        let results = isolated("bad.dcm", || panic!("codec state corrupted"));
        assert_eq!(results.len(), 1);
        match &results[0] {
            ExtractionResult::Failure {
                source_name,
                kind,
                message,
            } => {
                assert_eq!(source_name, "bad.dcm");
                assert_eq!(*kind, ErrorKind::PixelDecodeFailed);
                assert!(message.contains("codec state corrupted"));
            }
            other => panic!("unexpected result {:?}", other),
        }

        let frame = 7;
        let results = isolated("worse.dcm", || panic!("frame {} overflowed", frame));
        assert_eq!(results[0].error_kind(), Some(ErrorKind::PixelDecodeFailed));
        match &results[0] {
            ExtractionResult::Failure { message, .. } => {
                assert!(message.contains("frame 7 overflowed"))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn entries_which_do_not_panic_are_untouched() {
        let results = isolated("notes.txt", || {
            extract_frames(
                "notes.txt",
                b"these are not the bytes you are looking for",
                &ExtractOptions::new(),
            )
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].error_kind(), Some(ErrorKind::NotDicom));
    }
}
