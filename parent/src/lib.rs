//! # DICOM extraction library
//!
//! This crate turns DICOM files,
//! given as in-memory bytes,
//! into 8-bit display images ready to be written out
//! as grayscale or RGB pictures.
//!
//! It aggregates the crates of the workspace,
//! which are also available independently:
//!
//! - [`core`] holds the data set model:
//!   tags, value representations and decoded values.
//! - [`dictionary_std`] provides constants for known tags
//!   in the [`tags`][dictionary_std::tags] module.
//! - [`parser`] reads data set bodies
//!   in every supported transfer syntax.
//! - [`object`] reads whole DICOM files,
//!   from the preamble to the last data element.
//! - [`transfer_syntax`] is the registry of known transfer syntaxes.
//! - [`pixeldata`] decodes pixel data into native samples
//!   and normalizes them for display.
//!
//! ## Extracting images
//!
//! [`extract`] decodes the first frame of a single file,
//! while [`extract_frames`] yields one result per frame.
//! Failures never panic:
//! they are reported as [`ExtractionResult::Failure`]
//! with an [`ErrorKind`] and a readable message.
//!
//! ```no_run
//! use dicom_extract::{extract, ExtractionResult};
//!
//! # fn run(bytes: &[u8]) {
//! match extract("image.dcm", bytes) {
//!     ExtractionResult::Success { image, .. } => {
//!         println!("{}x{}", image.width, image.height);
//!     }
//!     ExtractionResult::Failure { kind, message, .. } => {
//!         eprintln!("{}: {}", kind, message);
//!     }
//! }
//! # }
//! ```
//!
//! ## Batches
//!
//! [`extract_batch`] processes many files concurrently
//! (with the `rayon` feature, enabled by default),
//! keeping results in input order
//! and supporting cancellation and progress reporting.
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use dicom_extract::extract_batch;
//!
//! # fn run(entries: Vec<(String, Vec<u8>)>) {
//! let cancel = AtomicBool::new(false);
//! let results = extract_batch(&entries, &cancel, |done, total| {
//!     println!("{}/{}", done, total);
//! });
//! println!("{} images", results.iter().filter(|r| r.is_success()).count());
//! # }
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications)]

pub use dicom_extract_core as core;
pub use dicom_extract_dictionary_std as dictionary_std;
pub use dicom_extract_encoding as encoding;
pub use dicom_extract_object as object;
pub use dicom_extract_parser as parser;
pub use dicom_extract_pixeldata as pixeldata;
pub use dicom_extract_transfer_syntax_registry as transfer_syntax;

mod batch;
mod error;
mod extract;

pub use batch::{extract_batch, extract_batch_with_options};
pub use error::{ErrorKind, ExtractError};
pub use extract::{
    extract, extract_frames, ExtractOptions, ExtractionResult, FrameSelection, SourceMetadata,
};
pub use pixeldata::{DisplayImage, WindowLevel};
