//! This crate contains the reading of whole DICOM files
//! which are already buffered in memory.
//!
//! A DICOM file is made of a 128-byte preamble,
//! the `DICM` magic code,
//! the file meta group (always in explicit VR little endian)
//! and the main data set,
//! encoded in the transfer syntax declared by the meta group.
//!
//! ```no_run
//! use dicom_extract_dictionary_std::tags;
//! use dicom_extract_object::FileDicomObject;
//! # fn foo(bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
//! let obj = FileDicomObject::from_bytes(bytes)?;
//! let modality = obj.dataset().string(tags::MODALITY)?;
//! println!("{} in {}", modality.as_deref().unwrap_or("?"), obj.transfer_syntax().name());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod meta;

pub use crate::meta::FileMetaTable;
pub use dicom_extract_core::{DataSet, Tag};

use dicom_extract_encoding::TransferSyntax;
use dicom_extract_parser::DataSetReader;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use tracing::{debug, warn};

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not inflate deflated data set"))]
    InflateDataSet {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: dicom_extract_parser::Error,
    },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A root DICOM object retrieved from a file,
/// containing the file meta group
/// and the main data set.
///
/// The object is immutable once read.
#[derive(Debug, Clone)]
pub struct FileDicomObject {
    meta: FileMetaTable,
    transfer_syntax: &'static TransferSyntax,
    dataset: DataSet,
}

impl FileDicomObject {
    /// Read a DICOM object from the full contents of a file,
    /// starting with the 128-byte preamble.
    ///
    /// A file meta group without a transfer syntax
    /// is read as Implicit VR Little Endian.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (meta, start) = FileMetaTable::from_file_bytes(bytes).context(ParseMetaDataSetSnafu)?;

        let transfer_syntax = match meta.transfer_syntax() {
            Some(uid) => dicom_extract_transfer_syntax_registry::get(uid)
                .context(ReadUnsupportedTransferSyntaxSnafu { uid })?,
            None => {
                warn!("File meta group declares no transfer syntax, assuming Implicit VR Little Endian");
                dicom_extract_transfer_syntax_registry::default()
            }
        };
        debug!("Reading data set in {}", transfer_syntax.name());

        let body = &bytes[start..];
        let body = if transfer_syntax.is_deflated() {
            Cow::Owned(inflate(transfer_syntax, body)?)
        } else {
            Cow::Borrowed(body)
        };

        let dataset = DataSetReader::new(&body, transfer_syntax)
            .read_data_set()
            .context(ReadDataSetSnafu)?;

        Ok(FileDicomObject {
            meta,
            transfer_syntax,
            dataset,
        })
    }

    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve the transfer syntax in which the data set was encoded.
    pub fn transfer_syntax(&self) -> &'static TransferSyntax {
        self.transfer_syntax
    }

    /// Retrieve the main data set.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Retrieve the main data set, discarding the meta group.
    pub fn into_dataset(self) -> DataSet {
        self.dataset
    }
}

#[cfg(feature = "deflate")]
fn inflate(_ts: &TransferSyntax, body: &[u8]) -> Result<Vec<u8>> {
    dicom_extract_transfer_syntax_registry::deflate::inflate(body).context(InflateDataSetSnafu)
}

#[cfg(not(feature = "deflate"))]
fn inflate(ts: &TransferSyntax, _body: &[u8]) -> Result<Vec<u8>> {
    ReadUnsupportedTransferSyntaxSnafu { uid: ts.uid() }.fail()
}
