//! Classification of file-level failures.

use dicom_extract_object::{meta, ReadError};
use dicom_extract_pixeldata::Error as PixelDataError;
use snafu::Snafu;

/// The kind of failure reported for a single input file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// The input has no `DICM` magic code after the preamble.
    NotDicom,
    /// The data ended before a declared value did,
    /// or its structure is otherwise malformed.
    Truncated,
    /// The transfer syntax UID is not in the registry.
    UnsupportedTransferSyntax,
    /// The pixel data codec has no decoder available.
    UnsupportedCodec,
    /// The image pixel attributes are missing, invalid
    /// or do not match the pixel data.
    InconsistentPixelDescriptor,
    /// A frame could not be decoded.
    PixelDecodeFailed,
    /// The file is well formed but holds no pixel data.
    MissingPixelData,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotDicom => "NotDicom",
            ErrorKind::Truncated => "Truncated",
            ErrorKind::UnsupportedTransferSyntax => "UnsupportedTransferSyntax",
            ErrorKind::UnsupportedCodec => "UnsupportedCodec",
            ErrorKind::InconsistentPixelDescriptor => "InconsistentPixelDescriptor",
            ErrorKind::PixelDecodeFailed => "PixelDecodeFailed",
            ErrorKind::MissingPixelData => "MissingPixelData",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error which may occur when extracting images from one file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExtractError {
    #[snafu(display("Could not read DICOM object"))]
    ReadObject {
        #[snafu(backtrace)]
        source: ReadError,
    },
    #[snafu(display("Could not decode pixel data"))]
    DecodePixelData {
        #[snafu(backtrace)]
        source: PixelDataError,
    },
}

impl ExtractError {
    /// Classify the error for reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::ReadObject { source } => read_error_kind(source),
            ExtractError::DecodePixelData { source } => pixel_data_error_kind(source),
        }
    }
}

fn read_error_kind(e: &ReadError) -> ErrorKind {
    match e {
        ReadError::ParseMetaDataSet {
            source: meta::Error::NotDicom { .. },
        } => ErrorKind::NotDicom,
        ReadError::ReadUnsupportedTransferSyntax { .. } => ErrorKind::UnsupportedTransferSyntax,
        // parse failures of the meta group or the body,
        // including excessive nesting and corrupt deflated streams
        _ => ErrorKind::Truncated,
    }
}

fn pixel_data_error_kind(e: &PixelDataError) -> ErrorKind {
    match e {
        PixelDataError::InvalidAttribute { .. }
        | PixelDataError::PixelDataTooShort { .. }
        | PixelDataError::FrameOutOfRange { .. } => ErrorKind::InconsistentPixelDescriptor,
        PixelDataError::MissingPixelData { .. } => ErrorKind::MissingPixelData,
        PixelDataError::UnsupportedCodec { .. } => ErrorKind::UnsupportedCodec,
        _ => ErrorKind::PixelDecodeFailed,
    }
}
