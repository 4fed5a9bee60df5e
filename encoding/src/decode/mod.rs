//! This module contains all DICOM data element decoding logic.

use self::explicit::ExplicitVRDecoder;
use self::implicit_le::StandardImplicitVRLittleEndianDecoder;
use byteordered::Endianness;
use dicom_extract_core::header::{DataElementHeader, SequenceItemHeader, SequenceItemHeaderError};
use dicom_extract_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io::{self, Read};

pub mod basic;
pub mod explicit;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while decoding DICOM data.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader { source: SequenceItemHeaderError },
}

impl Error {
    /// Whether the error was caused by the source ending prematurely.
    pub fn is_eof(&self) -> bool {
        use Error::*;
        match self {
            ReadHeaderTag { source, .. }
            | ReadItemHeader { source, .. }
            | ReadItemLength { source, .. }
            | ReadTag { source, .. }
            | ReadReserved { source, .. }
            | ReadLength { source, .. }
            | ReadVr { source, .. } => source.kind() == io::ErrorKind::UnexpectedEof,
            BadSequenceHeader { .. } => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Obtain a data element decoder for reading the data elements in a DICOM
/// file's meta information. According to the standard, these are always
/// encoded in Explicit VR Little Endian.
pub fn file_header_decoder() -> ExplicitVRDecoder {
    ExplicitVRDecoder::little_endian()
}

/// Type trait for reading and decoding basic data values from a data source.
///
/// This trait provides methods for reading binary numbers
/// based on the source's endianness.
pub trait BasicDecode {
    /// Retrieve the source's endianness, as expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> io::Result<u16>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> io::Result<u32>
    where
        S: Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> io::Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

/// Type trait for reading and decoding DICOM data element headers.
///
/// The specific behaviour of decoding may depend on the transfer syntax.
pub trait Decode {
    /// Fetch and decode the next data element header from the given source.
    /// At the end of this operation, the source will be pointing at the
    /// element's value data, which should be read or skipped as necessary.
    ///
    /// Decoding an item or a delimiter is considered valid,
    /// in which case the value representation is `UN`.
    ///
    /// Returns the header and the exact number of bytes read from the source.
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read;

    /// Fetch and decode the next sequence item header from the given source.
    /// Item headers never carry a value representation.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read;
}

/// A data element decoder for any of the supported encodings,
/// resolved at run-time from a transfer syntax.
#[derive(Debug, Clone)]
pub enum ElementDecoder {
    /// Explicit VR, in either byte order.
    Explicit(ExplicitVRDecoder),
    /// Implicit VR Little Endian.
    Implicit(StandardImplicitVRLittleEndianDecoder),
}

impl ElementDecoder {
    /// The byte order of the encoding.
    pub fn endianness(&self) -> Endianness {
        match self {
            ElementDecoder::Explicit(d) => d.endianness(),
            ElementDecoder::Implicit(_) => Endianness::Little,
        }
    }
}

impl Decode for ElementDecoder {
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        match self {
            ElementDecoder::Explicit(d) => d.decode_header(source),
            ElementDecoder::Implicit(d) => d.decode_header(source),
        }
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        match self {
            ElementDecoder::Explicit(d) => d.decode_item_header(source),
            ElementDecoder::Implicit(d) => d.decode_item_header(source),
        }
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        match self {
            ElementDecoder::Explicit(d) => d.decode_tag(source),
            ElementDecoder::Implicit(d) => d.decode_tag(source),
        }
    }
}
