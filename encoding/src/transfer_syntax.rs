//! Module containing the DICOM transfer syntax data structure.
//!
//! A [`TransferSyntax`] describes how the data set after the file meta group
//! is encoded (value representation, byte order, deflate)
//! and how the pixel data is compressed.
//! Specific transfer syntaxes are declared
//! in the `dicom-extract-transfer-syntax-registry` crate.

use crate::adapters::PixelDataReader;
use crate::decode::explicit::ExplicitVRDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::ElementDecoder;
use crate::encode::ElementEncoder;
use std::fmt;

pub use byteordered::Endianness;

/// The kind of pixel data compression of a transfer syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelCodec {
    /// Native (uncompressed) pixel data.
    Uncompressed,
    /// RLE Lossless
    RleLossless,
    /// JPEG Baseline (Process 1) and Extended (Process 2 & 4)
    JpegBaseline,
    /// JPEG Lossless (Process 14)
    JpegLossless,
    /// JPEG 2000, lossless or lossy
    Jpeg2000,
    /// JPEG-LS, lossless or near-lossless
    JpegLs,
}

impl PixelCodec {
    /// Whether pixel data in this codec is encapsulated in fragments.
    pub fn is_encapsulated(self) -> bool {
        self != PixelCodec::Uncompressed
    }
}

impl fmt::Display for PixelCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelCodec::Uncompressed => "uncompressed",
            PixelCodec::RleLossless => "RLE Lossless",
            PixelCodec::JpegBaseline => "JPEG Baseline",
            PixelCodec::JpegLossless => "JPEG Lossless",
            PixelCodec::Jpeg2000 => "JPEG 2000",
            PixelCodec::JpegLs => "JPEG-LS",
        };
        f.write_str(name)
    }
}

/// A description and possible implementation regarding
/// the decoding requirements of a transfer syntax.
#[derive(Clone, Copy)]
pub enum Codec {
    /// No codec is required: native pixel data.
    None,
    /// The data set is deflated; pixel data is native.
    Deflated,
    /// Pixel data is encapsulated in the given codec,
    /// along with the adapter able to decode it, if available.
    EncapsulatedPixelData(PixelCodec, Option<&'static dyn PixelDataReader>),
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::None => f.write_str("None"),
            Codec::Deflated => f.write_str("Deflated"),
            Codec::EncapsulatedPixelData(kind, reader) => f
                .debug_tuple("EncapsulatedPixelData")
                .field(kind)
                .field(&if reader.is_some() { "supported" } else { "unsupported" })
                .finish(),
        }
    }
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, Copy)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements and implemented capabilities.
    codec: Codec,
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Create a new descriptor
    /// for a transfer syntax in explicit VR little endian.
    pub const fn new_ele(uid: &'static str, name: &'static str, codec: Codec) -> Self {
        Self::new(uid, name, Endianness::Little, true, codec)
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether multi-byte values are encoded in little endian.
    pub fn little_endian(&self) -> bool {
        self.byte_order == Endianness::Little
    }

    /// Whether value representations are explicit in the encoding.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain the transfer syntax' codec description.
    pub const fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Whether the data set after the file meta group is deflated.
    pub fn is_deflated(&self) -> bool {
        matches!(self.codec, Codec::Deflated)
    }

    /// The compression kind of the pixel data.
    pub fn pixel_codec(&self) -> PixelCodec {
        match self.codec {
            Codec::None | Codec::Deflated => PixelCodec::Uncompressed,
            Codec::EncapsulatedPixelData(kind, _) => kind,
        }
    }

    /// Retrieve the pixel data decoder of this transfer syntax,
    /// if its pixel data is encapsulated and the codec is supported.
    pub fn pixel_reader(&self) -> Option<&'static dyn PixelDataReader> {
        match self.codec {
            Codec::EncapsulatedPixelData(_, reader) => reader,
            _ => None,
        }
    }

    /// Obtain a data element decoder for this transfer syntax.
    ///
    /// Implicit VR is always read in little endian,
    /// the only byte order standardized for it.
    pub fn decoder(&self) -> ElementDecoder {
        if self.explicit_vr {
            ElementDecoder::Explicit(ExplicitVRDecoder::new(self.byte_order))
        } else {
            ElementDecoder::Implicit(ImplicitVRLittleEndianDecoder::default())
        }
    }

    /// Obtain a data element encoder for this transfer syntax.
    pub fn encoder(&self) -> ElementEncoder {
        ElementEncoder::new(self.explicit_vr, self.byte_order)
    }
}

impl PartialEq for TransferSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for TransferSyntax {}
