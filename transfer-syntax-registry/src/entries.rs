//! A list of compiled transfer syntax specifiers.
//!
//! The constants exported here refer to the library's built-in support
//! for DICOM transfer syntaxes.
//!
//! - **Fully implemented** means that the data set can be read
//!   and the pixel data decoded, if encapsulated.
//! - **Stub descriptors** serve to provide information about
//!   the transfer syntax.
//!   The data set can be read,
//!   but the pixel data cannot be decoded
//!   because the codec is disabled or not available.

use byteordered::Endianness;
use dicom_extract_encoding::transfer_syntax::{Codec, PixelCodec, TransferSyntax as Ts};
use dicom_extract_encoding::PixelDataReader;

#[cfg(feature = "jpeg")]
use crate::adapters::jpeg::JpegAdapter;
#[cfg(any(feature = "openjp2", feature = "openjpeg-sys"))]
use crate::adapters::jpeg2k::Jpeg2000Adapter;
#[cfg(feature = "rle")]
use crate::adapters::rle_lossless::RleLosslessAdapter;

// -- the three base transfer syntaxes, fully supported --

/// **Fully implemented:** Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Codec::None,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

/// Deflated Explicit VR Little Endian.
///
/// **Fully implemented** with the `deflate` feature,
/// otherwise the data set cannot be read.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    Codec::Deflated,
);

// -- encapsulated pixel data --

/// create a TS for encapsulated pixel data
const fn create_ts(
    uid: &'static str,
    name: &'static str,
    codec: PixelCodec,
    reader: Option<&'static dyn PixelDataReader>,
) -> Ts {
    Ts::new_ele(uid, name, Codec::EncapsulatedPixelData(codec, reader))
}

#[cfg(feature = "rle")]
const RLE_READER: Option<&'static dyn PixelDataReader> = Some(&RleLosslessAdapter);
#[cfg(not(feature = "rle"))]
const RLE_READER: Option<&'static dyn PixelDataReader> = None;

#[cfg(feature = "jpeg")]
const JPEG_READER: Option<&'static dyn PixelDataReader> = Some(&JpegAdapter);
#[cfg(not(feature = "jpeg"))]
const JPEG_READER: Option<&'static dyn PixelDataReader> = None;

#[cfg(any(feature = "openjp2", feature = "openjpeg-sys"))]
const JPEG2000_READER: Option<&'static dyn PixelDataReader> = Some(&Jpeg2000Adapter);
#[cfg(not(any(feature = "openjp2", feature = "openjpeg-sys")))]
const JPEG2000_READER: Option<&'static dyn PixelDataReader> = None;

/// **Fully implemented:** RLE Lossless
pub const RLE_LOSSLESS: Ts = create_ts(
    "1.2.840.10008.1.2.5",
    "RLE Lossless",
    PixelCodec::RleLossless,
    RLE_READER,
);

/// **Fully implemented:** JPEG Baseline (Process 1)
pub const JPEG_BASELINE: Ts = create_ts(
    "1.2.840.10008.1.2.4.50",
    "JPEG Baseline (Process 1)",
    PixelCodec::JpegBaseline,
    JPEG_READER,
);

/// **Fully implemented:** JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: Ts = create_ts(
    "1.2.840.10008.1.2.4.51",
    "JPEG Extended (Process 2 & 4)",
    PixelCodec::JpegBaseline,
    JPEG_READER,
);

/// **Fully implemented:** JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = create_ts(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    PixelCodec::JpegLossless,
    JPEG_READER,
);

/// **Fully implemented:** JPEG Lossless, Non-Hierarchical, First-Order Prediction
/// (Process 14 [Selection Value 1])
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = create_ts(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    PixelCodec::JpegLossless,
    JPEG_READER,
);

/// **Stub descriptor:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: Ts = create_ts(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
    PixelCodec::JpegLs,
    None,
);

/// **Stub descriptor:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: Ts = create_ts(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    PixelCodec::JpegLs,
    None,
);

/// JPEG 2000 Image Compression (Lossless Only).
///
/// **Fully implemented** with `openjp2` or `openjpeg-sys`,
/// a stub descriptor otherwise.
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = create_ts(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
    PixelCodec::Jpeg2000,
    JPEG2000_READER,
);

/// JPEG 2000 Image Compression.
///
/// **Fully implemented** with `openjp2` or `openjpeg-sys`,
/// a stub descriptor otherwise.
pub const JPEG_2000_IMAGE_COMPRESSION: Ts = create_ts(
    "1.2.840.10008.1.2.4.91",
    "JPEG 2000 Image Compression",
    PixelCodec::Jpeg2000,
    JPEG2000_READER,
);
