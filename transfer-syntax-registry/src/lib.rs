//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax
//! into the respective transfer syntax specifier,
//! which tells how to read the data set
//! and which pixel data decoder to use, if any.
//!
//! ```
//! use dicom_extract_encoding::PixelCodec;
//!
//! let ts = dicom_extract_transfer_syntax_registry::get("1.2.840.10008.1.2.5\0")
//!     .expect("RLE Lossless should be registered");
//! assert_eq!(ts.pixel_codec(), PixelCodec::RleLossless);
//! ```
#![deny(unsafe_code)]

pub mod adapters;
#[cfg(feature = "deflate")]
pub mod deflate;
pub mod entries;

use dicom_extract_encoding::TransferSyntax;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a transfer syntax specifier by its UID.
    ///
    /// Trailing null or space padding in `uid` is ignored.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let uid = uid.as_ref().trim_end_matches(|c| c == '\0' || c == ' ');
        self.m.get(uid)
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    fn register(&mut self, ts: TransferSyntax) {
        self.m.insert(ts.uid(), ts);
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = {
        let mut registry = TransferSyntaxRegistry { m: HashMap::new() };
        initialize_codecs(&mut registry);
        registry
    };
}

/// Retrieve the default transfer syntax,
/// assumed when a file does not declare one.
pub fn default() -> &'static TransferSyntax {
    get(entries::IMPLICIT_VR_LITTLE_ENDIAN.uid())
        .unwrap_or(&entries::IMPLICIT_VR_LITTLE_ENDIAN)
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

/// Obtain a transfer syntax specifier from the global registry by its UID.
pub fn get(uid: &str) -> Option<&'static TransferSyntax> {
    REGISTRY.get(uid)
}

fn initialize_codecs(registry: &mut TransferSyntaxRegistry) {
    use crate::entries::*;

    // the three base transfer syntaxes, fully supported
    registry.register(IMPLICIT_VR_LITTLE_ENDIAN);
    registry.register(EXPLICIT_VR_LITTLE_ENDIAN);
    registry.register(EXPLICIT_VR_BIG_ENDIAN);

    registry.register(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);

    // encapsulated pixel data, decoders subject to features
    registry.register(RLE_LOSSLESS);
    registry.register(JPEG_BASELINE);
    registry.register(JPEG_EXTENDED);
    registry.register(JPEG_LOSSLESS_NON_HIERARCHICAL);
    registry.register(JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION);
    registry.register(JPEG_LS_LOSSLESS_IMAGE_COMPRESSION);
    registry.register(JPEG_LS_LOSSY_IMAGE_COMPRESSION);
    registry.register(JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY);
    registry.register(JPEG_2000_IMAGE_COMPRESSION);
}

#[cfg(test)]
mod tests {
    use dicom_extract_encoding::{Endianness, PixelCodec};

    #[test]
    fn contains_base_transfer_syntaxes() {
        let ts = crate::get("1.2.840.10008.1.2").expect("implicit VR LE");
        assert!(!ts.explicit_vr());
        assert_eq!(ts.endianness(), Endianness::Little);

        let ts = crate::get("1.2.840.10008.1.2.1").expect("explicit VR LE");
        assert!(ts.explicit_vr());
        assert_eq!(ts.pixel_codec(), PixelCodec::Uncompressed);

        let ts = crate::get("1.2.840.10008.1.2.2").expect("explicit VR BE");
        assert_eq!(ts.endianness(), Endianness::Big);

        let ts = crate::get("1.2.840.10008.1.2.1.99").expect("deflated");
        assert!(ts.is_deflated());
    }

    #[test]
    fn ignores_uid_padding() {
        assert!(crate::get("1.2.840.10008.1.2.4.50\0").is_some());
        assert!(crate::get("1.2.840.10008.1.2.4.50 ").is_some());
        assert!(crate::get("1.2.840.10008.1.2.4.50.1").is_none());
    }

    #[test]
    fn encapsulated_codecs() {
        let cases = [
            ("1.2.840.10008.1.2.5", PixelCodec::RleLossless),
            ("1.2.840.10008.1.2.4.50", PixelCodec::JpegBaseline),
            ("1.2.840.10008.1.2.4.51", PixelCodec::JpegBaseline),
            ("1.2.840.10008.1.2.4.57", PixelCodec::JpegLossless),
            ("1.2.840.10008.1.2.4.70", PixelCodec::JpegLossless),
            ("1.2.840.10008.1.2.4.80", PixelCodec::JpegLs),
            ("1.2.840.10008.1.2.4.81", PixelCodec::JpegLs),
            ("1.2.840.10008.1.2.4.90", PixelCodec::Jpeg2000),
            ("1.2.840.10008.1.2.4.91", PixelCodec::Jpeg2000),
        ];
        for (uid, codec) in cases {
            let ts = crate::get(uid).unwrap_or_else(|| panic!("{} not registered", uid));
            assert_eq!(ts.pixel_codec(), codec, "{}", uid);
            assert!(ts.explicit_vr());
        }
        // JPEG-LS has no decoder
        assert!(crate::get("1.2.840.10008.1.2.4.80")
            .unwrap()
            .pixel_reader()
            .is_none());
    }

    #[cfg(feature = "rle")]
    #[test]
    fn rle_has_a_reader() {
        assert!(crate::get("1.2.840.10008.1.2.5")
            .unwrap()
            .pixel_reader()
            .is_some());
    }

    #[test]
    fn default_is_implicit_vr_little_endian() {
        assert_eq!(crate::default().uid(), "1.2.840.10008.1.2");
    }
}
