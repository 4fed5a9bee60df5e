//! DICOM encoding and decoding primitives.
//!
//! This crate provides the data element header decoders
//! for the explicit and implicit VR encodings,
//! the concept of [transfer syntax specifier] used to
//! pick a decoder at run-time,
//! and the [pixel data adapter] seam implemented by
//! compressed pixel data codecs.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html
//! [pixel data adapter]: ./adapters/index.html

pub mod adapters;
pub mod decode;
pub mod encode;
pub mod transfer_syntax;

pub use adapters::{DecodeError, FrameInfo, PixelDataReader};
pub use byteordered::Endianness;
pub use decode::{Decode, ElementDecoder};
pub use encode::{Encode, ElementEncoder};
pub use transfer_syntax::{Codec, PixelCodec, TransferSyntax};

// public dependency re-export
pub use snafu;
