//! Root module for pixel data adapters.
//!
//! Support for certain transfer syntaxes
//! is subject to Cargo features.
//!
//! - [`jpeg`](jpeg) provides native JPEG decoding
//!   (baseline, extended and lossless).
//!   Requires the `jpeg` feature,
//!   enabled by default.
//! - [`jpeg2k`](jpeg2k) contains JPEG 2000 support,
//!   available through [OpenJPEG].
//!   The `openjp2` feature provides JPEG 2000 decoding
//!   via the [Rust port of OpenJPEG][OpenJPEG-rs].
//!   Alternatively, enable the `openjpeg-sys` feature
//!   to statically link to the OpenJPEG reference implementation.
//! - [`rle_lossless`](rle_lossless) provides native RLE lossless decoding.
//!   Requires the `rle` feature,
//!   enabled by default.
//!
//! [OpenJPEG]: https://github.com/uclouvain/openjpeg
//! [OpenJPEG-rs]: https://crates.io/crates/openjp2
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(any(feature = "openjp2", feature = "openjpeg-sys"))]
pub mod jpeg2k;
#[cfg(feature = "rle")]
pub mod rle_lossless;

/// **Note:** This module is a stub.
/// Enable the `jpeg` feature to use this module.
#[cfg(not(feature = "jpeg"))]
pub mod jpeg {}

/// **Note:** This module is a stub.
/// Enable either `openjp2` or `openjpeg-sys` to use this module.
#[cfg(not(any(feature = "openjp2", feature = "openjpeg-sys")))]
pub mod jpeg2k {}

/// **Note:** This module is a stub.
/// Enable the `rle` feature to use this module.
#[cfg(not(feature = "rle"))]
pub mod rle_lossless {}
