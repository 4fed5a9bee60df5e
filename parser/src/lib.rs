//! This crate provides the reading of DICOM data sets
//! from fully buffered byte streams.
//!
//! A [`DataSetReader`] is created from the data set bytes
//! and the transfer syntax describing their encoding.
//! It can be consumed element by element, as an iterator,
//! or all at once into a [`DataSet`](dicom_extract_core::DataSet).
//!
//! ```
//! # use dicom_extract_encoding::TransferSyntax;
//! # use dicom_extract_encoding::transfer_syntax::Codec;
//! # use dicom_extract_encoding::Endianness;
//! use dicom_extract_parser::DataSetReader;
//! # const EXPLICIT_VR_LE: TransferSyntax = TransferSyntax::new(
//! #     "1.2.840.10008.1.2.1", "Explicit VR Little Endian",
//! #     Endianness::Little, true, Codec::None);
//! // (0028,0010) US 2 [512]
//! let bytes = [0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02];
//! let data_set = DataSetReader::new(&bytes, &EXPLICIT_VR_LE).read_data_set()?;
//! assert_eq!(data_set.int::<u16>((0x0028, 0x0010).into())?, Some(512));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod dataset;
pub mod value;

pub use dataset::read::{DataSetReader, Error, Result};
pub use value::read_primitive;
