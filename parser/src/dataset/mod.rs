//! Interpretation of DICOM data sets from a byte stream.
//!
//! The reader resolves every element to a typed value as it goes,
//! so that the resulting [`DataSet`](dicom_extract_core::DataSet)
//! never needs to go back to the source.

pub mod read;

pub use self::read::{DataSetReader, Error, Result, MAX_DEPTH};
