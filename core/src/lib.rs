#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! Core data types of the DICOM extraction workspace.
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and value lengths.
//! - [`value`] holds the representation of decoded values,
//!   resolved by value representation at parse time.
//! - [`dataset`] is the in-memory data set model with typed accessors.
//! - [`dictionary`] describes the behavior of DICOM data dictionaries.

pub mod dataset;
pub mod dictionary;
pub mod header;
pub mod value;

pub use dataset::{DataElement, DataSet};
pub use dictionary::{DataDictionary, DictionaryEntry};
pub use header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
pub use value::{AccessError, PixelFragmentSequence, PrimitiveValue, Value};

// re-export crates that are part of the public API
pub use smallvec;
