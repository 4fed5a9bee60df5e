//! Standard DICOM attribute dictionary and tag constants.
//!
//! - [`data_element`] holds the run-time dictionary of attributes,
//!   consulted to resolve value representations under implicit VR.
//!   The records cover the attributes relevant to image extraction
//!   as listed in [DICOM PS3.6].
//! - [`tags`] maps attribute keywords to DICOM tags at compile time.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
