//! Data dictionary abstraction.
//!
//! A data dictionary maps attribute tags to the information needed
//! to interpret their values when the encoding does not say,
//! most notably the value representation under implicit VR.

use crate::header::{Tag, VR};

/// An entry of a data dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The attribute tag.
    pub tag: Tag,
    /// The keyword of the attribute, such as `PatientName`.
    pub alias: &'static str,
    /// The value representation the attribute is encoded with.
    pub vr: VR,
}

/// Type trait for a dictionary of DICOM attributes.
pub trait DataDictionary {
    /// Fetch the entry of the attribute with the given tag.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;

    /// Resolve the value representation of the given tag.
    ///
    /// Besides the listed attributes, this covers
    /// group lengths (UL) and private creators (LO).
    /// Tags unknown to the dictionary resolve to UN.
    fn vr_of(&self, tag: Tag) -> VR {
        if let Some(entry) = self.by_tag(tag) {
            return entry.vr;
        }
        match tag {
            Tag(_, 0x0000) => VR::UL,
            Tag(g, e) if g % 2 == 1 && (0x0010..=0x00FF).contains(&e) => VR::LO,
            _ => VR::UN,
        }
    }
}

impl<D: DataDictionary + ?Sized> DataDictionary for &D {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }
}
