//! Data element dictionary implementation

use crate::tags::{ENTRIES, REPEATING_GROUP_ENTRIES};
use dicom_extract_core::dictionary::{DataDictionary, DictionaryEntry};
use dicom_extract_core::header::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// Built once on first use and never modified afterwards,
/// so it can be shared freely across threads.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashMap<Tag, &'static DictionaryEntry>,
}

impl StandardDataDictionaryRegistry {
    /// Fetch an entry by its keyword.
    pub fn by_name(&self, name: &str) -> Option<&'static DictionaryEntry> {
        self.by_name.get(name).copied()
    }

    /// The number of indexed attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len() + self.repeating_ggxx.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        let r = registry();
        r.by_tag.get(&tag).copied().or_else(|| {
            // overlays and curves repeat over groups 50xx and 60xx
            match tag.0 & 0xFF00 {
                0x5000 | 0x6000 => r.repeating_ggxx.get(&Tag(tag.0 & 0xFF00, tag.1)).copied(),
                _ => None,
            }
        })
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry {
        by_name: HashMap::with_capacity(ENTRIES.len()),
        by_tag: HashMap::with_capacity(ENTRIES.len()),
        repeating_ggxx: HashMap::new(),
    };
    for entry in ENTRIES {
        d.by_name.insert(entry.alias, entry);
        d.by_tag.insert(entry.tag, entry);
    }
    for entry in REPEATING_GROUP_ENTRIES {
        d.by_name.insert(entry.alias, entry);
        d.repeating_ggxx.insert(entry.tag, entry);
    }
    d
}
