//! The in-memory data set model.
//!
//! A [`DataSet`] is an ordered map from attribute tag to [`DataElement`],
//! built once from an element stream and read-only afterwards.
//! Typed getters report an absent element as `Ok(None)`
//! and a type mismatch as an [`AccessError`].

use crate::header::{Tag, VR};
use crate::value::{
    AccessError, CastValueSnafu, ConvertValueSnafu, PixelFragmentSequence, PrimitiveValue, Value,
};
use num_traits::NumCast;
use snafu::OptionExt;
use std::collections::btree_map::{BTreeMap, Values};
use std::iter::FromIterator;

/// A decoded data element: tag, value representation and value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    value: Value,
}

impl DataElement {
    /// Create a data element from its parts.
    pub fn new<T, V>(tag: T, vr: VR, value: V) -> Self
    where
        T: Into<Tag>,
        V: Into<Value>,
    {
        DataElement {
            tag: tag.into(),
            vr,
            value: value.into(),
        }
    }

    /// The element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The element's value.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the element's value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A collection of data elements keyed by tag.
///
/// When the same tag is collected more than once,
/// the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
}

type Result<T, E = AccessError> = std::result::Result<T, E>;

impl DataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an element with the given tag is present.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Retrieve the element with the given tag.
    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> Values<'_, Tag, DataElement> {
        self.entries.values()
    }

    fn primitive(&self, tag: Tag, requested: &'static str) -> Result<Option<&PrimitiveValue>> {
        match self.entries.get(&tag).map(DataElement::value) {
            None | Some(Value::Primitive(PrimitiveValue::Empty)) => Ok(None),
            Some(Value::Primitive(v)) => Ok(Some(v)),
            Some(v) => CastValueSnafu {
                tag,
                requested,
                got: v.type_name(),
            }
            .fail(),
        }
    }

    /// Retrieve a textual value,
    /// with multiple values joined by a backslash.
    pub fn string(&self, tag: Tag) -> Result<Option<String>> {
        match self.primitive(tag, "string")? {
            None => Ok(None),
            Some(PrimitiveValue::Strs(values)) => Ok(Some(values.join("\\"))),
            Some(v) => CastValueSnafu {
                tag,
                requested: "string",
                got: v.type_name(),
            }
            .fail(),
        }
    }

    /// Retrieve the first value as an integer of type `T`.
    ///
    /// Binary integers and integer strings (IS) are accepted.
    pub fn int<T>(&self, tag: Tag) -> Result<Option<T>>
    where
        T: NumCast,
    {
        let requested = std::any::type_name::<T>();
        let Some(value) = self.primitive(tag, requested)? else {
            return Ok(None);
        };

        let out: Option<Option<T>> = match value {
            PrimitiveValue::U16(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::I16(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::U32(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::I32(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::U64(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::I64(v) => v.first().map(|x| <T as NumCast>::from(*x)),
            PrimitiveValue::Strs(v) => match v.first() {
                None => None,
                Some(s) => {
                    let n: i64 = s.trim().parse().ok().with_context(|| ConvertValueSnafu {
                        tag,
                        requested,
                        value: s.clone(),
                    })?;
                    Some(<T as NumCast>::from(n))
                }
            },
            v => {
                return CastValueSnafu {
                    tag,
                    requested,
                    got: v.type_name(),
                }
                .fail()
            }
        };

        match out {
            None => Ok(None),
            Some(Some(n)) => Ok(Some(n)),
            Some(None) => ConvertValueSnafu {
                tag,
                requested,
                value: format!("{:?}", value),
            }
            .fail(),
        }
    }

    /// Retrieve all values as double precision floats.
    ///
    /// Decimal strings (DS) and integer strings (IS)
    /// are parsed value by value;
    /// binary numbers are converted.
    pub fn floats(&self, tag: Tag) -> Result<Option<Vec<f64>>> {
        let requested = "f64";
        let Some(value) = self.primitive(tag, requested)? else {
            return Ok(None);
        };
        let out = match value {
            PrimitiveValue::Strs(v) => v
                .iter()
                .map(|s| {
                    s.trim().parse::<f64>().ok().with_context(|| ConvertValueSnafu {
                        tag,
                        requested,
                        value: s.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            PrimitiveValue::F64(v) => v.to_vec(),
            PrimitiveValue::F32(v) => v.iter().map(|&x| <f64 as From<_>>::from(x)).collect(),
            PrimitiveValue::U16(v) => v.iter().map(|&x| <f64 as From<_>>::from(x)).collect(),
            PrimitiveValue::I16(v) => v.iter().map(|&x| <f64 as From<_>>::from(x)).collect(),
            PrimitiveValue::U32(v) => v.iter().map(|&x| <f64 as From<_>>::from(x)).collect(),
            PrimitiveValue::I32(v) => v.iter().map(|&x| <f64 as From<_>>::from(x)).collect(),
            PrimitiveValue::U64(v) => v.iter().map(|x| *x as f64).collect(),
            PrimitiveValue::I64(v) => v.iter().map(|x| *x as f64).collect(),
            v => {
                return CastValueSnafu {
                    tag,
                    requested,
                    got: v.type_name(),
                }
                .fail()
            }
        };
        Ok(Some(out))
    }

    /// Retrieve the raw bytes of a binary value (OB, OW, UN).
    pub fn bytes(&self, tag: Tag) -> Result<Option<&[u8]>> {
        match self.primitive(tag, "bytes")? {
            None => Ok(None),
            Some(PrimitiveValue::Bytes(bytes)) => Ok(Some(bytes)),
            Some(v) => CastValueSnafu {
                tag,
                requested: "bytes",
                got: v.type_name(),
            }
            .fail(),
        }
    }

    /// Retrieve the items of a sequence.
    pub fn items(&self, tag: Tag) -> Result<Option<&[DataSet]>> {
        match self.entries.get(&tag).map(DataElement::value) {
            None => Ok(None),
            Some(Value::Sequence(items)) => Ok(Some(items)),
            Some(v) => CastValueSnafu {
                tag,
                requested: "sequence",
                got: v.type_name(),
            }
            .fail(),
        }
    }

    /// Retrieve the fragments of an encapsulated pixel data element.
    pub fn fragments(&self, tag: Tag) -> Result<Option<&PixelFragmentSequence>> {
        match self.entries.get(&tag).map(DataElement::value) {
            None => Ok(None),
            Some(Value::PixelSequence(seq)) => Ok(Some(seq)),
            Some(v) => CastValueSnafu {
                tag,
                requested: "pixel sequence",
                got: v.type_name(),
            }
            .fail(),
        }
    }
}

impl FromIterator<DataElement> for DataSet {
    fn from_iter<I: IntoIterator<Item = DataElement>>(iter: I) -> Self {
        DataSet {
            entries: iter.into_iter().map(|e| (e.tag, e)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn strs(values: &[&str]) -> PrimitiveValue {
        PrimitiveValue::Strs(values.iter().map(|s| s.to_string()).collect())
    }

    fn sample() -> DataSet {
        vec![
            DataElement::new((0x0008, 0x0020), VR::DA, strs(&["20240101"])),
            DataElement::new((0x0020, 0x0013), VR::IS, strs(&[" 7"])),
            DataElement::new((0x0028, 0x0010), VR::US, PrimitiveValue::U16(smallvec![512])),
            DataElement::new((0x0028, 0x1050), VR::DS, strs(&["40", "-600.5"])),
            DataElement::new((0x0028, 0x1051), VR::DS, PrimitiveValue::Empty),
            DataElement::new((0x0028, 0x1052), VR::DS, strs(&["abc"])),
            DataElement::new((0x7FE0, 0x0010), VR::OB, PrimitiveValue::Bytes(vec![1, 2, 3, 4])),
            DataElement::new((0x0008, 0x1115), VR::SQ, Value::Sequence(vec![DataSet::new()])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn typed_getters() {
        let ds = sample();
        assert_eq!(ds.string(Tag(0x0008, 0x0020)).unwrap().as_deref(), Some("20240101"));
        assert_eq!(ds.int::<u16>(Tag(0x0028, 0x0010)).unwrap(), Some(512));
        assert_eq!(ds.int::<i32>(Tag(0x0020, 0x0013)).unwrap(), Some(7));
        assert_eq!(
            ds.floats(Tag(0x0028, 0x1050)).unwrap(),
            Some(vec![40., -600.5])
        );
        assert_eq!(ds.bytes(Tag(0x7FE0, 0x0010)).unwrap(), Some(&[1, 2, 3, 4][..]));
        assert_eq!(ds.items(Tag(0x0008, 0x1115)).unwrap().map(|i| i.len()), Some(1));
    }

    #[test]
    fn floats_of_binary_numbers() {
        let ds: DataSet = vec![
            DataElement::new((0x0028, 0x0010), VR::US, PrimitiveValue::U16(smallvec![512, 7])),
            DataElement::new((0x0028, 0x0106), VR::SS, PrimitiveValue::I16(smallvec![-3])),
            DataElement::new((0x0018, 0x0050), VR::FL, PrimitiveValue::F32(smallvec![0.5])),
            DataElement::new((0x0028, 0x0008), VR::UL, PrimitiveValue::U32(smallvec![9])),
            DataElement::new((0x0028, 0x0009), VR::SL, PrimitiveValue::I32(smallvec![-9])),
        ]
        .into_iter()
        .collect();
        assert_eq!(ds.floats(Tag(0x0028, 0x0010)).unwrap(), Some(vec![512., 7.]));
        assert_eq!(ds.floats(Tag(0x0028, 0x0106)).unwrap(), Some(vec![-3.]));
        assert_eq!(ds.floats(Tag(0x0018, 0x0050)).unwrap(), Some(vec![0.5]));
        assert_eq!(ds.floats(Tag(0x0028, 0x0008)).unwrap(), Some(vec![9.]));
        assert_eq!(ds.floats(Tag(0x0028, 0x0009)).unwrap(), Some(vec![-9.]));
    }

    #[test]
    fn absent_and_empty_values() {
        let ds = sample();
        assert_eq!(ds.string(Tag(0x0010, 0x0010)).unwrap(), None);
        assert_eq!(ds.int::<u16>(Tag(0x0028, 0x0011)).unwrap(), None);
        assert_eq!(ds.floats(Tag(0x0028, 0x1051)).unwrap(), None);
        assert_eq!(ds.items(Tag(0x0040, 0xA730)).unwrap(), None);
    }

    #[test]
    fn mismatched_types_fail() {
        let ds = sample();
        assert!(matches!(
            ds.string(Tag(0x0028, 0x0010)),
            Err(AccessError::CastValue { .. })
        ));
        assert!(matches!(
            ds.bytes(Tag(0x0008, 0x0020)),
            Err(AccessError::CastValue { .. })
        ));
        assert!(matches!(
            ds.int::<u16>(Tag(0x0008, 0x1115)),
            Err(AccessError::CastValue { .. })
        ));
        assert!(matches!(
            ds.floats(Tag(0x0028, 0x1052)),
            Err(AccessError::ConvertValue { .. })
        ));
        // 512 does not fit in a byte
        assert!(matches!(
            ds.int::<u8>(Tag(0x0028, 0x0010)),
            Err(AccessError::ConvertValue { .. })
        ));
    }

    #[test]
    fn last_repeated_tag_wins() {
        let ds: DataSet = vec![
            DataElement::new((0x0028, 0x0010), VR::US, PrimitiveValue::U16(smallvec![1])),
            DataElement::new((0x0028, 0x0010), VR::US, PrimitiveValue::U16(smallvec![2])),
        ]
        .into_iter()
        .collect();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.int::<u16>(Tag(0x0028, 0x0010)).unwrap(), Some(2));
    }

    #[test]
    fn iteration_is_ordered_by_tag() {
        let ds = sample();
        let tags: Vec<Tag> = ds.iter().map(DataElement::tag).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }
}
