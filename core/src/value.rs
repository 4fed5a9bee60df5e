//! Representation of DICOM values.
//!
//! Each value is resolved once at parse time into a variant
//! determined by the element's value representation.
//! Accessors fail explicitly when the requested type does not match
//! the stored variant instead of reinterpreting bytes.

use crate::dataset::DataSet;
use crate::header::Tag;
use smallvec::SmallVec;
use snafu::Snafu;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// No data. Used for any value of length 0.
    Empty,
    /// A sequence of strings, already split on the backslash
    /// delimiter and stripped of padding.
    Strs(C<String>),
    /// A sequence of attribute tags (AT).
    Tags(C<Tag>),
    /// Signed 16-bit integers (SS).
    I16(C<i16>),
    /// Unsigned 16-bit integers (US, and OW when read as words).
    U16(C<u16>),
    /// Signed 32-bit integers (SL).
    I32(C<i32>),
    /// Unsigned 32-bit integers (UL, OL).
    U32(C<u32>),
    /// Signed 64-bit integers (SV).
    I64(C<i64>),
    /// Unsigned 64-bit integers (UV, OV).
    U64(C<u64>),
    /// Single precision floats (FL, OF).
    F32(C<f32>),
    /// Double precision floats (FD, OD).
    F64(C<f64>),
    /// Raw bytes (OB, OW, UN), kept in the byte order of the source.
    Bytes(Vec<u8>),
}

impl PrimitiveValue {
    /// The number of individual values.
    pub fn multiplicity(&self) -> usize {
        use PrimitiveValue::*;
        match self {
            Empty => 0,
            Strs(v) => v.len(),
            Tags(v) => v.len(),
            I16(v) => v.len(),
            U16(v) => v.len(),
            I32(v) => v.len(),
            U32(v) => v.len(),
            I64(v) => v.len(),
            U64(v) => v.len(),
            F32(v) => v.len(),
            F64(v) => v.len(),
            Bytes(_) => 1,
        }
    }

    /// A short name of the variant, for error reporting.
    pub fn type_name(&self) -> &'static str {
        use PrimitiveValue::*;
        match self {
            Empty => "empty",
            Strs(_) => "strings",
            Tags(_) => "tags",
            I16(_) => "i16",
            U16(_) => "u16",
            I32(_) => "i32",
            U32(_) => "u32",
            I64(_) => "i64",
            U64(_) => "u64",
            F32(_) => "f32",
            F64(_) => "f64",
            Bytes(_) => "bytes",
        }
    }
}

/// The value of an encapsulated pixel data element:
/// a basic offset table followed by compressed fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelFragmentSequence {
    offset_table: C<u32>,
    fragments: C<Vec<u8>>,
}

impl PixelFragmentSequence {
    /// Construct a fragment sequence from its parts.
    pub fn new(offset_table: impl Into<C<u32>>, fragments: impl Into<C<Vec<u8>>>) -> Self {
        PixelFragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into(),
        }
    }

    /// The basic offset table, possibly empty.
    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    /// The compressed fragments, in stream order.
    pub fn fragments(&self) -> &[Vec<u8>] {
        &self.fragments
    }
}

/// A full DICOM value: primitive, a sequence of items,
/// or an encapsulated pixel data fragment sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A sequence of nested data sets.
    Sequence(Vec<DataSet>),
    /// Encapsulated pixel data.
    PixelSequence(PixelFragmentSequence),
}

impl Value {
    /// A short name of the value's shape, for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Primitive(v) => v.type_name(),
            Value::Sequence(_) => "sequence",
            Value::PixelSequence(_) => "pixel sequence",
        }
    }

    /// Get the primitive value, if this is one.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }
}

/// Error raised by a typed accessor when the stored value
/// cannot be provided as the requested type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    /// The value is of a shape incompatible with the requested type.
    #[snafu(display("Cannot retrieve {} of {} as {}", got, tag, requested))]
    CastValue {
        tag: Tag,
        requested: &'static str,
        got: &'static str,
    },
    /// The value is of a compatible shape but could not be converted.
    #[snafu(display("Cannot convert {:?} of {} to {}", value, tag, requested))]
    ConvertValue {
        tag: Tag,
        requested: &'static str,
        value: String,
    },
}
