//! Explicit VR transfer syntax implementation, in either byte order.

use crate::decode::basic::BasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, ReadHeaderTagSnafu, ReadItemHeaderSnafu,
    ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu, ReadVrSnafu, Result,
};
use byteordered::Endianness;
use dicom_extract_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dicom_extract_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR transfer syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVRDecoder {
    basic: BasicDecoder,
}

impl ExplicitVRDecoder {
    /// Create a decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ExplicitVRDecoder {
            basic: BasicDecoder::new(endianness),
        }
    }

    /// Explicit VR Little Endian decoder.
    pub fn little_endian() -> Self {
        Self::new(Endianness::Little)
    }

    /// Explicit VR Big Endian decoder.
    pub fn big_endian() -> Self {
        Self::new(Endianness::Big)
    }

    /// The byte order of this decoder.
    pub fn endianness(&self) -> Endianness {
        self.basic.endianness()
    }
}

impl Default for ExplicitVRDecoder {
    fn default() -> Self {
        Self::little_endian()
    }
}

impl Decode for ExplicitVRDecoder {
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let Tag(group, element) = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        if group == 0xFFFE {
            // item delimiters do not have VR or reserved field
            let len = self
                .basic
                .decode_ul(&mut source)
                .context(ReadItemLengthSnafu)?;
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        let mut buf = [0u8; 2];
        source.read_exact(&mut buf).context(ReadVrSnafu)?;
        let vr = VR::from_binary(buf).unwrap_or(VR::UN);

        // PS3.5 7.1.2: a subset of VRs use a 2-byte length right after the VR,
        // all others are followed by 2 reserved bytes and a 4-byte length
        let (len, bytes_read) = if vr.has_long_length() {
            source.read_exact(&mut buf).context(ReadReservedSnafu)?;
            let len = self
                .basic
                .decode_ul(&mut source)
                .context(ReadLengthSnafu)?;
            (len, 12)
        } else {
            let len = self
                .basic
                .decode_us(&mut source)
                .context(ReadLengthSnafu)?;
            (u32::from(len), 8)
        };

        Ok((
            DataElementHeader::new((group, element), vr, Length(len)),
            bytes_read,
        ))
    }

    fn decode_item_header<S>(&self, mut source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadItemHeaderSnafu)?;
        let len = self
            .basic
            .decode_ul(&mut source)
            .context(ReadItemLengthSnafu)?;

        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}
