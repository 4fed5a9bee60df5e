//! Implicit VR Little Endian transfer syntax implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, ReadHeaderTagSnafu, ReadLengthSnafu,
    ReadTagSnafu, Result,
};
use dicom_extract_core::dictionary::DataDictionary;
use dicom_extract_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dicom_extract_core::{Tag, VR};
use dicom_extract_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains a reference to an attribute dictionary for resolving
/// value representations.
#[derive(Clone)]
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .field("basic", &self.basic)
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: dictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let len = self
            .basic
            .decode_ul(&mut source)
            .context(ReadLengthSnafu)?;

        if tag.group() == 0xFFFE {
            return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
        }

        // In Implicit VR Little Endian,
        // the VR of OW must be used for Pixel Data (7FE0,0010)
        // and Overlay Data (60xx,3000).
        let vr = if tag == Tag(0x7FE0, 0x0010) || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
            VR::OW
        } else {
            self.dict.vr_of(tag)
        };
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }

    fn decode_item_header<S>(&self, mut source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;
        let len = self
            .basic
            .decode_ul(&mut source)
            .context(ReadLengthSnafu)?;
        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }

    #[inline]
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dicom_extract_core::header::{Length, VR};
    use dicom_extract_core::Tag;

    // manually crafting some DICOM data elements
    //   Tag: (0028,0010) Rows, Length: 2, Value: 256
    //   Tag: (0009,1001) private, Length: 4
    //   Tag: (7FE0,0010) Pixel Data, Length: 4
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x01,
        0x09, 0x00, 0x01, 0x10, 0x04, 0x00, 0x00, 0x00,
            0xDE, 0xAD, 0xBE, 0xEF,
        0xE0, 0x7F, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn implicit_vr_le() {
        let reader = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = RAW;

        let (elem, bytes_read) = reader
            .decode_header(&mut cursor)
            .expect("should find an element");
        assert_eq!(elem.tag, Tag(0x0028, 0x0010));
        assert_eq!(elem.vr, VR::US);
        assert_eq!(elem.len, Length(2));
        assert_eq!(bytes_read, 8);

        let mut cursor = &cursor[2..];
        let (elem, _) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag, Tag(0x0009, 0x1001));
        assert_eq!(elem.vr, VR::UN);
        assert_eq!(elem.len, Length(4));

        let mut cursor = &cursor[4..];
        let (elem, _) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag, Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr, VR::OW);
        assert_eq!(cursor, &[0x01, 0x02, 0x03, 0x04]);
    }
}
