//! Data element header encoding.
//!
//! Writing is limited to element and item headers;
//! values are expected to be encoded by the caller
//! in the byte order of the encoder.

use byteordered::{ByteOrdered, Endianness};
use dicom_extract_core::header::{
    DataElementHeader, Tag, ITEM, ITEM_DELIMITATION, SEQUENCE_DELIMITATION,
};
use std::io::{self, Write};

/// Type trait for encoding DICOM data element headers.
pub trait Encode {
    /// Encode and write a data element header to the given destination.
    /// Returns the number of bytes effectively written.
    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> io::Result<usize>
    where
        W: Write;

    /// Encode and write a DICOM tag.
    fn encode_tag<W>(&self, to: W, tag: Tag) -> io::Result<()>
    where
        W: Write;

    /// Encode and write a sequence item header.
    fn encode_item_header<W>(&self, mut to: W, len: u32) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_delimiter(&mut to, ITEM, len)
    }

    /// Encode and write an item delimiter.
    fn encode_item_delimiter<W>(&self, mut to: W) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_delimiter(&mut to, ITEM_DELIMITATION, 0)
    }

    /// Encode and write a sequence delimiter.
    fn encode_sequence_delimiter<W>(&self, mut to: W) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_delimiter(&mut to, SEQUENCE_DELIMITATION, 0)
    }

    /// Encode a header of group `FFFE`, which never carries a VR.
    fn encode_delimiter<W>(&self, to: W, tag: Tag, len: u32) -> io::Result<()>
    where
        W: Write;
}

/// An element header encoder for any of the supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementEncoder {
    explicit_vr: bool,
    endianness: Endianness,
}

impl ElementEncoder {
    /// Create an encoder for the given encoding.
    pub fn new(explicit_vr: bool, endianness: Endianness) -> Self {
        ElementEncoder {
            explicit_vr,
            endianness,
        }
    }

    /// The byte order of this encoder.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}

impl Encode for ElementEncoder {
    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> io::Result<usize>
    where
        W: Write,
    {
        self.encode_tag(&mut to, de.tag)?;
        let mut to = ByteOrdered::runtime(to, self.endianness);
        if !self.explicit_vr {
            to.write_u32(de.len.0)?;
            return Ok(8);
        }
        to.write_all(&de.vr.to_bytes())?;
        if de.vr.has_long_length() {
            to.write_u16(0)?;
            to.write_u32(de.len.0)?;
            Ok(12)
        } else {
            let len = u16::try_from(de.len.0).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, "value too long for a 2-byte length")
            })?;
            to.write_u16(len)?;
            Ok(8)
        }
    }

    fn encode_tag<W>(&self, to: W, tag: Tag) -> io::Result<()>
    where
        W: Write,
    {
        let mut to = ByteOrdered::runtime(to, self.endianness);
        to.write_u16(tag.group())?;
        to.write_u16(tag.element())
    }

    fn encode_delimiter<W>(&self, mut to: W, tag: Tag, len: u32) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_tag(&mut to, tag)?;
        ByteOrdered::runtime(to, self.endianness).write_u32(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::explicit::ExplicitVRDecoder;
    use crate::decode::Decode;
    use dicom_extract_core::header::Length;
    use dicom_extract_core::VR;

    #[test]
    fn explicit_headers_read_back() {
        let enc = ElementEncoder::new(true, Endianness::Big);
        let mut out = Vec::new();
        let n = enc
            .encode_element_header(&mut out, DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2)))
            .unwrap();
        assert_eq!(n, 8);
        let n = enc
            .encode_element_header(&mut out, DataElementHeader::new((0x7FE0, 0x0010), VR::OB, Length::UNDEFINED))
            .unwrap();
        assert_eq!(n, 12);
        enc.encode_item_header(&mut out, 0).unwrap();
        assert_eq!(out.len(), 28);

        let dec = ExplicitVRDecoder::big_endian();
        let mut src = &out[..];
        let (h, _) = dec.decode_header(&mut src).unwrap();
        assert_eq!(h, DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2)));
        let (h, _) = dec.decode_header(&mut src).unwrap();
        assert!(h.len.is_undefined());
        assert_eq!(h.vr, VR::OB);
    }

    #[test]
    fn implicit_header_layout() {
        let enc = ElementEncoder::new(false, Endianness::Little);
        let mut out = Vec::new();
        enc.encode_element_header(&mut out, DataElementHeader::new((0x0028, 0x0010), VR::US, Length(2)))
            .unwrap();
        assert_eq!(out, [0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00]);
    }
}
