//! This module contains the data set reader,
//! which decodes a DICOM element stream into data elements.
//!
//! The reader works over a fully buffered byte slice.
//! Every declared length is checked against the bytes remaining
//! before any value is taken,
//! so a truncated stream yields an error and never a partial element.
use crate::value::read_primitive;
use dicom_extract_core::dataset::{DataElement, DataSet};
use dicom_extract_core::header::{DataElementHeader, SequenceItemHeader, ITEM, ITEM_DELIMITATION};
use dicom_extract_core::value::{PixelFragmentSequence, Value, C};
use dicom_extract_core::{PrimitiveValue, Tag, VR};
use dicom_extract_encoding::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use dicom_extract_encoding::decode::{Decode, ElementDecoder, Error as DecodeError};
use dicom_extract_encoding::transfer_syntax::TransferSyntax;
use dicom_extract_encoding::Endianness;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{trace, warn};

/// The maximum level of sequence nesting admitted by the reader.
pub const MAX_DEPTH: u32 = 32;

const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read element header at position {}", position))]
    ReadHeader {
        position: usize,
        #[snafu(backtrace)]
        source: DecodeError,
    },
    #[snafu(display("Could not read item header at position {}", position))]
    ReadItemHeader {
        position: usize,
        #[snafu(backtrace)]
        source: DecodeError,
    },
    #[snafu(display(
        "Value of {} declares {} bytes but only {} remain",
        tag,
        length,
        available
    ))]
    ValueTruncated {
        tag: Tag,
        length: u32,
        available: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined length is not allowed for {} with VR {}", tag, vr))]
    UndefinedValueLength {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined item length in encapsulated pixel data at position {}", position))]
    UndefinedItemLength { position: usize, backtrace: Backtrace },
    #[snafu(display("Unexpected item tag {} at position {}", tag, position))]
    UnexpectedItemTag {
        tag: Tag,
        position: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Sequence nesting exceeds {} levels", max))]
    DepthExceeded { max: u32, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A reader of DICOM data elements from an in-memory byte stream.
///
/// Each call to [`read_element`](DataSetReader::read_element)
/// produces one top level element, nested sequences included,
/// and advances the cursor past it.
#[derive(Debug, Clone)]
pub struct DataSetReader<'a> {
    source: &'a [u8],
    position: usize,
    decoder: ElementDecoder,
    endianness: Endianness,
    failed: bool,
}

impl<'a> DataSetReader<'a> {
    /// Create a reader for a data set encoded in the given transfer syntax.
    pub fn new(source: &'a [u8], ts: &TransferSyntax) -> Self {
        Self::with_decoder(source, ts.decoder())
    }

    /// Create a reader with a specific element decoder.
    pub fn with_decoder(source: &'a [u8], decoder: ElementDecoder) -> Self {
        DataSetReader {
            source,
            position: 0,
            endianness: decoder.endianness(),
            decoder,
            failed: false,
        }
    }

    /// The number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the whole stream has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Retrieve the tag of the next element without consuming it,
    /// or `None` at the end of the stream.
    pub fn peek_tag(&self) -> Result<Option<Tag>> {
        if self.is_at_end() {
            return Ok(None);
        }
        let mut src = &self.source[self.position..];
        self.decoder
            .decode_tag(&mut src)
            .map(Some)
            .context(ReadHeaderSnafu {
                position: self.position,
            })
    }

    /// Read the next top level data element,
    /// or `None` at the end of the stream.
    pub fn read_element(&mut self) -> Result<Option<DataElement>> {
        if self.is_at_end() {
            return Ok(None);
        }
        let end = self.source.len();
        let position = self.position;
        let header = self.read_header(end)?;
        ensure!(
            !header.is_item_or_delimiter(),
            UnexpectedItemTagSnafu {
                tag: header.tag,
                position
            }
        );
        self.read_element_value(header, end, 0).map(Some)
    }

    /// Read all remaining elements into a data set.
    pub fn read_data_set(mut self) -> Result<DataSet> {
        let mut elements = Vec::new();
        while let Some(element) = self.read_element()? {
            elements.push(element);
        }
        Ok(collect_elements(elements))
    }

    fn read_header(&mut self, end: usize) -> Result<DataElementHeader> {
        let position = self.position;
        let mut src = &self.source[position..end];
        let (header, bytes_read) = self
            .decoder
            .decode_header(&mut src)
            .context(ReadHeaderSnafu { position })?;
        self.position += bytes_read;
        trace!("{} {} {} at {}", header.tag, header.vr, header.len, position);
        Ok(header)
    }

    fn read_item_header(&mut self, end: usize) -> Result<SequenceItemHeader> {
        let position = self.position;
        let mut src = &self.source[position..end];
        let header = self
            .decoder
            .decode_item_header(&mut src)
            .context(ReadItemHeaderSnafu { position })?;
        self.position += 8;
        Ok(header)
    }

    /// Take `len` bytes of value data, if available before `end`.
    fn take_value(&mut self, tag: Tag, len: u32, end: usize) -> Result<&'a [u8]> {
        let available = end.saturating_sub(self.position);
        let len_usize = len as usize;
        ensure!(
            len_usize <= available,
            ValueTruncatedSnafu {
                tag,
                length: len,
                available
            }
        );
        let source: &'a [u8] = self.source;
        let bytes = &source[self.position..self.position + len_usize];
        self.position += len_usize;
        Ok(bytes)
    }

    fn read_element_value(
        &mut self,
        header: DataElementHeader,
        end: usize,
        depth: u32,
    ) -> Result<DataElement> {
        let DataElementHeader { tag, vr, len } = header;

        let Some(len) = len.get() else {
            if tag == PIXEL_DATA {
                let fragments = self.read_pixel_sequence(end)?;
                return Ok(DataElement::new(tag, vr, Value::PixelSequence(fragments)));
            }
            let items = match vr {
                VR::SQ => self.read_items(None, end, depth + 1)?,
                VR::UN => {
                    // PS3.5 6.2.2: content of an undefined length UN
                    // is encoded in implicit VR little endian
                    self.with_implicit_vr(|reader| reader.read_items(None, end, depth + 1))?
                }
                vr => return UndefinedValueLengthSnafu { tag, vr }.fail(),
            };
            return Ok(DataElement::new(tag, VR::SQ, Value::Sequence(items)));
        };

        if vr == VR::SQ {
            let available = end.saturating_sub(self.position);
            ensure!(
                len as usize <= available,
                ValueTruncatedSnafu {
                    tag,
                    length: len,
                    available
                }
            );
            let seq_end = self.position + len as usize;
            let items = self.read_items(Some(seq_end), seq_end, depth + 1)?;
            return Ok(DataElement::new(tag, vr, Value::Sequence(items)));
        }

        let bytes = self.take_value(tag, len, end)?;
        let value = read_primitive(vr, bytes, self.endianness);
        Ok(DataElement::new(tag, vr, value))
    }

    fn with_implicit_vr<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let decoder = std::mem::replace(
            &mut self.decoder,
            ElementDecoder::Implicit(ImplicitVRLittleEndianDecoder::default()),
        );
        let endianness = std::mem::replace(&mut self.endianness, Endianness::Little);
        let out = f(self);
        self.decoder = decoder;
        self.endianness = endianness;
        out
    }

    /// Read the items of a sequence,
    /// either up to `seq_end` or up to the sequence delimiter.
    fn read_items(&mut self, seq_end: Option<usize>, end: usize, depth: u32) -> Result<Vec<DataSet>> {
        ensure!(depth <= MAX_DEPTH, DepthExceededSnafu { max: MAX_DEPTH });

        let mut items = Vec::new();
        loop {
            if let Some(seq_end) = seq_end {
                if self.position >= seq_end {
                    break;
                }
            }
            let position = self.position;
            match self.read_item_header(end)? {
                SequenceItemHeader::Item { len } => {
                    let item_end = match len.get() {
                        Some(len) => {
                            let available = end.saturating_sub(self.position);
                            ensure!(
                                len as usize <= available,
                                ValueTruncatedSnafu {
                                    tag: ITEM,
                                    length: len,
                                    available
                                }
                            );
                            Some(self.position + len as usize)
                        }
                        None => None,
                    };
                    items.push(self.read_item(item_end, end, depth)?);
                }
                SequenceItemHeader::SequenceDelimiter => {
                    if seq_end.is_some() {
                        warn!("Sequence delimiter in sequence of defined length at {}", position);
                    }
                    break;
                }
                SequenceItemHeader::ItemDelimiter => {
                    return UnexpectedItemTagSnafu {
                        tag: ITEM_DELIMITATION,
                        position,
                    }
                    .fail();
                }
            }
        }
        Ok(items)
    }

    /// Read the elements of one item,
    /// either up to `item_end` or up to the item delimiter.
    fn read_item(&mut self, item_end: Option<usize>, end: usize, depth: u32) -> Result<DataSet> {
        let end = item_end.unwrap_or(end);
        let mut elements = Vec::new();
        loop {
            if item_end.is_some() && self.position >= end {
                break;
            }
            let position = self.position;
            let header = self.read_header(end)?;
            if header.tag == ITEM_DELIMITATION {
                if item_end.is_none() {
                    break;
                }
                warn!("Item delimiter in item of defined length at {}", position);
                continue;
            }
            ensure!(
                !header.is_item_or_delimiter(),
                UnexpectedItemTagSnafu {
                    tag: header.tag,
                    position
                }
            );
            elements.push(self.read_element_value(header, end, depth)?);
        }
        Ok(collect_elements(elements))
    }

    /// Read the basic offset table and fragments
    /// of encapsulated pixel data, up to the sequence delimiter.
    fn read_pixel_sequence(&mut self, end: usize) -> Result<PixelFragmentSequence> {
        let mut offset_table: Option<C<u32>> = None;
        let mut fragments: C<Vec<u8>> = C::new();
        loop {
            let position = self.position;
            match self.read_item_header(end)? {
                SequenceItemHeader::Item { len } => {
                    let len = len.get().context(UndefinedItemLengthSnafu { position })?;
                    let bytes = self.take_value(ITEM, len, end)?;
                    if offset_table.is_none() {
                        let table = match read_primitive(VR::UL, bytes, self.endianness) {
                            PrimitiveValue::U32(v) => v,
                            _ => C::new(),
                        };
                        offset_table = Some(table);
                    } else {
                        fragments.push(bytes.to_vec());
                    }
                }
                SequenceItemHeader::SequenceDelimiter => break,
                SequenceItemHeader::ItemDelimiter => {
                    return UnexpectedItemTagSnafu {
                        tag: ITEM_DELIMITATION,
                        position,
                    }
                    .fail();
                }
            }
        }
        Ok(PixelFragmentSequence::new(
            offset_table.unwrap_or_default(),
            fragments,
        ))
    }
}

impl Iterator for DataSetReader<'_> {
    type Item = Result<DataElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Gather elements into a data set, the last repeated tag winning.
fn collect_elements(elements: Vec<DataElement>) -> DataSet {
    for pair in elements.windows(2) {
        if pair[1].tag() <= pair[0].tag() {
            warn!(
                "Element {} follows {} out of order, last occurrence wins",
                pair[1].tag(),
                pair[0].tag()
            );
        }
    }
    elements.into_iter().collect()
}
