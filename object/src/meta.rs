//! Module containing data structures and readers of DICOM file meta information tables.
use dicom_extract_core::{AccessError, DataSet, Tag};
use dicom_extract_dictionary_std::tags;
use dicom_extract_encoding::decode::file_header_decoder;
use dicom_extract_encoding::ElementDecoder;
use dicom_extract_parser::DataSetReader;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use tracing::warn;

/// The size of the preamble preceding the magic code.
pub const PREAMBLE_LEN: usize = 128;

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data: no magic code after the preamble"))]
    NotDicom { backtrace: Backtrace },

    /// An issue occurred while decoding the next data element
    /// in the file meta data set.
    #[snafu(display("Could not decode file meta group element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: dicom_extract_parser::Error,
    },

    /// The value of a file meta data element is not of the expected type.
    #[snafu(display("Bad value for file meta group element {}", tag))]
    BadValue { tag: Tag, source: AccessError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta information table, as
/// specified in [1].
/// All attributes are optional, so that files with an incomplete meta group
/// can still be read.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_7.html
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: Option<u32>,
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID
    pub transfer_syntax: Option<String>,
    /// Implementation Class UID
    pub implementation_class_uid: Option<String>,
    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
}

impl FileMetaTable {
    /// Read the file meta group from the start of a DICOM file,
    /// preamble included.
    ///
    /// Returns the table and the position in `data`
    /// where the main data set starts.
    pub fn from_file_bytes(data: &[u8]) -> Result<(Self, usize)> {
        ensure!(
            data.len() >= PREAMBLE_LEN + DICM_MAGIC_CODE.len()
                && data[PREAMBLE_LEN..PREAMBLE_LEN + 4] == DICM_MAGIC_CODE,
            NotDicomSnafu
        );
        let start = PREAMBLE_LEN + DICM_MAGIC_CODE.len();
        let (table, len) = Self::from_bytes(&data[start..])?;
        Ok((table, start + len))
    }

    /// Read the file meta group
    /// from the bytes following the magic code.
    ///
    /// Elements are read for as long as they belong to group `0002`.
    /// Returns the table and the number of bytes it occupies.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize)> {
        let mut reader =
            DataSetReader::with_decoder(data, ElementDecoder::Explicit(file_header_decoder()));

        let mut elements = Vec::new();
        while let Some(tag) = reader.peek_tag().context(DecodeElementSnafu)? {
            if tag.group() != 0x0002 {
                break;
            }
            if let Some(element) = reader.read_element().context(DecodeElementSnafu)? {
                elements.push(element);
            }
        }
        let len = reader.position();
        let group: DataSet = elements.into_iter().collect();

        let group_length = group
            .int::<u32>(tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .context(BadValueSnafu {
                tag: tags::FILE_META_INFORMATION_GROUP_LENGTH,
            })?;
        if let Some(group_length) = group_length {
            // the group length covers everything after its own element
            if group_length as usize + 12 != len {
                warn!(
                    "File meta group length is {}, but the group spans {} bytes",
                    group_length,
                    len.saturating_sub(12)
                );
            }
        }

        let table = FileMetaTable {
            information_group_length: group_length,
            media_storage_sop_class_uid: read_str(&group, tags::MEDIA_STORAGE_SOP_CLASS_UID)?,
            media_storage_sop_instance_uid: read_str(
                &group,
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            )?,
            transfer_syntax: read_str(&group, tags::TRANSFER_SYNTAX_UID)?,
            implementation_class_uid: read_str(&group, tags::IMPLEMENTATION_CLASS_UID)?,
            implementation_version_name: read_str(&group, tags::IMPLEMENTATION_VERSION_NAME)?,
            source_application_entity_title: read_str(
                &group,
                tags::SOURCE_APPLICATION_ENTITY_TITLE,
            )?,
        };
        Ok((table, len))
    }

    /// The declared transfer syntax UID, without trailing padding.
    pub fn transfer_syntax(&self) -> Option<&str> {
        self.transfer_syntax
            .as_deref()
            .map(|uid| uid.trim_end_matches(|c| c == '\0' || c == ' '))
            .filter(|uid| !uid.is_empty())
    }
}

fn read_str(group: &DataSet, tag: Tag) -> Result<Option<String>> {
    group.string(tag).context(BadValueSnafu { tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const META: &[u8] = &[
        // (0002,0000) UL 4 [42]
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00,
            0x2A, 0x00, 0x00, 0x00,
        // (0002,0001) OB 2 [00 01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x01,
        // (0002,0010) UI 20 "1.2.840.10008.1.2.1\0"
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0',
            b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
        // (0008,0060) CS 2 "CT"
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00,
            b'C', b'T',
    ];

    #[test]
    fn reads_meta_group_up_to_the_data_set() {
        let (table, len) = FileMetaTable::from_bytes(META).unwrap();
        assert_eq!(len, 12 + 14 + 28);
        assert_eq!(table.information_group_length, Some(42));
        assert_eq!(table.transfer_syntax(), Some("1.2.840.10008.1.2.1"));
        assert_eq!(table.media_storage_sop_class_uid, None);
    }

    #[test]
    fn requires_magic_code() {
        let mut file = vec![0; 128];
        file.extend_from_slice(b"DICN");
        file.extend_from_slice(META);
        assert!(matches!(
            FileMetaTable::from_file_bytes(&file),
            Err(Error::NotDicom { .. })
        ));

        file[131] = b'M';
        let (table, start) = FileMetaTable::from_file_bytes(&file).unwrap();
        assert_eq!(start, 132 + 12 + 14 + 28);
        assert!(table.transfer_syntax.is_some());
    }

    #[test]
    fn short_input_is_not_dicom() {
        assert!(matches!(
            FileMetaTable::from_file_bytes(b"DICM"),
            Err(Error::NotDicom { .. })
        ));
    }

    #[test]
    fn truncated_meta_group_fails() {
        assert!(matches!(
            FileMetaTable::from_bytes(&META[..30]),
            Err(Error::DecodeElement { .. })
        ));
    }
}
