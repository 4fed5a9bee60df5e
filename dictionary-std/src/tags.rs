//! Constants for attribute tags used by the extraction pipeline,
//! and the table of dictionary entries backing the standard dictionary.

use dicom_extract_core::dictionary::DictionaryEntry;
use dicom_extract_core::header::Tag;
use dicom_extract_core::VR::*;

/// FileMetaInformationGroupLength (0002,0000) UL
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// PrivateInformationCreatorUID (0002,0100) UI
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// FileSetID (0004,1130) CS
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity (0004,1200) UL
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity (0004,1202) UL
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// FileSetConsistencyFlag (0004,1212) US
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// DirectoryRecordSequence (0004,1220) SQ
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// OffsetOfTheNextDirectoryRecord (0004,1400) UL
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// RecordInUseFlag (0004,1410) US
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// OffsetOfReferencedLowerLevelDirectoryEntity (0004,1420) UL
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// DirectoryRecordType (0004,1430) CS
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// ReferencedFileID (0004,1500) CS
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// ReferencedSOPClassUIDInFile (0004,1510) UI
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// ReferencedTransferSyntaxUIDInFile (0004,1512) UI
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// SpecificCharacterSet (0008,0005) CS
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// StudyTime (0008,0030) TM
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType (0008,0064) CS
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StationName (0008,1010) SH
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// ManufacturerModelName (0008,1090) LO
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedStudySequence (0008,1110) SQ
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedSeriesSequence (0008,1115) SQ
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// SourceImageSequence (0008,2112) SQ
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// AnatomicRegionSequence (0008,2218) SQ
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// DerivationCodeSequence (0008,9215) SQ
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientWeight (0010,1030) DS
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// BodyPartExamined (0018,0015) CS
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ImagerPixelSpacing (0018,1164) DS
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// PatientPosition (0018,5100) CS
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ViewPosition (0018,5101) CS
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// StudyInstanceUID (0020,000D) UI
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// SliceLocation (0020,1041) DS
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// DimensionIndexSequence (0020,9222) SQ
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// SamplesPerPixel (0028,0002) US
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// PixelPaddingValue (0028,0120) US
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// BurnedInAnnotation (0028,0301) CS
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// WindowCenter (0028,1050) DS
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// WindowCenterWidthExplanation (0028,1055) LO
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOILUTFunction (0028,1056) CS
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// LossyImageCompression (0028,2110) CS
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// ModalityLUTSequence (0028,3000) SQ
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// VOILUTSequence (0028,3010) SQ
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// FrameVOILUTSequence (0028,9132) SQ
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// PixelValueTransformationSequence (0028,9145) SQ
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// RequestAttributesSequence (0040,0275) SQ
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// ConceptNameCodeSequence (0040,A043) SQ
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// ContentSequence (0040,A730) SQ
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// FloatPixelData (7FE0,0008) OF
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OW
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DataSetTrailingPadding (FFFC,FFFC) OB
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);

/// Overlay Data (60xx,3000) OW, with the `xx` portion zeroed.
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// Overlay Rows (60xx,0010) US, with the `xx` portion zeroed.
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns (60xx,0011) US, with the `xx` portion zeroed.
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Overlay Bits Allocated (60xx,0100) US, with the `xx` portion zeroed.
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);

type E = DictionaryEntry;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: UL },
    E { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: OB },
    E { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: UI },
    E { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: UI },
    E { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: UI },
    E { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: UI },
    E { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: SH },
    E { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: AE },
    E { tag: PRIVATE_INFORMATION_CREATOR_UID, alias: "PrivateInformationCreatorUID", vr: UI },
    E { tag: PRIVATE_INFORMATION, alias: "PrivateInformation", vr: OB },
    E { tag: FILE_SET_ID, alias: "FileSetID", vr: CS },
    E { tag: OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: UL },
    E { tag: OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: UL },
    E { tag: FILE_SET_CONSISTENCY_FLAG, alias: "FileSetConsistencyFlag", vr: US },
    E { tag: DIRECTORY_RECORD_SEQUENCE, alias: "DirectoryRecordSequence", vr: SQ },
    E { tag: OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, alias: "OffsetOfTheNextDirectoryRecord", vr: UL },
    E { tag: RECORD_IN_USE_FLAG, alias: "RecordInUseFlag", vr: US },
    E { tag: OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY, alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: UL },
    E { tag: DIRECTORY_RECORD_TYPE, alias: "DirectoryRecordType", vr: CS },
    E { tag: REFERENCED_FILE_ID, alias: "ReferencedFileID", vr: CS },
    E { tag: REFERENCED_SOP_CLASS_UID_IN_FILE, alias: "ReferencedSOPClassUIDInFile", vr: UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID_IN_FILE, alias: "ReferencedSOPInstanceUIDInFile", vr: UI },
    E { tag: REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE, alias: "ReferencedTransferSyntaxUIDInFile", vr: UI },
    E { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: CS },
    E { tag: IMAGE_TYPE, alias: "ImageType", vr: CS },
    E { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: DA },
    E { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: TM },
    E { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: UI },
    E { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: UI },
    E { tag: STUDY_DATE, alias: "StudyDate", vr: DA },
    E { tag: SERIES_DATE, alias: "SeriesDate", vr: DA },
    E { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: DA },
    E { tag: CONTENT_DATE, alias: "ContentDate", vr: DA },
    E { tag: STUDY_TIME, alias: "StudyTime", vr: TM },
    E { tag: SERIES_TIME, alias: "SeriesTime", vr: TM },
    E { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: TM },
    E { tag: CONTENT_TIME, alias: "ContentTime", vr: TM },
    E { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: SH },
    E { tag: MODALITY, alias: "Modality", vr: CS },
    E { tag: CONVERSION_TYPE, alias: "ConversionType", vr: CS },
    E { tag: MANUFACTURER, alias: "Manufacturer", vr: LO },
    E { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: LO },
    E { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: PN },
    E { tag: CODE_VALUE, alias: "CodeValue", vr: SH },
    E { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: SH },
    E { tag: CODE_MEANING, alias: "CodeMeaning", vr: LO },
    E { tag: STATION_NAME, alias: "StationName", vr: SH },
    E { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: LO },
    E { tag: PROCEDURE_CODE_SEQUENCE, alias: "ProcedureCodeSequence", vr: SQ },
    E { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: LO },
    E { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: LO },
    E { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: SQ },
    E { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: SQ },
    E { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: SQ },
    E { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: UI },
    E { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: UI },
    E { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: SQ },
    E { tag: ANATOMIC_REGION_SEQUENCE, alias: "AnatomicRegionSequence", vr: SQ },
    E { tag: DERIVATION_CODE_SEQUENCE, alias: "DerivationCodeSequence", vr: SQ },
    E { tag: PATIENT_NAME, alias: "PatientName", vr: PN },
    E { tag: PATIENT_ID, alias: "PatientID", vr: LO },
    E { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: DA },
    E { tag: PATIENT_SEX, alias: "PatientSex", vr: CS },
    E { tag: PATIENT_AGE, alias: "PatientAge", vr: AS },
    E { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: DS },
    E { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: CS },
    E { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: DS },
    E { tag: KVP, alias: "KVP", vr: DS },
    E { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: DS },
    E { tag: DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: LO },
    E { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: LO },
    E { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: LO },
    E { tag: EXPOSURE_TIME, alias: "ExposureTime", vr: IS },
    E { tag: X_RAY_TUBE_CURRENT, alias: "XRayTubeCurrent", vr: IS },
    E { tag: EXPOSURE, alias: "Exposure", vr: IS },
    E { tag: IMAGER_PIXEL_SPACING, alias: "ImagerPixelSpacing", vr: DS },
    E { tag: PATIENT_POSITION, alias: "PatientPosition", vr: CS },
    E { tag: VIEW_POSITION, alias: "ViewPosition", vr: CS },
    E { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: UI },
    E { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: UI },
    E { tag: STUDY_ID, alias: "StudyID", vr: SH },
    E { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: IS },
    E { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: IS },
    E { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: IS },
    E { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: CS },
    E { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: DS },
    E { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: DS },
    E { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: UI },
    E { tag: LATERALITY, alias: "Laterality", vr: CS },
    E { tag: SLICE_LOCATION, alias: "SliceLocation", vr: DS },
    E { tag: DIMENSION_INDEX_SEQUENCE, alias: "DimensionIndexSequence", vr: SQ },
    E { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: US },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: CS },
    E { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: US },
    E { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: IS },
    E { tag: FRAME_INCREMENT_POINTER, alias: "FrameIncrementPointer", vr: AT },
    E { tag: ROWS, alias: "Rows", vr: US },
    E { tag: COLUMNS, alias: "Columns", vr: US },
    E { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: DS },
    E { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: US },
    E { tag: BITS_STORED, alias: "BitsStored", vr: US },
    E { tag: HIGH_BIT, alias: "HighBit", vr: US },
    E { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: US },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: US },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: US },
    E { tag: PIXEL_PADDING_VALUE, alias: "PixelPaddingValue", vr: US },
    E { tag: BURNED_IN_ANNOTATION, alias: "BurnedInAnnotation", vr: CS },
    E { tag: WINDOW_CENTER, alias: "WindowCenter", vr: DS },
    E { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: DS },
    E { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: DS },
    E { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: DS },
    E { tag: RESCALE_TYPE, alias: "RescaleType", vr: LO },
    E { tag: WINDOW_CENTER_WIDTH_EXPLANATION, alias: "WindowCenterWidthExplanation", vr: LO },
    E { tag: VOILUT_FUNCTION, alias: "VOILUTFunction", vr: CS },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: CS },
    E { tag: LOSSY_IMAGE_COMPRESSION_RATIO, alias: "LossyImageCompressionRatio", vr: DS },
    E { tag: MODALITY_LUT_SEQUENCE, alias: "ModalityLUTSequence", vr: SQ },
    E { tag: VOILUT_SEQUENCE, alias: "VOILUTSequence", vr: SQ },
    E { tag: FRAME_VOILUT_SEQUENCE, alias: "FrameVOILUTSequence", vr: SQ },
    E { tag: PIXEL_VALUE_TRANSFORMATION_SEQUENCE, alias: "PixelValueTransformationSequence", vr: SQ },
    E { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: SQ },
    E { tag: CONCEPT_NAME_CODE_SEQUENCE, alias: "ConceptNameCodeSequence", vr: SQ },
    E { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: SQ },
    E { tag: SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: SQ },
    E { tag: PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: SQ },
    E { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: OF },
    E { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: OD },
    E { tag: PIXEL_DATA, alias: "PixelData", vr: OW },
    E { tag: DATA_SET_TRAILING_PADDING, alias: "DataSetTrailingPadding", vr: OB },
];

/// Entries of repeating groups `(60xx,eeee)`, keyed with `xx` zeroed.
#[rustfmt::skip]
pub(crate) const REPEATING_GROUP_ENTRIES: &[E] = &[
    E { tag: OVERLAY_ROWS, alias: "OverlayRows", vr: US },
    E { tag: OVERLAY_COLUMNS, alias: "OverlayColumns", vr: US },
    E { tag: OVERLAY_BITS_ALLOCATED, alias: "OverlayBitsAllocated", vr: US },
    E { tag: OVERLAY_DATA, alias: "OverlayData", vr: OW },
];
