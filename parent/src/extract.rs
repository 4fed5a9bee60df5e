//! Extraction of display images from a single DICOM file.

use dicom_extract_core::Tag;
use dicom_extract_dictionary_std::tags;
use dicom_extract_object::FileDicomObject;
use dicom_extract_pixeldata::{DisplayImage, PixelDecoder, WindowLevel};
use snafu::{Report, ResultExt};
use tracing::{debug, warn};

use crate::error::{DecodePixelDataSnafu, ErrorKind, ExtractError, ReadObjectSnafu};

/// Which frames of a multi-frame file are extracted.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FrameSelection {
    /// Every frame becomes its own result.
    #[default]
    All,
    /// Only the first frame is decoded.
    First,
}

/// Options for extracting images.
#[derive(Debug, Default, Clone, PartialEq)]
#[non_exhaustive]
pub struct ExtractOptions {
    /// Window to apply to grayscale images
    /// instead of the one declared by the file.
    pub window: Option<WindowLevel>,
    /// Which frames to extract.
    pub frames: FrameSelection,
    /// Number of worker threads of a batch
    /// (default: one per available core).
    pub threads: Option<usize>,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the window of grayscale images.
    pub fn window(mut self, window: WindowLevel) -> Self {
        self.window = Some(window);
        self
    }

    /// Set which frames to extract.
    pub fn frames(mut self, frames: FrameSelection) -> Self {
        self.frames = frames;
        self
    }

    /// Bound the number of worker threads of a batch.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Attributes of the source file,
/// kept with each extracted image for naming exports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    pub study_date: Option<String>,
    pub sop_instance_uid: Option<String>,
    pub modality: Option<String>,
}

/// The outcome of extracting one image (or failing to)
/// from an input file.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success {
        source_name: String,
        /// index of the frame in the file
        frame: u32,
        metadata: SourceMetadata,
        image: DisplayImage,
    },
    Failure {
        source_name: String,
        kind: ErrorKind,
        message: String,
    },
}

impl ExtractionResult {
    /// The name of the input this result refers to.
    pub fn source_name(&self) -> &str {
        match self {
            ExtractionResult::Success { source_name, .. } => source_name,
            ExtractionResult::Failure { source_name, .. } => source_name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    /// The failure kind, if this is a failure.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The extracted image, if this is a success.
    pub fn image(&self) -> Option<&DisplayImage> {
        match self {
            ExtractionResult::Success { image, .. } => Some(image),
            ExtractionResult::Failure { .. } => None,
        }
    }

    fn failure(source_name: &str, e: ExtractError) -> Self {
        let kind = e.kind();
        let message = Report::from_error(&e).to_string();
        debug!("{}: {} ({})", source_name, message, kind);
        ExtractionResult::Failure {
            source_name: source_name.to_string(),
            kind,
            message,
        }
    }
}

/// Extract the image of the first frame of a DICOM file.
///
/// `bytes` is the full content of the file,
/// starting with the preamble.
pub fn extract(source_name: &str, bytes: &[u8]) -> ExtractionResult {
    let options = ExtractOptions::new().frames(FrameSelection::First);
    extract_frames(source_name, bytes, &options)
        .into_iter()
        .next()
        .unwrap_or_else(|| ExtractionResult::Failure {
            source_name: source_name.to_string(),
            kind: ErrorKind::MissingPixelData,
            message: "No frames in pixel data".to_string(),
        })
}

/// Extract the images of a DICOM file,
/// one result per selected frame,
/// or a single failure.
pub fn extract_frames(
    source_name: &str,
    bytes: &[u8],
    options: &ExtractOptions,
) -> Vec<ExtractionResult> {
    match try_extract(bytes, options) {
        Ok((metadata, images)) => images
            .into_iter()
            .map(|(frame, image)| ExtractionResult::Success {
                source_name: source_name.to_string(),
                frame,
                metadata: metadata.clone(),
                image,
            })
            .collect(),
        Err(e) => vec![ExtractionResult::failure(source_name, e)],
    }
}

fn try_extract(
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<(SourceMetadata, Vec<(u32, DisplayImage)>), ExtractError> {
    let obj = FileDicomObject::from_bytes(bytes).context(ReadObjectSnafu)?;
    let metadata = source_metadata(&obj);

    let pixel_data = match options.frames {
        FrameSelection::All => obj.decode_pixel_data(),
        FrameSelection::First => obj.decode_pixel_data_frame(0),
    }
    .context(DecodePixelDataSnafu)?;

    let first_frame = pixel_data.first_frame();
    let images = pixel_data
        .to_display_images(options.window)
        .context(DecodePixelDataSnafu)?;
    Ok((metadata, (first_frame..).zip(images).collect()))
}

fn source_metadata(obj: &FileDicomObject) -> SourceMetadata {
    let dataset = obj.dataset();
    let get = |tag: Tag, name: &str| match dataset.string(tag) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!("Ignoring {}: {}", name, e);
            None
        }
    };
    SourceMetadata {
        study_date: get(tags::STUDY_DATE, "Study Date"),
        sop_instance_uid: get(tags::SOP_INSTANCE_UID, "SOP Instance UID"),
        modality: get(tags::MODALITY, "Modality"),
    }
}
