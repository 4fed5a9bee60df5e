//! This crate contains the DICOM pixel data handlers and is
//! responsible for decoding pixel data,
//! compressed or not,
//! into a [`SampleBuffer`] of native sample values,
//! and for normalizing those into 8-bit [`DisplayImage`]s.
//!
//! Encapsulated pixel data is decoded by the reader
//! registered with the transfer syntax
//! (see `dicom-extract-transfer-syntax-registry`).
//!
//! # Examples
//!
//! ```no_run
//! # use std::error::Error;
//! use dicom_extract_object::FileDicomObject;
//! use dicom_extract_pixeldata::PixelDecoder;
//!
//! # fn run(bytes: &[u8]) -> Result<(), Box<dyn Error>> {
//! let obj = FileDicomObject::from_bytes(bytes)?;
//! let pixel_data = obj.decode_pixel_data()?;
//! for image in pixel_data.to_display_images(None)? {
//!     println!("{}x{} with {} channel(s)", image.width, image.height, image.channels);
//! }
//! #   Ok(())
//! # }
//! ```
//!
//! With the `image` feature,
//! display images can be turned into an [`image::DynamicImage`].
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications)]

use dicom_extract_object::FileDicomObject;
use snafu::{Backtrace, OptionExt, Snafu};
use tracing::warn;
#[cfg(feature = "image")]
use image::{DynamicImage, ImageBuffer, Luma, Rgb};

pub mod attribute;
mod decode;
mod normalize;
mod samples;
mod transform;

pub use attribute::{PhotometricInterpretation, PixelDescriptor, PixelRepresentation};
pub use decode::{decode_pixel_data, decode_pixel_data_frame};
pub use normalize::DisplayImage;
pub use samples::{SampleBuffer, Samples};
pub use transform::{Rescale, VoiLutFunction, WindowLevel, WindowLevelTransform};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Invalid pixel data attributes"))]
    InvalidAttribute {
        #[snafu(backtrace)]
        source: attribute::GetAttributeError,
    },

    #[snafu(display("Missing pixel data"))]
    MissingPixelData { backtrace: Backtrace },

    #[snafu(display("Invalid pixel data: {}", reason))]
    InvalidPixelData {
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Pixel data holds {} bytes, expected at least {}", got, expected))]
    PixelDataTooShort {
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Unsupported pixel data codec of transfer syntax {}", ts))]
    UnsupportedCodec { ts: String, backtrace: Backtrace },

    #[snafu(display("Could not gather the fragments of frame #{}: {}", frame, reason))]
    MissingFragments {
        frame: u32,
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not decode frame #{}", frame))]
    DecodeFrame {
        frame: u32,
        source: dicom_extract_encoding::DecodeError,
        backtrace: Backtrace,
    },

    #[snafu(display("Frame #{} is out of range ({} frames)", frame, frames))]
    FrameOutOfRange {
        frame: u32,
        frames: u32,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid buffer when constructing ImageBuffer"))]
    InvalidImageBuffer { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Decoded pixel data of one or more frames,
/// along with the attributes needed to display them.
#[derive(Debug, Clone)]
pub struct DecodedPixelData {
    descriptor: PixelDescriptor,
    samples: SampleBuffer,
    first_frame: u32,
    rescale: Rescale,
    window: Option<WindowLevel>,
    voi_lut_function: VoiLutFunction,
    /// whether color samples are already in RGB
    rgb: bool,
}

impl DecodedPixelData {
    /// The image pixel properties declared by the data set.
    pub fn descriptor(&self) -> &PixelDescriptor {
        &self.descriptor
    }

    /// The native sample values of the decoded frames.
    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// The index in the data set of the first decoded frame.
    pub fn first_frame(&self) -> u32 {
        self.first_frame
    }

    /// The number of decoded frames.
    pub fn number_of_frames(&self) -> u32 {
        self.samples.number_of_frames()
    }

    pub fn rescale(&self) -> Rescale {
        self.rescale
    }

    /// The first window declared by the data set,
    /// if it has a positive width.
    pub fn window(&self) -> Option<WindowLevel> {
        self.window
    }

    pub fn voi_lut_function(&self) -> VoiLutFunction {
        self.voi_lut_function
    }

    /// Normalize one decoded frame into an 8-bit image.
    ///
    /// `frame` counts from the first decoded frame.
    /// Grayscale samples go through the modality rescale
    /// and the `window` given (if its width is positive),
    /// or else the window declared by the data set,
    /// or else a stretch of the frame's observed range.
    /// Color samples are converted to RGB.
    pub fn to_display_image(&self, frame: u32, window: Option<WindowLevel>) -> Result<DisplayImage> {
        let samples = self
            .samples
            .frame_f64(frame)
            .context(FrameOutOfRangeSnafu {
                frame,
                frames: self.number_of_frames(),
            })?;

        let descriptor = &self.descriptor;
        let (channels, data) = if descriptor.samples_per_pixel == 3 {
            let data = normalize::color(
                &samples,
                descriptor.bits_stored,
                &descriptor.photometric_interpretation,
                self.rgb,
            );
            (3, data)
        } else {
            let invert = match &descriptor.photometric_interpretation {
                PhotometricInterpretation::Monochrome1 => true,
                PhotometricInterpretation::Monochrome2 => false,
                pi => {
                    warn!(
                        "Unsupported grayscale photometric interpretation {}, assuming MONOCHROME2",
                        pi
                    );
                    false
                }
            };
            let transform = match window.filter(|w| w.width > 0.) {
                Some(window) => Some(WindowLevelTransform::linear_exact(window)),
                None => self
                    .window
                    .map(|window| WindowLevelTransform::new(self.voi_lut_function, window)),
            };
            (
                1,
                normalize::monochrome(&samples, self.rescale, transform, invert),
            )
        };

        Ok(DisplayImage {
            width: u32::from(descriptor.columns),
            height: u32::from(descriptor.rows),
            channels,
            data,
        })
    }

    /// Normalize every decoded frame into an 8-bit image.
    pub fn to_display_images(&self, window: Option<WindowLevel>) -> Result<Vec<DisplayImage>> {
        (0..self.number_of_frames())
            .map(|frame| self.to_display_image(frame, window))
            .collect()
    }
}

#[cfg(feature = "image")]
impl DisplayImage {
    /// Convert the display image into a [`DynamicImage`],
    /// 8-bit grayscale or RGB.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        if self.channels == 3 {
            let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
                ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                    .context(InvalidImageBufferSnafu)?;
            Ok(DynamicImage::ImageRgb8(buffer))
        } else {
            let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
                ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                    .context(InvalidImageBufferSnafu)?;
            Ok(DynamicImage::ImageLuma8(buffer))
        }
    }
}

/// Trait for objects which may hold encoded pixel data.
pub trait PixelDecoder {
    /// Decode every frame of pixel data.
    fn decode_pixel_data(&self) -> Result<DecodedPixelData>;

    /// Decode a single frame of pixel data,
    /// counting from 0.
    fn decode_pixel_data_frame(&self, frame: u32) -> Result<DecodedPixelData>;
}

impl PixelDecoder for FileDicomObject {
    fn decode_pixel_data(&self) -> Result<DecodedPixelData> {
        decode_pixel_data(self.dataset(), self.transfer_syntax())
    }

    fn decode_pixel_data_frame(&self, frame: u32) -> Result<DecodedPixelData> {
        decode_pixel_data_frame(self.dataset(), self.transfer_syntax(), frame)
    }
}
