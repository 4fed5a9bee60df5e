//! Core module for building pixel data adapters.
//!
//! Transfer syntaxes which define an encapsulated pixel data encoding
//! provide an implementation of [`PixelDataReader`]
//! to turn the compressed stream of one frame
//! into native pixel data.

use snafu::Snafu;

/// The possible error conditions when decoding (reading) pixel data.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
///
/// When no suitable variant is available,
/// the [`Custom`](DecodeError::Custom) variant may be used.
/// See also [`snafu`] for guidance on using context selectors.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum DecodeError {
    /// A custom error occurred when decoding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The frame was decoded to an image of a different shape
    /// than the one declared by the data set.
    #[snafu(display(
        "Decoded frame is {}x{} with {} samples, expected {}x{} with {}",
        columns, rows, samples, expected.columns, expected.rows, expected.samples_per_pixel
    ))]
    ShapeMismatch {
        /// decoded number of columns
        columns: u32,
        /// decoded number of rows
        rows: u32,
        /// decoded number of samples per pixel
        samples: u16,
        /// the declared frame properties
        expected: FrameInfo,
    },

    /// The encoded frame uses a sample depth that the codec cannot produce.
    #[snafu(display("Unsupported bits allocated {} for this codec", bits_allocated))]
    UnsupportedBitsAllocated {
        /// the declared bits allocated
        bits_allocated: u16,
    },
}

/// The result of decoding (reading) pixel data
pub type DecodeResult<T, E = DecodeError> = Result<T, E>;

/// The image properties of a single frame,
/// as declared by the data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Number of rows
    pub rows: u16,
    /// Number of columns
    pub columns: u16,
    /// Samples per pixel (1 or 3)
    pub samples_per_pixel: u16,
    /// Bits allocated per sample (8, 16 or 32)
    pub bits_allocated: u16,
}

impl FrameInfo {
    /// The number of pixels in the frame.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// The size of one sample in bytes.
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_allocated / 8)
    }

    /// The size of the frame in native form, in bytes.
    pub fn frame_len(&self) -> usize {
        self.pixel_count() * usize::from(self.samples_per_pixel) * self.bytes_per_sample()
    }
}

/// Trait object responsible for decoding
/// pixel data of one specific encapsulated codec.
///
/// Implementations are stateless and shared by all threads.
pub trait PixelDataReader: Send + Sync {
    /// Decode the compressed stream of a single frame
    /// into native pixel data as a byte stream in little endian,
    /// appending exactly [`FrameInfo::frame_len`] bytes to `dst`.
    ///
    /// `frame_data` holds the concatenation of all fragments of the frame.
    /// Samples must be emitted with each pixel contiguous in memory
    /// (planar configuration of 0).
    fn decode_frame(&self, info: &FrameInfo, frame_data: &[u8], dst: &mut Vec<u8>)
        -> DecodeResult<()>;

    /// Whether color frames come out of this decoder as RGB,
    /// regardless of the photometric interpretation declared by the data set.
    fn emits_rgb(&self) -> bool {
        false
    }
}
