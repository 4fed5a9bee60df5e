//! Support for JPEG image decoding,
//! covering the baseline, extended and lossless processes.

use dicom_extract_encoding::adapters::{
    decode_error, DecodeResult, FrameInfo, PixelDataReader,
};
use dicom_extract_encoding::snafu::prelude::*;
use jpeg_decoder::{Decoder, PixelFormat};
use tracing::warn;

/// Pixel data adapter for JPEG-based transfer syntaxes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JpegAdapter;

impl PixelDataReader for JpegAdapter {
    /// Decode a single JPEG frame.
    ///
    /// Color frames are converted to RGB by the decoder.
    fn decode_frame(
        &self,
        info: &FrameInfo,
        frame_data: &[u8],
        dst: &mut Vec<u8>,
    ) -> DecodeResult<()> {
        ensure!(
            info.bits_allocated == 8 || info.bits_allocated == 16,
            decode_error::UnsupportedBitsAllocatedSnafu {
                bits_allocated: info.bits_allocated
            }
        );

        let mut decoder = Decoder::new(frame_data);
        decoder
            .read_info()
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG decoder failure")?;
        let image_info = decoder
            .info()
            .whatever_context("JPEG decoder provided no image info")?;

        let samples: u16 = match image_info.pixel_format {
            PixelFormat::L8 | PixelFormat::L16 => 1,
            PixelFormat::RGB24 => 3,
            PixelFormat::CMYK32 => 4,
        };
        // shape is checked before the frame is decoded
        ensure!(
            image_info.width == info.columns
                && image_info.height == info.rows
                && samples == info.samples_per_pixel,
            decode_error::ShapeMismatchSnafu {
                columns: u32::from(image_info.width),
                rows: u32::from(image_info.height),
                samples,
                expected: *info,
            }
        );

        let decoded = decoder
            .decode()
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG decoder failure")?;

        let base_offset = dst.len();
        write_samples(image_info.pixel_format, info.bits_allocated, &decoded, dst)?;

        let written = dst.len() - base_offset;
        ensure_whatever!(
            written == info.frame_len(),
            "JPEG frame decoded to {} bytes, expected {}",
            written,
            info.frame_len()
        );
        Ok(())
    }

    fn emits_rgb(&self) -> bool {
        true
    }
}

/// Append decoded samples to `dst` in little endian.
fn write_samples(
    pixel_format: PixelFormat,
    bits_allocated: u16,
    decoded: &[u8],
    dst: &mut Vec<u8>,
) -> DecodeResult<()> {
    match (pixel_format, bits_allocated) {
        (PixelFormat::L16, 16) => {
            // 16-bit samples come out in big endian
            dst.reserve(decoded.len());
            for chunk in decoded.chunks_exact(2) {
                dst.extend_from_slice(&[chunk[1], chunk[0]]);
            }
        }
        (PixelFormat::L8, 16) | (PixelFormat::RGB24, 16) => {
            warn!("8-bit JPEG stream in 16-bit pixel data, widening samples");
            dst.reserve(decoded.len() * 2);
            for &b in decoded {
                dst.extend_from_slice(&[b, 0]);
            }
        }
        (PixelFormat::L8, 8) | (PixelFormat::RGB24, 8) => {
            dst.extend_from_slice(decoded);
        }
        (_, bits_allocated) => {
            return decode_error::UnsupportedBitsAllocatedSnafu { bits_allocated }.fail();
        }
    }
    Ok(())
}
