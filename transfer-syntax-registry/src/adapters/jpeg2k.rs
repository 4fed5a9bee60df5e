//! Support for JPEG 2000 image decoding.

use dicom_extract_encoding::adapters::{
    decode_error, DecodeResult, FrameInfo, PixelDataReader,
};
use dicom_extract_encoding::snafu::prelude::*;
use jpeg2k::Image;
use tracing::warn;

// Check jpeg2k backend conflicts
#[cfg(all(feature = "openjp2", feature = "openjpeg-sys"))]
compile_error!(
    "feature \"openjp2\" and feature \"openjpeg-sys\" cannot be enabled at the same time"
);

/// Pixel data adapter for transfer syntaxes based on JPEG 2000.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jpeg2000Adapter;

impl PixelDataReader for Jpeg2000Adapter {
    /// Decode a single frame in JPEG 2000.
    ///
    /// Components are written as they are stored,
    /// so a YBR_ICT or YBR_RCT frame is emitted in RGB.
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

        let image = Image::from_bytes(frame_data)
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("jpeg2k decoder failure")?;

        // Note: `get_pixels` would narrow the data down to 8 bits per sample
        let components = image.components();
        let samples_per_pixel = usize::from(info.samples_per_pixel);
        ensure!(
            components.len() >= samples_per_pixel
                && image.width() == u32::from(info.columns)
                && image.height() == u32::from(info.rows),
            decode_error::ShapeMismatchSnafu {
                columns: image.width(),
                rows: image.height(),
                samples: components.len() as u16,
                expected: *info,
            }
        );
        if components.len() > samples_per_pixel {
            warn!(
                "JPEG 2000 image has more components than expected ({} > {})",
                components.len(),
                samples_per_pixel
            );
        }

        let bytes_per_sample = info.bytes_per_sample();
        let base_offset = dst.len();
        dst.resize(base_offset + info.frame_len(), 0);

        // write each component into the destination buffer, interleaved
        for (component_i, component) in components.iter().take(samples_per_pixel).enumerate() {
            let data = component.data();
            ensure_whatever!(
                data.len() >= info.pixel_count(),
                "JPEG 2000 component #{} is subsampled",
                component_i
            );
            for (i, sample) in data.iter().take(info.pixel_count()).enumerate() {
                let offset = base_offset
                    + i * samples_per_pixel * bytes_per_sample
                    + component_i * bytes_per_sample;
                dst[offset..offset + bytes_per_sample]
                    .copy_from_slice(&sample.to_le_bytes()[..bytes_per_sample]);
            }
        }

        Ok(())
    }

    fn emits_rgb(&self) -> bool {
        true
    }
}
