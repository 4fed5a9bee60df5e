//! Conversion of decoded sample values into 8-bit display pixels.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::warn;

use crate::attribute::PhotometricInterpretation;
use crate::transform::{Rescale, WindowLevel, WindowLevelTransform};

/// An 8-bit raster image ready for display or export.
///
/// Pixels are stored row by row,
/// with the samples of each pixel contiguous (`RGB RGB …` for color).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    pub width: u32,
    pub height: u32,
    /// 1 for grayscale, 3 for RGB
    pub channels: u8,
    pub data: Vec<u8>,
}

impl DisplayImage {
    /// The value of channel `channel` of the pixel at (`x`, `y`).
    pub fn get(&self, x: u32, y: u32, channel: u8) -> Option<u8> {
        if x >= self.width || y >= self.height || channel >= self.channels {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * usize::from(self.channels)
            + usize::from(channel);
        self.data.get(index).copied()
    }
}

/// Map grayscale samples to display levels:
/// modality rescale, then the VOI window,
/// then inversion for MONOCHROME1.
///
/// Without a window, the observed range of rescaled values
/// is stretched over the whole output range.
pub(crate) fn monochrome(
    samples: &[f64],
    rescale: Rescale,
    window: Option<WindowLevelTransform>,
    invert: bool,
) -> Vec<u8> {
    #[cfg(feature = "rayon")]
    let rescaled: Vec<f64> = samples.par_iter().map(|x| rescale.apply(*x)).collect();
    #[cfg(not(feature = "rayon"))]
    let rescaled: Vec<f64> = samples.iter().map(|x| rescale.apply(*x)).collect();

    let transform = match window {
        Some(transform) => transform,
        None => {
            let (min, max) = rescaled
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), x| {
                    (min.min(*x), max.max(*x))
                });
            if !(max > min) {
                let level = if invert { 255 } else { 0 };
                return vec![level; rescaled.len()];
            }
            WindowLevelTransform::linear_exact(WindowLevel::from_range(min, max))
        }
    };

    #[cfg(feature = "rayon")]
    let iter = rescaled.par_iter();
    #[cfg(not(feature = "rayon"))]
    let iter = rescaled.iter();

    iter.map(|x| {
        let y = transform.apply_u8(*x);
        if invert {
            255 - y
        } else {
            y
        }
    })
    .collect()
}

/// Map color samples to 8-bit RGB.
///
/// YCbCr samples are converted to RGB unless `rgb` is set,
/// which means that the codec already emitted RGB.
pub(crate) fn color(
    samples: &[f64],
    bits_stored: u16,
    photometric_interpretation: &PhotometricInterpretation,
    rgb: bool,
) -> Vec<u8> {
    let max = ((1_u64 << bits_stored.min(32)) - 1) as f64;

    if rgb
        || !photometric_interpretation.is_ybr()
        || matches!(
            photometric_interpretation,
            PhotometricInterpretation::YbrIct | PhotometricInterpretation::YbrRct
        )
    {
        if !rgb && !photometric_interpretation.is_ybr() {
            warn!(
                "Unsupported color photometric interpretation {}, assuming RGB",
                photometric_interpretation
            );
        }
        if bits_stored == 8 {
            return samples.iter().map(|x| x.clamp(0., 255.) as u8).collect();
        }
        return samples.iter().map(|x| to_level(*x / max)).collect();
    }

    let partial = photometric_interpretation.is_partial_range();
    // chroma is centered on half of the sample range
    let scale = (max + 1.) / 256.;
    let mut out = Vec::with_capacity(samples.len());
    for pixel in samples.chunks_exact(3) {
        let (y, cb, cr) = if partial {
            (
                (pixel[0] - 16. * scale) / (219. * scale),
                (pixel[1] - 128. * scale) / (224. * scale),
                (pixel[2] - 128. * scale) / (224. * scale),
            )
        } else {
            (
                pixel[0] / max,
                (pixel[1] - 128. * scale) / max,
                (pixel[2] - 128. * scale) / max,
            )
        };
        let [r, g, b] = ybr_to_rgb(y, cb, cr);
        out.extend([to_level(r), to_level(g), to_level(b)]);
    }
    out
}

/// Convert a YCbCr color to RGB.
/// Luma and RGB are between 0 and 1,
/// chroma is centered on 0.
#[inline]
fn ybr_to_rgb(y: f64, cb: f64, cr: f64) -> [f64; 3] {
    [
        y + 1.402 * cr,
        y - 0.344_136_286_2 * cb - 0.714_136_286_2 * cr,
        y + 1.772 * cb,
    ]
}

#[inline]
fn to_level(value: f64) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn stretches_observed_range_without_window() {
        let out = monochrome(&[0., 50., 100.], Rescale::default(), None, false);
        assert_eq!(out, vec![0, 128, 255]);
    }

    #[test]
    fn constant_frame_maps_to_black() {
        assert_eq!(
            monochrome(&[7., 7., 7.], Rescale::default(), None, false),
            vec![0, 0, 0]
        );
        assert_eq!(
            monochrome(&[7., 7.], Rescale::default(), None, true),
            vec![255, 255]
        );
    }

    #[test]
    fn rescale_precedes_window() {
        let window = WindowLevelTransform::linear_exact(WindowLevel {
            width: 100.,
            center: 0.,
        });
        // -1024 + 974 = -50, -1024 + 1074 = 50
        let out = monochrome(
            &[974., 1024., 1074., 3000.],
            Rescale::new(1., -1024.),
            Some(window),
            false,
        );
        assert_eq!(out, vec![0, 128, 255, 255]);
    }

    #[rstest]
    #[case(&[0., 13., 200., 4095.], None)]
    #[case(&[-40., 0., 40., 90.], Some(WindowLevel { width: 80., center: 0. }))]
    fn monochrome1_is_the_inverse(#[case] samples: &[f64], #[case] window: Option<WindowLevel>) {
        let window = window.map(WindowLevelTransform::linear_exact);
        let normal = monochrome(samples, Rescale::default(), window, false);
        let inverted = monochrome(samples, Rescale::default(), window, true);
        for (a, b) in normal.iter().zip(&inverted) {
            assert_eq!(*b, 255 - *a);
        }
    }

    #[test]
    fn rgb_passes_through() {
        let samples = [0., 128., 255., 10., 20., 30.];
        assert_eq!(
            color(&samples, 8, &PhotometricInterpretation::Rgb, false),
            vec![0, 128, 255, 10, 20, 30]
        );
    }

    #[test]
    fn rgb_16_bit_is_scaled() {
        let samples = [0., 65535., 32767.5];
        assert_eq!(
            color(&samples, 16, &PhotometricInterpretation::Rgb, false),
            vec![0, 255, 128]
        );
    }

    #[rstest]
    #[case([128., 128., 128.], [128, 128, 128])]
    #[case([255., 128., 128.], [255, 255, 255])]
    #[case([76., 85., 255.], [254, 0, 0])]
    #[case([0., 128., 128.], [0, 0, 0])]
    fn ybr_full_is_converted(#[case] ybr: [f64; 3], #[case] rgb: [u8; 3]) {
        assert_eq!(
            color(&ybr, 8, &PhotometricInterpretation::YbrFull, false),
            rgb.to_vec()
        );
    }

    #[test]
    fn ybr_from_rgb_emitting_codec_is_kept() {
        let samples = [76., 85., 255.];
        assert_eq!(
            color(&samples, 8, &PhotometricInterpretation::YbrFull422, true),
            vec![76, 85, 255]
        );
    }

    #[test]
    fn ybr_partial_reaches_full_range() {
        let out = color(
            &[16., 128., 128., 235., 128., 128.],
            8,
            &PhotometricInterpretation::YbrPartial420,
            false,
        );
        assert_eq!(out, vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn display_image_lookup() {
        let image = DisplayImage {
            width: 2,
            height: 1,
            channels: 3,
            data: vec![1, 2, 3, 4, 5, 6],
        };
        assert_eq!(image.get(1, 0, 2), Some(6));
        assert_eq!(image.get(2, 0, 0), None);
        assert_eq!(image.get(0, 0, 3), None);
    }
}
