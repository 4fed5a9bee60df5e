//! Dense buffers of decoded sample values.

use byteorder::{ByteOrder, LittleEndian};

use crate::attribute::{PixelDescriptor, PixelRepresentation};

/// Sample values in their native numeric type.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::I8(v) => v.len(),
            Samples::U16(v) => v.len(),
            Samples::I16(v) => v.len(),
            Samples::U32(v) => v.len(),
            Samples::I32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the samples in `range` into a vector of floats.
    pub fn to_f64(&self, range: std::ops::Range<usize>) -> Vec<f64> {
        match self {
            Samples::U8(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
            Samples::I8(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
            Samples::U16(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
            Samples::I16(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
            Samples::U32(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
            Samples::I32(v) => v[range].iter().map(|x| f64::from(*x)).collect(),
        }
    }
}

/// A dense array of decoded sample values
/// of shape `[frame][row][column][sample]`.
///
/// Values keep the bit depth and signedness
/// declared by the data set.
/// Bits above _Bits Stored_ are discarded,
/// and signed values are sign extended from the highest stored bit.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    frames: u32,
    rows: u16,
    columns: u16,
    samples_per_pixel: u16,
    samples: Samples,
}

impl SampleBuffer {
    /// Build a sample buffer out of native pixel data
    /// in little endian with interleaved samples,
    /// holding `frames` frames described by `descriptor`.
    pub(crate) fn from_le_bytes(descriptor: &PixelDescriptor, frames: u32, data: &[u8]) -> Self {
        let signed = descriptor.pixel_representation == PixelRepresentation::Signed;
        let bits_stored = u32::from(descriptor.bits_stored);
        let samples = match (descriptor.bits_allocated, signed) {
            (8, false) => Samples::U8(
                data.iter()
                    .map(|x| mask(u32::from(*x), bits_stored) as u8)
                    .collect(),
            ),
            (8, true) => Samples::I8(
                data.iter()
                    .map(|x| sign_extend(u32::from(*x), bits_stored) as i8)
                    .collect(),
            ),
            (16, false) => {
                let mut out = vec![0; data.len() / 2];
                LittleEndian::read_u16_into(&data[..out.len() * 2], &mut out);
                out.iter_mut()
                    .for_each(|x| *x = mask(u32::from(*x), bits_stored) as u16);
                Samples::U16(out)
            }
            (16, true) => {
                let mut out = vec![0; data.len() / 2];
                LittleEndian::read_u16_into(&data[..out.len() * 2], &mut out);
                Samples::I16(
                    out.into_iter()
                        .map(|x| sign_extend(u32::from(x), bits_stored) as i16)
                        .collect(),
                )
            }
            (_, false) => {
                let mut out = vec![0; data.len() / 4];
                LittleEndian::read_u32_into(&data[..out.len() * 4], &mut out);
                out.iter_mut().for_each(|x| *x = mask(*x, bits_stored));
                Samples::U32(out)
            }
            (_, true) => {
                let mut out = vec![0; data.len() / 4];
                LittleEndian::read_u32_into(&data[..out.len() * 4], &mut out);
                Samples::I32(out.into_iter().map(|x| sign_extend(x, bits_stored)).collect())
            }
        };

        SampleBuffer {
            frames,
            rows: descriptor.rows,
            columns: descriptor.columns,
            samples_per_pixel: descriptor.samples_per_pixel,
            samples,
        }
    }

    pub fn number_of_frames(&self) -> u32 {
        self.frames
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn samples_per_pixel(&self) -> u16 {
        self.samples_per_pixel
    }

    /// The number of samples in a single frame.
    pub fn frame_len(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns) * usize::from(self.samples_per_pixel)
    }

    /// All samples of all frames.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// The samples of the given frame as floats,
    /// or `None` if the frame does not exist.
    pub fn frame_f64(&self, frame: u32) -> Option<Vec<f64>> {
        if frame >= self.frames {
            return None;
        }
        let start = frame as usize * self.frame_len();
        let end = start + self.frame_len();
        if end > self.samples.len() {
            return None;
        }
        Some(self.samples.to_f64(start..end))
    }
}

#[inline]
fn mask(value: u32, bits_stored: u32) -> u32 {
    if bits_stored >= 32 {
        value
    } else {
        value & ((1 << bits_stored) - 1)
    }
}

#[inline]
fn sign_extend(value: u32, bits_stored: u32) -> i32 {
    let shift = 32 - bits_stored.clamp(1, 32);
    ((value << shift) as i32) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::PhotometricInterpretation;

    fn descriptor(bits_allocated: u16, bits_stored: u16, signed: bool) -> PixelDescriptor {
        PixelDescriptor {
            rows: 1,
            columns: 2,
            samples_per_pixel: 1,
            bits_allocated,
            bits_stored,
            pixel_representation: if signed {
                PixelRepresentation::Signed
            } else {
                PixelRepresentation::Unsigned
            },
            planar_configuration: 0,
            number_of_frames: 1,
            photometric_interpretation: PhotometricInterpretation::Monochrome2,
        }
    }

    #[test]
    fn unsigned_samples_are_masked_to_bits_stored() {
        let buffer = SampleBuffer::from_le_bytes(&descriptor(16, 12, false), 1, &[0xFF, 0xFF, 0x34, 0x12]);
        assert_eq!(buffer.samples(), &Samples::U16(vec![0x0FFF, 0x0234]));
    }

    #[test]
    fn signed_samples_are_sign_extended() {
        let buffer = SampleBuffer::from_le_bytes(&descriptor(16, 12, true), 1, &[0xFF, 0x0F, 0x01, 0x00]);
        assert_eq!(buffer.samples(), &Samples::I16(vec![-1, 1]));
        assert_eq!(buffer.frame_f64(0), Some(vec![-1., 1.]));
        assert_eq!(buffer.frame_f64(1), None);
    }

    #[test]
    fn full_width_samples() {
        let buffer = SampleBuffer::from_le_bytes(&descriptor(8, 8, true), 1, &[0x80, 0x7F]);
        assert_eq!(buffer.samples(), &Samples::I8(vec![-128, 127]));

        let buffer = SampleBuffer::from_le_bytes(
            &descriptor(32, 32, false),
            1,
            &[0xFF, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00],
        );
        assert_eq!(buffer.samples(), &Samples::U32(vec![u32::MAX, 1]));
    }
}
