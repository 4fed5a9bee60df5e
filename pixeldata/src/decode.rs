//! Reconstruction of native sample values from the _Pixel Data_ attribute.

use std::borrow::Cow;
use std::ops::Range;

use dicom_extract_core::{DataSet, PixelFragmentSequence};
use dicom_extract_dictionary_std::tags;
use dicom_extract_encoding::{Endianness, FrameInfo, TransferSyntax};
use snafu::{ensure, OptionExt, ResultExt};
use tracing::{debug, warn};

use crate::attribute::{self, PhotometricInterpretation, PixelDescriptor};
use crate::samples::SampleBuffer;
use crate::transform::WindowLevel;
use crate::{
    DecodeFrameSnafu, DecodedPixelData, FrameOutOfRangeSnafu, InvalidAttributeSnafu,
    InvalidPixelDataSnafu, MissingFragmentsSnafu, MissingPixelDataSnafu, PixelDataTooShortSnafu,
    Result, UnsupportedCodecSnafu,
};

/// Decode every frame of the pixel data in `dataset`,
/// encoded in the given transfer syntax.
pub fn decode_pixel_data(dataset: &DataSet, ts: &TransferSyntax) -> Result<DecodedPixelData> {
    let descriptor = PixelDescriptor::from_data_set(dataset).context(InvalidAttributeSnafu)?;
    let frames = 0..descriptor.number_of_frames;
    decode_frames(dataset, ts, descriptor, frames)
}

/// Decode a single frame of the pixel data in `dataset`,
/// encoded in the given transfer syntax.
pub fn decode_pixel_data_frame(
    dataset: &DataSet,
    ts: &TransferSyntax,
    frame: u32,
) -> Result<DecodedPixelData> {
    let descriptor = PixelDescriptor::from_data_set(dataset).context(InvalidAttributeSnafu)?;
    ensure!(
        frame < descriptor.number_of_frames,
        FrameOutOfRangeSnafu {
            frame,
            frames: descriptor.number_of_frames,
        }
    );
    decode_frames(dataset, ts, descriptor, frame..frame + 1)
}

fn decode_frames(
    dataset: &DataSet,
    ts: &TransferSyntax,
    descriptor: PixelDescriptor,
    frames: Range<u32>,
) -> Result<DecodedPixelData> {
    let rescale = attribute::rescale(dataset).context(InvalidAttributeSnafu)?;
    let window = attribute::window(dataset).context(InvalidAttributeSnafu)?;
    let voi_lut_function = attribute::voi_lut_function(dataset).context(InvalidAttributeSnafu)?;

    let element = dataset
        .element(tags::PIXEL_DATA)
        .context(MissingPixelDataSnafu)?;
    debug!(
        "Decoding {} frame(s) of {}x{}x{} in {}",
        frames.len(),
        descriptor.columns,
        descriptor.rows,
        descriptor.samples_per_pixel,
        ts.name()
    );

    // grown frame by frame, once each frame is known to be present
    let mut native = Vec::new();
    let mut rgb = descriptor.photometric_interpretation == PhotometricInterpretation::Rgb;

    if ts.pixel_codec().is_encapsulated() {
        let reader = ts
            .pixel_reader()
            .context(UnsupportedCodecSnafu { ts: ts.name() })?;
        let fragments = dataset
            .fragments(tags::PIXEL_DATA)
            .ok()
            .flatten()
            .context(InvalidPixelDataSnafu {
                reason: "native pixel data in an encapsulated transfer syntax",
            })?;

        let info = descriptor.frame_info();
        for frame in frames.clone() {
            let data = frame_data(fragments, frame, descriptor.number_of_frames)?;
            let start = native.len();
            reader
                .decode_frame(&info, &data, &mut native)
                .context(DecodeFrameSnafu { frame })?;
            ensure!(
                native.len() - start == info.frame_len(),
                InvalidPixelDataSnafu {
                    reason: "decoded frame does not match the declared frame size",
                }
            );
        }
        rgb |= descriptor.samples_per_pixel == 3 && reader.emits_rgb();
    } else {
        let data = match dataset.bytes(tags::PIXEL_DATA) {
            Ok(Some(data)) => data,
            Ok(None) => return MissingPixelDataSnafu.fail(),
            Err(_) => {
                return InvalidPixelDataSnafu {
                    reason: match element.value().primitive() {
                        Some(_) => "pixel data is not a byte value",
                        None => "encapsulated pixel data in a native transfer syntax",
                    },
                }
                .fail()
            }
        };
        decode_native(&descriptor, ts.endianness(), data, frames.clone(), &mut native)?;
    }

    let samples = SampleBuffer::from_le_bytes(&descriptor, frames.len() as u32, &native);
    Ok(DecodedPixelData {
        descriptor,
        samples,
        first_frame: frames.start,
        rescale,
        window: window.filter(|w| usable_window(w)),
        voi_lut_function: voi_lut_function.unwrap_or_default(),
        rgb,
    })
}

fn usable_window(window: &WindowLevel) -> bool {
    if window.width > 0. {
        true
    } else {
        warn!(
            "Ignoring window with non-positive width {}, stretching to the observed range",
            window.width
        );
        false
    }
}

/// Gather the compressed data of one frame from its fragments.
///
/// One fragment per frame is assumed
/// when there are as many fragments as frames
/// (or a single fragment).
/// Otherwise the basic offset table tells where each frame starts.
fn frame_data(
    fragments: &PixelFragmentSequence,
    frame: u32,
    number_of_frames: u32,
) -> Result<Cow<'_, [u8]>> {
    let all = fragments.fragments();
    ensure!(
        !all.is_empty(),
        MissingFragmentsSnafu {
            frame,
            reason: "pixel data has no fragments",
        }
    );

    if all.len() == 1 || all.len() == number_of_frames as usize {
        let fragment = all.get(frame as usize).context(MissingFragmentsSnafu {
            frame,
            reason: "no fragment for this frame",
        })?;
        return Ok(Cow::Borrowed(fragment));
    }

    let offset_table = fragments.offset_table();
    if number_of_frames == 1 && offset_table.len() <= 1 {
        // a single frame spanning several fragments
        return Ok(Cow::Owned(all.concat()));
    }

    let base_offset = match offset_table.get(frame as usize) {
        Some(offset) => *offset as usize,
        None if frame == 0 => 0,
        None => {
            return MissingFragmentsSnafu {
                frame,
                reason: "basic offset table has no entry for this frame",
            }
            .fail()
        }
    };
    let next_offset = offset_table.get(frame as usize + 1).map(|o| *o as usize);

    // offsets count the 8 bytes of each item header
    let mut offset = 0;
    let mut data = Vec::new();
    for fragment in all {
        if let Some(next_offset) = next_offset {
            if offset >= next_offset {
                break;
            }
        }
        if offset >= base_offset {
            data.extend_from_slice(fragment);
        }
        offset += fragment.len() + 8;
    }
    ensure!(
        !data.is_empty(),
        MissingFragmentsSnafu {
            frame,
            reason: "basic offset table points past the last fragment",
        }
    );
    Ok(Cow::Owned(data))
}

/// Write the requested frames of native pixel data into `dst`
/// in little endian with interleaved samples.
fn decode_native(
    descriptor: &PixelDescriptor,
    endianness: Endianness,
    data: &[u8],
    frames: Range<u32>,
    dst: &mut Vec<u8>,
) -> Result<()> {
    let info = descriptor.frame_info();
    let bytes_per_sample = info.bytes_per_sample();
    let subsampled = descriptor.samples_per_pixel == 3
        && descriptor.photometric_interpretation == PhotometricInterpretation::YbrFull422;

    let stored_frame_len = if subsampled {
        // two luma samples share one pair of chroma samples
        (info.pixel_count() + 1) / 2 * 4 * bytes_per_sample
    } else {
        info.frame_len()
    };
    let expected = stored_frame_len
        .checked_mul(descriptor.number_of_frames as usize)
        .unwrap_or(usize::MAX);
    ensure!(
        data.len() >= expected,
        PixelDataTooShortSnafu {
            expected,
            got: data.len(),
        }
    );
    dst.reserve(info.frame_len() * frames.len());
    if data.len() > expected + 1 {
        warn!(
            "Pixel data holds {} bytes beyond the declared frames",
            data.len() - expected
        );
    }

    for frame in frames {
        let start = frame as usize * stored_frame_len;
        let mut buf = data[start..start + stored_frame_len].to_vec();

        if endianness == Endianness::Big && bytes_per_sample > 1 {
            buf.chunks_exact_mut(bytes_per_sample)
                .for_each(|sample| sample.reverse());
        }

        let buf = if subsampled {
            expand_ybr_422(&info, &buf)
        } else if descriptor.samples_per_pixel == 3 && descriptor.planar_configuration == 1 {
            interleave_planes(&info, &buf)
        } else {
            buf
        };
        dst.extend_from_slice(&buf);
    }
    Ok(())
}

/// Turn color-by-plane samples (`RRR… GGG… BBB…`)
/// into color-by-pixel samples (`RGB RGB …`).
fn interleave_planes(info: &FrameInfo, src: &[u8]) -> Vec<u8> {
    let bytes_per_sample = info.bytes_per_sample();
    let plane_len = info.pixel_count() * bytes_per_sample;
    let mut out = vec![0; info.frame_len()];
    for (i, pixel) in out.chunks_exact_mut(3 * bytes_per_sample).enumerate() {
        for (s, sample) in pixel.chunks_exact_mut(bytes_per_sample).enumerate() {
            let offset = s * plane_len + i * bytes_per_sample;
            sample.copy_from_slice(&src[offset..offset + bytes_per_sample]);
        }
    }
    out
}

/// Expand `Y Y Cb Cr` groups into one `Y Cb Cr` triplet per pixel.
fn expand_ybr_422(info: &FrameInfo, src: &[u8]) -> Vec<u8> {
    let bytes_per_sample = info.bytes_per_sample();
    let mut out = vec![0; info.frame_len()];
    for (i, pixel) in out.chunks_exact_mut(3 * bytes_per_sample).enumerate() {
        let group = (i / 2) * 4;
        let luma = group + i % 2;
        for (s, src_sample) in [luma, group + 2, group + 3].into_iter().enumerate() {
            let offset = src_sample * bytes_per_sample;
            pixel[s * bytes_per_sample..(s + 1) * bytes_per_sample]
                .copy_from_slice(&src[offset..offset + bytes_per_sample]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(rows: u16, columns: u16, bits_allocated: u16) -> FrameInfo {
        FrameInfo {
            rows,
            columns,
            samples_per_pixel: 3,
            bits_allocated,
        }
    }

    #[test]
    fn planes_are_interleaved() {
        let planes = [1, 2, 3, 4, 10, 20, 30, 40, 100, 200, 250, 255];
        assert_eq!(
            interleave_planes(&info(2, 2, 8), &planes),
            vec![1, 10, 100, 2, 20, 200, 3, 30, 250, 4, 40, 255],
        );
    }

    #[test]
    fn planes_of_16_bit_samples_are_interleaved() {
        #[rustfmt::skip]
        let planes = [
            0x01, 0x00, 0x02, 0x00,
            0x03, 0x00, 0x04, 0x00,
            0x05, 0x00, 0x06, 0x00,
        ];
        assert_eq!(
            interleave_planes(&info(1, 2, 16), &planes),
            vec![0x01, 0x00, 0x03, 0x00, 0x05, 0x00, 0x02, 0x00, 0x04, 0x00, 0x06, 0x00],
        );
    }

    #[test]
    fn ybr_422_chroma_is_shared_by_pixel_pairs() {
        let stored = [16, 32, 100, 200, 48, 64, 110, 210];
        assert_eq!(
            expand_ybr_422(&info(1, 4, 8), &stored),
            vec![16, 100, 200, 32, 100, 200, 48, 110, 210, 64, 110, 210],
        );
    }

    fn sequence(offset_table: Vec<u32>, fragments: Vec<Vec<u8>>) -> PixelFragmentSequence {
        PixelFragmentSequence::new(offset_table, fragments)
    }

    #[test]
    fn one_fragment_per_frame() {
        let seq = sequence(vec![], vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(&*frame_data(&seq, 1, 2).unwrap(), &[3, 4]);
        assert!(frame_data(&seq, 2, 3).is_err());
    }

    #[test]
    fn frames_spanning_fragments_follow_the_offset_table() {
        // frame 0: fragments 0 and 1, frame 1: fragment 2
        let seq = sequence(
            vec![0, 24],
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10]],
        );
        assert_eq!(&*frame_data(&seq, 0, 2).unwrap(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&*frame_data(&seq, 1, 2).unwrap(), &[9, 10]);
    }

    #[test]
    fn single_frame_spanning_fragments_without_offset_table() {
        let seq = sequence(vec![], vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(&*frame_data(&seq, 0, 1).unwrap(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn missing_offset_for_frame_is_an_error() {
        let seq = sequence(vec![], vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert!(frame_data(&seq, 1, 2).is_err());
        let empty = sequence(vec![], vec![]);
        assert!(frame_data(&empty, 0, 1).is_err());
    }
}
