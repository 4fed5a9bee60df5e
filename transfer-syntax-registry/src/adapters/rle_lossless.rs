//! Support for RLE Lossless image decoding.
//!
//! See <https://dicom.nema.org/medical/dicom/2023e/output/chtml/part05/chapter_G.html>
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicom_extract_encoding::adapters::{DecodeResult, FrameInfo, PixelDataReader};
use dicom_extract_encoding::snafu::prelude::*;
use std::io::{self, Read};

/// Pixel data adapter for the RLE Lossless transfer syntax.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RleLosslessAdapter;

/// The size of the RLE header: segment count plus 15 offsets.
const HEADER_LEN: usize = 64;

/// Pixel data decoder for RLE Lossless (UID `1.2.840.10008.1.2.5`)
impl PixelDataReader for RleLosslessAdapter {
    /// Decode a single frame from RLE Lossless.
    fn decode_frame(
        &self,
        info: &FrameInfo,
        frame_data: &[u8],
        dst: &mut Vec<u8>,
    ) -> DecodeResult<()> {
        let bytes_per_sample = info.bytes_per_sample();
        let samples_per_pixel = usize::from(info.samples_per_pixel);
        let pixel_count = info.pixel_count();

        let offsets = read_rle_header(frame_data)?;
        ensure_whatever!(
            offsets.len() == samples_per_pixel * bytes_per_sample,
            "RLE frame has {} segments, expected {}",
            offsets.len(),
            samples_per_pixel * bytes_per_sample
        );

        // segments are decoded and checked before the frame is allocated
        let mut segments = Vec::with_capacity(offsets.len());
        for (ii, &start) in offsets.iter().enumerate() {
            let end = offsets
                .get(ii + 1)
                .map(|&o| o as usize)
                .unwrap_or(frame_data.len());
            let start = start as usize;
            ensure_whatever!(
                start >= HEADER_LEN && start <= end && end <= frame_data.len(),
                "RLE segment #{} has invalid bounds {}..{}",
                ii,
                start,
                end
            );

            let decoded_segment = PackBitsReader::new(&frame_data[start..end]).into_inner();
            ensure_whatever!(
                decoded_segment.len() >= pixel_count,
                "RLE segment #{} decoded to {} bytes, expected {}",
                ii,
                decoded_segment.len(),
                pixel_count
            );
            segments.push(decoded_segment);
        }

        let frame_size = info.frame_len();
        let base_offset = dst.len();
        dst.resize(base_offset + frame_size, 0);
        let out = &mut dst[base_offset..];

        // RLE encoded data is ordered like this (for 16-bit, 3 sample):
        //  Segment: 0     | 1     | 2     | 3     | 4     | 5
        //           R MSB | R LSB | G MSB | G LSB | B MSB | B LSB
        //
        // which is rearranged to interleaved samples in little endian:
        //    Pixel 1                             | ... Pixel N
        //    LSB R MSB R LSB G MSB G LSB B MSB B | ...
        let pixel_stride = samples_per_pixel * bytes_per_sample;
        for (ii, decoded_segment) in segments.iter().enumerate() {
            let sample_number = ii / bytes_per_sample;
            // segments go from most to least significant byte
            let byte_offset = bytes_per_sample - 1 - ii % bytes_per_sample;
            let first = sample_number * bytes_per_sample + byte_offset;
            for (value, dst_byte) in decoded_segment[..pixel_count]
                .iter()
                .zip(out[first..].iter_mut().step_by(pixel_stride))
            {
                *dst_byte = *value;
            }
        }
        Ok(())
    }
}

/// Read the RLE header and return the offsets of each segment.
fn read_rle_header(fragment: &[u8]) -> DecodeResult<Vec<u32>> {
    ensure_whatever!(
        fragment.len() >= HEADER_LEN,
        "RLE frame of {} bytes is too short for its header",
        fragment.len()
    );
    let nr_segments = LittleEndian::read_u32(&fragment[0..4]) as usize;
    ensure_whatever!(
        (1..=15).contains(&nr_segments),
        "Invalid number of RLE segments {}",
        nr_segments
    );
    let mut offsets = vec![0; nr_segments];
    LittleEndian::read_u32_into(&fragment[4..4 * (nr_segments + 1)], &mut offsets);
    Ok(offsets)
}

/// Reader of a PackBits encoded byte run.
#[derive(Debug)]
struct PackBitsReader {
    buffer: io::Cursor<Vec<u8>>,
}

impl PackBitsReader {
    /// Decode the whole of the given segment.
    ///
    /// A run cut short by the end of the segment
    /// yields the bytes available.
    fn new(mut segment: &[u8]) -> PackBitsReader {
        let mut buffer = Vec::new();

        while let Some((&header, rest)) = segment.split_first() {
            segment = rest;

            let h = header as i8;
            if (-127..=-1).contains(&h) {
                let Some((&data, rest)) = segment.split_first() else {
                    break;
                };
                segment = rest;
                let new_len = buffer.len() + (1 - h as isize) as usize;
                buffer.resize(new_len, data);
            } else if h >= 0 {
                let num_vals = (h as usize + 1).min(segment.len());
                buffer.extend_from_slice(&segment[..num_vals]);
                segment = &segment[num_vals..];
            } else {
                // h = -128 is a no-op.
            }
        }

        PackBitsReader {
            buffer: io::Cursor::new(buffer),
        }
    }

    fn into_inner(self) -> Vec<u8> {
        self.buffer.into_inner()
    }
}

impl Read for PackBitsReader {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.buffer.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// PackBits encoding of a byte run, as written by RLE encoders.
    fn pack_bits(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < data.len() {
            let mut run = 1;
            while i + run < data.len() && data[i + run] == data[i] && run < 128 {
                run += 1;
            }
            if run > 1 {
                out.push((1 - run as isize) as i8 as u8);
                out.push(data[i]);
                i += run;
            } else {
                let start = i;
                while i < data.len()
                    && i - start < 128
                    && !(i + 1 < data.len() && data[i + 1] == data[i])
                {
                    i += 1;
                }
                if i == start {
                    i += 1;
                }
                out.push((i - start - 1) as u8);
                out.extend_from_slice(&data[start..i]);
            }
        }
        if out.len() % 2 == 1 {
            // no-op padding
            out.push(0x80);
        }
        out
    }

    /// Encode a little endian, pixel-interleaved frame in RLE Lossless.
    fn encode_frame(info: &FrameInfo, native: &[u8]) -> Vec<u8> {
        let bps = info.bytes_per_sample();
        let spp = usize::from(info.samples_per_pixel);
        let mut segments = Vec::new();
        for s in 0..spp {
            for b in (0..bps).rev() {
                let plane: Vec<u8> = native
                    .iter()
                    .skip(s * bps + b)
                    .step_by(spp * bps)
                    .copied()
                    .collect();
                segments.push(pack_bits(&plane));
            }
        }
        let mut out = vec![0; HEADER_LEN];
        LittleEndian::write_u32(&mut out[0..4], segments.len() as u32);
        for (i, segment) in segments.iter().enumerate() {
            let offset = out.len() as u32;
            LittleEndian::write_u32(&mut out[4 + 4 * i..8 + 4 * i], offset);
            out.extend_from_slice(segment);
        }
        out
    }

    #[test]
    fn test_packbits() {
        let encoded = [
            0xFE, 0xAA, 0x02, 0x80, 0x00, 0x2A, 0xFD, 0xAA, 0x03, 0x80, 0x00, 0x2A, 0x22, 0xF7,
            0xAA,
        ];

        let mut decoder = PackBitsReader::new(&encoded);
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).unwrap();

        let expected = vec![
            0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0xAA, 0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0x22,
            0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
        ];
        assert_eq!(decoded, expected);
    }

    #[test]
    fn packbits_stops_at_end_of_segment() {
        let decoded = PackBitsReader::new(&[0x05, 0x01, 0x02]).into_inner();
        assert_eq!(decoded, vec![0x01, 0x02]);
        let decoded = PackBitsReader::new(&[0x00, 0x07, 0xFE]).into_inner();
        assert_eq!(decoded, vec![0x07]);
    }

    #[test]
    fn short_segment_fails() {
        let info = FrameInfo {
            rows: 2,
            columns: 2,
            samples_per_pixel: 1,
            bits_allocated: 8,
        };
        let mut encoded = encode_frame(&info, &[1, 2, 3, 4]);
        // drop the padding and the last literal byte
        encoded.truncate(encoded.len() - 2);
        let mut decoded = Vec::new();
        assert!(RleLosslessAdapter
            .decode_frame(&info, &encoded, &mut decoded)
            .is_err());
    }

    #[test]
    fn oversized_frame_fails_before_allocating() {
        let small = FrameInfo {
            rows: 2,
            columns: 2,
            samples_per_pixel: 1,
            bits_allocated: 8,
        };
        let encoded = encode_frame(&small, &[1, 2, 3, 4]);
        let huge = FrameInfo {
            rows: 65535,
            columns: 65535,
            samples_per_pixel: 1,
            bits_allocated: 8,
        };
        let mut decoded = Vec::new();
        assert!(RleLosslessAdapter
            .decode_frame(&huge, &encoded, &mut decoded)
            .is_err());
        assert!(decoded.is_empty());
        assert_eq!(decoded.capacity(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(127)]
    #[case(128)]
    #[case(256)]
    fn runs_decode_to_original_samples(#[case] run: usize) {
        let info = FrameInfo {
            rows: 2,
            columns: run as u16,
            samples_per_pixel: 1,
            bits_allocated: 16,
        };
        let mut native = Vec::new();
        for _ in 0..run {
            native.extend_from_slice(&0x1234_u16.to_le_bytes());
        }
        for i in 0..run {
            native.extend_from_slice(&(i as u16 * 3).to_le_bytes());
        }

        let encoded = encode_frame(&info, &native);
        let mut decoded = Vec::new();
        RleLosslessAdapter
            .decode_frame(&info, &encoded, &mut decoded)
            .unwrap();
        assert_eq!(decoded, native);
    }

    #[test]
    fn color_frame_is_interleaved() {
        let info = FrameInfo {
            rows: 1,
            columns: 3,
            samples_per_pixel: 3,
            bits_allocated: 8,
        };
        let native = [255, 0, 0, 0, 255, 0, 0, 0, 255];
        let encoded = encode_frame(&info, &native);

        let mut decoded = vec![0xEE];
        RleLosslessAdapter
            .decode_frame(&info, &encoded, &mut decoded)
            .unwrap();
        // existing content is kept
        assert_eq!(decoded[0], 0xEE);
        assert_eq!(&decoded[1..], &native);
    }

    #[test]
    fn segment_count_must_match() {
        let info = FrameInfo {
            rows: 1,
            columns: 2,
            samples_per_pixel: 1,
            bits_allocated: 16,
        };
        let encoded = encode_frame(
            &FrameInfo {
                bits_allocated: 8,
                ..info
            },
            &[1, 2],
        );
        let mut decoded = Vec::new();
        assert!(RleLosslessAdapter
            .decode_frame(&info, &encoded, &mut decoded)
            .is_err());
    }

    #[test]
    fn short_header_fails() {
        let info = FrameInfo {
            rows: 1,
            columns: 1,
            samples_per_pixel: 1,
            bits_allocated: 8,
        };
        let mut decoded = Vec::new();
        assert!(RleLosslessAdapter
            .decode_frame(&info, &[1, 0, 0, 0], &mut decoded)
            .is_err());
    }
}
