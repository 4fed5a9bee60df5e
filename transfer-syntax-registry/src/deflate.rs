//! Implementation of Deflated Explicit VR Little Endian.
//!
//! The data set following the file meta group is compressed
//! with raw deflate (RFC 1951), without zlib or gzip framing.
use flate2::read::DeflateDecoder;
use std::io::{self, Read};

/// Largest inflated data set accepted by [`inflate`].
pub const MAX_INFLATED_LEN: usize = 1 << 30;

/// Inflate the deflated data set which follows the file meta group.
///
/// Fails with [`io::ErrorKind::InvalidData`]
/// if the data set inflates past [`MAX_INFLATED_LEN`] bytes.
pub fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    inflate_at_most(data, MAX_INFLATED_LEN)
}

/// Inflate `data`, failing if the output exceeds `limit` bytes.
pub fn inflate_at_most(data: &[u8], limit: usize) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len().saturating_mul(4).min(limit));
    // one byte past the limit tells an exact fit from an overflow
    DeflateDecoder::new(data)
        .take(limit as u64 + 1)
        .read_to_end(&mut out)?;
    if out.len() > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("inflated data set exceeds {} bytes", limit),
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{inflate, inflate_at_most};
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn inflates_raw_deflate_stream() {
        let data: Vec<u8> = (0..2048u32).map(|x| (x % 7) as u8).collect();
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(&data).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(inflate(&compressed).unwrap(), data);
    }

    #[test]
    fn corrupt_stream_is_an_error() {
        assert!(inflate(&[0xFF, 0xFF, 0xFF, 0xFF]).is_err());
    }

    #[test]
    fn inflating_past_the_limit_is_an_error() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&vec![0_u8; 1 << 20]).unwrap();
        let compressed = encoder.finish().unwrap();
        assert!(compressed.len() < 4096);

        let err = inflate_at_most(&compressed, 64 << 10).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert_eq!(inflate_at_most(&compressed, 1 << 20).unwrap().len(), 1 << 20);
    }
}
