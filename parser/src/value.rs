//! Decoding of primitive values from their raw bytes,
//! resolved once by value representation.

use byteordered::{ByteOrdered, Endianness};
use dicom_extract_core::value::{PrimitiveValue, C};
use dicom_extract_core::{Tag, VR};
use std::borrow::Cow;

/// Interpret the raw bytes of a primitive value
/// according to its value representation.
///
/// Trailing bytes which do not form a whole number are ignored.
/// OB, OW and UN values are kept as raw bytes in the source byte order.
pub fn read_primitive(vr: VR, bytes: &[u8], endianness: Endianness) -> PrimitiveValue {
    if bytes.is_empty() {
        return PrimitiveValue::Empty;
    }
    match vr {
        VR::OB | VR::OW | VR::UN => PrimitiveValue::Bytes(bytes.to_vec()),
        VR::AT => {
            let words = read_words(bytes, endianness);
            PrimitiveValue::Tags(words.chunks_exact(2).map(|w| Tag(w[0], w[1])).collect())
        }
        VR::US => PrimitiveValue::U16(read_words(bytes, endianness)),
        VR::SS => PrimitiveValue::I16(read_n(bytes, 2, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_i16_into(out)
        })),
        VR::UL | VR::OL => PrimitiveValue::U32(read_n(bytes, 4, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_u32_into(out)
        })),
        VR::SL => PrimitiveValue::I32(read_n(bytes, 4, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_i32_into(out)
        })),
        VR::UV | VR::OV => PrimitiveValue::U64(read_n(bytes, 8, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_u64_into(out)
        })),
        VR::SV => PrimitiveValue::I64(read_n(bytes, 8, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_i64_into(out)
        })),
        VR::FL | VR::OF => PrimitiveValue::F32(read_n(bytes, 4, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_f32_into(out)
        })),
        VR::FD | VR::OD => PrimitiveValue::F64(read_n(bytes, 8, |mut b, out| {
            ByteOrdered::runtime(&mut b, endianness).read_f64_into(out)
        })),
        VR::SQ => PrimitiveValue::Bytes(bytes.to_vec()),
        vr if vr.is_single_text() => {
            let text = decode_text(bytes);
            let text = text.trim_end_matches(|c: char| c == ' ' || c == '\0');
            PrimitiveValue::Strs(C::from_elem(text.to_owned(), 1))
        }
        _ => {
            let text = decode_text(bytes);
            PrimitiveValue::Strs(
                text.split('\\')
                    .map(|s| s.trim_matches(|c: char| c == ' ' || c == '\0').to_owned())
                    .collect(),
            )
        }
    }
}

/// Decode text in the default character repertoire.
/// Bytes outside of it are replaced rather than rejected.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn read_words(bytes: &[u8], endianness: Endianness) -> C<u16> {
    read_n(bytes, 2, |mut b, out| {
        ByteOrdered::runtime(&mut b, endianness).read_u16_into(out)
    })
}

fn read_n<T, F>(bytes: &[u8], size: usize, f: F) -> C<T>
where
    T: Default + Clone,
    F: FnOnce(&[u8], &mut [T]) -> std::io::Result<()>,
{
    let n = bytes.len() / size;
    let mut out: C<T> = C::from_elem(T::default(), n);
    // the source holds at least `n * size` bytes, so this cannot fail
    if f(&bytes[..n * size], out.as_mut_slice()).is_err() {
        out.clear();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn strings_are_split_and_trimmed() {
        let v = read_primitive(VR::DS, b" 40\\-600.5 ", Endianness::Little);
        assert_eq!(
            v,
            PrimitiveValue::Strs(smallvec!["40".to_string(), "-600.5".to_string()])
        );
        let v = read_primitive(VR::UI, b"1.2.840.10008.1.2\0", Endianness::Little);
        assert_eq!(
            v,
            PrimitiveValue::Strs(smallvec!["1.2.840.10008.1.2".to_string()])
        );
    }

    #[test]
    fn single_text_keeps_backslashes() {
        let v = read_primitive(VR::LT, b"a\\b ", Endianness::Little);
        assert_eq!(v, PrimitiveValue::Strs(smallvec!["a\\b".to_string()]));
    }

    #[test]
    fn numbers_follow_byte_order() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(
            read_primitive(VR::US, &bytes, Endianness::Little),
            PrimitiveValue::U16(smallvec![0x0201, 0x0403])
        );
        assert_eq!(
            read_primitive(VR::US, &bytes, Endianness::Big),
            PrimitiveValue::U16(smallvec![0x0102, 0x0304])
        );
        assert_eq!(
            read_primitive(VR::UL, &bytes, Endianness::Big),
            PrimitiveValue::U32(smallvec![0x01020304])
        );
        assert_eq!(
            read_primitive(VR::AT, &[0x28, 0x00, 0x10, 0x00], Endianness::Little),
            PrimitiveValue::Tags(smallvec![Tag(0x0028, 0x0010)])
        );
        // odd trailing byte is ignored
        assert_eq!(
            read_primitive(VR::SS, &[0xFF, 0xFF, 0x00], Endianness::Little),
            PrimitiveValue::I16(smallvec![-1])
        );
    }

    #[test]
    fn binary_and_empty_values() {
        assert_eq!(
            read_primitive(VR::OW, &[1, 2], Endianness::Big),
            PrimitiveValue::Bytes(vec![1, 2])
        );
        assert_eq!(read_primitive(VR::CS, &[], Endianness::Little), PrimitiveValue::Empty);
    }
}
