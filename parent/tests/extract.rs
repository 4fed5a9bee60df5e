//! Extraction of synthetic DICOM files, alone and in batches.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use dicom_extract::core::{DataElementHeader, Length, Tag, VR};
use dicom_extract::dictionary_std::tags;
use dicom_extract::encoding::{ElementEncoder, Encode, Endianness};
use dicom_extract::{
    extract, extract_batch, extract_batch_with_options, extract_frames, ErrorKind,
    ExtractOptions, ExtractionResult, FrameSelection, WindowLevel,
};
use rstest::rstest;

const EXPLICIT_LE: &str = "1.2.840.10008.1.2.1";

fn put_str(out: &mut Vec<u8>, enc: &ElementEncoder, tag: Tag, vr: VR, value: &str) {
    let mut bytes = value.as_bytes().to_vec();
    if bytes.len() % 2 == 1 {
        bytes.push(if vr == VR::UI { 0 } else { b' ' });
    }
    enc.encode_element_header(
        &mut *out,
        DataElementHeader::new(tag, vr, Length(bytes.len() as u32)),
    )
    .unwrap();
    out.extend(bytes);
}

fn put_us(out: &mut Vec<u8>, enc: &ElementEncoder, tag: Tag, value: u16) {
    enc.encode_element_header(&mut *out, DataElementHeader::new(tag, VR::US, Length(2)))
        .unwrap();
    out.extend(value.to_le_bytes());
}

fn put_ow(out: &mut Vec<u8>, enc: &ElementEncoder, tag: Tag, data: &[u8]) {
    enc.encode_element_header(
        &mut *out,
        DataElementHeader::new(tag, VR::OW, Length(data.len() as u32)),
    )
    .unwrap();
    out.extend_from_slice(data);
}

/// Build a file with a meta group declaring `ts_uid`
/// followed by `body`.
fn file_with(ts_uid: &str, body: &[u8]) -> Vec<u8> {
    let enc = ElementEncoder::new(true, Endianness::Little);
    let mut group = Vec::new();
    put_str(
        &mut group,
        &enc,
        tags::MEDIA_STORAGE_SOP_CLASS_UID,
        VR::UI,
        "1.2.840.10008.5.1.4.1.1.7",
    );
    put_str(
        &mut group,
        &enc,
        tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
        VR::UI,
        "1.2.3.4",
    );
    put_str(&mut group, &enc, tags::TRANSFER_SYNTAX_UID, VR::UI, ts_uid);

    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    enc.encode_element_header(
        &mut out,
        DataElementHeader::new(tags::FILE_META_INFORMATION_GROUP_LENGTH, VR::UL, Length(4)),
    )
    .unwrap();
    out.extend((group.len() as u32).to_le_bytes());
    out.extend(group);
    out.extend_from_slice(body);
    out
}

/// An explicit VR little endian MONOCHROME 16-bit image,
/// with an optional window and `samples` holding every frame.
fn grayscale(
    photometric: &str,
    frames: u32,
    window: Option<(&str, &str)>,
    samples: &[u16],
) -> Vec<u8> {
    let enc = ElementEncoder::new(true, Endianness::Little);
    let mut body = Vec::new();
    put_str(&mut body, &enc, tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4");
    put_str(&mut body, &enc, tags::STUDY_DATE, VR::DA, "20230405");
    put_str(&mut body, &enc, tags::MODALITY, VR::CS, "OT");
    put_us(&mut body, &enc, tags::SAMPLES_PER_PIXEL, 1);
    put_str(
        &mut body,
        &enc,
        tags::PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        photometric,
    );
    if frames > 1 {
        put_str(
            &mut body,
            &enc,
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            &frames.to_string(),
        );
    }
    put_us(&mut body, &enc, tags::ROWS, 4);
    put_us(&mut body, &enc, tags::COLUMNS, 4);
    put_us(&mut body, &enc, tags::BITS_ALLOCATED, 16);
    put_us(&mut body, &enc, tags::BITS_STORED, 16);
    put_us(&mut body, &enc, tags::HIGH_BIT, 15);
    put_us(&mut body, &enc, tags::PIXEL_REPRESENTATION, 0);
    if let Some((center, width)) = window {
        put_str(&mut body, &enc, tags::WINDOW_CENTER, VR::DS, center);
        put_str(&mut body, &enc, tags::WINDOW_WIDTH, VR::DS, width);
    }
    put_str(&mut body, &enc, tags::RESCALE_INTERCEPT, VR::DS, "0");
    put_str(&mut body, &enc, tags::RESCALE_SLOPE, VR::DS, "1");
    let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    put_ow(&mut body, &enc, tags::PIXEL_DATA, &data);
    file_with(EXPLICIT_LE, &body)
}

fn ramp() -> Vec<u16> {
    (0..16).map(|i| i * 4000).collect()
}

fn image_data(result: &ExtractionResult) -> &[u8] {
    match result {
        ExtractionResult::Success { image, .. } => &image.data,
        ExtractionResult::Failure { kind, message, .. } => {
            panic!("unexpected failure {}: {}", kind, message)
        }
    }
}

#[test]
fn full_range_window_is_an_exact_linear_rescale() {
    // window covering the 0..=60000 range of the ramp
    let file = grayscale("MONOCHROME2", 1, Some(("30000", "60000")), &ramp());
    let result = extract("ramp.dcm", &file);

    let expected: Vec<u8> = ramp()
        .into_iter()
        .map(|x| {
            let y = ((f64::from(x) - 30000.) / 60000. + 0.5) * 255.;
            y.round().clamp(0., 255.) as u8
        })
        .collect();
    assert_eq!(image_data(&result), &expected[..]);
    assert_eq!(image_data(&result)[0], 0);
    assert_eq!(image_data(&result)[15], 255);
}

#[rstest]
#[case(Some(("30000", "60000")))]
#[case(None)]
fn monochrome1_inverts_every_byte(#[case] window: Option<(&str, &str)>) {
    let mono2 = extract("a.dcm", &grayscale("MONOCHROME2", 1, window, &ramp()));
    let mono1 = extract("b.dcm", &grayscale("MONOCHROME1", 1, window, &ramp()));

    let inverted: Vec<u8> = image_data(&mono2).iter().map(|v| 255 - v).collect();
    assert_eq!(image_data(&mono1), &inverted[..]);
}

#[test]
fn success_carries_source_metadata() {
    match extract("meta.dcm", &grayscale("MONOCHROME2", 1, None, &ramp())) {
        ExtractionResult::Success {
            source_name,
            frame,
            metadata,
            image,
        } => {
            assert_eq!(source_name, "meta.dcm");
            assert_eq!(frame, 0);
            assert_eq!(metadata.study_date.as_deref(), Some("20230405"));
            assert_eq!(metadata.sop_instance_uid.as_deref(), Some("1.2.3.4"));
            assert_eq!(metadata.modality.as_deref(), Some("OT"));
            assert_eq!((image.width, image.height, image.channels), (4, 4, 1));
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn window_override_is_applied() {
    let file = grayscale("MONOCHROME2", 1, None, &ramp());
    let options = ExtractOptions::new().window(WindowLevel {
        center: 2000.5,
        width: 4000.,
    });
    let results = extract_frames("w.dcm", &file, &options);
    assert_eq!(results.len(), 1);
    let data = image_data(&results[0]);
    assert_eq!(data[0], 0);
    assert!(data[1..].iter().all(|&v| v == 255));
}

#[test]
fn each_frame_is_its_own_result() {
    let mut samples = ramp();
    samples.extend(ramp().into_iter().rev());
    samples.extend(std::iter::repeat(7).take(16));
    let file = grayscale("MONOCHROME2", 3, None, &samples);

    let results = extract_frames("multi.dcm", &file, &ExtractOptions::default());
    assert_eq!(results.len(), 3);
    for (i, result) in results.iter().enumerate() {
        match result {
            ExtractionResult::Success { frame, .. } => assert_eq!(*frame, i as u32),
            other => panic!("unexpected result {:?}", other),
        }
    }
    let first = image_data(&results[0]);
    let second = image_data(&results[1]);
    assert_eq!(first.iter().rev().copied().collect::<Vec<_>>(), second);
    // a constant frame has no range to stretch
    assert!(image_data(&results[2]).iter().all(|&v| v == 0));

    let options = ExtractOptions::new().frames(FrameSelection::First);
    let results = extract_frames("multi.dcm", &file, &options);
    assert_eq!(results.len(), 1);
    assert_eq!(image_data(&results[0]), first);
}

#[test]
fn huge_frame_count_is_an_inconsistent_descriptor() {
    let file = grayscale("MONOCHROME2", 1_000_000, None, &ramp());
    for options in [
        ExtractOptions::new(),
        ExtractOptions::new().frames(FrameSelection::First),
    ] {
        let results = extract_frames("huge.dcm", &file, &options);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].error_kind(),
            Some(ErrorKind::InconsistentPixelDescriptor)
        );
    }
}

#[test]
fn unknown_transfer_syntax_is_a_failure() {
    let mut file = grayscale("MONOCHROME2", 1, None, &ramp());
    // same length as the explicit VR little endian UID
    let uid = EXPLICIT_LE.as_bytes();
    let at = file
        .windows(uid.len())
        .position(|w| w == uid)
        .unwrap();
    file[at..at + uid.len()].copy_from_slice(b"1.2.840.99999.1.2.9");

    let result = extract("unknown.dcm", &file);
    assert_eq!(
        result.error_kind(),
        Some(ErrorKind::UnsupportedTransferSyntax)
    );
}

#[test]
fn file_without_magic_code_is_not_dicom() {
    let result = extract("notes.txt", b"these are not the bytes you are looking for");
    assert_eq!(result.error_kind(), Some(ErrorKind::NotDicom));
    assert_eq!(result.source_name(), "notes.txt");
}

#[test]
fn file_without_pixel_data_is_reported() {
    let enc = ElementEncoder::new(true, Endianness::Little);
    let mut body = Vec::new();
    put_str(&mut body, &enc, tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4");
    put_us(&mut body, &enc, tags::ROWS, 4);
    put_us(&mut body, &enc, tags::COLUMNS, 4);
    put_us(&mut body, &enc, tags::BITS_ALLOCATED, 16);
    let file = file_with(EXPLICIT_LE, &body);

    let result = extract("sr.dcm", &file);
    assert_eq!(result.error_kind(), Some(ErrorKind::MissingPixelData));
}

#[test]
fn short_pixel_data_is_an_inconsistent_descriptor() {
    let file = grayscale("MONOCHROME2", 2, None, &ramp());
    let result = extract("short.dcm", &file);
    assert_eq!(
        result.error_kind(),
        Some(ErrorKind::InconsistentPixelDescriptor)
    );
    match result {
        ExtractionResult::Failure { message, .. } => assert!(!message.is_empty()),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn batch_isolates_a_truncated_entry() {
    let entries: Vec<(String, Vec<u8>)> = (1..=5)
        .map(|i| {
            let mut file = grayscale("MONOCHROME2", 1, None, &ramp());
            if i == 3 {
                file.truncate(file.len() - 5);
            }
            (format!("entry{}.dcm", i), file)
        })
        .collect();

    let cancel = AtomicBool::new(false);
    let calls = Mutex::new(Vec::new());
    let results = extract_batch(&entries, &cancel, |done, total| {
        calls.lock().unwrap().push((done, total));
    });

    assert_eq!(results.len(), 5);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.source_name(), format!("entry{}.dcm", i + 1));
        if i == 2 {
            assert_eq!(result.error_kind(), Some(ErrorKind::Truncated));
        } else {
            assert!(result.is_success(), "entry {} failed: {:?}", i + 1, result);
        }
    }

    let mut calls = calls.into_inner().unwrap();
    calls.sort();
    assert_eq!(calls, (1..=5).map(|done| (done, 5)).collect::<Vec<_>>());
}

#[test]
fn batch_keeps_input_order_with_many_workers() {
    let entries: Vec<(String, Vec<u8>)> = (0..24)
        .map(|i| {
            let file = if i % 4 == 1 {
                b"not a DICOM file".to_vec()
            } else {
                grayscale("MONOCHROME2", 1, None, &ramp())
            };
            (format!("{:02}", i), file)
        })
        .collect();
    let cancel = AtomicBool::new(false);
    let options = ExtractOptions::new().threads(4);

    let results = extract_batch_with_options(&entries, &options, &cancel, |_, _| {});
    let names: Vec<_> = results.iter().map(|r| r.source_name().to_string()).collect();
    let expected: Vec<_> = entries.iter().map(|(name, _)| name.clone()).collect();
    assert_eq!(names, expected);
    assert_eq!(
        results
            .iter()
            .filter(|r| r.error_kind() == Some(ErrorKind::NotDicom))
            .count(),
        6
    );
}

#[test]
fn cancelled_batch_returns_results_so_far() {
    let entries: Vec<(String, Vec<u8>)> = (0..8)
        .map(|i| (format!("{}.dcm", i), grayscale("MONOCHROME2", 1, None, &ramp())))
        .collect();
    let cancel = AtomicBool::new(false);
    let options = ExtractOptions::new().threads(1);
    let seen = AtomicUsize::new(0);

    let results = extract_batch_with_options(&entries, &options, &cancel, |done, _| {
        seen.store(done, Ordering::SeqCst);
        if done == 3 {
            cancel.store(true, Ordering::SeqCst);
        }
    });

    assert_eq!(results.len(), 3);
    assert_eq!(seen.load(Ordering::SeqCst), 3);
    assert!(results.iter().all(|r| r.is_success()));

    // cancelled before starting
    let results = extract_batch(&entries, &cancel, |_, _| {});
    assert!(results.is_empty());
}
