mod common;

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use orio_core::{DecodeOptions, FrameFileSource, FrameSource, SourceError, decode_file};

use common::{encode_frame, frame, record};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("orio_{name}_{unique}.bin"));
    path
}

#[test]
fn file_source_reads_frames() {
    let path = temp_path("frames");
    let mut bytes = encode_frame(&frame(1, 10, vec![record(1, b"ping")]));
    bytes.extend(encode_frame(&frame(1, 11, vec![])));
    fs::write(&path, &bytes).unwrap();

    let mut source = FrameFileSource::open(&path, DecodeOptions::default()).unwrap();
    let mut offsets = Vec::new();
    while let Some(event) = source.next_frame().unwrap() {
        offsets.push(event.offset);
    }
    let _ = fs::remove_file(&path);

    assert_eq!(offsets, vec![0, 15]);
}

#[test]
fn file_source_missing_file_is_io_error() {
    let path = temp_path("missing");
    let err = match FrameFileSource::open(&path, DecodeOptions::default()) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn decode_file_reports_version_mismatch() {
    let path = temp_path("version");
    fs::write(&path, encode_frame(&frame(2, 10, vec![]))).unwrap();

    let report = decode_file(&path, &DecodeOptions::strict_version(1)).unwrap();
    let _ = fs::remove_file(&path);

    assert!(report.frames.is_empty());
    assert_eq!(report.failure.unwrap().kind, "unsupported_version");
}
