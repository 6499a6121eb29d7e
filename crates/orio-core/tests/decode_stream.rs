mod common;

use std::io::{self, Read};

use orio_core::{
    DecodeOptions, FrameDecoder, FrameError, PROTOCOL_VERSION, RecordField, StreamError,
    decode_frame, decode_frame_with,
};

use common::{encode_frame, encode_header, encode_record, frame, record};

/// Returns at most `chunk` bytes per read call.
struct Chunked<R> {
    inner: R,
    chunk: usize,
}

impl<R: Read> Read for Chunked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..len])
    }
}

#[test]
fn header_only_frame_example() {
    let bytes = [0x00u8, 0x01, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00];
    let decoded = decode_frame(&bytes[..]).unwrap();
    assert_eq!(decoded, frame(1, 10, vec![]));
}

#[test]
fn zero_records_for_any_header_values() {
    for (version, device_id) in [(0u16, 0u32), (1, 10), (u16::MAX, u32::MAX)] {
        let expected = frame(version, device_id, vec![]);
        let decoded = decode_frame(&encode_frame(&expected)[..]).unwrap();
        assert_eq!(decoded, expected);
    }
}

#[test]
fn records_decode_in_stream_order() {
    let records: Vec<_> = (0..20u8).map(|i| record(i, &vec![i; usize::from(i)])).collect();
    let expected = frame(1, 77, records);
    let decoded = decode_frame(&encode_frame(&expected)[..]).unwrap();

    assert_eq!(decoded.records.len(), 20);
    for (i, rec) in decoded.records.iter().enumerate() {
        assert_eq!(usize::from(rec.command_id), i);
        assert_eq!(rec.data.len(), usize::from(rec.length));
    }
    assert_eq!(decoded, expected);
}

#[test]
fn decodes_from_trickling_stream() {
    let expected = frame(1, 3, vec![record(1, &[1, 2, 3, 4, 5]), record(2, &[])]);
    let bytes = encode_frame(&expected);
    let decoded = decode_frame(Chunked {
        inner: &bytes[..],
        chunk: 1,
    })
    .unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn empty_stream_fails_with_header_format_end_of_stream() {
    let err = decode_frame(io::empty()).unwrap_err();
    assert!(matches!(
        err,
        FrameError::HeaderFormat(StreamError::EndOfStream { .. })
    ));
    assert!(err.is_end_of_stream());
}

#[test]
fn fewer_than_eight_bytes_fails_with_header_format() {
    for len in 1..orio_core::HEADER_SIZE {
        let bytes = vec![0u8; len];
        let err = decode_frame(&bytes[..]).unwrap_err();
        assert!(matches!(err, FrameError::HeaderFormat(_)), "len {len}");
    }
}

#[test]
fn missing_record_fails_without_partial_list() {
    let mut bytes = encode_header(&frame(1, 10, vec![record(1, &[]), record(2, &[])]).header);
    bytes.extend(encode_record(&record(1, &[0xaa, 0xbb])));

    let err = decode_frame(&bytes[..]).unwrap_err();
    assert!(matches!(
        err,
        FrameError::MalformedRecord {
            index: 1,
            field: RecordField::CommandId,
            ..
        }
    ));
}

#[test]
fn truncated_record_data_is_malformed_record() {
    let mut bytes = encode_frame(&frame(1, 10, vec![record(9, &[1, 2, 3, 4])]));
    bytes.pop();

    let err = decode_frame(&bytes[..]).unwrap_err();
    assert!(matches!(
        err,
        FrameError::MalformedRecord {
            index: 0,
            field: RecordField::Data,
            needed: 4,
            actual: 3
        }
    ));
}

#[test]
fn transport_failure_in_header_window_is_header_format() {
    struct Reset;
    impl Read for Reset {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    let err = decode_frame(Reset).unwrap_err();
    assert!(matches!(err, FrameError::HeaderFormat(StreamError::Io(_))));
    assert!(!err.is_end_of_stream());
}

/// Yields `data`, then fails every further read with `ConnectionReset`.
struct ResetAfter<'a> {
    data: &'a [u8],
}

impl Read for ResetAfter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }
        self.data.read(buf)
    }
}

#[test]
fn transport_failure_after_header_is_data_length() {
    let header = encode_header(&frame(1, 10, vec![record(1, &[])]).header);
    let err = decode_frame(ResetAfter { data: &header }).unwrap_err();
    assert!(matches!(
        err,
        FrameError::DataLength(StreamError::Io(ref e)) if e.kind() == io::ErrorKind::ConnectionReset
    ));
    assert_eq!(err.kind(), "data_length");
}

#[test]
fn transport_failure_mid_record_is_io() {
    let mut bytes = encode_header(&frame(1, 10, vec![record(5, &[0xca, 0xfe])]).header);
    bytes.extend_from_slice(&[0x05, 0x00]);
    let err = decode_frame(ResetAfter { data: &bytes }).unwrap_err();
    assert!(matches!(
        err,
        FrameError::Io(ref e) if e.kind() == io::ErrorKind::ConnectionReset
    ));
    assert!(!err.is_end_of_stream());
}

#[test]
fn version_is_not_checked_by_default() {
    let bytes = encode_frame(&frame(0x7777, 1, vec![]));
    assert!(decode_frame(&bytes[..]).is_ok());

    let strict = DecodeOptions::strict_version(PROTOCOL_VERSION);
    let err = decode_frame_with(&bytes[..], &strict).unwrap_err();
    assert!(matches!(
        err,
        FrameError::UnsupportedVersion {
            expected: 1,
            actual: 0x7777
        }
    ));
}

#[test]
fn decoder_reads_back_to_back_frames() {
    let frames = [
        frame(1, 1, vec![record(1, b"on")]),
        frame(1, 2, vec![]),
        frame(1, 3, vec![record(2, b"off"), record(3, &[])]),
    ];
    let bytes: Vec<u8> = frames.iter().flat_map(encode_frame).collect();
    let mut decoder = FrameDecoder::new(Chunked {
        inner: &bytes[..],
        chunk: 3,
    });

    for expected in &frames {
        assert_eq!(&decoder.decode_frame().unwrap(), expected);
    }
    assert_eq!(decoder.position(), bytes.len() as u64);
    assert!(decoder.decode_frame().unwrap_err().is_clean_end());
}
