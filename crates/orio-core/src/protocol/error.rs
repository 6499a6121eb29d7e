use std::fmt;

use thiserror::Error;

/// Failures of the look-ahead and consuming reads on a `FrameReader`.
///
/// `EndOfStream` never reaches callers of `decode_frame` on its own: the
/// decoder always wraps it in a `FrameError` that names the region being read.
///
/// # Examples
/// ```
/// use orio_core::StreamError;
///
/// let err = StreamError::EndOfStream { needed: 8, available: 3 };
/// assert!(err.to_string().contains("need 8 bytes, got 3"));
/// ```
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("end of stream: need {needed} bytes, got {available}")]
    EndOfStream { needed: usize, available: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Header field that was short-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Version,
    DeviceId,
    PayloadLen,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::Version => "version",
            HeaderField::DeviceId => "device id",
            HeaderField::PayloadLen => "payload length",
        };
        f.write_str(name)
    }
}

/// Record sub-field that was short-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    CommandId,
    Length,
    Data,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::CommandId => "command id",
            RecordField::Length => "length",
            RecordField::Data => "data",
        };
        f.write_str(name)
    }
}

/// Errors returned by frame decoding.
///
/// # Examples
/// ```
/// use orio_core::{FrameError, RecordField};
///
/// let err = FrameError::MalformedRecord {
///     index: 1,
///     field: RecordField::Data,
///     needed: 4,
///     actual: 2,
/// };
/// assert_eq!(err.kind(), "malformed_record");
/// assert!(err.to_string().contains("short read of data"));
/// ```
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid protocol header format sent: {0}")]
    HeaderFormat(#[source] StreamError),
    #[error("invalid record region: {0}")]
    DataLength(#[source] StreamError),
    #[error("malformed header: short read of {field} (need {needed} bytes, got {actual})")]
    MalformedHeader {
        field: HeaderField,
        needed: usize,
        actual: usize,
    },
    #[error("malformed record {index}: short read of {field} (need {needed} bytes, got {actual})")]
    MalformedRecord {
        index: usize,
        field: RecordField,
        needed: usize,
        actual: usize,
    },
    #[error("unsupported protocol version: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: u16, actual: u16 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FrameError {
    /// Stable label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            FrameError::HeaderFormat(_) => "header_format",
            FrameError::DataLength(_) => "data_length",
            FrameError::MalformedHeader { .. } => "malformed_header",
            FrameError::MalformedRecord { .. } => "malformed_record",
            FrameError::UnsupportedVersion { .. } => "unsupported_version",
            FrameError::Io(_) => "io",
        }
    }

    /// True when a checkpoint hit the end of the stream.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(
            self,
            FrameError::HeaderFormat(StreamError::EndOfStream { .. })
                | FrameError::DataLength(StreamError::EndOfStream { .. })
        )
    }

    /// True when the stream ended before the first header byte, i.e. on a
    /// frame boundary. No frame arrived at all.
    pub fn is_clean_end(&self) -> bool {
        matches!(
            self,
            FrameError::HeaderFormat(StreamError::EndOfStream { available: 0, .. })
        )
    }
}
