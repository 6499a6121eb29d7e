//! ORIO core library: receive-side decoder for the ORIO device protocol.
//!
//! A frame is an 8-byte big-endian header `{version, device_id, payload_len}`
//! followed by `payload_len` command records `{command_id, length, data}`.
//! The decoder checks that the header bytes are available before consuming
//! any of them, decodes the header, checks the record region, then decodes
//! the records one after another. Every failure is returned as a classified
//! `FrameError`; nothing is retried and no partial frame is returned.
//!
//! Layers:
//! - `protocol`: layout, reader, parser and errors. Pure decoding over any
//!   `std::io::Read`, no file or socket knowledge.
//! - `source`: frame sources over streams and capture files.
//! - `analysis`: drains a source into a serializable `Report`.
//!
//! Invariants:
//! - A decoded `Frame` holds exactly `header.payload_len` records, in stream
//!   order, each with `data.len() == length`.
//! - `payload_len` is a record count, never a byte count.
//! - The header version is only checked when the caller asks for it through
//!   `VersionPolicy::Exact`.
//!
//! # Examples
//! ```
//! use orio_core::{FrameError, decode_frame};
//!
//! let bytes = [
//!     0x00u8, 0x01, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x01, // header
//!     0x05, 0x00, 0x02, 0xca, 0xfe, // record
//! ];
//! let frame = decode_frame(&bytes[..])?;
//! assert_eq!(frame.header.device_id, 10);
//! assert_eq!(frame.records[0].data, vec![0xca, 0xfe]);
//! # Ok::<(), FrameError>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
pub mod protocol;
mod source;

pub use analysis::{AnalysisError, decode_file, decode_source};
pub use protocol::layout::{HEADER_SIZE, PROTOCOL_VERSION, RECORD_FIXED_SIZE};
pub use protocol::{
    DecodeOptions, Frame, FrameDecoder, FrameError, FrameReader, Header, HeaderField, Record,
    RecordField, StreamError, VersionPolicy, decode_frame, decode_frame_from, decode_frame_with,
    decode_header, decode_records,
};
pub use source::{FrameEvent, FrameFileSource, FrameSource, SourceError, StreamSource};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Timestamp used until the caller stamps the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoding report for one input stream.
///
/// # Examples
/// ```
/// use orio_core::make_stub_report;
///
/// let report = make_stub_report("capture.bin", 24);
/// assert_eq!(report.report_version, orio_core::REPORT_VERSION);
/// assert!(report.frames.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input stream metadata.
    pub input: InputInfo,
    /// Decoded frames in stream order.
    pub frames: Vec<FrameSummary>,
    /// Error that stopped decoding, if the input did not end on a frame
    /// boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DecodeFailure>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use orio_core::InputInfo;
///
/// let input = InputInfo {
///     path: "capture.bin".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One decoded frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Byte offset of the frame header in the input.
    pub offset: u64,
    pub version: u16,
    pub device_id: u32,
    /// Record count declared by the header.
    pub payload_len: u16,
    pub records: Vec<RecordSummary>,
}

/// One decoded record; `data` is lowercase hex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub command_id: u8,
    pub length: u16,
    pub data: String,
}

/// Error that stopped decoding.
///
/// # Examples
/// ```
/// use orio_core::DecodeFailure;
///
/// let failure = DecodeFailure {
///     offset: 8,
///     kind: "header_format".to_string(),
///     message: "invalid protocol header format sent: end of stream: need 8 bytes, got 3"
///         .to_string(),
/// };
/// assert_eq!(failure.kind, "header_format");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeFailure {
    /// Offset of the frame that failed to decode.
    pub offset: u64,
    /// Stable error label (see `FrameError::kind`).
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

/// Build a report with base fields filled and no frames.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "orio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        frames: vec![],
        failure: None,
    }
}
