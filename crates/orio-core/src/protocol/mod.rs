//! ORIO frame decoding.
//!
//! The decoder follows the same layered structure throughout:
//! - `layout`: field widths and offsets (source of truth)
//! - `reader`: look-ahead and consuming byte reads over any `Read`
//! - `parser`: header, record sequence and frame assembly
//! - `options`: caller policy (version checking)
//! - `error`: explicit, classified errors
//!
//! Decoding is synchronous and keeps no state between calls beyond what a
//! `FrameReader` buffers. The parser never logs failures; it returns them.

pub mod error;
pub mod layout;
pub mod options;
pub mod parser;
pub mod reader;

pub use error::{FrameError, HeaderField, RecordField, StreamError};
pub use options::{DecodeOptions, VersionPolicy};
pub use parser::{
    Frame, FrameDecoder, Header, Record, decode_frame, decode_frame_from, decode_frame_with,
    decode_header, decode_records,
};
pub use reader::FrameReader;
