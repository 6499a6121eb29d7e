use std::io::Read;

use super::error::{FrameError, HeaderField, RecordField, StreamError};
use super::layout;
use super::options::DecodeOptions;
use super::reader::FrameReader;

/// Fixed 8-byte frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub device_id: u32,
    /// Number of records that follow the header (not a byte count).
    pub payload_len: u16,
}

/// One command record. `data.len()` always equals `length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub command_id: u8,
    pub length: u16,
    pub data: Vec<u8>,
}

/// A decoded frame: header plus `header.payload_len` records in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: Header,
    pub records: Vec<Record>,
}

/// Decode the header. The caller is expected to have confirmed that
/// `layout::HEADER_SIZE` bytes are available.
pub fn decode_header<R: Read>(reader: &mut FrameReader<R>) -> Result<Header, FrameError> {
    let version = header_field(reader.read_u16_be(), HeaderField::Version)?;
    let device_id = header_field(reader.read_u32_be(), HeaderField::DeviceId)?;
    let payload_len = header_field(reader.read_u16_be(), HeaderField::PayloadLen)?;

    Ok(Header {
        version,
        device_id,
        payload_len,
    })
}

/// Decode exactly `count` records. Fails on the first short record; no
/// partial sequence is returned.
pub fn decode_records<R: Read>(
    reader: &mut FrameReader<R>,
    count: u16,
) -> Result<Vec<Record>, FrameError> {
    let count = usize::from(count);
    // The count comes off the wire; grow as records actually arrive.
    let capacity = count.min(layout::INITIAL_CHUNK_SIZE);
    (0..count).try_fold(
        Vec::with_capacity(capacity),
        |mut records, index| -> Result<Vec<Record>, FrameError> {
            records.push(decode_record(reader, index)?);
            Ok(records)
        },
    )
}

fn decode_record<R: Read>(
    reader: &mut FrameReader<R>,
    index: usize,
) -> Result<Record, FrameError> {
    let command_id = record_field(reader.read_u8(), index, RecordField::CommandId)?;
    let length = record_field(reader.read_u16_be(), index, RecordField::Length)?;
    let data = record_field(
        reader.read_bytes(usize::from(length)),
        index,
        RecordField::Data,
    )?;

    Ok(Record {
        command_id,
        length,
        data,
    })
}

/// Decode one frame from `reader` with default options.
///
/// # Examples
/// ```
/// use orio_core::decode_frame;
///
/// let bytes = [0x00u8, 0x01, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00];
/// let frame = decode_frame(&bytes[..])?;
/// assert_eq!(frame.header.version, 1);
/// assert_eq!(frame.header.device_id, 10);
/// assert!(frame.records.is_empty());
/// # Ok::<(), orio_core::FrameError>(())
/// ```
pub fn decode_frame<R: Read>(reader: R) -> Result<Frame, FrameError> {
    decode_frame_with(reader, &DecodeOptions::default())
}

/// Decode one frame from `reader`.
///
/// Only the bytes of this frame are pulled from `reader`, so a stream holding
/// several frames can be decoded by calling this repeatedly on the same
/// `&mut` reader.
pub fn decode_frame_with<R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<Frame, FrameError> {
    let mut reader = FrameReader::new(reader);
    decode_frame_from(&mut reader, options)
}

/// Run the full pipeline on an existing `FrameReader`:
/// header window check, header, version policy, record region check,
/// records.
pub fn decode_frame_from<R: Read>(
    reader: &mut FrameReader<R>,
    options: &DecodeOptions,
) -> Result<Frame, FrameError> {
    reader
        .ensure_available(layout::HEADER_SIZE)
        .map_err(FrameError::HeaderFormat)?;

    let header = decode_header(reader)?;
    tracing::trace!(
        version = header.version,
        device_id = header.device_id,
        records = header.payload_len,
        "header decoded"
    );
    options.version_policy.check(header.version)?;

    if header.payload_len > 0 {
        // Only confirms the stream has not ended; shortfalls inside the
        // region surface per record.
        reader.ensure_available(1).map_err(FrameError::DataLength)?;
    }

    let records = decode_records(reader, header.payload_len)?;
    tracing::trace!(records = records.len(), "frame decoded");

    Ok(Frame { header, records })
}

/// Decodes successive frames from one stream.
pub struct FrameDecoder<R> {
    reader: FrameReader<R>,
    options: DecodeOptions,
}

impl<R: Read> FrameDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    pub fn with_options(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader: FrameReader::new(reader),
            options,
        }
    }

    /// Offset of the next frame, in bytes from the start of the stream.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    pub fn decode_frame(&mut self) -> Result<Frame, FrameError> {
        decode_frame_from(&mut self.reader, &self.options)
    }
}

fn header_field<T>(result: Result<T, StreamError>, field: HeaderField) -> Result<T, FrameError> {
    result.map_err(|err| match err {
        StreamError::EndOfStream { needed, available } => FrameError::MalformedHeader {
            field,
            needed,
            actual: available,
        },
        StreamError::Io(err) => FrameError::Io(err),
    })
}

fn record_field<T>(
    result: Result<T, StreamError>,
    index: usize,
    field: RecordField,
) -> Result<T, FrameError> {
    result.map_err(|err| match err {
        StreamError::EndOfStream { needed, available } => FrameError::MalformedRecord {
            index,
            field,
            needed,
            actual: available,
        },
        StreamError::Io(err) => FrameError::Io(err),
    })
}
