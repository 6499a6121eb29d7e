//! Test-only encoder for building ORIO streams.

#![allow(dead_code)]

use orio_core::{Frame, Header, Record};

pub fn encode_header(header: &Header) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(orio_core::HEADER_SIZE);
    bytes.extend_from_slice(&header.version.to_be_bytes());
    bytes.extend_from_slice(&header.device_id.to_be_bytes());
    bytes.extend_from_slice(&header.payload_len.to_be_bytes());
    bytes
}

pub fn encode_record(record: &Record) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(orio_core::RECORD_FIXED_SIZE + record.data.len());
    bytes.push(record.command_id);
    bytes.extend_from_slice(&record.length.to_be_bytes());
    bytes.extend_from_slice(&record.data);
    bytes
}

pub fn encode_frame(frame: &Frame) -> Vec<u8> {
    let mut bytes = encode_header(&frame.header);
    for record in &frame.records {
        bytes.extend(encode_record(record));
    }
    bytes
}

pub fn record(command_id: u8, data: &[u8]) -> Record {
    Record {
        command_id,
        length: data.len() as u16,
        data: data.to_vec(),
    }
}

pub fn frame(version: u16, device_id: u32, records: Vec<Record>) -> Frame {
    Frame {
        header: Header {
            version,
            device_id,
            payload_len: records.len() as u16,
        },
        records,
    }
}
