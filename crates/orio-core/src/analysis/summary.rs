use crate::source::FrameEvent;
use crate::{FrameSummary, RecordSummary};

pub(crate) fn summarize_frame(event: &FrameEvent) -> FrameSummary {
    let header = &event.frame.header;
    FrameSummary {
        offset: event.offset,
        version: header.version,
        device_id: header.device_id,
        payload_len: header.payload_len,
        records: event
            .frame
            .records
            .iter()
            .map(|record| RecordSummary {
                command_id: record.command_id,
                length: record.length,
                data: format_hex(&record.data),
            })
            .collect(),
    }
}

fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::{format_hex, summarize_frame};
    use crate::protocol::{Frame, Header, Record};
    use crate::source::FrameEvent;

    #[test]
    fn format_hex_lowercase() {
        assert_eq!(format_hex(&[0x00, 0xab, 0x0f]), "00ab0f");
        assert_eq!(format_hex(&[]), "");
    }

    #[test]
    fn summary_copies_header_and_records() {
        let event = FrameEvent {
            offset: 42,
            frame: Frame {
                header: Header {
                    version: 1,
                    device_id: 7,
                    payload_len: 1,
                },
                records: vec![Record {
                    command_id: 3,
                    length: 2,
                    data: vec![0xbe, 0xef],
                }],
            },
        };

        let summary = summarize_frame(&event);
        assert_eq!(summary.offset, 42);
        assert_eq!(summary.device_id, 7);
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.records[0].command_id, 3);
        assert_eq!(summary.records[0].data, "beef");
    }
}
