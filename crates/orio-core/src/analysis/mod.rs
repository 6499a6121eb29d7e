use std::path::Path;

use thiserror::Error;

use crate::protocol::DecodeOptions;
use crate::source::{FrameFileSource, FrameSource, SourceError};
use crate::{DecodeFailure, Report, make_stub_report};

mod summary;

use summary::summarize_frame;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode every frame of a capture file into a report.
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<Report, AnalysisError> {
    let input_bytes = path.metadata()?.len();
    let source = FrameFileSource::open(path, *options)?;
    decode_source(path, input_bytes, source)
}

/// Drain `source` into a report.
///
/// Decoding stops at the first frame error. Frames decoded before it are
/// kept and the error is recorded as the report's `failure`. Errors that are
/// not about frame contents are returned.
pub fn decode_source<S: FrameSource>(
    path: &Path,
    input_bytes: u64,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut frames = Vec::new();
    let mut failure = None;

    loop {
        match source.next_frame() {
            Ok(Some(event)) => frames.push(summarize_frame(&event)),
            Ok(None) => break,
            Err(SourceError::Frame { offset, source }) => {
                tracing::debug!(offset, kind = source.kind(), "decoding stopped");
                failure = Some(DecodeFailure {
                    offset,
                    kind: source.kind().to_string(),
                    message: source.to_string(),
                });
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), input_bytes);
    report.frames = frames;
    report.failure = failure;
    Ok(report)
}
