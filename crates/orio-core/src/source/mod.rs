mod stream;

pub use stream::{FrameFileSource, StreamSource};

use thiserror::Error;

use crate::protocol::{Frame, FrameError};

/// A decoded frame and the stream offset it started at.
#[derive(Debug, Clone)]
pub struct FrameEvent {
    pub offset: u64,
    pub frame: Frame,
}

pub trait FrameSource {
    /// Next frame, or `Ok(None)` once the stream ends on a frame boundary.
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame decode error at offset {offset}: {source}")]
    Frame {
        offset: u64,
        #[source]
        source: FrameError,
    },
}
