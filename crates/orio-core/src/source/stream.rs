use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{FrameEvent, FrameSource, SourceError};
use crate::protocol::{DecodeOptions, FrameDecoder};

/// Frame source over any byte stream.
pub struct StreamSource<R> {
    decoder: FrameDecoder<R>,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R, options: DecodeOptions) -> Self {
        Self {
            decoder: FrameDecoder::with_options(reader, options),
        }
    }
}

impl<R: Read> FrameSource for StreamSource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        let offset = self.decoder.position();
        match self.decoder.decode_frame() {
            Ok(frame) => Ok(Some(FrameEvent { offset, frame })),
            Err(err) if err.is_clean_end() => {
                tracing::debug!(offset, "end of stream at frame boundary");
                Ok(None)
            }
            Err(source) => Err(SourceError::Frame { offset, source }),
        }
    }
}

/// Frame source backed by a capture file.
pub struct FrameFileSource {
    inner: StreamSource<BufReader<File>>,
}

impl FrameFileSource {
    pub fn open(path: &Path, options: DecodeOptions) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self {
            inner: StreamSource::new(BufReader::new(file), options),
        })
    }
}

impl FrameSource for FrameFileSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        self.inner.next_frame()
    }
}
