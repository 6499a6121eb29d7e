use std::io::{ErrorKind, Read};

use super::error::StreamError;
use super::layout;

/// Byte reader with non-consuming look-ahead.
///
/// Bytes pulled from the underlying stream by `peek`/`ensure_available` are
/// kept in an internal buffer and handed out first by the consuming reads.
/// The reader only ever asks the stream for the bytes it is missing, so it
/// never pulls data past what the caller requested.
pub struct FrameReader<R> {
    inner: R,
    lookahead: Vec<u8>,
    position: u64,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookahead: Vec::with_capacity(layout::INITIAL_CHUNK_SIZE),
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of bytes held in the look-ahead buffer.
    pub fn buffered(&self) -> usize {
        self.lookahead.len()
    }

    /// Confirm that at least `needed` bytes can be read, without consuming
    /// them.
    ///
    /// # Examples
    /// ```
    /// use orio_core::{FrameReader, StreamError};
    ///
    /// let mut reader = FrameReader::new(&[0x00u8, 0x01, 0x02][..]);
    /// reader.ensure_available(3)?;
    /// assert_eq!(reader.position(), 0);
    ///
    /// let err = reader.ensure_available(4).unwrap_err();
    /// assert!(matches!(err, StreamError::EndOfStream { needed: 4, available: 3 }));
    /// # Ok::<(), StreamError>(())
    /// ```
    ///
    /// # Errors
    /// `StreamError::EndOfStream` when the stream closes first,
    /// `StreamError::Io` for any other read failure.
    pub fn ensure_available(&mut self, needed: usize) -> Result<(), StreamError> {
        self.peek(needed).map(|_| ())
    }

    /// Look at the next `needed` bytes without consuming them.
    ///
    /// The look-ahead buffer grows by at most `MAX_READ_CHUNK` bytes per read,
    /// so an oversized `needed` ends in `EndOfStream` once the stream runs dry.
    pub fn peek(&mut self, needed: usize) -> Result<&[u8], StreamError> {
        while self.lookahead.len() < needed {
            let filled = self.lookahead.len();
            let target = needed.min(filled.saturating_add(layout::MAX_READ_CHUNK));
            self.lookahead.resize(target, 0);
            match self.inner.read(&mut self.lookahead[filled..]) {
                Ok(0) => {
                    self.lookahead.truncate(filled);
                    return Err(StreamError::EndOfStream {
                        needed,
                        available: filled,
                    });
                }
                Ok(read) => self.lookahead.truncate(filled + read),
                Err(err) if err.kind() == ErrorKind::Interrupted => {
                    self.lookahead.truncate(filled);
                }
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                    self.lookahead.truncate(filled);
                    return Err(StreamError::EndOfStream {
                        needed,
                        available: filled,
                    });
                }
                Err(err) => {
                    self.lookahead.truncate(filled);
                    return Err(StreamError::Io(err));
                }
            }
        }
        Ok(&self.lookahead[..needed])
    }

    pub fn read_u8(&mut self) -> Result<u8, StreamError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, StreamError> {
        self.read_array::<2>().map(u16::from_be_bytes)
    }

    pub fn read_u32_be(&mut self) -> Result<u32, StreamError> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Consume exactly `len` bytes.
    ///
    /// A short read is reported as `StreamError::EndOfStream` with the number
    /// of bytes that did arrive; those bytes are consumed.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, StreamError> {
        let mut buf = vec![0u8; len];
        let filled = self.fill(&mut buf)?;
        if filled < len {
            return Err(StreamError::EndOfStream {
                needed: len,
                available: filled,
            });
        }
        Ok(buf)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StreamError> {
        let mut buf = [0u8; N];
        let filled = self.fill(&mut buf)?;
        if filled < N {
            return Err(StreamError::EndOfStream {
                needed: N,
                available: filled,
            });
        }
        Ok(buf)
    }

    /// Fill `buf` from the look-ahead buffer, then from the stream, stopping
    /// early only at end of stream. Returns the number of bytes written.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        let from_lookahead = self.lookahead.len().min(buf.len());
        buf[..from_lookahead].copy_from_slice(&self.lookahead[..from_lookahead]);
        self.lookahead.drain(..from_lookahead);

        let mut filled = from_lookahead;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(read) => filled += read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
                Err(err) => {
                    self.position += filled as u64;
                    return Err(StreamError::Io(err));
                }
            }
        }
        self.position += filled as u64;
        Ok(filled)
    }
}
