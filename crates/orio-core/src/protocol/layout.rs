//! Wire layout of ORIO frames. All integers are big-endian, no padding.

pub const VERSION_RANGE: std::ops::Range<usize> = 0..2;
pub const DEVICE_ID_RANGE: std::ops::Range<usize> = 2..6;
pub const PAYLOAD_LEN_RANGE: std::ops::Range<usize> = 6..8;
pub const HEADER_SIZE: usize = 8;

pub const COMMAND_ID_OFFSET: usize = 0;
pub const RECORD_LENGTH_RANGE: std::ops::Range<usize> = 1..3;
pub const RECORD_DATA_OFFSET: usize = 3;
pub const RECORD_FIXED_SIZE: usize = 3;

/// Version declared by the protocol. Decoding does not enforce it unless the
/// caller opts in through `VersionPolicy::Exact`.
pub const PROTOCOL_VERSION: u16 = 1;

/// Initial capacity of the look-ahead buffer.
pub const INITIAL_CHUNK_SIZE: usize = 128;

/// Largest step the look-ahead buffer grows by per read call.
pub const MAX_READ_CHUNK: usize = 64 * 1024;
