use std::io;

/// Errors raised by byte sources.
///
/// Decorators never construct these themselves: whatever the wrapped source
/// returns is handed back to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// I/O error from the underlying reader or file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested range does not fit in the destination buffer.
    #[error("range out of bounds: offset {offset} + len {len} exceeds buffer of {capacity}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    /// The source has been closed.
    #[error("stream is closed")]
    Closed,

    /// The source cannot return to a marked position.
    #[error("mark/reset not supported")]
    MarkUnsupported,
}

/// Result alias for byte-source operations.
pub type StreamResult<T> = Result<T, StreamError>;

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(e) => e,
            StreamError::OutOfBounds { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            StreamError::MarkUnsupported => io::Error::new(io::ErrorKind::Unsupported, err),
            StreamError::Closed => io::Error::new(io::ErrorKind::Other, err),
        }
    }
}

/// Validate that `offset..offset + len` lies inside a buffer of `capacity` bytes.
pub(crate) fn check_range(offset: usize, len: usize, capacity: usize) -> StreamResult<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(StreamError::OutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}
