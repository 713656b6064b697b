use crate::error::{check_range, StreamError, StreamResult};
use crate::traits::InputStream;

/// In-memory byte source over an owned buffer.
///
/// Supports mark/reset. The mark limit is accepted but not enforced, and a
/// `reset` without a prior `mark` rewinds to the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytesInput {
    data: Vec<u8>,
    pos: usize,
    mark: usize,
    closed: bool,
}

impl BytesInput {
    /// Create a source that yields `data` from the beginning.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            mark: 0,
            closed: false,
        }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` once [`close`](InputStream::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn ensure_open(&self) -> StreamResult<()> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        Ok(())
    }
}

impl From<Vec<u8>> for BytesInput {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for BytesInput {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<&str> for BytesInput {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl InputStream for BytesInput {
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize> {
        self.ensure_open()?;
        check_range(offset, len, buf.len())?;
        let n = len.min(self.remaining());
        buf[offset..offset + n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn skip(&mut self, n: u64) -> StreamResult<u64> {
        self.ensure_open()?;
        let skipped = n.min(self.remaining() as u64);
        self.pos += skipped as usize;
        Ok(skipped)
    }

    fn available(&self) -> StreamResult<usize> {
        self.ensure_open()?;
        Ok(self.remaining())
    }

    fn close(&mut self) -> StreamResult<()> {
        self.closed = true;
        Ok(())
    }

    fn mark(&mut self, _limit: usize) {
        self.mark = self.pos;
    }

    fn reset(&mut self) -> StreamResult<()> {
        self.ensure_open()?;
        self.pos = self.mark;
        Ok(())
    }

    fn mark_supported(&self) -> bool {
        true
    }
}
