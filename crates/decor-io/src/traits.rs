//! The [`InputStream`] capability every byte source and decorator implements.

use crate::error::StreamResult;

/// A readable source of bytes with optional mark/reset support.
///
/// Only [`read_range`](InputStream::read_range) has to be implemented for
/// reading; the single-byte and whole-buffer forms are derived from it, so a
/// decorator that instruments `read_range` sees every read.
///
/// Implementations make no thread-safety promise. Callers sharing a source
/// across threads serialize access themselves.
pub trait InputStream {
    /// Read up to `len` bytes into `buf[offset..offset + len]`.
    ///
    /// Returns the number of bytes transferred. `Ok(0)` with `len > 0` is the
    /// end-of-stream indicator. A range that does not fit in `buf` fails with
    /// [`StreamError::OutOfBounds`](crate::StreamError::OutOfBounds).
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize>;

    /// Read up to `buf.len()` bytes into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> StreamResult<usize> {
        let len = buf.len();
        self.read_range(buf, 0, len)
    }

    /// Read a single byte through [`read`](InputStream::read).
    ///
    /// There is no end-of-stream signal here: when the source is exhausted the
    /// one-byte buffer is never written and its initial value, `0`, is
    /// returned. Callers that must detect the end use `read` instead.
    fn read_byte(&mut self) -> StreamResult<u8> {
        let mut buf = [0u8; 1];
        self.read(&mut buf)?;
        Ok(buf[0])
    }

    /// Skip over up to `n` bytes, returning how many were skipped.
    fn skip(&mut self, n: u64) -> StreamResult<u64>;

    /// Number of bytes that can be read without blocking.
    fn available(&self) -> StreamResult<usize>;

    /// Release the source. Reads after `close` fail.
    fn close(&mut self) -> StreamResult<()>;

    /// Remember the current position. `limit` is the number of bytes the
    /// caller intends to read before calling [`reset`](InputStream::reset).
    fn mark(&mut self, limit: usize);

    /// Return to the last marked position.
    fn reset(&mut self) -> StreamResult<()>;

    /// Whether [`mark`](InputStream::mark) and [`reset`](InputStream::reset)
    /// are supported.
    fn mark_supported(&self) -> bool;
}

impl<S: InputStream + ?Sized> InputStream for &mut S {
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize> {
        (**self).read_range(buf, offset, len)
    }

    fn read(&mut self, buf: &mut [u8]) -> StreamResult<usize> {
        (**self).read(buf)
    }

    fn read_byte(&mut self) -> StreamResult<u8> {
        (**self).read_byte()
    }

    fn skip(&mut self, n: u64) -> StreamResult<u64> {
        (**self).skip(n)
    }

    fn available(&self) -> StreamResult<usize> {
        (**self).available()
    }

    fn close(&mut self) -> StreamResult<()> {
        (**self).close()
    }

    fn mark(&mut self, limit: usize) {
        (**self).mark(limit)
    }

    fn reset(&mut self) -> StreamResult<()> {
        (**self).reset()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }
}

impl<S: InputStream + ?Sized> InputStream for Box<S> {
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize> {
        (**self).read_range(buf, offset, len)
    }

    fn read(&mut self, buf: &mut [u8]) -> StreamResult<usize> {
        (**self).read(buf)
    }

    fn read_byte(&mut self) -> StreamResult<u8> {
        (**self).read_byte()
    }

    fn skip(&mut self, n: u64) -> StreamResult<u64> {
        (**self).skip(n)
    }

    fn available(&self) -> StreamResult<usize> {
        (**self).available()
    }

    fn close(&mut self) -> StreamResult<()> {
        (**self).close()
    }

    fn mark(&mut self, limit: usize) {
        (**self).mark(limit)
    }

    fn reset(&mut self) -> StreamResult<()> {
        (**self).reset()
    }

    fn mark_supported(&self) -> bool {
        (**self).mark_supported()
    }
}
