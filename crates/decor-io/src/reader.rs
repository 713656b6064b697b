//! Adapters between [`std::io::Read`] and [`InputStream`].
//!
//! - [`ReaderInput`] turns any std reader (a file, a socket, a `Cursor`) into
//!   an [`InputStream`] so it can be decorated.
//! - [`StdReader`] goes the other way, so a decorated source can be handed to
//!   anything that expects `std::io::Read`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{check_range, StreamError, StreamResult};
use crate::traits::InputStream;

/// [`InputStream`] over a std reader. Mark/reset are not supported.
#[derive(Debug)]
pub struct ReaderInput<R> {
    inner: Option<R>,
}

impl<R: Read> ReaderInput<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner) }
    }

    /// Borrow the wrapped reader, or `None` after close.
    pub fn get_ref(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    /// Unwrap the reader, or `None` after close.
    pub fn into_inner(self) -> Option<R> {
        self.inner
    }

    fn reader(&mut self) -> StreamResult<&mut R> {
        self.inner.as_mut().ok_or(StreamError::Closed)
    }
}

impl ReaderInput<File> {
    /// Open a file for reading.
    pub fn open(path: impl AsRef<Path>) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened file source");
        Ok(Self::new(file))
    }
}

impl<R: Read> InputStream for ReaderInput<R> {
    fn read_range(&mut self, buf: &mut [u8], offset: usize, len: usize) -> StreamResult<usize> {
        check_range(offset, len, buf.len())?;
        let reader = self.reader()?;
        Ok(Read::read(reader, &mut buf[offset..offset + len])?)
    }

    fn skip(&mut self, n: u64) -> StreamResult<u64> {
        let reader = self.reader()?;
        Ok(io::copy(&mut reader.by_ref().take(n), &mut io::sink())?)
    }

    fn available(&self) -> StreamResult<usize> {
        match self.inner {
            Some(_) => Ok(0),
            None => Err(StreamError::Closed),
        }
    }

    fn close(&mut self) -> StreamResult<()> {
        if self.inner.take().is_some() {
            debug!("reader source closed");
        }
        Ok(())
    }

    fn mark(&mut self, _limit: usize) {}

    fn reset(&mut self) -> StreamResult<()> {
        Err(StreamError::MarkUnsupported)
    }

    fn mark_supported(&self) -> bool {
        false
    }
}

/// [`std::io::Read`] over an [`InputStream`].
///
/// I/O errors from the source come back unchanged; other stream errors are
/// converted with `From<StreamError> for io::Error`.
#[derive(Debug)]
pub struct StdReader<S> {
    inner: S,
}

impl<S: InputStream> StdReader<S> {
    /// Expose `inner` as a std reader.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: InputStream> Read for StdReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(InputStream::read(&mut self.inner, buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::BytesInput;
    use std::io::{Cursor, Write};

    // -----------------------------------------------------------------------
    // ReaderInput
    // -----------------------------------------------------------------------

    #[test]
    fn reads_from_cursor() {
        let mut input = ReaderInput::new(Cursor::new(b"stream".to_vec()));
        let mut buf = [0u8; 10];
        let n = input.read_range(&mut buf, 2, 6).unwrap();
        assert_eq!(n, 6);
        assert_eq!(&buf[2..8], b"stream");
        assert_eq!(input.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn skip_discards_bytes() {
        let mut input = ReaderInput::new(Cursor::new(b"0123456789".to_vec()));
        assert_eq!(input.skip(4).unwrap(), 4);
        assert_eq!(input.read_byte().unwrap(), b'4');
        assert_eq!(input.skip(100).unwrap(), 5);
    }

    #[test]
    fn mark_reset_unsupported() {
        let mut input = ReaderInput::new(Cursor::new(Vec::<u8>::new()));
        assert!(!input.mark_supported());
        input.mark(8);
        assert!(matches!(input.reset(), Err(StreamError::MarkUnsupported)));
        assert_eq!(input.available().unwrap(), 0);
    }

    #[test]
    fn closed_reader_is_released() {
        let mut input = ReaderInput::new(Cursor::new(b"x".to_vec()));
        input.close().unwrap();
        assert!(input.get_ref().is_none());
        let mut buf = [0u8; 1];
        assert!(matches!(input.read(&mut buf), Err(StreamError::Closed)));
        assert!(matches!(input.available(), Err(StreamError::Closed)));
    }

    #[test]
    fn opens_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from disk").unwrap();
        file.flush().unwrap();

        let mut input = ReaderInput::open(file.path()).unwrap();
        let mut buf = [0u8; 16];
        let n = input.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"from disk");
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReaderInput::open(dir.path().join("absent")).unwrap_err();
        match err {
            StreamError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // StdReader
    // -----------------------------------------------------------------------

    #[test]
    fn std_reader_reads_to_end() {
        let mut reader = StdReader::new(BytesInput::from("all of it"));
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "all of it");
    }

    #[test]
    fn std_reader_surfaces_closed_source() {
        let mut source = BytesInput::from("x");
        source.close().unwrap();
        let mut reader = StdReader::new(source);
        let mut buf = [0u8; 1];
        let err = Read::read(&mut reader, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
