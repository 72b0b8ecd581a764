use core::ops::Deref;
use std::{
    io::{self, ErrorKind},
    sync::Arc,
};

pub trait PartitionError {
    fn unexpected_eop() -> Self;
}

/// Positioned reads against a host source. Implementations must not rely on a shared cursor, so
/// that concurrent readers never observe each other's position.
pub trait ReadOffset {
    type Err: PartitionError + std::error::Error + Send + Sync + 'static;

    fn read_at(&self, offset: u64, buffer: &mut [u8]) -> Result<usize, Self::Err>;

    /// Fills the whole buffer starting at `offset`. Running out of data before the buffer is
    /// full is an error, never a silent zero-fill.
    fn read_exact(&self, mut offset: u64, mut buffer: &mut [u8]) -> Result<(), Self::Err> {
        while !buffer.is_empty() {
            match self.read_at(offset, buffer)? {
                0 => return Err(PartitionError::unexpected_eop()),
                n => {
                    buffer = &mut buffer[n..];
                    offset = offset
                        .checked_add(n as u64)
                        .ok_or(PartitionError::unexpected_eop())?;
                }
            }
        }
        Ok(())
    }
}

impl PartitionError for io::Error {
    fn unexpected_eop() -> Self {
        io::Error::from(ErrorKind::UnexpectedEof)
    }
}

impl<T: ReadOffset> ReadOffset for &T {
    type Err = T::Err;

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err> {
        (*self).read_at(offset, buf)
    }
}

impl<T: ReadOffset> ReadOffset for Arc<T> {
    type Err = T::Err;

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err> {
        self.deref().read_at(offset, buf)
    }
}

impl ReadOffset for std::fs::File {
    type Err = io::Error;

    #[cfg(unix)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err> {
        std::os::unix::fs::FileExt::read_at(self, buf, offset)
    }

    #[cfg(windows)]
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err> {
        std::os::windows::fs::FileExt::seek_read(self, buf, offset)
    }
}

/// In-memory host file.
impl ReadOffset for Vec<u8> {
    type Err = io::Error;

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize, Self::Err> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        let Some(remaining) = self.get(start..) else {
            return Ok(0);
        };

        let amount = remaining.len().min(buf.len());
        buf[..amount].copy_from_slice(&remaining[..amount]);
        Ok(amount)
    }
}

#[test]
fn read_exact_rejects_short_source() {
    let source = vec![7u8; 10];

    let mut buffer = [0u8; 4];
    source.read_exact(8, &mut buffer).unwrap_err();

    source.read_exact(6, &mut buffer).unwrap();
    assert_eq!(buffer, [7; 4]);
}

#[test]
fn vec_read_past_end() {
    let source = vec![1u8, 2, 3];
    let mut buffer = [0u8; 8];

    assert_eq!(source.read_at(1, &mut buffer).unwrap(), 2);
    assert_eq!(&buffer[..2], &[2, 3]);
    assert_eq!(source.read_at(3, &mut buffer).unwrap(), 0);
    assert_eq!(source.read_at(u64::MAX, &mut buffer).unwrap(), 0);
}
