use std::{io, path::PathBuf, time::SystemTimeError};

use crate::disk::ReadOffset;

/// Failures while building a virtual volume. A device is never returned half-built.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("Volume capacity of {capacity} bytes exceeds the supported maximum of {max} bytes.")]
    CapacityExceeded { capacity: u64, max: u64 },
    #[error("Volume capacity of {capacity} bytes is too small, at least {required} bytes are needed.")]
    InsufficientCapacity { capacity: u64, required: u64 },
    #[error("Invalid bytes per sector. Must be a power of `2` and between `512` and `4096`: {0}.")]
    InvalidBytesPerSector(u16),
    #[error("Invalid boundary alignment: {0}. Must be a power of `2`.")]
    InvalidBoundaryAlignment(u32),
    #[error("File name cannot be represented on an exFAT volume: {0:?}.")]
    UnsupportedFileName(String),
    #[error("Source file {path:?} is unavailable: {source}.")]
    SourceFileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Checksum of the {region} failed self-verification: expected {expected:#x}, got {actual:#x}.")]
    ChecksumInternalError {
        region: &'static str,
        expected: u32,
        actual: u32,
    },
    #[error("Unable to generate unique serial number. Error: {0}")]
    NoSerial(#[from] SystemTimeError),
}

/// Failures of a single block read.
#[derive(Debug, thiserror::Error)]
pub enum ReadError<O: ReadOffset> {
    #[error("Reading {count} sectors at LBA {lba} exceeds the capacity of {capacity} sectors.")]
    OutOfRange { lba: u64, count: u64, capacity: u64 },
    #[error("Buffer of {length} bytes does not hold a whole number of {sector_size} byte sectors.")]
    InvalidBufferLength { length: usize, sector_size: u32 },
    #[error("I/O error: {0}.")]
    Io(#[source] O::Err),
    #[error("{0}")]
    Cluster(#[from] ClusterError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    #[error("Cluster #{0} lies outside of the cluster heap.")]
    OutOfRange(u32),
}
