use std::{
    fs::File,
    io::{self, ErrorKind},
    path::Path,
};

use crate::{
    disk::ReadOffset,
    error::MountError,
    geometry::{ClusterRange, VolumeGeometry},
};

/// A host file that is about to be mapped onto a volume.
#[derive(Debug)]
pub struct HostFile<O: ReadOffset> {
    source: O,
    name: String,
    length: u64,
}

impl HostFile<File> {
    /// Opens a regular file on the host. Its final path component becomes the file name on the
    /// volume.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<HostFile<File>, MountError> {
        let path = path.as_ref();
        let unavailable = |source: io::Error| MountError::SourceFileUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let metadata = file.metadata().map_err(unavailable)?;
        if !metadata.is_file() {
            return Err(unavailable(io::Error::new(
                ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| MountError::UnsupportedFileName(path.display().to_string()))?;

        Ok(HostFile {
            source: file,
            name: name.to_owned(),
            length: metadata.len(),
        })
    }
}

impl<O: ReadOffset> HostFile<O> {
    /// Wraps an already opened source of `length` bytes.
    pub fn new(source: O, name: impl Into<String>, length: u64) -> HostFile<O> {
        HostFile {
            source,
            name: name.into(),
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> u64 {
        self.length
    }
}

/// The host file together with the clusters it occupies on the volume.
#[derive(Debug)]
pub struct FileMapping<O: ReadOffset> {
    host: HostFile<O>,
    clusters: ClusterRange,
    bytes_per_cluster: u32,
}

impl<O: ReadOffset> FileMapping<O> {
    pub fn register(host: HostFile<O>, geometry: &VolumeGeometry) -> FileMapping<O> {
        FileMapping {
            host,
            clusters: geometry.file_clusters(),
            bytes_per_cluster: geometry.bytes_per_cluster(),
        }
    }

    pub fn name(&self) -> &str {
        self.host.name()
    }

    pub fn length(&self) -> u64 {
        self.host.length()
    }

    pub fn clusters(&self) -> ClusterRange {
        self.clusters
    }

    /// Byte offset into the host file backing `cluster`, `None` if the cluster does not belong
    /// to the file.
    pub fn resolve(&self, cluster: u32) -> Option<u64> {
        self.clusters.byte_offset(cluster, self.bytes_per_cluster)
    }

    /// Reads file data starting at `offset`. Bytes past the end of the file are zero, a short
    /// read of the host file is an error.
    pub fn read(&self, offset: u64, buffer: &mut [u8]) -> Result<(), O::Err> {
        let valid = self
            .host
            .length
            .saturating_sub(offset)
            .min(buffer.len() as u64) as usize;

        let (data, padding) = buffer.split_at_mut(valid);
        if !data.is_empty() {
            self.host.source.read_exact(offset, data)?;
        }
        padding.fill(0);

        Ok(())
    }
}

#[test]
fn resolve() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let mapping = FileMapping::register(HostFile::new(Vec::new(), "data", 0), &geometry);

    assert_eq!(mapping.resolve(12), None);
    assert_eq!(mapping.resolve(13), Some(0));
    assert_eq!(mapping.resolve(14), Some(4096));
    assert_eq!(mapping.resolve(2572), Some(2559 * 4096));
    assert_eq!(mapping.resolve(2573), None);
}

#[test]
fn zero_padding() {
    let data: Vec<u8> = (0..5000u32).map(|i| i as u8).collect();
    let geometry = crate::geometry::plan(64 * crate::MB as u64, data.len() as u64).unwrap();
    let mapping = FileMapping::register(HostFile::new(data.clone(), "data", 5000), &geometry);

    let mut cluster = vec![0xAAu8; 4096];
    mapping.read(4096, &mut cluster).unwrap();
    assert_eq!(&cluster[..904], &data[4096..]);
    assert!(cluster[904..].iter().all(|b| *b == 0));
}

#[test]
fn truncated_source_is_an_error() {
    // the host file claims more data than it holds
    let geometry = crate::geometry::plan(64 * crate::MB as u64, 8192).unwrap();
    let mapping = FileMapping::register(HostFile::new(vec![1u8; 100], "data", 8192), &geometry);

    let mut cluster = vec![0u8; 4096];
    let err = mapping.read(0, &mut cluster).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn missing_host_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let err = HostFile::open(&path).unwrap_err();
    assert!(matches!(err, MountError::SourceFileUnavailable { path: p, .. } if p == path));

    let err = HostFile::open(dir.path()).unwrap_err();
    assert!(matches!(err, MountError::SourceFileUnavailable { .. }));
}
