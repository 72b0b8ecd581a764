//! The virtual block device.

use std::{fs::File, path::Path};

use derive_builder::Builder;
use log::{debug, info, trace};

use crate::{
    FIRST_USABLE_CLUSTER_INDEX, Label, bitmap,
    boot::{BOOT_REGION_LENGTH, BootRegion, VolumeSerialNumber},
    cluster::{ClusterKind, ClusterMap, MetadataRegion},
    dir::Root,
    disk::ReadOffset,
    error::{MountError, ReadError},
    fat,
    geometry::{ClusterSizePolicy, VolumeGeometry, plan_with},
    mapping::{FileMapping, HostFile},
    upcase_table::{DEFAULT_UPCASE_TABLE, DEFAULT_UPCASE_TABLE_CHECKSUM, table_checksum},
};

/// Options controlling how a volume is laid out.
#[derive(Builder, Clone, Debug, Default)]
#[builder(default)]
pub struct MountOptions {
    /// Which cluster size to pick when several are valid.
    pub cluster_size_policy: ClusterSizePolicy,
    /// Overrides the sector size, which is 512 bytes unless the capacity calls for 4096.
    #[builder(setter(strip_option))]
    pub bytes_per_sector: Option<u16>,
    /// Alignment of the FAT and the cluster heap (in bytes).
    #[builder(setter(strip_option))]
    pub boundary_align: Option<u32>,
    /// Fixed volume serial number instead of one derived from the current time.
    #[builder(setter(strip_option))]
    pub volume_serial: Option<u32>,
    #[builder(setter(strip_option))]
    pub label: Option<Label>,
    /// Name of the file on the volume instead of the host file name.
    #[builder(setter(into, strip_option))]
    pub file_name: Option<String>,
}

/// A read-only exFAT volume holding exactly one host file.
///
/// Metadata is synthesized from the immutable layout and file data is read with positioned reads,
/// so a device can be shared between threads and read concurrently.
#[derive(Debug)]
pub struct Device<O: ReadOffset = File> {
    geometry: VolumeGeometry,
    boot: BootRegion,
    root: Vec<u8>,
    clusters: ClusterMap,
    mapping: FileMapping<O>,
}

/// Mounts the host file at `path` onto a volume of `capacity` bytes.
pub fn mount<P: AsRef<Path>>(path: P, capacity: u64) -> Result<Device, MountError> {
    mount_with(path, capacity, MountOptions::default())
}

pub fn mount_with<P: AsRef<Path>>(
    path: P,
    capacity: u64,
    options: MountOptions,
) -> Result<Device, MountError> {
    let host = HostFile::open(path)?;
    Device::new(host, capacity, options)
}

impl<O: ReadOffset> Device<O> {
    pub fn new(
        host: HostFile<O>,
        capacity: u64,
        options: MountOptions,
    ) -> Result<Device<O>, MountError> {
        let geometry = plan_with(capacity, host.length(), &options)?;

        let serial = match options.volume_serial {
            Some(serial) => VolumeSerialNumber::from(serial),
            None => VolumeSerialNumber::try_new()?,
        };
        debug!("volume serial number: {:#010x}", serial.get());

        let actual = table_checksum(&DEFAULT_UPCASE_TABLE);
        if actual != DEFAULT_UPCASE_TABLE_CHECKSUM {
            return Err(MountError::ChecksumInternalError {
                region: "upcase table",
                expected: DEFAULT_UPCASE_TABLE_CHECKSUM,
                actual,
            });
        }

        let boot = BootRegion::new(&geometry, serial)?;

        let file_name = options
            .file_name
            .clone()
            .unwrap_or_else(|| host.name().to_owned());
        let label = options.label.unwrap_or_default();
        let root = Root::new(&geometry, &label, &file_name)?.bytes();

        let mapping = FileMapping::register(host, &geometry);

        info!(
            "mapped {file_name:?} ({} bytes) onto a {capacity} byte volume: {} clusters of {} bytes, file at clusters {}..{}",
            mapping.length(),
            geometry.cluster_count(),
            geometry.bytes_per_cluster(),
            mapping.clusters().first,
            mapping.clusters().end(),
        );

        Ok(Device {
            geometry,
            boot,
            root,
            clusters: ClusterMap::new(&geometry),
            mapping,
        })
    }

    /// Builds a device on top of any positioned-read source, such as an in-memory buffer.
    pub fn from_source(
        source: O,
        name: impl Into<String>,
        length: u64,
        capacity: u64,
        options: MountOptions,
    ) -> Result<Device<O>, MountError> {
        Device::new(HostFile::new(source, name, length), capacity, options)
    }

    pub fn geometry(&self) -> &VolumeGeometry {
        &self.geometry
    }

    pub fn mapping(&self) -> &FileMapping<O> {
        &self.mapping
    }

    /// Size of the volume in sectors.
    pub fn capacity_sectors(&self) -> u64 {
        self.geometry.volume_length()
    }

    pub fn sector_size(&self) -> u32 {
        self.geometry.bytes_per_sector()
    }

    pub fn boot_checksum(&self) -> u32 {
        self.boot.checksum()
    }

    /// Reads `count` sectors starting at `lba`. Requests reaching past the end of the volume fail
    /// as a whole.
    pub fn read(&self, lba: u64, count: u32) -> Result<Vec<u8>, ReadError<O>> {
        let length = self.check_range(lba, count as u64)?;

        let mut buffer = vec![0u8; length];
        self.fill(lba * self.sector_size() as u64, &mut buffer)?;

        Ok(buffer)
    }

    /// Reads as many sectors as `buffer` holds, starting at `lba`.
    pub fn read_into(&self, lba: u64, buffer: &mut [u8]) -> Result<(), ReadError<O>> {
        let sector_size = self.sector_size();
        if buffer.len() % sector_size as usize != 0 {
            return Err(ReadError::InvalidBufferLength {
                length: buffer.len(),
                sector_size,
            });
        }

        self.check_range(lba, (buffer.len() / sector_size as usize) as u64)?;
        self.fill(lba * sector_size as u64, buffer)
    }

    /// Returns the request length in bytes if it lies within the volume.
    fn check_range(&self, lba: u64, count: u64) -> Result<usize, ReadError<O>> {
        let capacity = self.capacity_sectors();
        let out_of_range = || ReadError::OutOfRange {
            lba,
            count,
            capacity,
        };

        match lba.checked_add(count) {
            Some(end) if end <= capacity => {}
            _ => return Err(out_of_range()),
        }

        count
            .checked_mul(self.sector_size() as u64)
            .and_then(|length| usize::try_from(length).ok())
            .ok_or_else(out_of_range)
    }

    /// Fills `buffer` with volume contents starting at byte `offset`, one region at a time.
    fn fill(&self, offset: u64, buffer: &mut [u8]) -> Result<(), ReadError<O>> {
        let mut filled = 0;
        while filled < buffer.len() {
            let position = offset + filled as u64;
            filled += self.fill_segment(position, &mut buffer[filled..])?;
        }
        Ok(())
    }

    /// Fills the front of `buffer` up to the end of the region containing `position` and returns
    /// the number of bytes written.
    fn fill_segment(&self, position: u64, buffer: &mut [u8]) -> Result<usize, ReadError<O>> {
        let geometry = &self.geometry;
        let boot_length = BOOT_REGION_LENGTH * geometry.bytes_per_sector() as u64;
        let available = buffer.len() as u64;
        let take = |end: u64| (end - position).min(available) as usize;

        // main and backup boot regions
        if position < 2 * boot_length {
            let within = position % boot_length;
            let amount = take(position - within + boot_length);
            let within = within as usize;
            trace!("boot region {position:#x}+{amount}");
            buffer[..amount].copy_from_slice(&self.boot.bytes()[within..within + amount]);
            return Ok(amount);
        }

        if position < geometry.fat_offset_bytes() {
            let amount = take(geometry.fat_offset_bytes());
            buffer[..amount].fill(0);
            return Ok(amount);
        }

        if position < geometry.fat_end_bytes() {
            let amount = take(geometry.fat_end_bytes());
            trace!("fat {position:#x}+{amount}");
            fat::fill(
                geometry,
                position - geometry.fat_offset_bytes(),
                &mut buffer[..amount],
            );
            return Ok(amount);
        }

        if position < geometry.cluster_heap_offset_bytes() {
            let amount = take(geometry.cluster_heap_offset_bytes());
            buffer[..amount].fill(0);
            return Ok(amount);
        }

        if position < geometry.cluster_heap_end_bytes() {
            return self.fill_clusters(position, buffer);
        }

        // excess space past the cluster heap
        let amount = take(geometry.volume_bytes());
        buffer[..amount].fill(0);
        Ok(amount)
    }

    fn fill_clusters(&self, position: u64, buffer: &mut [u8]) -> Result<usize, ReadError<O>> {
        let geometry = &self.geometry;
        let bytes_per_cluster = geometry.bytes_per_cluster() as u64;
        let relative = position - geometry.cluster_heap_offset_bytes();

        // bounded by the cluster count
        let cluster = FIRST_USABLE_CLUSTER_INDEX + (relative / bytes_per_cluster) as u32;
        let within = relative % bytes_per_cluster;

        let (kind, run) = self.clusters.run(cluster)?;
        let end = geometry.cluster_heap_offset_bytes()
            + (run.end() - FIRST_USABLE_CLUSTER_INDEX) as u64 * bytes_per_cluster;
        let amount = (end - position).min(buffer.len() as u64) as usize;
        let chunk = &mut buffer[..amount];

        trace!("cluster #{cluster} ({kind:?}) {position:#x}+{amount}");

        match kind {
            ClusterKind::Metadata(MetadataRegion::Bitmap, base) => {
                bitmap::fill(geometry, base + within, chunk)
            }
            ClusterKind::Metadata(MetadataRegion::UpcaseTable, base) => {
                copy_padded(&DEFAULT_UPCASE_TABLE, base + within, chunk)
            }
            ClusterKind::Metadata(MetadataRegion::RootDirectory, base) => {
                copy_padded(&self.root, base + within, chunk)
            }
            ClusterKind::FileData(base) => self
                .mapping
                .read(base + within, chunk)
                .map_err(ReadError::Io)?,
            ClusterKind::Unmapped => chunk.fill(0),
        }

        Ok(amount)
    }
}

/// Copies `source` starting at `offset` into `buffer`, zero-filling whatever lies past its end.
fn copy_padded(source: &[u8], offset: u64, buffer: &mut [u8]) {
    let start = usize::try_from(offset).map_or(source.len(), |offset| offset.min(source.len()));
    let available = &source[start..];
    let amount = available.len().min(buffer.len());

    buffer[..amount].copy_from_slice(&available[..amount]);
    buffer[amount..].fill(0);
}

#[cfg(test)]
fn host_file(length: usize) -> (tempfile::NamedTempFile, Vec<u8>) {
    use std::io::Write;

    let data: Vec<u8> = (0..length).map(|i| (i * 7 + i / 4096) as u8).collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    (file, data)
}

#[cfg(test)]
fn fixed_serial() -> MountOptions {
    MountOptionsBuilder::default()
        .volume_serial(0x1234_5678)
        .build()
        .unwrap()
}

#[test]
fn ten_megabytes_on_a_gigabyte() {
    let (file, data) = host_file(10 * crate::MB as usize);
    let device = mount_with(file.path(), crate::GB as u64, fixed_serial()).unwrap();
    let geometry = device.geometry();

    assert_eq!(geometry.bytes_per_cluster(), 4096);
    assert_eq!(geometry.file_clusters().count, 2560);
    assert_eq!(device.sector_size(), 512);
    assert_eq!(device.capacity_sectors(), 2 * 1024 * 1024);

    let sector = device.read(0, 1).unwrap();
    assert_eq!(sector.len(), 512);
    assert_eq!(&sector[..3], &[0xEB, 0x76, 0x90]);
    assert_eq!(&sector[3..11], b"EXFAT   ");

    // the root directory holds exactly one file entry set
    let root_lba = geometry
        .cluster_offset_bytes(geometry.first_cluster_of_root_directory())
        .unwrap()
        / 512;
    let root = device.read(root_lba, 8).unwrap();
    let types: Vec<u8> = root.chunks_exact(32).map(|entry| entry[0]).collect();
    assert_eq!(types.iter().filter(|t| **t == 0x85).count(), 1);
    assert_eq!(&types[..6], &[0x83, 0x81, 0x82, 0x85, 0xC0, 0xC1]);
    assert!(types[6..].iter().all(|t| *t == 0));
    let stream = &root[4 * 32..5 * 32];
    assert_eq!(u64::from_le_bytes(stream[24..32].try_into().unwrap()), 10485760);

    // file contents
    let first = geometry.file_clusters().first;
    let lba = geometry.cluster_offset_bytes(first + 1000).unwrap() / 512;
    assert_eq!(device.read(lba, 8).unwrap(), &data[1000 * 4096..1001 * 4096]);
}

#[test]
fn capacity_exceeded() {
    let (file, _) = host_file(4096);
    let err = mount(file.path(), crate::geometry::MAX_CAPACITY + 1).unwrap_err();
    assert!(matches!(err, MountError::CapacityExceeded { .. }));
}

#[test]
fn backup_boot_region() {
    use crate::boot::{BACKUP_BOOT_OFFSET, MAIN_BOOT_OFFSET};

    let (file, _) = host_file(4096);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();

    let main = device.read(MAIN_BOOT_OFFSET, BOOT_REGION_LENGTH as u32).unwrap();
    let backup = device.read(BACKUP_BOOT_OFFSET, BOOT_REGION_LENGTH as u32).unwrap();
    assert_eq!(main, backup);

    let checksum = device.boot_checksum().to_le_bytes();
    assert_eq!(&main[11 * 512..11 * 512 + 4], &checksum);
}

#[test]
fn file_clusters_match_host() {
    let length = 3 * 4096 + 1234;
    let (file, data) = host_file(length);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();
    let clusters = geometry.file_clusters();
    assert_eq!(clusters.count, 4);

    for cluster in clusters.first..clusters.end() {
        let offset = device.mapping().resolve(cluster).unwrap();
        assert_eq!(offset, (cluster - clusters.first) as u64 * 4096);

        let lba = geometry.cluster_offset_bytes(cluster).unwrap() / 512;
        let read = device.read(lba, 8).unwrap();

        let start = offset as usize;
        let end = (start + 4096).min(length);
        assert_eq!(&read[..end - start], &data[start..end]);
        assert!(read[end - start..].iter().all(|b| *b == 0));
    }
}

#[test]
fn unmapped_clusters_are_zero() {
    let (file, _) = host_file(8192);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();

    for cluster in [geometry.file_clusters().end(), geometry.cluster_count() + 1] {
        let lba = geometry.cluster_offset_bytes(cluster).unwrap() / 512;
        let read = device.read(lba, geometry.sectors_per_cluster()).unwrap();
        assert_eq!(read.len(), geometry.bytes_per_cluster() as usize);
        assert!(read.iter().all(|b| *b == 0));
    }
}

#[test]
fn out_of_range() {
    let (file, _) = host_file(8192);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();
    let capacity = device.capacity_sectors();

    assert!(device.read(capacity - 1, 1).is_ok());
    assert!(device.read(capacity, 0).unwrap().is_empty());

    for (lba, count) in [(capacity, 1), (capacity - 1, 2), (0, u32::MAX), (u64::MAX, 1)] {
        let err = device.read(lba, count).unwrap_err();
        assert!(matches!(err, ReadError::OutOfRange { .. }));
    }

    let mut buffer = vec![0xAAu8; 1024];
    let err = device.read_into(capacity - 1, &mut buffer).unwrap_err();
    assert!(matches!(err, ReadError::OutOfRange { .. }));
    assert!(buffer.iter().all(|b| *b == 0xAA));

    let mut buffer = vec![0u8; 700];
    let err = device.read_into(0, &mut buffer).unwrap_err();
    assert!(matches!(err, ReadError::InvalidBufferLength { .. }));
}

#[test]
fn straddling_reads() {
    let (file, _) = host_file(5 * 4096);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();

    // every region boundary, read as one request and sector by sector
    let boundaries = [
        12,
        24,
        geometry.fat_offset() as u64,
        (geometry.fat_offset() + geometry.fat_length()) as u64,
        geometry.cluster_heap_offset() as u64,
        geometry.cluster_offset_bytes(geometry.file_clusters().first).unwrap() / 512,
        geometry.cluster_offset_bytes(geometry.file_clusters().end()).unwrap() / 512,
    ];

    for boundary in boundaries {
        let start = boundary - 3;
        let whole = device.read(start, 7).unwrap();
        let pieces: Vec<u8> = (start..start + 7)
            .flat_map(|lba| device.read(lba, 1).unwrap())
            .collect();
        assert_eq!(whole, pieces, "boundary at sector {boundary}");
    }

    let fat = device.read(geometry.fat_offset() as u64, 1).unwrap();
    assert_eq!(&fat[..8], &[0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn idempotent_reads() {
    let (file, _) = host_file(100_000);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();

    for lba in [0, 20, device.geometry().cluster_heap_offset() as u64, 3000] {
        assert_eq!(device.read(lba, 64).unwrap(), device.read(lba, 64).unwrap());
    }

    let mut dirty = vec![0xAAu8; 64 * 512];
    device.read_into(0, &mut dirty).unwrap();
    assert_eq!(dirty, device.read(0, 64).unwrap());
}

#[test]
fn concurrent_reads() {
    let (file, data) = host_file(2 * crate::MB as usize);
    let device = mount_with(file.path(), 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();
    let first = geometry.cluster_offset_bytes(geometry.file_clusters().first).unwrap() / 512;

    std::thread::scope(|scope| {
        for thread in 0..8u64 {
            let device = &device;
            let data = &data;
            scope.spawn(move || {
                for i in 0..32u64 {
                    let sector = (thread * 97 + i * 13) % 4096;
                    let read = device.read(first + sector, 1).unwrap();
                    let start = sector as usize * 512;
                    assert_eq!(read, &data[start..start + 512]);
                }
            });
        }
    });
}

#[test]
fn io_errors_are_propagated() {
    // the source holds less data than it claims
    let device = Device::from_source(
        vec![1u8; 1000],
        "short.bin",
        64 * 1024,
        64 * crate::MB as u64,
        fixed_serial(),
    )
    .unwrap();
    let geometry = *device.geometry();
    let lba = geometry.cluster_offset_bytes(geometry.file_clusters().first).unwrap() / 512;

    let err = device.read(lba, 8).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}

#[test]
fn options() {
    let label = Label::new("Virtual".to_string()).unwrap();
    let options = MountOptionsBuilder::default()
        .volume_serial(0xDEAD_BEEF)
        .label(label)
        .file_name("renamed.img")
        .build()
        .unwrap();

    let device = Device::from_source(vec![0u8; 10], "original", 10, 64 * crate::MB as u64, options)
        .unwrap();
    let geometry = *device.geometry();

    let boot = device.read(0, 1).unwrap();
    assert_eq!(u32::from_le_bytes(boot[100..104].try_into().unwrap()), 0xDEAD_BEEF);

    let root_lba = geometry
        .cluster_offset_bytes(geometry.first_cluster_of_root_directory())
        .unwrap()
        / 512;
    let root = device.read(root_lba, 1).unwrap();
    assert_eq!(root[1], 7);
    assert_eq!(root[4 * 32 + 3], 11);
    assert_eq!(&root[5 * 32 + 2..5 * 32 + 6], &[b'r', 0, b'e', 0]);

    let err = Device::from_source(Vec::new(), "bad:name", 0, 64 * crate::MB as u64, fixed_serial())
        .unwrap_err();
    assert!(matches!(err, MountError::UnsupportedFileName(_)));
}

#[test]
fn empty_file() {
    let device =
        Device::from_source(Vec::new(), "empty", 0, 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();
    assert!(geometry.file_clusters().is_empty());

    let root_lba = geometry
        .cluster_offset_bytes(geometry.first_cluster_of_root_directory())
        .unwrap()
        / 512;
    let root = device.read(root_lba, 1).unwrap();
    let stream = &root[4 * 32..5 * 32];
    assert_eq!(stream[1], 0b01);
    assert_eq!(u32::from_le_bytes(stream[20..24].try_into().unwrap()), 0);
}

#[test]
fn upcase_table_cluster() {
    let device =
        Device::from_source(Vec::new(), "empty", 0, 64 * crate::MB as u64, fixed_serial()).unwrap();
    let geometry = *device.geometry();
    let upcase = geometry.upcase_table_clusters();
    let lba = geometry.cluster_offset_bytes(upcase.first).unwrap() / 512;

    let read = device
        .read(lba, upcase.count * geometry.sectors_per_cluster())
        .unwrap();
    assert_eq!(&read[..DEFAULT_UPCASE_TABLE.len()], &DEFAULT_UPCASE_TABLE);
    assert!(read[DEFAULT_UPCASE_TABLE.len()..].iter().all(|b| *b == 0));
}
