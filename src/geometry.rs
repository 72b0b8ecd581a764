//! Volume layout planning.
//!
//! The volume is laid out the way a formatter would lay out a freshly created exFAT volume that
//! holds exactly one file: boot regions, a single FAT, and a cluster heap that starts with the
//! allocation bitmap, the upcase table and the root directory, immediately followed by the
//! mapped file. Everything past the file is free space.

use checked_num::CheckedU64;
use log::debug;

use crate::{
    DEFAULT_BOUNDARY_ALIGNMENT, FIRST_USABLE_CLUSTER_INDEX, KB, MB, TB, device::MountOptions,
    error::MountError, upcase_table::UPCASE_TABLE_SIZE_BYTES,
};

/// Capacities above this use 4096-byte sectors instead of 512-byte sectors.
pub const LARGE_SECTOR_THRESHOLD: u64 = 2 * TB;
/// Largest capacity a virtual volume can declare.
pub const MAX_CAPACITY: u64 = 4 * TB;
/// Smallest exFAT volume.
pub const MIN_CAPACITY: u64 = MB as u64;
/// Smallest cluster size the planner will choose.
pub const MIN_CLUSTER_SIZE: u32 = 4 * KB as u32;
/// Maximum size of clusters
pub const MAX_CLUSTER_SIZE: u32 = 32 * MB;
/// Maximum amount of clusters
pub const MAX_CLUSTER_COUNT: u32 = 0xFFFFFFF5;
/// Main and backup boot region (in sectors)
pub const BOOT_REGION_SECTORS: u32 = 24;
/// Volumes below this size align their FAT and cluster heap to the cluster size only.
pub const SMALL_VOLUME_THRESHOLD: u64 = 32 * MB as u64;

const NUMBER_OF_FATS: u64 = 1;

/// Which cluster size wins when several of them produce a valid volume.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ClusterSizePolicy {
    /// Smallest cluster size (starting at 4KB) that produces a valid layout.
    #[default]
    Smallest,
    /// Largest cluster size (up to 32MB) that produces a valid layout.
    Largest,
}

/// A contiguous run of clusters, `first..first + count`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterRange {
    pub first: u32,
    pub count: u32,
}

impl ClusterRange {
    pub fn end(&self) -> u32 {
        self.first + self.count
    }

    pub fn contains(&self, cluster: u32) -> bool {
        cluster >= self.first && cluster < self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Byte offset of `cluster` relative to the start of this run.
    pub fn byte_offset(&self, cluster: u32, bytes_per_cluster: u32) -> Option<u64> {
        self.contains(cluster)
            .then(|| (cluster - self.first) as u64 * bytes_per_cluster as u64)
    }
}

/// Immutable layout of a virtual volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VolumeGeometry {
    pub(crate) volume_length: u64,
    pub(crate) bytes_per_sector_shift: u8,
    pub(crate) sectors_per_cluster_shift: u8,
    pub(crate) fat_offset: u32,
    pub(crate) fat_length: u32,
    pub(crate) cluster_heap_offset: u32,
    pub(crate) cluster_count: u32,
    pub(crate) bitmap: ClusterRange,
    pub(crate) upcase_table: ClusterRange,
    pub(crate) root_directory: ClusterRange,
    pub(crate) file: ClusterRange,
    pub(crate) file_length: u64,
}

/// Plans a volume of `capacity` bytes holding a file of `file_size` bytes with default options.
pub fn plan(capacity: u64, file_size: u64) -> Result<VolumeGeometry, MountError> {
    plan_with(capacity, file_size, &MountOptions::default())
}

pub fn plan_with(
    capacity: u64,
    file_size: u64,
    options: &MountOptions,
) -> Result<VolumeGeometry, MountError> {
    if capacity > MAX_CAPACITY {
        return Err(MountError::CapacityExceeded {
            capacity,
            max: MAX_CAPACITY,
        });
    }

    if capacity < MIN_CAPACITY {
        return Err(MountError::InsufficientCapacity {
            capacity,
            required: MIN_CAPACITY,
        });
    }

    let bytes_per_sector = options
        .bytes_per_sector
        .unwrap_or(if capacity > LARGE_SECTOR_THRESHOLD { 4096 } else { 512 });

    if !bytes_per_sector.is_power_of_two() || !(512..=4096).contains(&bytes_per_sector) {
        return Err(MountError::InvalidBytesPerSector(bytes_per_sector));
    }

    if let Some(align) = options.boundary_align {
        if !align.is_power_of_two() {
            return Err(MountError::InvalidBoundaryAlignment(align));
        }
    }

    let shifts = MIN_CLUSTER_SIZE.ilog2()..=MAX_CLUSTER_SIZE.ilog2();
    let candidates: Vec<u32> = match options.cluster_size_policy {
        ClusterSizePolicy::Smallest => shifts.map(|shift| 1 << shift).collect(),
        ClusterSizePolicy::Largest => shifts.rev().map(|shift| 1 << shift).collect(),
    };

    let mut first_error = None;
    for bytes_per_cluster in candidates {
        let boundary_align = options.boundary_align.unwrap_or(
            if capacity < SMALL_VOLUME_THRESHOLD {
                bytes_per_cluster
            } else {
                DEFAULT_BOUNDARY_ALIGNMENT
            },
        );

        match layout(
            capacity,
            file_size,
            bytes_per_sector,
            bytes_per_cluster,
            boundary_align,
        ) {
            Ok(geometry) => {
                debug!(
                    "planned {capacity} byte volume: {bytes_per_sector} bytes per sector, {bytes_per_cluster} bytes per cluster, {} clusters",
                    geometry.cluster_count
                );
                return Ok(geometry);
            }
            Err(err) => {
                debug!("cluster size {bytes_per_cluster} rejected: {err}");
                first_error.get_or_insert(err);
            }
        }
    }

    Err(first_error.unwrap_or(MountError::CapacityExceeded {
        capacity,
        max: MAX_CAPACITY,
    }))
}

/// Lays out the volume for one concrete sector and cluster size.
fn layout(
    size: u64,
    file_size: u64,
    bytes_per_sector: u16,
    bytes_per_cluster: u32,
    boundary_align: u32,
) -> Result<VolumeGeometry, MountError> {
    let bytes_per_sector_shift = bytes_per_sector.ilog2() as u8;
    let sectors_per_cluster_shift = (bytes_per_cluster / bytes_per_sector as u32).ilog2() as u8;
    let too_small = |required: u64| MountError::InsufficientCapacity {
        capacity: size,
        required,
    };

    let volume_length = size / bytes_per_sector as u64;
    let volume_bytes = volume_length * bytes_per_sector as u64;

    let fat_offset_bytes = (CheckedU64::new(bytes_per_sector as u64) * BOOT_REGION_SECTORS as u64)
        .ok_or(too_small(MIN_CAPACITY))?
        .next_multiple_of(boundary_align as u64);

    let max_clusters = ((CheckedU64::new(volume_bytes) - fat_offset_bytes - NUMBER_OF_FATS * 8 - 1)
        / (bytes_per_cluster as u64 + 4 * NUMBER_OF_FATS)
        + 1)
    .ok_or(too_small(fat_offset_bytes + bytes_per_cluster as u64))?;

    let fat_length_bytes = ((CheckedU64::new(max_clusters) + 2) * 4)
        .ok_or(too_small(MIN_CAPACITY))?
        .next_multiple_of(bytes_per_sector as u64);

    let cluster_heap_offset_bytes = (fat_offset_bytes + fat_length_bytes * NUMBER_OF_FATS)
        .next_multiple_of(boundary_align as u64);

    if cluster_heap_offset_bytes >= volume_bytes {
        return Err(too_small(cluster_heap_offset_bytes + bytes_per_cluster as u64));
    }

    let exceeded = || MountError::CapacityExceeded {
        capacity: size,
        max: MAX_CLUSTER_COUNT as u64 * bytes_per_cluster as u64 + cluster_heap_offset_bytes,
    };

    let cluster_count: u32 = ((volume_bytes - cluster_heap_offset_bytes) / bytes_per_cluster as u64)
        .try_into()
        .map_err(|_| exceeded())?;
    if cluster_count > MAX_CLUSTER_COUNT {
        return Err(exceeded());
    }

    let fat_offset: u32 = (fat_offset_bytes / bytes_per_sector as u64)
        .try_into()
        .map_err(|_| exceeded())?;
    let fat_length: u32 = (fat_length_bytes / bytes_per_sector as u64)
        .try_into()
        .map_err(|_| exceeded())?;
    let cluster_heap_offset: u32 = (cluster_heap_offset_bytes / bytes_per_sector as u64)
        .try_into()
        .map_err(|_| exceeded())?;

    // bitmap is first cluster of cluster heap, followed by the upcase table and the root directory
    let bitmap_length_bytes = cluster_count.div_ceil(8);
    let bitmap = ClusterRange {
        first: FIRST_USABLE_CLUSTER_INDEX,
        count: bitmap_length_bytes.div_ceil(bytes_per_cluster),
    };
    let upcase_table = ClusterRange {
        first: bitmap.end(),
        count: UPCASE_TABLE_SIZE_BYTES.div_ceil(bytes_per_cluster),
    };
    let root_directory = ClusterRange {
        first: upcase_table.end(),
        count: 1,
    };

    let file_clusters = file_size.div_ceil(bytes_per_cluster as u64);
    let required_clusters = (root_directory.end() - FIRST_USABLE_CLUSTER_INDEX) as u64 + file_clusters;
    if required_clusters > cluster_count as u64 {
        return Err(too_small(
            cluster_heap_offset_bytes + required_clusters * bytes_per_cluster as u64,
        ));
    }

    let file = ClusterRange {
        first: root_directory.end(),
        // bounded by `cluster_count` above
        count: file_clusters as u32,
    };

    let geometry = VolumeGeometry {
        volume_length,
        bytes_per_sector_shift,
        sectors_per_cluster_shift,
        fat_offset,
        fat_length,
        cluster_heap_offset,
        cluster_count,
        bitmap,
        upcase_table,
        root_directory,
        file,
        file_length: file_size,
    };

    debug_assert!(geometry.cluster_heap_end_bytes() <= geometry.volume_bytes());
    debug_assert!(geometry.fat_offset >= BOOT_REGION_SECTORS);
    debug_assert!(geometry.fat_offset + geometry.fat_length <= geometry.cluster_heap_offset);

    Ok(geometry)
}

impl VolumeGeometry {
    pub fn bytes_per_sector(&self) -> u32 {
        1 << self.bytes_per_sector_shift
    }

    pub fn sectors_per_cluster(&self) -> u32 {
        1 << self.sectors_per_cluster_shift
    }

    pub fn bytes_per_cluster(&self) -> u32 {
        self.bytes_per_sector() << self.sectors_per_cluster_shift
    }

    /// Size of the volume in sectors.
    pub fn volume_length(&self) -> u64 {
        self.volume_length
    }

    pub fn volume_bytes(&self) -> u64 {
        self.volume_length << self.bytes_per_sector_shift
    }

    pub fn fat_offset(&self) -> u32 {
        self.fat_offset
    }

    pub fn fat_length(&self) -> u32 {
        self.fat_length
    }

    pub fn cluster_heap_offset(&self) -> u32 {
        self.cluster_heap_offset
    }

    pub fn cluster_count(&self) -> u32 {
        self.cluster_count
    }

    pub fn bitmap_clusters(&self) -> ClusterRange {
        self.bitmap
    }

    pub fn upcase_table_clusters(&self) -> ClusterRange {
        self.upcase_table
    }

    pub fn root_directory_clusters(&self) -> ClusterRange {
        self.root_directory
    }

    pub fn first_cluster_of_root_directory(&self) -> u32 {
        self.root_directory.first
    }

    /// Clusters occupied by the mapped file. Empty for an empty file.
    pub fn file_clusters(&self) -> ClusterRange {
        self.file
    }

    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Length of the allocation bitmap in bytes, one bit per cluster.
    pub fn bitmap_length_bytes(&self) -> u32 {
        self.cluster_count.div_ceil(8)
    }

    /// Number of allocated clusters. All allocations are packed at the start of the heap.
    pub fn allocated_clusters(&self) -> u32 {
        self.file.end() - FIRST_USABLE_CLUSTER_INDEX
    }

    /// Percentage of allocated clusters, rounded down.
    pub fn percent_in_use(&self) -> u8 {
        (self.allocated_clusters() as u64 * 100 / self.cluster_count as u64) as u8
    }

    pub fn fat_offset_bytes(&self) -> u64 {
        (self.fat_offset as u64) << self.bytes_per_sector_shift
    }

    pub fn fat_end_bytes(&self) -> u64 {
        ((self.fat_offset as u64) + self.fat_length as u64) << self.bytes_per_sector_shift
    }

    pub fn cluster_heap_offset_bytes(&self) -> u64 {
        (self.cluster_heap_offset as u64) << self.bytes_per_sector_shift
    }

    pub fn cluster_heap_end_bytes(&self) -> u64 {
        self.cluster_heap_offset_bytes()
            + ((self.cluster_count as u64) << (self.bytes_per_sector_shift + self.sectors_per_cluster_shift))
    }

    /// Volume-relative byte offset of a cluster, `None` if the cluster is not part of the heap.
    pub fn cluster_offset_bytes(&self, cluster: u32) -> Option<u64> {
        let index = cluster.checked_sub(FIRST_USABLE_CLUSTER_INDEX)?;
        if index >= self.cluster_count {
            return None;
        }

        Some(self.cluster_heap_offset_bytes() + index as u64 * self.bytes_per_cluster() as u64)
    }
}

#[test]
fn small_file_on_gigabyte_volume() {
    let geometry = plan(crate::GB as u64, 10 * MB as u64).unwrap();

    assert_eq!(geometry.bytes_per_sector(), 512);
    assert_eq!(geometry.bytes_per_cluster(), 4096);
    assert_eq!(geometry.volume_length(), 2097152);
    assert_eq!(geometry.fat_offset(), 2048);
    assert_eq!(geometry.fat_length(), 2045);
    assert_eq!(geometry.cluster_heap_offset(), 4096);
    assert_eq!(geometry.cluster_count(), 261632);
    assert_eq!(geometry.bitmap_clusters(), ClusterRange { first: 2, count: 8 });
    assert_eq!(geometry.upcase_table_clusters(), ClusterRange { first: 10, count: 2 });
    assert_eq!(geometry.first_cluster_of_root_directory(), 12);
    assert_eq!(geometry.file_clusters(), ClusterRange { first: 13, count: 2560 });
}

#[test]
fn capacity_ceiling() {
    let err = plan(MAX_CAPACITY + 1, 0).unwrap_err();
    assert!(matches!(err, MountError::CapacityExceeded { .. }));

    let err = plan(16 * TB, MB as u64).unwrap_err();
    assert!(matches!(err, MountError::CapacityExceeded { .. }));
}

#[test]
fn large_capacity_uses_large_sectors() {
    let geometry = plan(LARGE_SECTOR_THRESHOLD, 0).unwrap();
    assert_eq!(geometry.bytes_per_sector(), 512);

    let geometry = plan(LARGE_SECTOR_THRESHOLD + 4096, 0).unwrap();
    assert_eq!(geometry.bytes_per_sector(), 4096);
    assert_eq!(geometry.bytes_per_cluster(), 4096);
    assert_eq!(geometry.sectors_per_cluster(), 1);
}

#[test]
fn largest_policy() {
    let options = crate::MountOptionsBuilder::default()
        .cluster_size_policy(ClusterSizePolicy::Largest)
        .build()
        .unwrap();

    let geometry = plan_with(crate::GB as u64, 10 * MB as u64, &options).unwrap();
    assert_eq!(geometry.bytes_per_cluster(), MAX_CLUSTER_SIZE);
    assert_eq!(geometry.file_clusters().count, 1);
}

#[test]
fn insufficient_capacity() {
    let err = plan(MIN_CAPACITY - 1, 0).unwrap_err();
    assert!(matches!(err, MountError::InsufficientCapacity { .. }));

    let err = plan(8 * MB as u64, 8 * MB as u64).unwrap_err();
    assert!(matches!(err, MountError::InsufficientCapacity { .. }));
}

#[test]
fn tiny_volume() {
    let geometry = plan(MIN_CAPACITY, 100 * KB as u64).unwrap();

    assert_eq!(geometry.bytes_per_cluster(), 4096);
    assert_eq!(geometry.fat_offset(), 24);
    assert_eq!(geometry.cluster_heap_offset(), 32);
    assert_eq!(geometry.cluster_count(), 252);
    assert_eq!(geometry.file_clusters(), ClusterRange { first: 6, count: 25 });
}

#[test]
fn empty_file() {
    let geometry = plan(64 * MB as u64, 0).unwrap();
    assert!(geometry.file_clusters().is_empty());
    assert_eq!(geometry.allocated_clusters(), geometry.root_directory_clusters().end() - 2);
}

#[test]
fn heap_fits_volume() {
    let sizes = [
        MIN_CAPACITY,
        3 * MB as u64 + 17,
        SMALL_VOLUME_THRESHOLD,
        700 * MB as u64,
        5 * crate::GB as u64,
        LARGE_SECTOR_THRESHOLD + 1,
        MAX_CAPACITY,
    ];

    for size in sizes {
        for policy in [ClusterSizePolicy::Smallest, ClusterSizePolicy::Largest] {
            let options = crate::MountOptionsBuilder::default()
                .cluster_size_policy(policy)
                .build()
                .unwrap();
            let geometry = plan_with(size, 0, &options).unwrap();

            assert!(
                geometry.cluster_count() as u64
                    * geometry.sectors_per_cluster() as u64
                    * geometry.bytes_per_sector() as u64
                    + geometry.cluster_heap_offset_bytes()
                    <= geometry.volume_length() * geometry.bytes_per_sector() as u64
            );
            assert!(geometry.fat_end_bytes() <= geometry.cluster_heap_offset_bytes());
            assert!(geometry.fat_offset() >= BOOT_REGION_SECTORS);
            assert!(
                (geometry.cluster_count() as u64 + 2) * 4
                    <= geometry.fat_length() as u64 * geometry.bytes_per_sector() as u64
            );
        }
    }
}

#[test]
fn cluster_offsets() {
    let geometry = plan(64 * MB as u64, 0).unwrap();

    assert_eq!(geometry.cluster_offset_bytes(0), None);
    assert_eq!(geometry.cluster_offset_bytes(1), None);
    assert_eq!(
        geometry.cluster_offset_bytes(2),
        Some(geometry.cluster_heap_offset_bytes())
    );
    assert_eq!(geometry.cluster_offset_bytes(geometry.cluster_count() + 2), None);
}

#[test]
fn invalid_sector_sizes() {
    use crate::device::MountOptionsBuilder;

    for bytes_per_sector in [1000, 8192, 256] {
        let options = MountOptionsBuilder::default()
            .bytes_per_sector(bytes_per_sector)
            .build()
            .unwrap();
        let err = plan_with(64 * MB as u64, 0, &options).unwrap_err();
        assert!(
            matches!(err, MountError::InvalidBytesPerSector(size) if size == bytes_per_sector),
            "{bytes_per_sector}"
        );
    }
}

#[test]
fn invalid_boundary_alignments() {
    use crate::device::MountOptionsBuilder;

    for align in [3, 0, 4097] {
        let options = MountOptionsBuilder::default()
            .boundary_align(align)
            .build()
            .unwrap();
        let err = plan_with(64 * MB as u64, 0, &options).unwrap_err();
        assert!(
            matches!(err, MountError::InvalidBoundaryAlignment(a) if a == align),
            "{align}"
        );
    }
}

#[test]
fn sector_size_override() {
    use crate::device::MountOptionsBuilder;

    let options = MountOptionsBuilder::default()
        .bytes_per_sector(4096)
        .build()
        .unwrap();
    let geometry = plan_with(64 * MB as u64, MB as u64, &options).unwrap();

    assert_eq!(geometry.bytes_per_sector(), 4096);
    assert_eq!(geometry.sectors_per_cluster(), 1);
    assert_eq!(geometry.volume_length(), 16384);
    // 1 MiB boundary
    assert_eq!(geometry.fat_offset(), 256);
}

#[test]
fn boundary_alignment_override() {
    use crate::device::MountOptionsBuilder;

    let options = MountOptionsBuilder::default()
        .boundary_align(4096)
        .build()
        .unwrap();
    let geometry = plan_with(64 * MB as u64, 0, &options).unwrap();

    // first 4 KiB boundary after both boot regions
    assert_eq!(geometry.fat_offset(), 24);
    assert_eq!(geometry.fat_length(), 128);
    assert_eq!(geometry.cluster_heap_offset(), 152);
    assert_eq!(geometry.cluster_count(), 16365);
    assert_eq!(geometry.cluster_heap_offset_bytes() % 4096, 0);

    let geometry = plan(64 * MB as u64, 0).unwrap();
    assert_eq!(geometry.fat_offset(), 2048);
}
