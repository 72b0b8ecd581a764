use crate::{
    FIRST_USABLE_CLUSTER_INDEX,
    error::ClusterError,
    geometry::{ClusterRange, VolumeGeometry},
};

/// Metadata regions stored in the cluster heap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetadataRegion {
    Bitmap,
    UpcaseTable,
    RootDirectory,
}

/// What a cluster of the heap holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClusterKind {
    /// Metadata, with the byte offset of the cluster within its region.
    Metadata(MetadataRegion, u64),
    /// File data, with the byte offset of the cluster within the host file.
    FileData(u64),
    /// Free space.
    Unmapped,
}

/// Classifies clusters by range checks against the fixed layout of the heap. All allocations are
/// contiguous, so each region is a single run.
#[derive(Copy, Clone, Debug)]
pub struct ClusterMap {
    regions: [(MetadataRegion, ClusterRange); 3],
    file: ClusterRange,
    free: ClusterRange,
    cluster_count: u32,
    bytes_per_cluster: u32,
}

impl ClusterMap {
    pub fn new(geometry: &VolumeGeometry) -> ClusterMap {
        // allocations are packed at the start of the heap, everything after them is free
        let first_free = geometry
            .file_clusters()
            .end()
            .max(geometry.root_directory_clusters().end());
        let free = ClusterRange {
            first: first_free,
            count: geometry.cluster_count() + FIRST_USABLE_CLUSTER_INDEX - first_free,
        };

        ClusterMap {
            regions: [
                (MetadataRegion::Bitmap, geometry.bitmap_clusters()),
                (MetadataRegion::UpcaseTable, geometry.upcase_table_clusters()),
                (MetadataRegion::RootDirectory, geometry.root_directory_clusters()),
            ],
            file: geometry.file_clusters(),
            free,
            cluster_count: geometry.cluster_count(),
            bytes_per_cluster: geometry.bytes_per_cluster(),
        }
    }

    pub fn classify(&self, cluster: u32) -> Result<ClusterKind, ClusterError> {
        self.run(cluster).map(|(kind, _)| kind)
    }

    /// Classifies `cluster` and returns the run of clusters it belongs to.
    pub fn run(&self, cluster: u32) -> Result<(ClusterKind, ClusterRange), ClusterError> {
        if cluster < FIRST_USABLE_CLUSTER_INDEX
            || cluster - FIRST_USABLE_CLUSTER_INDEX >= self.cluster_count
        {
            return Err(ClusterError::OutOfRange(cluster));
        }

        for (region, range) in &self.regions {
            if let Some(offset) = range.byte_offset(cluster, self.bytes_per_cluster) {
                return Ok((ClusterKind::Metadata(*region, offset), *range));
            }
        }

        if let Some(offset) = self.file.byte_offset(cluster, self.bytes_per_cluster) {
            return Ok((ClusterKind::FileData(offset), self.file));
        }

        Ok((ClusterKind::Unmapped, self.free))
    }
}

#[test]
fn classification() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let map = ClusterMap::new(&geometry);

    assert_eq!(map.classify(0), Err(ClusterError::OutOfRange(0)));
    assert_eq!(map.classify(1), Err(ClusterError::OutOfRange(1)));
    assert_eq!(
        map.classify(2),
        Ok(ClusterKind::Metadata(MetadataRegion::Bitmap, 0))
    );
    assert_eq!(
        map.classify(9),
        Ok(ClusterKind::Metadata(MetadataRegion::Bitmap, 7 * 4096))
    );
    assert_eq!(
        map.classify(11),
        Ok(ClusterKind::Metadata(MetadataRegion::UpcaseTable, 4096))
    );
    assert_eq!(
        map.classify(12),
        Ok(ClusterKind::Metadata(MetadataRegion::RootDirectory, 0))
    );
    assert_eq!(map.classify(13), Ok(ClusterKind::FileData(0)));
    assert_eq!(map.classify(2572), Ok(ClusterKind::FileData(2559 * 4096)));
    assert_eq!(map.classify(2573), Ok(ClusterKind::Unmapped));

    let last = geometry.cluster_count() + 1;
    assert_eq!(map.classify(last), Ok(ClusterKind::Unmapped));
    assert_eq!(
        map.classify(last + 1),
        Err(ClusterError::OutOfRange(last + 1))
    );
}

#[test]
fn runs() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let map = ClusterMap::new(&geometry);

    let (_, run) = map.run(100).unwrap();
    assert_eq!(run, geometry.file_clusters());

    let (_, run) = map.run(5).unwrap();
    assert_eq!(run, geometry.bitmap_clusters());

    let (kind, run) = map.run(10_000).unwrap();
    assert_eq!(kind, ClusterKind::Unmapped);
    assert_eq!(
        run,
        ClusterRange {
            first: 2573,
            count: 259061
        }
    );
    assert_eq!(run.end(), geometry.cluster_count() + 2);
    assert_eq!(map.run(2573).unwrap().1, run);

}
