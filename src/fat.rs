//! File Allocation Table synthesis.
//!
//! Every allocation on the virtual volume is a contiguous chain, so any FAT entry can be computed
//! from the geometry alone without ever materializing the table.

use crate::geometry::{ClusterRange, VolumeGeometry};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FatEntry(pub u32);

impl FatEntry {
    /// The media type FAT entry. `F8h` as the first byte and `FFh` for the remeaining three bytes.
    pub fn media_type() -> FatEntry {
        Self(0xfffffff8u32)
    }

    /// Marks the end of a cluster chain.
    pub fn eof() -> FatEntry {
        Self(0xffffffff)
    }

    pub fn free() -> FatEntry {
        Self(0)
    }
}

/// Computes the FAT entry for `index`.
pub fn entry(geometry: &VolumeGeometry, index: u32) -> FatEntry {
    match index {
        0 => return FatEntry::media_type(),
        1 => return FatEntry::eof(),
        _ => {}
    }

    let chains = [
        geometry.bitmap,
        geometry.upcase_table,
        geometry.root_directory,
        geometry.file,
    ];

    chains
        .iter()
        .find(|chain| chain.contains(index))
        .map_or(FatEntry::free(), |chain| chain_entry(chain, index))
}

fn chain_entry(chain: &ClusterRange, index: u32) -> FatEntry {
    if index + 1 < chain.end() {
        FatEntry(index + 1)
    } else {
        FatEntry::eof()
    }
}

/// Fills `buffer` with the FAT contents starting `offset` bytes into the FAT. Bytes past the last
/// entry describing the cluster heap are zero.
pub fn fill(geometry: &VolumeGeometry, offset: u64, buffer: &mut [u8]) {
    let entry_size = size_of::<FatEntry>() as u64;
    let last_index = geometry.cluster_count as u64 + 1;

    let mut position = offset;
    let mut written = 0;
    while written < buffer.len() {
        let index = position / entry_size;
        let within = (position % entry_size) as usize;
        let amount = (entry_size as usize - within).min(buffer.len() - written);

        let value = if index <= last_index {
            // index fits u32 since cluster_count does
            entry(geometry, index as u32).0
        } else {
            0
        };

        buffer[written..written + amount]
            .copy_from_slice(&value.to_le_bytes()[within..within + amount]);

        written += amount;
        position += amount as u64;
    }
}

#[test]
fn reserved_entries() {
    let geometry = crate::geometry::plan(32 * crate::MB as u64, 0).unwrap();

    let mut buffer = [0u8; 8];
    fill(&geometry, 0, &mut buffer);
    assert_eq!(buffer, [0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn chains() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();

    // bitmap: 2..10
    assert_eq!(entry(&geometry, 2), FatEntry(3));
    assert_eq!(entry(&geometry, 9), FatEntry::eof());
    // upcase table: 10..12
    assert_eq!(entry(&geometry, 10), FatEntry(11));
    assert_eq!(entry(&geometry, 11), FatEntry::eof());
    // root directory: 12
    assert_eq!(entry(&geometry, 12), FatEntry::eof());
    // file: 13..2573
    assert_eq!(entry(&geometry, 13), FatEntry(14));
    assert_eq!(entry(&geometry, 2571), FatEntry(2572));
    assert_eq!(entry(&geometry, 2572), FatEntry::eof());
    // free space
    assert_eq!(entry(&geometry, 2573), FatEntry::free());
    assert_eq!(entry(&geometry, geometry.cluster_count() + 1), FatEntry::free());
}

#[test]
fn empty_file_has_no_chain() {
    let geometry = crate::geometry::plan(64 * crate::MB as u64, 0).unwrap();
    let root = geometry.first_cluster_of_root_directory();

    assert_eq!(entry(&geometry, root), FatEntry::eof());
    assert_eq!(entry(&geometry, root + 1), FatEntry::free());
}

#[test]
fn fill_matches_entries() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();

    let mut sector = [0u8; 512];
    fill(&geometry, 512 * 20, &mut sector);
    for (i, chunk) in sector.chunks_exact(4).enumerate() {
        let index = 128 * 20 + i as u32;
        assert_eq!(u32::from_le_bytes(chunk.try_into().unwrap()), entry(&geometry, index).0);
    }

    // unaligned
    let mut buffer = [0u8; 6];
    fill(&geometry, 9, &mut buffer);
    assert_eq!(&buffer[..3], &[0, 0, 0]);
    assert_eq!(&buffer[3..], &4u32.to_le_bytes()[..3]);
}

#[test]
fn past_last_entry_is_zero() {
    let geometry = crate::geometry::plan(crate::GB as u64, 0).unwrap();
    let end = geometry.fat_length() as u64 * geometry.bytes_per_sector() as u64;

    let mut buffer = [0xAAu8; 512];
    fill(&geometry, end - 512, &mut buffer);
    assert!(buffer.iter().all(|b| *b == 0));
}
