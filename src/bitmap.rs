//! Allocation bitmap synthesis. Bit `i` describes cluster `i + 2`.

use crate::{
    FIRST_USABLE_CLUSTER_INDEX,
    geometry::{ClusterRange, VolumeGeometry},
};

/// Bits of the bitmap byte covering clusters `first..first + 8` that belong to `range`.
fn mask(range: &ClusterRange, first: u64) -> u8 {
    let low = (range.first as u64).max(first);
    let high = (range.end() as u64).min(first + 8);
    if low >= high {
        return 0;
    }

    (((1u16 << (high - low)) - 1) << (low - first)) as u8
}

/// Fills `buffer` with the allocation bitmap starting `offset` bytes into it. Bytes past the
/// bitmap itself, up to the end of its clusters, are zero.
pub fn fill(geometry: &VolumeGeometry, offset: u64, buffer: &mut [u8]) {
    let allocations = [
        geometry.bitmap,
        geometry.upcase_table,
        geometry.root_directory,
        geometry.file,
    ];
    let length = geometry.bitmap_length_bytes() as u64;

    for (i, byte) in buffer.iter_mut().enumerate() {
        let index = offset + i as u64;
        *byte = if index < length {
            let first = FIRST_USABLE_CLUSTER_INDEX as u64 + index * 8;
            allocations
                .iter()
                .fold(0, |acc, range| acc | mask(range, first))
        } else {
            0
        };
    }
}

#[test]
fn masks() {
    let range = ClusterRange { first: 2, count: 3 };
    assert_eq!(mask(&range, 2), 0b0000_0111);

    let range = ClusterRange { first: 5, count: 20 };
    assert_eq!(mask(&range, 2), 0b1111_1000);
    assert_eq!(mask(&range, 10), 0xFF);
    assert_eq!(mask(&range, 18), 0b0111_1111);
    assert_eq!(mask(&range, 26), 0);

    assert_eq!(mask(&ClusterRange { first: 9, count: 0 }, 2), 0);
}

#[test]
fn allocated_prefix() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    // clusters 2..2573 are in use
    let allocated = geometry.allocated_clusters();
    assert_eq!(allocated, 2571);

    let mut buffer = vec![0u8; 512];
    fill(&geometry, 0, &mut buffer);

    assert!(buffer[..321].iter().all(|b| *b == 0xFF));
    assert_eq!(buffer[321], 0b0000_0111);
    assert!(buffer[322..].iter().all(|b| *b == 0));
}

#[test]
fn past_bitmap_is_zero() {
    let geometry = crate::geometry::plan(crate::MB as u64, 900 * crate::KB as u64).unwrap();
    let length = geometry.bitmap_length_bytes() as u64;

    let mut buffer = vec![0xAAu8; 64];
    fill(&geometry, length - 1, &mut buffer);
    assert!(buffer[1..].iter().all(|b| *b == 0));
}
