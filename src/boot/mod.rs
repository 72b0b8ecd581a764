use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use bytemuck::{Pod, Zeroable, bytes_of};
use checksum::{Checksum, boot_checksum};
use log::trace;
use sector::{BOOT_SECTOR_SIZE, BootSector};

use crate::{error::MountError, geometry::VolumeGeometry};

pub(crate) mod checksum;
pub(crate) mod sector;

/// Offset for main boot region (in sectors)
pub const MAIN_BOOT_OFFSET: u64 = 0;
/// Offset to backup boot region (in sectors)
pub const BACKUP_BOOT_OFFSET: u64 = 12;
/// Sectors per boot region
pub const BOOT_REGION_LENGTH: u64 = 12;

pub(crate) const DRIVE_SELECT: u8 = 0x80;
/// Signature of regular boot sector
pub(crate) const BOOT_SIGNATURE: u16 = 0xAA55;
/// Singature of extended boot sector
pub(crate) const EXTENDED_BOOT_SIGNATURE: u32 = 0xAA550000;

/// Number of extended boot sectors per boot region
pub(crate) const EXTENDED_BOOT: usize = 8;

/// Structure representing the file system revision.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub(crate) struct FileSystemRevision {
    /// Minor version of the exFAT file system (low-order byte).
    vermin: u8,
    /// Major version of the exFAT file system (high-order byte).
    vermaj: u8,
}

impl Default for FileSystemRevision {
    fn default() -> Self {
        Self {
            vermin: 0,
            vermaj: 1,
        }
    }
}

/// Structure representing the unique volume serial number.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct VolumeSerialNumber(u32);

impl VolumeSerialNumber {
    /// Derives a serial number from the current time.
    pub fn try_new() -> Result<VolumeSerialNumber, SystemTimeError> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?;
        Ok(VolumeSerialNumber((now.as_secs() as u32).to_le()))
    }

    pub fn get(&self) -> u32 {
        u32::from_le(self.0)
    }
}

impl From<u32> for VolumeSerialNumber {
    fn from(value: u32) -> Self {
        VolumeSerialNumber(value.to_le())
    }
}

/// A fully assembled boot region: boot sector, extended boot sectors, OEM parameters, reserved
/// sector and checksum sector. The main and backup boot regions are byte-identical, so both are
/// served from this one buffer.
#[derive(Clone, Debug)]
pub struct BootRegion {
    bytes: Vec<u8>,
    checksum: u32,
}

impl BootRegion {
    pub fn new(
        geometry: &VolumeGeometry,
        serial: VolumeSerialNumber,
    ) -> Result<BootRegion, MountError> {
        let bytes_per_sector = geometry.bytes_per_sector() as usize;
        let mut bytes = vec![0u8; bytes_per_sector * BOOT_REGION_LENGTH as usize];
        let mut checksum = Checksum::new(bytes_per_sector);

        let boot_sector = BootSector::new(geometry, serial);
        bytes[..BOOT_SECTOR_SIZE].copy_from_slice(bytes_of(&boot_sector));
        checksum.boot_sector(&bytes[..bytes_per_sector]);

        // extended boot sectors
        let mut extended = vec![0u8; bytes_per_sector];
        extended[bytes_per_sector - 4..].copy_from_slice(&EXTENDED_BOOT_SIGNATURE.to_le_bytes());
        for sector in bytes[bytes_per_sector..]
            .chunks_exact_mut(bytes_per_sector)
            .take(EXTENDED_BOOT)
        {
            sector.copy_from_slice(&extended);
        }
        checksum.sectors(&extended, EXTENDED_BOOT);

        // oem parameters and reserved sector
        checksum.zero_sector();
        checksum.zero_sector();

        let checksum = checksum.get();
        let checksum_sector = (BOOT_REGION_LENGTH as usize - 1) * bytes_per_sector;
        for chunk in bytes[checksum_sector..].chunks_exact_mut(4) {
            chunk.copy_from_slice(&checksum.to_le_bytes());
        }

        verify(&bytes, bytes_per_sector, checksum)?;
        trace!("boot region checksum: {checksum:#010x}");

        Ok(BootRegion { bytes, checksum })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }
}

/// Recomputes the checksum of an assembled boot region and compares it to `expected`.
fn verify(region: &[u8], bytes_per_sector: usize, expected: u32) -> Result<(), MountError> {
    let actual = boot_checksum(region, bytes_per_sector);
    if actual != expected {
        return Err(MountError::ChecksumInternalError {
            region: "boot region",
            expected,
            actual,
        });
    }

    Ok(())
}

#[test]
fn boot_region() {
    let geometry = crate::geometry::plan(32 * crate::MB as u64, 0).unwrap();
    let region = BootRegion::new(&geometry, VolumeSerialNumber::from(1)).unwrap();
    let bytes = region.bytes();
    let bytes_per_sector = 512;

    assert_eq!(bytes.len(), 12 * bytes_per_sector);
    assert_eq!(&bytes[3..11], b"EXFAT   ");

    for sector in bytes.chunks_exact(bytes_per_sector).skip(1).take(8) {
        assert!(sector[..bytes_per_sector - 4].iter().all(|b| *b == 0));
        assert_eq!(&sector[bytes_per_sector - 4..], &[0x00, 0x00, 0x55, 0xAA]);
    }

    // oem parameters and reserved sector
    assert!(bytes[9 * bytes_per_sector..11 * bytes_per_sector].iter().all(|b| *b == 0));

    let expected = region.checksum().to_le_bytes();
    for chunk in bytes[11 * bytes_per_sector..].chunks_exact(4) {
        assert_eq!(chunk, expected);
    }
}

#[test]
fn independent_checksum() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let region = BootRegion::new(&geometry, VolumeSerialNumber::from(0x1234_5678)).unwrap();
    let bytes = region.bytes();

    let mut sum = 0u32;
    for (i, byte) in bytes[..11 * 512].iter().enumerate() {
        if i == 106 || i == 107 || i == 112 {
            continue;
        }
        sum = sum.rotate_right(1).wrapping_add(*byte as u32);
    }

    assert_eq!(sum, region.checksum());
}

#[test]
fn large_sectors() {
    let geometry = crate::geometry::plan(crate::geometry::LARGE_SECTOR_THRESHOLD + 4096, 0).unwrap();
    let region = BootRegion::new(&geometry, VolumeSerialNumber::from(7)).unwrap();
    let bytes = region.bytes();

    assert_eq!(bytes.len(), 12 * 4096);
    assert_eq!(&bytes[510..512], &[0x55, 0xAA]);
    assert!(bytes[512..4096].iter().all(|b| *b == 0));
    assert_eq!(&bytes[2 * 4096 - 4..2 * 4096], &[0x00, 0x00, 0x55, 0xAA]);
}

#[test]
fn corrupted_region() {
    let geometry = crate::geometry::plan(32 * crate::MB as u64, 0).unwrap();
    let region = BootRegion::new(&geometry, VolumeSerialNumber::from(3)).unwrap();
    let checksum = region.checksum();
    let mut bytes = region.bytes().to_vec();
    verify(&bytes, 512, checksum).unwrap();

    // volume flags are not covered by the checksum
    bytes[106] ^= 0x02;
    verify(&bytes, 512, checksum).unwrap();

    // first extended boot sector
    bytes[512 + 100] ^= 0x01;
    let err = verify(&bytes, 512, checksum).unwrap_err();
    assert!(matches!(
        err,
        MountError::ChecksumInternalError { region: "boot region", expected, actual }
            if expected == checksum && actual != checksum
    ));
}
