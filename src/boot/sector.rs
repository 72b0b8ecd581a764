use bytemuck::{Pod, Zeroable};

use crate::geometry::VolumeGeometry;

use super::{BOOT_SIGNATURE, DRIVE_SELECT, FileSystemRevision, VolumeSerialNumber};

/// Size of the boot sector structure. Larger sectors are padded with zeroes.
pub(crate) const BOOT_SECTOR_SIZE: usize = 512;

/// The Main/Backup Boot Sector structure for an exFAT volume.
/// This structure defines the essential parameters required for the file system.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub(crate) struct BootSector {
    /// The jump instruction for CPUs to execute bootstrapping instructions in `boot_code`.
    /// - Must be `0xEB 0x76 0x90` in order (low-order byte first).
    pub(crate) jump_boot: [u8; 3],

    /// The name of the file system on the volume.
    /// - Must be `"EXFAT   "` (including three trailing spaces).
    pub(crate) filesystem_name: [u8; 8],

    /// Reserved field corresponding to the FAT12/16/32 BIOS Parameter Block.
    /// - Must be all zeroes to prevent misinterpretation by FAT-based systems.
    _reserved: [u8; 53],

    /// The sector offset from the beginning of the media to the partition that contains the exFAT volume.
    /// - Always `0`, the virtual volume is not partitioned.
    pub(crate) partition_offset: u64,

    /// The total size of the exFAT volume in sectors.
    pub(crate) volume_length: u64,

    /// The sector offset from the start of the volume to the First FAT.
    /// - Minimum value: `24` (accounts for boot sectors).
    pub(crate) fat_offset: u32,

    /// The number of sectors occupied by each FAT.
    pub(crate) fat_length: u32,

    /// The sector offset from the start of the volume to the Cluster Heap.
    pub(crate) cluster_heap_offset: u32,

    /// The number of clusters in the Cluster Heap.
    pub(crate) cluster_count: u32,

    /// The cluster index of the first cluster in the root directory.
    pub(crate) first_cluster_of_root_directory: u32,

    /// A unique serial number for identifying the volume.
    pub(crate) volume_serial_number: VolumeSerialNumber,

    /// The revision number of the exFAT structures on the volume.
    /// - `0x00 0x01` represents version 1.0.
    pub(crate) file_system_revision: FileSystemRevision,

    /// A set of flags that indicate file system status. Always clean.
    pub(crate) volume_flags: u16,

    /// The sector size in a power-of-two exponent.
    pub(crate) bytes_per_sector_shift: u8,

    /// The number of sectors per cluster in a power-of-two exponent.
    pub(crate) sectors_per_cluster_shift: u8,

    /// The number of File Allocation Tables (FATs) in the volume.
    pub(crate) number_of_fats: u8,

    /// Extended INT 13h drive number.
    pub(crate) drive_select: u8,

    /// The percentage of allocated clusters in the Cluster Heap, rounded down.
    pub(crate) percent_in_use: u8,

    /// Reserved for future use. Must be set to zero.
    _reserved2: [u8; 7],

    /// The volume is not bootable, so this is filled with `0xF4` (Halt instruction).
    pub(crate) boot_code: [u8; 390],

    /// Identifies this sector as a boot sector.
    /// - Must be `0xAA55` to be considered valid.
    pub(crate) boot_signature: u16,
}

impl BootSector {
    pub(crate) fn new(geometry: &VolumeGeometry, serial: VolumeSerialNumber) -> BootSector {
        Self {
            jump_boot: [0xeb, 0x76, 0x90],
            filesystem_name: *b"EXFAT   ",
            _reserved: [0; 53],
            partition_offset: 0,
            volume_length: geometry.volume_length.to_le(),
            fat_offset: geometry.fat_offset.to_le(),
            fat_length: geometry.fat_length.to_le(),
            cluster_heap_offset: geometry.cluster_heap_offset.to_le(),
            cluster_count: geometry.cluster_count.to_le(),
            first_cluster_of_root_directory: geometry.first_cluster_of_root_directory().to_le(),
            volume_serial_number: serial,
            file_system_revision: FileSystemRevision::default(),
            // first FAT active, clean, no media failures
            volume_flags: 0,
            bytes_per_sector_shift: geometry.bytes_per_sector_shift,
            sectors_per_cluster_shift: geometry.sectors_per_cluster_shift,
            number_of_fats: 1,
            drive_select: DRIVE_SELECT,
            percent_in_use: geometry.percent_in_use(),
            _reserved2: [0; 7],
            boot_code: [0xF4; 390],
            boot_signature: BOOT_SIGNATURE.to_le(),
        }
    }
}

#[test]
fn small_simple() {
    let geometry = crate::geometry::plan(256 * crate::MB as u64, 0).unwrap();
    let boot_sector = BootSector::new(&geometry, VolumeSerialNumber::from(0xCAFE));

    assert_eq!(size_of::<BootSector>(), BOOT_SECTOR_SIZE);
    assert_eq!(boot_sector.jump_boot, [0xEB, 0x76, 0x90]);
    assert_eq!(boot_sector.filesystem_name, *b"EXFAT   ");
    assert_eq!(boot_sector.boot_signature, BOOT_SIGNATURE);
    assert_eq!(boot_sector.volume_length, 524288);
    assert_eq!(boot_sector.fat_offset, 2048);
    assert_eq!(boot_sector.cluster_heap_offset, 4096);
    assert_eq!(boot_sector.first_cluster_of_root_directory, 6);
    assert_eq!(boot_sector.bytes_per_sector_shift, 9);
    assert_eq!(boot_sector.sectors_per_cluster_shift, 3);
    assert_eq!(boot_sector.number_of_fats, 1);
}

#[test]
fn field_offsets() {
    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let boot_sector = BootSector::new(&geometry, VolumeSerialNumber::from(0x1234_5678));
    let bytes = bytemuck::bytes_of(&boot_sector);

    assert_eq!(&bytes[0..3], &[0xEB, 0x76, 0x90]);
    assert_eq!(&bytes[3..11], b"EXFAT   ");
    assert!(bytes[11..64].iter().all(|b| *b == 0));
    assert_eq!(u64::from_le_bytes(bytes[72..80].try_into().unwrap()), 2097152);
    assert_eq!(u32::from_le_bytes(bytes[88..92].try_into().unwrap()), 4096);
    assert_eq!(u32::from_le_bytes(bytes[92..96].try_into().unwrap()), 261632);
    assert_eq!(u32::from_le_bytes(bytes[96..100].try_into().unwrap()), 12);
    assert_eq!(u32::from_le_bytes(bytes[100..104].try_into().unwrap()), 0x1234_5678);
    assert_eq!(&bytes[104..106], &[0x00, 0x01]);
    assert_eq!(&bytes[106..108], &[0, 0]);
    assert_eq!(bytes[108], 9);
    assert_eq!(bytes[109], 3);
    assert_eq!(bytes[110], 1);
    assert_eq!(bytes[111], 0x80);
    assert_eq!(bytes[112], geometry.percent_in_use());
    assert!(bytes[120..510].iter().all(|b| *b == 0xF4));
    assert_eq!(&bytes[510..512], &[0x55, 0xAA]);
}
