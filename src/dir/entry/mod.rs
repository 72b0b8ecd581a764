// http://ntfs.com/exfat-directory-structure.htm

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable, bytes_of};

use crate::{
    Label,
    error::MountError,
    geometry::VolumeGeometry,
    upcase_table::{DEFAULT_UPCASE_TABLE_CHECKSUM, UPCASE_TABLE_SIZE_BYTES, upcase},
};

/// Size of a single directory entry in bytes
pub(crate) const ENTRY_SIZE: usize = 32;
/// UTF-16 code units held by a single file name entry
pub(crate) const FILE_NAME_ENTRY_UNITS: usize = 15;
/// Longest file name in UTF-16 code units
pub(crate) const MAX_FILE_NAME_LENGTH: usize = 255;

const ILLEGAL_FILE_NAME_CHARACTERS: [u16; 9] = [
    b'"' as u16,
    b'*' as u16,
    b'/' as u16,
    b':' as u16,
    b'<' as u16,
    b'>' as u16,
    b'?' as u16,
    b'\\' as u16,
    b'|' as u16,
];

pub(crate) const BITMAP_ENTRY_TYPE: u8 = 0x81;
pub(crate) const UPCASE_TABLE_ENTRY_TYPE: u8 = 0x82;
pub(crate) const VOLUME_LABEL_ENTRY_TYPE: u8 = 0x83;
pub(crate) const FILE_ENTRY_TYPE: u8 = 0x85;
pub(crate) const STREAM_EXTENSION_ENTRY_TYPE: u8 = 0xC0;
pub(crate) const FILE_NAME_ENTRY_TYPE: u8 = 0xC1;

/// A generic exFAT directory entry. The entry type byte is followed by a 31 byte payload.
#[derive(Copy, Clone, Debug)]
pub(crate) enum DirEntry {
    // critical primary:
    Bitmap(BitmapEntry),
    UpcaseTable(UpcaseTableEntry),
    VolumeLabel(VolumeLabelEntry),
    File(FileEntry),
    // critical secondary:
    StreamExtension(StreamExtensionEntry),
    FileName(FileNameEntry),
}

impl DirEntry {
    pub(crate) fn entry_type(&self) -> u8 {
        match self {
            DirEntry::Bitmap(_) => BITMAP_ENTRY_TYPE,
            DirEntry::UpcaseTable(_) => UPCASE_TABLE_ENTRY_TYPE,
            DirEntry::VolumeLabel(_) => VOLUME_LABEL_ENTRY_TYPE,
            DirEntry::File(_) => FILE_ENTRY_TYPE,
            DirEntry::StreamExtension(_) => STREAM_EXTENSION_ENTRY_TYPE,
            DirEntry::FileName(_) => FILE_NAME_ENTRY_TYPE,
        }
    }

    /// Retrieves the bytes of the directory entry.
    pub(crate) fn bytes(&self) -> [u8; ENTRY_SIZE] {
        let payload = match self {
            DirEntry::Bitmap(entry) => bytes_of(entry),
            DirEntry::UpcaseTable(entry) => bytes_of(entry),
            DirEntry::VolumeLabel(entry) => bytes_of(entry),
            DirEntry::File(entry) => bytes_of(entry),
            DirEntry::StreamExtension(entry) => bytes_of(entry),
            DirEntry::FileName(entry) => bytes_of(entry),
        };

        let mut bytes = [0u8; ENTRY_SIZE];
        bytes[0] = self.entry_type();
        bytes[1..].copy_from_slice(payload);
        bytes
    }
}

/// Computes the checksum of a directory entry set. Bytes 2 and 3 of the first entry hold the
/// checksum itself and are skipped.
pub(crate) fn entry_set_checksum(entries: &[[u8; ENTRY_SIZE]]) -> u16 {
    let mut sum = 0u16;
    for (i, entry) in entries.iter().enumerate() {
        for (j, byte) in entry.iter().enumerate() {
            if i == 0 && (j == 2 || j == 3) {
                continue;
            }
            sum = sum.rotate_right(1).wrapping_add(*byte as u16);
        }
    }
    sum
}

/// Computes the name hash over the upcased file name.
pub(crate) fn name_hash(name: &[u16]) -> u16 {
    name.iter()
        .flat_map(|unit| upcase(*unit).to_le_bytes())
        .fold(0u16, |sum, byte| sum.rotate_right(1).wrapping_add(byte as u16))
}

/// Control characters and the characters exFAT forbids in file names and volume labels.
pub(crate) fn is_illegal_character(unit: u16) -> bool {
    unit < 0x20 || ILLEGAL_FILE_NAME_CHARACTERS.contains(&unit)
}

/// Encodes a file name as UTF-16, rejecting names exFAT cannot store.
pub(crate) fn encode_file_name(name: &str) -> Result<Vec<u16>, MountError> {
    let units: Vec<u16> = name.encode_utf16().collect();

    let illegal = units.iter().any(|unit| is_illegal_character(*unit));

    if units.is_empty()
        || units.len() > MAX_FILE_NAME_LENGTH
        || illegal
        || name == "."
        || name == ".."
    {
        return Err(MountError::UnsupportedFileName(name.to_owned()));
    }

    Ok(units)
}

// critical primary directory entry types:
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct BitmapEntry {
    pub(crate) flags: u8,
    pub(crate) _reserved: [u8; 18],
    pub(crate) first_cluster: u32,
    pub(crate) data_len: u64,
}

impl BitmapEntry {
    pub(crate) fn new(first_cluster: u32, data_len: u64) -> Self {
        Self {
            flags: 0, // only one FAT and allocation bitmap exist
            _reserved: [0; 18],
            first_cluster: first_cluster.to_le(),
            data_len: data_len.to_le(),
        }
    }
}

#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct UpcaseTableEntry {
    pub(crate) _reserved1: [u8; 3],
    pub(crate) table_checksum: u32,
    pub(crate) _reserved2: [u8; 12],
    pub(crate) first_cluster: u32,
    pub(crate) data_len: u64,
}

impl UpcaseTableEntry {
    pub(crate) fn new(first_cluster: u32) -> Self {
        Self {
            _reserved1: [0; 3],
            table_checksum: DEFAULT_UPCASE_TABLE_CHECKSUM.to_le(),
            _reserved2: [0; 12],
            first_cluster: first_cluster.to_le(),
            data_len: (UPCASE_TABLE_SIZE_BYTES as u64).to_le(),
        }
    }
}

#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct VolumeLabelEntry {
    pub(crate) character_count: u8,
    pub(crate) volume_label: [u8; 22],
    pub(crate) _reserved: u64,
}

impl VolumeLabelEntry {
    pub(crate) fn new(label: &Label) -> Self {
        VolumeLabelEntry {
            character_count: label.1,
            volume_label: label.0,
            _reserved: 0,
        }
    }
}

#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct FileEntry {
    pub(crate) secondary_count: u8,
    pub(crate) set_checksum: u16,
    pub(crate) file_attributes: u16,
    pub(crate) _reserved1: u16,
    pub(crate) create_timestamp: u32,
    pub(crate) last_modified_timestamp: u32,
    pub(crate) last_accessed_timestamp: u32,
    pub(crate) create_10ms_increment: u8,
    pub(crate) last_modified_10ms_increment: u8,
    pub(crate) create_utc_offset: u8,
    pub(crate) last_modified_utc_offset: u8,
    pub(crate) last_accessed_utc_offset: u8,
    pub(crate) _reserved2: [u8; 7],
}

impl FileEntry {
    /// A file entry with zeroed timestamps. The set checksum is filled in by [`FileEntrySet`].
    pub(crate) fn new(secondary_count: u8, file_attributes: FileAttributes) -> Self {
        FileEntry {
            secondary_count,
            file_attributes: file_attributes.bits().to_le(),
            ..Default::default()
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub(crate) struct FileAttributes: u16 {
        const READ_ONLY = 0x0001;
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub(crate) struct GeneralSecondaryFlags: u8 {
        const ALLOCATION_POSSIBLE = 1;
        /// The allocation is contiguous and its FAT chain must not be consulted.
        const NO_FAT_CHAIN = 1 << 1;
    }
}

// critcal secondary directory entry types:
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct StreamExtensionEntry {
    pub(crate) general_secondary_flags: u8,
    pub(crate) _reserved1: u8,
    /// Length unicode string filename
    pub(crate) name_length: u8,
    pub(crate) name_hash: u16,
    pub(crate) _reserved2: u16,
    pub(crate) valid_data_length: u64,
    pub(crate) _reserved3: u32,
    pub(crate) first_cluster: u32,
    pub(crate) data_len: u64,
}

impl StreamExtensionEntry {
    pub(crate) fn new(name: &[u16], first_cluster: u32, data_len: u64) -> Self {
        let mut flags = GeneralSecondaryFlags::ALLOCATION_POSSIBLE;
        if first_cluster != 0 {
            flags |= GeneralSecondaryFlags::NO_FAT_CHAIN;
        }

        StreamExtensionEntry {
            general_secondary_flags: flags.bits(),
            // names are at most 255 units long
            name_length: name.len() as u8,
            name_hash: name_hash(name).to_le(),
            valid_data_length: data_len.to_le(),
            first_cluster: first_cluster.to_le(),
            data_len: data_len.to_le(),
            ..Default::default()
        }
    }
}

#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub(crate) struct FileNameEntry {
    pub(crate) general_secondary_flags: u8,
    pub(crate) file_name: [u8; 30],
}

impl FileNameEntry {
    /// Holds up to 15 code units of a file name, zero padded.
    pub(crate) fn new(units: &[u16]) -> Self {
        let mut file_name = [0u8; 30];
        for (chunk, unit) in file_name.chunks_exact_mut(2).zip(units) {
            chunk.copy_from_slice(&unit.to_le_bytes());
        }

        FileNameEntry {
            general_secondary_flags: GeneralSecondaryFlags::empty().bits(),
            file_name,
        }
    }
}

/// The File, Stream Extension and File Name entries describing one file.
#[derive(Clone, Debug)]
pub(crate) struct FileEntrySet {
    entries: Vec<DirEntry>,
}

impl FileEntrySet {
    pub(crate) fn new(name: &[u16], first_cluster: u32, data_len: u64) -> FileEntrySet {
        let name_entries = name
            .chunks(FILE_NAME_ENTRY_UNITS)
            .map(|units| DirEntry::FileName(FileNameEntry::new(units)));
        // 1 stream extension + at most 17 file name entries
        let secondary_count = 1 + name.len().div_ceil(FILE_NAME_ENTRY_UNITS) as u8;

        let mut file = FileEntry::new(secondary_count, FileAttributes::READ_ONLY);
        let stream = StreamExtensionEntry::new(name, first_cluster, data_len);

        let mut entries = vec![DirEntry::File(file), DirEntry::StreamExtension(stream)];
        entries.extend(name_entries);

        let bytes: Vec<[u8; ENTRY_SIZE]> = entries.iter().map(DirEntry::bytes).collect();
        file.set_checksum = entry_set_checksum(&bytes).to_le();
        entries[0] = DirEntry::File(file);

        FileEntrySet { entries }
    }

    /// Creates the entry set of the file mapped onto the volume.
    pub(crate) fn for_mapped_file(geometry: &VolumeGeometry, name: &[u16]) -> FileEntrySet {
        let clusters = geometry.file_clusters();
        let first_cluster = if clusters.is_empty() { 0 } else { clusters.first };

        FileEntrySet::new(name, first_cluster, geometry.file_length())
    }

    pub(crate) fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Recomputes the set checksum from the serialized entries and compares it to the stored one.
    pub(crate) fn verify(&self) -> Result<(), MountError> {
        let bytes: Vec<[u8; ENTRY_SIZE]> = self.entries.iter().map(DirEntry::bytes).collect();
        let expected = bytes
            .first()
            .map_or(0, |file| u16::from_le_bytes([file[2], file[3]]));
        let actual = entry_set_checksum(&bytes);

        if expected != actual {
            return Err(MountError::ChecksumInternalError {
                region: "file entry set",
                expected: expected as u32,
                actual: actual as u32,
            });
        }

        Ok(())
    }
}

#[test]
fn entry_sizes() {
    assert_eq!(size_of::<BitmapEntry>(), ENTRY_SIZE - 1);
    assert_eq!(size_of::<UpcaseTableEntry>(), ENTRY_SIZE - 1);
    assert_eq!(size_of::<VolumeLabelEntry>(), ENTRY_SIZE - 1);
    assert_eq!(size_of::<FileEntry>(), ENTRY_SIZE - 1);
    assert_eq!(size_of::<StreamExtensionEntry>(), ENTRY_SIZE - 1);
    assert_eq!(size_of::<FileNameEntry>(), ENTRY_SIZE - 1);
}

#[test]
fn file_names() {
    assert_eq!(encode_file_name("disk.iso").unwrap().len(), 8);
    assert_eq!(encode_file_name("größe 𝄞.txt").unwrap().len(), 12);
    assert_eq!(encode_file_name(&"a".repeat(255)).unwrap().len(), 255);

    let long = "a".repeat(256);
    for name in ["", ".", "..", "a/b", "a:b", "what?", "tab\t", "pipe|", long.as_str()] {
        assert!(
            matches!(
                encode_file_name(name),
                Err(MountError::UnsupportedFileName(_))
            ),
            "{name:?}"
        );
    }
}

#[test]
fn name_hash_is_case_insensitive() {
    let lower: Vec<u16> = "hello.txt".encode_utf16().collect();
    let upper: Vec<u16> = "HELLO.TXT".encode_utf16().collect();
    assert_eq!(name_hash(&lower), name_hash(&upper));

    // hash over the bytes "A\0"
    let a: Vec<u16> = "a".encode_utf16().collect();
    assert_eq!(name_hash(&a), 0u16.rotate_right(1).wrapping_add(0x41).rotate_right(1));
}

#[test]
fn file_entry_set() {
    let name: Vec<u16> = "a_rather_long_file_name.bin".encode_utf16().collect();
    let set = FileEntrySet::new(&name, 13, 10 * crate::MB as u64);
    let bytes: Vec<[u8; ENTRY_SIZE]> = set.entries().iter().map(DirEntry::bytes).collect();

    // 27 units need two file name entries
    assert_eq!(bytes.len(), 4);
    assert_eq!(bytes[0][0], FILE_ENTRY_TYPE);
    assert_eq!(bytes[0][1], 3);
    assert_eq!(u16::from_le_bytes([bytes[0][4], bytes[0][5]]), 0x0001);
    assert!(bytes[0][8..32].iter().all(|b| *b == 0));

    assert_eq!(bytes[1][0], STREAM_EXTENSION_ENTRY_TYPE);
    assert_eq!(bytes[1][1], 0b11);
    assert_eq!(bytes[1][3], 27);
    assert_eq!(u16::from_le_bytes([bytes[1][4], bytes[1][5]]), name_hash(&name));
    assert_eq!(u64::from_le_bytes(bytes[1][8..16].try_into().unwrap()), 10485760);
    assert_eq!(u32::from_le_bytes(bytes[1][20..24].try_into().unwrap()), 13);
    assert_eq!(u64::from_le_bytes(bytes[1][24..32].try_into().unwrap()), 10485760);

    assert_eq!(bytes[2][0], FILE_NAME_ENTRY_TYPE);
    assert_eq!(&bytes[2][2..4], &[b'a', 0]);
    assert_eq!(bytes[3][0], FILE_NAME_ENTRY_TYPE);
    // 12 remaining units, then zero padding
    assert_eq!(&bytes[3][24..26], &[b'n', 0]);
    assert!(bytes[3][26..32].iter().all(|b| *b == 0));

    set.verify().unwrap();
    assert_eq!(
        u16::from_le_bytes([bytes[0][2], bytes[0][3]]),
        entry_set_checksum(&bytes)
    );
}

#[test]
fn empty_file_entry_set() {
    let name: Vec<u16> = "empty".encode_utf16().collect();
    let set = FileEntrySet::new(&name, 0, 0);
    let stream = set.entries()[1].bytes();

    assert_eq!(stream[1], 0b01);
    assert_eq!(u32::from_le_bytes(stream[20..24].try_into().unwrap()), 0);
    assert_eq!(u64::from_le_bytes(stream[24..32].try_into().unwrap()), 0);
    set.verify().unwrap();
}

#[test]
fn corrupted_entry_set() {
    let name: Vec<u16> = "disk.iso".encode_utf16().collect();
    let mut set = FileEntrySet::new(&name, 13, 4096);
    set.verify().unwrap();

    // same length, different name
    let other: Vec<u16> = "disk.isp".encode_utf16().collect();
    set.entries[2] = DirEntry::FileName(FileNameEntry::new(&other));

    let err = set.verify().unwrap_err();
    assert!(matches!(
        err,
        MountError::ChecksumInternalError { region: "file entry set", expected, actual }
            if expected != actual
    ));
}

#[test]
fn checksum_skips_own_field() {
    let mut entries = [[0u8; ENTRY_SIZE]; 2];
    entries[0][0] = FILE_ENTRY_TYPE;
    entries[1][0] = STREAM_EXTENSION_ENTRY_TYPE;
    let reference = entry_set_checksum(&entries);

    entries[0][2] = 0xAB;
    entries[0][3] = 0xCD;
    assert_eq!(entry_set_checksum(&entries), reference);

    entries[1][2] = 0xAB;
    assert_ne!(entry_set_checksum(&entries), reference);
}
