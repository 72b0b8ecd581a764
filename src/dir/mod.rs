use entry::{
    BitmapEntry, DirEntry, FileEntrySet, UpcaseTableEntry, VolumeLabelEntry, encode_file_name,
    is_illegal_character,
};

use crate::{error::MountError, geometry::VolumeGeometry};

pub(crate) mod entry;

/// Longest volume label in UTF-16 code units
pub const MAX_LABEL_LENGTH: usize = 11;

/// A volume label: up to 11 UTF-16 code units, stored little-endian, and its length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Label(pub(crate) [u8; 22], pub(crate) u8);

impl Label {
    /// Returns `None` if the label is longer than 11 UTF-16 code units or contains characters
    /// that are not allowed in file names.
    pub fn new(label: String) -> Option<Label> {
        let units: Vec<u16> = label.encode_utf16().collect();
        if units.len() > MAX_LABEL_LENGTH || units.iter().any(|unit| is_illegal_character(*unit)) {
            return None;
        }

        let mut bytes = [0u8; 22];
        for (chunk, unit) in bytes.chunks_exact_mut(2).zip(&units) {
            chunk.copy_from_slice(&unit.to_le_bytes());
        }

        Some(Label(bytes, units.len() as u8))
    }
}

/// Root directory entry.
#[derive(Clone, Debug)]
pub(crate) struct Root {
    vol_label: DirEntry,
    bitmap: DirEntry,
    uptable: DirEntry,
    file: FileEntrySet,
}

impl Root {
    /// Creates the root directory of a volume holding one file called `file_name`.
    pub(crate) fn new(
        geometry: &VolumeGeometry,
        volume_label: &Label,
        file_name: &str,
    ) -> Result<Root, MountError> {
        let name = encode_file_name(file_name)?;

        let vol_label = DirEntry::VolumeLabel(VolumeLabelEntry::new(volume_label));

        let bitmap = DirEntry::Bitmap(BitmapEntry::new(
            geometry.bitmap_clusters().first,
            geometry.bitmap_length_bytes() as u64,
        ));

        let uptable = DirEntry::UpcaseTable(UpcaseTableEntry::new(
            geometry.upcase_table_clusters().first,
        ));

        let file = FileEntrySet::for_mapped_file(geometry, &name);
        file.verify()?;

        Ok(Root {
            vol_label,
            bitmap,
            uptable,
            file,
        })
    }

    /// Serialized entries. The rest of the directory cluster is zero, which marks the end of the
    /// directory.
    pub(crate) fn bytes(&self) -> Vec<u8> {
        [self.vol_label, self.bitmap, self.uptable]
            .iter()
            .chain(self.file.entries())
            .flat_map(DirEntry::bytes)
            .collect()
    }
}

#[test]
fn labels() {
    let label = Label::new("Hello".to_string()).unwrap();
    assert_eq!(label.1, 5);
    assert_eq!(&label.0[..4], &[b'H', 0, b'e', 0]);
    assert!(label.0[10..].iter().all(|b| *b == 0));

    assert!(Label::new("exactly 11c".to_string()).is_some());
    assert!(Label::new("twelve chars".to_string()).is_none());
    assert_eq!(Label::default().1, 0);

    for label in ["a/b", "tab\t", "what?", "\"quoted\"", "a*", "pipe|", "C:", "<>", "back\\"] {
        assert!(Label::new(label.to_string()).is_none(), "{label:?}");
    }
    assert!(Label::new("My Disk".to_string()).is_some());
}

#[test]
fn root_directory() {
    use entry::{
        BITMAP_ENTRY_TYPE, FILE_ENTRY_TYPE, FILE_NAME_ENTRY_TYPE, STREAM_EXTENSION_ENTRY_TYPE,
        UPCASE_TABLE_ENTRY_TYPE, VOLUME_LABEL_ENTRY_TYPE,
    };

    let geometry = crate::geometry::plan(crate::GB as u64, 10 * crate::MB as u64).unwrap();
    let label = Label::new("Virtual".to_string()).unwrap();
    let root = Root::new(&geometry, &label, "disk.iso").unwrap();
    let bytes = root.bytes();

    let types: Vec<u8> = bytes.chunks_exact(32).map(|entry| entry[0]).collect();
    assert_eq!(
        types,
        [
            VOLUME_LABEL_ENTRY_TYPE,
            BITMAP_ENTRY_TYPE,
            UPCASE_TABLE_ENTRY_TYPE,
            FILE_ENTRY_TYPE,
            STREAM_EXTENSION_ENTRY_TYPE,
            FILE_NAME_ENTRY_TYPE
        ]
    );

    // volume label
    assert_eq!(bytes[1], 7);
    assert_eq!(&bytes[2..4], &[b'V', 0]);

    // allocation bitmap
    let bitmap = &bytes[32..64];
    assert_eq!(bitmap[1], 0);
    assert_eq!(u32::from_le_bytes(bitmap[20..24].try_into().unwrap()), 2);
    assert_eq!(u64::from_le_bytes(bitmap[24..32].try_into().unwrap()), 32704);

    // upcase table
    let upcase = &bytes[64..96];
    assert_eq!(u32::from_le_bytes(upcase[4..8].try_into().unwrap()), 0xE619D30D);
    assert_eq!(u32::from_le_bytes(upcase[20..24].try_into().unwrap()), 10);
    assert_eq!(u64::from_le_bytes(upcase[24..32].try_into().unwrap()), 5836);

    // stream extension
    let stream = &bytes[128..160];
    assert_eq!(u32::from_le_bytes(stream[20..24].try_into().unwrap()), 13);
    assert_eq!(u64::from_le_bytes(stream[24..32].try_into().unwrap()), 10485760);
}

#[test]
fn unsupported_file_name() {
    let geometry = crate::geometry::plan(64 * crate::MB as u64, 0).unwrap();
    let err = Root::new(&geometry, &Label::default(), "a<b").unwrap_err();
    assert!(matches!(err, MountError::UnsupportedFileName(name) if name == "a<b"));
}
