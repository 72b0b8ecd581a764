/// Byte offsets of the boot sector excluded from the boot checksum: `volume_flags` and
/// `percent_in_use`.
const EXCLUDED_BOOT_SECTOR_BYTES: [usize; 3] = [106, 107, 112];

#[derive(Copy, Clone, Debug)]
pub(crate) struct Checksum {
    inner: u32,
    sector_size_in_bytes: usize,
}

impl Checksum {
    pub(crate) fn new(sector_size_in_bytes: usize) -> Checksum {
        Self {
            inner: 0,
            sector_size_in_bytes,
        }
    }

    fn add(&mut self, byte: u8) {
        self.inner = ((self.inner & 1) * 0x80000000 + (self.inner >> 1)).wrapping_add(byte as u32);
    }

    /// Updates the checksum according to one entirely empty sector.
    pub(crate) fn zero_sector(&mut self) {
        for _ in 0..self.sector_size_in_bytes {
            self.add(0);
        }
    }

    /// Updates the checksum according to a boot sector.
    pub(crate) fn boot_sector(&mut self, sector: &[u8]) {
        debug_assert_eq!(sector.len(), self.sector_size_in_bytes);
        for (i, byte) in sector.iter().enumerate() {
            if EXCLUDED_BOOT_SECTOR_BYTES.contains(&i) {
                continue;
            }
            self.add(*byte);
        }
    }

    /// Updates the checksum according to a set of identical sectors.
    pub(crate) fn sectors(&mut self, sector: &[u8], amount: usize) {
        debug_assert_eq!(sector.len(), self.sector_size_in_bytes);
        for _ in 0..amount {
            sector.iter().for_each(|byte| self.add(*byte));
        }
    }

    pub(crate) fn get(&self) -> u32 {
        self.inner
    }
}

/// Computes the boot checksum over the first eleven sectors of an already assembled boot region.
pub(crate) fn boot_checksum(region: &[u8], bytes_per_sector: usize) -> u32 {
    let mut checksum = Checksum::new(bytes_per_sector);
    let mut sectors = region.chunks_exact(bytes_per_sector).take(11);

    if let Some(boot_sector) = sectors.next() {
        checksum.boot_sector(boot_sector);
    }
    sectors.for_each(|sector| checksum.sectors(sector, 1));

    checksum.get()
}

#[test]
fn excluded_bytes_do_not_matter() {
    let mut region = vec![0u8; 512 * 11];
    region[0] = 0xEB;
    region[300] = 7;
    let reference = boot_checksum(&region, 512);

    region[106] = 0xFF;
    region[107] = 0x13;
    region[112] = 42;
    assert_eq!(boot_checksum(&region, 512), reference);

    region[111] = 1;
    assert_ne!(boot_checksum(&region, 512), reference);
}

#[test]
fn zero_sectors_match_streaming() {
    let mut boot_sector = vec![0u8; 4096];
    boot_sector[510] = 0x55;
    boot_sector[511] = 0xAA;

    let mut streaming = Checksum::new(4096);
    streaming.boot_sector(&boot_sector);
    for _ in 0..10 {
        streaming.zero_sector();
    }

    let mut region = boot_sector.clone();
    region.resize(4096 * 11, 0);
    assert_eq!(boot_checksum(&region, 4096), streaming.get());
}

#[test]
fn rotation() {
    let mut checksum = Checksum::new(1);
    checksum.sectors(&[1], 1);
    assert_eq!(checksum.get(), 1);
    checksum.sectors(&[0], 1);
    assert_eq!(checksum.get(), 0x80000000);
    checksum.sectors(&[3], 1);
    assert_eq!(checksum.get(), 0x40000003);
}
