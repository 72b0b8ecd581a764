//! # Virtual exFAT
//!
//! A read-only block device that presents a single host file as if it were stored on an exFAT
//! volume. No disk image is ever written: the boot region, FAT, allocation bitmap, upcase table
//! and root directory are synthesized on demand, and reads that land in the mapped file are
//! served straight from the host file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use virtual_exfat::{GB, MountOptionsBuilder, mount_with};
//!
//! let options = MountOptionsBuilder::default()
//!     .volume_serial(0x1234_5678)
//!     .build()
//!     .unwrap();
//!
//! let device = mount_with("disk.iso", GB as u64, options).unwrap();
//!
//! // boot sector
//! let sector = device.read(0, 1).unwrap();
//! assert_eq!(&sector[3..11], b"EXFAT   ");
//! ```
//!
//! ## Limitations
//! Exactly one host file can be mapped per volume, the volume is read-only, and all timestamps
//! are zero.

pub mod bitmap;
/// Boot region synthesis
pub mod boot;
/// Cluster classification
pub mod cluster;
pub mod device;
/// Root directory synthesis
pub mod dir;
/// Disk utility functions
pub mod disk;
pub mod error;
pub mod fat;
pub mod geometry;
/// Host file registry
pub mod mapping;
pub mod upcase_table;

pub use device::{Device, MountOptions, MountOptionsBuilder, mount, mount_with};
pub use dir::Label;
pub use geometry::{ClusterSizePolicy, VolumeGeometry};

pub const TB: u64 = 1024 * 1024 * 1024 * 1024;
pub const GB: u32 = 1024 * 1024 * 1024;
pub const MB: u32 = 1024 * 1024;
pub const KB: u16 = 1024;

pub const DEFAULT_BOUNDARY_ALIGNMENT: u32 = 1024 * 1024;

/// First usable cluster index of the cluster heap
pub const FIRST_USABLE_CLUSTER_INDEX: u32 = 2;
