//! The disk types under the names asynchronous-disk clients import.
//!
//! Everything is the same type as in [`crate::disk`]; only the constructors
//! are spelled differently.
use std::path::Path;

pub use crate::disk::{Block, Disk, Err, FileDisk, MemDisk, BLOCK_SIZE};

pub fn new_file_disk<P: AsRef<Path>>(
	path: P,
	num_blocks: u64,
) -> Result<FileDisk, Err> {
	FileDisk::new(path, num_blocks)
}

pub fn new_mem_disk(num_blocks: u64) -> MemDisk {
	MemDisk::new(num_blocks)
}

const _: fn() = || {
	fn is_disk<D: Disk>() {}
	is_disk::<FileDisk>();
	is_disk::<MemDisk>();
};
