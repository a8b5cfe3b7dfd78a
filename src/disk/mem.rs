use core::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{check_len, Block, Disk, Err};

/// Disk held entirely in memory, one lock per block.
///
/// Clones share the same blocks. Nothing is durable, so [`Disk::barrier`]
/// has nothing to do.
#[derive(Clone)]
pub struct MemDisk(Arc<[RwLock<Block>]>);

impl MemDisk {
	pub fn new(num_blocks: u64) -> Self {
		let blocks = (0..num_blocks).map(|_| RwLock::new(Block::zeroed()));
		Self(blocks.collect())
	}

	fn block(&self, addr: u64) -> Result<&RwLock<Block>, Err> {
		let size = self.size();
		usize::try_from(addr)
			.ok()
			.and_then(|i| self.0.get(i))
			.ok_or(Err::OutOfBounds { addr, size })
	}
}

impl Disk for MemDisk {
	fn read_to(&self, addr: u64, buf: &mut [u8]) -> Result<(), Err> {
		check_len(buf.len())?;
		buf.copy_from_slice(&self.block(addr)?.read());
		Ok(())
	}

	fn write(&self, addr: u64, buf: &[u8]) -> Result<(), Err> {
		check_len(buf.len())?;
		self.block(addr)?.write().copy_from_slice(buf);
		Ok(())
	}

	fn size(&self) -> u64 {
		self.0.len() as u64
	}

	fn barrier(&self) -> Result<(), Err> {
		Ok(())
	}
}

impl fmt::Debug for MemDisk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MemDisk({} blocks)", self.size())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::disk::BLOCK_SIZE;
	use crate::test_utils::{arb_writes, check_against_model};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use std::thread;

	#[test]
	fn starts_zeroed() {
		let disk = MemDisk::new(3);
		assert_eq!(disk.size(), 3);
		for addr in 0..3 {
			assert_eq!(disk.read(addr).unwrap(), Block::zeroed());
		}
	}

	#[test]
	fn read_returns_last_write() {
		let disk = MemDisk::new(2);
		let mut block = Block::zeroed();
		block[..6].copy_from_slice(b"first ");
		disk.write(1, &block).unwrap();
		block[..6].copy_from_slice(b"second");
		disk.write(1, &block).unwrap();

		assert_eq!(&disk.read(1).unwrap()[..6], b"second");
		assert_eq!(disk.read(0).unwrap(), Block::zeroed());
	}

	#[test]
	fn rejects_bad_addresses_and_buffers() {
		let disk = MemDisk::new(1);
		assert_eq!(
			disk.read(1).unwrap_err(),
			Err::OutOfBounds { addr: 1, size: 1 }
		);
		assert_eq!(
			disk.write(0, &[0u8; BLOCK_SIZE + 1]),
			Err(Err::BlockSize { len: BLOCK_SIZE + 1 })
		);
	}

	#[test]
	fn empty_disk_has_no_blocks() {
		let disk = MemDisk::new(0);
		assert_eq!(disk.size(), 0);
		assert!(disk.read(0).is_err());
		assert_eq!(disk.barrier(), Ok(()));
	}

	#[test]
	fn clones_share_blocks_across_threads() {
		let disk = MemDisk::new(4);
		let writers: Vec<_> = (0..4u8)
			.map(|i| {
				let disk = disk.clone();
				thread::spawn(move || {
					let block = Block::try_from(&[i; BLOCK_SIZE][..]).unwrap();
					disk.write(i as u64, &block).unwrap();
				})
			})
			.collect();
		for w in writers {
			w.join().unwrap();
		}

		for i in 0..4u8 {
			let block = disk.read(i as u64).unwrap();
			assert!(block.iter().all(|b| *b == i));
		}
	}

	proptest! {
		#[test]
		fn behaves_like_an_array_of_blocks(writes in arb_writes(8, 64)) {
			check_against_model(&MemDisk::new(8), &writes);
		}
	}
}
