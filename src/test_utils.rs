use crate::disk::{Block, Disk, BLOCK_SIZE};
use proptest::prelude::*;

/// A sequence of writes, each filling block `addr` with one repeated byte.
pub fn arb_writes(
	num_blocks: u64,
	max_writes: usize,
) -> impl Strategy<Value = Vec<(u64, u8)>> {
	proptest::collection::vec((0..num_blocks, any::<u8>()), 0..=max_writes)
}

/// Applies `writes` to `disk` and to a plain vector, then checks every block
/// of the disk reads back the same as the vector.
pub fn check_against_model<D: Disk>(disk: &D, writes: &[(u64, u8)]) {
	let mut model = vec![0u8; disk.size() as usize];
	let mut block = Block::zeroed();

	for &(addr, fill) in writes {
		block.fill(fill);
		disk.write(addr, &block).expect("write failed");
		model[addr as usize] = fill;
	}
	disk.barrier().expect("barrier failed");

	let mut buf = vec![0u8; BLOCK_SIZE];
	for (addr, fill) in model.into_iter().enumerate() {
		disk.read_to(addr as u64, &mut buf).expect("read failed");
		assert!(
			buf.iter().all(|b| *b == fill),
			"block {addr} should be filled with {fill}"
		);
	}
}
