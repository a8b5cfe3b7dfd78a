//! Fixed-size block storage.
//!
//! A disk is an array of [`BLOCK_SIZE`] byte blocks, addressed from 0 up to
//! [`Disk::size`]. Two backings are provided: [`FileDisk`] over a regular file
//! (or block device) and [`MemDisk`] in memory.
//!
//! Programs that want one disk for the whole process can install it with
//! [`init`] and fetch it anywhere with [`get`].
use core::fmt;
use core::ops::{Deref, DerefMut};
use once_cell::sync::OnceCell;
use rustix::io;
use tracing::error;

mod file;
mod mem;

pub use file::FileDisk;
pub use mem::MemDisk;

pub const BLOCK_SIZE: usize = 4096;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Err {
	#[error("block {addr} is out of bounds for a disk of {size} blocks")]
	OutOfBounds { addr: u64, size: u64 },
	#[error("buffer of {len} bytes is not block-sized")]
	BlockSize { len: usize },
	#[error("short transfer: expected {expected} bytes, got {actual}")]
	ShortIO { expected: usize, actual: usize },
	#[error("{num_blocks} blocks do not fit in a file")]
	TooLarge { num_blocks: u64 },
	#[error("device holds {device_blocks} blocks, {num_blocks} requested")]
	DeviceTooSmall { num_blocks: u64, device_blocks: u64 },
	#[error("os error: {0}")]
	OS(#[from] io::Errno),
}

fn check_len(len: usize) -> Result<(), Err> {
	(len == BLOCK_SIZE).then_some(()).ok_or(Err::BlockSize { len })
}

/// One block's worth of bytes, always exactly [`BLOCK_SIZE`] long.
#[derive(Clone, PartialEq, Eq)]
pub struct Block(Box<[u8; BLOCK_SIZE]>);

impl Block {
	pub fn zeroed() -> Self {
		Self(bytemuck::allocation::zeroed_box())
	}
}

impl Default for Block {
	fn default() -> Self {
		Self::zeroed()
	}
}

impl Deref for Block {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0[..]
	}
}

impl DerefMut for Block {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0[..]
	}
}

impl TryFrom<&[u8]> for Block {
	type Error = Err;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		check_len(bytes.len())?;
		let mut block = Self::zeroed();
		block.copy_from_slice(bytes);
		Ok(block)
	}
}

impl fmt::Debug for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Block({:02x?}..)", &self.0[..8])
	}
}

/// Block-storage capability.
///
/// Buffers passed in must be exactly [`BLOCK_SIZE`] bytes, and addresses
/// must be below [`Disk::size`].
pub trait Disk: Send + Sync {
	/// Fill `buf` with the contents of block `addr`.
	fn read_to(&self, addr: u64, buf: &mut [u8]) -> Result<(), Err>;

	fn read(&self, addr: u64) -> Result<Block, Err> {
		let mut block = Block::zeroed();
		self.read_to(addr, &mut block)?;
		Ok(block)
	}

	fn write(&self, addr: u64, buf: &[u8]) -> Result<(), Err>;

	/// Number of blocks.
	fn size(&self) -> u64;

	/// Once this returns, every write that completed before it is durable.
	fn barrier(&self) -> Result<(), Err>;
}

static DISK: OnceCell<Box<dyn Disk>> = OnceCell::new();

/// Installs the process wide disk. Panics if one is already installed.
pub fn init<D: Disk + 'static>(disk: D) {
	if DISK.set(Box::new(disk)).is_err() {
		error!("process disk initialized twice");
		panic!("disk already initialized")
	}
}

/// The disk installed by [`init`]. Panics if there isn't one.
pub fn get() -> &'static dyn Disk {
	match DISK.get() {
		Some(disk) => &**disk,
		None => {
			error!("process disk used before init");
			panic!("disk not initialized")
		}
	}
}
