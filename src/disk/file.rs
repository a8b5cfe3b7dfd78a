//! Disk backed by a file, using positional reads and writes.
use std::path::Path;

use fs::OFlags;
use rustix::fd::AsFd;
use rustix::{fd, fs, io};
use tracing::debug;

use super::{check_len, Disk, Err, BLOCK_SIZE};

type O = OFlags;

#[derive(Debug)]
pub struct FileDisk {
	fd: fd::OwnedFd,
	num_blocks: u64,
}

impl FileDisk {
	/// Opens `path`, creating it if needed. A regular file is resized to
	/// exactly `num_blocks` blocks; anything already stored in range is kept.
	/// A block device is never resized, so it must already hold `num_blocks`.
	///
	/// Fails with [`Err::TooLarge`] before touching the file if `num_blocks`
	/// blocks do not fit in a file offset.
	pub fn new<P: AsRef<Path>>(path: P, num_blocks: u64) -> Result<Self, Err> {
		let want = num_blocks
			.checked_mul(BLOCK_SIZE as u64)
			.filter(|len| *len <= i64::MAX as u64)
			.ok_or(Err::TooLarge { num_blocks })?;

		let path = path.as_ref();
		let flags = O::RDWR | O::CREATE | O::CLOEXEC;
		let mode = fs::Mode::RUSR
			| fs::Mode::WUSR
			| fs::Mode::RGRP
			| fs::Mode::WGRP
			| fs::Mode::ROTH
			| fs::Mode::WOTH;
		let fd = fs::open(path, flags, mode)?;

		let stat = fs::fstat(&fd)?;
		let file_type = fs::FileType::from_raw_mode(stat.st_mode as _);
		match file_type {
			fs::FileType::RegularFile => {
				let have = stat.st_size as u64;
				if have != want {
					debug!(path = %path.display(), have, want, "resizing disk file");
					fs::ftruncate(&fd, want)?;
				}
			}
			fs::FileType::BlockDevice => {
				// st_size is 0 for block devices, the end offset is the size
				let have = fs::seek(&fd, fs::SeekFrom::End(0))?;
				if have < want {
					let device_blocks = have / BLOCK_SIZE as u64;
					return Err(Err::DeviceTooSmall { num_blocks, device_blocks });
				}
			}
			_ => {}
		}

		Ok(Self { fd, num_blocks })
	}

	fn offset(&self, addr: u64) -> Result<u64, Err> {
		if addr >= self.num_blocks {
			return Err(Err::OutOfBounds { addr, size: self.num_blocks });
		}
		Ok(addr * BLOCK_SIZE as u64)
	}
}

fn check_transfer(actual: usize) -> Result<(), Err> {
	// pread/pwrite on a regular file within its length should move the whole
	// block; if not, say so rather than hand back half a block.
	if actual != BLOCK_SIZE {
		return Err(Err::ShortIO { expected: BLOCK_SIZE, actual });
	}
	Ok(())
}

impl Disk for FileDisk {
	fn read_to(&self, addr: u64, buf: &mut [u8]) -> Result<(), Err> {
		check_len(buf.len())?;
		let offset = self.offset(addr)?;
		// pread ignores the fd offset, supply your own
		let bytes_read = io::pread(self.fd.as_fd(), buf, offset)?;
		check_transfer(bytes_read)
	}

	fn write(&self, addr: u64, buf: &[u8]) -> Result<(), Err> {
		check_len(buf.len())?;
		let offset = self.offset(addr)?;
		let bytes_written = io::pwrite(self.fd.as_fd(), buf, offset)?;
		check_transfer(bytes_written)
	}

	fn size(&self) -> u64 {
		self.num_blocks
	}

	fn barrier(&self) -> Result<(), Err> {
		fs::fsync(self.fd.as_fd())?;
		Ok(())
	}
}
