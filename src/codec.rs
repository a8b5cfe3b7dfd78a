//! Little-endian packing of fixed width integers into byte slices.
//!
//! All of these only touch the first 8 (or 4) bytes of the slice, and panic if
//! it is shorter than that.
use byteorder::{ByteOrder, LittleEndian};

/// First 8 bytes of `p` as a little-endian u64.
pub fn uint64_get(p: &[u8]) -> u64 {
	LittleEndian::read_u64(p)
}

/// First 4 bytes of `p` as a little-endian u32.
pub fn uint32_get(p: &[u8]) -> u32 {
	LittleEndian::read_u32(p)
}

pub fn uint64_put(p: &mut [u8], n: u64) {
	LittleEndian::write_u64(p, n)
}

pub fn uint32_put(p: &mut [u8], n: u32) {
	LittleEndian::write_u32(p, n)
}
