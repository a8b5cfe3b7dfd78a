//! Support library for generic primitives.
//!
//! Everything here is a thin layer over a host facility, so that programs
//! written against it can be modelled one operation at a time:
//! - little-endian byte packing ([`uint64_get`], [`uint32_put`], ...)
//! - randomness, the clock, sleeping and process exit
//! - [`assume`] and [`assert()`], which panic on a false condition
//! - [`sync::wait_timeout`], a condition variable wait with a deadline
//! - [`disk`], fixed-size block storage backed by a file or by memory
//!
//! System calls go through rustix, so you can follow the man pages.
#[cfg(not(target_pointer_width = "64"))]
compile_error!("code assumes usize is u64");
// May work on other OSes but no testing has been done. Remove if you want!
#[cfg(not(target_os = "linux"))]
compile_error!("code assumes linux");

pub mod async_disk;
mod codec;
pub mod disk;
mod pervasives;
pub mod sync;
#[cfg(test)]
mod test_utils;
mod time;

pub use codec::*;
pub use pervasives::*;
pub use time::*;
