use core::time::Duration;
use rustix::time::{clock_gettime, ClockId};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Wall clock time since the Unix epoch, in nanoseconds.
pub fn time_now() -> u64 {
	let ts = clock_gettime(ClockId::Realtime);
	ts.tv_sec as u64 * NANOS_PER_SEC + ts.tv_nsec as u64
}

/// Blocks the calling thread for at least `ns` nanoseconds.
pub fn sleep(ns: u64) {
	std::thread::sleep(Duration::from_nanos(ns))
}
