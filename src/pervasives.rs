//! Process level odds and ends. Each is a direct call into std or rand.
use tracing::error;

/// Lets callers take `c` as given. Panics if it turns out to be false.
#[track_caller]
pub fn assume(c: bool) {
	if !c {
		error!("assumed condition was false");
		panic!("Assume condition violated")
	}
}

/// Panics if `c` is false.
///
/// Prefer `panic!` directly unless the extra control flow gets in the way.
#[track_caller]
pub fn assert(c: bool) {
	if !c {
		error!("asserted condition was false");
		panic!("Assert condition violated")
	}
}

/// Terminates the process with exit code `n`.
pub fn exit(n: u64) -> ! {
	std::process::exit(n as i32)
}

/// Does nothing. Marks a linearization point.
#[inline(always)]
pub fn linearize() {}

pub fn uint64_to_string(x: u64) -> String {
	x.to_string()
}

/// Random u64 from the thread local generator, seeded by the OS.
pub fn random_u64() -> u64 {
	rand::random()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn true_conditions_pass() {
		assume(true);
		assert(true);
		linearize();
	}

	#[test]
	#[should_panic(expected = "Assume condition violated")]
	fn assume_false_panics() {
		assume(false);
	}

	#[test]
	#[should_panic(expected = "Assert condition violated")]
	fn assert_false_panics() {
		assert(1 + 1 == 3);
	}

	#[test]
	fn formats_in_decimal() {
		assert_eq!(uint64_to_string(0), "0");
		assert_eq!(uint64_to_string(4096), "4096");
		assert_eq!(uint64_to_string(u64::MAX), "18446744073709551615");
	}

	#[test]
	fn random_values_differ() {
		let draws: Vec<u64> = (0..4).map(|_| random_u64()).collect();
		assert!(draws.windows(2).any(|w| w[0] != w[1]));
	}
}
