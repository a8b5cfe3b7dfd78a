//! Condition variables that can give up waiting.
use core::time::Duration;
use parking_lot::{Condvar, Mutex, MutexGuard};
use tracing::trace;

/// Like [`Condvar::wait`], but waits for at most `timeout_ms` milliseconds.
///
/// The lock behind `guard` is released while waiting and is held again when
/// this returns, whether `cond` was signalled or the time ran out. Nothing
/// tells the two apart: re-check your predicate, same as an untimed wait.
///
/// A timeout of 0 still releases and re-acquires the lock. A timeout too large
/// to form a deadline waits until signalled.
///
/// The timed wait is native, so a timeout does not leave a helper thread
/// blocked on `cond`.
pub fn wait_timeout<T: ?Sized>(
	cond: &Condvar,
	guard: &mut MutexGuard<'_, T>,
	timeout_ms: u64,
) {
	let res = cond.wait_for(guard, Duration::from_millis(timeout_ms));
	trace!(timeout_ms, timed_out = res.timed_out(), "bounded wait returned");
}

/// A condition variable bundled with the lock that guards it.
#[derive(Debug, Default)]
pub struct Cond<T> {
	lock: Mutex<T>,
	cvar: Condvar,
}

impl<T> Cond<T> {
	pub fn new(value: T) -> Self {
		Self { lock: Mutex::new(value), cvar: Condvar::new() }
	}

	pub fn lock(&self) -> MutexGuard<'_, T> {
		self.lock.lock()
	}

	pub fn is_locked(&self) -> bool {
		self.lock.is_locked()
	}

	pub fn wait(&self, guard: &mut MutexGuard<'_, T>) {
		self.check_guard(guard);
		self.cvar.wait(guard)
	}

	/// See [`wait_timeout`].
	pub fn wait_timeout(&self, guard: &mut MutexGuard<'_, T>, timeout_ms: u64) {
		self.check_guard(guard);
		wait_timeout(&self.cvar, guard, timeout_ms)
	}

	/// Wakes one waiter. Returns whether there was one.
	pub fn signal(&self) -> bool {
		self.cvar.notify_one()
	}

	/// Wakes every waiter. Returns how many there were.
	pub fn broadcast(&self) -> usize {
		self.cvar.notify_all()
	}

	fn check_guard(&self, guard: &MutexGuard<'_, T>) {
		debug_assert!(
			core::ptr::eq(MutexGuard::mutex(guard), &self.lock),
			"guard belongs to a different lock"
		);
	}
}
