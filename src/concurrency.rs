//! Coalescing single-slot mailbox used for the OCR and hit-scan queues
//! (§5): only the most recent request matters, so a producer overwrites
//! whatever the consumer hasn't picked up yet rather than queuing.

use std::sync::{Condvar, Mutex};

pub struct LatestSlot<T> {
	slot: Mutex<Option<T>>,
	ready: Condvar,
}

impl<T> LatestSlot<T> {
	pub fn new() -> LatestSlot<T> {
		LatestSlot {
			slot: Mutex::new(None),
			ready: Condvar::new(),
		}
	}

	/// Replaces whatever is waiting to be consumed and wakes one waiter.
	pub fn put(&self, value: T) {
		let mut slot = self.slot.lock().unwrap();
		*slot = Some(value);
		self.ready.notify_one();
	}

	/// Blocks until a value is available, then takes it. Returns `None`
	/// only if woken spuriously while `should_continue` reports the
	/// caller should stop waiting (used to unblock on shutdown).
	pub fn take_blocking(&self, should_continue: impl Fn() -> bool) -> Option<T> {
		let mut slot = self.slot.lock().unwrap();
		loop {
			if let Some(value) = slot.take() {
				return Some(value);
			}
			if !should_continue() {
				return None;
			}
			let (guard, timeout) = self
				.ready
				.wait_timeout(slot, std::time::Duration::from_millis(200))
				.unwrap();
			slot = guard;
			let _ = timeout;
		}
	}
}

impl<T> Default for LatestSlot<T> {
	fn default() -> LatestSlot<T> {
		LatestSlot::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::thread;

	#[test]
	fn test_put_then_take() {
		let slot = LatestSlot::new();
		slot.put(42);
		assert_eq!(slot.take_blocking(|| true), Some(42));
	}

	#[test]
	fn test_coalesces_to_latest() {
		let slot = LatestSlot::new();
		slot.put(1);
		slot.put(2);
		assert_eq!(slot.take_blocking(|| true), Some(2));
	}

	#[test]
	fn test_stops_when_should_continue_false() {
		let slot: Arc<LatestSlot<i32>> = Arc::new(LatestSlot::new());
		let result = slot.take_blocking(|| false);
		assert_eq!(result, None);
	}

	#[test]
	fn test_wakes_on_put_from_another_thread() {
		let slot = Arc::new(LatestSlot::new());
		let producer = Arc::clone(&slot);
		let handle = thread::spawn(move || {
			thread::sleep(std::time::Duration::from_millis(20));
			producer.put(7);
		});
		assert_eq!(slot.take_blocking(|| true), Some(7));
		handle.join().unwrap();
	}
}
