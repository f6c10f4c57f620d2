//! Cancellable delay between keystrokes and search re-evaluation.
//!
//! [`Debouncer`] is driven by the caller's own clock and fits a UI tick loop.
//! [`spawn_debouncer`] runs the same policy on a worker thread and delivers
//! settled values over a channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// Quiet period used by the search screen.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Poll-driven debounce timer.
///
/// Each [`schedule`](Self::schedule) supersedes the pending value and
/// restarts the delay; [`poll`](Self::poll) yields the last value once the
/// delay has passed without a newer schedule.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self::new(DEFAULT_DELAY)
	}
}

impl<T> Debouncer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Replace any pending value with `value`, due `delay` after `now`.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now + self.delay));
	}

	/// Take the pending value if it is due at `now`.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self.pending.as_ref().is_some_and(|(_, due)| now >= *due);
		if due {
			self.pending.take().map(|(value, _)| value)
		} else {
			None
		}
	}

	/// Drop the pending value, returning it.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|(value, _)| value)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Time left before the pending value is due, for sizing an event poll.
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.pending
			.as_ref()
			.map(|(_, due)| due.saturating_duration_since(now))
	}
}

/// Submits values to a debounce worker thread. Dropping the handle stops it.
#[derive(Debug)]
pub struct DebounceHandle<T> {
	tx: Sender<(u64, T)>,
	latest: Arc<AtomicU64>,
}

impl<T> DebounceHandle<T> {
	/// Queue `value`, superseding anything submitted earlier that has not
	/// settled yet. Returns the submission id.
	pub fn submit(&self, value: T) -> u64 {
		let id = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
		// A closed channel means the receiver is gone and nobody is waiting.
		let _ = self.tx.send((id, value));
		id
	}

	/// Id of the most recent submission, `0` before the first.
	pub fn latest(&self) -> u64 {
		self.latest.load(Ordering::Acquire)
	}
}

/// Start a worker that forwards each submitted value once `delay` passes with
/// no newer submission.
pub fn spawn_debouncer<T: Send + 'static>(delay: Duration) -> (DebounceHandle<T>, Receiver<T>) {
	let (submit_tx, submit_rx) = mpsc::channel();
	let (settled_tx, settled_rx) = mpsc::channel();
	let latest = Arc::new(AtomicU64::new(0));
	let worker_latest = Arc::clone(&latest);

	thread::spawn(move || worker_loop(delay, &submit_rx, &settled_tx, &worker_latest));

	let handle = DebounceHandle { tx: submit_tx, latest };
	(handle, settled_rx)
}

fn worker_loop<T>(
	delay: Duration,
	submit_rx: &Receiver<(u64, T)>,
	settled_tx: &Sender<T>,
	latest: &AtomicU64,
) {
	let mut timer = Debouncer::new(delay);

	loop {
		let received = match timer.remaining(Instant::now()) {
			Some(wait) => submit_rx.recv_timeout(wait),
			None => submit_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
		};

		match received {
			Ok((id, value)) => {
				trace!(id, "debounce submission");
				timer.schedule((id, value), Instant::now());
			}
			Err(RecvTimeoutError::Timeout) => {}
			Err(RecvTimeoutError::Disconnected) => break,
		}

		if let Some((id, value)) = timer.poll(Instant::now()) {
			if id != latest.load(Ordering::Acquire) {
				continue;
			}
			if settled_tx.send(value).is_err() {
				break;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_last_schedule_fires() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(300));
		debouncer.schedule("h", start);
		debouncer.schedule("he", start + Duration::from_millis(100));
		debouncer.schedule("hello", start + Duration::from_millis(200));

		assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
		assert!(debouncer.is_pending());
		assert_eq!(
			debouncer.poll(start + Duration::from_millis(500)),
			Some("hello")
		);
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::default();
		debouncer.schedule(1, start);
		assert_eq!(debouncer.cancel(), Some(1));
		assert_eq!(debouncer.poll(start + DEFAULT_DELAY), None);
	}

	#[test]
	fn remaining_counts_down_to_zero() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(300));
		assert_eq!(debouncer.remaining(start), None);
		debouncer.schedule((), start);
		assert_eq!(
			debouncer.remaining(start + Duration::from_millis(100)),
			Some(Duration::from_millis(200))
		);
		assert_eq!(
			debouncer.remaining(start + Duration::from_secs(1)),
			Some(Duration::ZERO)
		);
	}

	#[test]
	fn worker_delivers_only_the_settled_value() {
		let (handle, settled) = spawn_debouncer(Duration::from_millis(50));
		handle.submit("a".to_string());
		handle.submit("ab".to_string());
		let last = handle.submit("abc".to_string());
		assert_eq!(last, 3);

		let value = settled
			.recv_timeout(Duration::from_secs(2))
			.expect("settled value");
		assert_eq!(value, "abc");
		assert!(
			settled.recv_timeout(Duration::from_millis(200)).is_err(),
			"superseded values must not be delivered"
		);
	}

	#[test]
	fn dropping_the_handle_stops_the_worker() {
		let (handle, settled) = spawn_debouncer::<u32>(Duration::from_millis(10));
		drop(handle);
		assert!(matches!(
			settled.recv_timeout(Duration::from_secs(2)),
			Err(RecvTimeoutError::Disconnected)
		));
	}
}
