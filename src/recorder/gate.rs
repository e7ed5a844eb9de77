//! Blocks pointer capture while a replay is injecting events
//!
//! The thread that closed the gate is never parked by it, so a pointer hook
//! re-entered from inside the replay falls through instead of deadlocking.

use parking_lot::{Condvar, Mutex as ParkingMutex};
use std::thread::{self, ThreadId};

#[derive(Debug, Default)]
pub struct PlaybackGate {
    /// Thread running the replay, if any
    owner: ParkingMutex<Option<ThreadId>>,
    reopened: Condvar,
}

impl PlaybackGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        *self.owner.lock() = Some(thread::current().id());
    }

    pub fn open(&self) {
        *self.owner.lock() = None;
        self.reopened.notify_all();
    }

    pub fn is_open(&self) -> bool {
        self.owner.lock().is_none()
    }

    /// Park the caller until the gate is open
    pub fn wait_open(&self) {
        let me = thread::current().id();
        let mut owner = self.owner.lock();
        while matches!(*owner, Some(id) if id != me) {
            self.reopened.wait(&mut owner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_open_gate_does_not_block() {
        let gate = PlaybackGate::new();
        assert!(gate.is_open());
        gate.wait_open();
    }

    #[test]
    fn test_owner_is_not_blocked() {
        let gate = PlaybackGate::new();
        gate.close();
        assert!(!gate.is_open());
        gate.wait_open();
    }

    #[test]
    fn test_waiter_released_on_open() {
        let gate = Arc::new(PlaybackGate::new());
        let released = Arc::new(AtomicBool::new(false));
        gate.close();

        let waiter = {
            let gate = gate.clone();
            let released = released.clone();
            std::thread::spawn(move || {
                gate.wait_open();
                released.store(true, Ordering::SeqCst);
            })
        };

        std::thread::sleep(Duration::from_millis(50));
        assert!(!released.load(Ordering::SeqCst), "Waiter passed a closed gate");

        gate.open();
        waiter.join().unwrap();
        assert!(released.load(Ordering::SeqCst));
    }
}
