//! Keyboard handle for front ends that deliver input on their own thread.
//!
//! All access goes through one mutex, so a reset or key event is never seen
//! half-applied by the emulation thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::host::HostKeyCode;
use crate::keyboard::{KeyEvent, Keyboard};
use crate::remap::Indicators;
use crate::scan::InterruptLine;

pub struct SharedKeyboard<L: InterruptLine> {
    inner: Arc<Mutex<Keyboard<L>>>,
}

impl<L: InterruptLine> SharedKeyboard<L> {
    pub fn new(keyboard: Keyboard<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(keyboard)),
        }
    }

    /// Lock the keyboard. A panic on another thread while holding the lock
    /// leaves the matrix consistent, so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, Keyboard<L>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access, for the System VIA side.
    pub fn with<R>(&self, f: impl FnOnce(&mut Keyboard<L>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn key_down(&self, code: HostKeyCode, indicators: Indicators) {
        self.lock().key_down(code, indicators);
    }

    pub fn key_up(&self, code: HostKeyCode) {
        self.lock().key_up(code);
    }

    pub fn key_event(&self, event: KeyEvent) {
        self.lock().key_event(event);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    #[must_use]
    pub fn interrupt(&self) -> bool {
        self.lock().interrupt()
    }

    #[must_use]
    pub fn any_key_down(&self) -> bool {
        self.lock().any_key_down()
    }
}

impl<L: InterruptLine> Clone for SharedKeyboard<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
