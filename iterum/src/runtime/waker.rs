use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::task::Wake;

/// Wake-up flag shared between the blocked thread and its wakers.
///
/// A wake sets the flag and notifies the condition variable. The
/// blocked thread clears the flag when it resumes, so a wake that lands
/// before the thread starts waiting is not lost.
pub(crate) struct Signal {
    notified: Mutex<bool>,
    condvar: Condvar,
}

impl Signal {
    pub(crate) fn new() -> Self {
        Self {
            notified: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Blocks until the flag is set, then clears it.
    pub(crate) fn wait(&self) {
        let mut notified = self
            .notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        while !*notified {
            notified = self
                .condvar
                .wait(notified)
                .unwrap_or_else(PoisonError::into_inner);
        }

        *notified = false;
    }

    /// Drops any wake-up left over from a previous run.
    pub(crate) fn reset(&self) {
        *self
            .notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = false;
    }

    fn notify(&self) {
        *self
            .notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = true;

        self.condvar.notify_one();
    }
}

impl Wake for Signal {
    fn wake(self: Arc<Self>) {
        self.notify();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.notify();
    }
}
