use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use fschange::exec::CommandRunner;

/// A fake runner that:
/// - records every dispatched command instead of spawning a process
/// - wakes anyone awaiting a dispatch.
#[derive(Default)]
pub struct RecordingRunner {
    dispatched: Mutex<Vec<String>>,
    notify: Notify,
}

impl RecordingRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Commands dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<String> {
        self.dispatched.lock().unwrap().clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatched.lock().unwrap().len()
    }

    /// Wait until at least `n` commands have been dispatched.
    pub async fn wait_for(&self, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.dispatch_count() >= n {
                return;
            }
            notified.await;
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn dispatch(&self, command: &str) {
        self.dispatched.lock().unwrap().push(command.to_string());
        self.notify.notify_waiters();
    }
}
