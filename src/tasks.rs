use tokio::task::JoinHandle;

/// Handle to a background loop, released on drop. Holding the guard for the
/// lifetime of the event loop ties every recurring timer to its page: when
/// the loop returns, the ticks stop.
#[derive(Debug)]
pub struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
