use tracing::info;

/// Platform seam for the screen sleep policy: the display must not sleep
/// while VR mode is active.
pub trait WakeLock {
    /// Keep the screen awake (entering VR).
    fn keep_awake(&mut self);
    /// Return sleep control to the system setting (leaving VR).
    fn restore_default(&mut self);
}

/// Stub wake lock for platforms without an integration. Logs transitions.
#[derive(Debug, Default)]
pub struct StubWakeLock {
    held: bool,
}

impl StubWakeLock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WakeLock for StubWakeLock {
    fn keep_awake(&mut self) {
        if !self.held {
            self.held = true;
            info!("Screen wake lock acquired (stub)");
        }
    }

    fn restore_default(&mut self) {
        if self.held {
            self.held = false;
            info!("Screen wake lock released (stub)");
        }
    }
}
