use anyhow::Result;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("XR subsystems started before loader initialization")]
    LoaderNotInitialized,
}

/// Platform seam for the XR runtime (loader + tracking/display subsystems).
///
/// Real platforms implement this against their XR management SDK. The
/// desktop build uses [`StubXrRuntime`].
pub trait XrRuntime: Send {
    /// Initialize the XR loader. Completes asynchronously on real platforms.
    fn initialize_loader(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Start the tracking/display subsystems. The loader must be initialized.
    fn start_subsystems(&mut self) -> Result<()>;

    /// Stop the tracking/display subsystems.
    fn stop_subsystems(&mut self);

    /// Tear down the XR loader.
    fn deinitialize_loader(&mut self);

    /// Whether the viewer's close button was pressed since the last poll.
    fn close_requested(&mut self) -> bool;
}

/// Stub XR runtime for development without a device.
///
/// Logs lifecycle transitions and never reports a close-button press.
/// A real implementation integrates the platform's XR management layer here.
#[derive(Debug, Default)]
pub struct StubXrRuntime {
    loader_initialized: bool,
    subsystems_running: bool,
}

impl StubXrRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl XrRuntime for StubXrRuntime {
    async fn initialize_loader(&mut self) -> Result<()> {
        self.loader_initialized = true;
        info!("XR loader initialized (stub)");
        Ok(())
    }

    fn start_subsystems(&mut self) -> Result<()> {
        if !self.loader_initialized {
            return Err(LifecycleError::LoaderNotInitialized.into());
        }
        self.subsystems_running = true;
        info!("XR subsystems started (stub)");
        Ok(())
    }

    fn stop_subsystems(&mut self) {
        self.subsystems_running = false;
        info!("XR subsystems stopped (stub)");
    }

    fn deinitialize_loader(&mut self) {
        self.loader_initialized = false;
        info!("XR loader deinitialized (stub)");
    }

    fn close_requested(&mut self) -> bool {
        false
    }
}

/// Tracks the XR loader/subsystem lifecycle around an [`XrRuntime`].
///
/// `activate` initializes the loader at most once before starting subsystems;
/// `deactivate` only touches the runtime when initialization has completed.
pub struct XrManager<R: XrRuntime> {
    runtime: R,
    loader_initialized: bool,
    subsystems_running: bool,
}

impl<R: XrRuntime> XrManager<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            loader_initialized: false,
            subsystems_running: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.loader_initialized
    }

    pub fn subsystems_running(&self) -> bool {
        self.subsystems_running
    }

    /// Bring up the XR runtime: await loader initialization if it has not
    /// completed yet, then start subsystems.
    pub async fn activate(&mut self) -> Result<()> {
        if !self.loader_initialized {
            self.runtime.initialize_loader().await?;
            self.loader_initialized = true;
        }
        if !self.subsystems_running {
            self.runtime.start_subsystems()?;
            self.subsystems_running = true;
        }
        Ok(())
    }

    /// Tear down the XR runtime. A no-op when the loader never initialized.
    pub fn deactivate(&mut self) {
        if !self.loader_initialized {
            return;
        }
        self.runtime.stop_subsystems();
        self.runtime.deinitialize_loader();
        self.subsystems_running = false;
        self.loader_initialized = false;
    }

    /// Poll the viewer's close button.
    pub fn close_requested(&mut self) -> bool {
        self.runtime.close_requested()
    }
}
