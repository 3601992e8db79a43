use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use cardboard_config::AppConfig;
use cardboard_tracking::{StubXrRuntime, TrackingClient, XrManager};
use cardboard_view::{Camera, StubWakeLock, ViewController};

/// Application state.
struct App {
    config: AppConfig,
    controller: ViewController<StubXrRuntime, StubWakeLock>,
    tracking: TrackingClient,
    window: Option<Arc<Window>>,
    frame_count: u64,
}

impl App {
    fn new(
        config: AppConfig,
        controller: ViewController<StubXrRuntime, StubWakeLock>,
        tracking: TrackingClient,
    ) -> Self {
        Self {
            config,
            controller,
            tracking,
            window: None,
            frame_count: 0,
        }
    }

    fn toggle_vr(&mut self) {
        if self.controller.vr_active() {
            self.controller.disable_vr();
        } else if let Err(e) = pollster::block_on(self.controller.enable_vr()) {
            warn!(?e, "Failed to enable VR mode");
        }
    }

    /// Save config and leave the event loop. Every exit path goes through
    /// here so settings are never lost to an early return.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = cardboard_config::save_config(&self.config) {
            warn!(?e, "Failed to save config");
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Cardboard Viewer")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        if size.height > 0 {
            self.controller
                .set_window_aspect(size.width as f32 / size.height as f32);
        }

        if self.config.start_in_vr {
            info!("Starting in VR mode");
            self.toggle_vr();
        }

        window.request_redraw();
        self.window = Some(window);
        info!("Application initialized");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(size) => {
                if size.height > 0 {
                    self.controller
                        .set_window_aspect(size.width as f32 / size.height as f32);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == winit::event::ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        // Escape doubles as the viewer's close button.
                        PhysicalKey::Code(KeyCode::Escape) => {
                            if self.controller.vr_active() {
                                self.controller.disable_vr();
                            } else {
                                self.shutdown(event_loop);
                            }
                        }
                        PhysicalKey::Code(KeyCode::KeyV) => {
                            self.toggle_vr();
                        }
                        PhysicalKey::Code(KeyCode::KeyR) => {
                            self.tracking.recenter();
                            self.controller.reset_camera();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.controller
                    .drag_mut()
                    .on_modifiers_changed(modifiers.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let mode = self.controller.drag_mode();
                self.controller
                    .drag_mut()
                    .on_cursor_moved(mode, position.x, position.y);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.controller.drag_mut().on_mouse_button(button, state);
            }

            WindowEvent::Touch(touch) => {
                let mode = self.controller.drag_mode();
                self.controller.drag_mut().on_touch(
                    mode,
                    touch.id,
                    touch.phase,
                    touch.location.x,
                    touch.location.y,
                );
            }

            WindowEvent::RedrawRequested => {
                self.controller.update();

                self.frame_count += 1;
                if self.frame_count % 300 == 0 {
                    let orientation = self.controller.camera().orientation;
                    debug!(
                        frames = self.frame_count,
                        vr = self.controller.vr_active(),
                        ?orientation,
                        "Frame heartbeat"
                    );
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cardboard_app=info,cardboard_tracking=info,cardboard_view=info".into()
            }),
        )
        .init();

    info!("Cardboard viewer starting");

    // Load config.
    let config = cardboard_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    info!(
        drag_rate = config.drag_rate_deg_per_px,
        start_in_vr = config.start_in_vr,
        "Config loaded"
    );

    // Desktop build: stub pose source, head motion simulated via ALT+mouse.
    let tracking = TrackingClient::stub(config.tracking.stub_pose_rate_hz);

    let camera = Camera::new(
        config.camera.fov_y_degrees,
        config.camera.near,
        config.camera.far,
    );
    let controller = ViewController::new(
        camera,
        config.drag_rate_deg_per_px,
        XrManager::new(StubXrRuntime::new()),
        StubWakeLock::new(),
        tracking.pose_receiver(),
        true,
    );

    // Run the application.
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config, controller, tracking);
    event_loop.run_app(&mut app)?;

    Ok(())
}
