use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{BootstrapError, GlInit, GlWindow};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Framebuffer size in physical pixels. Also the initial viewport.
    pub initial_size: PhysicalSize<u32>,

    /// RGBA color the back buffer is cleared to each frame.
    pub clear_color: [f32; 4],
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            initial_size: PhysicalSize::new(800, 600),
            clear_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Bootstraps the window and runs the event loop until a close request.
    ///
    /// Returns the bootstrap error if the window or context could not be
    /// brought up. Resources are released before returning on every path.
    pub fn run<A: App>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new()
            .map_err(BootstrapError::from)
            .context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.failure.take() {
            return Err(anyhow::Error::new(err).context("window bootstrap failed"));
        }

        log::info!("shut down after {} frames", state.frame_index);
        Ok(())
    }
}

struct AppState<A: App> {
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    window: Option<GlWindow>,
    frame_index: u64,
    exit_requested: bool,
    failure: Option<BootstrapError>,
}

impl<A: App> AppState<A> {
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            window: None,
            frame_index: 0,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BootstrapError> {
        let attrs = Window::default_attributes().with_title(self.config.title.clone());
        let window = GlWindow::new(event_loop, attrs, self.config.initial_size, &self.gl_init)?;

        let vp = window.viewport();
        log::debug!("initial viewport {}x{}", vp.width, vp.height);

        window.window().request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        window.clear(self.config.clear_color);

        let mut ctx = FrameCtx {
            viewport: window.viewport(),
            frame_index: self.frame_index,
        };
        let control = self.app.on_frame(&mut ctx);

        if let Err(e) = window.swap_buffers() {
            log::warn!("swap_buffers failed, frame skipped: {e}");
        }
        self.frame_index += 1;

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }

    fn teardown(&mut self) {
        if let Some(window) = self.window.take() {
            window.shutdown();
        }
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to initialize window: {e}");
            self.failure = Some(e);
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Nothing animates; sleep until the platform has something for us.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(window) = self.window.as_mut() {
                    window.resize(new_size);
                    window.window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_learnopengl_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "LearnOpenGL");
        assert_eq!(config.initial_size, PhysicalSize::new(800, 600));
    }

    #[test]
    fn default_clear_color_is_opaque() {
        assert_eq!(RuntimeConfig::default().clear_color[3], 1.0);
    }
}
