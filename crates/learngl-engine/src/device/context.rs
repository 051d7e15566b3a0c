use std::ffi::{c_void, CString};
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext,
    PossiblyCurrentGlContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::{BootstrapError, GlInit, GlViewportTarget, ViewportSync};
use crate::coords::Viewport;

/// Entry points the runtime calls; checked after loading.
const REQUIRED_SYMBOLS: [(&str, fn() -> bool); 3] = [
    ("glViewport", gl::Viewport::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glClearColor", gl::ClearColor::is_loaded),
];

/// A window with a current OpenGL context.
///
/// Owns, in drop order: the context, the surface, then the window. Use
/// [`GlWindow::shutdown`] for an orderly teardown; plain drop is the fallback
/// on error paths.
pub struct GlWindow {
    context: Option<PossiblyCurrentContext>,
    surface: Surface<WindowSurface>,
    window: Window,
    viewport: ViewportSync<GlViewportTarget>,
}

impl GlWindow {
    /// Runs the bootstrap sequence: window + config, context, surface,
    /// make-current, entry-point loading, initial viewport.
    ///
    /// The initial viewport matches the requested `initial_size`.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        initial_size: PhysicalSize<u32>,
        init: &GlInit,
    ) -> Result<Self, BootstrapError> {
        let attrs = attrs.with_inner_size(initial_size);
        let template = ConfigTemplateBuilder::new();

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .map_err(|e| BootstrapError::Display(e.to_string()))?;

        let window = window.ok_or(BootstrapError::WindowCreation)?;
        log::debug!("window created (id {:?})", window.id());

        let display = config.display();
        let (major, minor) = init.version;
        let raw_handle = window.window_handle()?.as_raw();

        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(init.profile.to_glutin())
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        let not_current = unsafe { display.create_context(&config, &context_attrs) }
            .map_err(|source| BootstrapError::ContextCreation { major, minor, source })?;

        let surface_attrs = window.build_surface_attributes(Default::default())?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .map_err(BootstrapError::SurfaceCreation)?;

        let context = not_current
            .make_current(&surface)
            .map_err(BootstrapError::MakeCurrent)?;
        log::debug!("context current on {:?}", std::thread::current().id());

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null::<c_void>(),
        });

        check_entry_points(&REQUIRED_SYMBOLS)?;

        log::info!(
            "OpenGL {}.{} {:?} context ready (samples: {})",
            major,
            minor,
            init.profile,
            config.num_samples()
        );

        if init.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let viewport = ViewportSync::new(
            GlViewportTarget::new(),
            initial_size.width,
            initial_size.height,
        );

        Ok(Self {
            context: Some(context),
            surface,
            window,
            viewport,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    /// Framebuffer resize: resizes the surface and resets the viewport.
    ///
    /// The surface keeps its old size while either dimension is zero.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if let (Some(context), Some(w), Some(h)) = (
            self.context.as_ref(),
            NonZeroU32::new(new_size.width),
            NonZeroU32::new(new_size.height),
        ) {
            self.surface.resize(context, w, h);
        }

        self.viewport
            .on_framebuffer_resized(new_size.width, new_size.height);
    }

    /// Clears the color buffer.
    pub fn clear(&self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        match self.context.as_ref() {
            Some(context) => self.surface.swap_buffers(context),
            None => Ok(()),
        }
    }

    /// Releases the context from this thread, then drops surface and window.
    pub fn shutdown(mut self) {
        if let Some(context) = self.context.take() {
            match context.make_not_current() {
                Ok(_) => log::debug!("context released"),
                Err(e) => log::warn!("failed to release GL context: {e}"),
            }
        }
        log::info!("window {:?} destroyed", self.window.id());
    }
}

/// Fails on the first entry point that did not resolve.
fn check_entry_points(symbols: &[(&'static str, fn() -> bool)]) -> Result<(), BootstrapError> {
    match symbols.iter().find(|(_, is_loaded)| !is_loaded()) {
        Some(&(symbol, _)) => Err(BootstrapError::Loader { symbol }),
        None => Ok(()),
    }
}

/// Prefers the config with the most MSAA samples.
///
/// glutin reports `BadConfig` before calling the picker when nothing matches,
/// so the iterator is never empty.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .max_by_key(|config| config.num_samples())
        .expect("glutin hands the picker at least one config")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> bool {
        true
    }

    fn missing() -> bool {
        false
    }

    #[test]
    fn all_entry_points_loaded_is_ok() {
        let symbols = [("glViewport", loaded as fn() -> bool), ("glClear", loaded)];
        assert!(check_entry_points(&symbols).is_ok());
    }

    #[test]
    fn first_missing_entry_point_is_reported() {
        let symbols = [
            ("glViewport", loaded as fn() -> bool),
            ("glClear", missing),
            ("glClearColor", missing),
        ];
        match check_entry_points(&symbols) {
            Err(BootstrapError::Loader { symbol }) => assert_eq!(symbol, "glClear"),
            other => panic!("expected loader error, got {other:?}"),
        }
    }

    #[test]
    fn required_entry_points_fail_without_a_context() {
        // Nothing in the test binary calls `gl::load_with`.
        match check_entry_points(&REQUIRED_SYMBOLS) {
            Err(BootstrapError::Loader { symbol }) => assert_eq!(symbol, "glViewport"),
            other => panic!("expected loader error, got {other:?}"),
        }
    }
}
