/// Fatal failure during window/context bootstrap.
///
/// None of these are recoverable; the runtime reports them and shuts down.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("failed to initialize the windowing subsystem")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to find a usable GL display/config: {0}")]
    Display(String),

    #[error("windowing subsystem did not return a window")]
    WindowCreation,

    #[error("window handle unavailable")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    #[error("failed to create OpenGL {major}.{minor} context")]
    ContextCreation {
        major: u8,
        minor: u8,
        #[source]
        source: glutin::error::Error,
    },

    #[error("failed to create window surface")]
    SurfaceCreation(#[source] glutin::error::Error),

    #[error("failed to make the GL context current")]
    MakeCurrent(#[source] glutin::error::Error),

    #[error("failed to load OpenGL entry point `{symbol}`")]
    Loader { symbol: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_error_names_symbol() {
        let e = BootstrapError::Loader { symbol: "glViewport" };
        assert_eq!(e.to_string(), "failed to load OpenGL entry point `glViewport`");
    }

    #[test]
    fn window_creation_message() {
        assert_eq!(
            BootstrapError::WindowCreation.to_string(),
            "windowing subsystem did not return a window"
        );
    }

    #[test]
    fn display_error_keeps_reason() {
        let e = BootstrapError::Display("no matching config".into());
        assert!(e.to_string().ends_with("no matching config"));
    }
}
