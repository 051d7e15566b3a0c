use anyhow::Result;
use learngl_engine::core::{App, AppControl, FrameCtx};
use learngl_engine::device::GlInit;
use learngl_engine::logging::{init_logging, LoggingConfig};
use learngl_engine::window::{Runtime, RuntimeConfig};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Closes on Escape; otherwise just reports the viewport when it changes.
#[derive(Default)]
struct LearnOpenGl {
    last_viewport: Option<(i32, i32)>,
}

impl App for LearnOpenGl {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl {
        let size = (ctx.viewport.width, ctx.viewport.height);
        if self.last_viewport != Some(size) {
            match ctx.viewport.aspect_ratio() {
                Some(aspect) => log::info!(
                    "frame {}: viewport {}x{} (aspect {aspect:.3})",
                    ctx.frame_index,
                    size.0,
                    size.1
                ),
                None => log::info!("frame {}: viewport empty", ctx.frame_index),
            }
            self.last_viewport = Some(size);
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig::default(),
        GlInit::default(),
        LearnOpenGl::default(),
    )
}
