use winit::window::{CursorIcon, Window, WindowId};

use crate::coords::{ColorRgba, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// The window a frame is drawn for.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Inner size in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let logical = self
            .window
            .inner_size()
            .to_logical::<f32>(self.window.scale_factor());
        Viewport::new(logical.width, logical.height)
    }

    pub fn set_cursor(&self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }
}

/// Everything `App::on_frame` gets to work with.
///
/// `'a` spans the callback; `'w` is how long the GPU surface borrows the window.
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input:       &'a InputState,
    /// Transitions since the previous frame.
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
    pub runtime:     &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Acquires the next surface texture, clears it to `background`, lets
    /// `draw` record on top and presents.
    ///
    /// Transient surface errors skip the frame. Only a fatal one returns
    /// [`AppControl::Exit`].
    pub fn render<F>(&mut self, background: ColorRgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.recover(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface lost for good, stopping");
                        AppControl::Exit
                    }
                    _ => AppControl::Continue,
                };
            }
        };

        let rctx = RenderCtx {
            device:         self.gpu.device(),
            queue:          self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            viewport:       self.window.viewport(),
        };

        {
            let mut target = RenderTarget {
                encoder:    &mut frame.encoder,
                color_view: &frame.view,
            };
            // Clear pass ends before the draw callback records its own.
            drop(target.begin_pass("gridglow clear", Some(to_wgpu_color(background))));
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}

fn to_wgpu_color(c: ColorRgba) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(c.r),
        g: f64::from(c.g),
        b: f64::from(c.b),
        a: f64::from(c.a),
    }
}
