use anyhow::Result;
use winit::dpi::LogicalSize;
use winit::window::WindowId;

use gridglow_engine::core::{App as EngineApp, AppControl, FrameCtx};
use gridglow_engine::device::GpuInit;
use gridglow_engine::input::InputEvent;
use gridglow_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::camera::Camera;
use crate::config::GridConfig;
use crate::control::ControlPanel;
use crate::pointer::PointerTracker;
use crate::render::GridRenderer;
use crate::state::{FrameInput, ShaderState};

// ── GridBackground ────────────────────────────────────────────────────────

/// Full-window cursor-reactive grid, configured with a builder.
///
/// ```rust,ignore
/// GridBackground::new()
///     .title("gridglow")
///     .config(GridConfig::default().radius(8.0))
///     .run()?;
/// ```
pub struct GridBackground {
    title:  String,
    width:  f64,
    height: f64,
    config: GridConfig,
    camera: Camera,
    gpu:    GpuInit,
}

impl GridBackground {
    pub fn new() -> Self {
        Self {
            title:  "gridglow".to_string(),
            width:  1280.0,
            height: 720.0,
            config: GridConfig::default(),
            camera: Camera::default(),
            gpu:    GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Launch configuration; the `R` key returns to it.
    pub fn config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    pub fn run(self) -> Result<()> {
        let runtime = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        log::info!(
            "launching {:?} at {}x{}",
            runtime.title,
            runtime.initial_size.width,
            runtime.initial_size.height,
        );

        Runtime::run(runtime, self.gpu, GridApp::new(self.config, self.camera))
    }
}

impl Default for GridBackground {
    fn default() -> Self {
        Self::new()
    }
}

// ── GridApp ───────────────────────────────────────────────────────────────

/// Engine-facing side of [`GridBackground`].
struct GridApp {
    camera:   Camera,
    panel:    ControlPanel,
    tracker:  PointerTracker,
    state:    Option<ShaderState>,
    renderer: GridRenderer,
}

impl GridApp {
    fn new(config: GridConfig, camera: Camera) -> Self {
        Self {
            camera,
            panel:    ControlPanel::new(config),
            tracker:  PointerTracker::new(),
            state:    None,
            renderer: GridRenderer::new(),
        }
    }
}

impl EngineApp for GridApp {
    fn on_input(&mut self, _window_id: WindowId, event: &InputEvent) -> AppControl {
        self.tracker.handle_event(event);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let outcome = self.panel.apply_keys(&ctx.input_frame.keys_pressed, ctx.input.modifiers);
        if outcome.exit {
            ctx.runtime.exit();
            return AppControl::Exit;
        }

        if ctx.time.frame_index == 0 {
            let viewport = ctx.window.viewport();
            log::info!("first frame at {}x{}", viewport.width, viewport.height);
        }
        if ctx.input_frame.pointer_moves > 1 {
            log::trace!("{} pointer moves coalesced into one frame", ctx.input_frame.pointer_moves);
        }

        let config = *self.panel.config();
        let frame = FrameInput {
            pointer:  self.tracker.position(),
            elapsed:  ctx.time.elapsed,
            viewport: ctx.window.viewport(),
        };

        let state = self
            .state
            .unwrap_or_else(|| ShaderState::new(&config, frame.viewport))
            .advance(&frame, &self.camera, &config);
        self.state = Some(state);

        ctx.window.set_cursor(CursorIcon::Crosshair);

        let camera = self.camera;
        let renderer = &mut self.renderer;
        ctx.render(config.background, |rctx, target| {
            renderer.render(rctx, target, &state, &camera);
        })
    }

    fn on_window_closed(&mut self, _window_id: WindowId) {
        self.renderer.release();
        self.tracker.detach();
        log::debug!("grid resources released (config revision {})", self.panel.revision());
    }
}
