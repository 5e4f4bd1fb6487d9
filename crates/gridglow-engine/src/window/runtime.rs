use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState, Modifiers};
use crate::time::FrameClock;

/// Window configuration for [`Runtime::run`].
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Inner size in logical pixels.
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gridglow".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Requests an app can make from inside `on_frame`.
///
/// Applied once the callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }
}

/// Single-window event loop driving an [`App`].
pub struct Runtime;

impl Runtime {
    /// Opens one window, runs `app` until it exits or the window closes, and
    /// returns the first fatal error, if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut driver = Driver::new(config, gpu_init, app);

        event_loop
            .run_app(&mut driver)
            .context("event loop terminated with error")?;

        driver.fatal.map_or(Ok(()), Err)
    }
}

/// Window plus everything whose lifetime is tied to it.
///
/// The GPU surface borrows the window, so both live in one self-referencing
/// struct and drop together.
#[self_referencing]
struct Host {
    input: InputState,
    frame_input: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Host {
    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }
}

struct Driver<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    host: Option<Host>,
    exiting: bool,
    fatal: Option<anyhow::Error>,
}

impl<A: App> Driver<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            host: None,
            exiting: false,
            fatal: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        let window = event_loop
            .create_window(attributes)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let host = HostTryBuilder {
            input: InputState::default(),
            frame_input: InputFrame::default(),
            clock: FrameClock::new(),
            window,
            gpu_builder: |window: &Window| {
                pollster::block_on(Gpu::new(window, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()?;

        log::info!("window {:?} opened", host.id());
        host.request_redraw();
        self.host = Some(host);
        Ok(())
    }

    /// Gives the app a chance to free GPU resources before the device goes away.
    fn close(&mut self) {
        if let Some(host) = self.host.take() {
            let id = host.id();
            self.app.on_window_closed(id);
            drop(host);
            log::info!("window {id:?} closed");
        }
    }

    fn abort(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal.get_or_insert(err);
        self.exiting = true;
        self.finish(event_loop);
    }

    /// Tears down and stops the loop once an exit was requested.
    fn finish(&mut self, event_loop: &ActiveEventLoop) -> bool {
        if self.exiting {
            self.close();
            event_loop.exit();
        }
        self.exiting
    }

    fn dispatch_input(&mut self, window_id: WindowId, event: &WindowEvent) {
        let Some(host) = self.host.as_mut() else { return };
        let app = &mut self.app;

        let control = host.with_mut(|h| {
            let input = translate(h.window, h.input.modifiers, event)?;
            h.input.apply_event(h.frame_input, &input);
            Some(app.on_input(window_id, &input))
        });

        if control == Some(AppControl::Exit) {
            self.exiting = true;
        }
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let Some(host) = self.host.as_mut() else { return };
        host.with_gpu_mut(|gpu| gpu.resize(size));
        host.request_redraw();
    }

    fn redraw(&mut self, window_id: WindowId) {
        let Some(host) = self.host.as_mut() else { return };
        let app = &mut self.app;
        let mut requests = RuntimeCtx::default();

        let control = host.with_mut(|h| {
            let time = h.clock.tick();
            let control = {
                let mut ctx = FrameCtx {
                    window: WindowCtx { id: window_id, window: h.window },
                    gpu: h.gpu,
                    input: h.input,
                    input_frame: h.frame_input,
                    time,
                    runtime: &mut requests,
                };
                app.on_frame(&mut ctx)
            };
            h.frame_input.clear();
            control
        });

        if control == AppControl::Exit || requests.exit {
            self.exiting = true;
        }
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            self.abort(event_loop, err.context("failed to open the grid window"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.finish(event_loop) {
            return;
        }

        // Continuous animation; FIFO presentation paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(host) = &self.host {
            host.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.finish(event_loop) {
            return;
        }
        if self.host.as_ref().map(Host::id) != Some(window_id) {
            return;
        }

        self.dispatch_input(window_id, &event);

        match event {
            WindowEvent::CloseRequested => self.exiting = true,
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.host.as_ref().map(|h| h.with_window(|w| w.inner_size())) {
                    self.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(window_id),
            _ => {}
        }

        self.finish(event_loop);
    }
}

/// Converts a winit window event into the engine's input vocabulary.
fn translate(window: &Window, modifiers: Modifiers, event: &WindowEvent) -> Option<InputEvent> {
    let translated = match event {
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(window.scale_factor());
            InputEvent::PointerMoved { x: logical.x, y: logical.y }
        }
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::ModifiersChanged(m) => InputEvent::ModifiersChanged(modifiers_from(m.state())),
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::KeyboardInput { event, .. } => key_event(event, modifiers),
        _ => return None,
    };
    Some(translated)
}

fn key_event(event: &KeyEvent, modifiers: Modifiers) -> InputEvent {
    InputEvent::Key {
        key: key_from(event.physical_key),
        state: if event.state == ElementState::Pressed { KeyState::Pressed } else { KeyState::Released },
        modifiers,
        repeat: event.repeat,
    }
}

fn modifiers_from(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

fn key_from(physical: PhysicalKey) -> Key {
    // Unbound keys and native scan codes all collapse to `Unknown(0)`.
    let PhysicalKey::Code(code) = physical else { return Key::Unknown(0) };
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyR => Key::R,
        _ => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_to_named_variants() {
        assert_eq!(key_from(PhysicalKey::Code(KeyCode::PageUp)), Key::PageUp);
        assert_eq!(key_from(PhysicalKey::Code(KeyCode::KeyD)), Key::D);
        assert_eq!(key_from(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn other_keys_are_unknown() {
        assert!(matches!(key_from(PhysicalKey::Code(KeyCode::KeyQ)), Key::Unknown(_)));
    }

    #[test]
    fn modifier_bits_are_copied() {
        let m = modifiers_from(ModifiersState::SHIFT | ModifiersState::ALT);
        assert_eq!(m, Modifiers { shift: true, alt: true, ..Modifiers::default() });
    }
}
