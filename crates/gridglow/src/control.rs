//! Keyboard control panel for the grid parameters.
//!
//! | key             | effect                               |
//! |-----------------|--------------------------------------|
//! | Up / Down       | radius +/- 0.5 (x4 with Shift)       |
//! | Right / Left    | pulse speed +/- 0.25 (x4 with Shift) |
//! | PageUp/PageDown | grid spacing x2 / /2                 |
//! | D               | toggle dark region                   |
//! | R               | reset to the launch configuration    |
//! | Escape          | exit                                 |

use gridglow_engine::input::{Key, Modifiers};

use crate::config::GridConfig;

const RADIUS_STEP: f32 = 0.5;
const SPEED_STEP: f32 = 0.25;
const COARSE: f32 = 4.0;

/// Result of feeding one frame of key presses to the panel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PanelOutcome {
    pub changed: bool,
    pub exit: bool,
}

/// Applies key bindings to a live [`GridConfig`].
///
/// Each effective change bumps [`ControlPanel::revision`]; the new values are
/// picked up by the next frame.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    initial: GridConfig,
    config: GridConfig,
    revision: u64,
}

impl ControlPanel {
    pub fn new(initial: GridConfig) -> Self {
        let initial = initial.sanitized();
        Self {
            initial,
            config: initial,
            revision: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies every pressed key in `keys`, in iteration order.
    pub fn apply_keys<'a, I>(&mut self, keys: I, modifiers: Modifiers) -> PanelOutcome
    where
        I: IntoIterator<Item = &'a Key>,
    {
        let mut outcome = PanelOutcome::default();
        for key in keys {
            match self.apply_key(*key, modifiers) {
                Some(true) => outcome.changed = true,
                Some(false) => {}
                None => outcome.exit = true,
            }
        }
        outcome
    }

    /// Returns `None` for exit, otherwise whether the config changed.
    fn apply_key(&mut self, key: Key, modifiers: Modifiers) -> Option<bool> {
        let scale = if modifiers.shift { COARSE } else { 1.0 };
        let mut next = self.config;

        match key {
            Key::Escape => return None,
            Key::ArrowUp => next.radius += RADIUS_STEP * scale,
            Key::ArrowDown => next.radius -= RADIUS_STEP * scale,
            Key::ArrowRight => next.pulse_speed += SPEED_STEP * scale,
            Key::ArrowLeft => next.pulse_speed -= SPEED_STEP * scale,
            Key::PageUp => next.grid_spacing *= 2.0,
            Key::PageDown => next.grid_spacing *= 0.5,
            Key::D => next.dark_region = !next.dark_region,
            Key::R => next = self.initial,
            Key::Unknown(_) => return Some(false),
        }

        let next = next.sanitized();
        if next == self.config {
            return Some(false);
        }

        self.config = next;
        self.revision += 1;
        log::info!(
            "{key}: radius {:.2}, spacing {:.2}, pulse speed {:.2}, dark region {}",
            next.radius,
            next.grid_spacing,
            next.pulse_speed,
            if next.dark_region { "on" } else { "off" },
        );
        Some(true)
    }
}
