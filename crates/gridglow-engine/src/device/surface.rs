use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    pick_format(&caps.formats, prefer_srgb)
}

/// First sRGB format the surface offers when `prefer_srgb`, else whatever it
/// lists first.
fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| prefer_srgb && f.is_srgb())
        .or_else(|| formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    match requested {
        Some(mode) if caps.alpha_modes.contains(&mode) => mode,
        _ => caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
    }
}

/// Records `new_size` and reconfigures unless it has no area; a 0x0 surface
/// is invalid, so a minimized window keeps its last configuration.
///
/// Returns whether the surface was reconfigured.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if !has_area(new_size) {
        return false;
    }
    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
    true
}

fn has_area(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// `Reconfigured` tells the caller to configure the surface again before the
/// next acquire.
pub(crate) fn map_surface_error(err: wgpu::SurfaceError, size: PhysicalSize<u32>) -> SurfaceErrorAction {
    use wgpu::SurfaceError as E;

    match err {
        E::Lost | E::Outdated if has_area(size) => SurfaceErrorAction::Reconfigured,
        E::OutOfMemory => SurfaceErrorAction::Fatal,
        E::Lost | E::Outdated | E::Timeout | E::Other => SurfaceErrorAction::SkipFrame,
    }
}
