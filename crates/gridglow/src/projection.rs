//! Screen pointer -> world plane mapping.

use std::fmt;

use glam::{Vec2, Vec3};
use gridglow_engine::coords::Viewport;

use crate::camera::Camera;
use crate::pointer::PointerState;

/// Why a pointer could not be mapped onto the `z = 0` plane.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProjectionError {
    /// Zero, negative or non-finite viewport.
    DegenerateViewport,
    /// The pointer ray runs parallel to the plane (camera edge-on).
    Parallel,
    /// The plane is behind the ray origin.
    BehindCamera,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::DegenerateViewport => write!(f, "viewport has no area"),
            ProjectionError::Parallel => write!(f, "pointer ray is parallel to the grid plane"),
            ProjectionError::BehindCamera => write!(f, "grid plane is behind the camera"),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Converts a screen position to normalized device coordinates.
///
/// `ndc = 2 * p / size - 1`, with Y flipped so +Y points up.
pub fn screen_to_ndc(pointer: PointerState, viewport: Viewport) -> Vec2 {
    Vec2::new(
        2.0 * pointer.x / viewport.width - 1.0,
        1.0 - 2.0 * pointer.y / viewport.height,
    )
}

/// Casts a ray from `camera` through the pointer and intersects it with the
/// world plane `z = 0`, returning the hit's X/Y.
///
/// Pure: identical inputs always produce identical outputs.
pub fn project_pointer_to_world(
    pointer: PointerState,
    viewport: Viewport,
    camera: &Camera,
) -> Result<Vec2, ProjectionError> {
    if !viewport.is_valid() {
        return Err(ProjectionError::DegenerateViewport);
    }

    let ndc = screen_to_ndc(pointer, viewport);
    let inv_view_proj = camera.view_proj(viewport.aspect()).inverse();

    // wgpu depth range: 0 at the near plane, 1 at the far plane.
    let origin = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
    let far = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
    let dir = (far - origin).normalize_or_zero();

    if dir == Vec3::ZERO || !origin.is_finite() {
        return Err(ProjectionError::Parallel);
    }

    // Plane normal is +Z, so the ray is parallel when its Z component vanishes.
    if dir.z.abs() < 1e-6 {
        return Err(ProjectionError::Parallel);
    }

    let t = -origin.z / dir.z;
    if t < 0.0 {
        return Err(ProjectionError::BehindCamera);
    }

    let hit = origin + dir * t;
    Ok(hit.truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn ndc_corners_and_center() {
        assert_eq!(screen_to_ndc(PointerState::new(0.0, 0.0), VIEWPORT), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(PointerState::new(800.0, 600.0), VIEWPORT), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(PointerState::new(400.0, 300.0), VIEWPORT), Vec2::ZERO);
    }

    #[test]
    fn screen_center_hits_world_origin() {
        let (cx, cy) = VIEWPORT.center();
        let hit = project_pointer_to_world(PointerState::new(cx, cy), VIEWPORT, &Camera::default())
            .expect("center ray must hit the plane");
        assert!(hit.x.abs() < 1e-3, "x = {}", hit.x);
        assert!(hit.y.abs() < 1e-3, "y = {}", hit.y);
    }

    #[test]
    fn top_edge_maps_to_half_visible_height() {
        let camera = Camera::default();
        let hit = project_pointer_to_world(PointerState::new(400.0, 0.0), VIEWPORT, &camera)
            .expect("top edge must hit the plane");
        let half_height = camera.position.z * (camera.fov_y * 0.5).tan();
        assert!(hit.x.abs() < 1e-3);
        assert!((hit.y - half_height).abs() < 1e-2, "y = {}, expected {}", hit.y, half_height);
    }

    #[test]
    fn right_of_center_is_positive_x() {
        let hit = project_pointer_to_world(PointerState::new(600.0, 300.0), VIEWPORT, &Camera::default())
            .expect("ray must hit the plane");
        assert!(hit.x > 0.0);
        assert!(hit.y.abs() < 1e-3);
    }

    #[test]
    fn edge_on_camera_is_parallel() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::X, Vec3::Z);
        let err = project_pointer_to_world(PointerState::new(400.0, 300.0), VIEWPORT, &camera)
            .unwrap_err();
        assert_eq!(err, ProjectionError::Parallel);
    }

    #[test]
    fn camera_facing_away_misses() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 20.0), Vec3::Y);
        let err = project_pointer_to_world(PointerState::new(400.0, 300.0), VIEWPORT, &camera)
            .unwrap_err();
        assert_eq!(err, ProjectionError::BehindCamera);
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let err = project_pointer_to_world(
            PointerState::new(0.0, 0.0),
            Viewport::new(0.0, 0.0),
            &Camera::default(),
        )
        .unwrap_err();
        assert_eq!(err, ProjectionError::DegenerateViewport);
    }
}
