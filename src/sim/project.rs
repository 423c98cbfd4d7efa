//! World-space to screen-space projection
//!
//! Mirrors the render pipeline's perspective camera so that touch hit-testing
//! agrees with what the player sees: view transform from the camera pose,
//! perspective divide to normalized device coordinates, then the usual
//! y-flipped pixel mapping.

use glam::{DVec2, DVec3};

use crate::camera::{CameraPose, Viewport};

/// Project a world position to pixel coordinates.
///
/// Returns `None` when there is nothing sensible to project onto: a
/// zero-sized or junk viewport (no live render target yet), a non-finite
/// input, or a point at or behind the camera plane. Callers treat `None` as
/// "ball not on screen", never as an error.
pub fn project(world: DVec3, camera: &CameraPose, viewport: &Viewport) -> Option<DVec2> {
    if !viewport.is_valid() || !world.is_finite() || !camera.is_finite() {
        return None;
    }

    // View space: camera at origin looking down -Z
    let view = camera.orientation.inverse() * (world - camera.position);
    if view.z >= 0.0 {
        return None;
    }

    // Perspective projection to NDC in [-1, 1]
    let focal = 1.0 / (viewport.fov_deg.to_radians() / 2.0).tan();
    let ndc_x = (focal / viewport.aspect()) * view.x / -view.z;
    let ndc_y = focal * view.y / -view.z;

    let x = (ndc_x * 0.5 + 0.5) * viewport.width_px;
    let y = (-(ndc_y * 0.5) + 0.5) * viewport.height_px;
    Some(DVec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    fn phone_viewport() -> Viewport {
        Viewport::new(390.0, 844.0)
    }

    #[test]
    fn test_point_on_axis_projects_to_screen_center() {
        let camera = CameraPose::default();
        let p = project(DVec3::new(0.0, 0.0, -10.0), &camera, &phone_viewport()).unwrap();
        assert!((p.x - 195.0).abs() < 1e-9);
        assert!((p.y - 422.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_above_axis_projects_above_center() {
        let camera = CameraPose::default();
        let p = project(DVec3::new(0.0, 2.0, -10.0), &camera, &phone_viewport()).unwrap();
        // Screen y grows downward
        assert!(p.y < 422.0);
        assert!((p.x - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_offset_point() {
        let camera = CameraPose::default();
        let viewport = phone_viewport();
        // At fov 60, a point at height tan(30deg)*depth sits on the top NDC edge
        let depth = 10.0;
        let top = (viewport.fov_deg.to_radians() / 2.0).tan() * depth;
        let p = project(DVec3::new(0.0, top, -depth), &camera, &viewport).unwrap();
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_behind_camera_is_none() {
        let camera = CameraPose::default();
        assert!(project(DVec3::new(0.0, 0.0, 5.0), &camera, &phone_viewport()).is_none());
        assert!(project(DVec3::ZERO, &camera, &phone_viewport()).is_none());
    }

    #[test]
    fn test_degenerate_viewport_is_none() {
        let camera = CameraPose::default();
        let dead = Viewport::new(0.0, 0.0);
        assert!(project(DVec3::new(0.0, 0.0, -10.0), &camera, &dead).is_none());
    }

    #[test]
    fn test_projection_follows_camera_rotation() {
        // Camera yawed 90 degrees left now looks straight at a point on -X
        let camera = CameraPose::new(DVec3::ZERO, DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2));
        let p = project(DVec3::new(-10.0, 0.0, 0.0), &camera, &phone_viewport()).unwrap();
        assert!((p.x - 195.0).abs() < 1e-6);
        assert!((p.y - 422.0).abs() < 1e-6);

        // Same point sits on an identity camera's own plane (view.z == 0)
        assert!(project(DVec3::new(-10.0, 0.0, 0.0), &CameraPose::default(), &phone_viewport()).is_none());
    }
}
