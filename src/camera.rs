//! Per-frame input snapshots from the host
//!
//! The camera pose comes from the host's orientation-sensor wiring, the
//! viewport from its render surface. Both are read-only from the simulation's
//! point of view; the sim takes one snapshot per frame and never holds on to
//! them.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FOV_DEG;

/// Camera position and orientation for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
        }
    }
}

impl CameraPose {
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unit forward axis (camera looks down -Z)
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }

    /// Unit right axis
    pub fn right(&self) -> DVec3 {
        self.orientation * DVec3::X
    }

    /// Unit up axis
    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }

    /// A pose with every component finite (degenerate sensor frames get
    /// skipped rather than integrated)
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

/// Render-surface size and vertical field of view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub fov_deg: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            fov_deg: DEFAULT_FOV_DEG,
        }
    }

    /// Width / height; callers must check validity first
    pub fn aspect(&self) -> f64 {
        self.width_px / self.height_px
    }

    /// False before the host has a live render target (zero-sized surface)
    /// or when given junk dimensions
    pub fn is_valid(&self) -> bool {
        self.width_px.is_finite()
            && self.height_px.is_finite()
            && self.width_px > 0.0
            && self.height_px > 0.0
            && self.fov_deg.is_finite()
            && self.fov_deg > 0.0
            && self.fov_deg < 180.0
    }
}
