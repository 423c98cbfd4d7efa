//! Tapball - a motion-controlled ball-bounce toy core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, viewport-edge bounces, floor
//!   collisions, tap impulses, scoring)
//! - `camera`: Per-frame input snapshots (camera pose, viewport)
//!
//! Rendering, orientation sensors, menus and high-score storage live in the
//! host application; the host drives `sim::advance` from its frame callback
//! and `sim::handle_tap` from its touch callback.

pub mod camera;
pub mod sim;

pub use camera::{CameraPose, Viewport};

/// Game configuration constants
pub mod consts {
    /// Distance in front of the camera where the ball spawns (world units)
    pub const SPAWN_DISTANCE: f64 = 5.0;
    /// Spawn height above camera eye level
    pub const SPAWN_LIFT: f64 = 1.5;

    /// Gravity at session start
    pub const DEFAULT_GRAVITY: f64 = 12.0;
    /// Gravity wraps back to this after exceeding MAX_GRAVITY
    pub const MIN_GRAVITY: f64 = 5.0;
    pub const MAX_GRAVITY: f64 = 100.0;
    /// Gravity increase per successful tap
    pub const GRAVITY_STEP: f64 = 0.5;

    /// Fraction of velocity kept after an edge bounce
    pub const RESTITUTION: f64 = 0.8;
    /// Usable fraction of each viewport half-extent (10% margin)
    pub const EDGE_MARGIN: f64 = 0.9;
    /// Allowed forward-distance range from the camera
    pub const MIN_FORWARD_DIST: f64 = 5.0;
    pub const MAX_FORWARD_DIST: f64 = 40.0;

    /// Floor plane sits this far below camera height
    pub const FLOOR_DROP: f64 = 7.0;
    /// Upward speed given by a floor bounce
    pub const FLOOR_BOUNCE_SPEED: f64 = 5.0;
    /// Horizontal damping applied on floor contact
    pub const FLOOR_FRICTION: f64 = 0.8;
    /// Floor contacts allowed before the session ends
    pub const MAX_FLOOR_BOUNCES: u8 = 1;

    /// Upward speed given by a successful tap
    pub const TAP_BOUNCE_SPEED: f64 = 8.0;
    /// Horizontal kick half-ranges on tap (uniform, per axis)
    pub const TAP_KICK_X: f64 = 0.75;
    pub const TAP_KICK_Z: f64 = 1.75;
    /// Horizontal kick half-range at session start
    pub const START_KICK: f64 = 1.0;

    /// Cosmetic spin kick half-range on tap (radians/sec, per axis)
    pub const SPIN_KICK: f64 = 2.5;
    /// Per-frame spin decay factor
    pub const SPIN_DAMPING: f64 = 0.98;

    /// Default vertical field of view (degrees)
    pub const DEFAULT_FOV_DEG: f64 = 60.0;
    /// Default tap hit-test radius in pixels
    pub const HIT_RADIUS_PX: f64 = 50.0;
}
