//! Craft, planet and background-object state.
//!
//! These are plain data owned by the level controller.  In the Bevy shell the
//! [`Craft`] and [`Planet`] live as resources and the background objects as a
//! [`BackgroundObjects`] resource; the core functions in [`crate::motion`],
//! [`crate::landing`] and [`crate::hazard`] take them by reference.

use crate::constants::{
    CRAFT_HALF_HEIGHT, CRAFT_HALF_WIDTH, CRAFT_START_X, CRAFT_START_Y, SCROLL_SCREENS,
    VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use bevy::prelude::*;

// ── Craft ─────────────────────────────────────────────────────────────────────

/// The player's vehicle.
///
/// `velocities.y` is positive while descending; `altitude` accumulates it and
/// is never reset between regimes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Craft {
    /// Viewport-relative centre (px).
    pub position: Vec2,
    /// Horizontal / vertical velocity (px per tick).
    pub velocities: Vec2,
    /// Orientation in degrees; 0 is upright, positive tilts the nose clockwise.
    pub angle: f32,
    /// Cumulative descent distance.
    pub altitude: f32,
    /// Altitude latched while in the mid-descent regime; the view freezes at
    /// this value once the craft drops past the scroll range.
    pub last_altitude: f32,
    /// Ticks a hazard has been active this level.
    pub level_timer: u32,
    /// Engine acceleration applied this tick.
    pub thrust: f32,
    /// Gravitational acceleration applied this tick.
    pub accel_g: f32,
    /// Set once a landing or crash has been resolved; the craft ignores forces.
    pub frozen: bool,
}

impl Default for Craft {
    fn default() -> Self {
        Self::at(Vec2::new(CRAFT_START_X, CRAFT_START_Y))
    }
}

impl Craft {
    /// A motionless, upright craft at `position` with zero altitude.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocities: Vec2::ZERO,
            angle: 0.0,
            altitude: 0.0,
            last_altitude: 0.0,
            level_timer: 0,
            thrust: 0.0,
            accel_g: 0.0,
            frozen: false,
        }
    }

    /// Make the craft kinematically inert after a touchdown or crash.
    pub fn freeze(&mut self) {
        self.thrust = 0.0;
        self.accel_g = 0.0;
        self.velocities = Vec2::ZERO;
        self.frozen = true;
    }

    /// Collision box in viewport coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_size(
            self.position,
            Vec2::new(CRAFT_HALF_WIDTH, CRAFT_HALF_HEIGHT),
        )
    }
}

// ── Planet ────────────────────────────────────────────────────────────────────

/// Static per-level environment descriptor.
///
/// The only mutable field is `offset`, the screen position of the
/// background's top-left corner, which the integrator derives from altitude.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Planet {
    /// Full background size (px); taller than the viewport by the scroll range.
    pub background_extent: Vec2,
    /// World y of the ground line, measured from the background's top edge.
    pub surface_y: f32,
    /// Screen offset that aligns the background with the current view.
    pub offset: Vec2,
}

impl Default for Planet {
    fn default() -> Self {
        let extent = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT * (SCROLL_SCREENS + 1.0));
        Self::new(extent, extent.y - 80.0)
    }
}

impl Planet {
    pub fn new(background_extent: Vec2, surface_y: f32) -> Self {
        Self {
            background_extent,
            surface_y,
            offset: Vec2::ZERO,
        }
    }
}

// ── Background objects ────────────────────────────────────────────────────────

/// A drifting obstacle or platform drawn over the background.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundObject {
    /// Top-left corner in viewport coordinates.
    pub top_left: Vec2,
    pub size: Vec2,
    /// Fixed per-tick drift.
    pub velocity: Vec2,
}

impl BackgroundObject {
    pub fn new(top_left: Vec2, size: Vec2, velocity: Vec2) -> Self {
        Self {
            top_left,
            size,
            velocity,
        }
    }

    /// Collision box in viewport coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.top_left, self.top_left + self.size)
    }
}

/// All background objects of the current level.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct BackgroundObjects(pub Vec<BackgroundObject>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freeze_zeroes_motion_and_forces() {
        let mut craft = Craft::at(Vec2::new(100.0, 100.0));
        craft.velocities = Vec2::new(3.0, -4.0);
        craft.thrust = 0.06;
        craft.accel_g = 0.02;
        craft.angle = 7.0;

        craft.freeze();

        assert_eq!(craft.velocities, Vec2::ZERO);
        assert_eq!(craft.thrust, 0.0);
        assert_eq!(craft.accel_g, 0.0);
        assert!(craft.frozen);
        assert_eq!(craft.angle, 7.0, "freeze leaves the attitude for display");
    }

    #[test]
    fn default_planet_scrolls_three_screens() {
        let planet = Planet::default();
        assert_eq!(planet.background_extent, Vec2::new(1280.0, 2880.0));
        assert!(planet.surface_y < planet.background_extent.y);
        assert_eq!(planet.offset, Vec2::ZERO);
    }

    #[test]
    fn craft_bounds_are_centred() {
        let craft = Craft::at(Vec2::new(50.0, 60.0));
        assert_eq!(craft.bounds().center(), Vec2::new(50.0, 60.0));
    }
}
