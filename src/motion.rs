//! Per-tick force accumulation and the altitude-regime motion integrator.
//!
//! ## Pipeline (once per tick)
//!
//! 1. [`apply_forces`]: turns [`FlightIntent`] + gravity + drag into a new
//!    velocity and attitude.
//! 2. [`integrate`]: advances altitude, picks the [`Regime`], moves the craft
//!    and background objects, and derives the minimap values.
//!
//! ## Regimes
//!
//! | Regime             | Condition                     | View offset      | Craft moves |
//! |--------------------|-------------------------------|------------------|-------------|
//! | `SurfaceProximate` | `altitude < 0`                | `0`              | x and y     |
//! | `MidDescent`       | `0 <= altitude <= ceiling`    | `altitude`       | x only      |
//! | `Clamped`          | `altitude > ceiling`          | `last_altitude`  | x and y     |
//!
//! `ceiling` is `SCROLL_SCREENS * viewport.height`.  Only `MidDescent` latches
//! `last_altitude`.
//!
//! Per-tick displacements use the velocity rounded half-to-even, so a craft
//! drifting at 0.5 px/tick does not move while one at 1.5 px/tick moves 2.

use crate::constants::{
    CRAFT_AREA, CRAFT_DRAG_COEFFICIENT, CRAFT_MASS, MINIMAP_PROGRESS_DIVISOR,
    MINIMAP_RIGHT_INSET, MINIMAP_SCALE, MINIMAP_TOP, ROTATION_SPEED, SCROLL_SCREENS,
    THRUST_POWER, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::craft::{BackgroundObject, Craft, Planet};
use crate::drag::drag;
use bevy::prelude::*;

// ── Inputs ────────────────────────────────────────────────────────────────────

/// Viewport dimensions the integrator maps altitude onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Highest altitude that still scrolls the view.
    #[inline]
    pub fn scroll_ceiling(&self) -> f32 {
        SCROLL_SCREENS * self.height
    }

    /// Top-left corner of the minimap rectangle.
    #[inline]
    pub fn minimap_origin(&self) -> Vec2 {
        Vec2::new(self.width - MINIMAP_RIGHT_INSET, MINIMAP_TOP)
    }
}

/// Per-level atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Gravitational acceleration (px/tick², positive pulls down).
    pub gravity: f32,
    /// Air density fed to the drag model; `0.0` is vacuum.
    pub density: f32,
}

/// Craft properties that shape its response to forces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airframe {
    pub thrust_power: f32,
    /// Degrees per tick while a rotate input is held.
    pub rotation_speed: f32,
    pub mass: f32,
    pub drag_coefficient: f32,
    pub area: f32,
}

impl Default for Airframe {
    fn default() -> Self {
        Self {
            thrust_power: THRUST_POWER,
            rotation_speed: ROTATION_SPEED,
            mass: CRAFT_MASS,
            drag_coefficient: CRAFT_DRAG_COEFFICIENT,
            area: CRAFT_AREA,
        }
    }
}

/// Aggregated player intent for the current tick.
///
/// Keyboard systems write it; [`apply_forces`] reads it.  Tests populate it
/// directly to fly the craft without an input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct FlightIntent {
    /// Main engine firing.
    pub thrust: bool,
    /// Rotation direction: `-1.0` anticlockwise, `1.0` clockwise, `0.0` hold.
    pub rotate: f32,
}

// ── Force accumulation ────────────────────────────────────────────────────────

/// Wrap an angle into `[-180, 180)` degrees.
pub fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Apply attitude input, thrust, gravity and drag to the craft's velocity.
///
/// A frozen craft is left untouched.
pub fn apply_forces(
    craft: &mut Craft,
    intent: &FlightIntent,
    atmosphere: &Atmosphere,
    airframe: &Airframe,
) {
    if craft.frozen {
        return;
    }

    if intent.rotate != 0.0 {
        craft.angle = wrap_degrees(craft.angle + intent.rotate.signum() * airframe.rotation_speed);
    }

    craft.thrust = if intent.thrust {
        airframe.thrust_power
    } else {
        0.0
    };
    craft.accel_g = atmosphere.gravity;

    let (sin, cos) = craft.angle.to_radians().sin_cos();
    let drag_x = drag(
        atmosphere.density,
        craft.velocities.x,
        airframe.drag_coefficient,
        airframe.area,
    );
    let drag_y = drag(
        atmosphere.density,
        craft.velocities.y,
        airframe.drag_coefficient,
        airframe.area,
    );

    craft.velocities.x += craft.thrust * sin - drag_x / airframe.mass;
    craft.velocities.y += craft.accel_g - craft.thrust * cos - drag_y / airframe.mass;
}

// ── Integrator ────────────────────────────────────────────────────────────────

/// Altitude-dependent motion and view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// `altitude < 0`: view anchored at the background origin.
    SurfaceProximate,
    /// `0 <= altitude <= ceiling`: view scrolls with altitude.
    MidDescent,
    /// `altitude > ceiling`: view frozen at the latched altitude.
    Clamped,
}

impl Regime {
    pub fn classify(altitude: f32, viewport: &Viewport) -> Self {
        if altitude < 0.0 {
            Regime::SurfaceProximate
        } else if altitude <= viewport.scroll_ceiling() {
            Regime::MidDescent
        } else {
            Regime::Clamped
        }
    }
}

/// What the renderer needs after one integrator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionReport {
    pub regime: Regime,
    /// How far the background is scrolled (px); the planet's offset is its negation.
    pub view_offset: f32,
    /// Top-left of the craft marker inside the minimap.
    pub minimap_marker: Vec2,
    /// Vertical offset of the minimap altitude indicator below the minimap top.
    pub progress: f32,
}

impl MotionReport {
    /// Top-left corner of the altitude indicator rectangle.
    pub fn indicator_origin(&self, viewport: &Viewport) -> Vec2 {
        viewport.minimap_origin() + Vec2::new(0.0, self.progress)
    }
}

/// Integer displacement for one tick.
#[inline]
fn step(velocity: f32) -> f32 {
    velocity.round_ties_even()
}

/// Advance the craft (and any background objects) by one tick.
///
/// `altitude` always advances by `velocities.y`; what moves on screen depends
/// on the resulting [`Regime`].  The minimap marker is placed from the
/// position before the craft's x is taken modulo the viewport width.
pub fn integrate(
    craft: &mut Craft,
    planet: &mut Planet,
    objects: Option<&mut [BackgroundObject]>,
    viewport: &Viewport,
) -> MotionReport {
    craft.altitude += craft.velocities.y;
    let regime = Regime::classify(craft.altitude, viewport);

    let view_offset = match regime {
        Regime::SurfaceProximate => {
            craft.position += Vec2::new(step(craft.velocities.x), step(craft.velocities.y));
            0.0
        }
        Regime::MidDescent => {
            craft.position.x += step(craft.velocities.x);
            craft.last_altitude = craft.altitude;
            craft.altitude
        }
        Regime::Clamped => {
            craft.position += Vec2::new(step(craft.velocities.x), step(craft.velocities.y));
            craft.last_altitude
        }
    };
    planet.offset = Vec2::new(0.0, -view_offset);

    if let Some(objects) = objects {
        advance_objects(objects, regime, view_offset, viewport);
    }

    // The marker tracks the unwrapped position; it jumps on the next tick.
    let marker = minimap_marker(craft.position, view_offset, viewport);
    craft.position.x = craft.position.x.rem_euclid(viewport.width);

    let progress = match regime {
        Regime::SurfaceProximate => 0.0,
        _ => (view_offset / MINIMAP_PROGRESS_DIVISOR).trunc(),
    };

    MotionReport {
        regime,
        view_offset,
        minimap_marker: marker,
        progress,
    }
}

/// Drift each object by its own velocity.
///
/// Near the top of the range objects move freely; while the view scrolls (or
/// is clamped) their y is pinned to the scroll so they ride with the
/// background.  Wrapping is one-directional: an object whose left edge is
/// right of zero jumps back a full viewport width.
fn advance_objects(
    objects: &mut [BackgroundObject],
    regime: Regime,
    view_offset: f32,
    viewport: &Viewport,
) {
    for object in objects.iter_mut() {
        object.top_left.x += object.velocity.x;
        object.top_left.y = match regime {
            Regime::SurfaceProximate => object.top_left.y + object.velocity.y,
            Regime::MidDescent | Regime::Clamped => -view_offset + object.velocity.y,
        };
        if object.top_left.x > 0.0 {
            object.top_left.x -= viewport.width;
        }
    }
}

/// Craft marker position: the craft's viewport coordinates scaled by
/// `MINIMAP_SCALE`, shifted down by the scrolled fraction and placed in the
/// minimap rectangle.
pub fn minimap_marker(position: Vec2, view_offset: f32, viewport: &Viewport) -> Vec2 {
    let origin = viewport.minimap_origin();
    Vec2::new(
        ((position.x * MINIMAP_SCALE).round_ties_even() + origin.x).trunc(),
        ((position.y * MINIMAP_SCALE).round_ties_even() + origin.y + view_offset * MINIMAP_SCALE)
            .trunc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn craft_with(position: Vec2, velocities: Vec2, altitude: f32) -> Craft {
        let mut craft = Craft::at(position);
        craft.velocities = velocities;
        craft.altitude = altitude;
        craft
    }

    // ── regimes ───────────────────────────────────────────────────────────────

    #[test]
    fn regime_boundaries() {
        let vp = Viewport::default();
        assert_eq!(Regime::classify(-0.1, &vp), Regime::SurfaceProximate);
        assert_eq!(Regime::classify(0.0, &vp), Regime::MidDescent);
        assert_eq!(Regime::classify(2160.0, &vp), Regime::MidDescent);
        assert_eq!(Regime::classify(2160.5, &vp), Regime::Clamped);
    }

    #[test]
    fn surface_regime_moves_both_axes_and_anchors_view() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(400.0, 300.0), Vec2::new(2.0, -3.0), -10.0);
        craft.last_altitude = 55.0;

        let report = integrate(&mut craft, &mut planet, None, &vp);

        assert_eq!(report.regime, Regime::SurfaceProximate);
        assert_eq!(craft.altitude, -13.0);
        assert_eq!(craft.position, Vec2::new(402.0, 297.0));
        assert_eq!(report.view_offset, 0.0);
        assert_eq!(planet.offset, Vec2::ZERO);
        assert_eq!(craft.last_altitude, 55.0, "surface regime must not latch");
        assert_eq!(report.progress, 0.0);
    }

    #[test]
    fn mid_descent_scrolls_view_and_latches_altitude() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(400.0, 300.0), Vec2::new(-2.0, 4.0), 100.0);

        let report = integrate(&mut craft, &mut planet, None, &vp);

        assert_eq!(report.regime, Regime::MidDescent);
        assert_eq!(craft.altitude, 104.0);
        assert_eq!(craft.position, Vec2::new(398.0, 300.0), "y is fixed while scrolling");
        assert_eq!(craft.last_altitude, 104.0);
        assert_eq!(planet.offset, Vec2::new(0.0, -104.0));
        assert_eq!(report.progress, 10.0);
    }

    #[test]
    fn clamped_regime_freezes_view_at_latched_altitude() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(640.0, 300.0), Vec2::new(0.0, 1.0), 2158.0);

        integrate(&mut craft, &mut planet, None, &vp);
        assert_eq!(craft.last_altitude, 2159.0);

        craft.velocities = Vec2::new(1.0, 5.0);
        let report = integrate(&mut craft, &mut planet, None, &vp);

        assert_eq!(report.regime, Regime::Clamped);
        assert_eq!(craft.altitude, 2164.0, "altitude keeps tracking past the ceiling");
        assert_eq!(craft.last_altitude, 2159.0);
        assert_eq!(report.view_offset, 2159.0);
        assert_eq!(planet.offset, Vec2::new(0.0, -2159.0));
        assert_eq!(craft.position, Vec2::new(641.0, 305.0));
        assert_eq!(report.progress, 215.0);
    }

    #[test]
    fn displacement_rounds_half_to_even() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(100.0, 100.0), Vec2::new(0.5, -1.5), -50.0);

        integrate(&mut craft, &mut planet, None, &vp);

        assert_eq!(craft.position, Vec2::new(100.0, 98.0));
    }

    // ── wraparound ────────────────────────────────────────────────────────────

    #[test]
    fn craft_wraps_both_ways() {
        let vp = Viewport::default();
        let mut planet = Planet::default();

        let mut left = craft_with(Vec2::new(1.0, 300.0), Vec2::new(-3.0, 0.0), 10.0);
        integrate(&mut left, &mut planet, None, &vp);
        assert_eq!(left.position.x, 1278.0);

        let mut right = craft_with(Vec2::new(1279.0, 300.0), Vec2::new(3.0, 0.0), 10.0);
        integrate(&mut right, &mut planet, None, &vp);
        assert_eq!(right.position.x, 2.0);

        let mut edge = craft_with(Vec2::new(1278.0, 300.0), Vec2::new(2.0, 0.0), 10.0);
        integrate(&mut edge, &mut planet, None, &vp);
        assert_eq!(edge.position.x, 0.0, "the right edge maps onto zero");
    }

    #[test]
    fn horizontal_centre_stays_in_viewport() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut craft = Craft::default();

        for _ in 0..5_000 {
            craft.velocities = Vec2::new(rng.gen_range(-40.0..40.0), rng.gen_range(-6.0..6.0));
            integrate(&mut craft, &mut planet, None, &vp);
            assert!(
                (0.0..vp.width).contains(&craft.position.x),
                "x escaped the viewport: {}",
                craft.position.x
            );
        }
    }

    // ── background objects ────────────────────────────────────────────────────

    #[test]
    fn objects_wrap_only_after_crossing_zero_from_the_left() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(640.0, 300.0), Vec2::ZERO, -5.0);
        let mut objects = vec![
            BackgroundObject::new(Vec2::new(-2.0, 40.0), Vec2::new(50.0, 20.0), Vec2::new(3.0, 1.0)),
            BackgroundObject::new(Vec2::new(-1400.0, 40.0), Vec2::new(50.0, 20.0), Vec2::new(-3.0, 0.0)),
        ];

        integrate(&mut craft, &mut planet, Some(&mut objects), &vp);

        assert_eq!(objects[0].top_left, Vec2::new(1.0 - 1280.0, 41.0));
        assert_eq!(
            objects[1].top_left,
            Vec2::new(-1403.0, 40.0),
            "leftward drift past -width is never corrected"
        );
    }

    #[test]
    fn objects_ride_the_scroll_in_mid_descent() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(640.0, 300.0), Vec2::new(0.0, 2.0), 500.0);
        let mut objects = vec![BackgroundObject::new(
            Vec2::new(-600.0, 900.0),
            Vec2::new(80.0, 30.0),
            Vec2::new(2.0, 4.0),
        )];

        integrate(&mut craft, &mut planet, Some(&mut objects), &vp);

        assert_eq!(objects[0].top_left, Vec2::new(-598.0, -502.0 + 4.0));
    }

    // ── minimap ───────────────────────────────────────────────────────────────

    #[test]
    fn minimap_marker_scales_into_rectangle() {
        let vp = Viewport::default();
        assert_eq!(
            minimap_marker(Vec2::new(640.0, 360.0), 0.0, &vp),
            Vec2::new(64.0 + 1130.0, 36.0 + 18.0)
        );
        assert_eq!(
            minimap_marker(Vec2::new(640.0, 360.0), 1000.0, &vp),
            Vec2::new(1194.0, 36.0 + 18.0 + 100.0)
        );
    }

    #[test]
    fn minimap_marker_is_placed_before_the_wrap() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(1279.0, 300.0), Vec2::new(3.0, 0.0), 10.0);

        let report = integrate(&mut craft, &mut planet, None, &vp);
        assert_eq!(craft.position.x, 2.0);
        assert_eq!(report.minimap_marker.x, 128.0 + 1130.0);

        let report = integrate(&mut craft, &mut planet, None, &vp);
        assert!(report.minimap_marker.x <= 1.0 + 1130.0, "{}", report.minimap_marker);
    }

    #[test]
    fn indicator_origin_follows_progress() {
        let vp = Viewport::default();
        let mut planet = Planet::default();
        let mut craft = craft_with(Vec2::new(640.0, 300.0), Vec2::new(0.0, 9.0), 1000.0);
        let report = integrate(&mut craft, &mut planet, None, &vp);
        assert_eq!(report.indicator_origin(&vp), Vec2::new(1130.0, 18.0 + 100.0));
    }

    // ── forces ────────────────────────────────────────────────────────────────

    #[test]
    fn gravity_accelerates_descent_in_vacuum() {
        let mut craft = Craft::default();
        let atmosphere = Atmosphere {
            gravity: 0.05,
            density: 0.0,
        };
        apply_forces(&mut craft, &FlightIntent::default(), &atmosphere, &Airframe::default());
        apply_forces(&mut craft, &FlightIntent::default(), &atmosphere, &Airframe::default());

        assert!((craft.velocities.y - 0.1).abs() < 1e-6);
        assert_eq!(craft.velocities.x, 0.0);
        assert_eq!(craft.accel_g, 0.05);
    }

    #[test]
    fn upright_thrust_opposes_gravity() {
        let mut craft = Craft::default();
        let airframe = Airframe::default();
        let atmosphere = Atmosphere {
            gravity: 0.02,
            density: 0.0,
        };
        let intent = FlightIntent {
            thrust: true,
            rotate: 0.0,
        };

        apply_forces(&mut craft, &intent, &atmosphere, &airframe);

        assert_eq!(craft.thrust, airframe.thrust_power);
        assert!((craft.velocities.y - (0.02 - airframe.thrust_power)).abs() < 1e-6);
    }

    #[test]
    fn clockwise_tilt_pushes_right() {
        let mut craft = Craft::default();
        craft.angle = 90.0;
        let intent = FlightIntent {
            thrust: true,
            rotate: 0.0,
        };
        let atmosphere = Atmosphere {
            gravity: 0.0,
            density: 0.0,
        };

        apply_forces(&mut craft, &intent, &atmosphere, &Airframe::default());

        assert!(craft.velocities.x > 0.0, "got {:?}", craft.velocities);
        assert!(craft.velocities.y.abs() < 1e-6);
    }

    #[test]
    fn drag_slows_a_falling_craft() {
        let airframe = Airframe::default();
        let mut vacuum = Craft::default();
        vacuum.velocities = Vec2::new(0.0, 6.0);
        let mut thick = vacuum.clone();

        let g = 0.03;
        apply_forces(
            &mut vacuum,
            &FlightIntent::default(),
            &Atmosphere { gravity: g, density: 0.0 },
            &airframe,
        );
        apply_forces(
            &mut thick,
            &FlightIntent::default(),
            &Atmosphere { gravity: g, density: 1.0 },
            &airframe,
        );

        assert!(thick.velocities.y < vacuum.velocities.y);
    }

    #[test]
    fn rotation_wraps_attitude() {
        let mut craft = Craft::default();
        craft.angle = 179.0;
        let intent = FlightIntent {
            thrust: false,
            rotate: 1.0,
        };
        let atmosphere = Atmosphere {
            gravity: 0.0,
            density: 0.0,
        };

        apply_forces(&mut craft, &intent, &atmosphere, &Airframe::default());

        assert!((craft.angle - (-179.0)).abs() < 1e-4, "got {}", craft.angle);
    }

    #[test]
    fn frozen_craft_ignores_forces() {
        let mut craft = Craft::default();
        craft.freeze();
        let intent = FlightIntent {
            thrust: true,
            rotate: 1.0,
        };
        apply_forces(
            &mut craft,
            &intent,
            &Atmosphere { gravity: 1.0, density: 1.0 },
            &Airframe::default(),
        );
        assert_eq!(craft.velocities, Vec2::ZERO);
        assert_eq!(craft.angle, 0.0);
        assert_eq!(craft.thrust, 0.0);
    }
}
