//! Flight plugin: the per-frame descent loop.
//!
//! ## Systems (registered by `FlightPlugin`)
//!
//! | System                      | Schedule                | Purpose                                  |
//! |-----------------------------|-------------------------|------------------------------------------|
//! | `start_level_system`        | `OnEnter(Playing)`      | Reset craft, planet and objects          |
//! | `flight_intent_clear_system`| `Update / in Playing`   | Zero last frame's intent                 |
//! | `keyboard_to_intent_system` | `Update / in Playing`   | Arrow keys / WASD → `FlightIntent`       |
//! | `hazard_system`             | `Update / in Playing`   | Electromagnetic / wind modifiers         |
//! | `apply_intent_system`       | `Update / in Playing`   | Thrust, gravity, drag → velocity         |
//! | `integrate_system`          | `Update / in Playing`   | Altitude regimes, scrolling, minimap     |
//! | `collision_system`          | `Update / in Playing`   | Contact → landing verdict → `Outcome`    |
//!
//! All `Update` systems are chained so each frame is exactly one tick of the
//! core pipeline, in the order above.

use crate::config::LanderConfig;
use crate::craft::{BackgroundObjects, Craft, Planet};
use crate::hazard;
use crate::landing::{detect_contact, resolve_collision, LandingReport};
use crate::level::{Campaign, Session};
use crate::menu::GameState;
use crate::motion::{apply_forces, integrate, FlightIntent, MotionReport};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Random source for wind gusts.
#[derive(Resource)]
pub struct WindRng(pub StdRng);

impl Default for WindRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Per-frame values the renderer and HUD read.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightTelemetry {
    /// Result of the latest integrator step; `None` before the first tick.
    pub motion: Option<MotionReport>,
    /// Hazard warning to draw this frame.
    pub warning: Option<&'static str>,
}

/// Verdict of the attempt that just ended, shown by the outcome overlay.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LastLanding(pub Option<LandingReport>);

/// Fired once when a contact is resolved.
#[derive(Message, Debug, Clone, Copy)]
pub struct LandingResolved(pub LandingReport);

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the flight resources and the descent loop.
///
/// `GameState` must already be registered (see [`crate::menu::MenuPlugin`]).
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LanderConfig>()
            .init_resource::<Craft>()
            .init_resource::<Planet>()
            .init_resource::<BackgroundObjects>()
            .init_resource::<FlightIntent>()
            .init_resource::<FlightTelemetry>()
            .init_resource::<LastLanding>()
            .init_resource::<Session>()
            .init_resource::<Campaign>()
            .init_resource::<WindRng>()
            .add_message::<LandingResolved>()
            .add_systems(OnEnter(GameState::Playing), start_level_system)
            .add_systems(
                Update,
                (
                    flight_intent_clear_system,
                    keyboard_to_intent_system,
                    hazard_system,
                    apply_intent_system,
                    integrate_system,
                    collision_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Put the craft back at the top of the current level.
#[allow(clippy::too_many_arguments)]
pub fn start_level_system(
    config: Res<LanderConfig>,
    campaign: Res<Campaign>,
    mut session: ResMut<Session>,
    mut craft: ResMut<Craft>,
    mut planet: ResMut<Planet>,
    mut objects: ResMut<BackgroundObjects>,
    mut telemetry: ResMut<FlightTelemetry>,
    mut last: ResMut<LastLanding>,
) {
    let Some(level) = campaign.level(session.level_index) else {
        warn!(
            "No level at index {}; restarting the campaign",
            session.level_index
        );
        session.reset();
        return;
    };

    let start = Craft::default().position;
    *craft = Craft::at(Vec2::new(config.viewport_width / 2.0, start.y));
    *planet = level.planet();
    objects.0 = level.objects.clone();
    *telemetry = FlightTelemetry::default();
    last.0 = None;
    session.ticks = 0;

    info!(
        "Level {} ({}) started: gravity {}, difficulty {}",
        session.level_index + 1,
        level.name,
        level.atmosphere.gravity,
        level.difficulty
    );
}

pub fn flight_intent_clear_system(mut intent: ResMut<FlightIntent>) {
    *intent = FlightIntent::default();
}

/// Up / W fires the engine; Left / A and Right / D rotate.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<FlightIntent>,
) {
    intent.thrust = keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW);

    let left = keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA);
    let right = keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD);
    intent.rotate = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
}

pub fn hazard_system(
    config: Res<LanderConfig>,
    campaign: Res<Campaign>,
    session: Res<Session>,
    mut craft: ResMut<Craft>,
    mut rng: ResMut<WindRng>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    let active = campaign
        .level(session.level_index)
        .map(|level| level.hazard)
        .unwrap_or_default();
    telemetry.warning = hazard::tick(active, &mut craft, &mut rng.0, config.wind_gust_max);
}

pub fn apply_intent_system(
    config: Res<LanderConfig>,
    campaign: Res<Campaign>,
    session: Res<Session>,
    intent: Res<FlightIntent>,
    mut craft: ResMut<Craft>,
) {
    let Some(level) = campaign.level(session.level_index) else {
        return;
    };
    apply_forces(&mut craft, &intent, &level.atmosphere, &config.airframe());
}

pub fn integrate_system(
    config: Res<LanderConfig>,
    mut craft: ResMut<Craft>,
    mut planet: ResMut<Planet>,
    mut objects: ResMut<BackgroundObjects>,
    mut telemetry: ResMut<FlightTelemetry>,
    mut session: ResMut<Session>,
) {
    let slots = if objects.0.is_empty() {
        None
    } else {
        Some(objects.0.as_mut_slice())
    };
    telemetry.motion = Some(integrate(
        &mut craft,
        &mut planet,
        slots,
        &config.viewport(),
    ));
    session.ticks += 1;
}

/// Resolve the first contact of the attempt and hand over to the outcome
/// overlay.  A safe landing banks its score immediately.
#[allow(clippy::too_many_arguments)]
pub fn collision_system(
    campaign: Res<Campaign>,
    planet: Res<Planet>,
    objects: Res<BackgroundObjects>,
    telemetry: Res<FlightTelemetry>,
    mut craft: ResMut<Craft>,
    mut session: ResMut<Session>,
    mut last: ResMut<LastLanding>,
    mut resolved: MessageWriter<LandingResolved>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if craft.frozen {
        return;
    }
    let Some(motion) = telemetry.motion else {
        return;
    };
    let Some(level) = campaign.level(session.level_index) else {
        return;
    };
    let Some(contact) = detect_contact(&craft, &planet, &objects.0, motion.view_offset) else {
        return;
    };

    let report = resolve_collision(&mut craft, contact, level.difficulty);
    if report.succeeded() {
        let points = session.record_landing(report.touchdown, level.difficulty);
        info!(
            "Landed on {} at ({:.2}, {:.2}) after {} ticks: +{} (total {})",
            level.name,
            report.touchdown.x,
            report.touchdown.y,
            session.ticks,
            points,
            session.score
        );
    } else {
        info!(
            "Lost the craft on {}: {:?} at ({:.2}, {:.2})",
            level.name, report.verdict, report.touchdown.x, report.touchdown.y
        );
    }

    last.0 = Some(report);
    resolved.write(LandingResolved(report));
    next_state.set(GameState::Outcome);
}
