//! Gizmo drawing of the descent and the in-flight HUD.
//!
//! Game state lives in screen coordinates (origin top-left, y down).  Bevy's
//! 2D camera is centred with y up, so everything passes through
//! [`screen_to_world`] on its way to the gizmo buffer.
//!
//! ## System Responsibilities
//!
//! | System                   | Schedule                   | Purpose                              |
//! |--------------------------|----------------------------|--------------------------------------|
//! | `setup_flight_hud`       | `OnEnter(Playing)`         | Spawn telemetry + warning text nodes |
//! | `reset_impact_flash`     | `OnEnter(Playing)`         | Show the craft again after a crash   |
//! | `flight_hud_system`      | `Update / in Playing`      | Refresh telemetry and warning text   |
//! | `impact_trigger_system`  | `Update / Playing+Outcome` | Arm the explosion flash on a crash   |
//! | `scene_gizmo_system`     | `Update / Playing+Outcome` | Ground, objects, craft, minimap      |

use crate::config::LanderConfig;
use crate::constants::{
    CRAFT_HALF_HEIGHT, CRAFT_HALF_WIDTH, MINIMAP_HEIGHT, MINIMAP_INDICATOR_HEIGHT, MINIMAP_WIDTH,
};
use crate::craft::{BackgroundObjects, Craft, Planet};
use crate::flight::{FlightTelemetry, LandingResolved};
use crate::level::{Campaign, Session};
use crate::menu::GameState;
use crate::motion::Viewport;
use bevy::prelude::*;

/// Frames the explosion flash lasts.
const IMPACT_FRAMES: u32 = 45;

// ── Resources / markers ───────────────────────────────────────────────────────

/// Expanding-ring explosion drawn over a destroyed craft.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactFlash {
    /// Screen position of the craft when it was destroyed.
    pub origin: Vec2,
    pub frames_left: u32,
    /// The craft is gone; stop drawing it until the next attempt.
    pub destroyed: bool,
}

/// Root of the telemetry HUD; despawned on `OnExit(Playing)`.
#[derive(Component)]
pub struct FlightHudRoot;

#[derive(Component)]
pub struct TelemetryText;

#[derive(Component)]
pub struct HazardWarningText;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactFlash>()
            .add_systems(
                OnEnter(GameState::Playing),
                (setup_flight_hud, reset_impact_flash),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_flight_hud)
            .add_systems(
                Update,
                flight_hud_system.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (impact_trigger_system, scene_gizmo_system)
                    .chain()
                    .run_if(in_state(GameState::Playing).or(in_state(GameState::Outcome))),
            );
    }
}

// ── Coordinate helpers ────────────────────────────────────────────────────────

/// Map a screen point (top-left origin, y down) to camera space.
pub fn screen_to_world(point: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        point.x - viewport.width / 2.0,
        viewport.height / 2.0 - point.y,
    )
}

/// Centre of a screen-space rectangle given its top-left corner, in camera space.
fn rect_center(top_left: Vec2, size: Vec2, viewport: &Viewport) -> Vec2 {
    screen_to_world(top_left + size / 2.0, viewport)
}

/// Nose, left foot and right foot of the craft in screen coordinates.
pub fn craft_outline(craft: &Craft) -> [Vec2; 3] {
    let (sin, cos) = craft.angle.to_radians().sin_cos();
    // Clockwise in a y-down frame.
    let rotate = |p: Vec2| Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
    [
        Vec2::new(0.0, -CRAFT_HALF_HEIGHT),
        Vec2::new(-CRAFT_HALF_WIDTH, CRAFT_HALF_HEIGHT),
        Vec2::new(CRAFT_HALF_WIDTH, CRAFT_HALF_HEIGHT),
    ]
    .map(|p| craft.position + rotate(p))
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn setup_flight_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            FlightHudRoot,
        ))
        .with_children(|hud| {
            hud.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
                TelemetryText,
            ));
            hud.spawn((
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.25, 0.2)),
                Node {
                    align_self: AlignSelf::Center,
                    ..default()
                },
                HazardWarningText,
            ));
        });
}

pub fn cleanup_flight_hud(mut commands: Commands, query: Query<Entity, With<FlightHudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

#[allow(clippy::type_complexity)]
pub fn flight_hud_system(
    craft: Res<Craft>,
    session: Res<Session>,
    campaign: Res<Campaign>,
    telemetry: Res<FlightTelemetry>,
    mut telemetry_text: Query<&mut Text, (With<TelemetryText>, Without<HazardWarningText>)>,
    mut warning_text: Query<&mut Text, (With<HazardWarningText>, Without<TelemetryText>)>,
) {
    let level_name = campaign
        .level(session.level_index)
        .map_or("?", |level| level.name);

    for mut text in telemetry_text.iter_mut() {
        text.0 = format!(
            "Level {}: {}   Score {}\nAltitude {:.0}   vx {:.2}   vy {:.2}   angle {:.0}",
            session.level_index + 1,
            level_name,
            session.score,
            craft.altitude,
            craft.velocities.x,
            craft.velocities.y,
            craft.angle
        );
    }
    for mut text in warning_text.iter_mut() {
        text.0 = telemetry.warning.unwrap_or_default().to_string();
    }
}

// ── Gizmos ────────────────────────────────────────────────────────────────────

pub fn reset_impact_flash(mut flash: ResMut<ImpactFlash>) {
    *flash = ImpactFlash::default();
}

/// Arm the flash when a resolved contact destroys the craft.
pub fn impact_trigger_system(
    mut resolved: MessageReader<LandingResolved>,
    craft: Res<Craft>,
    mut flash: ResMut<ImpactFlash>,
) {
    for LandingResolved(report) in resolved.read() {
        if report.explodes() {
            *flash = ImpactFlash {
                origin: craft.position,
                frames_left: IMPACT_FRAMES,
                destroyed: true,
            };
        }
    }
}

/// Draw the frame: ground line, background objects, craft, explosion, minimap.
#[allow(clippy::too_many_arguments)]
pub fn scene_gizmo_system(
    mut gizmos: Gizmos,
    config: Res<LanderConfig>,
    craft: Res<Craft>,
    planet: Res<Planet>,
    objects: Res<BackgroundObjects>,
    telemetry: Res<FlightTelemetry>,
    mut flash: ResMut<ImpactFlash>,
) {
    let viewport = config.viewport();

    // ── Ground ────────────────────────────────────────────────────────────────
    let ground_y = planet.surface_y + planet.offset.y;
    if (0.0..=viewport.height).contains(&ground_y) {
        let ground = Color::srgb(0.55, 0.55, 0.60);
        gizmos.line_2d(
            screen_to_world(Vec2::new(0.0, ground_y), &viewport),
            screen_to_world(Vec2::new(viewport.width, ground_y), &viewport),
            ground,
        );
        let mut x = 0.0;
        while x < viewport.width {
            gizmos.line_2d(
                screen_to_world(Vec2::new(x, ground_y), &viewport),
                screen_to_world(Vec2::new(x + 12.0, ground_y + 12.0), &viewport),
                ground.with_alpha(0.4),
            );
            x += 24.0;
        }
    }

    // ── Background objects ────────────────────────────────────────────────────
    for object in objects.0.iter() {
        gizmos.rect_2d(
            rect_center(object.top_left, object.size, &viewport),
            object.size,
            Color::srgba(0.7, 0.5, 0.3, 0.6),
        );
    }

    // ── Craft ─────────────────────────────────────────────────────────────────
    if !flash.destroyed {
        let [nose, left, right] = craft_outline(&craft).map(|p| screen_to_world(p, &viewport));
        gizmos.linestrip_2d([nose, left, right, nose], Color::WHITE);

        if craft.thrust > 0.0 && !craft.frozen {
            let tail = (left + right) / 2.0;
            let plume = tail + (tail - nose).normalize_or_zero() * CRAFT_HALF_HEIGHT;
            gizmos.line_2d(tail, plume, Color::srgb(1.0, 0.6, 0.1));
        }
    }

    // ── Explosion ─────────────────────────────────────────────────────────────
    if flash.frames_left > 0 {
        let age = (IMPACT_FRAMES - flash.frames_left) as f32;
        let centre = screen_to_world(flash.origin, &viewport);
        let fade = flash.frames_left as f32 / IMPACT_FRAMES as f32;
        gizmos.circle_2d(centre, 4.0 + age * 1.5, Color::srgb(1.0, 0.8, 0.2).with_alpha(fade));
        gizmos.circle_2d(centre, 2.0 + age * 0.8, Color::srgb(1.0, 0.3, 0.1).with_alpha(fade));
        flash.frames_left -= 1;
    }

    // ── Minimap ───────────────────────────────────────────────────────────────
    let origin = viewport.minimap_origin();
    let frame = Vec2::new(MINIMAP_WIDTH, MINIMAP_HEIGHT);
    gizmos.rect_2d(rect_center(origin, frame, &viewport), frame, Color::WHITE);

    if let Some(motion) = telemetry.motion {
        let indicator = Vec2::new(MINIMAP_WIDTH, MINIMAP_INDICATOR_HEIGHT);
        gizmos.rect_2d(
            rect_center(motion.indicator_origin(&viewport), indicator, &viewport),
            indicator,
            Color::srgb(1.0, 0.55, 0.0),
        );
        gizmos.circle_2d(
            screen_to_world(motion.minimap_marker, &viewport),
            2.0,
            Color::srgb(0.4, 1.0, 0.4),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_camera_space() {
        let viewport = Viewport::default();
        assert_eq!(
            screen_to_world(Vec2::ZERO, &viewport),
            Vec2::new(-640.0, 360.0)
        );
        assert_eq!(
            screen_to_world(Vec2::new(1280.0, 720.0), &viewport),
            Vec2::new(640.0, -360.0)
        );
        assert_eq!(screen_to_world(Vec2::new(640.0, 360.0), &viewport), Vec2::ZERO);
    }

    #[test]
    fn upright_craft_points_its_nose_up_the_screen() {
        let craft = Craft::at(Vec2::new(100.0, 100.0));
        let [nose, left, right] = craft_outline(&craft);
        assert_eq!(nose, Vec2::new(100.0, 100.0 - CRAFT_HALF_HEIGHT));
        assert!(left.x < right.x);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn clockwise_tilt_swings_the_nose_right() {
        let mut craft = Craft::at(Vec2::new(100.0, 100.0));
        craft.angle = 90.0;
        let [nose, ..] = craft_outline(&craft);
        assert!((nose.x - (100.0 + CRAFT_HALF_HEIGHT)).abs() < 1e-3, "{nose}");
        assert!((nose.y - 100.0).abs() < 1e-3, "{nose}");
    }
}
