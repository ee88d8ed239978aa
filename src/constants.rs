//! Centralised flight, viewport and scoring constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::LanderConfig`] mirrors the runtime-tunable subset and uses
//! these as its defaults.
//!
//! ## Units
//!
//! Positions are screen pixels with the origin at the top-left of the
//! viewport and `y` growing downward.  Velocities are pixels per tick and
//! angles are degrees.

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Width of the playfield viewport (px).  Horizontal motion wraps at this width.
pub const VIEWPORT_WIDTH: f32 = 1280.0;

/// Height of the playfield viewport (px).
pub const VIEWPORT_HEIGHT: f32 = 720.0;

/// Number of viewport heights the background scrolls through before the
/// view clamps.  The mid-descent regime covers `0..=SCROLL_SCREENS * VIEWPORT_HEIGHT`.
pub const SCROLL_SCREENS: f32 = 3.0;

// ── Minimap ───────────────────────────────────────────────────────────────────

/// Distance of the minimap's left edge from the right edge of the viewport.
pub const MINIMAP_RIGHT_INSET: f32 = 150.0;

/// Top edge of the minimap rectangle.
pub const MINIMAP_TOP: f32 = 18.0;

pub const MINIMAP_WIDTH: f32 = 131.0;
pub const MINIMAP_HEIGHT: f32 = 291.0;

/// Height of the orange altitude indicator that slides down the minimap.
pub const MINIMAP_INDICATOR_HEIGHT: f32 = 76.0;

/// Minimap scale relative to viewport coordinates.
pub const MINIMAP_SCALE: f32 = 0.1;

/// Divisor that maps altitude to the indicator's vertical offset.
pub const MINIMAP_PROGRESS_DIVISOR: f32 = 10.0;

// ── Landing ───────────────────────────────────────────────────────────────────

/// Largest tilt (degrees, either side of vertical) that still counts as upright.
pub const SAFE_ANGLE_DEG: f32 = 10.0;

// ── Craft physics ─────────────────────────────────────────────────────────────

/// Thrust acceleration applied while the engine fires (px/tick²).
pub const THRUST_POWER: f32 = 0.06;

/// Rotation applied per tick while a rotate key is held (degrees).
pub const ROTATION_SPEED: f32 = 2.0;

/// Craft mass used to turn drag force into deceleration.
pub const CRAFT_MASS: f32 = 1000.0;

/// Aerodynamic drag coefficient of the craft hull.
pub const CRAFT_DRAG_COEFFICIENT: f32 = 0.8;

/// Cross-sectional area presented to the airflow.
pub const CRAFT_AREA: f32 = 12.0;

/// Half extents of the craft's collision box (px).
pub const CRAFT_HALF_WIDTH: f32 = 16.0;
pub const CRAFT_HALF_HEIGHT: f32 = 22.0;

/// Screen position the craft starts each level from.
pub const CRAFT_START_X: f32 = 640.0;
pub const CRAFT_START_Y: f32 = 200.0;

// ── Hazards ───────────────────────────────────────────────────────────────────

/// Ticks per half-period of the hazard warning blink.
pub const HAZARD_BLINK_TICKS: u32 = 10;

/// Upper bound (exclusive) of the random draw that feeds the wind push
/// before truncation.  `1.2` makes a push of `1` happen on about one tick in six.
pub const WIND_GUST_MAX: f32 = 1.2;

// ── Highscores ────────────────────────────────────────────────────────────────

/// Maximum number of entries kept in the table.
pub const HIGHSCORE_CAPACITY: usize = 10;

/// Longest name the name-entry box accepts.
pub const HIGHSCORE_NAME_MAX: usize = 22;

/// Entry written into a fresh or reset table.
pub const HIGHSCORE_SENTINEL_NAME: &str = "Example";
pub const HIGHSCORE_SENTINEL_SCORE: i64 = 50;

/// Name substituted when the player cancels or submits a blank name.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Default location of the highscore file, relative to the working directory.
pub const HIGHSCORE_PATH: &str = ".highscores.toml";

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Points per level number awarded for a safe landing.
pub const LEVEL_SCORE_BASE: i64 = 100;

/// Starting value of the time bonus; one point is lost every
/// `TIME_BONUS_TICKS_PER_POINT` ticks.
pub const TIME_BONUS_MAX: i64 = 500;
pub const TIME_BONUS_TICKS_PER_POINT: u64 = 6;

/// Points per pixel/tick of margin below the difficulty threshold.
pub const GENTLE_BONUS_SCALE: f32 = 10.0;
