//! Environmental hazards: electromagnetic disruption and high wind.
//!
//! Each active hazard bumps [`Craft::level_timer`] once per tick.  The warning
//! text blinks on a fixed schedule derived from that timer: visible while
//! `floor(level_timer / HAZARD_BLINK_TICKS)` is even.
//!
//! Electromagnetic disruption is purely a warning.  High wind additionally
//! pushes the craft rightward: each tick a uniform draw in `[0, gust_max)` is
//! truncated and added to the horizontal velocity.  With the default
//! `gust_max` of 1.2 that adds 1 on roughly one tick in six and 0 otherwise.
//! Wind never pushes left and never decays.

use crate::constants::{HAZARD_BLINK_TICKS, WIND_GUST_MAX};
use crate::craft::Craft;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-level environmental effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hazard {
    #[default]
    Calm,
    Electromagnetic,
    HighWind,
}

impl Hazard {
    /// Warning line shown while the blink is in its visible phase.
    pub fn warning_text(self) -> Option<&'static str> {
        match self {
            Hazard::Calm => None,
            Hazard::Electromagnetic => Some("WARNING: ELECTRONIC SYSTEMS DISRUPTED!"),
            Hazard::HighWind => Some("WARNING: HIGH WINDS DETECTED!"),
        }
    }
}

/// Blink phase for a given timer value.
#[inline]
pub fn warning_visible(level_timer: u32) -> bool {
    (level_timer / HAZARD_BLINK_TICKS) % 2 == 0
}

/// Advance the electromagnetic hazard one tick.  Returns whether the warning
/// is visible this tick.
pub fn electromagnetic(craft: &mut Craft) -> bool {
    craft.level_timer += 1;
    warning_visible(craft.level_timer)
}

/// Advance the high-wind hazard one tick.  Returns whether the warning is
/// visible this tick.
///
/// A frozen craft keeps blinking but is not pushed.
pub fn high_wind<R: Rng>(craft: &mut Craft, rng: &mut R, gust_max: f32) -> bool {
    craft.level_timer += 1;
    let gust = (rng.gen::<f32>() * gust_max).trunc();
    if !craft.frozen {
        craft.velocities.x += gust;
    }
    warning_visible(craft.level_timer)
}

/// Advance whichever hazard the level carries.  Returns the warning text when
/// it should be drawn this tick.
pub fn tick<R: Rng>(
    hazard: Hazard,
    craft: &mut Craft,
    rng: &mut R,
    gust_max: f32,
) -> Option<&'static str> {
    let visible = match hazard {
        Hazard::Calm => false,
        Hazard::Electromagnetic => electromagnetic(craft),
        Hazard::HighWind => high_wind(craft, rng, gust_max),
    };
    if visible {
        hazard.warning_text()
    } else {
        None
    }
}

/// [`tick`] with the default gust bound.
pub fn tick_default<R: Rng>(
    hazard: Hazard,
    craft: &mut Craft,
    rng: &mut R,
) -> Option<&'static str> {
    tick(hazard, craft, rng, WIND_GUST_MAX)
}
