//! Level catalogue, session progress and landing score.

use crate::constants::{
    GENTLE_BONUS_SCALE, LEVEL_SCORE_BASE, SCROLL_SCREENS, TIME_BONUS_MAX,
    TIME_BONUS_TICKS_PER_POINT, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Thickness of a dust shelf (px).
const SHELF_HEIGHT: f32 = 30.0;
use crate::craft::{BackgroundObject, Planet};
use crate::hazard::Hazard;
use crate::motion::Atmosphere;
use bevy::prelude::*;

/// One descent.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub atmosphere: Atmosphere,
    /// Largest safe touchdown speed per axis (px/tick).
    pub difficulty: f32,
    pub hazard: Hazard,
    /// Depth of the ground line in background coordinates.
    pub surface_y: f32,
    pub objects: Vec<BackgroundObject>,
}

impl Level {
    pub fn planet(&self) -> Planet {
        Planet::new(background_extent(), self.surface_y)
    }
}

fn background_extent() -> Vec2 {
    Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT * (SCROLL_SCREENS + 1.0))
}

/// A dust shelf one and a half viewports wide that drifts right and wraps.
///
/// While the view scrolls an object's y velocity is its depth in the
/// background, so `depth` places the shelf on the way down.  The left half of
/// the screen is always covered; the gap on the right moves with the drift.
fn dust_shelf(depth: f32, drift: f32) -> BackgroundObject {
    BackgroundObject::new(
        Vec2::new(-VIEWPORT_WIDTH, 0.0),
        Vec2::new(VIEWPORT_WIDTH * 1.5, SHELF_HEIGHT),
        Vec2::new(drift, depth),
    )
}

/// The fixed campaign, easiest first.
pub fn campaign() -> Vec<Level> {
    let ground = background_extent().y - 80.0;
    vec![
        Level {
            name: "The Moon",
            atmosphere: Atmosphere {
                gravity: 0.016,
                density: 0.0,
            },
            difficulty: 5.0,
            hazard: Hazard::Calm,
            surface_y: ground,
            objects: Vec::new(),
        },
        Level {
            name: "Mars",
            atmosphere: Atmosphere {
                gravity: 0.037,
                density: 0.02,
            },
            difficulty: 4.0,
            hazard: Hazard::HighWind,
            surface_y: ground,
            objects: Vec::new(),
        },
        Level {
            name: "Io",
            atmosphere: Atmosphere {
                gravity: 0.018,
                density: 0.0,
            },
            difficulty: 3.5,
            hazard: Hazard::Electromagnetic,
            surface_y: ground - 40.0,
            objects: vec![dust_shelf(ground - 320.0, 1.0)],
        },
        Level {
            name: "Titan",
            atmosphere: Atmosphere {
                gravity: 0.014,
                density: 0.15,
            },
            difficulty: 3.0,
            hazard: Hazard::HighWind,
            surface_y: ground,
            objects: vec![dust_shelf(ground - 280.0, 2.0)],
        },
    ]
}

/// The level list as a resource.
#[derive(Resource, Debug, Clone)]
pub struct Campaign(pub Vec<Level>);

impl Default for Campaign {
    fn default() -> Self {
        Self(campaign())
    }
}

impl Campaign {
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Points for a safe landing on level `index` (zero-based).
///
/// `100 × level number`, plus a time bonus that starts at 500 and loses a
/// point every six ticks, plus ten points per px/tick of margin left under
/// the difficulty threshold.
pub fn landing_score(index: usize, ticks: u64, touchdown: Vec2, difficulty: f32) -> i64 {
    let base = LEVEL_SCORE_BASE * (index as i64 + 1);
    let elapsed = i64::try_from(ticks / TIME_BONUS_TICKS_PER_POINT).unwrap_or(i64::MAX);
    let time_bonus = TIME_BONUS_MAX.saturating_sub(elapsed).max(0);
    let margin = difficulty - touchdown.x.abs().max(touchdown.y.abs());
    let gentle_bonus = (GENTLE_BONUS_SCALE * margin).round().max(0.0) as i64;
    base + time_bonus + gentle_bonus
}

/// Progress through the campaign.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub level_index: usize,
    /// Score banked from completed levels.
    pub score: i64,
    /// Ticks flown on the current attempt.
    pub ticks: u64,
    pub landings: u32,
}

impl Session {
    /// Bank a safe landing on the current level.
    pub fn record_landing(&mut self, touchdown: Vec2, difficulty: f32) -> i64 {
        let points = landing_score(self.level_index, self.ticks, touchdown, difficulty);
        self.score += points;
        self.landings += 1;
        points
    }

    /// Move to the next level.  Returns `false` when the campaign is over.
    pub fn advance(&mut self, level_count: usize) -> bool {
        self.ticks = 0;
        if self.level_index + 1 < level_count {
            self.level_index += 1;
            true
        } else {
            false
        }
    }

    /// Restart the current level.
    pub fn retry(&mut self) {
        self.ticks = 0;
    }

    /// Start a fresh campaign.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_gets_harder() {
        let levels = campaign();
        assert!(levels.len() >= 3);
        for pair in levels.windows(2) {
            assert!(pair[1].difficulty <= pair[0].difficulty, "{} then {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn every_ground_line_sits_inside_the_background() {
        for level in campaign() {
            let planet = level.planet();
            assert!(planet.surface_y > VIEWPORT_HEIGHT * SCROLL_SCREENS, "{}", level.name);
            assert!(planet.surface_y < planet.background_extent.y, "{}", level.name);
        }
    }

    #[test]
    fn shelves_lie_between_the_start_and_the_ground() {
        use crate::constants::{CRAFT_HALF_HEIGHT, CRAFT_START_Y};

        let start_depth = VIEWPORT_HEIGHT * SCROLL_SCREENS + CRAFT_START_Y + CRAFT_HALF_HEIGHT;
        let shelved: Vec<_> = campaign()
            .into_iter()
            .filter(|level| !level.objects.is_empty())
            .collect();
        assert!(!shelved.is_empty(), "some level must carry an obstacle");

        for level in shelved {
            for object in &level.objects {
                let depth = object.velocity.y;
                assert!(depth > start_depth, "{} shelf above the start", level.name);
                assert!(
                    depth + object.size.y < level.surface_y - 2.0 * CRAFT_HALF_HEIGHT,
                    "{} shelf buried in the ground",
                    level.name
                );
                assert!(object.size.x > VIEWPORT_WIDTH && object.size.x < 2.0 * VIEWPORT_WIDTH);
            }
        }
    }

    #[test]
    fn quick_gentle_landing_scores_every_bonus() {
        assert_eq!(landing_score(0, 0, Vec2::ZERO, 5.0), 100 + 500 + 50);
        assert_eq!(landing_score(2, 60, Vec2::new(1.0, 3.0), 5.0), 300 + 490 + 20);
    }

    #[test]
    fn bonuses_never_go_negative() {
        assert_eq!(landing_score(1, 1_000_000, Vec2::new(0.0, 9.0), 5.0), 200);
    }

    #[test]
    fn session_advances_through_the_campaign() {
        let mut session = Session::default();
        session.ticks = 120;
        let points = session.record_landing(Vec2::ZERO, 5.0);
        assert_eq!(points, 100 + 480 + 50);
        assert_eq!(session.score, points);
        assert!(session.advance(2));
        assert_eq!(session.level_index, 1);
        assert_eq!(session.ticks, 0);
        assert!(!session.advance(2));
        assert_eq!(session.level_index, 1);

        session.reset();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn campaign_resource_looks_up_levels() {
        let campaign = Campaign::default();
        assert_eq!(campaign.len(), super::campaign().len());
        assert_eq!(campaign.level(0).map(|l| l.name), Some("The Moon"));
        assert!(campaign.level(campaign.len()).is_none());
    }
}
