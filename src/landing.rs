//! Touchdown classification.
//!
//! [`evaluate`] grades a craft against the level's difficulty.  The two
//! classifiers, [`surface_collision`] and [`object_collision`], turn that
//! grade into a [`LandingReport`] and freeze the craft.  They differ only in
//! presentation: an object strike never shows the impact animation and never
//! says *why* the landing failed.
//!
//! | Outcome       | Surface                      | Object                   |
//! |---------------|------------------------------|--------------------------|
//! | `Safe`        | landed                       | landed                   |
//! | `UnsafeSpeed` | crash, "too fast", explosion | crash, "can't land there"|
//! | `UnsafeAngle` | crash, "vertical", explosion | crash, "can't land there"|

use crate::constants::{CRAFT_HALF_HEIGHT, SAFE_ANGLE_DEG};
use crate::craft::{BackgroundObject, Craft, Planet};
use bevy::math::Vec2;

/// Grade of a touchdown attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingOutcome {
    Safe,
    /// Either velocity component exceeded the difficulty threshold.
    UnsafeSpeed,
    /// Slow enough, but tilted beyond [`SAFE_ANGLE_DEG`].
    UnsafeAngle,
}

/// Grade a touchdown.
///
/// Speed is checked first, so a craft that is both too fast and tilted is
/// reported as [`LandingOutcome::UnsafeSpeed`].  The threshold is inclusive:
/// a component exactly equal to `difficulty` is still safe, as is an angle of
/// exactly ±10°.
pub fn evaluate(craft: &Craft, difficulty: f32) -> LandingOutcome {
    if craft.velocities.x.abs() > difficulty || craft.velocities.y.abs() > difficulty {
        LandingOutcome::UnsafeSpeed
    } else if !(-SAFE_ANGLE_DEG..=SAFE_ANGLE_DEG).contains(&craft.angle) {
        LandingOutcome::UnsafeAngle
    } else {
        LandingOutcome::Safe
    }
}

/// What the craft touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Surface,
    /// Index into the level's background objects.
    Object(usize),
}

/// Why a landing failed, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Speed,
    Angle,
    /// Any unsafe touchdown on a background object.
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Landed,
    Crashed(CrashCause),
}

/// Result of resolving a contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingReport {
    pub contact: Contact,
    pub outcome: LandingOutcome,
    pub verdict: Verdict,
    /// Velocity at the moment of contact, before the craft was frozen.
    pub touchdown: Vec2,
}

impl LandingReport {
    /// `true` when the level is complete.
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.verdict == Verdict::Landed
    }

    /// Whether the destructive-impact animation plays.
    #[inline]
    pub fn explodes(&self) -> bool {
        matches!(
            self.verdict,
            Verdict::Crashed(CrashCause::Speed) | Verdict::Crashed(CrashCause::Angle)
        )
    }

    /// Headline shown over the frozen scene.
    pub fn message(&self) -> &'static str {
        match self.verdict {
            Verdict::Landed => "Good Landing, Commander!",
            Verdict::Crashed(CrashCause::Speed) => "You came in too fast, Commander!",
            Verdict::Crashed(CrashCause::Angle) => "You need to land vertically, Commander!",
            Verdict::Crashed(CrashCause::Obstacle) => "You can't land on that, Commander!",
        }
    }
}

/// Resolve a touchdown on the planet surface.
///
/// The craft is graded first and then frozen whatever the outcome.
pub fn surface_collision(craft: &mut Craft, difficulty: f32) -> LandingReport {
    let outcome = evaluate(craft, difficulty);
    let touchdown = craft.velocities;
    craft.freeze();
    let verdict = match outcome {
        LandingOutcome::Safe => Verdict::Landed,
        LandingOutcome::UnsafeSpeed => Verdict::Crashed(CrashCause::Speed),
        LandingOutcome::UnsafeAngle => Verdict::Crashed(CrashCause::Angle),
    };
    LandingReport {
        contact: Contact::Surface,
        outcome,
        verdict,
        touchdown,
    }
}

/// Resolve a touchdown on background object `index`.
///
/// Unsafe outcomes collapse into [`CrashCause::Obstacle`].
pub fn object_collision(craft: &mut Craft, difficulty: f32, index: usize) -> LandingReport {
    let outcome = evaluate(craft, difficulty);
    let touchdown = craft.velocities;
    craft.freeze();
    let verdict = match outcome {
        LandingOutcome::Safe => Verdict::Landed,
        LandingOutcome::UnsafeSpeed | LandingOutcome::UnsafeAngle => {
            Verdict::Crashed(CrashCause::Obstacle)
        }
    };
    LandingReport {
        contact: Contact::Object(index),
        outcome,
        verdict,
        touchdown,
    }
}

/// Dispatch a contact to the matching classifier.
pub fn resolve_collision(craft: &mut Craft, contact: Contact, difficulty: f32) -> LandingReport {
    match contact {
        Contact::Surface => surface_collision(craft, difficulty),
        Contact::Object(index) => object_collision(craft, difficulty, index),
    }
}

/// Find what, if anything, the craft is touching this tick.
///
/// `view_offset` is the current scroll from [`crate::motion::MotionReport`];
/// adding it to the craft's screen y gives its depth in background
/// coordinates.  The ground wins over an object touched on the same tick.
pub fn detect_contact(
    craft: &Craft,
    planet: &Planet,
    objects: &[BackgroundObject],
    view_offset: f32,
) -> Option<Contact> {
    if craft.position.y + CRAFT_HALF_HEIGHT + view_offset >= planet.surface_y {
        return Some(Contact::Surface);
    }

    let hull = craft.bounds();
    objects
        .iter()
        .position(|object| !hull.intersect(object.bounds()).is_empty())
        .map(Contact::Object)
}
