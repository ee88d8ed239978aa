//! Title music and one-shot landing sounds.
//!
//! Toggling music tears down the looping title track and spawns a fresh one,
//! paused when music is off.  Missing audio files are reported by the asset
//! server and otherwise ignored.

use crate::flight::LandingResolved;
use crate::landing::LandingReport;
use bevy::prelude::*;

const TITLE_TRACK: &str = "audio/title_sound.ogg";
const LANDED_SOUND: &str = "audio/landed.ogg";
const EXPLOSION_SOUND: &str = "audio/explosion.ogg";

/// Whether the title track is audible.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicSettings {
    pub enabled: bool,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MusicSettings {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Looping playback, started paused when music is off.
    pub fn playback(&self) -> PlaybackSettings {
        PlaybackSettings {
            paused: !self.enabled,
            ..PlaybackSettings::LOOP
        }
    }
}

/// Tags the looping title track entity.
#[derive(Component)]
pub struct TitleMusic;

pub struct LanderAudioPlugin;

impl Plugin for LanderAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicSettings>()
            .add_systems(Update, (music_toggle_system, landing_sound_system));
    }
}

/// Respawn the title track whenever [`MusicSettings`] changes, including the
/// first frame after it is inserted.
pub fn music_toggle_system(
    mut commands: Commands,
    music: Res<MusicSettings>,
    asset_server: Res<AssetServer>,
    tracks: Query<Entity, With<TitleMusic>>,
) {
    if !music.is_changed() {
        return;
    }
    for entity in tracks.iter() {
        commands.entity(entity).despawn();
    }
    commands.spawn((
        AudioPlayer::new(asset_server.load(TITLE_TRACK)),
        music.playback(),
        TitleMusic,
    ));
    info!("Music {}", if music.enabled { "on" } else { "off" });
}

/// Sound for a resolved contact: the touchdown chime on a safe landing, the
/// explosion on any crash.
pub fn landing_sound(report: &LandingReport) -> &'static str {
    if report.succeeded() {
        LANDED_SOUND
    } else {
        EXPLOSION_SOUND
    }
}

pub fn landing_sound_system(
    mut commands: Commands,
    mut resolved: MessageReader<LandingResolved>,
    asset_server: Res<AssetServer>,
) {
    for LandingResolved(report) in resolved.read() {
        commands.spawn((
            AudioPlayer::new(asset_server.load(landing_sound(report))),
            PlaybackSettings::DESPAWN,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_pauses() {
        let mut music = MusicSettings::default();
        assert!(music.enabled);
        assert!(!music.playback().paused);

        music.toggle();
        assert!(!music.enabled);
        assert!(music.playback().paused);
        assert!(matches!(
            music.playback().mode,
            bevy::audio::PlaybackMode::Loop
        ));
    }

    #[test]
    fn every_crash_plays_the_explosion() {
        use crate::craft::Craft;
        use crate::landing::object_collision;

        let mut craft = Craft::default();
        craft.velocities = Vec2::new(0.0, 9.0);
        let report = object_collision(&mut craft, 3.0, 0);
        assert!(!report.explodes(), "obstacle crashes skip the impact animation");
        assert_eq!(landing_sound(&report), EXPLOSION_SOUND);

        let mut craft = Craft::default();
        craft.velocities = Vec2::new(0.0, 1.0);
        let report = object_collision(&mut craft, 3.0, 0);
        assert_eq!(landing_sound(&report), LANDED_SOUND);
    }
}
