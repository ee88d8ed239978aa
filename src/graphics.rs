use crate::config::LanderConfig;
use bevy::prelude::*;

/// Spawn the 2D camera.
///
/// The default projection maps one world unit to one window pixel, so a
/// window the size of the configured viewport shows exactly the play area.
pub fn setup_camera(mut commands: Commands, config: Res<LanderConfig>) {
    commands.spawn(Camera2d);
    eprintln!(
        "[SETUP] Camera spawned for a {}x{} viewport",
        config.viewport_width, config.viewport_height
    );
}
