use bevy::prelude::*;
use bevy::window::WindowResolution;

use lander::audio::LanderAudioPlugin;
use lander::config::{self, LanderConfig};
use lander::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use lander::flight::FlightPlugin;
use lander::graphics;
use lander::menu::{self, MenuPlugin};
use lander::rendering::RenderingPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Lander".into(),
            resolution: WindowResolution::new(VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Compiled defaults; load_lander_config overwrites them from
    // assets/lander.toml (if present) in the Startup schedule.
    .insert_resource(LanderConfig::default())
    // MenuPlugin registers GameState, so it goes before anything gated on it.
    .add_plugins(MenuPlugin)
    .add_plugins((FlightPlugin, RenderingPlugin, LanderAudioPlugin))
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_lander_config,
            graphics::setup_camera.after(config::load_lander_config),
            menu::configure_highscore_store.after(config::load_lander_config),
        ),
    );

    app.run();
}
