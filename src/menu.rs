//! Screens and the `GameState` machine.
//!
//! ## States
//!
//! | State        | Description                                        |
//! |--------------|----------------------------------------------------|
//! | `MainMenu`   | Initial state; title screen                        |
//! | `Controls`   | Key reference before the first descent             |
//! | `Playing`    | Descent running; flight systems active             |
//! | `Outcome`    | Craft frozen; verdict overlay over the scene       |
//! | `NameEntry`  | Ranking score; player types a name                 |
//! | `Highscores` | Table view with reset                              |
//!
//! ## Transitions
//!
//! ```text
//! MainMenu ──ENTER──▶ Controls ──SPACE──▶ Playing ──contact──▶ Outcome
//!    │  ▲                                   ▲                   │
//!    H  └──────────ESC (nothing banked)─────┼───────────────────┤
//!    ▼                                      └──SPACE / A────────┤
//! Highscores ◀──────────────ESC / last level────────────────────┤
//!    ▲                                                          │
//!    └──────────── ENTER / ESC ── NameEntry ◀── ranking score ──┘
//! ```

use crate::audio::MusicSettings;
use crate::config::LanderConfig;
use crate::flight::LastLanding;
use crate::highscore::{HighscoreStore, HighscoreTable};
use crate::level::{Campaign, Session};
use crate::name_entry::{NameEntry, NameKey};
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

mod common;
mod controls;
mod highscores;
mod main_menu;
mod outcome;
mod register;
mod types;

use common::*;
use controls::*;
pub use highscores::configure_highscore_store;
use highscores::*;
use main_menu::*;
use outcome::*;
use register::*;
pub use types::*;

/// Registers `GameState`, every screen's setup / teardown, and the key
/// handlers.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(...))`, so the state is always registered first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<MusicSettings>()
            .init_resource::<HighscoreStore>()
            .init_resource::<HighscoreTable>()
            .init_resource::<NameEntry>()
            .init_resource::<Session>()
            .init_resource::<Campaign>()
            .init_resource::<LastLanding>()
            // ── Main menu ────────────────────────────────────────────────────
            .add_systems(
                OnEnter(GameState::MainMenu),
                (reset_session, setup_main_menu),
            )
            .add_systems(OnExit(GameState::MainMenu), despawn_screen::<MainMenuRoot>)
            .add_systems(
                Update,
                (main_menu_input_system, music_status_text_system)
                    .chain()
                    .run_if(in_state(GameState::MainMenu)),
            )
            // ── Controls ─────────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::Controls), setup_controls)
            .add_systems(OnExit(GameState::Controls), despawn_screen::<ControlsRoot>)
            .add_systems(
                Update,
                controls_input_system.run_if(in_state(GameState::Controls)),
            )
            // ── Outcome overlay ──────────────────────────────────────────────
            .add_systems(OnEnter(GameState::Outcome), setup_outcome)
            .add_systems(OnExit(GameState::Outcome), despawn_screen::<OutcomeRoot>)
            .add_systems(
                Update,
                outcome_input_system.run_if(in_state(GameState::Outcome)),
            )
            // ── Name entry ───────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::NameEntry), setup_name_entry)
            .add_systems(OnExit(GameState::NameEntry), despawn_screen::<NameEntryRoot>)
            .add_systems(
                Update,
                (name_entry_input_system, name_entry_display_system)
                    .chain()
                    .run_if(in_state(GameState::NameEntry)),
            )
            // ── Highscores ───────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::Highscores), setup_highscores)
            .add_systems(
                OnExit(GameState::Highscores),
                despawn_screen::<HighscoresRoot>,
            )
            .add_systems(
                Update,
                highscores_input_system.run_if(in_state(GameState::Highscores)),
            );
    }
}
