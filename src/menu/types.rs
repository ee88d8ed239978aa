use bevy::prelude::*;

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    MainMenu,
    /// Key reference shown before the first descent.
    Controls,
    /// Descent in progress; flight systems active.
    Playing,
    /// Craft frozen after contact; verdict overlay shown.
    Outcome,
    /// New highscore; the player types a name.
    NameEntry,
    /// Highscore table.
    Highscores,
}

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Text line showing whether music is on.
#[derive(Component)]
pub struct MusicStatusText;

/// Root node of the controls screen.
#[derive(Component)]
pub struct ControlsRoot;

/// Root node of the landing-verdict overlay; despawned on `OnExit(Outcome)`.
#[derive(Component)]
pub struct OutcomeRoot;

/// Root node of the name-entry screen.
#[derive(Component)]
pub struct NameEntryRoot;

/// The text inside the name box.
#[derive(Component)]
pub struct NameEntryValueText;

/// Root node of the highscore table screen.
#[derive(Component)]
pub struct HighscoresRoot;
