use super::*;

/// Spawn the full-screen title screen.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                 LANDER                      │
/// │      Bring the craft down in one piece      │
/// │                                             │
/// │       Press [ENTER] to start                │
/// │       Press [H] to view highscores          │
/// │       Press [M] to toggle music (on)        │
/// │       Press [ESC] to exit.                  │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands, music: Res<MusicSettings>) {
    commands
        .spawn((screen_node(), BackgroundColor(Color::BLACK), MainMenuRoot))
        .with_children(|root| {
            text_line(root, "LANDER", 64.0, title_color());
            spacer(root, 10.0);
            text_line(
                root,
                "Bring the craft down in one piece",
                18.0,
                subtitle_color(),
            );
            spacer(root, 52.0);
            text_line(root, "Press [ENTER] to start", 22.0, prompt_color());
            spacer(root, 10.0);
            text_line(root, "Press [H] to view highscores", 22.0, prompt_color());
            spacer(root, 10.0);
            root.spawn((
                Text::new(music_line(&music)),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(prompt_color()),
                MusicStatusText,
            ));
            spacer(root, 10.0);
            text_line(root, "Press [ESC] to exit.", 22.0, prompt_color());
            spacer(root, 52.0);
            text_line(
                root,
                concat!("v", env!("CARGO_PKG_VERSION"), "  ·  Bevy 0.17"),
                12.0,
                hint_color(),
            );
        });
}

fn music_line(music: &MusicSettings) -> String {
    let status = if music.enabled { "on" } else { "off" };
    format!("Press [M] to toggle music ({status})")
}

/// A fresh campaign starts every time the title screen is shown.
pub(super) fn reset_session(mut session: ResMut<Session>) {
    session.reset();
}

/// - **ENTER / SPACE** → [`GameState::Controls`]
/// - **H** → [`GameState::Highscores`]
/// - **M** → flip [`MusicSettings::enabled`]
/// - **ESC** → `AppExit`
pub(super) fn main_menu_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut music: ResMut<MusicSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    if keys.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        next_state.set(GameState::Controls);
    } else if keys.just_pressed(KeyCode::KeyH) {
        next_state.set(GameState::Highscores);
    } else if keys.just_pressed(KeyCode::KeyM) {
        music.toggle();
    } else if keys.just_pressed(KeyCode::Escape) {
        info!("Exit requested from the main menu");
        exit.write(bevy::app::AppExit::Success);
    }
}

pub(super) fn music_status_text_system(
    music: Res<MusicSettings>,
    mut text: Query<&mut Text, With<MusicStatusText>>,
) {
    if !music.is_changed() {
        return;
    }
    for mut line in text.iter_mut() {
        line.0 = music_line(&music);
    }
}
