use super::*;

pub(super) fn setup_controls(mut commands: Commands) {
    commands
        .spawn((screen_node(), BackgroundColor(Color::BLACK), ControlsRoot))
        .with_children(|root| {
            text_line(root, "Controls", 48.0, title_color());
            spacer(root, 40.0);
            control_row(root, "[UP]", "Fire the ships thrusters");
            spacer(root, 12.0);
            control_row(root, "[LEFT] [RIGHT]", "Rotate the ship");
            spacer(root, 40.0);
            text_line(
                root,
                "Land slowly and upright on open ground.",
                18.0,
                subtitle_color(),
            );
            spacer(root, 40.0);
            text_line(root, "Press [SPACE] to continue", 22.0, prompt_color());
        });
}

fn control_row(parent: &mut ChildSpawnerCommands<'_>, keys: &str, action: &str) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(24.0),
            ..default()
        })
        .with_children(|row| {
            text_line(row, keys, 22.0, title_color());
            text_line(row, action, 22.0, prompt_color());
        });
}

/// SPACE / ENTER begins the descent; ESC goes back to the title.
pub(super) fn controls_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.any_just_pressed([KeyCode::Space, KeyCode::Enter]) {
        next_state.set(GameState::Playing);
    } else if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::MainMenu);
    }
}
