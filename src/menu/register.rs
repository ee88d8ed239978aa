use super::*;

/// Spawn the "New Highscore!" screen with an empty name box.
pub(super) fn setup_name_entry(
    mut commands: Commands,
    mut entry: ResMut<NameEntry>,
    session: Res<Session>,
) {
    *entry = NameEntry::new();

    commands
        .spawn((screen_node(), BackgroundColor(Color::BLACK), NameEntryRoot))
        .with_children(|root| {
            text_line(root, "New Highscore!", 48.0, title_color());
            spacer(root, 8.0);
            text_line(
                root,
                format!("{} points", session.score),
                22.0,
                success_color(),
            );
            spacer(root, 36.0);
            text_line(root, "Enter your name below:", 22.0, prompt_color());
            spacer(root, 12.0);

            root.spawn((
                Node {
                    width: Val::Px(420.0),
                    height: Val::Px(48.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(card_bg()),
                BorderColor::all(card_border()),
            ))
            .with_children(|field| {
                field.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    NameEntryValueText,
                ));
            });

            spacer(root, 24.0);
            text_line(
                root,
                "Press [ENTER] to submit your name",
                18.0,
                subtitle_color(),
            );
            text_line(
                root,
                "or press [ESC] to submit anonymously.",
                18.0,
                subtitle_color(),
            );
        });
}

/// Feed this frame's key presses into the name box; once it resolves, record
/// the score and show the table.
///
/// A failed save is logged and the table screen shows whatever is on disk.
pub(super) fn name_entry_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    store: Res<HighscoreStore>,
    session: Res<Session>,
    mut entry: ResMut<NameEntry>,
    mut table: ResMut<HighscoreTable>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let mut finished = false;
    for key in keys.get_just_pressed() {
        if let Some(name_key) = NameKey::from_key_code(*key, shift) {
            finished |= entry.handle(name_key);
        }
    }
    if !finished {
        return;
    }

    let Some(name) = entry.resolved_name() else {
        return;
    };
    match store.append(name, session.score) {
        Ok(updated) => *table = updated,
        Err(err) => error!("Could not save highscore for {name:?}: {err}"),
    }
    next_state.set(GameState::Highscores);
}

pub(super) fn name_entry_display_system(
    entry: Res<NameEntry>,
    mut text: Query<&mut Text, With<NameEntryValueText>>,
) {
    if !entry.is_changed() {
        return;
    }
    for mut value in text.iter_mut() {
        value.0 = entry.display_text().to_string();
    }
}
