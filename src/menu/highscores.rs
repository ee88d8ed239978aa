use super::*;

/// Startup system: point the store at the configured path.
pub fn configure_highscore_store(mut commands: Commands, config: Res<LanderConfig>) {
    commands.insert_resource(HighscoreStore::with_capacity(
        config.highscore_path.clone(),
        config.highscore_capacity,
    ));
    eprintln!("[SETUP] Highscores at {}", config.highscore_path);
}

/// Refresh the table from disk and draw it.
pub(super) fn setup_highscores(
    mut commands: Commands,
    store: Res<HighscoreStore>,
    mut table: ResMut<HighscoreTable>,
) {
    match store.load_or_init() {
        Ok(current) => *table = current,
        Err(err) => error!("Could not read highscores: {err}"),
    }
    spawn_highscores(&mut commands, &table);
}

fn spawn_highscores(commands: &mut Commands, table: &HighscoreTable) {
    commands
        .spawn((screen_node(), BackgroundColor(Color::BLACK), HighscoresRoot))
        .with_children(|root| {
            text_line(root, "Highscores", 48.0, title_color());
            spacer(root, 28.0);

            root.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                min_width: Val::Px(420.0),
                ..default()
            })
            .with_children(|list| {
                for (rank, entry) in table.entries.iter().enumerate() {
                    list.spawn(Node {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    })
                    .with_children(|row| {
                        text_line(
                            row,
                            format!("{:>2}. {}", rank + 1, entry.name),
                            22.0,
                            prompt_color(),
                        );
                        text_line(row, entry.score.to_string(), 22.0, title_color());
                    });
                }
            });

            spacer(root, 36.0);
            text_line(root, "Press [R] to reset highscores.", 18.0, subtitle_color());
            text_line(root, "Press [ESC] to return.", 18.0, subtitle_color());
        });
}

/// R wipes the table back to the sentinel entry; ESC / ENTER returns to the
/// title screen.
pub(super) fn highscores_input_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    store: Res<HighscoreStore>,
    mut table: ResMut<HighscoreTable>,
    roots: Query<Entity, With<HighscoresRoot>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        match store.reset() {
            Ok(fresh) => *table = fresh,
            Err(err) => {
                error!("Could not reset highscores: {err}");
                return;
            }
        }
        for entity in roots.iter() {
            commands.entity(entity).despawn();
        }
        spawn_highscores(&mut commands, &table);
    } else if keys.any_just_pressed([KeyCode::Escape, KeyCode::Enter]) {
        next_state.set(GameState::MainMenu);
    }
}
