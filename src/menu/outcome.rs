use super::*;

/// Spawn the verdict overlay over the frozen scene.
///
/// A safe landing offers the next level; a crash offers a retry.  ESC is
/// always available and ends the run.
pub(super) fn setup_outcome(
    mut commands: Commands,
    last: Res<LastLanding>,
    session: Res<Session>,
    campaign: Res<Campaign>,
) {
    let Some(report) = last.0 else {
        warn!("Outcome shown without a landing report");
        return;
    };
    let headline_color = if report.succeeded() {
        success_color()
    } else {
        failure_color()
    };
    let final_level = session.level_index + 1 >= campaign.len();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
            ZIndex(300),
            OutcomeRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(420.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(|card| {
                    text_line(card, report.message(), 36.0, headline_color);
                    text_line(
                        card,
                        format!(
                            "Touchdown  vx {:.2}  vy {:.2}",
                            report.touchdown.x, report.touchdown.y
                        ),
                        16.0,
                        subtitle_color(),
                    );
                    text_line(
                        card,
                        format!("Score: {}", session.score),
                        20.0,
                        title_color(),
                    );
                    spacer(card, 8.0);

                    if report.succeeded() {
                        let next = if final_level {
                            "Press [SPACE] to finish the campaign."
                        } else {
                            "Press [SPACE] to try the next level."
                        };
                        text_line(card, next, 20.0, prompt_color());
                    } else {
                        text_line(card, "Press [A] to play again.", 20.0, prompt_color());
                    }
                    text_line(card, "Press [ESC] to exit.", 20.0, prompt_color());
                });
        });
}

/// - **SPACE** after a safe landing → next level, or the end of the campaign
/// - **A** after a crash → retry the same level
/// - **ESC** → end the run
#[allow(clippy::too_many_arguments)]
pub(super) fn outcome_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    last: Res<LastLanding>,
    campaign: Res<Campaign>,
    store: Res<HighscoreStore>,
    mut session: ResMut<Session>,
    mut table: ResMut<HighscoreTable>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let succeeded = last.0.is_some_and(|report| report.succeeded());

    if succeeded && keys.just_pressed(KeyCode::Space) {
        if session.advance(campaign.len()) {
            info!("Advancing to level {}", session.level_index + 1);
            next_state.set(GameState::Playing);
        } else {
            info!("Campaign complete with {} points", session.score);
            next_state.set(finish_run(&store, &mut table, &session));
        }
    } else if !succeeded && keys.just_pressed(KeyCode::KeyA) {
        session.retry();
        next_state.set(GameState::Playing);
    } else if keys.just_pressed(KeyCode::Escape) {
        next_state.set(finish_run(&store, &mut table, &session));
    }
}

/// Where a finished run goes: name entry for a ranking score, the table for
/// any other banked score, the title screen when nothing was banked.
pub(super) fn finish_run(
    store: &HighscoreStore,
    table: &mut HighscoreTable,
    session: &Session,
) -> GameState {
    if session.landings == 0 {
        return GameState::MainMenu;
    }
    match store.load_or_init() {
        Ok(current) => {
            *table = current;
            if table.qualifies(session.score, store.capacity()) {
                GameState::NameEntry
            } else {
                GameState::Highscores
            }
        }
        Err(err) => {
            error!("Could not read highscores: {err}");
            GameState::MainMenu
        }
    }
}
