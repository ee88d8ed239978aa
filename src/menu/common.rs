use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn prompt_color() -> Color {
    Color::srgb(0.85, 0.85, 0.90)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.40, 0.40, 0.50)
}
pub(super) fn success_color() -> Color {
    Color::srgb(0.45, 1.0, 0.55)
}
pub(super) fn failure_color() -> Color {
    Color::srgb(1.0, 0.35, 0.30)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.06, 0.07, 0.12)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}

/// Full-screen column centred on both axes.
pub(super) fn screen_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        flex_direction: FlexDirection::Column,
        ..default()
    }
}

/// Spawn one line of text.
pub(super) fn text_line(
    parent: &mut ChildSpawnerCommands<'_>,
    text: impl Into<String>,
    size: f32,
    color: Color,
) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    ));
}

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Despawn every entity tagged with `T` (children go with their parent).
pub(super) fn despawn_screen<T: Component>(
    mut commands: Commands,
    query: Query<Entity, With<T>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
