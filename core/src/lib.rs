use {
    abilities::{AbilitiesPlugin, systems::detect_sheet_changes},
    bevy::prelude::*,
    loading::LoadingManagerPlugin,
    states::GameState,
};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((AbilitiesPlugin, LoadingManagerPlugin))
            .add_systems(OnEnter(GameState::Running), systems::spawn_starting_character)
            .add_systems(
                Update,
                systems::sync_total_points.before(detect_sheet_changes),
            )
            .add_observer(systems::announce_sheet_unlocks);
    }
}
