pub mod systems;


use {
    abilities_assets::AbilitiesAssetsPlugin, ability_components::AbilityComponentsPlugin,
    bevy::prelude::*, states::GameState,
};

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((AbilityComponentsPlugin, AbilitiesAssetsPlugin))
            .add_systems(
                Update,
                (
                    systems::populate_ability_entries.run_if(in_state(GameState::Running)),
                    systems::detect_sheet_changes,
                ),
            )
            .add_observer(systems::on_increase_ability_point)
            .add_observer(systems::on_decrease_ability_point)
            .add_observer(systems::on_reset_ability)
            .add_observer(systems::on_unlock_ability)
            .add_observer(systems::on_upgrade_ability);
    }
}
