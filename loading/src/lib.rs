mod resources;

use {
    crate::resources::AbilitiesFolderHandle,
    abilities_assets::{AbilityDefinition, AbilityDefinitionMap},
    ability_components::EntryAbility,
    bevy::{asset::LoadedFolder, prelude::*},
    states::GameState,
};

pub struct LoadingManagerPlugin;

impl Plugin for LoadingManagerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_ability_definitions).add_systems(
            Update,
            check_assets_loaded.run_if(in_state(GameState::Loading)),
        );
    }
}

fn load_ability_definitions(mut cmd: Commands, asset_server: Res<AssetServer>) {
    info!("started loading ability definitions");
    let handle = asset_server.load_folder("abilities");
    cmd.insert_resource(AbilitiesFolderHandle(handle));
}

fn check_assets_loaded(
    mut next_state: ResMut<NextState<GameState>>,
    mut definition_map: ResMut<AbilityDefinitionMap>,
    asset_server: Res<AssetServer>,
    abilities_folder: Res<AbilitiesFolderHandle>,
    folders: Res<Assets<LoadedFolder>>,
    definitions: Res<Assets<AbilityDefinition>>,
) {
    if !asset_server.is_loaded_with_dependencies(abilities_folder.0.id()) {
        return;
    }

    let Some(folder) = folders.get(abilities_folder.0.id()) else {
        error!("abilities folder reported loaded but is missing");
        return;
    };

    for untyped_handle in folder.handles.iter().cloned() {
        let path = asset_server.get_path(untyped_handle.id());
        let Ok(handle) = untyped_handle.try_typed::<AbilityDefinition>() else {
            warn!(?path, "skipping file that is not an ability definition");
            continue;
        };
        let Some(definition) = definitions.get(&handle) else {
            continue;
        };

        if register_definition(&mut definition_map, definition.ability, handle) {
            debug!(?path, ability = ?definition.ability, "registered ability definition");
        } else {
            warn!(?path, ability = ?definition.ability, "duplicate ability definition ignored");
        }
    }

    info!(
        count = definition_map.handles.len(),
        "ability definitions loaded, entering Running state"
    );
    next_state.set(GameState::Running);
}

/// First definition of an ability wins; returns whether `handle` was kept.
fn register_definition(
    definition_map: &mut AbilityDefinitionMap,
    ability: EntryAbility,
    handle: Handle<AbilityDefinition>,
) -> bool {
    if definition_map.handles.contains_key(&ability) {
        return false;
    }
    definition_map.handles.insert(ability, handle);
    true
}
