use {
    abilities_assets::{AbilityDefinition, AbilityDefinitionMap},
    ability_components::{
        AbilitySheet, AbilitySheetSnapshot, CharacterAbilities, EntryAbility,
        PendingAbilityDefinitions, PointChange, SheetAbility,
    },
    ability_events::*,
    bevy::prelude::*,
};

pub fn on_increase_ability_point(
    trigger: On<IncreaseAbilityPoint>,
    mut commands: Commands,
    mut sheets: Query<&mut AbilitySheet>,
) {
    let event = trigger.event();
    apply_point_change(
        &mut commands,
        &mut sheets,
        event.entity,
        event.ability,
        PointChange::Increase,
    );
}

pub fn on_decrease_ability_point(
    trigger: On<DecreaseAbilityPoint>,
    mut commands: Commands,
    mut sheets: Query<&mut AbilitySheet>,
) {
    let event = trigger.event();
    apply_point_change(
        &mut commands,
        &mut sheets,
        event.entity,
        event.ability,
        PointChange::Decrease,
    );
}

pub fn on_reset_ability(
    trigger: On<ResetAbility>,
    mut commands: Commands,
    mut sheets: Query<&mut AbilitySheet>,
) {
    let event = trigger.event();
    apply_point_change(
        &mut commands,
        &mut sheets,
        event.entity,
        event.ability,
        PointChange::Reset,
    );
}

fn apply_point_change(
    commands: &mut Commands,
    sheets: &mut Query<&mut AbilitySheet>,
    entity: Entity,
    ability: SheetAbility,
    change: PointChange,
) {
    let Ok(mut sheet) = sheets.get_mut(entity) else {
        warn!(?entity, ?ability, "point change requested for entity without ability sheet");
        return;
    };

    let was_unlocked = sheet.record(ability).is_some_and(|record| record.unlocked);
    sheet.apply(ability, change);

    let Some(record) = sheet.record(ability) else {
        return;
    };
    debug!(?entity, ?ability, ?change, points = record.points, "applied point change");

    if record.unlocked != was_unlocked {
        commands.trigger(SheetAbilityUnlockChanged {
            entity,
            ability,
            unlocked: record.unlocked,
        });
    }
}

pub fn on_unlock_ability(
    trigger: On<UnlockAbility>,
    mut commands: Commands,
    mut characters: Query<&mut CharacterAbilities>,
    definition_map: Option<Res<AbilityDefinitionMap>>,
    definitions: Option<Res<Assets<AbilityDefinition>>>,
) {
    let event = trigger.event();
    let Ok(mut abilities) = characters.get_mut(event.entity) else {
        warn!(
            entity = ?event.entity,
            ability = ?event.ability,
            "unlock requested for entity without abilities"
        );
        return;
    };

    let was_unlocked = abilities
        .entry(event.ability)
        .is_some_and(|entry| entry.unlocked);
    abilities.unlock_ability(event.ability);

    let is_unlocked = abilities
        .entry(event.ability)
        .is_some_and(|entry| entry.unlocked);
    if is_unlocked && !was_unlocked {
        let name = display_name(
            definition_map.as_deref(),
            definitions.as_deref(),
            event.ability,
        );
        info!(entity = ?event.entity, ability = ?event.ability, name, "ability unlocked");
        commands.trigger(EntryAbilityUnlocked {
            entity: event.entity,
            ability: event.ability,
        });
    }
}

pub fn on_upgrade_ability(
    trigger: On<UpgradeAbility>,
    mut commands: Commands,
    mut characters: Query<&mut CharacterAbilities>,
    definition_map: Option<Res<AbilityDefinitionMap>>,
    definitions: Option<Res<Assets<AbilityDefinition>>>,
) {
    let event = trigger.event();
    let Ok(mut abilities) = characters.get_mut(event.entity) else {
        warn!(
            entity = ?event.entity,
            ability = ?event.ability,
            "upgrade requested for entity without abilities"
        );
        return;
    };

    let Some(before) = abilities.entry(event.ability).map(|entry| entry.level) else {
        return;
    };
    abilities.upgrade_ability(event.ability);

    let Some(entry) = abilities.entry(event.ability) else {
        return;
    };
    if entry.level > before {
        let name = display_name(
            definition_map.as_deref(),
            definitions.as_deref(),
            event.ability,
        );
        info!(
            entity = ?event.entity,
            ability = ?event.ability,
            name,
            tier = ?entry.tier(),
            "ability upgraded"
        );
        commands.trigger(EntryAbilityUpgraded {
            entity: event.entity,
            ability: event.ability,
            level: entry.level,
        });
    }
}

/// Name from the loaded definition, or empty when there is none.
pub(crate) fn display_name<'a>(
    definition_map: Option<&AbilityDefinitionMap>,
    definitions: Option<&'a Assets<AbilityDefinition>>,
    ability: EntryAbility,
) -> &'a str {
    definition_map
        .and_then(|map| map.handles.get(&ability))
        .zip(definitions)
        .and_then(|(handle, definitions)| definitions.get(handle))
        .map_or("", |definition| definition.display_name.as_str())
}

/// Fills waiting façades with one entry per loaded definition.
/// Entries that already exist are kept.
pub fn populate_ability_entries(
    mut commands: Commands,
    mut characters: Query<(Entity, &mut CharacterAbilities), With<PendingAbilityDefinitions>>,
    definition_map: Res<AbilityDefinitionMap>,
    definitions: Res<Assets<AbilityDefinition>>,
) {
    for (entity, mut abilities) in &mut characters {
        let mut added = 0;
        for (ability, handle) in &definition_map.handles {
            let Some(definition) = definitions.get(handle) else {
                warn!(?ability, "ability definition is not loaded");
                continue;
            };

            if abilities.entry(*ability).is_none() {
                trace!(?entity, name = %definition.display_name, "adding ability entry");
                abilities.insert_ability(*ability, definition.to_entry());
                added += 1;
            }
        }

        commands
            .entity(entity)
            .remove::<PendingAbilityDefinitions>();
        debug!(?entity, added, "populated ability entries");
    }
}

/// Compares changed sheets with their snapshot and reports real differences.
pub fn detect_sheet_changes(
    mut commands: Commands,
    mut sheets: Query<
        (Entity, &AbilitySheet, Option<&mut AbilitySheetSnapshot>),
        Changed<AbilitySheet>,
    >,
) {
    for (entity, sheet, snapshot) in &mut sheets {
        match snapshot {
            None => {
                commands
                    .entity(entity)
                    .insert(AbilitySheetSnapshot(sheet.clone()));
            }
            Some(mut snapshot) if snapshot.0 != *sheet => {
                snapshot.0 = sheet.clone();
                debug!(?entity, "ability sheet changed");
                commands.trigger(AbilitySheetChanged { entity });
            }
            Some(_) => {}
        }
    }
}
