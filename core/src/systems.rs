use {
    ability_components::{
        AbilitySheet, CharacterAbilities, MagicalAbility, MartialAbility, PendingAbilityDefinitions,
        SheetAbilityId, SurvivalAbility,
    },
    ability_events::{IncreaseAbilityPoint, SheetAbilityUnlockChanged},
    bevy::prelude::*,
};

const STARTING_POOL: u32 = 20;

pub fn spawn_starting_character(mut commands: Commands) {
    info!("spawning starting character");

    let mut sheet = AbilitySheet::default();
    sheet.max_total_points = STARTING_POOL;
    allocate(&mut sheet, MartialAbility::Swordsmanship, 3);
    allocate(&mut sheet, MagicalAbility::Fireball, 2);
    allocate(&mut sheet, SurvivalAbility::Tracking, 1);

    let character = commands
        .spawn((
            Name::new("Wanderer"),
            sheet,
            CharacterAbilities::default(),
            PendingAbilityDefinitions,
        ))
        .id();

    commands.trigger(IncreaseAbilityPoint {
        entity: character,
        ability: MartialAbility::Swordsmanship.into(),
    });
}

fn allocate<Id: SheetAbilityId>(sheet: &mut AbilitySheet, id: Id, points: u8) {
    if let Some(record) = sheet.abilities_mut::<Id>().get_mut(&id) {
        record.allocated_points = points;
        sheet.allocated_total_points += u32::from(points);
    }
}

pub fn announce_sheet_unlocks(trigger: On<SheetAbilityUnlockChanged>) {
    let event = trigger.event();
    if event.unlocked {
        info!(entity = ?event.entity, ability = ?event.ability, "ability learned");
    } else {
        info!(entity = ?event.entity, ability = ?event.ability, "ability forgotten");
    }
}

/// The ledger never recomputes `total_points`; the game keeps it in step here.
/// Runs before sheet change detection so snapshots only ever see synced sheets.
pub fn sync_total_points(mut sheets: Query<&mut AbilitySheet, Changed<AbilitySheet>>) {
    for mut sheet in &mut sheets {
        let spent = sheet.spent_points();
        if sheet.total_points != spent {
            debug!(spent, "syncing total ability points");
            sheet.total_points = spent;
        }
    }
}
