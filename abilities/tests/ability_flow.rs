use {
    abilities::AbilitiesPlugin,
    abilities_assets::{AbilityDefinition, AbilityDefinitionMap},
    ability_components::*,
    ability_events::*,
    bevy::{prelude::*, state::app::StatesPlugin},
    states::GameState,
};

#[derive(Resource, Default)]
struct SheetChanges(usize);

#[test]
fn populated_character_progresses_through_events() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .add_plugins(AbilitiesPlugin)
        .init_state::<GameState>()
        .init_resource::<SheetChanges>()
        .add_observer(|_trigger: On<AbilitySheetChanged>, mut changes: ResMut<SheetChanges>| {
            changes.0 += 1;
        });

    // Definitions as the loading phase would leave them.
    let mut definitions = app.world_mut().resource_mut::<Assets<AbilityDefinition>>();
    let overdrive = definitions.add(AbilityDefinition {
        ability: EntryAbility::Combat(CombatAbility::Overdrive),
        display_name: "Overdrive".to_string(),
        description: "Trades energy for attack speed".to_string(),
        cooldown: 30.0,
        energy_cost: 50.0,
        unlocked: false,
        level: 1,
    });
    app.world_mut()
        .resource_mut::<AbilityDefinitionMap>()
        .handles
        .insert(EntryAbility::Combat(CombatAbility::Overdrive), overdrive);

    let mut sheet = AbilitySheet::default();
    sheet.max_total_points = 10;
    sheet.allocated_total_points = 3;
    sheet
        .abilities_mut::<StealthAbility>()
        .get_mut(&StealthAbility::Lockpicking)
        .unwrap()
        .allocated_points = 3;

    let character = app
        .world_mut()
        .spawn((
            Name::new("Wanderer"),
            sheet,
            CharacterAbilities::default(),
            PendingAbilityDefinitions,
        ))
        .id();

    // Still loading: nothing gets populated.
    app.update();
    assert!(
        app.world()
            .get::<CharacterAbilities>(character)
            .unwrap()
            .combat
            .is_empty()
    );

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Running);
    app.update();
    app.update();

    let abilities = app.world().get::<CharacterAbilities>(character).unwrap();
    assert_eq!(abilities.get(CombatAbility::Overdrive).energy_cost, 50.0);
    assert!(!abilities.is_unlocked(CombatAbility::Overdrive));

    let overdrive = EntryAbility::Combat(CombatAbility::Overdrive);
    app.world_mut().trigger(UnlockAbility {
        entity: character,
        ability: overdrive,
    });
    app.world_mut().trigger(UpgradeAbility {
        entity: character,
        ability: overdrive,
    });

    let lockpicking = SheetAbility::Stealth(StealthAbility::Lockpicking);
    for _ in 0..4 {
        app.world_mut().trigger(IncreaseAbilityPoint {
            entity: character,
            ability: lockpicking,
        });
    }
    app.update();

    let abilities = app.world().get::<CharacterAbilities>(character).unwrap();
    assert!(abilities.is_unlocked(CombatAbility::Overdrive));
    assert_eq!(abilities.get(CombatAbility::Overdrive).level, 2);

    let sheet = app.world().get::<AbilitySheet>(character).unwrap();
    let record = sheet.record(lockpicking).unwrap();
    assert_eq!(record.points, 3);
    assert!(record.unlocked);
    assert_eq!(sheet.spent_points(), 3);
    assert_eq!(app.world().resource::<SheetChanges>().0, 1);
}
