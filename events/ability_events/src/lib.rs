use {
    ability_components::{EntryAbility, SheetAbility},
    bevy::prelude::*,
};

// --- Requests ---

/// Spend one point on a sheet ability of the target character.
#[derive(EntityEvent, Debug, Clone)]
pub struct IncreaseAbilityPoint {
    #[event_target]
    pub entity: Entity,
    pub ability: SheetAbility,
}

/// Take one point back from a sheet ability of the target character.
#[derive(EntityEvent, Debug, Clone)]
pub struct DecreaseAbilityPoint {
    #[event_target]
    pub entity: Entity,
    pub ability: SheetAbility,
}

/// Return a sheet ability to its locked default.
#[derive(EntityEvent, Debug, Clone)]
pub struct ResetAbility {
    #[event_target]
    pub entity: Entity,
    pub ability: SheetAbility,
}

#[derive(EntityEvent, Debug, Clone)]
pub struct UnlockAbility {
    #[event_target]
    pub entity: Entity,
    pub ability: EntryAbility,
}

#[derive(EntityEvent, Debug, Clone)]
pub struct UpgradeAbility {
    #[event_target]
    pub entity: Entity,
    pub ability: EntryAbility,
}

// --- Notifications ---

/// A sheet ability gained its first point or lost its last one.
#[derive(EntityEvent, Debug, Clone)]
pub struct SheetAbilityUnlockChanged {
    #[event_target]
    pub entity: Entity,
    pub ability: SheetAbility,
    pub unlocked: bool,
}

#[derive(EntityEvent, Debug, Clone)]
pub struct EntryAbilityUnlocked {
    #[event_target]
    pub entity: Entity,
    pub ability: EntryAbility,
}

#[derive(EntityEvent, Debug, Clone)]
pub struct EntryAbilityUpgraded {
    #[event_target]
    pub entity: Entity,
    pub ability: EntryAbility,
    pub level: u8,
}

/// The character's sheet no longer matches its last snapshot.
#[derive(EntityEvent, Debug, Clone)]
pub struct AbilitySheetChanged {
    #[event_target]
    pub entity: Entity,
}
