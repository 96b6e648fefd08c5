use {
    crate::{
        AbilityId, CombatAbility, ControlAbility, EntryAbility, MovementAbility, SupportAbility,
    },
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

/// Named levels of a façade ability. The discriminant is the level value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Reflect,
    Serialize,
    Deserialize,
    EnumIter,
)]
pub enum AbilityLevel {
    #[default]
    Novice = 1,
    Apprentice = 2,
    Adept = 3,
    Expert = 4,
    Master = 5,
}

impl AbilityLevel {
    pub const MAX: Self = Self::Master;

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::iter().find(|level| level.rank() == rank)
    }
}

/// Cost, cooldown and progression of a combat/support/movement/control ability.
#[derive(Reflect, Debug, Clone, PartialEq)]
#[reflect(Default, PartialEq)]
pub struct AbilityEntry {
    /// Seconds between uses.
    pub cooldown: f32,
    pub energy_cost: f32,
    pub unlocked: bool,
    /// Between 1 and [`AbilityLevel::MAX`].
    pub level: u8,
    pub description: String,
}

impl Default for AbilityEntry {
    fn default() -> Self {
        Self {
            cooldown: 0.0,
            energy_cost: 0.0,
            unlocked: false,
            level: AbilityLevel::Novice.rank(),
            description: String::new(),
        }
    }
}

impl AbilityEntry {
    pub fn tier(&self) -> Option<AbilityLevel> {
        AbilityLevel::from_rank(self.level)
    }

    fn unlock(&mut self) {
        self.unlocked = true;
    }

    fn upgrade(&mut self) {
        if self.unlocked && self.level < AbilityLevel::MAX.rank() {
            self.level += 1;
        }
    }
}

/// Ability façade of a character.
///
/// The maps start empty and are filled by an initializer (see
/// [`PendingAbilityDefinitions`]). Every operation tolerates identifiers that
/// have no entry: reads fall back to defaults and writes do nothing.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default)]
pub struct CharacterAbilities {
    pub combat: HashMap<CombatAbility, AbilityEntry>,
    pub support: HashMap<SupportAbility, AbilityEntry>,
    pub movement: HashMap<MovementAbility, AbilityEntry>,
    pub control: HashMap<ControlAbility, AbilityEntry>,
}

/// Marker: the entity's [`CharacterAbilities`] still waits for its entries.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct PendingAbilityDefinitions;

/// Identifier of a category stored on [`CharacterAbilities`].
pub trait EntryAbilityId: AbilityId + Into<EntryAbility> {
    fn entries(abilities: &CharacterAbilities) -> &HashMap<Self, AbilityEntry>;
    fn entries_mut(abilities: &mut CharacterAbilities) -> &mut HashMap<Self, AbilityEntry>;
}

impl EntryAbilityId for CombatAbility {
    fn entries(abilities: &CharacterAbilities) -> &HashMap<Self, AbilityEntry> {
        &abilities.combat
    }

    fn entries_mut(abilities: &mut CharacterAbilities) -> &mut HashMap<Self, AbilityEntry> {
        &mut abilities.combat
    }
}

impl EntryAbilityId for SupportAbility {
    fn entries(abilities: &CharacterAbilities) -> &HashMap<Self, AbilityEntry> {
        &abilities.support
    }

    fn entries_mut(abilities: &mut CharacterAbilities) -> &mut HashMap<Self, AbilityEntry> {
        &mut abilities.support
    }
}

impl EntryAbilityId for MovementAbility {
    fn entries(abilities: &CharacterAbilities) -> &HashMap<Self, AbilityEntry> {
        &abilities.movement
    }

    fn entries_mut(abilities: &mut CharacterAbilities) -> &mut HashMap<Self, AbilityEntry> {
        &mut abilities.movement
    }
}

impl EntryAbilityId for ControlAbility {
    fn entries(abilities: &CharacterAbilities) -> &HashMap<Self, AbilityEntry> {
        &abilities.control
    }

    fn entries_mut(abilities: &mut CharacterAbilities) -> &mut HashMap<Self, AbilityEntry> {
        &mut abilities.control
    }
}

impl CharacterAbilities {
    pub fn entries<Id: EntryAbilityId>(&self) -> &HashMap<Id, AbilityEntry> {
        Id::entries(self)
    }

    pub fn entries_mut<Id: EntryAbilityId>(&mut self) -> &mut HashMap<Id, AbilityEntry> {
        Id::entries_mut(self)
    }

    /// Stored entry, or a default one when `id` has none.
    pub fn get<Id: EntryAbilityId>(&self, id: Id) -> AbilityEntry {
        self.entry(id.into()).cloned().unwrap_or_default()
    }

    pub fn is_unlocked<Id: EntryAbilityId>(&self, id: Id) -> bool {
        self.entry(id.into()).is_some_and(|entry| entry.unlocked)
    }

    pub fn unlock<Id: EntryAbilityId>(&mut self, id: Id) {
        self.unlock_ability(id.into());
    }

    /// Raises the level of an unlocked entry by one, up to [`AbilityLevel::MAX`].
    pub fn upgrade<Id: EntryAbilityId>(&mut self, id: Id) {
        self.upgrade_ability(id.into());
    }

    pub fn insert<Id: EntryAbilityId>(&mut self, id: Id, entry: AbilityEntry) {
        self.insert_ability(id.into(), entry);
    }

    pub fn entry(&self, ability: EntryAbility) -> Option<&AbilityEntry> {
        match ability {
            EntryAbility::Combat(id) => self.combat.get(&id),
            EntryAbility::Support(id) => self.support.get(&id),
            EntryAbility::Movement(id) => self.movement.get(&id),
            EntryAbility::Control(id) => self.control.get(&id),
        }
    }

    pub fn unlock_ability(&mut self, ability: EntryAbility) {
        if let Some(entry) = self.entry_mut(ability) {
            entry.unlock();
        }
    }

    pub fn upgrade_ability(&mut self, ability: EntryAbility) {
        if let Some(entry) = self.entry_mut(ability) {
            entry.upgrade();
        }
    }

    pub fn insert_ability(&mut self, ability: EntryAbility, entry: AbilityEntry) {
        match ability {
            EntryAbility::Combat(id) => self.combat.insert(id, entry),
            EntryAbility::Support(id) => self.support.insert(id, entry),
            EntryAbility::Movement(id) => self.movement.insert(id, entry),
            EntryAbility::Control(id) => self.control.insert(id, entry),
        };
    }

    fn entry_mut(&mut self, ability: EntryAbility) -> Option<&mut AbilityEntry> {
        match ability {
            EntryAbility::Combat(id) => self.combat.get_mut(&id),
            EntryAbility::Support(id) => self.support.get_mut(&id),
            EntryAbility::Movement(id) => self.movement.get_mut(&id),
            EntryAbility::Control(id) => self.control.get_mut(&id),
        }
    }
}
