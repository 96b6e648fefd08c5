//! Ability identifiers, one enum per category.
//!
//! Every enum reserves its `Default` variant (`None`) as the "nothing selected"
//! sentinel. Sentinels are valid inputs everywhere but never own a record.

use {
    bevy::prelude::*,
    derive_more::From,
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, hash::Hash},
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

/// Identifier enumeration of one ability category.
pub trait AbilityId:
    Copy + Eq + Hash + Debug + Default + IntoEnumIterator + Send + Sync + 'static
{
    /// Category name used in diagnostics.
    const CATEGORY: &'static str;

    fn is_sentinel(&self) -> bool {
        *self == Self::default()
    }

    /// Every identifier of the category that owns a record.
    fn selectable() -> impl Iterator<Item = Self> {
        Self::iter().filter(|id| !id.is_sentinel())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum MartialAbility {
    #[default]
    None,
    Swordsmanship,
    Archery,
    Blocking,
    Parrying,
    DualWielding,
    Unarmed,
    Polearms,
    ShieldBash,
    Berserk,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum MagicalAbility {
    #[default]
    None,
    Fireball,
    IceShield,
    LightningStrike,
    ArcaneBlast,
    HealingWave,
    Teleport,
    ManaSurge,
    FrostNova,
    Earthquake,
    ShadowBolt,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum CraftingAbility {
    #[default]
    None,
    Blacksmithing,
    Alchemy,
    Carpentry,
    Cooking,
    Tailoring,
    Leatherworking,
    Jewelcrafting,
    Engineering,
    Enchanting,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum SurvivalAbility {
    #[default]
    None,
    Tracking,
    Foraging,
    ShelterBuilding,
    FireStarting,
    Hunting,
    Fishing,
    FirstAid,
    Navigation,
    WaterPurification,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum StealthAbility {
    #[default]
    None,
    Sneak,
    Pickpocket,
    Lockpicking,
    Backstab,
    Camouflage,
    SilentMovement,
    Evasion,
    Disguise,
    TrapSetting,
}

/// Combat-focused abilities
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum CombatAbility {
    #[default]
    None,
    Melee,
    Ranged,
    Charge,
    Overdrive,
}

/// Support and utility abilities
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum SupportAbility {
    #[default]
    None,
    Heal,
    Shield,
    Cleanse,
    Revive,
}

/// Movement and mobility abilities
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum MovementAbility {
    #[default]
    None,
    Dash,
    Teleport,
    WallRun,
    Grapple,
}

/// Crowd control and elemental abilities
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize, EnumIter,
)]
#[reflect(Default, Hash, PartialEq)]
pub enum ControlAbility {
    #[default]
    None,
    Stun,
    Freeze,
    Burn,
    Slow,
}

impl AbilityId for MartialAbility {
    const CATEGORY: &'static str = "martial";
}

impl AbilityId for MagicalAbility {
    const CATEGORY: &'static str = "magical";
}

impl AbilityId for CraftingAbility {
    const CATEGORY: &'static str = "crafting";
}

impl AbilityId for SurvivalAbility {
    const CATEGORY: &'static str = "survival";
}

impl AbilityId for StealthAbility {
    const CATEGORY: &'static str = "stealth";
}

impl AbilityId for CombatAbility {
    const CATEGORY: &'static str = "combat";
}

impl AbilityId for SupportAbility {
    const CATEGORY: &'static str = "support";
}

impl AbilityId for MovementAbility {
    const CATEGORY: &'static str = "movement";
}

impl AbilityId for ControlAbility {
    const CATEGORY: &'static str = "control";
}

/// Any ability tracked on an [`AbilitySheet`](crate::AbilitySheet).
///
/// Written as `Magical(Fireball)` in RON files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize, From)]
#[reflect(Hash, PartialEq)]
pub enum SheetAbility {
    Martial(MartialAbility),
    Magical(MagicalAbility),
    Crafting(CraftingAbility),
    Survival(SurvivalAbility),
    Stealth(StealthAbility),
}

/// Any ability tracked on [`CharacterAbilities`](crate::CharacterAbilities).
///
/// Written as `Combat(Melee)` in RON files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize, From)]
#[reflect(Hash, PartialEq)]
pub enum EntryAbility {
    Combat(CombatAbility),
    Support(SupportAbility),
    Movement(MovementAbility),
    Control(ControlAbility),
}
