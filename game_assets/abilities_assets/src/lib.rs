use {
    ability_components::{AbilityEntry, AbilityLevel, EntryAbility},
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct AbilitiesAssetsPlugin;

impl Plugin for AbilitiesAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<AbilityDefinition>::new(&["ability.ron"]))
            .init_resource::<AbilityDefinitionMap>();
    }
}

/// Starting state of a façade ability, loaded from `.ability.ron`.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct AbilityDefinition {
    /// Which façade entry this defines (e.g. `Combat(Melee)`)
    pub ability: EntryAbility,
    /// Display name shown in UI
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Cooldown in seconds
    #[serde(default)]
    pub cooldown: f32,
    #[serde(default)]
    pub energy_cost: f32,
    /// Whether the ability is usable from the start
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default = "novice_rank")]
    pub level: u8,
}

fn novice_rank() -> u8 {
    AbilityLevel::Novice.rank()
}

impl AbilityDefinition {
    /// Builds the façade entry, clamping the level into the valid range.
    pub fn to_entry(&self) -> AbilityEntry {
        AbilityEntry {
            cooldown: self.cooldown,
            energy_cost: self.energy_cost,
            unlocked: self.unlocked,
            level: self
                .level
                .clamp(AbilityLevel::Novice.rank(), AbilityLevel::MAX.rank()),
            description: self.description.clone(),
        }
    }
}

/// Resource mapping façade abilities to their definition handles.
#[derive(Resource, Default)]
pub struct AbilityDefinitionMap {
    pub handles: HashMap<EntryAbility, Handle<AbilityDefinition>>,
}

#[cfg(test)]
mod tests {
    use {super::*, ability_components::CombatAbility};

    #[test]
    fn definition_applies_defaults() {
        let definition: AbilityDefinition = ron::from_str(
            r#"(
                ability: Combat(Melee),
                display_name: "Melee",
            )"#,
        )
        .expect("valid definition");

        assert_eq!(definition.ability, EntryAbility::Combat(CombatAbility::Melee));
        assert_eq!(definition.to_entry(), AbilityEntry::default());
    }

    #[test]
    fn entry_copies_fields_and_clamps_level() {
        let definition: AbilityDefinition = ron::from_str(
            r#"(
                ability: Support(Revive),
                display_name: "Revive",
                description: "Brings a fallen ally back",
                cooldown: 90.0,
                energy_cost: 60.0,
                unlocked: true,
                level: 9,
            )"#,
        )
        .expect("valid definition");

        let entry = definition.to_entry();
        assert_eq!(entry.cooldown, 90.0);
        assert_eq!(entry.energy_cost, 60.0);
        assert!(entry.unlocked);
        assert_eq!(entry.level, AbilityLevel::MAX.rank());
        assert_eq!(entry.description, "Brings a fallen ally back");

        let zero = AbilityDefinition { level: 0, ..definition };
        assert_eq!(zero.to_entry().level, 1);
    }
}
