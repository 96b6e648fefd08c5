use {
    crate::{AbilityId, AbilityRecord},
    bevy::prelude::*,
    std::collections::HashMap,
};

/// Records of one ability category, keyed by the category's identifier.
///
/// A new category owns one default record per non-sentinel identifier. Every
/// mutator validates the identifier first and logs an error instead of acting
/// when it is unknown.
#[derive(Reflect, Debug, Clone)]
pub struct AbilityCategory<Id> {
    abilities: HashMap<Id, AbilityRecord>,
}

impl<Id: AbilityId> PartialEq for AbilityCategory<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.abilities == other.abilities
    }
}

impl<Id: AbilityId> Default for AbilityCategory<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: AbilityId> AbilityCategory<Id> {
    pub fn new() -> Self {
        Self {
            abilities: Id::selectable()
                .map(|id| (id, AbilityRecord::default()))
                .collect(),
        }
    }

    pub fn abilities(&self) -> &HashMap<Id, AbilityRecord> {
        &self.abilities
    }

    pub fn abilities_mut(&mut self) -> &mut HashMap<Id, AbilityRecord> {
        &mut self.abilities
    }

    /// Replaces every record at once. The new key set is taken as is.
    pub fn set_abilities(&mut self, abilities: HashMap<Id, AbilityRecord>) {
        self.abilities = abilities;
    }

    pub fn get(&self, id: Id) -> Option<&AbilityRecord> {
        self.abilities.get(&id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut AbilityRecord> {
        self.abilities.get_mut(&id)
    }

    /// Checks that `id` owns a record, logging an error when it does not.
    pub fn validate(&self, id: Id) -> bool {
        if self.abilities.is_empty() {
            error!(category = Id::CATEGORY, "ability map is empty");
            return false;
        }
        if !self.abilities.contains_key(&id) {
            error!(category = Id::CATEGORY, ?id, "ability not found in category");
            return false;
        }
        true
    }

    pub fn reset_ability(&mut self, id: Id) {
        self.modify(id, AbilityRecord::reset);
    }

    pub fn increase_ability(&mut self, id: Id) {
        self.modify(id, AbilityRecord::increase_point);
    }

    pub fn decrease_ability(&mut self, id: Id) {
        self.modify(id, AbilityRecord::decrease_point);
    }

    /// Sum of active points over every record.
    pub fn spent_points(&self) -> u32 {
        self.abilities
            .values()
            .map(|record| u32::from(record.points))
            .sum()
    }

    fn modify(&mut self, id: Id, change: impl FnOnce(&mut AbilityRecord)) {
        if !self.validate(id) {
            return;
        }
        if let Some(record) = self.abilities.get_mut(&id) {
            change(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::MagicalAbility};

    fn with_allocation(
        id: MagicalAbility,
        allocated_points: u8,
    ) -> AbilityCategory<MagicalAbility> {
        let mut category = AbilityCategory::new();
        if let Some(record) = category.get_mut(id) {
            record.allocated_points = allocated_points;
        }
        category
    }

    #[test]
    fn new_category_holds_every_selectable_id() {
        let category = AbilityCategory::<MagicalAbility>::new();

        assert_eq!(category.abilities().len(), MagicalAbility::selectable().count());
        assert!(category.get(MagicalAbility::None).is_none());
        assert!(
            category
                .abilities()
                .values()
                .all(|record| *record == AbilityRecord::default())
        );
    }

    #[test]
    fn increase_is_capped_by_allocation() {
        let mut category = with_allocation(MagicalAbility::Fireball, 3);

        for _ in 0..4 {
            category.increase_ability(MagicalAbility::Fireball);
        }

        let record = category.get(MagicalAbility::Fireball).unwrap();
        assert_eq!(record.points, 3);
        assert_eq!(record.max_points, 5);
        assert!(record.unlocked);
        assert_eq!(category.spent_points(), 3);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut category = with_allocation(MagicalAbility::Fireball, 3);
        let before = category.clone();

        assert!(!category.validate(MagicalAbility::None));
        category.increase_ability(MagicalAbility::None);
        category.decrease_ability(MagicalAbility::None);
        category.reset_ability(MagicalAbility::None);
        assert_eq!(category, before);

        // ids dropped by a bulk replacement are unknown as well
        let mut replaced = HashMap::new();
        replaced.insert(MagicalAbility::Teleport, AbilityRecord::default());
        category.set_abilities(replaced);
        let before = category.clone();

        assert!(!category.validate(MagicalAbility::Fireball));
        category.increase_ability(MagicalAbility::Fireball);
        assert_eq!(category, before);
    }

    #[test]
    fn empty_map_fails_validation() {
        let mut category = AbilityCategory::<MagicalAbility>::new();
        category.set_abilities(HashMap::new());

        assert!(!category.validate(MagicalAbility::Fireball));
        category.increase_ability(MagicalAbility::Fireball);
        assert!(category.abilities().is_empty());
    }

    #[test]
    fn reset_and_decrease_delegate_to_record() {
        let mut category = with_allocation(MagicalAbility::FrostNova, 2);
        category.increase_ability(MagicalAbility::FrostNova);
        category.increase_ability(MagicalAbility::FrostNova);

        category.decrease_ability(MagicalAbility::FrostNova);
        assert_eq!(category.get(MagicalAbility::FrostNova).unwrap().points, 1);

        category.reset_ability(MagicalAbility::FrostNova);
        assert_eq!(
            category.get(MagicalAbility::FrostNova),
            Some(&AbilityRecord::default())
        );
    }

    #[test]
    fn equality_tracks_record_contents() {
        let mut left = AbilityCategory::<MagicalAbility>::new();
        let right = AbilityCategory::<MagicalAbility>::new();
        assert_eq!(left, right);

        left.get_mut(MagicalAbility::ShadowBolt).unwrap().allocated_points = 1;
        assert_ne!(left, right);

        left.get_mut(MagicalAbility::ShadowBolt).unwrap().allocated_points = 0;
        assert_eq!(left, right);
    }
}
