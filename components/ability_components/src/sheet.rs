use {
    crate::{
        AbilityCategory, AbilityId, AbilityRecord, CraftingAbility, MagicalAbility, MartialAbility,
        SheetAbility, StealthAbility, SurvivalAbility,
    },
    bevy::prelude::*,
    std::collections::HashMap,
};

/// Point-based abilities of a character.
///
/// The summary counters are plain values: nothing here recomputes them from
/// the categories, keeping them consistent is up to whoever writes them.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component, Default, PartialEq)]
pub struct AbilitySheet {
    martial: AbilityCategory<MartialAbility>,
    magical: AbilityCategory<MagicalAbility>,
    crafting: AbilityCategory<CraftingAbility>,
    survival: AbilityCategory<SurvivalAbility>,
    stealth: AbilityCategory<StealthAbility>,
    /// Active points across all categories.
    pub total_points: u32,
    /// Largest pool the character may allocate from.
    pub max_total_points: u32,
    /// Points handed out from the pool to individual abilities.
    pub allocated_total_points: u32,
}

/// Identifier of a category stored on the [`AbilitySheet`].
pub trait SheetAbilityId: AbilityId + Into<SheetAbility> {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self>;
    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self>;
}

impl SheetAbilityId for MartialAbility {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self> {
        &sheet.martial
    }

    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self> {
        &mut sheet.martial
    }
}

impl SheetAbilityId for MagicalAbility {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self> {
        &sheet.magical
    }

    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self> {
        &mut sheet.magical
    }
}

impl SheetAbilityId for CraftingAbility {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self> {
        &sheet.crafting
    }

    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self> {
        &mut sheet.crafting
    }
}

impl SheetAbilityId for SurvivalAbility {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self> {
        &sheet.survival
    }

    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self> {
        &mut sheet.survival
    }
}

impl SheetAbilityId for StealthAbility {
    fn category(sheet: &AbilitySheet) -> &AbilityCategory<Self> {
        &sheet.stealth
    }

    fn category_mut(sheet: &mut AbilitySheet) -> &mut AbilityCategory<Self> {
        &mut sheet.stealth
    }
}

/// Point operation applied through [`AbilitySheet::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum PointChange {
    Increase,
    Decrease,
    Reset,
}

impl AbilitySheet {
    pub fn category<Id: SheetAbilityId>(&self) -> &AbilityCategory<Id> {
        Id::category(self)
    }

    pub fn category_mut<Id: SheetAbilityId>(&mut self) -> &mut AbilityCategory<Id> {
        Id::category_mut(self)
    }

    pub fn abilities<Id: SheetAbilityId>(&self) -> &HashMap<Id, AbilityRecord> {
        self.category::<Id>().abilities()
    }

    pub fn abilities_mut<Id: SheetAbilityId>(&mut self) -> &mut HashMap<Id, AbilityRecord> {
        self.category_mut::<Id>().abilities_mut()
    }

    pub fn set_abilities<Id: SheetAbilityId>(&mut self, abilities: HashMap<Id, AbilityRecord>) {
        self.category_mut::<Id>().set_abilities(abilities);
    }

    /// Adds a point to `id` in whichever category owns it.
    pub fn upgrade_ability<Id: SheetAbilityId>(&mut self, id: Id) {
        self.category_mut::<Id>().increase_ability(id);
    }

    pub fn downgrade_ability<Id: SheetAbilityId>(&mut self, id: Id) {
        self.category_mut::<Id>().decrease_ability(id);
    }

    pub fn reset_ability<Id: SheetAbilityId>(&mut self, id: Id) {
        self.category_mut::<Id>().reset_ability(id);
    }

    pub fn record(&self, ability: SheetAbility) -> Option<&AbilityRecord> {
        match ability {
            SheetAbility::Martial(id) => self.martial.get(id),
            SheetAbility::Magical(id) => self.magical.get(id),
            SheetAbility::Crafting(id) => self.crafting.get(id),
            SheetAbility::Survival(id) => self.survival.get(id),
            SheetAbility::Stealth(id) => self.stealth.get(id),
        }
    }

    pub fn apply(&mut self, ability: SheetAbility, change: PointChange) {
        match ability {
            SheetAbility::Martial(id) => self.apply_to(id, change),
            SheetAbility::Magical(id) => self.apply_to(id, change),
            SheetAbility::Crafting(id) => self.apply_to(id, change),
            SheetAbility::Survival(id) => self.apply_to(id, change),
            SheetAbility::Stealth(id) => self.apply_to(id, change),
        }
    }

    /// Active points summed over the categories, independent of `total_points`.
    pub fn spent_points(&self) -> u32 {
        self.martial.spent_points()
            + self.magical.spent_points()
            + self.crafting.spent_points()
            + self.survival.spent_points()
            + self.stealth.spent_points()
    }

    fn apply_to<Id: SheetAbilityId>(&mut self, id: Id, change: PointChange) {
        match change {
            PointChange::Increase => self.upgrade_ability(id),
            PointChange::Decrease => self.downgrade_ability(id),
            PointChange::Reset => self.reset_ability(id),
        }
    }
}

/// Last sheet value seen by change detection.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
pub struct AbilitySheetSnapshot(pub AbilitySheet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_owning_category() {
        let mut sheet = AbilitySheet::default();
        sheet
            .abilities_mut::<SurvivalAbility>()
            .get_mut(&SurvivalAbility::Fishing)
            .unwrap()
            .allocated_points = 2;

        sheet.upgrade_ability(SurvivalAbility::Fishing);
        sheet.apply(SurvivalAbility::Fishing.into(), PointChange::Increase);
        sheet.apply(SurvivalAbility::Fishing.into(), PointChange::Increase);

        let record = sheet.record(SurvivalAbility::Fishing.into()).unwrap();
        assert_eq!(record.points, 2);
        assert!(record.unlocked);
        assert_eq!(sheet.spent_points(), 2);

        sheet.downgrade_ability(SurvivalAbility::Fishing);
        assert_eq!(sheet.abilities::<SurvivalAbility>()[&SurvivalAbility::Fishing].points, 1);

        sheet.apply(SurvivalAbility::Fishing.into(), PointChange::Reset);
        assert_eq!(
            sheet.record(SurvivalAbility::Fishing.into()),
            Some(&AbilityRecord::default())
        );
        // other categories are untouched
        assert_eq!(sheet.category::<StealthAbility>(), &AbilityCategory::new());
    }

    #[test]
    fn counters_are_not_recomputed() {
        let mut sheet = AbilitySheet::default();
        sheet.total_points = 12;
        sheet.max_total_points = 30;
        sheet.allocated_total_points = 7;

        assert_eq!(sheet.spent_points(), 0);
        assert_eq!(sheet.total_points, 12);
        assert_eq!(sheet.allocated_total_points, 7);
    }

    #[test]
    fn equality_covers_categories_and_counters() {
        let mut left = AbilitySheet::default();
        let right = AbilitySheet::default();
        assert_eq!(left, right);

        left.max_total_points = 1;
        assert_ne!(left, right);
        left.max_total_points = 0;
        assert_eq!(left, right);

        let mut replaced = left.abilities::<MartialAbility>().clone();
        replaced.remove(&MartialAbility::Berserk);
        left.set_abilities(replaced);
        assert_ne!(left, right);
    }
}
