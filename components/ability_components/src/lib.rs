//! Ability progression data.
//!
//! Point-based categories live on an [`AbilitySheet`], level-based abilities
//! on the [`CharacterAbilities`] façade. Both are plain components; the
//! `abilities` crate drives them through events.

mod category;
mod entry;
mod ids;
mod record;
mod sheet;

pub use {category::*, entry::*, ids::*, record::*, sheet::*};

use bevy::prelude::*;

pub struct AbilityComponentsPlugin;

impl Plugin for AbilityComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AbilityRecord>()
            .register_type::<AbilitySheet>()
            .register_type::<AbilitySheetSnapshot>()
            .register_type::<AbilityEntry>()
            .register_type::<AbilityLevel>()
            .register_type::<CharacterAbilities>()
            .register_type::<PendingAbilityDefinitions>()
            .register_type::<SheetAbility>()
            .register_type::<EntryAbility>();
    }
}
