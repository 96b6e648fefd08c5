//! Define common resources used for asset loading

use bevy::{asset::LoadedFolder, prelude::*};

#[derive(Debug, Resource)]
pub(super) struct AbilitiesFolderHandle(pub Handle<LoadedFolder>);
