use bevy::prelude::*;

/// Point ceiling of a freshly reset record.
pub const DEFAULT_MAX_POINTS: u8 = 5;

/// Progression of a single point-based ability.
///
/// The mutators keep `points` within `min(max_points, allocated_points)` and
/// refresh `unlocked` so it mirrors `points > 0`. Fields stay public so
/// inspectors can edit them directly.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Default, PartialEq)]
pub struct AbilityRecord {
    pub unlocked: bool,
    /// Currently active points.
    pub points: u8,
    pub max_points: u8,
    /// Points reserved from the character's shared pool.
    pub allocated_points: u8,
}

impl Default for AbilityRecord {
    fn default() -> Self {
        Self {
            unlocked: false,
            points: 0,
            max_points: DEFAULT_MAX_POINTS,
            allocated_points: 0,
        }
    }
}

impl AbilityRecord {
    /// Locks the ability and clears its points and allocation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adds one point if both ceilings allow it, silently does nothing otherwise.
    pub fn increase_point(&mut self) {
        if self.points < self.max_points && self.points < self.allocated_points {
            self.points += 1;
            self.refresh_unlocked();
        }
    }

    pub fn decrease_point(&mut self) {
        if self.points > 0 {
            self.points -= 1;
            self.refresh_unlocked();
        }
    }

    /// Highest point count reachable through [`Self::increase_point`].
    pub fn point_cap(&self) -> u8 {
        self.max_points.min(self.allocated_points)
    }

    fn refresh_unlocked(&mut self) {
        self.unlocked = self.points > 0;
    }
}
