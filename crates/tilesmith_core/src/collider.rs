//! Collision markers attached to map cells

use serde::{Deserialize, Serialize};

/// Collider id for a physical (blocking) collider.
pub const COLLIDER_PHYSICAL: u32 = 1;
/// Collider id for a trigger collider. Ids above this are also triggers.
pub const COLLIDER_TRIGGER: u32 = 2;

/// A physical or trigger marker at one map cell.
///
/// Colliders form a single grid orthogonal to the tile layers; they never
/// interact with layer allocation or compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collider {
    /// Collider kind id (1 = physical, 2 or more = trigger)
    pub id: u32,
    /// Map row of the collider
    pub row: u32,
    /// Map column of the collider
    pub col: u32,
    /// True for trigger colliders
    pub is_trigger: bool,
}

impl Collider {
    /// Create a physical collider at the given cell.
    pub fn physical(row: u32, col: u32) -> Self {
        Self {
            id: COLLIDER_PHYSICAL,
            row,
            col,
            is_trigger: false,
        }
    }

    /// Create a trigger collider at the given cell.
    pub fn trigger(row: u32, col: u32) -> Self {
        Self {
            id: COLLIDER_TRIGGER,
            row,
            col,
            is_trigger: true,
        }
    }

    /// Create a collider from a serialized id, if the id marks one.
    pub fn from_id(id: u32, row: u32, col: u32) -> Option<Self> {
        match id {
            0 => None,
            COLLIDER_PHYSICAL => Some(Self::physical(row, col)),
            _ => Some(Self {
                id,
                row,
                col,
                is_trigger: true,
            }),
        }
    }
}
