//! Collider tool: toggle physical/trigger markers per cell

use crate::view::GridPoint;
use tilesmith_core::{Collider, TileMap};

/// Toggle the collider at `target` on a copy of `current`.
///
/// An existing collider is removed regardless of kind; an empty cell gets
/// a physical or trigger collider per the flag. Colliders live on their
/// own grid and never touch the tile layers. Out of bounds is a no-op.
pub fn toggle_collider(current: &TileMap, target: GridPoint, trigger: bool) -> Option<TileMap> {
    if !current.in_bounds(target.row, target.col) {
        return None;
    }
    let (row, col) = (target.row as u32, target.col as u32);

    let mut map = current.clone();
    let next = if map.collider(row, col).is_some() {
        None
    } else if trigger {
        Some(Collider::trigger(row, col))
    } else {
        Some(Collider::physical(row, col))
    };
    map.set_collider(row, col, next);
    Some(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_places_and_removes() {
        let map = TileMap::new(4, 4);
        let with = toggle_collider(&map, GridPoint::new(1, 2), false).unwrap();
        let collider = with.collider(1, 2).unwrap();
        assert_eq!(collider.id, 1);
        assert!(!collider.is_trigger);

        let without = toggle_collider(&with, GridPoint::new(1, 2), false).unwrap();
        assert!(without.collider(1, 2).is_none());
    }

    #[test]
    fn test_trigger_flag() {
        let map = TileMap::new(4, 4);
        let with = toggle_collider(&map, GridPoint::new(0, 0), true).unwrap();
        let collider = with.collider(0, 0).unwrap();
        assert_eq!(collider.id, 2);
        assert!(collider.is_trigger);
    }

    #[test]
    fn test_toggle_removes_regardless_of_kind() {
        let map = TileMap::new(4, 4);
        let with = toggle_collider(&map, GridPoint::new(0, 0), true).unwrap();
        // toggling with the other flag still removes
        let without = toggle_collider(&with, GridPoint::new(0, 0), false).unwrap();
        assert!(without.collider(0, 0).is_none());
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let map = TileMap::new(4, 4);
        assert!(toggle_collider(&map, GridPoint::new(-1, 0), false).is_none());
        assert!(toggle_collider(&map, GridPoint::new(0, 9), false).is_none());
    }
}
