//! Selection: point clicks and direction-aware rectangles

use crate::tools::Modifiers;
use crate::view::PixelPoint;
use tilesmith_core::{Tile, Tileset};

/// Rectangular selection between two pixel points.
///
/// Both points are converted to tile indices and clamped into
/// `[0, limit-1]` per axis. The enumeration direction follows the drag:
/// all four diagonal directions cover the identical cell set, but the
/// cell nearest the drag origin comes first - selection order matters
/// because the first entry anchors later brush strokes.
///
/// Replaces the content of `selected` with unbound tile references (only
/// indices and the tileset; no map data yet).
pub fn rect_select(
    p1: PixelPoint,
    p2: PixelPoint,
    tileset: &Tileset,
    selected: &mut Vec<Tile>,
    tile_size: i32,
    limit_cols: i32,
    limit_rows: i32,
) {
    let clamp = |v: i32, limit: i32| v.max(0).min(limit - 1);

    let mut origin = (
        clamp(p1.y.div_euclid(tile_size), limit_rows),
        clamp(p1.x.div_euclid(tile_size), limit_cols),
    );
    let mut destiny = (
        clamp(p2.y.div_euclid(tile_size), limit_rows),
        clamp(p2.x.div_euclid(tile_size), limit_cols),
    );

    // swapping covers the up-left and down-right cases; the two mixed
    // diagonals are handled by flipping one loop direction below
    if destiny.0 < origin.0 || destiny.1 < origin.1 {
        std::mem::swap(&mut origin, &mut destiny);
    }

    let mut row_step = 1i32;
    let mut col_step = 1i32;
    let mut down_left = false;
    let mut up_right = false;

    // down-left drag: rows run backwards
    if destiny.0 < origin.0 && destiny.1 > origin.1 {
        row_step = -1;
        down_left = true;
    }
    // up-right drag: columns run backwards
    if destiny.0 > origin.0 && destiny.1 < origin.1 {
        col_step = -1;
        up_right = true;
    }

    selected.clear();

    let row_done = |row: i32| {
        if down_left {
            row < destiny.0
        } else {
            row > destiny.0
        }
    };
    let col_done = |col: i32| {
        if up_right {
            col < destiny.1
        } else {
            col > destiny.1
        }
    };

    let mut row = origin.0;
    while !row_done(row) {
        let mut col = origin.1;
        while !col_done(col) {
            selected.push(Tile::new(row, col, tileset));
            col += col_step;
        }
        row += row_step;
    }
}

/// Point selection with modifier handling.
///
/// - no modifier: the clicked tile becomes the whole selection
/// - shift: rectangle from the remembered shift anchor to the click
///   (shift wins when ctrl is also held)
/// - ctrl: toggle the clicked tile's membership in the selection
///
/// `shift_anchor` is the first click of the current shift interaction;
/// with no anchor (or an empty selection) the rectangle starts at (0,0).
pub fn select_tile(
    click: PixelPoint,
    tileset: &Tileset,
    selected: &mut Vec<Tile>,
    shift_anchor: Option<PixelPoint>,
    modifiers: Modifiers,
    tile_size: i32,
    limit_cols: i32,
    limit_rows: i32,
) {
    let row = click.y.div_euclid(tile_size);
    let col = click.x.div_euclid(tile_size);
    let clicked = Tile::new(row, col, tileset);

    if modifiers.shift {
        let anchor = if selected.is_empty() {
            PixelPoint::new(0, 0)
        } else {
            shift_anchor.unwrap_or(PixelPoint::new(0, 0))
        };
        rect_select(
            anchor, click, tileset, selected, tile_size, limit_cols, limit_rows,
        );
    } else if modifiers.ctrl {
        let existing = selected
            .iter()
            .position(|t| t.local_row == clicked.local_row && t.local_col == clicked.local_col);
        match existing {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(clicked),
        }
    } else {
        selected.clear();
        selected.push(clicked);
    }
}
