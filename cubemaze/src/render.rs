//! Text picture of a maze built from its wall segments.
//!
//! Cell `(x, y)` is drawn at `(2x + 1, 2y + 1)`, walls sit between cells and corners on
//! the even/even positions.

use gridmaze::{
    array::Array2D,
    walls::{self, EmitMode, Orientation, WallSegment},
    Dims, Direction, Grid,
};

const HORIZONTAL: char = '═';
const VERTICAL: char = '║';
const EMPTY: char = ' ';

pub fn maze_render_size(size: usize) -> Dims {
    let side = (size * 2 + 1) as i32;
    Dims(side, side)
}

pub fn double_line_corner(left: bool, top: bool, right: bool, bottom: bool) -> char {
    match (left, top, right, bottom) {
        (false, false, false, false) => EMPTY,
        (false, false, false, true) => VERTICAL,
        (false, false, true, false) => HORIZONTAL,
        (false, false, true, true) => '╔',
        (false, true, false, false) => VERTICAL,
        (false, true, false, true) => VERTICAL,
        (false, true, true, false) => '╚',
        (false, true, true, true) => '╠',
        (true, false, false, false) => HORIZONTAL,
        (true, false, false, true) => '╗',
        (true, false, true, false) => HORIZONTAL,
        (true, false, true, true) => '╦',
        (true, true, false, false) => '╝',
        (true, true, false, true) => '╣',
        (true, true, true, false) => '╩',
        (true, true, true, true) => '╬',
    }
}

fn wall_slot(cell: Dims, side: Direction) -> (Dims, char) {
    let center = Dims(cell.0 * 2 + 1, cell.1 * 2 + 1);
    let slot = center + side.offset();
    let ch = if side.is_horizontal() { VERTICAL } else { HORIZONTAL };
    (slot, ch)
}

/// Draws `grid` as lines of box-drawing characters, with `player` marking one cell.
pub fn render(grid: &Grid, player: Option<(Dims, char)>) -> Vec<String> {
    let size = maze_render_size(grid.size());
    let mut canvas = Array2D::new(EMPTY, size.0 as usize, size.1 as usize);

    for segment in walls::emit(grid, EmitMode::Deduplicated) {
        let (slot, ch) = wall_slot(segment.cell, segment.side);
        canvas[slot] = ch;
    }

    for y in (0..size.1).step_by(2) {
        for x in (0..size.0).step_by(2) {
            let wall_at = |pos: Dims| canvas.get(pos).is_some_and(|&ch| ch != EMPTY);
            let corner = double_line_corner(
                wall_at(Dims(x - 1, y)),
                wall_at(Dims(x, y - 1)),
                wall_at(Dims(x + 1, y)),
                wall_at(Dims(x, y + 1)),
            );
            canvas[Dims(x, y)] = corner;
        }
    }

    if let Some((cell, ch)) = player {
        if grid.is_in_bounds(cell) {
            canvas[Dims(cell.0 * 2 + 1, cell.1 * 2 + 1)] = ch;
        }
    }

    (0..size.1)
        .map(|y| {
            (0..size.0)
                .filter_map(|x| canvas.get(Dims(x, y)).copied())
                .collect()
        })
        .collect()
}

/// One line of the `--walls` listing: center, orientation, owning cell and side.
pub fn wall_line(segment: &WallSegment) -> String {
    let orientation = match segment.orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    };
    let (x, y) = segment.center;

    format!(
        "{x:.1} {y:.1} {orientation} {},{} {}",
        segment.cell.0,
        segment.cell.1,
        segment.side.to_char()
    )
}
