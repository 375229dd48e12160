//! Level domain: tile map data and bounds math.

use bevy::prelude::*;

pub const TILE_SIZE: f32 = 32.0;

/// How far below the level a body may fall before the pit claims it.
pub const KILL_MARGIN: f32 = 200.0;

pub(crate) const WALL_GLYPH: char = '|';

/// The test level. `#` is ground, `|` is wall, `.` is air. Row 0 is the top
/// line of the map.
pub(crate) const LEVEL_MAP: &[&str] = &[
    "|...........................................................|",
    "|...........................................................|",
    "|...........................................................|",
    "|..........######...........................................|",
    "|...........................................................|",
    "|......................................########.............|",
    "|...........................................................|",
    "|......................#######..............................|",
    "|...........................................................|",
    "|....######.................................................|",
    "|...........................................................|",
    "#############################################################",
];

/// Tile-space bounding box of the solid content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub min_col: usize,
    pub min_row: usize,
    pub max_col: usize,
    pub max_row: usize,
}

impl TileBounds {
    pub fn cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

/// Bounding box of the solid tiles with empty border rows and columns
/// trimmed away, like a tilemap that compresses its bounds before use.
/// Returns None for a map with no solid tiles at all.
pub fn compressed_bounds(rows: &[&str]) -> Option<TileBounds> {
    let mut bounds: Option<TileBounds> = None;

    for (row, line) in rows.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            if glyph == '.' {
                continue;
            }
            bounds = Some(match bounds {
                None => TileBounds {
                    min_col: col,
                    min_row: row,
                    max_col: col,
                    max_row: row,
                },
                Some(b) => TileBounds {
                    min_col: b.min_col.min(col),
                    min_row: b.min_row.min(row),
                    max_col: b.max_col.max(col),
                    max_row: b.max_row.max(row),
                },
            });
        }
    }

    bounds
}

/// A horizontal run of identical solid glyphs. Each run becomes one static
/// collider instead of one per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRun {
    pub glyph: char,
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

pub fn solid_runs(rows: &[&str]) -> Vec<TileRun> {
    let mut runs = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        let mut open: Option<TileRun> = None;
        for (col, glyph) in line.chars().enumerate() {
            match open {
                Some(ref mut run) if glyph != '.' && run.glyph == glyph => run.len += 1,
                _ => {
                    if let Some(run) = open.take() {
                        runs.push(run);
                    }
                    if glyph != '.' {
                        open = Some(TileRun {
                            glyph,
                            row,
                            col,
                            len: 1,
                        });
                    }
                }
            }
        }
        if let Some(run) = open {
            runs.push(run);
        }
    }

    runs
}

/// World-space footprint of the level's solid content, bottom-left origin.
/// The camera derives its clamp rectangle from this.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl LevelBounds {
    pub fn from_tiles(map_origin: Vec2, total_rows: usize, tiles: TileBounds) -> Self {
        let origin = map_origin
            + Vec2::new(
                tiles.min_col as f32,
                (total_rows - 1 - tiles.max_row) as f32,
            ) * TILE_SIZE;
        let size = Vec2::new(tiles.cols() as f32, tiles.rows() as f32) * TILE_SIZE;
        Self { origin, size }
    }

    /// Bodies below this height are lost to the pit.
    pub fn kill_y(&self) -> f32 {
        self.origin.y - KILL_MARGIN
    }
}

/// World-space center of the tile at (col, row); row 0 is the map's top line.
pub fn tile_center(map_origin: Vec2, total_rows: usize, col: usize, row: usize) -> Vec2 {
    map_origin
        + Vec2::new(
            col as f32 + 0.5,
            (total_rows - 1 - row) as f32 + 0.5,
        ) * TILE_SIZE
}

/// World-space center of a run of tiles.
pub fn run_center(map_origin: Vec2, total_rows: usize, run: &TileRun) -> Vec2 {
    let first = tile_center(map_origin, total_rows, run.col, run.row);
    let last = tile_center(map_origin, total_rows, run.col + run.len - 1, run.row);
    (first + last) * 0.5
}
