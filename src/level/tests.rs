//! Level domain: tests for map compression, run merging, and world bounds.

use bevy::prelude::*;

use super::map::{
    KILL_MARGIN, LEVEL_MAP, LevelBounds, TILE_SIZE, TileRun, compressed_bounds, run_center,
    solid_runs, tile_center,
};

// -----------------------------------------------------------------------------
// Compressed bounds tests
// -----------------------------------------------------------------------------

#[test]
fn test_compressed_bounds_trims_empty_borders() {
    let rows = &["......", "..##..", "..#...", "......"];
    let bounds = compressed_bounds(rows).unwrap();

    assert_eq!(bounds.min_col, 2);
    assert_eq!(bounds.max_col, 3);
    assert_eq!(bounds.min_row, 1);
    assert_eq!(bounds.max_row, 2);
    assert_eq!(bounds.cols(), 2);
    assert_eq!(bounds.rows(), 2);
}

#[test]
fn test_compressed_bounds_of_empty_map() {
    assert!(compressed_bounds(&["....", "...."]).is_none());
    assert!(compressed_bounds(&[]).is_none());
}

#[test]
fn test_compressed_bounds_single_tile() {
    let bounds = compressed_bounds(&["....", ".#..", "...."]).unwrap();
    assert_eq!((bounds.min_col, bounds.max_col), (1, 1));
    assert_eq!((bounds.min_row, bounds.max_row), (1, 1));
}

// -----------------------------------------------------------------------------
// Run merging tests
// -----------------------------------------------------------------------------

#[test]
fn test_solid_runs_merge_consecutive_tiles() {
    let runs = solid_runs(&["..###.#"]);
    assert_eq!(
        runs,
        vec![
            TileRun {
                glyph: '#',
                row: 0,
                col: 2,
                len: 3
            },
            TileRun {
                glyph: '#',
                row: 0,
                col: 6,
                len: 1
            },
        ]
    );
}

#[test]
fn test_solid_runs_split_on_glyph_change() {
    let runs = solid_runs(&["|##"]);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].glyph, '|');
    assert_eq!(runs[0].len, 1);
    assert_eq!(runs[1].glyph, '#');
    assert_eq!(runs[1].len, 2);
}

#[test]
fn test_level_map_rows_are_uniform() {
    let width = LEVEL_MAP[0].len();
    for (i, row) in LEVEL_MAP.iter().enumerate() {
        assert_eq!(row.len(), width, "row {} has a different width", i);
    }
}

#[test]
fn test_level_map_has_a_floor() {
    // The bottom row is solid all the way across
    let bottom = LEVEL_MAP.last().unwrap();
    assert!(bottom.chars().all(|c| c == '#'));
}

// -----------------------------------------------------------------------------
// World bounds tests
// -----------------------------------------------------------------------------

#[test]
fn test_tile_center_mapping() {
    let origin = Vec2::new(-64.0, 0.0);
    // Bottom-left tile of a 2-row map sits half a tile in from the origin
    let center = tile_center(origin, 2, 0, 1);
    assert_eq!(center, origin + Vec2::splat(TILE_SIZE * 0.5));

    // Top row is one tile higher
    let top = tile_center(origin, 2, 0, 0);
    assert_eq!(top.y, center.y + TILE_SIZE);
}

#[test]
fn test_run_center_spans_the_run() {
    let origin = Vec2::ZERO;
    let run = TileRun {
        glyph: '#',
        row: 0,
        col: 0,
        len: 4,
    };
    let center = run_center(origin, 1, &run);
    // Four tiles wide: center is two tiles in
    assert_eq!(center.x, 2.0 * TILE_SIZE);
}

#[test]
fn test_level_bounds_from_tiles() {
    let rows = &["......", "..##..", "..##..", "......"];
    let tiles = compressed_bounds(rows).unwrap();
    let bounds = LevelBounds::from_tiles(Vec2::ZERO, rows.len(), tiles);

    // Solid block spans cols 2..=3, rows 1..=2 of a 4-row map: the world
    // origin of the block is one tile up and two tiles right.
    assert_eq!(bounds.origin, Vec2::new(2.0, 1.0) * TILE_SIZE);
    assert_eq!(bounds.size, Vec2::new(2.0, 2.0) * TILE_SIZE);
}

#[test]
fn test_kill_plane_sits_below_the_level() {
    let bounds = LevelBounds {
        origin: Vec2::new(0.0, -224.0),
        size: Vec2::new(100.0, 100.0),
    };
    assert_eq!(bounds.kill_y(), -224.0 - KILL_MARGIN);
}
