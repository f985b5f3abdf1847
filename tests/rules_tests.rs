//! Rules integration tests.
//!
//! The rule functions are used directly on a grid here, without a session.

use color_lines::{
    detect_runs, find_path, reachable_cells, spawn, Color, Coord, GameRng, Grid, SpawnQueue,
};

fn place(grid: &mut Grid, coords: impl IntoIterator<Item = (usize, usize)>, color: u8) {
    for (r, c) in coords {
        grid.set(Coord::new(r, c), Some(Color::new(color))).unwrap();
    }
}

// =============================================================================
// Run Detection
// =============================================================================

/// Five in the top row of an otherwise empty board: exactly those five.
#[test]
fn test_top_row_five() {
    let mut grid = Grid::new(9);
    place(&mut grid, (0..5).map(|c| (0, c)), 0);

    let mut found: Vec<_> = detect_runs(&grid).into_iter().collect();
    found.sort();
    assert_eq!(found, (0..5).map(|c| Coord::new(0, c)).collect::<Vec<_>>());
}

/// A dense board with every line broken yields nothing.
#[test]
fn test_checkerboard_has_no_runs() {
    let mut grid = Grid::new(9);
    for r in 0..9 {
        for c in 0..9 {
            // Alternating rows shift the pattern so diagonals alternate too
            let color = ((r % 2) * 2 + c % 2) as u8;
            grid.set(Coord::new(r, c), Some(Color::new(color))).unwrap();
        }
    }
    assert!(grid.is_full());
    assert!(detect_runs(&grid).is_empty());
}

/// Runs of different colors in one scan are all reported.
#[test]
fn test_two_colors_two_runs() {
    let mut grid = Grid::new(9);
    place(&mut grid, (0..5).map(|r| (r, 0)), 1);
    place(&mut grid, (4..9).map(|c| (8, c)), 2);
    place(&mut grid, [(8, 3), (7, 8)], 2);

    let found = detect_runs(&grid);
    assert_eq!(found.len(), 11);
    assert!(!found.contains(&Coord::new(7, 8)));
}

// =============================================================================
// Paths
// =============================================================================

/// A marker walled into a maze finds its way out through the one open lane.
#[test]
fn test_path_through_maze() {
    let mut grid = Grid::new(7);
    // Walls leaving a winding lane from (3,3) up and around to (0,0)
    place(&mut grid, (1..6).map(|c| (1, c)), 5);
    place(&mut grid, (2..6).map(|r| (r, 5)), 5);
    place(&mut grid, (1..5).map(|c| (5, c)), 5);
    place(&mut grid, (3..5).map(|r| (r, 1)), 5);
    place(&mut grid, [(3, 2), (3, 3)], 5);
    grid.set(Coord::new(3, 3), Some(Color::new(0))).unwrap();

    let result = find_path(&grid, Coord::new(3, 3), Coord::new(0, 0));
    assert!(result.found);
    for pair in result.path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]));
    }
    for c in &result.path[1..] {
        assert!(grid.is_empty_at(*c));
    }
    assert!(reachable_cells(&grid, Coord::new(3, 3)).contains(&Coord::new(0, 0)));
}

/// Identical inputs give identical routes.
#[test]
fn test_path_is_reproducible() {
    let grid = {
        let mut g = Grid::new(9);
        place(&mut g, [(0, 0), (4, 4), (4, 5), (5, 4)], 3);
        g
    };
    let a = find_path(&grid, Coord::new(0, 0), Coord::new(8, 8));
    let b = find_path(&grid, Coord::new(0, 0), Coord::new(8, 8));
    assert_eq!(a, b);
    assert_eq!(a.steps(), 16);
}

// =============================================================================
// Spawning
// =============================================================================

/// A restored RNG replays the same spawns.
#[test]
fn test_spawn_replays_from_rng_state() {
    let mut rng = GameRng::new(1234);
    let mut queue = SpawnQueue::draw(3, 7, &mut rng);
    let saved_rng = rng.state();
    let saved_queue = queue.clone();

    let mut grid_a = Grid::new(9);
    let a = spawn(&mut grid_a, 3, &mut queue, 7, &mut rng).unwrap();

    let mut replay = GameRng::from_state(&saved_rng);
    let mut queue_b = saved_queue;
    let mut grid_b = Grid::new(9);
    let b = spawn(&mut grid_b, 3, &mut queue_b, 7, &mut replay).unwrap();

    assert_eq!(a, b);
    assert_eq!(grid_a, grid_b);
    assert_eq!(queue, queue_b);
}
