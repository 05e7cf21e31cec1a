//! Grid tests - topology, shuffle and win detection

use slide15::core::{Grid, GridError, SimpleRng};
use slide15::types::{Direction, Pos};

fn shuffled(size: usize, seed: u32) -> Grid {
    let mut grid = Grid::ordered(size).unwrap();
    grid.shuffle(&mut SimpleRng::new(seed));
    grid
}

#[test]
fn test_initial_values_are_a_permutation() {
    for size in 2..=8 {
        for seed in [1, 2, 3, 99, 12345] {
            let grid = shuffled(size, seed);
            let mut values: Vec<u16> = grid.values().collect();
            values.sort_unstable();
            let expected: Vec<u16> = (0..(size * size) as u16).collect();
            assert_eq!(values, expected, "size {} seed {}", size, seed);
        }
    }
}

#[test]
fn test_solved_iff_row_major_order() {
    let solved = Grid::from_values(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    assert!(solved.is_solved());

    let blank_first = Grid::from_values(3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert!(!blank_first.is_solved());

    let swapped = Grid::from_values(3, &[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
    assert!(!swapped.is_solved());
}

#[test]
fn test_direction_only_for_blank_neighbours() {
    let grid = shuffled(5, 77);
    let blank = grid.locate_blank();
    for tile in grid.tiles() {
        let pos = tile.pos();
        let manhattan = pos.row.abs_diff(blank.row) + pos.col.abs_diff(blank.col);
        let dir = grid.adjacent_blank_direction(pos);
        if manhattan == 1 {
            let dir = dir.expect("neighbour of blank must have a direction");
            assert_eq!(pos.step(dir, 5), Some(blank));
        } else {
            assert_eq!(dir, None, "tile at {:?} is not adjacent", pos);
        }
    }
}

#[test]
fn test_blank_itself_has_no_direction() {
    let grid = shuffled(4, 3);
    assert_eq!(grid.adjacent_blank_direction(grid.locate_blank()), None);
}

#[test]
fn test_slide_swaps_with_blank() {
    let mut grid = Grid::ordered(4).unwrap();
    assert_eq!(grid.slide(Pos::new(3, 2)), Some(Direction::Right));
    assert_eq!(grid.get(Pos::new(3, 3)).unwrap().value, 15);
    assert_eq!(grid.locate_blank(), Pos::new(3, 2));
    assert_eq!(grid.get(Pos::new(3, 3)).unwrap().pos(), Pos::new(3, 3));
}

#[test]
fn test_fixed_seed_is_deterministic() {
    assert_eq!(shuffled(4, 12345), shuffled(4, 12345));
    assert_ne!(shuffled(4, 12345), shuffled(4, 54321));

    let values: Vec<u16> = shuffled(4, 12345).values().collect();
    assert_eq!(
        values,
        vec![6, 7, 5, 8, 1, 4, 2, 3, 14, 13, 15, 0, 10, 11, 12, 9]
    );
}

#[test]
fn test_shuffle_only_permutes_within_original_rows() {
    // Rows are swapped whole, then columns within a row, so each row keeps
    // the label set of some row of the solved grid.
    let size = 5;
    let grid = shuffled(size, 2024);
    let solved = Grid::ordered(size).unwrap();
    let row_set = |g: &Grid, r: usize| {
        let mut v: Vec<u16> = g.tiles()[r * size..(r + 1) * size]
            .iter()
            .map(|t| t.value)
            .collect();
        v.sort_unstable();
        v
    };
    let mut originals: Vec<Vec<u16>> = (0..size).map(|r| row_set(&solved, r)).collect();
    for r in 0..size {
        let set = row_set(&grid, r);
        let found = originals.iter().position(|o| *o == set);
        assert!(found.is_some(), "row {} mixes labels from several rows", r);
        originals.remove(found.unwrap());
    }
}

#[test]
fn test_shuffle_can_produce_unsolvable_boards() {
    assert!(!shuffled(4, 1).is_solvable());
    assert!(shuffled(4, 7).is_solvable());
}

#[test]
fn test_from_values_validation() {
    assert_eq!(
        Grid::from_values(2, &[1, 2, 3]),
        Err(GridError::NotAPermutation { expected: 4 })
    );
    assert_eq!(
        Grid::from_values(2, &[1, 2, 3, 4]),
        Err(GridError::NotAPermutation { expected: 4 })
    );
    assert!(matches!(
        Grid::from_values(1, &[0]),
        Err(GridError::InvalidSize { size: 1, .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = Grid::ordered(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid grid size 0: side length must be between 2 and 256"
    );
}
