//! Benchmark workloads for the Ragged jagged-array container.
//!
//! Provides seeded, reproducible workloads that can be replayed against a
//! [`RaggedVec`] and against a `Vec<Vec<u64>>` baseline:
//!
//! - [`filled_grid`] / [`filled_nested`]: uniform rows, fully packed.
//! - [`scattered_pushes`]: pushes spread over random rows, the case that
//!   forces relocation.
//! - [`edit_script`]: mixed push, insert and erase edits.
//! - [`fragmented_grid`]: a structure left with dead space by a script.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ragged_arena::RaggedVec;

/// One edit in a replayable script.
///
/// Element positions are reduced modulo the row's length when applied, so a
/// script stays valid however rows have grown by then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Append `value` to `row`.
    Push { row: usize, value: u64 },
    /// Insert `value` into `row` near position `at`.
    Insert { row: usize, at: usize, value: u64 },
    /// Remove the element of `row` near position `at`, if any.
    Erase { row: usize, at: usize },
}

/// `rows` rows of `cols` consecutive values each.
pub fn filled_grid(rows: usize, cols: usize) -> RaggedVec<u64> {
    filled_nested(rows, cols).into()
}

/// The `Vec<Vec<u64>>` equivalent of [`filled_grid`].
pub fn filled_nested(rows: usize, cols: usize) -> Vec<Vec<u64>> {
    (0..rows)
        .map(|row| (0..cols).map(|col| (row * cols + col) as u64).collect())
        .collect()
}

/// `count` pushes to uniformly random rows among `rows`.
pub fn scattered_pushes(rows: usize, count: usize, seed: u64) -> Vec<Edit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Edit::Push {
            row: rng.random_range(0..rows),
            value: rng.random(),
        })
        .collect()
}

/// A mix of pushes (50%), inserts (30%) and erases (20%) over `rows` rows.
pub fn edit_script(rows: usize, count: usize, seed: u64) -> Vec<Edit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let row = rng.random_range(0..rows);
            let at = rng.random_range(0..64);
            match rng.random_range(0..10u8) {
                0..=4 => Edit::Push {
                    row,
                    value: rng.random(),
                },
                5..=7 => Edit::Insert {
                    row,
                    at,
                    value: rng.random(),
                },
                _ => Edit::Erase { row, at },
            }
        })
        .collect()
}

/// Replay `script` against a [`RaggedVec`].
///
/// # Panics
///
/// Panics if the script names a row the structure does not have.
pub fn apply_ragged(grid: &mut RaggedVec<u64>, script: &[Edit]) {
    for edit in script {
        match *edit {
            Edit::Push { row, value } => grid.row_mut(row).unwrap().push(value),
            Edit::Insert { row, at, value } => {
                let mut target = grid.row_mut(row).unwrap();
                let pos = at % (target.len() + 1);
                target.insert(pos, value).unwrap();
            }
            Edit::Erase { row, at } => {
                let mut target = grid.row_mut(row).unwrap();
                if !target.is_empty() {
                    let pos = at % target.len();
                    target.remove(pos).unwrap();
                }
            }
        }
    }
}

/// Replay `script` against the `Vec<Vec<u64>>` baseline.
///
/// # Panics
///
/// Panics if the script names a row the baseline does not have.
pub fn apply_nested(rows: &mut [Vec<u64>], script: &[Edit]) {
    for edit in script {
        match *edit {
            Edit::Push { row, value } => rows[row].push(value),
            Edit::Insert { row, at, value } => {
                let target = &mut rows[row];
                let pos = at % (target.len() + 1);
                target.insert(pos, value);
            }
            Edit::Erase { row, at } => {
                let target = &mut rows[row];
                if !target.is_empty() {
                    let pos = at % target.len();
                    target.remove(pos);
                }
            }
        }
    }
}

/// A `rows`-row structure that has been through an [`edit_script`] of
/// `rows * 8` edits, leaving relocated rows and dead space behind.
pub fn fragmented_grid(rows: usize, seed: u64) -> RaggedVec<u64> {
    let mut grid = filled_grid(rows, 4);
    apply_ragged(&mut grid, &edit_script(rows, rows * 8, seed));
    grid
}
