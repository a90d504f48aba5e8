//! Shared helpers for pathfind benchmark suites.
//!
//! Every builder is deterministic: the same arguments give the same graph
//! and the same start state on every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use pathfind_harness::graphs::{GridGraph, NPuzzle, PuzzleState, WordLadder};
use pathfind_kernel::point::Point;
use pathfind_search::DirectedGraph;

/// A `width` x `height` room with a wall every fourth column. Walls leave a
/// gap at the top or bottom, alternating, so the path snakes through.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
#[must_use]
pub fn snake_room(width: usize, height: usize) -> GridGraph {
    assert!(width > 0 && height > 0, "room must not be empty");
    let mut map = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            let wall = x % 4 == 2 && {
                let gap_at_bottom = (x / 4) % 2 == 0;
                if gap_at_bottom {
                    y + 1 != height
                } else {
                    y != 0
                }
            };
            map.push(if wall { '@' } else { '.' });
        }
        map.push('\n');
    }
    map.parse().expect("generated map uses allowed characters")
}

/// Opposite corners of a room built by [`snake_room`].
///
/// # Panics
///
/// Panics if a dimension does not fit in `i32`.
#[must_use]
pub fn room_corners(width: usize, height: usize) -> (Point, Point) {
    let x = i32::try_from(width - 1).expect("width fits");
    let y = i32::try_from(height - 1).expect("height fits");
    (Point::new(0, 0), Point::new(x, y))
}

/// A solvable puzzle state `moves` random slides away from the goal.
///
/// # Panics
///
/// Panics if the goal state has no moves, which no supported size allows.
#[must_use]
pub fn scrambled_puzzle(puzzle: &NPuzzle, moves: usize, seed: u64) -> PuzzleState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = puzzle.goal_state();
    for _ in 0..moves {
        let edges = puzzle.outgoing_edges(&state);
        let edge = edges.choose(&mut rng).expect("every state has a move");
        state = edge.to().clone();
    }
    state
}

/// Every word of length `len` over `alphabet`: a dense ladder.
#[must_use]
pub fn dense_ladder(alphabet: &str, len: u32) -> WordLadder {
    let letters: Vec<char> = alphabet.chars().collect();
    let mut words = vec![String::new()];
    for _ in 0..len {
        words = words
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |c| {
                    let mut w = prefix.clone();
                    w.push(*c);
                    w
                })
            })
            .collect();
    }
    let mut ladder = WordLadder::new();
    for word in &words {
        ladder.add_word(word);
    }
    ladder
}
