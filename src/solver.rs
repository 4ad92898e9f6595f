use log::debug;

use crate::puzzle::cube::{Cube, History};
use crate::puzzle::moves::{format_sequence, Move};

/// A strategy that finds moves returning a cube to its solved state.
///
/// Solvers only read the cube. [`Cube::solve_with`] applies what they return.
pub trait Solver {
    fn solve(&mut self, cube: &Cube) -> Vec<Move>;
}

/// Undoes everything that was done to the cube, newest move first: first the
/// solve history, then the scramble.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrambleReversal;

impl Solver for ScrambleReversal {
    fn solve(&mut self, cube: &Cube) -> Vec<Move> {
        cube.history(History::Solve)
            .iter()
            .rev()
            .chain(cube.history(History::Scramble).iter().rev())
            .map(Move::inverse)
            .collect()
    }
}

impl Cube {
    /// Runs `solver` and applies its moves on the solve history. Returns the
    /// moves applied.
    pub fn solve_with<S: Solver + ?Sized>(&mut self, solver: &mut S) -> Vec<Move> {
        let moves = solver.solve(self);
        debug!("solver returned {} moves: {}", moves.len(), format_sequence(&moves));
        self.apply_moves(moves.iter().copied(), History::Solve);
        moves
    }
}
