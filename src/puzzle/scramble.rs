use log::debug;
use rand::Rng;

use crate::puzzle::common::{Face, Slice};
use crate::puzzle::cube::{Cube, History};
use crate::puzzle::moves::{format_sequence, Move, Turn};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 30;

/// Moves a scramble draws from: every face and slice move. Wide moves are
/// left out.
#[rustfmt::skip]
pub const STANDARD_MOVES: [Move; 27] = {
    use Turn::*;
    [
        Move::Face(Face::Top, Clockwise), Move::Face(Face::Top, CounterClockwise), Move::Face(Face::Top, Half),
        Move::Face(Face::Bottom, Clockwise), Move::Face(Face::Bottom, CounterClockwise), Move::Face(Face::Bottom, Half),
        Move::Face(Face::Front, Clockwise), Move::Face(Face::Front, CounterClockwise), Move::Face(Face::Front, Half),
        Move::Face(Face::Back, Clockwise), Move::Face(Face::Back, CounterClockwise), Move::Face(Face::Back, Half),
        Move::Face(Face::Left, Clockwise), Move::Face(Face::Left, CounterClockwise), Move::Face(Face::Left, Half),
        Move::Face(Face::Right, Clockwise), Move::Face(Face::Right, CounterClockwise), Move::Face(Face::Right, Half),
        Move::Slice(Slice::M, Clockwise), Move::Slice(Slice::M, CounterClockwise), Move::Slice(Slice::M, Half),
        Move::Slice(Slice::E, Clockwise), Move::Slice(Slice::E, CounterClockwise), Move::Slice(Slice::E, Half),
        Move::Slice(Slice::S, Clockwise), Move::Slice(Slice::S, CounterClockwise), Move::Slice(Slice::S, Half),
    ]
};

impl Cube {
    /// Applies `length` uniformly random standard moves from the thread RNG,
    /// recording them on the scramble history.
    pub fn scramble(&mut self, length: usize) {
        self.scramble_with(length, &mut rand::thread_rng());
    }

    /// Like [`Cube::scramble`] but drawing from `rng`, so a seeded generator
    /// gives a reproducible scramble. Consecutive moves are not checked
    /// against each other; `R` may well be followed by `R'`.
    pub fn scramble_with<R: Rng>(&mut self, length: usize, rng: &mut R) {
        let start = self.history(History::Scramble).len();
        for _ in 0..length {
            let mv = STANDARD_MOVES[rng.gen_range(0..STANDARD_MOVES.len())];
            self.apply_move(mv, History::Scramble);
        }
        debug!(
            "scrambled with {}",
            format_sequence(&self.history(History::Scramble)[start..])
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn standard_moves_exclude_wide_moves() {
        let standard: HashSet<Move> = STANDARD_MOVES.into_iter().collect();
        assert_eq!(standard.len(), 27);
        for mv in Move::all() {
            let wide = matches!(mv, Move::Wide(..));
            assert_eq!(standard.contains(&mv), !wide, "{}", mv);
        }
    }

    #[test]
    fn scramble_records_every_move() {
        let mut cube = Cube::new();
        cube.scramble_with(25, &mut StdRng::seed_from_u64(7));
        assert_eq!(cube.history(History::Scramble).len(), 25);
        assert!(cube.history(History::Solve).is_empty());
        assert!(cube
            .history(History::Scramble)
            .iter()
            .all(|mv| STANDARD_MOVES.contains(mv)));
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let mut a = Cube::new();
        let mut b = Cube::new();
        a.scramble_with(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(2024));
        b.scramble_with(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);

        let mut c = Cube::new();
        c.scramble_with(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(2025));
        assert_ne!(a.history(History::Scramble), c.history(History::Scramble));
    }

    #[test]
    fn scramble_appends_to_existing_history() {
        let mut cube = Cube::new();
        cube.scramble(3);
        let first: Vec<Move> = cube.history(History::Scramble).to_vec();
        cube.scramble(4);
        assert_eq!(cube.history(History::Scramble).len(), 7);
        assert_eq!(&cube.history(History::Scramble)[..3], &first[..]);
    }

    #[test]
    fn empty_scramble_changes_nothing() {
        let mut cube = Cube::new();
        cube.scramble(0);
        assert_eq!(cube, Cube::new());
    }
}
