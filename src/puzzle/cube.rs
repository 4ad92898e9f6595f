use enum_map::{Enum, EnumMap};
use log::{debug, trace};

use crate::puzzle::common::{default_scheme, Axis, Color, ColorScheme, Face, Slice};
use crate::puzzle::index_map::{map_index, TURN_CCW, TURN_CW};
use crate::puzzle::moves::{Layer, Move, QuarterTurn};

/// Which move history a move is recorded on.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq)]
pub enum History {
    Scramble,
    Solve,
}

/// The stickers of one layer that leave their face during a quarter turn.
///
/// A clockwise turn moves stickers from each face in `cycle` to the face
/// before it, wrapping from the last face back to `start`.
#[derive(Debug, Clone, Copy)]
struct Band {
    start: Face,
    indices: [u8; 3],
    cycle: [Face; 3],
    axis: Axis,
}

impl Layer {
    /// The face that spins with this layer, if any.
    fn face(&self) -> Option<Face> {
        match self {
            Layer::Face(face) => Some(*face),
            Layer::Slice(_) => None,
        }
    }

    #[rustfmt::skip]
    fn band(&self) -> Band {
        use Face::*;

        let (start, indices, cycle) = match self {
            Layer::Face(Top)         => (Front, [0, 1, 2], [Right, Back, Left]),
            Layer::Slice(Slice::E)   => (Front, [3, 4, 5], [Left, Back, Right]),
            Layer::Face(Bottom)      => (Front, [6, 7, 8], [Left, Back, Right]),
            Layer::Face(Left)        => (Front, [0, 3, 6], [Top, Back, Bottom]),
            Layer::Slice(Slice::M)   => (Front, [1, 4, 7], [Top, Back, Bottom]),
            Layer::Face(Right)       => (Front, [2, 5, 8], [Bottom, Back, Top]),
            Layer::Face(Back)        => (Top,   [0, 1, 2], [Right, Bottom, Left]),
            Layer::Slice(Slice::S)   => (Top,   [3, 4, 5], [Left, Bottom, Right]),
            Layer::Face(Front)       => (Top,   [6, 7, 8], [Left, Bottom, Right]),
        };
        let axis = match self {
            Layer::Face(face) => face.axis(),
            Layer::Slice(slice) => slice.axis(),
        };
        Band { start, indices, cycle, axis }
    }
}

/// State of a 3x3x3 cube: 54 stickers and the moves applied to reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    stickers: EnumMap<Face, [Color; 9]>,
    scheme: ColorScheme,
    histories: EnumMap<History, Vec<Move>>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube in the default color scheme.
    pub fn new() -> Self {
        Self::with_scheme(default_scheme())
    }

    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self {
            stickers: EnumMap::from_fn(|face| [scheme[face]; 9]),
            scheme,
            histories: EnumMap::default(),
        }
    }

    /// Returns to the solved state and forgets both histories.
    pub fn reset(&mut self) {
        debug!("resetting cube");
        let scheme = self.scheme;
        self.stickers = EnumMap::from_fn(|face| [scheme[face]; 9]);
        for (_, history) in self.histories.iter_mut() {
            history.clear();
        }
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.stickers[face]
    }

    pub fn sticker(&self, face: Face, index: usize) -> Color {
        self.stickers[face][index]
    }

    /// Every face with its nine stickers, in storage order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &[Color; 9])> {
        self.stickers.iter()
    }

    pub fn history(&self, history: History) -> &[Move] {
        &self.histories[history]
    }

    /// How many stickers of each color are on the cube.
    pub fn color_counts(&self) -> EnumMap<Color, usize> {
        let mut counts = EnumMap::default();
        for (_, stickers) in self.stickers.iter() {
            for &color in stickers {
                counts[color] += 1;
            }
        }
        counts
    }

    /// True when every sticker matches the center of its face.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .values()
            .all(|stickers| stickers.iter().all(|&color| color == stickers[4]))
    }

    /// Applies `mv` and records it on `history`. The sentinel does nothing.
    pub fn apply_move(&mut self, mv: Move, history: History) {
        if mv == Move::NoMove {
            return;
        }
        trace!("{:?} move {}", history, mv);
        self.turn(mv);
        self.histories[history].push(mv);
    }

    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>, history: History) {
        for mv in moves {
            self.apply_move(mv, history);
        }
    }

    /// Pops the latest move off `history` and applies its inverse.
    /// Returns the undone move, or `None` if the history was empty.
    pub fn undo_last(&mut self, history: History) -> Option<Move> {
        let mv = self.histories[history].pop()?;
        trace!("{:?} undo {}", history, mv);
        self.turn(mv.inverse());
        Some(mv)
    }

    /// Changes the stickers without touching either history.
    pub fn turn(&mut self, mv: Move) {
        for quarter in mv.quarter_turns() {
            quarter_turn(&mut self.stickers, quarter);
        }
    }

    /// Turns the nine stickers of `face` by 90°, clockwise as seen facing it
    /// unless `reverse`.
    pub fn rotate_face(&mut self, face: Face, reverse: bool) {
        rotate_face(&mut self.stickers[face], reverse);
    }

    /// Cycles three stickers of a band through `starting_face` and then each
    /// face of `face_cycle`. See [`rotate_edges`].
    pub fn rotate_edges(
        &mut self,
        indices: [u8; 3],
        face_cycle: &[Face],
        starting_face: Face,
        axis: Axis,
    ) {
        rotate_edges(&mut self.stickers, indices, face_cycle, starting_face, axis);
    }
}

/// Applies one quarter turn to any grid laid out like the cube's stickers.
pub(crate) fn quarter_turn<T: Copy>(
    grid: &mut EnumMap<Face, [T; 9]>,
    QuarterTurn { layer, reverse }: QuarterTurn,
) {
    if let Some(face) = layer.face() {
        rotate_face(&mut grid[face], reverse);
    }
    let band = layer.band();
    let mut cycle = band.cycle;
    if reverse {
        cycle.reverse();
    }
    rotate_edges(grid, band.indices, &cycle, band.start, band.axis);
}

/// Corners and edges each move in a 4-cycle; the center stays put.
pub fn rotate_face<T: Copy>(stickers: &mut [T; 9], reverse: bool) {
    let destinations = if reverse { &TURN_CCW } else { &TURN_CW };
    let old = *stickers;
    for (from, &to) in destinations.iter().enumerate() {
        stickers[usize::from(to)] = old[from];
    }
}

/// Each face takes the stickers of the face after it, with the indices
/// translated into that face's frame through the index map. The stickers
/// first taken off `starting_face` land on the last face, closing the cycle.
pub fn rotate_edges<T: Copy>(
    grid: &mut EnumMap<Face, [T; 9]>,
    indices: [u8; 3],
    face_cycle: &[Face],
    starting_face: Face,
    axis: Axis,
) {
    let saved = indices.map(|i| grid[starting_face][usize::from(i)]);

    let mut current = starting_face;
    let mut current_indices = indices;
    for &next in face_cycle {
        let next_indices = current_indices.map(|i| map_index(axis, current, next, i));
        for (&to, &from) in current_indices.iter().zip(&next_indices) {
            grid[current][usize::from(to)] = grid[next][usize::from(from)];
        }
        current = next;
        current_indices = next_indices;
    }

    for (&to, sticker) in current_indices.iter().zip(saved) {
        grid[current][usize::from(to)] = sticker;
    }
}
