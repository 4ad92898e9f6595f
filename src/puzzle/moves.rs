use eyre::{bail, eyre};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::puzzle::common::{Face, Slice};
use crate::util::enum_iter;

/// Amount and direction of a move, clockwise as seen facing the turned layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        }
    }
}

/// A symbolic move.
///
/// Slices follow the direction of a neighboring face: `M` turns like `L`,
/// `E` like `D` and `S` like `F`. Wide moves turn a face together with the
/// slice next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Face(Face, Turn),
    Wide(Face, Turn),
    Slice(Slice, Turn),
    /// Does nothing and is never recorded.
    NoMove,
}

/// A single layer the dispatcher knows how to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Face(Face),
    Slice(Slice),
}

/// A primitive 90° turn of one layer. `reverse` turns it counterclockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarterTurn {
    pub layer: Layer,
    pub reverse: bool,
}

impl Move {
    /// Every real move, excluding the sentinel.
    pub fn all() -> impl Iterator<Item = Move> {
        let faces = enum_iter::<Face>()
            .cartesian_product(Turn::ALL)
            .map(|(face, turn)| Move::Face(face, turn));
        let wides = enum_iter::<Face>()
            .cartesian_product(Turn::ALL)
            .map(|(face, turn)| Move::Wide(face, turn));
        let slices = enum_iter::<Slice>()
            .cartesian_product(Turn::ALL)
            .map(|(slice, turn)| Move::Slice(slice, turn));
        faces.chain(wides).chain(slices)
    }

    pub fn inverse(&self) -> Move {
        match *self {
            Move::Face(face, turn) => Move::Face(face, turn.inverse()),
            Move::Wide(face, turn) => Move::Wide(face, turn.inverse()),
            Move::Slice(slice, turn) => Move::Slice(slice, turn.inverse()),
            Move::NoMove => Move::NoMove,
        }
    }

    pub fn turn(&self) -> Option<Turn> {
        match *self {
            Move::Face(_, turn) | Move::Wide(_, turn) | Move::Slice(_, turn) => Some(turn),
            Move::NoMove => None,
        }
    }

    /// Expands the move into the quarter turns that realize it, in order.
    /// Half turns are the quarter turn sequence applied twice.
    pub fn quarter_turns(&self) -> Vec<QuarterTurn> {
        let (layers, turn) = match *self {
            Move::Face(face, turn) => (vec![(Layer::Face(face), false)], turn),
            Move::Wide(face, turn) => {
                let (slice, same_direction) = face.inner_slice();
                (
                    vec![(Layer::Face(face), false), (Layer::Slice(slice), !same_direction)],
                    turn,
                )
            }
            Move::Slice(slice, turn) => (vec![(Layer::Slice(slice), false)], turn),
            Move::NoMove => return vec![],
        };

        let counterclockwise = turn == Turn::CounterClockwise;
        let quarter = layers.into_iter().map(|(layer, flipped)| QuarterTurn {
            layer,
            reverse: flipped != counterclockwise,
        });

        match turn {
            Turn::Half => quarter.clone().chain(quarter).collect(),
            _ => quarter.collect(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Face(face, turn) => write!(f, "{}{}", face.letter(), turn.suffix()),
            Move::Wide(face, turn) => write!(f, "{}w{}", face.letter(), turn.suffix()),
            Move::Slice(slice, turn) => write!(f, "{}{}", slice.letter(), turn.suffix()),
            Move::NoMove => write!(f, "-"),
        }
    }
}

impl FromStr for Move {
    type Err = eyre::Report;

    /// Parses standard notation. A lowercase face letter is a wide move, so
    /// `u` and `Uw` are the same. `2'` is accepted for a half turn.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" {
            return Ok(Move::NoMove);
        }

        let mut chars = s.chars();
        let head = chars.next().ok_or_else(|| eyre!("empty move"))?;
        let rest = chars.as_str();

        let turn = |suffix: &str| match suffix {
            "" => Ok(Turn::Clockwise),
            "'" => Ok(Turn::CounterClockwise),
            "2" | "2'" => Ok(Turn::Half),
            _ => Err(eyre!("unknown turn suffix {:?} in move {:?}", suffix, s)),
        };

        if let Some(face) = Face::from_letter(head) {
            if let Some(suffix) = rest.strip_prefix('w') {
                return Ok(Move::Wide(face, turn(suffix)?));
            }
            return Ok(Move::Face(face, turn(rest)?));
        }
        if let Some(face) = Face::from_letter(head.to_ascii_uppercase()) {
            return Ok(Move::Wide(face, turn(rest)?));
        }
        if let Some(slice) = Slice::from_letter(head) {
            return Ok(Move::Slice(slice, turn(rest)?));
        }
        bail!("unknown move {:?}", s)
    }
}

/// Parses a whitespace-separated algorithm such as `"R U R' U'"`.
pub fn parse_sequence(s: &str) -> eyre::Result<Vec<Move>> {
    s.split_whitespace().map(str::parse).collect()
}

pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
