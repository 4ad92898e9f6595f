use enum_map::{enum_map, Enum, EnumMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six faces of the cube, in fixed storage order.
///
/// Each face is viewed from outside the cube. The side faces are viewed with
/// Top upward, Top is viewed with Back upward, and Bottom with Front upward.
/// Sticker indices run row-major from the upper-left corner of that view.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// The axis this face is turned about.
    pub fn axis(&self) -> Axis {
        match self {
            Face::Top | Face::Bottom => Axis::Y,
            Face::Left | Face::Right => Axis::X,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// The middle layer lying next to this face, and whether a quarter turn of
    /// that slice goes the same way as a quarter turn of this face.
    pub fn inner_slice(&self) -> (Slice, bool) {
        match self {
            Face::Top => (Slice::E, false),
            Face::Bottom => (Slice::E, true),
            Face::Left => (Slice::M, true),
            Face::Right => (Slice::M, false),
            Face::Front => (Slice::S, true),
            Face::Back => (Slice::S, false),
        }
    }

    /// Standard move letter.
    pub fn letter(&self) -> char {
        match self {
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::Top),
            'D' => Some(Face::Bottom),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rotation axes. Y is vertical, X runs left to right and Z back to front.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Y,
    X,
    Z,
}

/// The three middle layers. Each turns in the same direction as the face it
/// follows by convention: M as Left, E as Bottom, S as Front.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    E,
    S,
}

impl Slice {
    pub fn axis(&self) -> Axis {
        match self {
            Slice::M => Axis::X,
            Slice::E => Axis::Y,
            Slice::S => Axis::Z,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Slice::M),
            'E' => Some(Slice::E),
            'S' => Some(Slice::S),
            _ => None,
        }
    }
}

#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    White,
    Blue,
    Green,
    Orange,
    Red,
}

impl Color {
    pub fn letter(&self) -> char {
        match self {
            Color::Yellow => 'y',
            Color::White => 'w',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Orange => 'o',
            Color::Red => 'r',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Solved color of each face.
pub type ColorScheme = EnumMap<Face, Color>;

pub fn default_scheme() -> ColorScheme {
    enum_map! {
        Face::Top => Color::Yellow,
        Face::Bottom => Color::White,
        Face::Front => Color::Blue,
        Face::Back => Color::Green,
        Face::Left => Color::Orange,
        Face::Right => Color::Red,
    }
}
