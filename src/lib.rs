//! Sticker-level model of a 3x3x3 twisty puzzle.
//!
//! The state is 54 stickers, nine per face. Every move is expanded into
//! quarter turns of single layers, and each layer turn is a face spin plus a
//! cycle of three stickers across the four faces around it.

pub mod preferences;
pub mod puzzle;
pub mod session;
pub mod solver;
pub mod util;

pub use crate::puzzle::common::{Axis, Color, ColorScheme, Face, Slice};
pub use crate::puzzle::cube::{Cube, History};
pub use crate::puzzle::moves::{format_sequence, parse_sequence, Move, Turn};
pub use crate::solver::{ScrambleReversal, Solver};
