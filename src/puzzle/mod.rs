pub mod common;
pub mod cube;
pub mod index_map;
pub mod moves;
pub mod scramble;
