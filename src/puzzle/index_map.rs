//! Adjacency geometry of the cube as a lookup table.
//!
//! For an axis and an ordered pair of faces that one quarter turn about that
//! axis can carry onto each other, the table holds the permutation taking a
//! sticker index on the source face to the index on the destination face
//! occupying the same spot in the turning band. Pairs no single quarter turn
//! connects hold `None`.

use enum_map::Enum;

use crate::puzzle::common::{Axis, Face};

/// Sticker indices on one face, row-major.
pub type IndexPermutation = [u8; 9];

pub const IDENTITY: IndexPermutation = [0, 1, 2, 3, 4, 5, 6, 7, 8];
/// Where each index lands when the face grid is turned clockwise.
pub const TURN_CW: IndexPermutation = [2, 5, 8, 1, 4, 7, 0, 3, 6];
/// Where each index lands when the face grid is turned counterclockwise.
pub const TURN_CCW: IndexPermutation = [6, 3, 0, 7, 4, 1, 8, 5, 2];
pub const TURN_HALF: IndexPermutation = [8, 7, 6, 5, 4, 3, 2, 1, 0];

type Entry = Option<IndexPermutation>;

const ID: Entry = Some(IDENTITY);
const CW: Entry = Some(TURN_CW);
const CCW: Entry = Some(TURN_CCW);
const HALF: Entry = Some(TURN_HALF);
const NO: Entry = None;

const FACES: usize = Face::LENGTH;

/// Indexed by `axis * 36 + source * 6 + destination`, faces in declaration order.
#[rustfmt::skip]
static INDEX_MAP: [Entry; Axis::LENGTH * FACES * FACES] = [
    // Y
    /* Top    */ ID, NO, NO, NO, NO, NO,
    /* Bottom */ NO, ID, NO, NO, NO, NO,
    /* Front  */ NO, NO, ID, NO, ID, ID,
    /* Back   */ NO, NO, NO, ID, ID, ID,
    /* Left   */ NO, NO, ID, ID, ID, NO,
    /* Right  */ NO, NO, ID, ID, NO, ID,
    // X
    /* Top    */ ID, NO, ID, HALF, NO, NO,
    /* Bottom */ NO, ID, ID, HALF, NO, NO,
    /* Front  */ ID, ID, ID, NO, NO, NO,
    /* Back   */ HALF, HALF, NO, ID, NO, NO,
    /* Left   */ NO, NO, NO, NO, ID, NO,
    /* Right  */ NO, NO, NO, NO, NO, ID,
    // Z
    /* Top    */ ID, NO, NO, NO, CCW, CW,
    /* Bottom */ NO, ID, NO, NO, CW, CCW,
    /* Front  */ NO, NO, ID, NO, NO, NO,
    /* Back   */ NO, NO, NO, ID, NO, NO,
    /* Left   */ CW, CCW, NO, NO, ID, NO,
    /* Right  */ CCW, CW, NO, NO, NO, ID,
];

fn offset(axis: Axis, source: Face, destination: Face) -> usize {
    (axis.into_usize() * FACES + source.into_usize()) * FACES + destination.into_usize()
}

/// Returns the index permutation from `source` to `destination` about `axis`,
/// or `None` if no quarter turn about `axis` moves stickers between them.
pub fn lookup(axis: Axis, source: Face, destination: Face) -> Option<&'static IndexPermutation> {
    INDEX_MAP[offset(axis, source, destination)].as_ref()
}

/// Translates `index` on `source` into the corresponding index on `destination`.
///
/// Asking for a pair that is not part of the axis' rotation cycle is a bug in
/// the caller, so this panics rather than returning a sentinel.
pub fn map_index(axis: Axis, source: Face, destination: Face, index: u8) -> u8 {
    let permutation = lookup(axis, source, destination).unwrap_or_else(|| {
        panic!(
            "{:?} and {:?} are not adjacent about axis {:?}",
            source, destination, axis
        )
    });
    permutation[usize::from(index)]
}

/// The four faces circling `axis`, in the order a quarter turn of the
/// positive face carries stickers between them.
pub fn rotation_cycle(axis: Axis) -> [Face; 4] {
    match axis {
        Axis::Y => [Face::Front, Face::Right, Face::Back, Face::Left],
        Axis::X => [Face::Front, Face::Top, Face::Back, Face::Bottom],
        Axis::Z => [Face::Top, Face::Right, Face::Bottom, Face::Left],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::enum_iter;
    use itertools::Itertools;

    #[test]
    fn every_face_maps_to_itself() {
        for axis in enum_iter::<Axis>() {
            for face in enum_iter::<Face>() {
                for i in 0..9 {
                    assert_eq!(map_index(axis, face, face, i), i);
                }
            }
        }
    }

    #[test]
    fn cycle_neighbors_are_reachable() {
        for axis in enum_iter::<Axis>() {
            let cycle = rotation_cycle(axis);
            for (a, b) in cycle.iter().circular_tuple_windows() {
                assert!(lookup(axis, *a, *b).is_some(), "{:?} -> {:?} on {:?}", a, b, axis);
                assert!(lookup(axis, *b, *a).is_some(), "{:?} -> {:?} on {:?}", b, a, axis);
            }
            // opposite faces in the cycle need a half turn
            assert!(lookup(axis, cycle[0], cycle[2]).is_none());
            assert!(lookup(axis, cycle[1], cycle[3]).is_none());
        }
    }

    #[test]
    fn faces_on_the_axis_are_isolated() {
        let on_axis = [
            (Axis::Y, Face::Top),
            (Axis::Y, Face::Bottom),
            (Axis::X, Face::Left),
            (Axis::X, Face::Right),
            (Axis::Z, Face::Front),
            (Axis::Z, Face::Back),
        ];
        for (axis, face) in on_axis {
            for other in enum_iter::<Face>().filter(|&f| f != face) {
                assert!(lookup(axis, face, other).is_none());
                assert!(lookup(axis, other, face).is_none());
            }
        }
    }

    #[test]
    fn reverse_direction_is_inverse() {
        for axis in enum_iter::<Axis>() {
            for (a, b) in enum_iter::<Face>().tuple_combinations() {
                if lookup(axis, a, b).is_none() {
                    continue;
                }
                for i in 0..9 {
                    assert_eq!(map_index(axis, b, a, map_index(axis, a, b, i)), i);
                }
            }
        }
    }

    #[test]
    fn full_cycle_is_identity() {
        for axis in enum_iter::<Axis>() {
            for i in 0..9 {
                let mut index = i;
                for (a, b) in rotation_cycle(axis).iter().circular_tuple_windows() {
                    index = map_index(axis, *a, *b, index);
                }
                assert_eq!(index, i, "axis {:?}", axis);
            }
        }
    }

    #[test]
    fn entries_are_permutations() {
        for entry in INDEX_MAP.iter().flatten() {
            assert_eq!(entry.iter().sorted().copied().collect::<Vec<_>>(), IDENTITY.to_vec());
        }
    }

    #[test]
    #[should_panic]
    fn unreachable_pair_panics() {
        map_index(Axis::X, Face::Top, Face::Left, 0);
    }
}
