//! The 3x3x3 Rubik's cube: its move notation and a sticker level model of the puzzle that
//! understands canonical move strings.

pub mod axis;
pub mod moves;
pub mod parse;

use axis::{Axis, Vec3};
use moves::{Move333, Primitive, PrimitiveType};

use crate::error::Error;
use crate::moves::MoveSequence;
use crate::simulator::Simulator;

/// A face of the cube. Stickers are coloured by the face they start on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

/// Faces in the order their stickers are stored.
const FACES: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

impl Face {
    /// The outward facing normal of this face.
    fn normal(self) -> Vec3 {
        match self {
            Face::U => [0, 1, 0],
            Face::L => [-1, 0, 0],
            Face::F => [0, 0, 1],
            Face::R => [1, 0, 0],
            Face::B => [0, 0, -1],
            Face::D => [0, -1, 0],
        }
    }

    fn from_normal(normal: Vec3) -> Face {
        match normal {
            [0, 1, 0] => Face::U,
            [-1, 0, 0] => Face::L,
            [0, 0, 1] => Face::F,
            [1, 0, 0] => Face::R,
            [0, 0, -1] => Face::B,
            [0, -1, 0] => Face::D,
            _ => unreachable!("{normal:?} is not the normal of a face"),
        }
    }
}

/// The two components of a vector that lie in the plane of a face, in increasing order.
fn face_plane(axis: Axis) -> (usize, usize) {
    match axis {
        Axis::LR => (1, 2),
        Axis::UD => (0, 2),
        Axis::FB => (0, 1),
    }
}

/// The position and outward normal of the sticker stored at index `i`.
fn sticker_at(i: usize) -> (Vec3, Vec3) {
    let normal = FACES[i / 9].normal();
    let (a, b) = face_plane(Axis::of(normal));
    let mut pos = normal;
    pos[a] = (i % 9 / 3) as i8 - 1;
    pos[b] = (i % 3) as i8 - 1;
    (pos, normal)
}

/// The index a sticker at the given position and normal is stored at.
fn sticker_index(pos: Vec3, normal: Vec3) -> usize {
    let face = Face::from_normal(normal);
    let (a, b) = face_plane(Axis::of(normal));
    let face_index = FACES.iter().position(|&f| f == face).unwrap_or_default();
    face_index * 9 + (pos[a] + 1) as usize * 3 + (pos[b] + 1) as usize
}

/// Which layers of the cube a primitive turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Layers {
    /// The layer at this coordinate along the axis (-1, 0 or 1).
    One(i8),
    /// The whole cube.
    All,
}

impl PrimitiveType {
    /// The axis, layers and number of clockwise quarter turns (looking at R, U or F) a primitive
    /// makes.
    ///
    /// M follows L, E follows D and S follows F. X, Y and Z follow R, U and F.
    fn turn(self) -> (Axis, Layers, u8) {
        use PrimitiveType as P;
        match self {
            P::R => (Axis::LR, Layers::One(1), 1),
            P::L => (Axis::LR, Layers::One(-1), 3),
            P::M => (Axis::LR, Layers::One(0), 3),
            P::X => (Axis::LR, Layers::All, 1),
            P::U => (Axis::UD, Layers::One(1), 1),
            P::D => (Axis::UD, Layers::One(-1), 3),
            P::E => (Axis::UD, Layers::One(0), 3),
            P::Y => (Axis::UD, Layers::All, 1),
            P::F => (Axis::FB, Layers::One(1), 1),
            P::B => (Axis::FB, Layers::One(-1), 3),
            P::S => (Axis::FB, Layers::One(0), 1),
            P::Z => (Axis::FB, Layers::All, 1),
        }
    }
}

/// A 3x3x3 cube modelled sticker by sticker. Unlike a cubie model this tracks centres, so slice
/// moves and whole cube rotations can be applied directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube {
    stickers: [Face; 54],
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl StickerCube {
    /// The solved cube in the standard orientation.
    pub const SOLVED: StickerCube = StickerCube {
        stickers: {
            let mut stickers = [Face::U; 54];
            let mut i = 0;
            while i < 54 {
                stickers[i] = FACES[i / 9];
                i += 1;
            }
            stickers
        },
    };

    /// The colours on one face. Stickers are ordered by their two in-plane coordinates, lowest
    /// axis first (so U is ordered by L to R, then B to F).
    pub fn face(&self, face: Face) -> &[Face] {
        let i = FACES.iter().position(|&f| f == face).unwrap_or_default();
        &self.stickers[i * 9..i * 9 + 9]
    }

    /// Whether every face shows a single colour. A rotated solved cube is still solved.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .chunks(9)
            .all(|face| face.iter().all(|&s| s == face[0]))
    }

    /// Apply an algorithm to a cube, through the canonical expansion of each move.
    pub fn make_moves(self, mvs: &MoveSequence<Move333>) -> StickerCube {
        mvs.iter().fold(self, |c, &m| c.make_move(m))
    }

    /// Apply a single move in notation.
    pub fn make_move(self, mv: Move333) -> StickerCube {
        mv.canonicalize()
            .into_iter()
            .fold(self, |c, p| c.make_primitive(p))
    }

    // This function doesn't really need to be fast, validation is one pass per reconstruction
    /// Make a single quarter turn.
    pub fn make_primitive(self, p: Primitive) -> StickerCube {
        let (axis, layers, quarters) = p.ty.turn();
        let quarters = if p.inverse { 4 - quarters } else { quarters };
        let k = axis.component();

        let mut stickers = self.stickers;
        for (i, &colour) in self.stickers.iter().enumerate() {
            let (mut pos, mut normal) = sticker_at(i);
            let moves = match layers {
                Layers::One(layer) => pos[k] == layer,
                Layers::All => true,
            };
            if !moves {
                continue;
            }
            for _ in 0..quarters {
                pos = axis.clockwise(pos);
                normal = axis.clockwise(normal);
            }
            stickers[sticker_index(pos, normal)] = colour;
        }

        StickerCube { stickers }
    }
}

impl Simulator for StickerCube {
    fn solved() -> Self {
        Self::SOLVED
    }

    fn apply(self, canonical: &str) -> Result<Self, Error> {
        canonical
            .split_whitespace()
            .try_fold(self, |c, token| Ok(c.make_primitive(token.parse()?)))
    }

    fn is_solved(&self) -> bool {
        StickerCube::is_solved(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::parse::parse;

    fn after(alg: &str) -> StickerCube {
        StickerCube::SOLVED.make_moves(&parse(alg))
    }

    #[test]
    fn sticker_indices_round_trip() {
        for i in 0..54 {
            let (pos, normal) = sticker_at(i);
            assert_eq!(sticker_index(pos, normal), i);
        }
    }

    #[test]
    fn primitive_loops() {
        for p in "R L U D F B M E S X Y Z".split(' ') {
            let p: Primitive = p.parse().unwrap();
            let cube = (0..4).fold(StickerCube::SOLVED, |c, _| c.make_primitive(p));
            assert_eq!(cube, StickerCube::SOLVED, "{p}");
        }
    }

    #[test]
    fn inverse_primitive_undoes() {
        let cube = StickerCube::SOLVED.apply("F Ri M Y").unwrap();
        assert!(!cube.is_solved());
        assert_eq!(cube.apply("Yi Mi R Fi").unwrap(), StickerCube::SOLVED);
    }

    #[test]
    fn single_turns_scramble() {
        for p in "R L U D F B M E S".split(' ') {
            assert!(!StickerCube::SOLVED.apply(p).unwrap().is_solved(), "{p}");
        }
    }

    #[test]
    fn rotations_stay_solved() {
        let cube = StickerCube::SOLVED.apply("X Y Zi").unwrap();
        assert!(cube.is_solved());
        assert_ne!(cube, StickerCube::SOLVED);
    }

    #[test]
    fn r_turns_front_to_up() {
        let cube = after("R");
        // the R side of U now shows the F colour
        let u = cube.face(Face::U);
        assert_eq!(u[6..9], [Face::F; 3]);
        assert_eq!(u[..6], [Face::U; 6]);
    }

    #[test]
    fn slices_follow_their_faces() {
        // Turning the whole cube is the same as each of its layers
        assert_eq!(after("L M R'"), after("X'"));
        assert_eq!(after("D E U'"), after("Y'"));
        assert_eq!(after("F S B'"), after("Z"));
    }

    #[test]
    fn wide_moves_turn_two_layers() {
        assert_eq!(after("r"), after("L X"));
        assert_eq!(after("l"), after("R X'"));
        assert_eq!(after("u"), after("D Y"));
        assert_eq!(after("d"), after("U Y'"));
        assert_eq!(after("f"), after("B Z"));
        assert_eq!(after("b"), after("F Z'"));
        assert_eq!(after("r2'"), after("L2 X2"));
    }

    #[test]
    fn half_turn_direction_is_irrelevant() {
        assert_eq!(after("R2"), after("R2'"));
        assert_eq!(after("u2"), after("u2'"));
    }

    #[test]
    fn sexy_move_order_six() {
        let sexy = parse("R U R' U'");
        let cube = (0..6).fold(StickerCube::SOLVED, |c, _| c.make_moves(&sexy));
        assert_eq!(cube, StickerCube::SOLVED);
    }

    #[test]
    fn unknown_primitive() {
        assert_eq!(
            StickerCube::SOLVED.apply("R Q"),
            Err(Error::UnknownPrimitive("Q".to_owned()))
        );
        // Notation is not canonical
        assert!(StickerCube::SOLVED.apply("R'").is_err());
    }
}
