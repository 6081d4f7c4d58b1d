//! The move catalog: every move that can be written on a 3x3x3, and how each one expands into
//! the quarter turns a simulator understands.

use std::fmt;
use std::str::FromStr;

use super::axis::Axis;
use crate::error::Error;
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each letter a move can be written with. Note that the `Move333` struct uses this
/// along with a [`Turn`] to represent moves such as R2 or u'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
    /// Middle slice, turns like L
    M,
    /// Equator slice, turns like D
    E,
    /// Standing slice, turns like F
    S,
    /// Whole cube rotation, turns like R
    X,
    /// Whole cube rotation, turns like U
    Y,
    /// Whole cube rotation, turns like F
    Z,
    /// Wide right, written `r`
    Rw,
    /// Wide left, written `l`
    Lw,
    /// Wide up, written `u`
    Uw,
    /// Wide down, written `d`
    Dw,
    /// Wide front, written `f`
    Fw,
    /// Wide back, written `b`
    Bw,
}

/// Every letter a move can be written with, and the move type it stands for. Case matters for face
/// letters (lowercase is a wide move) but not for rotations.
const SYMBOLS: [(char, Move333Type); 21] = [
    ('R', Move333Type::R),
    ('L', Move333Type::L),
    ('U', Move333Type::U),
    ('D', Move333Type::D),
    ('F', Move333Type::F),
    ('B', Move333Type::B),
    ('M', Move333Type::M),
    ('E', Move333Type::E),
    ('S', Move333Type::S),
    ('X', Move333Type::X),
    ('Y', Move333Type::Y),
    ('Z', Move333Type::Z),
    ('x', Move333Type::X),
    ('y', Move333Type::Y),
    ('z', Move333Type::Z),
    ('r', Move333Type::Rw),
    ('l', Move333Type::Lw),
    ('u', Move333Type::Uw),
    ('d', Move333Type::Dw),
    ('f', Move333Type::Fw),
    ('b', Move333Type::Bw),
];

impl Move333Type {
    /// All move types, faces first, then slices, rotations and wide moves.
    pub const ALL: [Move333Type; 18] = [
        Move333Type::R,
        Move333Type::L,
        Move333Type::U,
        Move333Type::D,
        Move333Type::F,
        Move333Type::B,
        Move333Type::M,
        Move333Type::E,
        Move333Type::S,
        Move333Type::X,
        Move333Type::Y,
        Move333Type::Z,
        Move333Type::Rw,
        Move333Type::Lw,
        Move333Type::Uw,
        Move333Type::Dw,
        Move333Type::Fw,
        Move333Type::Bw,
    ];

    /// Look a letter up in the symbol table.
    pub fn from_symbol(c: char) -> Option<Move333Type> {
        SYMBOLS.iter().find(|&&(s, _)| s == c).map(|&(_, ty)| ty)
    }

    /// The letter this move type is written with.
    pub fn symbol(self) -> char {
        match self {
            Move333Type::R => 'R',
            Move333Type::L => 'L',
            Move333Type::U => 'U',
            Move333Type::D => 'D',
            Move333Type::F => 'F',
            Move333Type::B => 'B',
            Move333Type::M => 'M',
            Move333Type::E => 'E',
            Move333Type::S => 'S',
            Move333Type::X => 'X',
            Move333Type::Y => 'Y',
            Move333Type::Z => 'Z',
            Move333Type::Rw => 'r',
            Move333Type::Lw => 'l',
            Move333Type::Uw => 'u',
            Move333Type::Dw => 'd',
            Move333Type::Fw => 'f',
            Move333Type::Bw => 'b',
        }
    }

    /// The axis this move turns about.
    pub fn axis(self) -> Axis {
        use Move333Type as MT;
        match self {
            MT::R | MT::L | MT::M | MT::X | MT::Rw | MT::Lw => Axis::LR,
            MT::U | MT::D | MT::E | MT::Y | MT::Uw | MT::Dw => Axis::UD,
            MT::F | MT::B | MT::S | MT::Z | MT::Fw | MT::Bw => Axis::FB,
        }
    }

    /// Whether this turns the whole cube rather than some of its layers.
    pub fn is_rotation(self) -> bool {
        matches!(self, Move333Type::X | Move333Type::Y | Move333Type::Z)
    }

    /// Whether this turns an outer layer together with the slice next to it.
    pub fn is_wide(self) -> bool {
        matches!(
            self,
            Move333Type::Rw
                | Move333Type::Lw
                | Move333Type::Uw
                | Move333Type::Dw
                | Move333Type::Fw
                | Move333Type::Bw
        )
    }

    /// The primitives a clockwise turn of this type is made of. The flag is set when the primitive
    /// has to be turned against the written direction.
    ///
    /// Slices turn like L, D and F, so the slice half of `r`, `u` and `b` is inverted.
    fn layers(self) -> &'static [(PrimitiveType, bool)] {
        use Move333Type as MT;
        use PrimitiveType as P;
        match self {
            MT::R => &[(P::R, false)],
            MT::L => &[(P::L, false)],
            MT::U => &[(P::U, false)],
            MT::D => &[(P::D, false)],
            MT::F => &[(P::F, false)],
            MT::B => &[(P::B, false)],
            MT::M => &[(P::M, false)],
            MT::E => &[(P::E, false)],
            MT::S => &[(P::S, false)],
            MT::X => &[(P::X, false)],
            MT::Y => &[(P::Y, false)],
            MT::Z => &[(P::Z, false)],
            MT::Rw => &[(P::R, false), (P::M, true)],
            MT::Lw => &[(P::L, false), (P::M, false)],
            MT::Uw => &[(P::U, false), (P::E, true)],
            MT::Dw => &[(P::D, false), (P::E, false)],
            MT::Fw => &[(P::F, false), (P::S, false)],
            MT::Bw => &[(P::B, false), (P::S, true)],
        }
    }
}

/// How far and which way a move turns. A half turn keeps the direction it was written with so
/// that `R2'` is displayed the way it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Turn {
    /// A quarter turn, e.g. `R`
    Clockwise,
    /// A half turn, e.g. `R2`
    Double,
    /// An inverted quarter turn, e.g. `R'`
    CounterClockwise,
    /// An inverted half turn, e.g. `R2'`
    DoubleCounterClockwise,
}

impl Turn {
    /// All turns, in the order their suffixes are usually listed.
    pub const ALL: [Turn; 4] = [
        Turn::Clockwise,
        Turn::Double,
        Turn::CounterClockwise,
        Turn::DoubleCounterClockwise,
    ];

    /// Build a turn from its two trailing markers, `2` and `'`.
    pub fn from_markers(double: bool, inverted: bool) -> Turn {
        match (double, inverted) {
            (false, false) => Turn::Clockwise,
            (true, false) => Turn::Double,
            (false, true) => Turn::CounterClockwise,
            (true, true) => Turn::DoubleCounterClockwise,
        }
    }

    /// Whether this is a half turn.
    pub fn is_double(self) -> bool {
        matches!(self, Turn::Double | Turn::DoubleCounterClockwise)
    }

    /// Whether this carries the inversion marker.
    pub fn is_inverted(self) -> bool {
        matches!(self, Turn::CounterClockwise | Turn::DoubleCounterClockwise)
    }

    /// The number of clockwise quarter turns this amounts to.
    pub fn quarters(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Double | Turn::DoubleCounterClockwise => 2,
            Turn::CounterClockwise => 3,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
            Turn::DoubleCounterClockwise => "2'",
        }
    }
}

/// Stores a move type and how it is turned. Every one of the 72 values has a notation symbol
/// (its `Display`) and a canonical expansion into [`Primitive`]s.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    pub turn: Turn,
}

/// Create a move by specifying a move type and a turn. Note that you do not need to specify for
/// example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident) => {
        $crate::mv!($ty, Clockwise)
    };
    ($ty:ident, $turn:ident) => {
        Move333 {
            ty: Move333Type::$ty,
            turn: Turn::$turn,
        }
    };
}

impl Move333 {
    /// Every move in the catalog.
    pub fn all() -> impl Iterator<Item = Move333> {
        Move333Type::ALL
            .into_iter()
            .flat_map(|ty| Turn::ALL.into_iter().map(move |turn| Move333 { ty, turn }))
    }

    /// Expand this move into the quarter turns a simulator understands.
    ///
    /// Half turns are two quarter turns. Wide moves are the outer layer followed by the slice
    /// next to it, and a doubled wide move doubles each of those.
    ///
    /// ```rust
    /// # fn main() {
    /// use cube_lib::mv;
    /// use cube_lib::cube333::moves::{Move333, Move333Type, Turn};
    ///
    /// assert_eq!(mv!(R, CounterClockwise).canonical_string(), "Ri");
    /// assert_eq!(mv!(U, Double).canonical_string(), "U U");
    /// assert_eq!(mv!(Rw, DoubleCounterClockwise).canonical_string(), "Ri Ri M M");
    /// # }
    /// ```
    pub fn canonicalize(self) -> Vec<Primitive> {
        let repeats = if self.turn.is_double() { 2 } else { 1 };
        let inverted = self.turn.is_inverted();
        self.ty
            .layers()
            .iter()
            .flat_map(|&(ty, against)| {
                let p = Primitive {
                    ty,
                    inverse: against != inverted,
                };
                std::iter::repeat(p).take(repeats)
            })
            .collect()
    }

    /// The canonical expansion written out, space separated.
    pub fn canonical_string(self) -> String {
        join(self.canonicalize())
    }
}

fn join(primitives: impl IntoIterator<Item = Primitive>) -> String {
    primitives
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::DoubleCounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::DoubleCounterClockwise => Turn::Double,
        };
        Self { ty: self.ty, turn }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let turn = match (self.turn.quarters() + b.turn.quarters()) % 4 {
                0 => return Cancellation::NoMove,
                1 => Turn::Clockwise,
                2 => Turn::Double,
                _ => Turn::CounterClockwise,
            };
            Cancellation::OneMove(Move333 { ty: self.ty, turn })
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ty.symbol(), self.turn.suffix())
    }
}

// I don't want to have the default derive debug for this!
impl fmt::Debug for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Looks a single symbol such as `R2'` up in the catalog.
impl FromStr for Move333 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ty = chars
            .next()
            .and_then(Move333Type::from_symbol)
            .ok_or_else(|| Error::InvalidMove(s.to_owned()))?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::CounterClockwise,
            "2'" => Turn::DoubleCounterClockwise,
            _ => return Err(Error::InvalidMove(s.to_owned())),
        };
        Ok(Move333 { ty, turn })
    }
}

impl MoveSequence<Move333> {
    /// The canonical expansion of every move, in order, space separated. This is what a
    /// [`Simulator`](crate::simulator::Simulator) is fed.
    pub fn canonical_string(&self) -> String {
        join(self.iter().flat_map(|m| m.canonicalize()))
    }

    /// The notation symbol of every move, in order.
    pub fn symbols(&self) -> Vec<String> {
        self.iter().map(|m| m.to_string()).collect()
    }
}

/// Generate `n` moves picked uniformly from the catalog, leaving out whole cube rotations.
pub fn random_sequence(n: usize, rng: &mut fastrand::Rng) -> MoveSequence<Move333> {
    let candidates: Vec<Move333> = Move333::all().filter(|m| !m.ty.is_rotation()).collect();
    MoveSequence(
        (0..n)
            .map(|_| candidates[rng.usize(..candidates.len())])
            .collect(),
    )
}

/// The letters a simulator turns natively: faces, slices and rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PrimitiveType {
    R,
    L,
    U,
    D,
    F,
    B,
    M,
    E,
    S,
    X,
    Y,
    Z,
}

impl PrimitiveType {
    fn letter(self) -> char {
        match self {
            PrimitiveType::R => 'R',
            PrimitiveType::L => 'L',
            PrimitiveType::U => 'U',
            PrimitiveType::D => 'D',
            PrimitiveType::F => 'F',
            PrimitiveType::B => 'B',
            PrimitiveType::M => 'M',
            PrimitiveType::E => 'E',
            PrimitiveType::S => 'S',
            PrimitiveType::X => 'X',
            PrimitiveType::Y => 'Y',
            PrimitiveType::Z => 'Z',
        }
    }

    fn from_letter(c: char) -> Option<PrimitiveType> {
        Some(match c {
            'R' => PrimitiveType::R,
            'L' => PrimitiveType::L,
            'U' => PrimitiveType::U,
            'D' => PrimitiveType::D,
            'F' => PrimitiveType::F,
            'B' => PrimitiveType::B,
            'M' => PrimitiveType::M,
            'E' => PrimitiveType::E,
            'S' => PrimitiveType::S,
            'X' => PrimitiveType::X,
            'Y' => PrimitiveType::Y,
            'Z' => PrimitiveType::Z,
            _ => return None,
        })
    }
}

/// A single quarter turn in canonical form, written `R` or `Ri` for the inverse.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Primitive {
    pub ty: PrimitiveType,
    pub inverse: bool,
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverse {
            write!(f, "{}i", self.ty.letter())
        } else {
            write!(f, "{}", self.ty.letter())
        }
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ty = chars.next().and_then(PrimitiveType::from_letter);
        match (ty, chars.as_str()) {
            (Some(ty), "") => Ok(Primitive { ty, inverse: false }),
            (Some(ty), "i") => Ok(Primitive { ty, inverse: true }),
            _ => Err(Error::UnknownPrimitive(s.to_owned())),
        }
    }
}
