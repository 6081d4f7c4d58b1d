//! Axes of the cube and quarter turns about them.

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Front-Back axis
    FB,
    /// Left-Right axis
    LR,
    /// Up-Down axis
    UD,
}

/// A point or direction in cube space. `x` points from L to R, `y` from D to U and `z` from B to
/// F, so every cubie sits in `{-1, 0, 1}^3`.
pub(crate) type Vec3 = [i8; 3];

impl Axis {
    /// Which component of a [`Vec3`] measures distance along this axis.
    pub(crate) fn component(self) -> usize {
        match self {
            Axis::LR => 0,
            Axis::UD => 1,
            Axis::FB => 2,
        }
    }

    /// Rotate a vector by a quarter turn about this axis, clockwise when looking at the R, U or F
    /// face respectively.
    pub(crate) fn clockwise(self, [x, y, z]: Vec3) -> Vec3 {
        match self {
            Axis::LR => [x, z, -y],
            Axis::UD => [-z, y, x],
            Axis::FB => [y, -x, z],
        }
    }

    /// The axis a unit vector lies on.
    pub(crate) fn of(v: Vec3) -> Axis {
        match v {
            [_, 0, 0] => Axis::LR,
            [0, _, 0] => Axis::UD,
            _ => Axis::FB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [Axis; 3] = [Axis::FB, Axis::LR, Axis::UD];

    #[test]
    fn four_quarters_is_identity() {
        let v = [1, -1, 0];
        for axis in AXES {
            let turned = (0..4).fold(v, |v, _| axis.clockwise(v));
            assert_eq!(turned, v);
        }
    }

    #[test]
    fn clockwise_directions() {
        // R takes the front of the cube to the top
        assert_eq!(Axis::LR.clockwise([0, 0, 1]), [0, 1, 0]);
        // U takes the front of the cube to the left
        assert_eq!(Axis::UD.clockwise([0, 0, 1]), [-1, 0, 0]);
        // F takes the top of the cube to the right
        assert_eq!(Axis::FB.clockwise([0, 1, 0]), [1, 0, 0]);
    }

    #[test]
    fn turning_keeps_the_axis_component() {
        for axis in AXES {
            let v = [1, 0, -1];
            assert_eq!(axis.clockwise(v)[axis.component()], v[axis.component()]);
        }
    }
}
