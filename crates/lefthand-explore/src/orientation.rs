//! The agent's relative-to-compass direction binding.

use std::error::Error;
use std::fmt;

use lefthand_core::Compass;

/// A direction relative to the agent's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relative {
    /// Straight ahead.
    Forward = 0,
    /// 90° anticlockwise from forward.
    Left = 1,
    /// Behind.
    Back = 2,
    /// 90° clockwise from forward.
    Right = 3,
}

impl Relative {
    /// All four labels in slot order.
    pub const ALL: [Relative; 4] = [
        Relative::Forward,
        Relative::Left,
        Relative::Back,
        Relative::Right,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Binding of the four [`Relative`] labels to distinct compass directions.
///
/// Held as four slots in `forward, left, back, right` order. Rotation is a
/// cyclic shift of the slots with the labels fixed, so every reachable
/// value stays a bijection.
///
/// # Examples
///
/// ```
/// use lefthand_core::Compass;
/// use lefthand_explore::{Orientation, Relative};
///
/// let o = Orientation::INITIAL.rotated_clockwise();
/// assert_eq!(o.get(Relative::Forward), Compass::East);
/// assert_eq!(o.get(Relative::Left), Compass::North);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    slots: [Compass; 4],
}

impl Orientation {
    /// Facing north: forward=N, left=W, back=S, right=E.
    pub const INITIAL: Orientation = Orientation {
        slots: [Compass::North, Compass::West, Compass::South, Compass::East],
    };

    /// Compass direction bound to `rel`.
    pub fn get(&self, rel: Relative) -> Compass {
        self.slots[rel.slot()]
    }

    /// Shorthand for `get(Relative::Forward)`.
    pub fn forward(&self) -> Compass {
        self.get(Relative::Forward)
    }

    /// Shorthand for `get(Relative::Left)`.
    pub fn left(&self) -> Compass {
        self.get(Relative::Left)
    }

    /// The slots in `forward, left, back, right` order.
    pub fn slots(&self) -> [Compass; 4] {
        self.slots
    }

    /// Turn 90° clockwise.
    ///
    /// `right` becomes `forward`, `forward` becomes `left`, `left` becomes
    /// `back`, `back` becomes `right`.
    #[must_use]
    pub fn rotated_clockwise(self) -> Self {
        let mut slots = self.slots;
        slots.rotate_right(1);
        Self { slots }
    }

    /// Turn 90° anticlockwise. Inverse of [`rotated_clockwise`](Self::rotated_clockwise).
    #[must_use]
    pub fn rotated_anticlockwise(self) -> Self {
        let mut slots = self.slots;
        slots.rotate_left(1);
        Self { slots }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TryFrom<[Compass; 4]> for Orientation {
    type Error = OrientationError;

    /// Accepts any assignment that uses each compass direction once.
    fn try_from(slots: [Compass; 4]) -> Result<Self, Self::Error> {
        let mut seen = 0u8;
        for dir in slots {
            seen |= dir.bit();
        }
        if seen != 0b1111 {
            return Err(OrientationError::NotABijection { slots });
        }
        Ok(Self { slots })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [fw, l, b, r] = self.slots;
        write!(f, "F={fw} L={l} B={b} R={r}")
    }
}

/// Errors from building an [`Orientation`] by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrientationError {
    /// Some compass direction is bound to more than one label.
    NotABijection {
        /// The rejected `forward, left, back, right` assignment.
        slots: [Compass; 4],
    },
}

impl fmt::Display for OrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotABijection { slots } => {
                write!(f, "orientation {slots:?} repeats a compass direction")
            }
        }
    }
}

impl Error for OrientationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use lefthand_core::Compass::{East as E, North as N, South as S, West as W};

    #[test]
    fn clockwise_from_north_faces_east() {
        let o = Orientation::INITIAL.rotated_clockwise();
        assert_eq!(o.slots(), [E, N, W, S]);
    }

    #[test]
    fn anticlockwise_from_north_faces_west() {
        let o = Orientation::INITIAL.rotated_anticlockwise();
        assert_eq!(o.slots(), [W, S, E, N]);
    }

    #[test]
    fn rotation_is_pure() {
        let o = Orientation::INITIAL;
        let _ = o.rotated_clockwise();
        assert_eq!(o, Orientation::INITIAL);
    }

    #[test]
    fn try_from_rejects_repeats() {
        assert_eq!(
            Orientation::try_from([N, N, S, E]),
            Err(OrientationError::NotABijection { slots: [N, N, S, E] })
        );
    }

    #[test]
    fn try_from_accepts_mirrored_binding() {
        // Mirror image of INITIAL: still a bijection, not a rotation of it.
        let o = Orientation::try_from([N, E, S, W]).unwrap();
        assert_eq!(o.rotated_clockwise().slots(), [W, N, E, S]);
    }

    #[test]
    fn display_lists_slots() {
        assert_eq!(Orientation::INITIAL.to_string(), "F=N L=W B=S R=E");
    }

    fn arb_orientation() -> impl Strategy<Value = Orientation> {
        Just(vec![N, S, E, W])
            .prop_shuffle()
            .prop_map(|v| Orientation::try_from([v[0], v[1], v[2], v[3]]).unwrap())
    }

    proptest! {
        #[test]
        fn four_clockwise_turns_are_identity(o in arb_orientation()) {
            let back = o
                .rotated_clockwise()
                .rotated_clockwise()
                .rotated_clockwise()
                .rotated_clockwise();
            prop_assert_eq!(back, o);
        }

        #[test]
        fn four_anticlockwise_turns_are_identity(o in arb_orientation()) {
            let back = o
                .rotated_anticlockwise()
                .rotated_anticlockwise()
                .rotated_anticlockwise()
                .rotated_anticlockwise();
            prop_assert_eq!(back, o);
        }

        #[test]
        fn rotations_are_mutual_inverses(o in arb_orientation()) {
            prop_assert_eq!(o.rotated_clockwise().rotated_anticlockwise(), o);
            prop_assert_eq!(o.rotated_anticlockwise().rotated_clockwise(), o);
        }

        #[test]
        fn rotations_preserve_bijection(o in arb_orientation()) {
            for turned in [o.rotated_clockwise(), o.rotated_anticlockwise()] {
                prop_assert!(Orientation::try_from(turned.slots()).is_ok());
            }
        }

        #[test]
        fn clockwise_promotes_right_to_forward(o in arb_orientation()) {
            let turned = o.rotated_clockwise();
            prop_assert_eq!(turned.get(Relative::Forward), o.get(Relative::Right));
            prop_assert_eq!(turned.get(Relative::Left), o.get(Relative::Forward));
            prop_assert_eq!(turned.get(Relative::Back), o.get(Relative::Left));
            prop_assert_eq!(turned.get(Relative::Right), o.get(Relative::Back));
        }
    }
}
