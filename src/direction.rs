//! The eight straight-line directions a word can run in.

/// The direction a word is placed in inside the word search grid.
///
/// Rows grow downwards and columns grow to the right, so [`WordDirection::Up`] decreases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordDirection {
    /// The word goes right from the start position.
    Right,

    /// The word goes left from the start position.
    Left,

    /// The word goes down from the start position.
    Down,

    /// The word goes up from the start position.
    Up,

    /// The word goes diagonally down and right from the start position.
    DiagonalDownRight,

    /// The word goes diagonally down and left from the start position.
    DiagonalDownLeft,

    /// The word goes diagonally up and right from the start position.
    DiagonalUpRight,

    /// The word goes diagonally up and left from the start position.
    DiagonalUpLeft,
}

impl WordDirection {
    /// Every direction, in the order the generator scans them.
    pub const ALL: [WordDirection; 8] = [
        WordDirection::Right,
        WordDirection::Left,
        WordDirection::Down,
        WordDirection::Up,
        WordDirection::DiagonalDownRight,
        WordDirection::DiagonalDownLeft,
        WordDirection::DiagonalUpRight,
        WordDirection::DiagonalUpLeft,
    ];

    /// The `(row, column)` unit step of this direction.
    pub fn step(self) -> (isize, isize) {
        use WordDirection::*;

        match self {
            Right => (0, 1),
            Left => (0, -1),
            Down => (1, 0),
            Up => (-1, 0),
            DiagonalDownRight => (1, 1),
            DiagonalDownLeft => (1, -1),
            DiagonalUpRight => (-1, 1),
            DiagonalUpLeft => (-1, -1),
        }
    }

    /// Looks up the direction with the given unit step. `(0, 0)` and anything outside `-1..=1` has none.
    pub fn from_step(step: (isize, isize)) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.step() == step)
    }

    /// The direction whose step is the sign of each component of `delta`.
    ///
    /// Returns [`None`] for a zero delta. Note that the result says nothing about whether `delta` is a
    /// perfect 45° line; see [`WordDirection::is_diagonal`].
    pub fn from_delta(delta: (isize, isize)) -> Option<Self> {
        Self::from_step((delta.0.signum(), delta.1.signum()))
    }

    /// Whether both components of the step are non-zero.
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.step();
        dr != 0 && dc != 0
    }

    /// The direction pointing the opposite way.
    pub fn reversed(self) -> Self {
        use WordDirection::*;

        match self {
            Right => Left,
            Left => Right,
            Down => Up,
            Up => Down,
            DiagonalDownRight => DiagonalUpLeft,
            DiagonalUpLeft => DiagonalDownRight,
            DiagonalDownLeft => DiagonalUpRight,
            DiagonalUpRight => DiagonalDownLeft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WordDirection;

    #[test]
    fn steps_are_distinct_unit_vectors() {
        for (i, a) in WordDirection::ALL.iter().enumerate() {
            let (dr, dc) = a.step();
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));

            for b in &WordDirection::ALL[i + 1..] {
                assert_ne!(a.step(), b.step());
            }
        }
    }

    #[test]
    fn zero_delta_has_no_direction() {
        assert_eq!(WordDirection::from_delta((0, 0)), None);
        assert_eq!(WordDirection::from_step((2, 0)), None);
    }

    #[test]
    fn delta_uses_sign_of_each_axis() {
        assert_eq!(WordDirection::from_delta((0, 7)), Some(WordDirection::Right));
        assert_eq!(WordDirection::from_delta((-3, 0)), Some(WordDirection::Up));
        assert_eq!(
            WordDirection::from_delta((2, 5)),
            Some(WordDirection::DiagonalDownRight)
        );
        assert_eq!(
            WordDirection::from_delta((-4, -4)),
            Some(WordDirection::DiagonalUpLeft)
        );
    }

    #[test]
    fn reversed_negates_step() {
        for dir in WordDirection::ALL {
            let (dr, dc) = dir.step();
            assert_eq!(dir.reversed().step(), (-dr, -dc));
            assert_eq!(dir.reversed().reversed(), dir);
        }
    }
}
