//! Slide directions
//!
//! A move names the direction the empty cell travels, not the tile.

use std::fmt;

/// Direction the empty cell moves during a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta applied to the empty cell
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The move that undoes this one
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Upper-case label used in step listings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            assert_ne!(mv.opposite(), mv);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for mv in Move::ALL {
            let (dr, dc) = mv.offset();
            let (or, oc) = mv.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn expansion_order() {
        assert_eq!(Move::ALL, [Move::Up, Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn display_labels() {
        assert_eq!(format!("{}", Move::Up), "UP");
        assert_eq!(format!("{}", Move::Right), "RIGHT");
    }
}
