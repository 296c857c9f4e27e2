//! Grid positions and level-qualified coordinates.

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    #[cfg_attr(feature = "serde", serde(rename = "positionX"))]
    pub x: i32,
    #[cfg_attr(feature = "serde", serde(rename = "positionY"))]
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance: `|x1 - x2| + |y1 - y2|`.
    ///
    /// Fallback metric when the server has not reported a tile distance.
    #[inline]
    pub fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position qualified by the dungeon level it lies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: i32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Position,
}

impl Coordinates {
    pub const fn new(level: i32, position: Position) -> Self {
        Self { level, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_manhattan() {
        assert_eq!(Position::new(0, 0).distance(Position::new(3, 4)), 7);
        assert_eq!(Position::new(-2, 5).distance(Position::new(1, 1)), 7);
        assert_eq!(Position::new(4, 4).distance(Position::new(4, 4)), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Position::new(0, 0), Position::new(3, 4)),
            (Position::new(-7, 2), Position::new(5, -9)),
            (Position::new(10, 1), Position::new(1, 10)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance(b), b.distance(a));
        }
    }
}
