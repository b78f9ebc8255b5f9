//! Cardinal directions over the output field

/// One of the four cardinal neighbor directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing `y`
    Up,
    /// Toward increasing `y`
    Down,
    /// Toward decreasing `x`
    Left,
    /// Toward increasing `x`
    Right,
}

impl Direction {
    /// Every direction, in the order candidate filtering applies them
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Small-integer index for array-of-four layouts
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Coordinates one step away, or `None` when the step leaves the field
    pub fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up => y.checked_sub(1).map(|ny| (x, ny)),
            Self::Down => (y + 1 < height).then_some((x, y + 1)),
            Self::Left => x.checked_sub(1).map(|nx| (nx, y)),
            Self::Right => (x + 1 < width).then_some((x + 1, y)),
        }
    }
}
