//! Small shared value types.

/// A two dimensional size in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size2D {
    pub width: u32,
    pub height: u32,
}

impl Size2D {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size2D {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
