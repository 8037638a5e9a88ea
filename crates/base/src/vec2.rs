use std::{fmt, ops::Mul};

/// Two-component vector, used for pixel sizes and screen coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Mul<Output = T> + Copy> Vec2<T> {
    /// Number of cells covered by a size, `x * y`.
    pub fn area(self) -> T {
        self.x * self.y
    }
}

impl Vec2<usize> {
    /// True if `point` lies inside a rectangle of this size anchored at the origin.
    pub fn contains(self, point: Vec2<i32>) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as usize) < self.x && (point.y as usize) < self.y
    }
}
