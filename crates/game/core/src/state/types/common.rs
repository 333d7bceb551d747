use core::fmt;
use core::ops::{Add, Sub};

/// Integer pixel coordinate.
///
/// Used both as an absolute level coordinate and as an offset relative to a
/// sprite's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `(dx, dy)`, clamped to the `i32` range.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Like [`Point::offset`], but `None` when either coordinate overflows.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Squared euclidean distance between two points.
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Horizontal orientation of a creature, used by renderers to pick a sprite.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal delta, or `None` when `dx` is zero.
    pub const fn from_dx(dx: i32) -> Option<Self> {
        if dx < 0 {
            Some(Self::Left)
        } else if dx > 0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_follows_sign_of_dx() {
        assert_eq!(Facing::from_dx(-3), Some(Facing::Left));
        assert_eq!(Facing::from_dx(2), Some(Facing::Right));
        assert_eq!(Facing::from_dx(0), None);
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Point::new(3, -1);
        let b = Point::new(0, 3);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
    }

    #[test]
    fn arithmetic_clamps_at_the_coordinate_range() {
        let edge = Point::new(i32::MAX, i32::MIN);

        assert_eq!(edge.offset(1, -1), edge);
        assert_eq!(edge + Point::new(5, 0), edge);
        assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MIN, 0));
        assert_eq!(edge.checked_offset(1, 0), None);
        assert_eq!(edge.checked_offset(-1, 1), Some(Point::new(i32::MAX - 1, i32::MIN + 1)));
        assert_eq!(
            Point::new(i32::MIN, 0).distance_squared(Point::new(i32::MAX, 0)),
            i64::MAX
        );
    }

    #[test]
    fn facing_parses_case_insensitively() {
        assert_eq!("LEFT".parse::<Facing>().unwrap(), Facing::Left);
        assert_eq!(Facing::Right.to_string(), "right");
    }
}
