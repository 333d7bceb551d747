use crate::state::Point;

/// Per-pixel alpha source addressed by level or sprite coordinates.
///
/// Implementations must answer any coordinate: reads outside the grid return
/// `0` (fully transparent) instead of failing.
pub trait OpacityGrid {
    fn dimensions(&self) -> GridDimensions;

    /// Alpha in `0..=255` at `(x, y)`, or `0` outside the grid.
    fn alpha_at(&self, x: i32, y: i32) -> u8;

    fn contains(&self, point: Point) -> bool {
        self.dimensions().contains(point)
    }

    /// True when the pixel at `point` is strictly more opaque than `threshold`.
    #[inline]
    fn is_solid(&self, point: Point, threshold: u8) -> bool {
        self.alpha_at(point.x, point.y) > threshold
    }
}

impl<G: OpacityGrid + ?Sized> OpacityGrid for &G {
    fn dimensions(&self) -> GridDimensions {
        (**self).dimensions()
    }

    fn alpha_at(&self, x: i32, y: i32) -> u8 {
        (**self).alpha_at(x, y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && i64::from(point.x) < i64::from(self.width)
            && i64::from(point.y) < i64::from(self.height)
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let dims = GridDimensions::new(3, 2);
        assert!(dims.contains(Point::new(0, 0)));
        assert!(dims.contains(Point::new(2, 1)));
        assert!(!dims.contains(Point::new(3, 1)));
        assert!(!dims.contains(Point::new(2, 2)));
        assert!(!dims.contains(Point::new(-1, 0)));
    }

    #[test]
    fn zero_sized_dimensions_are_empty() {
        assert!(GridDimensions::new(0, 4).is_empty());
        assert!(!GridDimensions::new(1, 1).is_empty());
        assert_eq!(GridDimensions::new(4, 5).area(), 20);
    }
}
