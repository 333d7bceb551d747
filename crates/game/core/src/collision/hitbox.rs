use std::collections::BTreeSet;

use crate::env::{GridDimensions, OpacityGrid};
use crate::state::Point;

/// Outline of a sprite's opaque region, relative to its top-left corner.
///
/// Only the silhouette edge is stored, never the filled interior. Points are
/// unique and kept in row-major order (y ascending, then x ascending).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    points: Vec<Point>,
    /// Size of the sprite the outline was traced from.
    dimensions: GridDimensions,
}

impl Hitbox {
    /// Builds a hitbox from arbitrary points, removing duplicates and sorting
    /// them into canonical order.
    pub fn from_points(points: impl IntoIterator<Item = Point>, dimensions: GridDimensions) -> Self {
        let unique: BTreeSet<(i32, i32)> = points.into_iter().map(|p| (p.y, p.x)).collect();
        Self {
            points: unique.into_iter().map(|(y, x)| Point::new(x, y)).collect(),
            dimensions,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// An empty hitbox never collides with anything.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points
            .binary_search_by_key(&(point.y, point.x), |p| (p.y, p.x))
            .is_ok()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Height of the source sprite in pixels.
    pub fn sprite_height(&self) -> i32 {
        i32::try_from(self.dimensions.height).unwrap_or(i32::MAX)
    }
}

/// Traces the outline of every pixel with non-zero alpha in `sprite`.
///
/// Each row is scanned from both ends and each column from both ends; the
/// first opaque pixel met by every scan belongs to the outline. Rows and
/// columns with no opaque pixel contribute nothing.
pub fn extract_outline<G>(sprite: &G) -> Hitbox
where
    G: OpacityGrid + ?Sized,
{
    let dimensions = sprite.dimensions();
    let width = i32::try_from(dimensions.width).unwrap_or(i32::MAX);
    let height = i32::try_from(dimensions.height).unwrap_or(i32::MAX);
    let opaque = |x: i32, y: i32| sprite.alpha_at(x, y) > 0;

    let mut outline = Vec::new();

    for y in 0..height {
        if let Some(x) = (0..width).find(|&x| opaque(x, y)) {
            outline.push(Point::new(x, y));
        }
        if let Some(x) = (0..width).rev().find(|&x| opaque(x, y)) {
            outline.push(Point::new(x, y));
        }
    }

    for x in 0..width {
        if let Some(y) = (0..height).find(|&y| opaque(x, y)) {
            outline.push(Point::new(x, y));
        }
        if let Some(y) = (0..height).rev().find(|&y| opaque(x, y)) {
            outline.push(Point::new(x, y));
        }
    }

    Hitbox::from_points(outline, dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AlphaMask;

    #[test]
    fn transparent_sprite_has_empty_outline() {
        let sprite = AlphaMask::new(6, 4).unwrap();
        let hitbox = extract_outline(&sprite);

        assert!(hitbox.is_empty());
        assert_eq!(hitbox.dimensions(), GridDimensions::new(6, 4));
    }

    #[test]
    fn single_pixel_sprite_yields_that_pixel() {
        let sprite = AlphaMask::from_ascii(&["...", ".#.", "..."]).unwrap();
        let hitbox = extract_outline(&sprite);

        assert_eq!(hitbox.points(), &[Point::new(1, 1)]);
    }

    #[test]
    fn square_keeps_twelve_boundary_pixels() {
        let sprite = AlphaMask::from_ascii(&[
            "......", //
            ".####.",
            ".####.",
            ".####.",
            ".####.",
            "......",
        ])
        .unwrap();
        let hitbox = extract_outline(&sprite);

        assert_eq!(hitbox.len(), 12);
        assert!(!hitbox.contains(Point::new(2, 2)));
        assert!(!hitbox.contains(Point::new(3, 3)));
        for corner in [(1, 1), (4, 1), (1, 4), (4, 4)] {
            assert!(hitbox.contains(corner.into()));
        }
    }

    #[test]
    fn translucent_pixels_count_as_outline() {
        let sprite = AlphaMask::from_ascii(&["+##"]).unwrap();
        let hitbox = extract_outline(&sprite);

        assert!(hitbox.contains(Point::new(0, 0)));
        assert!(hitbox.contains(Point::new(2, 0)));
    }

    #[test]
    fn outline_is_in_row_major_order() {
        let sprite = AlphaMask::from_ascii(&[
            ".#.", //
            "###",
            ".#.",
        ])
        .unwrap();
        let hitbox = extract_outline(&sprite);

        assert_eq!(
            hitbox.points(),
            &[
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn every_scan_line_contributes_its_extremes() {
        let sprite = AlphaMask::from_ascii(&[
            "..##..", //
            ".#..#.",
            "#....#",
            ".####.",
        ])
        .unwrap();
        let hitbox = extract_outline(&sprite);
        let dims = sprite.dimensions();

        for y in 0..dims.height as i32 {
            let row: Vec<i32> = (0..dims.width as i32)
                .filter(|&x| sprite.alpha_at(x, y) > 0)
                .collect();
            if let (Some(&first), Some(&last)) = (row.first(), row.last()) {
                assert!(hitbox.contains(Point::new(first, y)));
                assert!(hitbox.contains(Point::new(last, y)));
            }
        }
        for x in 0..dims.width as i32 {
            let column: Vec<i32> = (0..dims.height as i32)
                .filter(|&y| sprite.alpha_at(x, y) > 0)
                .collect();
            if let (Some(&first), Some(&last)) = (column.first(), column.last()) {
                assert!(hitbox.contains(Point::new(x, first)));
                assert!(hitbox.contains(Point::new(x, last)));
            }
        }
    }
}
