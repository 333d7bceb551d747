use super::error::GridError;
use super::grid::{GridDimensions, OpacityGrid};
use crate::state::Point;

/// Dense row-major alpha buffer.
///
/// Holds either a level mask or a sprite mask. Level masks are mutated between
/// ticks by terrain damage ([`AlphaMask::erode_disc`]); the engine itself only
/// reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaMask {
    dimensions: GridDimensions,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Alpha assigned to `#` in [`AlphaMask::from_ascii`].
    pub const OPAQUE: u8 = u8::MAX;
    /// Alpha assigned to `+` in [`AlphaMask::from_ascii`]: visible but not solid.
    pub const TRANSLUCENT: u8 = 100;

    /// Creates a fully transparent mask.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: u32, height: u32, alpha: u8) -> Result<Self, GridError> {
        let len = Self::checked_area(width, height)?;
        Ok(Self {
            dimensions: GridDimensions::new(width, height),
            alpha: vec![alpha; len],
        })
    }

    /// Wraps a row-major buffer holding one alpha byte per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `alpha.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, GridError> {
        let expected = Self::checked_area(width, height)?;
        if alpha.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: alpha.len(),
            });
        }

        Ok(Self {
            dimensions: GridDimensions::new(width, height),
            alpha,
        })
    }

    /// Builds a mask from text rows: `#` is opaque, `+` is translucent, `.` and
    /// space are transparent.
    ///
    /// # Errors
    ///
    /// Rows of unequal width and unknown characters are rejected.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut alpha = Vec::with_capacity(width * rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRows {
                    row: row_index,
                    expected: width,
                    actual,
                });
            }

            for (column, glyph) in row.chars().enumerate() {
                let value = match glyph {
                    '#' => Self::OPAQUE,
                    '+' => Self::TRANSLUCENT,
                    '.' | ' ' => 0,
                    _ => {
                        return Err(GridError::UnknownGlyph {
                            glyph,
                            row: row_index,
                            column,
                        });
                    }
                };
                alpha.push(value);
            }
        }

        let too_large = || GridError::TooLarge {
            width: u32::MAX,
            height: u32::MAX,
        };
        let width = u32::try_from(width).map_err(|_| too_large())?;
        let height = u32::try_from(rows.len()).map_err(|_| too_large())?;
        Self::from_raw(width, height, alpha)
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.alpha
    }

    /// Overwrites one pixel. Returns `false` when `point` lies outside the mask.
    pub fn set_alpha(&mut self, point: Point, alpha: u8) -> bool {
        match self.index(point) {
            Some(index) => {
                self.alpha[index] = alpha;
                true
            }
            None => false,
        }
    }

    /// Sets every in-bounds pixel of the rectangle to `alpha`.
    pub fn fill_rect(&mut self, origin: Point, width: u32, height: u32, alpha: u8) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set_alpha(origin.offset(dx, dy), alpha);
            }
        }
    }

    /// Wears away terrain around `center`.
    ///
    /// Every pixel at offset `(x, y)` with `x² + y² <= radius² + 1` loses
    /// `amount` alpha, saturating at zero. Returns the number of in-bounds
    /// pixels that were inside the disc.
    pub fn erode_disc(&mut self, center: Point, radius: i32, amount: u8) -> usize {
        if radius < 0 {
            return 0;
        }

        let limit = i64::from(radius) * i64::from(radius) + 1;
        let mut touched = 0;
        for x in -radius..=radius {
            for y in -radius..=radius {
                if i64::from(x) * i64::from(x) + i64::from(y) * i64::from(y) > limit {
                    continue;
                }
                if let Some(index) = self.index(center.offset(x, y)) {
                    self.alpha[index] = self.alpha[index].saturating_sub(amount);
                    touched += 1;
                }
            }
        }
        touched
    }

    fn index(&self, point: Point) -> Option<usize> {
        if !self.dimensions.contains(point) {
            return None;
        }
        Some(point.y as usize * self.dimensions.width as usize + point.x as usize)
    }

    fn checked_area(width: u32, height: u32) -> Result<usize, GridError> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::TooLarge { width, height })
    }
}

impl OpacityGrid for AlphaMask {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    fn alpha_at(&self, x: i32, y: i32) -> u8 {
        self.index(Point::new(x, y))
            .map_or(0, |index| self.alpha[index])
    }
}
