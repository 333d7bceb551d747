//! Grid construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building an [`super::AlphaMask`] from external data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Raw alpha buffer does not hold exactly `width * height` bytes.
    #[error("alpha buffer holds {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A text row is wider or narrower than the first one.
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A text row contains a character with no alpha meaning.
    #[error("unknown pixel glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },

    /// Requested dimensions do not fit the address space.
    #[error("grid of {width}x{height} pixels is too large")]
    TooLarge { width: u32, height: u32 },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GridError::LengthMismatch { .. }
            | GridError::RaggedRows { .. }
            | GridError::UnknownGlyph { .. } => ErrorSeverity::Validation,
            GridError::TooLarge { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::LengthMismatch { .. } => "GRID_LENGTH_MISMATCH",
            GridError::RaggedRows { .. } => "GRID_RAGGED_ROWS",
            GridError::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
            GridError::TooLarge { .. } => "GRID_TOO_LARGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AlphaMask;

    #[test]
    fn malformed_input_is_a_validation_error() {
        let err = AlphaMask::from_raw(2, 2, vec![0; 3]).unwrap_err();
        assert_eq!(err, GridError::LengthMismatch { expected: 4, actual: 3 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "GRID_LENGTH_MISMATCH");

        let err = AlphaMask::from_ascii(&["##", "#"]).unwrap_err();
        assert_eq!(err.error_code(), "GRID_RAGGED_ROWS");
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let err = AlphaMask::from_ascii(&["#?"]).unwrap_err();
        assert_eq!(err.error_code(), "GRID_UNKNOWN_GLYPH");
    }

    #[test]
    fn oversized_grid_is_fatal() {
        let err = GridError::TooLarge {
            width: u32::MAX,
            height: u32::MAX,
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "GRID_TOO_LARGE");
    }
}
