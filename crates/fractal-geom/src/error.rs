//! Argument errors for fractal generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = FractalError> = std::result::Result<T, E>;

/// Errors raised when a generator or configuration is handed bad input.
///
/// Every variant is an invalid-argument rejection. They are all detected
/// before traversal begins, so a generator either fails up front or produces
/// its complete output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    /// A cube or square edge length was zero or negative.
    #[error("size must be positive, got {size}")]
    NonPositiveSize { size: f64 },

    /// A regular polygon radius was zero or negative.
    #[error("radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f64 },

    /// A coordinate, size, or scale was NaN or infinite.
    #[error("{what} must be finite")]
    NonFiniteInput { what: &'static str },

    /// The regular-polygon scale factor was outside the open interval (0, 1).
    #[error("scale must lie strictly between 0 and 1, got {scale}")]
    ScaleOutOfRange { scale: f64 },

    /// A polygon had fewer than three vertices.
    #[error("polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },

    /// A configured side count exceeded the supported maximum.
    #[error("at most {max} sides are supported, got {sides}")]
    TooManySides { sides: usize, max: usize },

    /// A configured max depth fell outside the supported bounds.
    #[error("max depth {depth} is outside {min}..={max}")]
    DepthOutOfRange { depth: u32, min: u32, max: u32 },
}

impl FractalError {
    /// Returns `true` for every variant; all failures are invalid arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveSize { .. }
                | Self::NonPositiveRadius { .. }
                | Self::NonFiniteInput { .. }
                | Self::ScaleOutOfRange { .. }
                | Self::TooFewSides { .. }
                | Self::TooManySides { .. }
                | Self::DepthOutOfRange { .. }
        )
    }
}

/// Rejects non-finite and non-positive edge lengths.
pub(crate) fn check_size(size: f64) -> Result<()> {
    if !size.is_finite() {
        log::trace!("rejected non-finite size {size}");
        return Err(FractalError::NonFiniteInput { what: "size" });
    }
    if size <= 0.0 {
        log::trace!("rejected non-positive size {size}");
        return Err(FractalError::NonPositiveSize { size });
    }
    Ok(())
}

/// Rejects scale factors outside the open interval (0, 1).
pub(crate) fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() {
        log::trace!("rejected non-finite scale {scale}");
        return Err(FractalError::NonFiniteInput { what: "scale" });
    }
    if scale <= 0.0 || scale >= 1.0 {
        log::trace!("rejected scale {scale}");
        return Err(FractalError::ScaleOutOfRange { scale });
    }
    Ok(())
}

/// Rejects side counts that cannot form a polygon.
pub(crate) fn check_sides(sides: usize) -> Result<()> {
    if sides < 3 {
        log::trace!("rejected polygon with {sides} sides");
        return Err(FractalError::TooFewSides { sides });
    }
    Ok(())
}

/// Rejects coordinate sets containing NaN or infinity.
pub(crate) fn check_finite<'a>(
    what: &'static str,
    coords: impl IntoIterator<Item = &'a f64>,
) -> Result<()> {
    if coords.into_iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        log::trace!("rejected non-finite {what}");
        Err(FractalError::NonFiniteInput { what })
    }
}
