use serde::{Deserialize, Serialize};

use crate::core::types::NumberRange;
use crate::error::{VizError, VizResult};

/// Linear mapping between a numeric domain and a pixel range.
///
/// Either side may be stored in reversed order; the y-axis of a chart runs
/// `height-1 → 0` so the bottom grid line lands inside the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: NumberRange,
    range: NumberRange,
}

impl LinearScale {
    pub fn new(domain: NumberRange, range: NumberRange) -> VizResult<Self> {
        if !domain.start.is_finite() || !domain.end.is_finite() || domain.span() == 0.0 {
            return Err(VizError::InvalidScale(
                "domain must be finite with a non-zero span".to_owned(),
            ));
        }

        if !range.start.is_finite() || !range.end.is_finite() || range.span() == 0.0 {
            return Err(VizError::InvalidScale(
                "range must be finite with a non-zero span".to_owned(),
            ));
        }

        Ok(Self { domain, range })
    }

    /// Horizontal scale over `[0, width]`.
    pub fn x_scale(domain: NumberRange, width: f64) -> VizResult<Self> {
        Self::new(domain, NumberRange::new(0.0, width))
    }

    /// Vertical scale over `[height-1, 0]`, inverted so y grows upward in
    /// domain terms while pixels grow downward.
    pub fn y_scale(domain: NumberRange, height: f64) -> VizResult<Self> {
        Self::new(domain, NumberRange::new(height - 1.0, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> NumberRange {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> NumberRange {
        self.range
    }

    /// Maps a domain value to a pixel offset.
    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        let normalized = (value - self.domain.start) / self.domain.span();
        self.range.start + normalized * self.range.span()
    }

    /// Maps a pixel offset back to a domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range.start) / self.range.span();
        self.domain.start + normalized * self.domain.span()
    }

    /// Replaces the domain, keeping the pixel range.
    #[must_use]
    pub fn with_domain(self, domain: NumberRange) -> Self {
        Self {
            domain,
            range: self.range,
        }
    }
}

/// Affine zoom/pan transform supplied by the gesture layer.
///
/// Pixels map through `px' = k * px + x` (or `+ y` for the vertical axis),
/// matching the transform convention of browser zoom behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn new(k: f64, x: f64, y: f64) -> VizResult<Self> {
        if !k.is_finite() || k <= 0.0 {
            return Err(VizError::InvalidData(
                "zoom scale must be finite and > 0".to_owned(),
            ));
        }

        if !x.is_finite() || !y.is_finite() {
            return Err(VizError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }

        Ok(Self { k, x, y })
    }

    #[must_use]
    fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.x) / self.k
    }

    #[must_use]
    fn invert_y(self, pixel: f64) -> f64 {
        (pixel - self.y) / self.k
    }

    /// Re-derives a horizontal scale whose domain reflects this transform.
    #[must_use]
    pub fn rescale_x(self, scale: LinearScale) -> LinearScale {
        let range = scale.range();
        scale.with_domain(NumberRange::new(
            scale.invert(self.invert_x(range.start)),
            scale.invert(self.invert_x(range.end)),
        ))
    }

    /// Re-derives a vertical scale whose domain reflects this transform.
    #[must_use]
    pub fn rescale_y(self, scale: LinearScale) -> LinearScale {
        let range = scale.range();
        scale.with_domain(NumberRange::new(
            scale.invert(self.invert_y(range.start)),
            scale.invert(self.invert_y(range.end)),
        ))
    }
}
