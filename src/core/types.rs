use serde::{Deserialize, Serialize};

/// Measured extent of a box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in pixel space: origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The numeric extent an axis currently maps to pixel space.
///
/// A vertically-inverted axis stores `start > end`, putting the smaller
/// value at the visual top. Consumers that need sorted bounds go through
/// [`NumberRange::min`] / [`NumberRange::max`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub start: f64,
    pub end: f64,
}

impl NumberRange {
    /// Sentinel carried by a chart before the first real domain computation.
    pub const UNINIT: Self = Self {
        start: f64::MIN_POSITIVE,
        end: f64::MAX,
    };

    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_initialized(self) -> bool {
        self != Self::UNINIT
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.start.min(self.end)
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.start.max(self.end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

/// One chart data sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub x: f64,
    pub y: f64,
}

impl Item {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Selects one coordinate of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coord {
    X,
    Y,
}

impl Coord {
    #[must_use]
    pub fn of(self, item: &Item) -> f64 {
        match self {
            Self::X => item.x,
            Self::Y => item.y,
        }
    }
}

/// A named, colored ordered series of samples.
///
/// `color_group_name` is the identity key used by hosts to resolve the
/// series color from their palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color_group_name: String,
    pub line_name: String,
    pub values: Vec<Item>,
    pub with_dots: bool,
}

impl Line {
    #[must_use]
    pub fn new(color_group_name: impl Into<String>, values: Vec<Item>) -> Self {
        let color_group_name = color_group_name.into();
        Self {
            line_name: color_group_name.clone(),
            color_group_name,
            values,
            with_dots: false,
        }
    }
}
