use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Item, Line, NumberRange};

/// Fractional padding applied to each side of a data extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPaddings {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Chart layout. Vertical layout rotates domain semantics by 90 degrees:
/// the value axis runs horizontally and 0 sits at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn paddings(self) -> DomainPaddings {
        match self {
            Self::Horizontal => DomainPaddings {
                top: 0.055,
                right: 0.06,
                bottom: 0.0,
                left: 0.0,
            },
            Self::Vertical => DomainPaddings {
                top: 0.04,
                right: 0.06,
                bottom: 0.04,
                left: 0.06,
            },
        }
    }
}

/// Pads each end of a domain by a fraction of its span, scaled by `1/zoom`
/// so padding shrinks as the user zooms in.
///
/// The formula is sign-preserving: reversed (inverted-axis) domains stay
/// reversed and grow outward on both ends.
#[must_use]
pub fn pad_domain(
    domain: NumberRange,
    padding_start: f64,
    padding_end: f64,
    zoom: f64,
) -> NumberRange {
    let delta = domain.span();

    NumberRange::new(
        domain.start - padding_start * delta * (1.0 / zoom),
        domain.end + padding_end * delta * (1.0 / zoom),
    )
}

/// Min/max extent of one coordinate, or `None` for empty input.
#[must_use]
pub fn extent(items: &[Item], coord: Coord) -> Option<NumberRange> {
    if items.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for item in items {
        let value = coord.of(item);
        min = min.min(value);
        max = max.max(value);
    }

    Some(NumberRange::new(min, max))
}

/// Padded x-axis domain. Empty input keeps the uninitialized sentinel.
#[must_use]
pub fn x_domain(items: &[Item], orientation: Orientation, zoom: f64) -> NumberRange {
    let paddings = orientation.paddings();
    match extent(items, Coord::X) {
        None => NumberRange::UNINIT,
        Some(extent) => pad_domain(extent, paddings.left, paddings.right, zoom),
    }
}

/// Padded y-axis domain. Under vertical layout the extent is reversed
/// before padding so that 0 renders at the top.
#[must_use]
pub fn y_domain(items: &[Item], orientation: Orientation, zoom: f64) -> NumberRange {
    let paddings = orientation.paddings();
    match extent(items, Coord::Y) {
        None => NumberRange::UNINIT,
        Some(extent) => {
            let extent = match orientation {
                Orientation::Vertical => extent.reversed(),
                Orientation::Horizontal => extent,
            };
            pad_domain(extent, paddings.bottom, paddings.top, zoom)
        }
    }
}

fn index_or(index: Option<usize>, fallback: usize) -> usize {
    index.unwrap_or(fallback)
}

/// Derives the secondary-axis domain from the points whose main-axis values
/// fall inside `[main_min, main_max]`.
///
/// Per line: boundary search keeps the last point at or below the minimum
/// and the first point at or beyond the maximum, so the visible sub-range
/// always includes its edge neighbors. The result is the min/max across all
/// per-line domains computed by `domain_of`.
#[must_use]
pub fn secondary_domain(
    main_min: f64,
    main_max: f64,
    lines: &[Line],
    main_value: impl Fn(&Item) -> f64,
    domain_of: impl Fn(&[Item]) -> NumberRange,
) -> NumberRange {
    let mut lower = f64::INFINITY;
    let mut upper = f64::NEG_INFINITY;
    let mut seen = false;

    for line in lines {
        let values = &line.values;
        if values.is_empty() {
            continue;
        }

        let from = index_or(values.iter().rposition(|v| main_value(v) <= main_min), 0);
        let to = index_or(
            values.iter().position(|v| main_value(v) >= main_max),
            values.len() - 1,
        );
        let (from, to) = (from.min(to), from.max(to));

        let domain = domain_of(&values[from..=to]);
        lower = lower.min(domain.start);
        upper = upper.max(domain.end);
        seen = true;
    }

    if !seen {
        return NumberRange::UNINIT;
    }

    NumberRange::new(lower, upper)
}
