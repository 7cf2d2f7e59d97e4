use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Item, NumberRange};

/// What the ticks are generated for. Guide values only join grid ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    Label,
    Grid,
}

/// One tick computation request for a single axis.
#[derive(Debug, Clone, Copy)]
pub struct TickRequest<'a> {
    pub items: &'a [Item],
    pub coord: Coord,
    pub domain: NumberRange,
    /// Maximum number of ticks; 0 disables the axis.
    pub budget: usize,
    /// Reference value force-included in grid ticks when in range.
    pub guide: Option<f64>,
    pub kind: TickKind,
}

/// Distinct coordinate values inside the domain bounds, sorted ascending.
#[must_use]
pub fn unique_values_in_domain(items: &[Item], coord: Coord, domain: NumberRange) -> Vec<f64> {
    let mut seen: IndexSet<OrderedFloat<f64>> = IndexSet::new();
    for item in items {
        let value = coord.of(item);
        if domain.contains(value) {
            seen.insert(OrderedFloat(value));
        }
    }

    let mut values: Vec<f64> = seen.into_iter().map(OrderedFloat::into_inner).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Ticks for the main (categorical) axis: values stay tied to real data
/// points. The distinct in-domain values are partitioned into `budget`
/// contiguous chunks and each chunk contributes its first element.
#[must_use]
pub fn main_tick_values(request: TickRequest<'_>) -> Vec<f64> {
    if !request.domain.is_initialized() || request.budget == 0 {
        return Vec::new();
    }

    let unique = unique_values_in_domain(request.items, request.coord, request.domain);
    if unique.is_empty() {
        return Vec::new();
    }

    let chunk_size = unique.len().div_ceil(request.budget);
    let picked: Vec<f64> = unique.chunks(chunk_size).map(|chunk| chunk[0]).collect();

    if picked.len() == 2 || matches!(request.budget, 1 | 2) {
        return first_and_last(&unique);
    }

    with_guide(picked, request)
}

/// Ticks for the secondary (continuous) axis: evenly spaced "nice" values
/// across the domain rather than data-aligned picks.
#[must_use]
pub fn secondary_tick_values(request: TickRequest<'_>) -> Vec<f64> {
    if !request.domain.is_initialized() || request.budget == 0 {
        return Vec::new();
    }

    let unique = unique_values_in_domain(request.items, request.coord, request.domain);
    let picked = nice_ticks(request.domain.start, request.domain.end, request.budget);

    if picked.len() == 2 || matches!(request.budget, 1 | 2) {
        return first_and_last(&unique);
    }

    with_guide(picked, request)
}

/// Sparse-budget override: extremes are always shown.
fn first_and_last(unique: &[f64]) -> Vec<f64> {
    match (unique.first(), unique.last()) {
        (Some(&first), Some(&last)) if first != last => vec![first, last],
        (Some(&first), Some(_)) => vec![first],
        _ => Vec::new(),
    }
}

fn with_guide(picked: Vec<f64>, request: TickRequest<'_>) -> Vec<f64> {
    let mut values = picked;

    if request.kind == TickKind::Grid {
        if let Some(guide) = request.guide {
            if request.domain.start <= guide {
                values.push(guide);
            }
        }
    }

    dedup_preserving_order(values)
}

fn dedup_preserving_order(values: Vec<f64>) -> Vec<f64> {
    let seen: IndexSet<OrderedFloat<f64>> = values.into_iter().map(OrderedFloat).collect();
    seen.into_iter().map(OrderedFloat::into_inner).collect()
}

const E10: f64 = 7.071_067_811_865_476;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = 1.414_213_562_373_095_1;

/// Step chooser for evenly spaced ticks: powers of ten times 1, 2 or 5.
/// Negative return values encode fractional steps as `-1/step`.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Up to roughly `count` round values covering `[start, stop]`.
/// A reversed input produces the same ticks in reversed order.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }

    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = if step > 0.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inverse = -step;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    };

    if reverse {
        ticks.reverse();
    }

    ticks
}
