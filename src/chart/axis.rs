use serde::{Deserialize, Serialize};

use crate::chart::state::{ChartEvent, ChartState};
use crate::core::domain::{Orientation, x_domain, y_domain};
use crate::core::scale::{LinearScale, ZoomTransform};
use crate::core::types::{Coord, Item, NumberRange};
use crate::error::VizResult;

/// Which role a state axis plays for interaction: the zoom gesture drives
/// the main axis directly, the secondary axis follows the visible data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    Main,
    Secondary,
}

/// A concrete state axis, resolved once from the chart orientation.
///
/// Carries the domain accessors, value accessor, and scale construction for
/// one axis so the engine never re-branches on orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisBinding {
    X,
    Y,
}

impl AxisBinding {
    #[must_use]
    pub fn domain(self, state: &ChartState) -> NumberRange {
        match self {
            Self::X => state.x_domain,
            Self::Y => state.y_domain,
        }
    }

    #[must_use]
    pub fn set_domain(self, domain: NumberRange) -> ChartEvent {
        match self {
            Self::X => ChartEvent::XDomainChanged(domain),
            Self::Y => ChartEvent::YDomainChanged(domain),
        }
    }

    #[must_use]
    pub fn guide_value(self, state: &ChartState) -> f64 {
        match self {
            Self::X => state.x_guide_value,
            Self::Y => state.y_guide_value,
        }
    }

    /// Which item coordinate this axis reads.
    #[must_use]
    pub fn coord(self) -> Coord {
        match self {
            Self::X => Coord::X,
            Self::Y => Coord::Y,
        }
    }

    /// Pixel extent available to this axis inside the plot area.
    #[must_use]
    pub fn plot_extent(self, state: &ChartState) -> f64 {
        let plot = state.plot_size();
        match self {
            Self::X => plot.width,
            Self::Y => plot.height,
        }
    }

    /// Padded data-driven domain for this axis.
    #[must_use]
    pub fn padded_domain(self, items: &[Item], orientation: Orientation, zoom: f64) -> NumberRange {
        match self {
            Self::X => x_domain(items, orientation, zoom),
            Self::Y => y_domain(items, orientation, zoom),
        }
    }

    /// Scale over the given domain and this axis's pixel convention.
    pub fn scale(self, domain: NumberRange, extent: f64) -> VizResult<LinearScale> {
        match self {
            Self::X => LinearScale::x_scale(domain, extent),
            Self::Y => LinearScale::y_scale(domain, extent),
        }
    }

    /// Applies a gesture transform along this axis.
    #[must_use]
    pub fn rescale(self, transform: ZoomTransform, scale: LinearScale) -> LinearScale {
        match self {
            Self::X => transform.rescale_x(scale),
            Self::Y => transform.rescale_y(scale),
        }
    }
}

/// Main/secondary pair fixed at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBindings {
    pub main: AxisBinding,
    pub secondary: AxisBinding,
}

impl AxisBindings {
    #[must_use]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                main: AxisBinding::X,
                secondary: AxisBinding::Y,
            },
            Orientation::Vertical => Self {
                main: AxisBinding::Y,
                secondary: AxisBinding::X,
            },
        }
    }

    #[must_use]
    pub fn get(self, role: AxisRole) -> AxisBinding {
        match role {
            AxisRole::Main => self.main,
            AxisRole::Secondary => self.secondary,
        }
    }
}
