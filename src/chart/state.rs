use serde::{Deserialize, Serialize};

use crate::core::types::{NumberRange, Size};

/// Engine lifecycle, derived from the domain sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPhase {
    Uninitialized,
    Initialized,
}

/// Reserved space for axis labels, in pixels.
///
/// `x` is carved off the plot width (secondary-axis labels on the side),
/// `y` off the plot height (main-axis labels below or above).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddings {
    pub x: f64,
    pub y: f64,
}

impl Paddings {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The full mutable state of one chart instance.
///
/// Mutation happens exclusively through [`ChartState::apply`]; tween samples
/// feed the same reducer path as direct events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub x_domain: NumberRange,
    pub y_domain: NumberRange,
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub zoom: f64,
    pub x_guide_value: f64,
    pub y_guide_value: f64,
    pub active_hover_line: Option<f64>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            x_domain: NumberRange::UNINIT,
            y_domain: NumberRange::UNINIT,
            width: 0.0,
            height: 0.0,
            padding_x: 0.0,
            padding_y: 0.0,
            zoom: 1.0,
            x_guide_value: 0.0,
            y_guide_value: 0.0,
            active_hover_line: None,
        }
    }
}

/// Every way chart state can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    DomainsComputed {
        x_domain: NumberRange,
        y_domain: NumberRange,
        x_guide_value: f64,
        y_guide_value: f64,
    },
    Resized {
        width: f64,
        height: f64,
    },
    PaddingsChanged(Paddings),
    ZoomChanged(f64),
    XDomainChanged(NumberRange),
    YDomainChanged(NumberRange),
    HoverChanged(Option<f64>),
}

impl ChartState {
    /// Pure reducer: applies one event and returns the next state.
    #[must_use]
    pub fn apply(self, event: ChartEvent) -> Self {
        match event {
            ChartEvent::DomainsComputed {
                x_domain,
                y_domain,
                x_guide_value,
                y_guide_value,
            } => Self {
                x_domain,
                y_domain,
                x_guide_value,
                y_guide_value,
                ..self
            },
            ChartEvent::Resized { width, height } => Self {
                width,
                height,
                ..self
            },
            ChartEvent::PaddingsChanged(paddings) => Self {
                padding_x: paddings.x,
                padding_y: paddings.y,
                ..self
            },
            ChartEvent::ZoomChanged(zoom) => Self { zoom, ..self },
            ChartEvent::XDomainChanged(domain) => Self {
                x_domain: domain,
                ..self
            },
            ChartEvent::YDomainChanged(domain) => Self {
                y_domain: domain,
                ..self
            },
            ChartEvent::HoverChanged(value) => Self {
                active_hover_line: value,
                ..self
            },
        }
    }

    #[must_use]
    pub fn phase(self) -> ChartPhase {
        if self.x_domain.is_initialized() || self.y_domain.is_initialized() {
            ChartPhase::Initialized
        } else {
            ChartPhase::Uninitialized
        }
    }

    #[must_use]
    pub fn paddings(self) -> Paddings {
        Paddings::new(self.padding_x, self.padding_y)
    }

    /// Plot area left after axis labels take their share.
    #[must_use]
    pub fn plot_size(self) -> Size {
        Size::new(
            (self.width - self.padding_x).round(),
            (self.height - self.padding_y).round(),
        )
    }
}
