//! The linear chart engine: explicit state machine plus tween scheduler.

pub mod axis;
pub mod engine;
pub mod state;
pub mod tween;

pub use axis::{AxisBinding, AxisBindings, AxisRole};
pub use engine::{
    AxisGridConfig, ChartConfig, ChartTicks, GridConfig, HoverPoint, LinearChart,
    SIZE_TRANSITION_MS, ZOOM_TRANSITION_MS,
};
pub use state::{ChartEvent, ChartPhase, ChartState, Paddings};
pub use tween::{Lerp, Tween};
