//! dashviz: computation core for dashboard widgets.
//!
//! Two independent engines share this crate: a tooltip placement engine
//! (pure geometry with a deterministic fallback search) and a linear-chart
//! engine (padded axis domains, budgeted tick generation, gesture-driven
//! zoom with tweened domain transitions).

pub mod chart;
pub mod core;
pub mod error;
pub mod interaction;
pub mod placement;
pub mod telemetry;

pub use chart::{ChartConfig, LinearChart};
pub use error::{VizError, VizResult};
pub use placement::{Direction, PlacementRequest, PlacementResult, resolve_placement};
