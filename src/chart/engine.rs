use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::chart::axis::{AxisBinding, AxisBindings};
use crate::chart::state::{ChartEvent, ChartPhase, ChartState, Paddings};
use crate::chart::tween::Tween;
use crate::core::domain::{Orientation, extent, secondary_domain};
use crate::core::scale::{LinearScale, ZoomTransform};
use crate::core::ticks::{TickKind, TickRequest, main_tick_values, secondary_tick_values};
use crate::core::types::{Coord, Item, Line, NumberRange, Position, Size};
use crate::error::VizResult;

/// Secondary-domain transition length for zoom gestures.
pub const ZOOM_TRANSITION_MS: f64 = 750.0;
/// Padding transition length for axis label size changes.
pub const SIZE_TRANSITION_MS: f64 = 600.0;

/// Tick budgets and guide flag for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisGridConfig {
    pub label_ticks: usize,
    pub grid_ticks: usize,
    /// Force-include the guide value as a grid tick when in range.
    pub guide: bool,
}

impl Default for AxisGridConfig {
    fn default() -> Self {
        Self {
            label_ticks: 4,
            grid_ticks: 4,
            guide: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    pub x: AxisGridConfig,
    pub y: AxisGridConfig,
}

/// Static chart configuration, fixed for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub orientation: Orientation,
    pub grid: GridConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            grid: GridConfig::default(),
        }
    }
}

/// Tick values for both axes and both tick kinds, in one recomputation.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartTicks {
    pub main_label_ticks: Vec<f64>,
    pub main_grid_ticks: Vec<f64>,
    pub secondary_label_ticks: Vec<f64>,
    pub secondary_grid_ticks: Vec<f64>,
}

/// One line's sample at the hovered main-axis value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint<'a> {
    pub color_group_name: &'a str,
    pub line_name: &'a str,
    pub item: Item,
    /// The secondary-axis value at the hovered position.
    pub value: f64,
}

/// The linear chart engine: owns the chart state and routes every mutation
/// through the [`ChartState::apply`] reducer, including tween samples.
///
/// Orientation is resolved once at construction into a main/secondary axis
/// pair; the zoom gesture drives the main axis synchronously while the
/// secondary axis follows through a tween.
#[derive(Debug)]
pub struct LinearChart {
    config: ChartConfig,
    axes: AxisBindings,
    lines: Vec<Line>,
    oriented: Vec<Line>,
    state: ChartState,
    target_secondary_domain: NumberRange,
    target_paddings: Paddings,
    secondary_tween: Option<Tween<NumberRange>>,
    padding_tween: Option<Tween<Paddings>>,
}

impl LinearChart {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        let state = ChartState::default();
        Self {
            axes: AxisBindings::for_orientation(config.orientation),
            config,
            lines: Vec::new(),
            oriented: Vec::new(),
            state,
            target_secondary_domain: NumberRange::UNINIT,
            target_paddings: Paddings::default(),
            secondary_tween: None,
            padding_tween: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        self.state.phase()
    }

    /// Lines as supplied by the host.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines adjusted for orientation: vertical layout swaps point
    /// coordinates and re-sorts each line along the new main axis.
    #[must_use]
    pub fn oriented_lines(&self) -> &[Line] {
        &self.oriented
    }

    /// Replaces the data series and recomputes domains and guide values.
    pub fn set_lines(&mut self, lines: Vec<Line>) {
        let point_count: usize = lines.iter().map(|line| line.values.len()).sum();
        debug!(line_count = lines.len(), point_count, "set chart lines");

        self.oriented = orient_lines(&lines, self.config.orientation);
        self.lines = lines;
        self.update_domains();
    }

    /// Applies a container size measurement; no-op resizes are ignored.
    pub fn resize(&mut self, size: Size) {
        if self.state.width == size.width && self.state.height == size.height {
            return;
        }

        trace!(width = size.width, height = size.height, "chart resized");
        self.state = self.state.apply(ChartEvent::Resized {
            width: size.width,
            height: size.height,
        });
    }

    /// Applies measured axis label sizes as plot paddings.
    ///
    /// Repeat reports of the same target are ignored. The transition is
    /// animated over [`SIZE_TRANSITION_MS`] only when both current paddings
    /// are non-zero; the first layout applies instantly.
    pub fn set_axis_sizes(&mut self, x_axis_height: f64, y_axis_width: f64, now_ms: f64) {
        let target = Paddings::new(y_axis_width, x_axis_height);
        if target == self.target_paddings {
            return;
        }
        self.target_paddings = target;

        let current = self.state.paddings();
        if current.x == 0.0 || current.y == 0.0 {
            self.padding_tween = None;
            self.state = self.state.apply(ChartEvent::PaddingsChanged(target));
            return;
        }

        trace!(
            padding_x = target.x,
            padding_y = target.y,
            "padding transition started"
        );
        self.padding_tween = Some(Tween::new(current, target, now_ms, SIZE_TRANSITION_MS));
    }

    /// Marks the hovered main-axis tick, or clears it.
    pub fn set_active_hover_line(&mut self, value: Option<f64>) {
        self.state = self.state.apply(ChartEvent::HoverChanged(value));
    }

    /// Handles one step of a continuous zoom/pan gesture.
    ///
    /// The main-axis domain is committed synchronously from the rescaled
    /// mapping; the secondary-axis domain is derived from the data inside
    /// the new main domain and tweened over [`ZOOM_TRANSITION_MS`]. Setting
    /// a new target supersedes a running tween.
    pub fn on_zoom(&mut self, transform: ZoomTransform, now_ms: f64) {
        self.state = self.state.apply(ChartEvent::ZoomChanged(transform.k));

        let all = self.all_values();
        let main = self.axes.main;
        let original_domain =
            main.padded_domain(&all, self.config.orientation, self.state.zoom);
        if !original_domain.is_initialized() {
            return;
        }

        let original_scale = match main.scale(original_domain, main.plot_extent(&self.state)) {
            Ok(scale) => scale,
            Err(err) => {
                warn!(error = %err, "skipping zoom step: main scale not buildable");
                return;
            }
        };

        let new_domain = main.rescale(transform, original_scale).domain();
        if new_domain == main.domain(&self.state) {
            return;
        }

        debug!(
            start = new_domain.start,
            end = new_domain.end,
            zoom = transform.k,
            "main domain committed"
        );
        self.state = self.state.apply(main.set_domain(new_domain));

        // The domain may be reversed on an inverted axis; the boundary
        // search needs sorted bounds.
        let new_secondary = self.derive_secondary_domain(new_domain.min(), new_domain.max());
        if new_secondary == self.target_secondary_domain {
            return;
        }

        self.target_secondary_domain = new_secondary;
        self.secondary_tween = Some(Tween::new(
            self.axes.secondary.domain(&self.state),
            new_secondary,
            now_ms,
            ZOOM_TRANSITION_MS,
        ));
        trace!(
            start = new_secondary.start,
            end = new_secondary.end,
            "secondary domain transition started"
        );
    }

    /// Samples the running tweens at `now_ms`, feeding the interpolated
    /// values through the reducer. Finished tweens are dropped.
    pub fn advance_animations(&mut self, now_ms: f64) {
        if let Some(tween) = self.secondary_tween {
            let domain = tween.sample(now_ms);
            self.state = self.state.apply(self.axes.secondary.set_domain(domain));
            if tween.is_finished(now_ms) {
                self.secondary_tween = None;
            }
        }

        if let Some(tween) = self.padding_tween {
            let paddings = tween.sample(now_ms);
            self.state = self.state.apply(ChartEvent::PaddingsChanged(paddings));
            if tween.is_finished(now_ms) {
                self.padding_tween = None;
            }
        }
    }

    #[must_use]
    pub fn has_running_animations(&self) -> bool {
        self.secondary_tween.is_some() || self.padding_tween.is_some()
    }

    /// Horizontal scale over the current x-domain and plot width.
    pub fn x_scale(&self) -> VizResult<LinearScale> {
        LinearScale::x_scale(self.state.x_domain, self.state.plot_size().width)
    }

    /// Vertical scale over the current y-domain and plot height.
    pub fn y_scale(&self) -> VizResult<LinearScale> {
        LinearScale::y_scale(self.state.y_domain, self.state.plot_size().height)
    }

    /// Tick values for both axes and both kinds under the configured budgets.
    #[must_use]
    pub fn ticks(&self) -> ChartTicks {
        let all = self.all_values();
        ChartTicks {
            main_label_ticks: main_tick_values(self.tick_request(
                &all,
                self.axes.main,
                TickKind::Label,
            )),
            main_grid_ticks: main_tick_values(self.tick_request(
                &all,
                self.axes.main,
                TickKind::Grid,
            )),
            secondary_label_ticks: secondary_tick_values(self.tick_request(
                &all,
                self.axes.secondary,
                TickKind::Label,
            )),
            secondary_grid_ticks: secondary_tick_values(self.tick_request(
                &all,
                self.axes.secondary,
                TickKind::Grid,
            )),
        }
    }

    /// Per-line samples sitting on the active hover line.
    #[must_use]
    pub fn hovered_points(&self) -> Vec<HoverPoint<'_>> {
        let Some(hovered) = self.state.active_hover_line else {
            return Vec::new();
        };

        let main_coord = self.axes.main.coord();
        let secondary_coord = self.axes.secondary.coord();

        self.oriented
            .iter()
            .filter_map(|line| {
                let item = line
                    .values
                    .iter()
                    .find(|item| main_coord.of(item) == hovered)?;
                Some(HoverPoint {
                    color_group_name: &line.color_group_name,
                    line_name: &line.line_name,
                    item: *item,
                    value: secondary_coord.of(item),
                })
            })
            .collect()
    }

    /// Pixel position anchoring the hover tooltip: the hovered sample
    /// furthest along the secondary axis, mapped through both scales.
    #[must_use]
    pub fn tooltip_anchor(&self) -> Option<Position> {
        let secondary_coord = self.axes.secondary.coord();
        let anchor = self
            .hovered_points()
            .into_iter()
            .max_by(|a, b| secondary_coord.of(&a.item).total_cmp(&secondary_coord.of(&b.item)))?
            .item;

        let x_scale = self.x_scale().ok()?;
        let y_scale = self.y_scale().ok()?;
        Some(Position::new(x_scale.scale(anchor.x), y_scale.scale(anchor.y)))
    }

    fn tick_request<'a>(
        &self,
        items: &'a [Item],
        axis: AxisBinding,
        kind: TickKind,
    ) -> TickRequest<'a> {
        let config = self.grid_config_for(axis);
        let budget = match kind {
            TickKind::Label => config.label_ticks,
            TickKind::Grid => config.grid_ticks,
        };

        TickRequest {
            items,
            coord: axis.coord(),
            domain: axis.domain(&self.state),
            budget,
            guide: config.guide.then(|| axis.guide_value(&self.state)),
            kind,
        }
    }

    fn grid_config_for(&self, axis: AxisBinding) -> AxisGridConfig {
        match axis {
            AxisBinding::X => self.config.grid.x,
            AxisBinding::Y => self.config.grid.y,
        }
    }

    fn all_values(&self) -> Vec<Item> {
        self.oriented
            .iter()
            .flat_map(|line| line.values.iter().copied())
            .collect()
    }

    fn derive_secondary_domain(&self, main_min: f64, main_max: f64) -> NumberRange {
        let main_coord = self.axes.main.coord();
        let secondary = self.axes.secondary;
        let orientation = self.config.orientation;
        let zoom = self.state.zoom;

        secondary_domain(
            main_min,
            main_max,
            &self.oriented,
            |item| main_coord.of(item),
            |items| secondary.padded_domain(items, orientation, zoom),
        )
    }

    fn update_domains(&mut self) {
        let all = self.all_values();
        if all.is_empty() {
            // Sentinel domains stay in place; ticks short-circuit to empty.
            return;
        }

        let x_domain = AxisBinding::X.padded_domain(&all, self.config.orientation, self.state.zoom);
        let y_domain = AxisBinding::Y.padded_domain(&all, self.config.orientation, self.state.zoom);
        let x_guide_value = extent(&all, Coord::X).map_or(0.0, NumberRange::min);
        let y_guide_value = extent(&all, Coord::Y).map_or(0.0, NumberRange::min);

        self.state = self.state.apply(ChartEvent::DomainsComputed {
            x_domain,
            y_domain,
            x_guide_value,
            y_guide_value,
        });
    }
}

/// Vertical layout rotates each line into the swapped coordinate space and
/// re-sorts it so the main-axis values stay ascending for boundary search.
fn orient_lines(lines: &[Line], orientation: Orientation) -> Vec<Line> {
    match orientation {
        Orientation::Horizontal => lines.to_vec(),
        Orientation::Vertical => lines
            .iter()
            .map(|line| {
                let mut values: Vec<Item> = line
                    .values
                    .iter()
                    .map(|item| Item::new(item.y, item.x))
                    .collect();
                values.sort_by(|a, b| a.y.total_cmp(&b.y));
                Line {
                    values,
                    ..line.clone()
                }
            })
            .collect(),
    }
}
