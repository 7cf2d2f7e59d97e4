use serde::Serialize;
use smallvec::SmallVec;

use crate::core::types::{Position, Size};
use crate::placement::Direction;

/// Top-left tooltip positions for all 12 directions, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionPositions {
    positions: [Position; 12],
}

impl DirectionPositions {
    #[must_use]
    pub fn get(&self, direction: Direction) -> Position {
        self.positions[direction.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Computes the tooltip's top-left position for every direction.
///
/// `position` is the anchor's top-left corner; center alignment always uses
/// half the anchor size, so anchors both smaller and larger than the tooltip
/// behave correctly. `offset` pushes the tooltip outward along the primary
/// axis. `arrow_offset` shifts corner-aligned directions along the cross
/// axis so a visual pointer arrow stays aligned with the anchor center.
#[must_use]
pub fn positions_by_direction(
    tooltip_size: Size,
    anchor_size: Size,
    position: Position,
    offset: f64,
    arrow_offset: Option<f64>,
) -> DirectionPositions {
    let arrow = arrow_offset.unwrap_or(0.0);
    let Size {
        width: tooltip_width,
        height: tooltip_height,
    } = tooltip_size;

    // Anchor center, in viewport pixels.
    let center_x = position.x + anchor_size.width / 2.0;
    let center_y = position.y + anchor_size.height / 2.0;

    let above_y = position.y - tooltip_height - offset;
    let below_y = position.y + anchor_size.height + offset;
    let left_x = position.x - tooltip_width - offset;
    let right_x = position.x + anchor_size.width + offset;

    let mut positions = [Position::default(); 12];
    let mut set = |direction: Direction, x: f64, y: f64| {
        positions[direction.index()] = Position::new(x, y);
    };

    set(Direction::DownCenter, center_x - tooltip_width / 2.0, below_y);
    set(Direction::DownLeft, center_x - tooltip_width + arrow, below_y);
    set(Direction::DownRight, center_x - arrow, below_y);

    set(Direction::UpCenter, center_x - tooltip_width / 2.0, above_y);
    set(Direction::UpLeft, center_x - tooltip_width + arrow, above_y);
    set(Direction::UpRight, center_x - arrow, above_y);

    set(Direction::LeftCenter, left_x, center_y - tooltip_height / 2.0);
    set(Direction::LeftUp, left_x, center_y - tooltip_height + arrow);
    set(Direction::LeftDown, left_x, center_y - arrow);

    set(Direction::RightCenter, right_x, center_y - tooltip_height / 2.0);
    set(Direction::RightUp, right_x, center_y - tooltip_height + arrow);
    set(Direction::RightDown, right_x, center_y - arrow);

    DirectionPositions { positions }
}

/// Everything the placement search needs for one tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest<'a> {
    pub tooltip_size: Size,
    pub viewport_size: Size,
    /// Zero size means a point-anchored tooltip.
    pub anchor_size: Size,
    /// Outward shift from the anchor along the primary axis.
    pub offset: f64,
    /// Cross-axis shift applied to corner-aligned directions.
    pub arrow_offset: Option<f64>,
    /// Preferred direction, tried before all other candidates.
    pub direction: Direction,
    pub possible_directions: &'a [Direction],
    pub banned_directions: &'a [Direction],
    /// `None` while the anchor is not yet positionable.
    pub position: Option<Position>,
}

impl PlacementRequest<'static> {
    /// Point-anchored request allowing every direction.
    #[must_use]
    pub fn new(tooltip_size: Size, viewport_size: Size, direction: Direction) -> Self {
        Self {
            tooltip_size,
            viewport_size,
            anchor_size: Size::ZERO,
            offset: 0.0,
            arrow_offset: None,
            direction,
            possible_directions: &Direction::ALL,
            banned_directions: &[],
            position: None,
        }
    }
}

/// Resolved placement. `position: None` means the caller must suppress
/// rendering until the anchor becomes positionable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementResult {
    pub direction: Direction,
    pub position: Option<Position>,
}

/// Picks the first direction whose tooltip rectangle fits the viewport.
///
/// Candidates are the possible directions minus the banned ones, walked in
/// [`Direction::ALL`] priority order with the requested direction hoisted to
/// the front. Two fallbacks, both deliberate policy rather than errors:
/// an empty candidate list or a search with no fit returns the requested
/// direction with its computed, unclamped position.
#[must_use]
pub fn resolve_placement(request: &PlacementRequest<'_>) -> PlacementResult {
    let Some(position) = request.position else {
        return PlacementResult {
            direction: request.direction,
            position: None,
        };
    };

    let positions = positions_by_direction(
        request.tooltip_size,
        request.anchor_size,
        position,
        request.offset,
        request.arrow_offset,
    );

    let fallback = PlacementResult {
        direction: request.direction,
        position: Some(positions.get(request.direction)),
    };

    let candidates: SmallVec<[Direction; 12]> = Direction::ALL
        .into_iter()
        .filter(|d| {
            request.possible_directions.contains(d) && !request.banned_directions.contains(d)
        })
        .collect();

    if candidates.is_empty() {
        return fallback;
    }

    let requested_first = candidates
        .iter()
        .copied()
        .filter(|d| *d == request.direction)
        .chain(candidates.iter().copied().filter(|d| *d != request.direction));

    for direction in requested_first {
        let candidate = positions.get(direction);
        if fits_viewport(candidate, request.tooltip_size, request.viewport_size) {
            return PlacementResult {
                direction,
                position: Some(candidate),
            };
        }
    }

    fallback
}

fn fits_viewport(position: Position, tooltip_size: Size, viewport_size: Size) -> bool {
    position.x >= 0.0
        && position.y >= 0.0
        && position.x + tooltip_size.width <= viewport_size.width
        && position.y + tooltip_size.height <= viewport_size.height
}
