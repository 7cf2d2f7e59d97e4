use serde::{Deserialize, Serialize};

/// Tooltip orientation: a primary edge plus a secondary alignment.
///
/// Declaration order doubles as the fallback priority of the placement
/// search; [`Direction::ALL`] exposes it as the canonical candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    DownCenter,
    DownLeft,
    DownRight,
    UpCenter,
    UpLeft,
    UpRight,
    LeftCenter,
    LeftUp,
    LeftDown,
    RightCenter,
    RightUp,
    RightDown,
}

impl Direction {
    /// All 12 directions in fallback-priority order.
    pub const ALL: [Self; 12] = [
        Self::DownCenter,
        Self::DownLeft,
        Self::DownRight,
        Self::UpCenter,
        Self::UpLeft,
        Self::UpRight,
        Self::LeftCenter,
        Self::LeftUp,
        Self::LeftDown,
        Self::RightCenter,
        Self::RightUp,
        Self::RightDown,
    ];

    #[must_use]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
