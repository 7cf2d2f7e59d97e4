pub mod domain;
pub mod scale;
pub mod ticks;
pub mod types;

pub use domain::{DomainPaddings, Orientation, pad_domain, secondary_domain, x_domain, y_domain};
pub use scale::{LinearScale, ZoomTransform};
pub use ticks::{TickKind, TickRequest, main_tick_values, nice_ticks, secondary_tick_values};
pub use types::{Coord, Item, Line, NumberRange, Position, Size};
