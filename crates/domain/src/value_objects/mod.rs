//! Value Objects - Immutable, identity-less routing primitives

mod avoid;
mod bound;
mod position;
mod priority;
mod road_event;
mod vehicle;

pub use avoid::AvoidOption;
pub use bound::Bound;
pub use position::{Position, PositionWithKey};
pub use priority::RoutePriority;
pub use road_event::RoadEventOption;
pub use vehicle::{CarFuel, CarType};
