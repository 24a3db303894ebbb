//! Domain layer for kakao-directions
//!
//! Provider-independent routing vocabulary: positions, bounding boxes and
//! the closed option sets a route search is parameterized with.
//! This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
