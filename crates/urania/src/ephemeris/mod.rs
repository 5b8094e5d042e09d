//! Input contract with the external ephemeris.
//!
//! The core performs no astronomy. Longitudes, house assignments and cusps
//! arrive already computed and are only read here.

pub mod types;

pub use types::{BodyPosition, ChartPositions, HouseLabel};
