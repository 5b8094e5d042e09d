pub mod aspects;
pub mod ephemeris;
pub mod error;
pub mod narrative;
pub mod report;
pub mod western;

pub use ephemeris::{BodyPosition, ChartPositions};
pub use error::ChartError;
pub use report::{build_natal_profile, build_transit_report, DailyTransitReport, NatalProfile};
pub use western::{CelestialBody, HouseCusp, ZodiacSign};
