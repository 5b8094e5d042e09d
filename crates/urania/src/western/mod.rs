pub mod bodies;
pub mod houses;
pub mod signs;

pub use bodies::CelestialBody;
pub use houses::{
    cusps_from_starts, locate_house, parse_house_label, validate_cusps, whole_sign_cusps,
    HouseCusp, HouseOrdinal,
};
pub use signs::{degree_in_sign, normalize_degrees, ZodiacSign};
