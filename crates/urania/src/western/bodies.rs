//! Celestial bodies and chart points.
//!
//! Identifiers are the lowercase snake-case strings the ephemeris emits
//! ("sun", "north_node", "ascendant"). They double as the stable hashing
//! input for narrative selection, so they must never change.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

impl CelestialBody {
    /// Canonical chart order. Pairwise scans iterate in this order.
    pub const ALL: [CelestialBody; 17] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::Chiron,
        CelestialBody::NorthNode,
        CelestialBody::SouthNode,
        CelestialBody::Ascendant,
        CelestialBody::Midheaven,
        CelestialBody::Descendant,
        CelestialBody::ImumCoeli,
    ];

    /// Stable identifier used for serialization and narrative hashing.
    pub fn id(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Venus => "venus",
            CelestialBody::Mars => "mars",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Uranus => "uranus",
            CelestialBody::Neptune => "neptune",
            CelestialBody::Pluto => "pluto",
            CelestialBody::Chiron => "chiron",
            CelestialBody::NorthNode => "north_node",
            CelestialBody::SouthNode => "south_node",
            CelestialBody::Ascendant => "ascendant",
            CelestialBody::Midheaven => "midheaven",
            CelestialBody::Descendant => "descendant",
            CelestialBody::ImumCoeli => "imum_coeli",
        }
    }

    /// Human-readable name ("North Node", "Midheaven").
    pub fn label(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::Chiron => "Chiron",
            CelestialBody::NorthNode => "North Node",
            CelestialBody::SouthNode => "South Node",
            CelestialBody::Ascendant => "Ascendant",
            CelestialBody::Midheaven => "Midheaven",
            CelestialBody::Descendant => "Descendant",
            CelestialBody::ImumCoeli => "Imum Coeli",
        }
    }

    /// Angle points are positional only and never take part in aspect scans.
    pub fn is_angle(&self) -> bool {
        matches!(
            self,
            CelestialBody::Ascendant
                | CelestialBody::Midheaven
                | CelestialBody::Descendant
                | CelestialBody::ImumCoeli
        )
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CelestialBody {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        let body = match key.as_str() {
            "sun" => CelestialBody::Sun,
            "moon" => CelestialBody::Moon,
            "mercury" => CelestialBody::Mercury,
            "venus" => CelestialBody::Venus,
            "mars" => CelestialBody::Mars,
            "jupiter" => CelestialBody::Jupiter,
            "saturn" => CelestialBody::Saturn,
            "uranus" => CelestialBody::Uranus,
            "neptune" => CelestialBody::Neptune,
            "pluto" => CelestialBody::Pluto,
            "chiron" => CelestialBody::Chiron,
            "north_node" | "northnode" | "true_node" | "node" => CelestialBody::NorthNode,
            "south_node" | "southnode" => CelestialBody::SouthNode,
            "ascendant" | "asc" | "rising" => CelestialBody::Ascendant,
            "midheaven" | "mc" => CelestialBody::Midheaven,
            "descendant" | "desc" | "dsc" | "dc" => CelestialBody::Descendant,
            "imum_coeli" | "imumcoeli" | "ic" => CelestialBody::ImumCoeli,
            _ => return Err(ChartError::UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_parse() {
        assert_eq!("North Node".parse::<CelestialBody>().unwrap(), CelestialBody::NorthNode);
        assert_eq!("northnode".parse::<CelestialBody>().unwrap(), CelestialBody::NorthNode);
        assert_eq!("ASC".parse::<CelestialBody>().unwrap(), CelestialBody::Ascendant);
        assert_eq!("mc".parse::<CelestialBody>().unwrap(), CelestialBody::Midheaven);
        assert!("vulcan".parse::<CelestialBody>().is_err());
    }

    #[test]
    fn test_id_roundtrips_through_from_str() {
        for body in CelestialBody::ALL {
            assert_eq!(body.id().parse::<CelestialBody>().unwrap(), body);
        }
    }

    #[test]
    fn test_angles() {
        assert!(CelestialBody::Ascendant.is_angle());
        assert!(CelestialBody::ImumCoeli.is_angle());
        assert!(!CelestialBody::NorthNode.is_angle());
        assert!(!CelestialBody::Sun.is_angle());
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&CelestialBody::NorthNode).unwrap();
        assert_eq!(json, "\"north_node\"");
    }
}
