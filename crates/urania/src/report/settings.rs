use crate::western::bodies::CelestialBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Events kept in a daily report, in scan order
    pub max_events: usize,
    /// Slow movers whose transits are reported
    pub transiting: Vec<CelestialBody>,
    /// Natal bodies the transits are measured against
    pub natal_references: Vec<CelestialBody>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            max_events: 5,
            transiting: vec![
                CelestialBody::Mars,
                CelestialBody::Jupiter,
                CelestialBody::Saturn,
                CelestialBody::Uranus,
                CelestialBody::Neptune,
                CelestialBody::Pluto,
            ],
            natal_references: vec![
                CelestialBody::Sun,
                CelestialBody::Moon,
                CelestialBody::Mercury,
                CelestialBody::Venus,
                CelestialBody::Mars,
            ],
        }
    }
}
