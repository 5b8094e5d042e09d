//! Rough time-scale for how long a transit stays in orb.

use crate::western::bodies::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback speed for bodies without a table entry (degrees/day)
const DEFAULT_DAILY_SPEED: f64 = 0.1;

/// Approximate mean daily motion in longitude (degrees/day).
pub fn daily_speed(body: CelestialBody) -> f64 {
    match body {
        CelestialBody::Mars => 0.5,
        CelestialBody::Jupiter => 0.08,
        CelestialBody::Saturn => 0.03,
        CelestialBody::Uranus => 0.01,
        CelestialBody::Neptune => 0.006,
        CelestialBody::Pluto => 0.004,
        _ => DEFAULT_DAILY_SPEED,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DurationEstimate {
    pub days: u32,
}

impl DurationEstimate {
    /// Days left for `body` to leave an aspect with the given orb.
    ///
    /// Assumes the aspect sits near exact, so half the orb remains to travel.
    pub fn from_orb(body: CelestialBody, orb: f64) -> Self {
        let degrees_remaining = (orb / 2.0).max(0.0);
        let days = (degrees_remaining / daily_speed(body)).ceil();
        // NaN casts to 0, large values saturate
        Self { days: days as u32 }
    }
}

impl fmt::Display for DurationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days;
        if days > 60 {
            write!(f, "Around for {} months", days.div_ceil(30))
        } else if days > 14 {
            write!(f, "Around for {} weeks", days.div_ceil(7))
        } else if days == 1 {
            f.write_str("Ends today")
        } else {
            write!(f, "Wrapping up in {} days", days)
        }
    }
}
