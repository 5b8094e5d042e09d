//! House cusps and house lookup.
//!
//! A cusp set is 12 half-open intervals `[start, end)` around the ecliptic.
//! An interval whose start is greater than its end wraps through 0° Aries.

use crate::error::ChartError;
use crate::western::signs::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tolerance when checking that adjacent cusps meet.
const CUSP_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number 1-12
    pub id: u8,
    /// Longitude where the house begins (inclusive)
    pub start: f64,
    /// Longitude where the next house begins (exclusive)
    pub end: f64,
}

impl HouseCusp {
    pub fn new(id: u8, start: f64, end: f64) -> Self {
        Self { id, start, end }
    }

    /// Whether this house spans the 360°/0° boundary.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, longitude: f64) -> bool {
        if self.wraps() {
            longitude >= self.start || longitude < self.end
        } else {
            self.start <= longitude && longitude < self.end
        }
    }
}

/// Return the house (1-12) containing `longitude`.
///
/// Houses are scanned 1 through 12 and the first match wins. A cusp set
/// with gaps can leave a longitude unmatched; that case falls back to the
/// 1st house and is logged, it is not an error.
pub fn locate_house(longitude: f64, cusps: &[HouseCusp]) -> u8 {
    if longitude.is_finite() {
        let pos = normalize_degrees(longitude);
        for id in 1..=12u8 {
            let Some(cusp) = cusps.iter().find(|c| c.id == id) else {
                continue;
            };
            if cusp.contains(pos) {
                return id;
            }
        }
    }
    log::warn!(
        "HouseLocator: no house contains {:.4}° in a set of {} cusps; defaulting to house 1",
        longitude,
        cusps.len()
    );
    1
}

/// Check that a cusp set has ids 1..=12 exactly once, finite longitudes,
/// and that each house ends where the next one starts.
pub fn validate_cusps(cusps: &[HouseCusp]) -> Result<(), ChartError> {
    if cusps.len() != 12 {
        return Err(ChartError::MalformedCuspSet {
            reason: format!("expected 12 cusps, got {}", cusps.len()),
        });
    }

    let mut ordered: Vec<&HouseCusp> = Vec::with_capacity(12);
    for id in 1..=12u8 {
        let mut matching = cusps.iter().filter(|c| c.id == id);
        let cusp = matching.next().ok_or_else(|| ChartError::MalformedCuspSet {
            reason: format!("house {} is missing", id),
        })?;
        if matching.next().is_some() {
            return Err(ChartError::MalformedCuspSet {
                reason: format!("house {} appears more than once", id),
            });
        }
        if !cusp.start.is_finite() || !cusp.end.is_finite() {
            return Err(ChartError::MalformedCuspSet {
                reason: format!("house {} has a non-finite boundary", id),
            });
        }
        if !(0.0..360.0).contains(&cusp.start) || !(0.0..360.0).contains(&cusp.end) {
            return Err(ChartError::MalformedCuspSet {
                reason: format!("house {} boundary outside [0, 360)", id),
            });
        }
        ordered.push(cusp);
    }

    for (i, cusp) in ordered.iter().enumerate() {
        let next = ordered[(i + 1) % 12];
        let gap = (cusp.end - next.start).abs();
        if gap > CUSP_EPSILON && (360.0 - gap) > CUSP_EPSILON {
            return Err(ChartError::MalformedCuspSet {
                reason: format!(
                    "house {} ends at {:.4}° but house {} starts at {:.4}°",
                    cusp.id, cusp.end, next.id, next.start
                ),
            });
        }
    }

    Ok(())
}

/// Build 12 contiguous cusps from the starting longitudes of houses 1-12.
pub fn cusps_from_starts(starts: &[f64]) -> Result<Vec<HouseCusp>, ChartError> {
    if starts.len() != 12 {
        return Err(ChartError::MalformedCuspSet {
            reason: format!("expected 12 cusp longitudes, got {}", starts.len()),
        });
    }
    let cusps = (0..12)
        .map(|i| {
            HouseCusp::new(
                (i + 1) as u8,
                normalize_degrees(starts[i]),
                normalize_degrees(starts[(i + 1) % 12]),
            )
        })
        .collect();
    Ok(cusps)
}

/// Whole-sign houses: the 1st house is the entire sign holding the ascendant.
pub fn whole_sign_cusps(ascendant: f64) -> Vec<HouseCusp> {
    let first = (normalize_degrees(ascendant) / 30.0).floor() * 30.0;
    (0..12)
        .map(|i| {
            let start = normalize_degrees(first + 30.0 * i as f64);
            let end = normalize_degrees(first + 30.0 * (i + 1) as f64);
            HouseCusp::new((i + 1) as u8, start, end)
        })
        .collect()
}

/// Textual house labels as emitted by chart libraries ("First", "Fifth").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseOrdinal {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl HouseOrdinal {
    pub const ALL: [HouseOrdinal; 12] = [
        HouseOrdinal::First,
        HouseOrdinal::Second,
        HouseOrdinal::Third,
        HouseOrdinal::Fourth,
        HouseOrdinal::Fifth,
        HouseOrdinal::Sixth,
        HouseOrdinal::Seventh,
        HouseOrdinal::Eighth,
        HouseOrdinal::Ninth,
        HouseOrdinal::Tenth,
        HouseOrdinal::Eleventh,
        HouseOrdinal::Twelfth,
    ];

    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn word(&self) -> &'static str {
        match self {
            HouseOrdinal::First => "first",
            HouseOrdinal::Second => "second",
            HouseOrdinal::Third => "third",
            HouseOrdinal::Fourth => "fourth",
            HouseOrdinal::Fifth => "fifth",
            HouseOrdinal::Sixth => "sixth",
            HouseOrdinal::Seventh => "seventh",
            HouseOrdinal::Eighth => "eighth",
            HouseOrdinal::Ninth => "ninth",
            HouseOrdinal::Tenth => "tenth",
            HouseOrdinal::Eleventh => "eleventh",
            HouseOrdinal::Twelfth => "twelfth",
        }
    }
}

impl FromStr for HouseOrdinal {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.word() == lower)
            .ok_or_else(|| ChartError::UnknownHouseLabel(s.to_string()))
    }
}

/// Parse a house label that is either a number ("5") or an ordinal word ("Fifth").
pub fn parse_house_label(label: &str) -> Result<u8, ChartError> {
    if let Ok(n) = label.trim().parse::<u8>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(ChartError::UnknownHouseLabel(label.to_string()));
    }
    label.parse::<HouseOrdinal>().map(|o| o.number())
}
