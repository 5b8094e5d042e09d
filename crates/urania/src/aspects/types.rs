use crate::western::bodies::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn tone(&self) -> AspectTone {
        match self {
            AspectKind::Conjunction => AspectTone::Intense,
            AspectKind::Sextile | AspectKind::Trine => AspectTone::Flowing,
            AspectKind::Square => AspectTone::Challenging,
            AspectKind::Opposition => AspectTone::Tension,
        }
    }

    /// Squares and oppositions read as challenging, everything else as harmonious.
    pub fn is_challenging(&self) -> bool {
        matches!(self, AspectKind::Square | AspectKind::Opposition)
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectTone {
    Intense,
    Flowing,
    Challenging,
    Tension,
}

/// Whether a deviation equal to the orb still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbBound {
    /// `|separation - angle| <= orb`
    Inclusive,
    /// `|separation - angle| < orb`
    Exclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbRule {
    pub kind: AspectKind,
    pub max_orb: f64,
}

/// Ordered orb table. Rules are evaluated in order and the first match wins,
/// so the order is the tie-break between overlapping orbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbTable {
    pub name: String,
    pub bound: OrbBound,
    pub rules: Vec<OrbRule>,
}

impl OrbTable {
    /// Orbs used between bodies of the same natal chart.
    pub fn natal() -> Self {
        Self {
            name: "natal".to_string(),
            bound: OrbBound::Inclusive,
            rules: vec![
                OrbRule { kind: AspectKind::Conjunction, max_orb: 10.0 },
                OrbRule { kind: AspectKind::Opposition, max_orb: 10.0 },
                OrbRule { kind: AspectKind::Trine, max_orb: 8.0 },
                OrbRule { kind: AspectKind::Square, max_orb: 8.0 },
                OrbRule { kind: AspectKind::Sextile, max_orb: 6.0 },
            ],
        }
    }

    /// Orbs used between a transiting body and a natal body.
    ///
    /// Narrower opposition and a different evaluation order than `natal()`.
    /// Both tables are kept as-is; see DESIGN.md.
    pub fn transit() -> Self {
        Self {
            name: "transit".to_string(),
            bound: OrbBound::Exclusive,
            rules: vec![
                OrbRule { kind: AspectKind::Conjunction, max_orb: 8.0 },
                OrbRule { kind: AspectKind::Sextile, max_orb: 6.0 },
                OrbRule { kind: AspectKind::Square, max_orb: 8.0 },
                OrbRule { kind: AspectKind::Trine, max_orb: 8.0 },
                OrbRule { kind: AspectKind::Opposition, max_orb: 8.0 },
            ],
        }
    }

    pub fn orb_for(&self, kind: AspectKind) -> Option<f64> {
        self.rules.iter().find(|r| r.kind == kind).map(|r| r.max_orb)
    }
}

/// An aspect found between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub kind: AspectKind,
    pub tone: AspectTone,
    /// Angular separation in degrees, 0-180
    pub separation: f64,
    /// Maximum orb of the matched rule
    pub orb: f64,
    /// Distance from the exact aspect angle
    pub deviation: f64,
}

impl AspectMatch {
    pub fn is_challenging(&self) -> bool {
        self.kind.is_challenging()
    }
}
