use crate::aspects::types::{AspectKind, AspectMatch, OrbBound, OrbTable};
use crate::ephemeris::types::ChartPositions;
use crate::western::bodies::CelestialBody;
use crate::western::signs::normalize_degrees;

/// Shortest angular distance between two longitudes, always in [0, 180].
pub fn separation(lon_a: f64, lon_b: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon_a) - normalize_degrees(lon_b)).abs();
    raw_diff.min(360.0 - raw_diff)
}

/// Classifies angular separations against an orb table
#[derive(Debug, Clone)]
pub struct AspectDetector {
    table: OrbTable,
}

impl AspectDetector {
    pub fn new(table: OrbTable) -> Self {
        Self { table }
    }

    pub fn natal() -> Self {
        Self::new(OrbTable::natal())
    }

    pub fn transit() -> Self {
        Self::new(OrbTable::transit())
    }

    pub fn table(&self) -> &OrbTable {
        &self.table
    }

    /// Classify a separation. Returns the matched kind and its configured orb.
    pub fn classify(&self, separation: f64) -> Option<(AspectKind, f64)> {
        if !separation.is_finite() {
            return None;
        }
        self.table.rules.iter().find_map(|rule| {
            let deviation = (separation - rule.kind.angle()).abs();
            let within = match self.table.bound {
                OrbBound::Inclusive => deviation <= rule.max_orb,
                OrbBound::Exclusive => deviation < rule.max_orb,
            };
            within.then_some((rule.kind, rule.max_orb))
        })
    }

    /// Aspect between two longitudes, if any
    pub fn detect(&self, lon_a: f64, lon_b: f64) -> Option<(AspectKind, f64)> {
        self.classify(separation(lon_a, lon_b))
    }

    /// Aspect between two bodies, with the full match record
    pub fn match_bodies(
        &self,
        body_a: CelestialBody,
        lon_a: f64,
        body_b: CelestialBody,
        lon_b: f64,
    ) -> Option<AspectMatch> {
        let sep = separation(lon_a, lon_b);
        let (kind, orb) = self.classify(sep)?;
        Some(AspectMatch {
            body_a,
            body_b,
            kind,
            tone: kind.tone(),
            separation: sep,
            orb,
            deviation: (sep - kind.angle()).abs(),
        })
    }

    /// All aspects between pairs of non-angle bodies within one chart.
    ///
    /// Pairs are visited in canonical body order (a before b). Bodies
    /// without a resolvable sign are skipped.
    pub fn chart_aspects(&self, chart: &ChartPositions) -> Vec<AspectMatch> {
        let bodies: Vec<(CelestialBody, f64)> = CelestialBody::ALL
            .iter()
            .filter(|b| !b.is_angle())
            .filter_map(|b| chart.resolved(*b).map(|p| (*b, p.lon)))
            .collect();

        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (body_a, lon_a) = bodies[i];
                let (body_b, lon_b) = bodies[j];
                if let Some(aspect) = self.match_bodies(body_a, lon_a, body_b, lon_b) {
                    pairs.push(aspect);
                }
            }
        }
        pairs
    }
}

impl Default for AspectDetector {
    fn default() -> Self {
        Self::natal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::OrbRule;

    #[test]
    fn test_separation_wraps() {
        assert!((separation(359.0, 2.0) - 3.0).abs() < 1e-9);
        assert!((separation(2.0, 359.0) - 3.0).abs() < 1e-9);
        assert!((separation(0.0, 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_natal_order_prefers_conjunction() {
        let detector = AspectDetector::natal();
        assert_eq!(detector.classify(10.0).map(|m| m.0), Some(AspectKind::Conjunction));
        assert_eq!(detector.classify(10.5), None);
    }

    #[test]
    fn test_transit_bound_is_exclusive() {
        let detector = AspectDetector::transit();
        assert_eq!(detector.classify(7.99).map(|m| m.0), Some(AspectKind::Conjunction));
        assert_eq!(detector.classify(8.0), None);
        assert_eq!(detector.classify(172.0), None);
        assert_eq!(detector.classify(172.5).map(|m| m.0), Some(AspectKind::Opposition));
    }

    #[test]
    fn test_natal_opposition_is_wider_than_transit() {
        assert_eq!(
            AspectDetector::natal().classify(171.0).map(|m| m.0),
            Some(AspectKind::Opposition)
        );
        assert_eq!(AspectDetector::transit().classify(171.0), None);
    }

    #[test]
    fn test_detector_exposes_its_table() {
        let natal = AspectDetector::default();
        assert_eq!(natal.table().name, "natal");
        assert_eq!(natal.table().bound, OrbBound::Inclusive);
        assert_eq!(natal.table().orb_for(AspectKind::Opposition), Some(10.0));

        let transit = AspectDetector::transit();
        assert_eq!(transit.table().name, "transit");
        assert_eq!(transit.table().bound, OrbBound::Exclusive);
        assert_eq!(transit.table().orb_for(AspectKind::Opposition), Some(8.0));
        assert_eq!(transit.table().orb_for(AspectKind::Sextile), Some(6.0));
    }

    #[test]
    fn test_orb_for_missing_kind() {
        let table = OrbTable {
            name: "tight".to_string(),
            bound: OrbBound::Inclusive,
            rules: vec![OrbRule { kind: AspectKind::Conjunction, max_orb: 2.0 }],
        };
        assert_eq!(table.orb_for(AspectKind::Trine), None);
        assert_eq!(AspectDetector::new(table).classify(119.0), None);
    }
}
