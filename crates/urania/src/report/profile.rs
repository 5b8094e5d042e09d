//! Natal profile: big three, every placement, natal aspects.

use super::types::{NatalAspect, NatalProfile, Placement};
use crate::aspects::calculator::AspectDetector;
use crate::ephemeris::types::{BodyPosition, ChartPositions};
use crate::error::ChartError;
use crate::narrative::placement_meaning;
use crate::western::bodies::CelestialBody;
use crate::western::houses::locate_house;
use crate::western::signs::{degree_in_sign, normalize_degrees};

/// Bodies a profile cannot be built without.
pub const REQUIRED_BODIES: [CelestialBody; 3] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Ascendant,
];

#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    detector: AspectDetector,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self {
            detector: AspectDetector::natal(),
        }
    }

    pub fn with_detector(mut self, detector: AspectDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn build(&self, chart: &ChartPositions) -> Result<NatalProfile, ChartError> {
        let missing: Vec<CelestialBody> = REQUIRED_BODIES
            .iter()
            .copied()
            .filter(|b| chart.resolved(*b).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::DataIncomplete { missing });
        }

        let placements: Vec<Placement> = CelestialBody::ALL
            .iter()
            .filter_map(|b| chart.resolved(*b).and_then(|p| self.placement(*b, p, chart)))
            .collect();

        let find = |body: CelestialBody| {
            placements
                .iter()
                .find(|p| p.body == body)
                .cloned()
                .ok_or_else(|| ChartError::DataIncomplete { missing: vec![body] })
        };
        let sun = find(CelestialBody::Sun)?;
        let moon = find(CelestialBody::Moon)?;
        let rising = find(CelestialBody::Ascendant)?;

        let aspects: Vec<NatalAspect> = self
            .detector
            .chart_aspects(chart)
            .into_iter()
            .map(NatalAspect::new)
            .collect();

        log::debug!(
            "Profile: {} placements, {} natal aspects",
            placements.len(),
            aspects.len()
        );

        Ok(NatalProfile {
            sun,
            moon,
            rising,
            placements,
            aspects,
        })
    }

    fn placement(&self, body: CelestialBody, position: &BodyPosition, chart: &ChartPositions) -> Option<Placement> {
        let sign = position.sign()?;
        let house = if body == CelestialBody::Ascendant {
            Some(1)
        } else {
            position.house_id().or_else(|| {
                (!chart.cusps.is_empty()).then(|| locate_house(normalize_degrees(position.lon), &chart.cusps))
            })
        };
        Some(Placement {
            body,
            sign,
            house,
            degree: degree_in_sign(position.lon).floor() as u8,
            longitude: normalize_degrees(position.lon),
            meaning: placement_meaning(body, sign, house),
        })
    }
}

/// Natal profile with the default natal orb table.
pub fn build_natal_profile(chart: &ChartPositions) -> Result<NatalProfile, ChartError> {
    ProfileBuilder::new().build(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::{AspectKind, OrbBound, OrbRule, OrbTable};
    use crate::western::houses::whole_sign_cusps;
    use crate::western::signs::ZodiacSign;

    fn chart() -> ChartPositions {
        ChartPositions::new()
            .with_body(CelestialBody::Sun, BodyPosition::in_house(125.4, 5))
            .with_body(CelestialBody::Moon, BodyPosition::in_house(10.0, 1))
            .with_body(CelestialBody::Ascendant, BodyPosition::new(5.0))
            .with_body(CelestialBody::Mars, BodyPosition::new(245.0))
            .with_cusps(whole_sign_cusps(5.0))
    }

    #[test]
    fn test_big_three() {
        let profile = build_natal_profile(&chart()).unwrap();
        assert_eq!(profile.sun.sign, ZodiacSign::Leo);
        assert_eq!(profile.sun.degree, 5);
        assert_eq!(profile.sun.house, Some(5));
        assert_eq!(profile.moon.sign, ZodiacSign::Aries);
        assert_eq!(profile.rising.house, Some(1));
        assert!(profile.rising.meaning.starts_with("Your Rising Sign"));
    }

    #[test]
    fn test_house_from_cusps_when_missing() {
        let profile = build_natal_profile(&chart()).unwrap();
        let mars = profile.placements.iter().find(|p| p.body == CelestialBody::Mars).unwrap();
        // whole-sign from Aries: Sagittarius is the 9th
        assert_eq!(mars.house, Some(9));
    }

    #[test]
    fn test_placements_include_angles_in_order() {
        let profile = build_natal_profile(&chart()).unwrap();
        let bodies: Vec<_> = profile.placements.iter().map(|p| p.body).collect();
        assert_eq!(
            bodies,
            vec![CelestialBody::Sun, CelestialBody::Moon, CelestialBody::Mars, CelestialBody::Ascendant]
        );
    }

    #[test]
    fn test_aspects_skip_angles() {
        let profile = build_natal_profile(&chart()).unwrap();
        // sun 125.4 / mars 245 -> 119.6 trine; sun / moon 115.4 trine; moon / mars 125 trine
        assert_eq!(profile.aspects.len(), 3);
        assert!(profile.aspects.iter().all(|a| a.aspect.kind == AspectKind::Trine));
        assert!(profile
            .aspects
            .iter()
            .all(|a| !a.aspect.body_a.is_angle() && !a.aspect.body_b.is_angle()));
    }

    #[test]
    fn test_missing_moon() {
        let chart = ChartPositions::new()
            .with_body(CelestialBody::Sun, BodyPosition::new(10.0))
            .with_body(CelestialBody::Ascendant, BodyPosition::new(200.0));
        assert_eq!(
            build_natal_profile(&chart),
            Err(ChartError::DataIncomplete { missing: vec![CelestialBody::Moon] })
        );
    }

    #[test]
    fn test_unresolvable_longitude_counts_as_missing() {
        let chart = chart().with_body(CelestialBody::Sun, BodyPosition::new(f64::NAN));
        assert_eq!(
            build_natal_profile(&chart),
            Err(ChartError::DataIncomplete { missing: vec![CelestialBody::Sun] })
        );
    }

    #[test]
    fn test_big_three_all_unresolvable() {
        let chart = chart()
            .with_body(CelestialBody::Sun, BodyPosition::new(f64::NAN))
            .with_body(CelestialBody::Moon, BodyPosition::in_house(f64::NAN, 2))
            .with_body(CelestialBody::Ascendant, BodyPosition::new(f64::INFINITY));
        assert_eq!(
            build_natal_profile(&chart),
            Err(ChartError::DataIncomplete {
                missing: vec![CelestialBody::Sun, CelestialBody::Moon, CelestialBody::Ascendant]
            })
        );
    }

    #[test]
    fn test_custom_detector_narrows_aspects() {
        let tight = OrbTable {
            name: "tight".to_string(),
            bound: OrbBound::Inclusive,
            rules: vec![OrbRule { kind: AspectKind::Trine, max_orb: 1.0 }],
        };
        let profile = ProfileBuilder::new()
            .with_detector(AspectDetector::new(tight))
            .build(&chart())
            .unwrap();
        // only sun / mars at 119.6 survives a 1 degree trine
        assert_eq!(profile.aspects.len(), 1);
        assert_eq!(profile.aspects[0].aspect.body_a, CelestialBody::Sun);
        assert_eq!(profile.aspects[0].aspect.body_b, CelestialBody::Mars);
    }
}
