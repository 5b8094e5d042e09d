use crate::western::bodies::CelestialBody;
use crate::western::houses::{parse_house_label, HouseCusp};
use crate::western::signs::ZodiacSign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// House assignment as delivered by the ephemeris: a number or an ordinal word.
///
/// Any JSON number is accepted so a bad house never rejects the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HouseLabel {
    Number(f64),
    Label(String),
}

impl HouseLabel {
    /// Numeric house id, `None` when the label is not a known house.
    /// Numbers must be whole and within 1-12.
    pub fn resolve(&self) -> Option<u8> {
        match self {
            HouseLabel::Number(n) if n.fract() == 0.0 && (1.0..=12.0).contains(n) => Some(*n as u8),
            HouseLabel::Number(_) => None,
            HouseLabel::Label(s) => parse_house_label(s).ok(),
        }
    }
}

/// Position of a single body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees (0-360)
    pub lon: f64,
    /// House the ephemeris assigned, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<HouseLabel>,
}

impl BodyPosition {
    pub fn new(lon: f64) -> Self {
        Self { lon, house: None }
    }

    pub fn in_house(lon: f64, house: u8) -> Self {
        Self {
            lon,
            house: Some(HouseLabel::Number(f64::from(house))),
        }
    }

    /// Sign for this longitude; `None` when the longitude is unusable.
    pub fn sign(&self) -> Option<ZodiacSign> {
        ZodiacSign::from_longitude(self.lon)
    }

    pub fn house_id(&self) -> Option<u8> {
        self.house.as_ref().and_then(HouseLabel::resolve)
    }
}

/// Everything the core needs from the ephemeris for one chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartPositions {
    /// Optional chart label ("natal", "transit")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Moment the positions were computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<DateTime<Utc>>,
    /// Body -> position. Unknown body ids are dropped while deserializing; when
    /// several keys name one body the canonical id wins, else the first alias
    /// in key order.
    #[serde(default, deserialize_with = "deserialize_bodies")]
    pub bodies: BTreeMap<CelestialBody, BodyPosition>,
    /// House cusps 1-12
    #[serde(default)]
    pub cusps: Vec<HouseCusp>,
}

impl ChartPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_body(mut self, body: CelestialBody, position: BodyPosition) -> Self {
        self.bodies.insert(body, position);
        self
    }

    pub fn with_cusps(mut self, cusps: Vec<HouseCusp>) -> Self {
        self.cusps = cusps;
        self
    }

    pub fn get(&self, body: CelestialBody) -> Option<&BodyPosition> {
        self.bodies.get(&body)
    }

    /// Position of a body only if it has a resolvable sign.
    pub fn resolved(&self, body: CelestialBody) -> Option<&BodyPosition> {
        self.get(body).filter(|p| p.sign().is_some())
    }
}

fn deserialize_bodies<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<CelestialBody, BodyPosition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, BodyPosition> = BTreeMap::deserialize(deserializer)?;
    let mut bodies = BTreeMap::new();
    let mut aliased = Vec::new();
    for (key, position) in raw {
        match key.parse::<CelestialBody>() {
            Ok(body) if key == body.id() => {
                bodies.insert(body, position);
            }
            Ok(body) => aliased.push((key, body, position)),
            Err(_) => log::debug!("Ephemeris input: ignoring unsupported body '{}'", key),
        }
    }
    for (key, body, position) in aliased {
        match bodies.entry(body) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(_) => {
                log::warn!("Ephemeris input: '{}' duplicates {}, keeping the earlier entry", key, body.id())
            }
        }
    }
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chart_with_aliases_and_labels() {
        let json = r#"{
            "label": "natal",
            "bodies": {
                "sun": { "lon": 135.0, "house": "Fifth" },
                "asc": { "lon": 12.5 },
                "North Node": { "lon": 200.0, "house": 7 },
                "lilith": { "lon": 10.0 }
            },
            "cusps": []
        }"#;
        let chart: ChartPositions = serde_json::from_str(json).unwrap();
        assert_eq!(chart.bodies.len(), 3);
        assert_eq!(chart.get(CelestialBody::Sun).unwrap().house_id(), Some(5));
        assert_eq!(chart.get(CelestialBody::NorthNode).unwrap().house_id(), Some(7));
        assert_eq!(chart.get(CelestialBody::Ascendant).unwrap().house_id(), None);
    }

    #[test]
    fn test_alias_collision_prefers_canonical_id() {
        let json = r#"{"bodies":{"ascendant":{"lon":10},"asc":{"lon":200},"rising":{"lon":300}}}"#;
        for _ in 0..50 {
            let chart: ChartPositions = serde_json::from_str(json).unwrap();
            assert_eq!(chart.bodies.len(), 1);
            assert_eq!(chart.get(CelestialBody::Ascendant).unwrap().lon, 10.0);
        }
    }

    #[test]
    fn test_alias_collision_without_canonical_takes_first_key() {
        let json = r#"{"bodies":{"rising":{"lon":300},"asc":{"lon":200},"North Node":{"lon":5},"node":{"lon":6}}}"#;
        let chart: ChartPositions = serde_json::from_str(json).unwrap();
        assert_eq!(chart.get(CelestialBody::Ascendant).unwrap().lon, 200.0);
        assert_eq!(chart.get(CelestialBody::NorthNode).unwrap().lon, 5.0);
    }

    #[test]
    fn test_out_of_range_house_number_is_unknown() {
        assert_eq!(HouseLabel::Number(13.0).resolve(), None);
        assert_eq!(HouseLabel::Number(12.0).resolve(), Some(12));
        assert_eq!(HouseLabel::Label("Ninth".into()).resolve(), Some(9));
    }

    #[test]
    fn test_odd_house_numbers_do_not_reject_chart() {
        let json = r#"{"bodies":{
            "sun": { "lon": 10, "house": 300 },
            "moon": { "lon": 20, "house": -1 },
            "mars": { "lon": 30, "house": 5.0 },
            "venus": { "lon": 40, "house": 2.5 }
        }}"#;
        let chart: ChartPositions = serde_json::from_str(json).unwrap();
        assert_eq!(chart.get(CelestialBody::Sun).unwrap().house_id(), None);
        assert_eq!(chart.get(CelestialBody::Moon).unwrap().house_id(), None);
        assert_eq!(chart.get(CelestialBody::Mars).unwrap().house_id(), Some(5));
        assert_eq!(chart.get(CelestialBody::Venus).unwrap().house_id(), None);
    }

    #[test]
    fn test_builder_sets_label() {
        let chart = ChartPositions::new().with_label("transit");
        assert_eq!(chart.label.as_deref(), Some("transit"));
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["label"], "transit");
    }

    #[test]
    fn test_resolved_requires_finite_longitude() {
        let chart = ChartPositions::new()
            .with_body(CelestialBody::Sun, BodyPosition::new(f64::NAN))
            .with_body(CelestialBody::Moon, BodyPosition::new(42.0));
        assert!(chart.resolved(CelestialBody::Sun).is_none());
        assert!(chart.resolved(CelestialBody::Moon).is_some());
    }
}
