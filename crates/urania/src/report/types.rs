use crate::aspects::types::{AspectKind, AspectMatch};
use crate::narrative::TransitNarrative;
use crate::western::bodies::CelestialBody;
use crate::western::signs::ZodiacSign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A body placed in the natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub body: CelestialBody,
    pub sign: ZodiacSign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    /// Whole degrees within the sign (0-29)
    pub degree: u8,
    /// Ecliptic longitude (0-360)
    pub longitude: f64,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalAspect {
    #[serde(flatten)]
    pub aspect: AspectMatch,
    pub description: String,
}

impl NatalAspect {
    pub fn new(aspect: AspectMatch) -> Self {
        let dynamic = match aspect.kind {
            AspectKind::Trine | AspectKind::Sextile => "harmony",
            _ => "friction",
        };
        let description = format!(
            "{} {} {}: This creates a dynamic of {}.",
            aspect.body_a.label(),
            aspect.kind,
            aspect.body_b.label(),
            dynamic
        );
        Self { aspect, description }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalProfile {
    pub sun: Placement,
    pub moon: Placement,
    pub rising: Placement,
    /// Every resolvable body, angles included, in canonical order
    pub placements: Vec<Placement>,
    pub aspects: Vec<NatalAspect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    /// Hand-written interpretation
    Major,
    /// Template synthesis
    General,
    /// No active transits
    Calm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    /// `"<transiting>-<natal>"`, or `"default"` for the calm fallback
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transiting: Option<CelestialBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natal: Option<CelestialBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<AspectMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transiting_house: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natal_house: Option<u8>,
    pub duration: String,
    #[serde(flatten)]
    pub narrative: TransitNarrative,
    pub category: EventCategory,
}

impl TransitEvent {
    /// The single event reported when nothing is in orb.
    pub fn calm() -> Self {
        Self {
            id: "default".to_string(),
            transiting: None,
            natal: None,
            aspect: None,
            transiting_house: None,
            natal_house: None,
            duration: "Today".to_string(),
            narrative: TransitNarrative {
                summary: "Clear Skies".to_string(),
                happening: "No major planetary storms impacting you primarily right now.".to_string(),
                focus: "Peace & Calm".to_string(),
                impact: "Enjoy the tranquility.".to_string(),
                forecast: None,
                advice: None,
            },
            category: EventCategory::Calm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTransitReport {
    pub events: Vec<TransitEvent>,
    pub daily_summary: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectTone;

    #[test]
    fn test_natal_aspect_description() {
        let aspect = AspectMatch {
            body_a: CelestialBody::Sun,
            body_b: CelestialBody::NorthNode,
            kind: AspectKind::Trine,
            tone: AspectTone::Flowing,
            separation: 121.0,
            orb: 8.0,
            deviation: 1.0,
        };
        let natal = NatalAspect::new(aspect.clone());
        assert_eq!(natal.description, "Sun Trine North Node: This creates a dynamic of harmony.");

        let conjunction = NatalAspect::new(AspectMatch { kind: AspectKind::Conjunction, ..aspect });
        assert!(conjunction.description.ends_with("friction."));
    }

    #[test]
    fn test_calm_event_serializes_flat() {
        let value = serde_json::to_value(TransitEvent::calm()).unwrap();
        assert_eq!(value["id"], "default");
        assert_eq!(value["summary"], "Clear Skies");
        assert_eq!(value["category"], "Calm");
        assert!(value.get("aspect").is_none());
        assert!(value.get("advice").is_none());
    }
}
