//! Daily transit report: transiting slow movers against natal personal points.

use super::duration::DurationEstimate;
use super::settings::ReportSettings;
use super::types::{DailyTransitReport, EventCategory, TransitEvent};
use crate::aspects::calculator::AspectDetector;
use crate::ephemeris::types::ChartPositions;
use crate::narrative::{compose_transit, daily_summary, NarrativeSource};
use crate::western::houses::locate_house;
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct TransitReportBuilder {
    settings: ReportSettings,
    detector: AspectDetector,
    seed: Option<u64>,
}

impl Default for TransitReportBuilder {
    fn default() -> Self {
        Self::new(ReportSettings::default())
    }
}

impl TransitReportBuilder {
    pub fn new(settings: ReportSettings) -> Self {
        Self {
            settings,
            detector: AspectDetector::transit(),
            seed: None,
        }
    }

    /// Fix the daily-summary seed. Without it a fresh random seed is drawn per report.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// All events in scan order, before truncation.
    pub fn scan(&self, transit: &ChartPositions, natal: &ChartPositions) -> Vec<TransitEvent> {
        let mut events = Vec::new();

        for &t_body in &self.settings.transiting {
            let Some(t_pos) = transit.resolved(t_body) else {
                log::debug!("Transits: no position for transiting {}, skipping", t_body.id());
                continue;
            };
            let t_house = locate_house(t_pos.lon, &natal.cusps);

            for &n_body in &self.settings.natal_references {
                let Some(n_pos) = natal.resolved(n_body) else {
                    log::debug!("Transits: no natal position for {}, skipping", n_body.id());
                    continue;
                };
                let Some(aspect) = self.detector.match_bodies(t_body, t_pos.lon, n_body, n_pos.lon) else {
                    continue;
                };
                let n_house = n_pos.house_id().unwrap_or(1);
                let (narrative, source) = compose_transit(t_body, aspect.kind, n_body, t_house, n_house);
                let category = match source {
                    NarrativeSource::Curated => EventCategory::Major,
                    NarrativeSource::Template => EventCategory::General,
                };

                events.push(TransitEvent {
                    id: format!("{}-{}", t_body.id(), n_body.id()),
                    transiting: Some(t_body),
                    natal: Some(n_body),
                    duration: DurationEstimate::from_orb(t_body, aspect.orb).to_string(),
                    aspect: Some(aspect),
                    transiting_house: Some(t_house),
                    natal_house: Some(n_house),
                    narrative,
                    category,
                });
            }
        }

        events
    }

    /// Never fails: with nothing in orb the report holds the calm event.
    pub fn build(&self, transit: &ChartPositions, natal: &ChartPositions) -> DailyTransitReport {
        let mut events = self.scan(transit, natal);
        let found = events.len();
        if events.is_empty() {
            events.push(TransitEvent::calm());
        }
        events.truncate(self.settings.max_events.max(1));

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("Transits: {} active, reporting {}", found, events.len());

        DailyTransitReport {
            events,
            daily_summary: daily_summary(seed),
            generated_at: Utc::now(),
        }
    }
}

/// Daily report with the default settings. Natal cusps come from `natal`.
pub fn build_transit_report(transit: &ChartPositions, natal: &ChartPositions) -> DailyTransitReport {
    TransitReportBuilder::default().build(transit, natal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::AspectKind;
    use crate::ephemeris::types::BodyPosition;
    use crate::western::bodies::CelestialBody;
    use crate::western::houses::whole_sign_cusps;

    fn natal() -> ChartPositions {
        ChartPositions::new()
            .with_body(CelestialBody::Sun, BodyPosition::in_house(100.0, 4))
            .with_body(CelestialBody::Moon, BodyPosition::new(200.0))
            .with_body(CelestialBody::Ascendant, BodyPosition::new(10.0))
            .with_cusps(whole_sign_cusps(10.0))
    }

    #[test]
    fn test_saturn_square_sun_is_major() {
        let transit = ChartPositions::new().with_body(CelestialBody::Saturn, BodyPosition::new(12.0));
        let report = TransitReportBuilder::default().with_seed(1).build(&transit, &natal());
        assert_eq!(report.events.len(), 1);
        let event = &report.events[0];
        assert_eq!(event.id, "saturn-sun");
        assert_eq!(event.category, EventCategory::Major);
        assert_eq!(event.aspect.as_ref().map(|a| a.kind), Some(AspectKind::Square));
        assert_eq!(event.transiting_house, Some(1));
        assert_eq!(event.natal_house, Some(4));
        assert_eq!(event.duration, "Around for 5 months");
    }

    #[test]
    fn test_missing_natal_house_defaults_to_first() {
        let transit = ChartPositions::new().with_body(CelestialBody::Jupiter, BodyPosition::new(200.0));
        let report = TransitReportBuilder::default().with_seed(1).build(&transit, &natal());
        let event = &report.events[0];
        assert_eq!(event.id, "jupiter-moon");
        assert_eq!(event.natal_house, Some(1));
        assert_eq!(event.category, EventCategory::General);
    }

    #[test]
    fn test_calm_fallback() {
        let transit = ChartPositions::new().with_body(CelestialBody::Mars, BodyPosition::new(150.0));
        let report = build_transit_report(&transit, &natal());
        assert_eq!(report.events, vec![TransitEvent::calm()]);
    }

    #[test]
    fn test_truncates_to_max_events() {
        // every transiting body conjunct the natal sun and venus
        let mut transit = ChartPositions::new();
        for body in ReportSettings::default().transiting {
            transit = transit.with_body(body, BodyPosition::new(101.0));
        }
        let natal = natal().with_body(CelestialBody::Venus, BodyPosition::new(102.0));
        let builder = TransitReportBuilder::default().with_seed(3);
        assert_eq!(builder.scan(&transit, &natal).len(), 12);
        let report = builder.build(&transit, &natal);
        assert_eq!(report.events.len(), 5);
        assert_eq!(report.events[0].id, "mars-sun");
        assert_eq!(report.events[1].id, "mars-venus");
        assert_eq!(report.events[2].id, "jupiter-sun");
    }

    #[test]
    fn test_custom_settings_limit_scan() {
        let settings = ReportSettings {
            max_events: 2,
            transiting: vec![CelestialBody::Saturn],
            ..ReportSettings::default()
        };
        let builder = TransitReportBuilder::new(settings);
        assert_eq!(builder.settings().max_events, 2);
        assert_eq!(builder.settings().transiting, vec![CelestialBody::Saturn]);

        // jupiter is out of the configured transiting list
        let transit = ChartPositions::new()
            .with_body(CelestialBody::Saturn, BodyPosition::new(12.0))
            .with_body(CelestialBody::Jupiter, BodyPosition::new(200.0));
        let ids: Vec<_> = builder.scan(&transit, &natal()).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["saturn-sun".to_string()]);
    }

    #[test]
    fn test_seeded_summary_is_stable() {
        let transit = ChartPositions::new();
        let a = TransitReportBuilder::default().with_seed(9).build(&transit, &natal());
        let b = TransitReportBuilder::default().with_seed(9).build(&transit, &natal());
        assert_eq!(a.daily_summary, b.daily_summary);
    }
}
