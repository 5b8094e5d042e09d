//! Narrative bundle for one transiting body aspecting one natal body.

use super::selector::{select, Category};
use super::tables::{self, CuratedTransit};
use super::{fill, house_theme, ordinal};
use crate::aspects::types::AspectKind;
use crate::western::bodies::CelestialBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAreaForecast {
    pub love: String,
    pub career: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAdvice {
    #[serde(rename = "do")]
    pub do_this: String,
    pub dont: String,
    pub self_care: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitNarrative {
    pub summary: String,
    pub happening: String,
    pub focus: String,
    /// House overlay text
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<LifeAreaForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<ActionAdvice>,
}

/// Where a narrative bundle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeSource {
    Curated,
    Template,
}

/// "Mars (in your 10th house of Career) is visiting your sun (...)".
pub fn house_overlay(transiting: CelestialBody, t_house: u8, natal: CelestialBody, n_house: u8) -> String {
    let t_theme = house_theme(t_house);
    let n_theme = house_theme(n_house);
    format!(
        "{} (in your {} house of {}) is visiting your {} (in your {} house of {}). This mixes up {} with {}.",
        transiting.label(),
        ordinal(t_house as u32),
        t_theme,
        natal.label().to_lowercase(),
        ordinal(n_house as u32),
        n_theme,
        t_theme,
        n_theme,
    )
}

fn pick<'a>(t: CelestialBody, n: CelestialBody, category: Category, candidates: &'a [&'a str]) -> &'a str {
    select(t.id(), n.id(), category, candidates).copied().unwrap_or_default()
}

fn summary(t: CelestialBody, kind: AspectKind, n: CelestialBody) -> String {
    let list: &[&str] = if kind.is_challenging() {
        &tables::SUMMARY_CHALLENGING
    } else {
        &tables::SUMMARY_HARMONIOUS
    };
    fill(pick(t, n, Category::Summary, list), &[("T", t.label()), ("N", n.label())])
}

fn happening(t: CelestialBody, kind: AspectKind, n: CelestialBody) -> String {
    let list: &[&str] = if kind.is_challenging() {
        &tables::HAPPENING_CHALLENGING
    } else {
        &tables::HAPPENING_HARMONIOUS
    };
    let t_lower = t.label().to_lowercase();
    let n_lower = n.label().to_lowercase();
    let t_desc = tables::key_trait(t).unwrap_or(&t_lower);
    let n_desc = tables::key_trait(n).unwrap_or(&n_lower);
    fill(
        pick(t, n, Category::Happening, list),
        &[
            ("T", t.label()),
            ("N", n.label()),
            ("t_desc", t_desc),
            ("n_desc", n_desc),
            ("t", &t_lower),
            ("n", &n_lower),
        ],
    )
}

fn focus(t: CelestialBody, n: CelestialBody) -> String {
    let t_trait = tables::focus_trait(t).unwrap_or(tables::FOCUS_FALLBACK_TRANSITING);
    let n_trait = tables::focus_trait(n).unwrap_or(tables::FOCUS_FALLBACK_NATAL);
    fill(
        pick(t, n, Category::Focus, &tables::FOCUS_TEMPLATES),
        &[
            ("T", t.label()),
            ("N", n.label()),
            ("t_trait", t_trait),
            ("n_trait", n_trait),
            ("t", &t.label().to_lowercase()),
            ("n", &n.label().to_lowercase()),
        ],
    )
}

fn forecast(t: CelestialBody, kind: AspectKind, n: CelestialBody) -> Option<LifeAreaForecast> {
    let entry = tables::FORECASTS
        .get(&t)
        .or_else(|| tables::FORECASTS.get(&CelestialBody::Sun))?;
    let options = if kind.is_challenging() {
        &entry.challenging
    } else {
        &entry.harmonious
    };
    Some(LifeAreaForecast {
        love: pick(t, n, Category::Forecast, &options.love).to_string(),
        career: pick(t, n, Category::Forecast, &options.career).to_string(),
    })
}

fn self_care(t: CelestialBody, n: CelestialBody) -> String {
    let tips: &[&str] = match tables::SELF_CARE_TIPS.get(&t) {
        Some(tips) => tips,
        None => &tables::SELF_CARE_FALLBACK,
    };
    pick(t, n, Category::SelfCare, tips).to_string()
}

fn advice(t: CelestialBody, kind: AspectKind, n: CelestialBody) -> ActionAdvice {
    let (dos, donts): (&[&str], &[&str]) = if kind.is_challenging() {
        (&tables::ACTION_DOS_CHALLENGING, &tables::ACTION_DONTS_CHALLENGING)
    } else {
        (&tables::ACTION_DOS_HARMONIOUS, &tables::ACTION_DONTS_HARMONIOUS)
    };
    ActionAdvice {
        do_this: pick(t, n, Category::Action, dos).to_string(),
        dont: pick(t, n, Category::Action, donts).to_string(),
        self_care: self_care(t, n),
    }
}

fn from_curated(entry: &CuratedTransit, t_house: u8, n_house: u8) -> TransitNarrative {
    let impact = fill(
        entry.impact,
        &[
            ("th", &ordinal(t_house as u32)),
            ("nh", &ordinal(n_house as u32)),
            ("t_theme", house_theme(t_house)),
            ("n_theme", house_theme(n_house)),
        ],
    );
    TransitNarrative {
        summary: entry.summary.to_string(),
        happening: entry.happening.to_string(),
        focus: entry.focus.to_string(),
        impact,
        forecast: None,
        advice: Some(ActionAdvice {
            do_this: entry.do_this.to_string(),
            dont: entry.dont.to_string(),
            self_care: entry.self_care.to_string(),
        }),
    }
}

/// Build the narrative for `transiting kind natal`.
///
/// A curated entry for the exact triple replaces the whole template bundle.
pub fn compose_transit(
    transiting: CelestialBody,
    kind: AspectKind,
    natal: CelestialBody,
    t_house: u8,
    n_house: u8,
) -> (TransitNarrative, NarrativeSource) {
    if let Some(entry) = tables::CURATED_TRANSITS.get(&(transiting, kind, natal)) {
        return (from_curated(entry, t_house, n_house), NarrativeSource::Curated);
    }

    let narrative = TransitNarrative {
        summary: summary(transiting, kind, natal),
        happening: happening(transiting, kind, natal),
        focus: focus(transiting, natal),
        impact: house_overlay(transiting, t_house, natal, n_house),
        forecast: forecast(transiting, kind, natal),
        advice: Some(advice(transiting, kind, natal)),
    };
    (narrative, NarrativeSource::Template)
}
